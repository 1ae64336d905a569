use serde_json::json;

/// Returns the JSON schema for substitution LLM responses
pub fn get_substitutions_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "substitutions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient": { "type": "string" },
                        "quantity": {
                            "type": "object",
                            "properties": {
                                "amount": { "type": "number" },
                                "measurement": { "type": "string" }
                            },
                            "required": ["amount", "measurement"]
                        },
                        "conversion_ratio": { "type": "number" }
                    },
                    "required": ["ingredient"]
                }
            }
        },
        "required": ["substitutions"]
    })
}

/// Returns the JSON schema for pairing LLM responses
pub fn get_pairings_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "pairings": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "reason": { "type": "string" }
                    },
                    "required": ["name"]
                }
            }
        },
        "required": ["pairings"]
    })
}

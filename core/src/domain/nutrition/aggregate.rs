//! Pairwise combinators for optional nutrient fields.
//!
//! Absence (`None`) means "unknown", never zero. Combining two absent values
//! stays absent; a present value treats an absent partner as zero. All
//! combinators are associative and commutative (within rounding tolerance)
//! so folds over ingredient lists are order-independent.

/// Decimal places kept for fractional nutrient amounts (grams/mg/mcg).
const NUTRIENT_PRECISION: f64 = 100.0;

pub fn round_nutrient(value: f64) -> f64 {
    (value * NUTRIENT_PRECISION).round() / NUTRIENT_PRECISION
}

/// Sum of two optional fractional amounts, rounded to two decimal places.
pub fn sum_f64_optional(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        _ => Some(round_nutrient(a.unwrap_or(0.0) + b.unwrap_or(0.0))),
    }
}

/// Sum of two optional integers. No rounding applies.
pub fn sum_int_optional<T>(a: Option<T>, b: Option<T>) -> Option<T>
where
    T: std::ops::Add<Output = T> + Default + Copy,
{
    match (a, b) {
        (None, None) => None,
        _ => Some(a.unwrap_or_default() + b.unwrap_or_default()),
    }
}

/// Deduplicated union of two optional lists. Empty inputs count as absent;
/// first-seen order is kept so repeated folds stay deterministic.
pub fn sum_set_optional<T>(a: Option<Vec<T>>, b: Option<Vec<T>>) -> Option<Vec<T>>
where
    T: PartialEq,
{
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();
    if a.is_empty() && b.is_empty() {
        return None;
    }
    let mut merged: Vec<T> = Vec::with_capacity(a.len() + b.len());
    for item in a.into_iter().chain(b) {
        if !merged.contains(&item) {
            merged.push(item);
        }
    }
    Some(merged)
}

/// Worse of two Nutri-Score letter grades (A best, E worst). Unrecognized
/// grades rank as E.
pub fn combine_grades_optional(a: Option<String>, b: Option<String>) -> Option<String> {
    fn rank(grade: &str) -> u8 {
        match grade.to_ascii_uppercase().as_str() {
            "A" => 1,
            "B" => 2,
            "C" => 3,
            "D" => 4,
            _ => 5,
        }
    }

    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(a.to_ascii_uppercase()),
        (None, Some(b)) => Some(b.to_ascii_uppercase()),
        (Some(a), Some(b)) => {
            if rank(&a) >= rank(&b) {
                Some(a.to_ascii_uppercase())
            } else {
                Some(b.to_ascii_uppercase())
            }
        }
    }
}

/// Rounded arithmetic mean of the collected scores, absent for an empty set.
pub fn mean_rounded(scores: &[i32]) -> Option<i32> {
    if scores.is_empty() {
        return None;
    }
    let sum: i32 = scores.iter().sum();
    Some((f64::from(sum) / scores.len() as f64).round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_f64_propagates_absence() {
        assert_eq!(sum_f64_optional(None, None), None);
        assert_eq!(sum_f64_optional(None, Some(5.0)), Some(5.0));
        assert_eq!(sum_f64_optional(Some(3.0), Some(4.0)), Some(7.0));
    }

    #[test]
    fn sum_f64_rounds_to_two_places() {
        assert_eq!(sum_f64_optional(Some(0.123), Some(0.123)), Some(0.25));
        assert_eq!(sum_f64_optional(Some(1.004), None), Some(1.0));
    }

    #[test]
    fn sum_f64_is_commutative_and_associative() {
        let (a, b, c) = (Some(1.25), None, Some(2.5));
        assert_eq!(sum_f64_optional(a, b), sum_f64_optional(b, a));
        assert_eq!(
            sum_f64_optional(sum_f64_optional(a, b), c),
            sum_f64_optional(a, sum_f64_optional(b, c)),
        );
    }

    #[test]
    fn sum_int_propagates_absence() {
        assert_eq!(sum_int_optional::<u32>(None, None), None);
        assert_eq!(sum_int_optional(None, Some(120_u32)), Some(120));
        assert_eq!(sum_int_optional(Some(2), Some(3)), Some(5));
    }

    #[test]
    fn sum_set_deduplicates() {
        let merged = sum_set_optional(
            Some(vec!["dairy", "nuts"]),
            Some(vec!["nuts", "gluten"]),
        );
        assert_eq!(merged, Some(vec!["dairy", "nuts", "gluten"]));
    }

    #[test]
    fn sum_set_treats_empty_as_absent() {
        assert_eq!(sum_set_optional::<&str>(Some(vec![]), None), None);
        assert_eq!(sum_set_optional::<&str>(Some(vec![]), Some(vec![])), None);
    }

    #[test]
    fn grades_keep_the_worst() {
        assert_eq!(
            combine_grades_optional(Some("b".into()), Some("D".into())),
            Some("D".into())
        );
        assert_eq!(combine_grades_optional(None, Some("a".into())), Some("A".into()));
        assert_eq!(combine_grades_optional(None, None), None);
    }

    #[test]
    fn mean_rounds_to_nearest() {
        assert_eq!(mean_rounded(&[2, 4]), Some(3));
        assert_eq!(mean_rounded(&[2, 3]), Some(3));
        assert_eq!(mean_rounded(&[]), None);
    }
}

pub mod cache;
pub mod mappers;
pub mod repositories;

pub use cache::InMemoryNutritionCache;
pub use repositories::nutrition_repository::PostgresNutritionRepository;

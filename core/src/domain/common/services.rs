/// Aggregate service container. Concrete repository types are chosen once in
/// `application::create_service`; every domain service trait is implemented on
/// this struct with the matching bounds.
#[derive(Debug, Clone)]
pub struct Service<R, I, N, C, H, L> {
    pub recipe_repository: R,
    pub ingredient_repository: I,
    pub nutrition_repository: N,
    pub nutrition_cache: C,
    pub health_check_repository: H,
    pub llm_client: L,
}

impl<R, I, N, C, H, L> Service<R, I, N, C, H, L> {
    pub fn new(
        recipe_repository: R,
        ingredient_repository: I,
        nutrition_repository: N,
        nutrition_cache: C,
        health_check_repository: H,
        llm_client: L,
    ) -> Self {
        Self {
            recipe_repository,
            ingredient_repository,
            nutrition_repository,
            nutrition_cache,
            health_check_repository,
            llm_client,
        }
    }
}

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealsnap API",
        description = "Cafeteria plate nutrition analysis"
    ),
    paths(
        crate::application::http::analysis::handlers::analyze_plate::analyze_plate,
        crate::application::http::health::health_check,
        crate::application::http::test::test_probe,
    )
)]
pub struct ApiDoc;

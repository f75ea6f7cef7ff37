use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};

/// OpenAPI document for every route in `routes::router`.
pub const OPENAPI_YAML: &str = include_str!("../../../openapi/swagger.yaml");

pub const SWAGGER_SPEC_PATH: &str = "/swagger.yaml";

pub async fn swagger_spec() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/yaml")],
        OPENAPI_YAML,
    )
}

/// Swagger UI page; assets come from the swagger-ui-dist CDN build.
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Car Fleet Management API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{url}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##,
        url = SWAGGER_SPEC_PATH
    ))
}

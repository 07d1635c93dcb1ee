//! Embedded Documentation UI Shell
//!
//! A static HTML page that loads Swagger UI and points it at
//! `/docs/json`. The core treats this as an opaque pass-through; when the
//! page is reached through an app's docs proxy, the proxy supplies the
//! port header on the JSON fetch.

use axum::response::Html;

const DOCS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>API Documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: '/docs/json',
        dom_id: '#swagger-ui',
      });
    };
  </script>
</body>
</html>
"#;

pub async fn docs_ui() -> Html<&'static str> {
    Html(DOCS_HTML)
}

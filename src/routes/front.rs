//! Front page route handler.
//!
//! Serves the single-page admin UI shell: a mount node the bundled
//! front-end attaches to, plus its script and style includes. All catalog
//! logic lives behind the API; this page carries none.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Windmill</title>
<link rel="stylesheet" href="/css/windmill-main.css">
<script defer src="/js/windmill-main.js"></script>
</head>
<body>
<div id="integration_windmill"></div>
</body>
</html>
"#;

/// Create the front page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(front_page))
}

/// Front page handler.
async fn front_page() -> Html<&'static str> {
    Html(SHELL)
}

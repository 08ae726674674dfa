//! Landing page with the shortening form.

use axum::response::Html;

const INDEX_PAGE: &str = include_str!("../../../static/index.html");

/// `GET /` - serves the HTML form that posts to `/generate`.
pub async fn front_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

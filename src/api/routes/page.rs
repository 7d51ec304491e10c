//! Dashboard Page Route
//!
//! Serves the single dashboard page from an embedded template. The
//! page carries the sidebar controls and draws the charts client-side
//! from the JSON endpoints.
//!
//! - GET / - The dashboard page

use axum::response::Html;

/// The dashboard page, embedded at compile time
const DASHBOARD_HTML: &str = include_str!("../../../templates/dashboard.html");

/// GET /
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_page_embeds_chart_containers() {
        let Html(body) = dashboard_page().await;
        assert!(body.contains("id=\"choropleth\""));
        assert!(body.contains("id=\"top-countries\""));
        assert!(body.contains("id=\"condition-share\""));
        assert!(body.contains("/api/v1/dashboard"));
    }
}

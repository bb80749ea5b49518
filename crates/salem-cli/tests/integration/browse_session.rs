use crate::common::browse;
use salem_client::MockFactSource;
use std::sync::Arc;

#[tokio::test]
async fn test_session_opens_on_cover() {
    let output = browse("", Arc::new(MockFactSource::without_text())).await;
    assert!(output.starts_with("Salem Recipe Book"));
    assert!(output.contains("5 recipes"));
}

#[tokio::test]
async fn test_open_and_scale_recipe() {
    let output = browse("open 1\n+\n", Arc::new(MockFactSource::without_text())).await;

    let pages: Vec<&str> = output.split("Shakshuka").collect();
    assert!(pages.len() >= 3, "recipe should render twice");
    assert!(output.contains("Servings: 2"));
    assert!(output.contains("Servings: 3"));
    assert!(output.contains("• ¾ tsp ground cumin"));
}

#[tokio::test]
async fn test_fact_request_shows_note() {
    let source = Arc::new(MockFactSource::with_fact("Popular across North Africa."));
    let output = browse("open 1\nfact\n", source.clone()).await;

    assert_eq!(source.call_count(), 1);
    assert!(output.contains("🌍 Popular across North Africa."));
}

#[tokio::test]
async fn test_failed_fact_shows_fallback() {
    let output = browse("open 0\nfact\n", Arc::new(MockFactSource::failing(503, "busy"))).await;
    assert!(output.contains("This beloved dish represents generations of culinary tradition."));
}

#[tokio::test]
async fn test_unknown_fragment_keeps_view() {
    let output = browse("open 2\ngo 99\n", Arc::new(MockFactSource::without_text())).await;
    assert_eq!(output.matches("Buttermilk Pancakes").count(), 2);
}

#[tokio::test]
async fn test_bad_input_is_reported_and_session_continues() {
    let output = browse("dance\nopen 3\nquit\nopen 4\n", Arc::new(MockFactSource::without_text()))
        .await;
    assert!(output.contains("unknown command 'dance'"));
    assert!(output.contains("Baklava"));
    assert!(!output.contains("Pho Bo"));
}

#[tokio::test]
async fn test_nav_panel_filter() {
    let output = browse("nav\nfilter soup\n", Arc::new(MockFactSource::without_text())).await;
    assert!(output.contains("── Recipes ──"));
    assert!(output.contains("(filter: soup)"));
}

//! Recommendation stage over the wire: Gemini-shaped HTTP responses,
//! fence stripping and photo resolution all exercised together.

use mealplan::images::ImageCatalog;
use mealplan::pipeline::fetch_recommendations;
use mealplan::GoogleProvider;

fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn fetches_and_enriches_a_batch() {
    let mut server = mockito::Server::new_async().await;
    let batch = r#"```json
[
  {"id":"d1","name":"西红柿炒鸡蛋","description":"酸甜开胃","tags":["快手菜"],"calories":"280大卡"},
  {"id":"d2","name":"清炒西兰花","description":"清淡","tags":["低脂"],"calories":"120大卡"}
]
```"#;
    let mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-flash:generateContent?key=fake_api_key",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(batch))
        .create();

    let provider = GoogleProvider::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "gemini-2.5-flash".to_string(),
    );
    let catalog = ImageCatalog::default();

    let dishes = fetch_recommendations(&provider, &catalog).await.unwrap();
    assert_eq!(dishes.len(), 2);
    // 鸡 outranks 蛋 and 西红柿 in the rule order, so the chicken photo wins
    assert!(dishes[0].image.contains("photo-1610057099443"));
    // No keyword matches, so the default photo applies
    assert!(dishes[1].image.contains("photo-1504674900247"));
    mock.assert();
}

#[tokio::test]
async fn missing_required_field_fails_closed() {
    let mut server = mockito::Server::new_async().await;
    // "calories" is required by the model; its absence is a parse error
    let batch = r#"[{"id":"d1","name":"x","description":"y","tags":[]}]"#;
    let mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-flash:generateContent?key=fake_api_key",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(batch))
        .create();

    let provider = GoogleProvider::with_base_url(
        "fake_api_key".to_string(),
        server.url(),
        "gemini-2.5-flash".to_string(),
    );

    let result = fetch_recommendations(&provider, &ImageCatalog::default()).await;
    assert!(result.is_err());
    mock.assert();
}

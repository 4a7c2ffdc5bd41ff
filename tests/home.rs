mod common;

use common::spawn_app;

#[tokio::test]
async fn home_returns_greeting() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.text().await.expect("Failed to read response body"),
        "Hello, DevOps with Flask!"
    );
}

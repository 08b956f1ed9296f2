use mockito::Matcher;
use providers::{BingProvider, GoogleProvider, ProviderError, SuggestionProvider};

#[tokio::test]
async fn google_sends_firefox_client_and_browser_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/complete/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("client".into(), "firefox".into()),
            Matcher::UrlEncoded("q".into(), "rust lang".into()),
        ]))
        .match_header("accept", "application/json")
        .match_header("accept-language", "en-US,en;q=0.9")
        .match_header("user-agent", Matcher::Regex("Chrome/91\\.0\\.4472\\.124".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["rust lang",["rust language","rust lang book"]]"#)
        .create_async()
        .await;

    let provider = GoogleProvider::new(server.url());
    let out = provider.suggest("rust lang").await.unwrap();
    assert_eq!(out, vec!["rust language", "rust lang book"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn bing_uses_osjson_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/osjson.aspx")
        .match_query(Matcher::UrlEncoded("query".into(), "coffee".into()))
        .with_status(200)
        .with_body(r#"["coffee",["coffee shop","coffee maker"],[],[]]"#)
        .create_async()
        .await;

    let provider = BingProvider::new(server.url());
    let out = provider.suggest("coffee").await.unwrap();
    assert_eq!(out, vec!["coffee shop", "coffee maker"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/complete/search")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let provider = GoogleProvider::new(server.url());
    match provider.suggest("x").await {
        Err(ProviderError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_shape_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/complete/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"["seed","not-a-list"]"#)
        .create_async()
        .await;

    let provider = GoogleProvider::new(server.url());
    let err = provider.suggest("seed").await.unwrap_err();
    assert!(matches!(err, ProviderError::UnexpectedShape(_)));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let provider = GoogleProvider::new("http://127.0.0.1:1");
    let err = provider.suggest("x").await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)));
}

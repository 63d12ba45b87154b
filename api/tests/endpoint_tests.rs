//! Path templates, query parameters and field projections per endpoint.

use medium_api::{FeedMode, MediumClient, MediumError, Reply};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MediumClient {
    MediumClient::with_base_url("test-api-key", server.uri())
}

async fn stub(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn only_query(server: &MockServer) -> Option<String> {
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    received[0].url.query().map(str::to_string)
}

#[tokio::test]
async fn user_id_lookup_projects_id_field() {
    let server = MockServer::start().await;
    stub(&server, "/user/id_for/someone", json!({"id": "abc123"})).await;

    let reply = client_for(&server).get_user_id("someone").await.unwrap();

    assert_eq!(reply, Reply::Data("abc123".to_string()));
}

#[tokio::test]
async fn user_id_lookup_without_id_is_parse_error() {
    let server = MockServer::start().await;
    stub(&server, "/user/id_for/someone", json!({"error": "nope"})).await;

    let err = client_for(&server).get_user_id("someone").await.unwrap_err();

    assert!(matches!(err, MediumError::Parse(_)));
}

#[tokio::test]
async fn projection_keeps_soft_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/publication/id_for/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let reply = client_for(&server).get_publication_id("ghost").await.unwrap();

    assert_eq!(reply.failure().map(|f| f.status), Some(404));
}

#[tokio::test]
async fn article_text_endpoints_project_their_fields() {
    let server = MockServer::start().await;
    stub(&server, "/article/a1/content", json!({"id": "a1", "content": "plain"})).await;
    stub(&server, "/article/a1/markdown", json!({"id": "a1", "markdown": "# md"})).await;
    stub(&server, "/article/a1/html", json!({"id": "a1", "html": "<p>hi</p>"})).await;
    stub(&server, "/publication/id_for/better-programming", json!({"publication_id": "d0b105d10f0a"})).await;
    let client = client_for(&server);

    assert_eq!(client.get_article_content("a1").await.unwrap(), Reply::Data("plain".into()));
    assert_eq!(client.get_article_markdown("a1").await.unwrap(), Reply::Data("# md".into()));
    assert_eq!(
        client.get_article_html("a1", None).await.unwrap(),
        Reply::Data("<p>hi</p>".into())
    );
    assert_eq!(
        client.get_publication_id("better-programming").await.unwrap(),
        Reply::Data("d0b105d10f0a".into())
    );
}

#[tokio::test]
async fn article_html_sends_fullpage_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article/a1/html"))
        .and(query_param("fullpage", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"html": "<html/>"})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server).get_article_html("a1", Some(true)).await.unwrap();

    assert_eq!(reply, Reply::Data("<html/>".into()));
}

#[tokio::test]
async fn followers_omits_absent_parameters() {
    let server = MockServer::start().await;
    stub(&server, "/user/u1/followers", json!({"followers": []})).await;

    client_for(&server).get_user_followers("u1", None, None).await.unwrap();

    assert_eq!(only_query(&server).await, None);
}

#[tokio::test]
async fn followers_sends_each_present_parameter_once() {
    let server = MockServer::start().await;
    stub(&server, "/user/u1/followers", json!({"followers": []})).await;

    client_for(&server)
        .get_user_followers("u1", Some(25), Some("f00d"))
        .await
        .unwrap();

    assert_eq!(only_query(&server).await.as_deref(), Some("count=25&after=f00d"));
}

#[tokio::test]
async fn empty_string_parameter_is_omitted() {
    let server = MockServer::start().await;
    stub(&server, "/user/u1/articles", json!({"associated_articles": []})).await;

    client_for(&server).get_user_articles("u1", Some("")).await.unwrap();

    assert_eq!(only_query(&server).await, None);
}

#[tokio::test]
async fn top_feeds_puts_mode_in_path() {
    let server = MockServer::start().await;
    stub(&server, "/topfeeds/programming/top_week", json!({"topfeeds": []})).await;

    client_for(&server)
        .get_top_feeds("programming", FeedMode::TopWeek, Some(0), Some(10))
        .await
        .unwrap();

    assert_eq!(only_query(&server).await.as_deref(), Some("after=0&count=10"));
}

#[tokio::test]
async fn archived_articles_sends_date_filters() {
    let server = MockServer::start().await;
    stub(&server, "/archived_articles/rust", json!({"archived_articles": []})).await;

    client_for(&server)
        .get_archived_articles("rust", Some(2023), Some(4), None)
        .await
        .unwrap();

    assert_eq!(only_query(&server).await.as_deref(), Some("year=2023&month=4"));
}

#[tokio::test]
async fn search_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/articles"))
        .and(query_param("query", "rust & wasm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": ["x"]})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server).search_articles("rust & wasm").await.unwrap();

    assert_eq!(reply, Reply::Data(json!({"articles": ["x"]})));
    assert_eq!(only_query(&server).await.as_deref(), Some("query=rust+%26+wasm"));
}

#[tokio::test]
async fn article_by_url_uses_extracted_id() {
    let server = MockServer::start().await;
    stub(&server, "/article/6e2475a6e38a", json!({"id": "6e2475a6e38a"})).await;

    let reply = client_for(&server)
        .get_article_by_url("https://medium.com/some-pub/my-title-6e2475a6e38a")
        .await
        .unwrap();

    assert_eq!(reply, Reply::Data(json!({"id": "6e2475a6e38a"})));
}

#[tokio::test]
async fn article_by_url_rejects_unusable_input_without_request() {
    let server = MockServer::start().await;

    let err = client_for(&server).get_article_by_url("not a url").await.unwrap_err();

    assert!(matches!(err, MediumError::InvalidInput(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn every_path_template_reaches_its_route() {
    let server = MockServer::start().await;
    let routes = [
        "/user/u1",
        "/user/u1/top_articles",
        "/user/u1/following",
        "/user/u1/interests",
        "/user/u1/lists",
        "/user/u1/publications",
        "/user/u1/books",
        "/user/u1/is_following/p1",
        "/article/a1/assets",
        "/article/a1/responses",
        "/article/a1/fans",
        "/article/a1/related",
        "/article/a1/recommended",
        "/publication/p1",
        "/publication/p1/articles",
        "/publication/p1/newsletter",
        "/publication/p1/editors",
        "/related_tags/rust",
        "/top_writers/rust",
        "/latestposts/rust",
        "/recommended_feed/rust",
        "/recommended_users/rust",
        "/list/l1",
        "/list/l1/responses",
        "/search/users",
        "/search/publications",
        "/search/lists",
        "/search/tags",
        "/tag/rust",
        "/list/l1/articles",
    ];
    for route in routes {
        stub(&server, route, json!({"route": route})).await;
    }
    let c = client_for(&server);

    let replies = vec![
        c.get_user_info("u1").await,
        c.get_user_top_articles("u1").await,
        c.get_user_following("u1", None).await,
        c.get_user_interests("u1").await,
        c.get_user_lists("u1").await,
        c.get_user_publications("u1").await,
        c.get_user_books("u1").await,
        c.is_user_following("u1", "p1").await,
        c.get_article_assets("a1").await,
        c.get_article_responses("a1").await,
        c.get_article_fans("a1").await,
        c.get_article_related("a1").await,
        c.get_article_recommended("a1").await,
        c.get_publication_info("p1").await,
        c.get_publication_articles("p1", None).await,
        c.get_publication_newsletter("p1").await,
        c.get_publication_editors("p1").await,
        c.get_related_tags("rust").await,
        c.get_top_writers("rust", None).await,
        c.get_latest_posts("rust").await,
        c.get_recommended_feed("rust", None).await,
        c.get_recommended_users("rust").await,
        c.get_list_info("l1").await,
        c.get_list_responses("l1").await,
        c.search_users("x").await,
        c.search_publications("x").await,
        c.search_lists("x").await,
        c.search_tags("x").await,
        c.get_tag_info("rust").await,
        c.get_list_articles("l1").await,
    ];

    for (route, reply) in routes.iter().zip(replies) {
        assert_eq!(reply.unwrap(), Reply::Data(json!({"route": route})), "route {}", route);
    }
}

//! Integration tests for the robots resolver
//!
//! These tests use wiremock to serve robots.txt documents and exercise the
//! resolver through the real HTTP transport.

use robots_resolver::config::{parse_config, Config, FetchConfig};
use robots_resolver::robots::{LoadStatus, PolicyCache, RobotsResolver};
use robots_resolver::transport::HttpTransport;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Host with port of the mock server, e.g. "127.0.0.1:12345"
fn host_of(server: &MockServer) -> String {
    server.address().to_string()
}

fn resolver() -> RobotsResolver<HttpTransport> {
    RobotsResolver::from_config(&Config::default()).expect("Failed to build resolver")
}

async fn serve_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_load_and_exclude() {
    init_tracing();
    let mock_server = MockServer::start().await;
    serve_robots(
        &mock_server,
        "# robots for test\nUser-agent: *\nDisallow: /private\nDisallow: /tmp/\n",
    )
    .await;

    let host = host_of(&mock_server);
    let policy = resolver().load_for_host(&host, None).await;

    assert_eq!(policy.status(), &LoadStatus::Parsed);
    assert_eq!(
        policy.document_url().map(Url::as_str),
        Some(format!("http://{}/robots.txt", host).as_str())
    );
    assert_eq!(
        policy.rules().as_slice(),
        &["/private".to_string(), "/tmp/".to_string()]
    );

    let excluded = Url::parse(&format!("{}/private/x", mock_server.uri())).unwrap();
    let allowed = Url::parse(&format!("{}/public", mock_server.uri())).unwrap();
    assert!(policy.is_excluded(&excluded));
    assert!(!policy.is_excluded(&allowed));
    assert!(!policy.is_path_excluded("/Private"));
}

#[tokio::test]
async fn test_identity_sent_as_user_agent() {
    init_tracing();
    let mock_server = MockServer::start().await;

    // Only a request carrying our identity gets the document
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header("user-agent", "MyBot"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nDisallow: /a\n\nUser-agent: MyBot\nDisallow: /b\n",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let policy = resolver()
        .load_for_host(&host_of(&mock_server), Some("MyBot"))
        .await;

    assert_eq!(policy.status(), &LoadStatus::Parsed);
    assert_eq!(policy.identity(), Some("MyBot"));
    assert!(policy.is_path_excluded("/b/x"));
    assert!(!policy.is_path_excluded("/a/x"));
}

#[tokio::test]
async fn test_missing_robots_is_unrestricted() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let policy = resolver().load_for_host(&host_of(&mock_server), None).await;

    assert!(policy.is_unreachable());
    assert!(policy.rules().is_empty());
    for path in ["/", "/private", "/anything?at=all"] {
        assert!(!policy.is_path_excluded(path));
    }
}

#[tokio::test]
async fn test_server_error_is_unrestricted() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(503).set_body_string("User-agent: *\nDisallow: /"))
        .mount(&mock_server)
        .await;

    let policy = resolver().load_for_host(&host_of(&mock_server), None).await;

    assert!(policy.is_unreachable());
    assert!(!policy.is_path_excluded("/"));
}

#[tokio::test]
async fn test_unreachable_host_is_unrestricted() {
    init_tracing();

    // Nothing listens on port 1
    let policy = resolver().load_for_host("127.0.0.1:1", Some("MyBot")).await;

    assert!(policy.is_unreachable());
    assert!(policy.rules().is_empty());
    assert!(!policy.is_path_excluded("/private"));
}

#[tokio::test]
async fn test_timeout_is_unrestricted() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nDisallow: /")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = parse_config("[fetch]\ntimeout-secs = 1\nconnect-timeout-secs = 1\n")
        .expect("Failed to parse config");
    let resolver = RobotsResolver::from_config(&config).expect("Failed to build resolver");
    let policy = resolver.load_for_host(&host_of(&mock_server), None).await;

    assert!(policy.is_unreachable());
    assert!(!policy.is_path_excluded("/"));
}

#[tokio::test]
async fn test_reload_replaces_rules() {
    init_tracing();
    let mock_server = MockServer::start().await;
    let host = host_of(&mock_server);
    let resolver = resolver();

    serve_robots(&mock_server, "User-agent: *\nDisallow: /old\nDisallow: /shared\n").await;
    let first = resolver.load_for_host(&host, None).await;
    assert!(first.is_path_excluded("/old"));

    mock_server.reset().await;
    serve_robots(&mock_server, "User-agent: *\nDisallow: /new\nDisallow: /shared\n").await;
    let second = resolver.load_for_host(&host, None).await;

    assert_eq!(
        second.rules().as_slice(),
        &["/new".to_string(), "/shared".to_string()]
    );
    assert!(!second.is_path_excluded("/old"));
}

#[tokio::test]
async fn test_latin1_document() {
    init_tracing();
    let mock_server = MockServer::start().await;

    // "Disallow: /caf\xe9" is not valid UTF-8
    let mut body = b"User-agent: *\nDisallow: /caf".to_vec();
    body.push(0xE9);
    body.extend_from_slice(b"\nDisallow: /ok\n");

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(&mock_server)
        .await;

    let policy = resolver().load_for_host(&host_of(&mock_server), None).await;

    assert_eq!(policy.status(), &LoadStatus::Parsed);
    assert_eq!(
        policy.rules().as_slice(),
        &["/caf%C3%A9".to_string(), "/ok".to_string()]
    );
    let url = Url::parse(&format!("{}/caf\u{e9}/menu", mock_server.uri())).unwrap();
    assert!(policy.is_excluded(&url));
}

#[tokio::test]
async fn test_redirect_is_followed() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/moved.txt", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/moved.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /x"))
        .mount(&mock_server)
        .await;

    let policy = resolver().load_for_host(&host_of(&mock_server), None).await;
    assert!(policy.is_path_excluded("/x"));

    // With redirects disabled the 301 is a failure
    let transport = HttpTransport::new(&FetchConfig {
        max_redirects: 0,
        ..FetchConfig::default()
    })
    .expect("Failed to build transport");
    let policy = RobotsResolver::new(transport)
        .load_for_host(&host_of(&mock_server), None)
        .await;
    assert!(policy.is_unreachable());
}

#[tokio::test]
async fn test_policy_cache_across_hosts() {
    init_tracing();
    let first_server = MockServer::start().await;
    let second_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /one"))
        .expect(1)
        .mount(&first_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&second_server)
        .await;

    let config = Config::default();
    let resolver = resolver();
    let mut cache = PolicyCache::new(config.refresh_interval());

    let first_host = host_of(&first_server);
    let second_host = host_of(&second_server);

    assert!(resolver
        .policy_for(&mut cache, &first_host, None)
        .await
        .is_path_excluded("/one"));
    assert!(!resolver
        .policy_for(&mut cache, &second_host, None)
        .await
        .is_path_excluded("/one"));

    // Served from the cache; the `expect(1)` above verifies no second fetch
    assert!(resolver
        .policy_for(&mut cache, &first_host, None)
        .await
        .is_path_excluded("/one"));
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn test_byte_order_mark_document() {
    init_tracing();
    let mock_server = MockServer::start().await;

    let mut body = vec![0xEF, 0xBB, 0xBF];
    body.extend_from_slice(b"User-agent: *\r\nDisallow: /private\r\n");

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(&mock_server)
        .await;

    let policy = resolver().load_for_host(&host_of(&mock_server), None).await;

    assert_eq!(policy.status(), &LoadStatus::Parsed);
    assert_eq!(policy.rules().as_slice(), &["/private".to_string()]);
    assert!(policy.is_path_excluded("/private/x"));
}

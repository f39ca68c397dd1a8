use std::time::Duration;

use solrjvm_adapter::{FetchError, SolrJvmAdapter, FIELD_MAPPINGS};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATS: &str = include_str!("fixtures/stats.json");

async fn solr_responding_with(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/solr/admin/metrics"))
        .and(query_param("group", "jvm"))
        .and(header("user-agent", "mackerel-plugin-solrjvm"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn adapter_for(server: &MockServer) -> SolrJvmAdapter {
    SolrJvmAdapter::builder()
        .endpoint(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_collect_from_fixture() {
    let server = solr_responding_with(ResponseTemplate::new(200).set_body_string(STATS)).await;

    let sample = adapter_for(&server).collect().await.unwrap();

    assert_eq!(sample.len(), FIELD_MAPPINGS.len());
    assert_eq!(sample.get("gc_count.young"), Some(12));
    assert_eq!(sample.get("gc_time.young"), Some(233));
    assert_eq!(sample.get("memory_used.total_max"), Some(536870911));
    assert_eq!(sample.get("memory_used.non_heap"), Some(81893296));
    assert_eq!(sample.get("memory_space.code_heap_non_n_methods"), Some(1272704));
    assert_eq!(sample.get("memory_space.metaspace"), Some(51115808));
    assert_eq!(sample.get("thread_count.all"), Some(41));
    assert_eq!(sample.get("thread_count.timedWaiting"), Some(15));
}

#[tokio::test]
async fn test_absent_fields_are_zero() {
    let body = r#"{"metrics":{"solr.jvm":{"gc.G1-Young-Generation.count": 12}}}"#;
    let server = solr_responding_with(ResponseTemplate::new(200).set_body_string(body)).await;

    let sample = adapter_for(&server).collect().await.unwrap();

    assert_eq!(sample.get("gc_count.young"), Some(12));
    for (key, value) in sample.iter() {
        if key != "gc_count.young" {
            assert_eq!(value, 0, "{} should default to zero", key);
        }
    }
}

#[tokio::test]
async fn test_empty_object_is_all_zero() {
    let server = solr_responding_with(ResponseTemplate::new(404).set_body_string("{}")).await;

    let sample = adapter_for(&server).collect().await.unwrap();

    assert_eq!(sample.len(), FIELD_MAPPINGS.len());
    assert!(sample.iter().all(|(_, v)| v == 0));
}

#[tokio::test]
async fn test_null_counter_is_zero() {
    let body = r#"{"metrics":{"solr.jvm":{"threads.count":41,"memory.total.max":null}}}
{}"#;
    let server = solr_responding_with(ResponseTemplate::new(200).set_body_string(body)).await;

    let sample = adapter_for(&server).collect().await.unwrap();

    assert_eq!(sample.len(), FIELD_MAPPINGS.len());
    assert_eq!(sample.get("thread_count.all"), Some(41));
    assert_eq!(sample.get("memory_used.total_max"), Some(0));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server =
        solr_responding_with(ResponseTemplate::new(200).set_body_string("Solr is starting")).await;

    let err = adapter_for(&server).collect().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_schema_mismatch_is_decode_error() {
    let body = r#"{"metrics":{"solr.jvm":{"threads.count":"41"}}}"#;
    let server = solr_responding_with(ResponseTemplate::new(200).set_body_string(body)).await;

    let err = adapter_for(&server).fetch().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Grab a free port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let adapter = SolrJvmAdapter::builder()
        .endpoint(format!("http://{}", addr))
        .build()
        .unwrap();

    let err = adapter.collect().await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(STATS)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let adapter = SolrJvmAdapter::builder()
        .endpoint(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = adapter.collect().await.unwrap_err();

    match err {
        FetchError::Network(msg) => assert!(msg.contains("timed out"), "{}", msg),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_zero_timeout_waits_for_response() {
    let body = r#"{"metrics":{"solr.jvm":{"threads.count":41}}}"#;
    let server = solr_responding_with(
        ResponseTemplate::new(200)
            .set_body_string(body)
            .set_delay(Duration::from_millis(200)),
    )
    .await;

    let adapter = SolrJvmAdapter::builder()
        .endpoint(server.uri())
        .timeout(Duration::ZERO)
        .build()
        .unwrap();

    let sample = adapter.collect().await.unwrap();

    assert_eq!(sample.get("thread_count.all"), Some(41));
}

#[tokio::test]
async fn test_unsupported_scheme_is_request_construction_error() {
    let adapter = SolrJvmAdapter::builder()
        .endpoint("ftp://127.0.0.1:8983")
        .build()
        .unwrap();

    let err = adapter.fetch().await.unwrap_err();

    assert!(matches!(err, FetchError::RequestConstruction(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_malformed_url_is_request_construction_error() {
    let adapter = SolrJvmAdapter::builder()
        .endpoint("127.0.0.1 8983")
        .build()
        .unwrap();

    let err = adapter.fetch().await.unwrap_err();

    assert!(matches!(err, FetchError::RequestConstruction(_)), "got {:?}", err);
}

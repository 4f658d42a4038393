use glossary_app::client::{ClientError, GlossaryClient};
use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn get_terms_sends_page_per_page_and_search() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/terms")
            .query_param("page", "2")
            .query_param("per_page", "5")
            .query_param("search", "graph");
        then.status(200).json_body(json!({
            "terms": [],
            "total": 0,
            "page": 2,
            "per_page": 5
        }));
    });

    let client = GlossaryClient::with_base_url(server.url("/api"));
    let listed = client.get_terms(2, 5, Some("graph")).await.unwrap();

    mock.assert();
    assert_eq!(listed["page"], 2);
}

#[tokio::test]
async fn get_terms_omits_an_empty_search() {
    let server = MockServer::start();
    let search_seen = server.mock(|when, then| {
        when.method(GET)
            .path("/api/terms")
            .query_param_exists("search");
        then.status(200).json_body(json!({ "terms": [] }));
    });

    let client = GlossaryClient::with_base_url(server.url("/api"));
    // Neither a missing nor an empty search may reach the query string;
    // both requests fall through the mock and fail, which is fine here.
    let none = client.get_terms(1, 10, None).await;
    let empty = client.get_terms(1, 10, Some("")).await;

    search_seen.assert_hits(0);
    assert!(none.is_err());
    assert!(empty.is_err());
}

#[tokio::test]
async fn create_term_forwards_the_body_unchanged() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/terms").json_body(json!({
            "term": "REST",
            "definition": "архитектурный стиль"
        }));
        then.status(200).json_body(json!({
            "id": 1,
            "term": "REST",
            "definition": "архитектурный стиль",
            "category": null,
            "related_terms": []
        }));
    });

    let client = GlossaryClient::with_base_url(server.url("/api"));
    let created = client
        .create_term(&json!({
            "term": "REST",
            "definition": "архитектурный стиль"
        }))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn update_term_puts_to_the_term_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/terms/7")
            .json_body(json!({ "definition": "новое" }));
        then.status(200).json_body(json!({
            "id": 7,
            "term": "REST",
            "definition": "новое",
            "category": null,
            "related_terms": []
        }));
    });

    let client = GlossaryClient::with_base_url(server.url("/api"));
    let updated = client
        .update_term(7, &json!({ "definition": "новое" }))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(updated["definition"], "новое");
}

#[tokio::test]
async fn search_terms_uses_the_path_segment_route() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/terms/search/graph");
        then.status(200).json_body(json!({
            "results": [],
            "query": "graph",
            "count": 0
        }));
    });

    let client = GlossaryClient::with_base_url(server.url("/api"));
    let found = client.search_terms("graph").await.unwrap();

    mock.assert();
    assert_eq!(found["count"], 0);
}

#[tokio::test]
async fn mutation_errors_prefer_the_detail_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/terms/9");
        then.status(404)
            .json_body(json!({ "detail": "Термин не найден" }));
    });

    let client = GlossaryClient::with_base_url(server.url("/api"));
    match client.delete_term(9).await {
        Err(ClientError::Rejected { status, detail }) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(detail, "Термин не найден");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn mutation_errors_fall_back_to_fixed_messages() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/terms");
        then.status(500).body("boom");
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/terms/3");
        // A structured detail (as validation errors produce) is not a
        // printable message, so the fallback applies as well.
        then.status(422)
            .json_body(json!({ "detail": [{ "loc": ["body", "term"] }] }));
    });

    let client = GlossaryClient::with_base_url(server.url("/api"));

    match client.create_term(&json!({ "term": "x" })).await {
        Err(ClientError::Rejected { detail, .. }) => {
            assert_eq!(detail, "Ошибка создания термина");
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    match client.update_term(3, &json!({ "term": "x" })).await {
        Err(ClientError::Rejected { detail, .. }) => {
            assert_eq!(detail, "Ошибка обновления термина");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn read_errors_stay_generic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/terms/8");
        then.status(500).body("oops");
    });

    let client = GlossaryClient::with_base_url(server.url("/api"));
    match client.get_term(8).await {
        Err(err @ ClientError::UnexpectedStatus { status }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.to_string(), "HTTP error: status 500 Internal Server Error");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failures_surface_as_transport_errors() {
    let client = GlossaryClient::with_base_url("http://127.0.0.1:9/api");
    assert!(matches!(
        client.health_check().await,
        Err(ClientError::Transport(_))
    ));
}

// API Integration Tests
//
// Drives the router end to end with a wiremock server standing in for SerpApi.
// Run with: cargo test --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use claim_chart::{create_router, AppConfig, AppState};
    use serde_json::Value;
    use std::io::{Cursor, Read};
    use tower::ServiceExt; // for oneshot
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

    // Helper: Create app pointed at the mock search service
    fn create_test_app(server: &MockServer) -> axum::Router {
        let config = AppConfig {
            api_key: "test-key".to_string(),
            search_base_url: server.uri(),
            company_name: "Acme Analytics".to_string(),
            ..AppConfig::default()
        };
        let state = AppState::new(config).expect("client should build");
        create_router(state)
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec()
    }

    async fn body_text(response: axum::response::Response) -> String {
        String::from_utf8(body_bytes(response).await).expect("Body should be UTF-8")
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn mount_search(server: &MockServer, results: Value) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("engine", "google_patents"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results))
            .mount(server)
            .await;
    }

    // =========================================================================
    // Section 1: Health Check and Index
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start().await;
        let app = create_test_app(&server);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_index_page_renders_search_form() {
        let server = MockServer::start().await;
        let app = create_test_app(&server);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("name=\"patent_number\""));
    }

    // =========================================================================
    // Section 2: Patent Lookup
    // =========================================================================

    #[tokio::test]
    async fn test_lookup_shows_record_and_claims() {
        let server = MockServer::start().await;
        mount_search(
            &server,
            serde_json::json!({
                "organic_results": [{
                    "patent_id": "patent/US1234567B2/en",
                    "publication_number": "US1234567B2",
                    "patent_link": "https://patents.google.com/patent/US1234567B2/en",
                    "grant_date": "2021-03-04"
                }]
            }),
        )
        .await;

        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("engine", "google_patents_details"))
            .and(query_param("patent_id", "patent/US1234567B2/en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "Motorised widget",
                "abstract": "A widget with a motor.",
                "assignees": ["Acme Corp"],
                "inventors": [{"name": "Jane Roe"}, {"name": "John Doe"}],
                "claims": [
                    "1. A widget comprising:\na frame;\na motor",
                    "2. The widget of claim 1, wherein the frame is steel."
                ],
                "priority_date": "2019-01-02"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app = create_test_app(&server);
        let response = app
            .oneshot(form_post("/", "patent_number=US1234567B2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Motorised widget"));
        assert!(html.contains("Jane Roe, John Doe"));
        assert!(html.contains("2021-03-04"), "Should show grant date from search");
        assert!(html.contains("N/A"), "Missing filing date should show placeholder");
        assert!(html.contains("action=\"/download_docx\""));
        assert_eq!(html.matches("name=\"claims[]\"").count(), 2);
    }

    #[tokio::test]
    async fn test_lookup_without_match_shows_message() {
        let server = MockServer::start().await;
        mount_search(&server, serde_json::json!({ "organic_results": [] })).await;

        Mock::given(method("GET"))
            .and(path("/search.json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let app = create_test_app(&server);
        let response = app
            .oneshot(form_post("/", "patent_number=US0000000"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("No patent found"));
        assert!(!html.contains("action=\"/download_docx\""));
    }

    #[tokio::test]
    async fn test_blank_query_skips_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let app = create_test_app(&server);
        let response = app.oneshot(form_post("/", "patent_number=++")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Please enter a patent number"));
    }

    #[tokio::test]
    async fn test_upstream_failure_renders_page_with_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let app = create_test_app(&server);
        let response = app
            .oneshot(form_post("/", "patent_number=US1234567B2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let html = body_text(response).await;
        assert!(html.contains("Patent lookup failed"), "Should show the failure on the page");
        assert!(html.contains("value=\"US1234567B2\""), "Should keep the submitted query");
        assert!(!html.contains("Invalid API key"), "Should not leak upstream body");
    }

    // =========================================================================
    // Section 3: Claim Chart Download
    // =========================================================================

    #[tokio::test]
    async fn test_download_returns_docx_attachment() {
        let server = MockServer::start().await;
        let app = create_test_app(&server);

        let body = "publication_number=US1234567B2\
            &title=Motorised+widget\
            &claims%5B%5D=12.+A+widget+comprising%3A%0Aa+frame%3B%0Aa+motor";
        let response = app.oneshot(form_post("/download_docx", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment;"));
        assert!(disposition.contains("filename=\"US1234567B2_claim_chart.docx\""));

        let bytes = body_bytes(response).await;
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();

        assert!(xml.contains("Acme Analytics"), "Cover should use configured company");
        assert!(xml.contains("12 A widget comprising:"));
        assert!(xml.contains("12.1 a frame;"));
        assert!(xml.contains("12.2 a motor;"));
    }

    #[tokio::test]
    async fn test_download_without_publication_number_uses_default_name() {
        let server = MockServer::start().await;
        let app = create_test_app(&server);

        let response = app.oneshot(form_post("/download_docx", "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.contains("Patent_claim_chart.docx"));
    }
}

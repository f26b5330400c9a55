//! Integration tests for padron-client.
//!
//! Lookups run against a stub backend served by axum on an ephemeral port,
//! answering `GET /persona/{id}` the way the real server does: a JSON record
//! with PascalCase keys, `404 persona no encontrada: ...` for unknown ids and
//! `500 oops` for internal failures.
//!
//! Run with:
//!   cargo test -p padron-client --test integration_tests

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use padron_client::{ClientConfig, ClientError, PadronClient};
use padron_core::{LookupError, PersonaLookup, SearchController, ViewState};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::watch;

async fn stub_persona(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "123456789" | "a b/c" => Json(json!({
            "Cedula": id.clone(),
            "Nombre": "ANA",
            "Apellido1": "MORA",
            "Apellido2": "SOTO",
            "Centro": "ESCUELA CENTRAL",
            "Direccion": "100 M NORTE DE LA IGLESIA",
            "Url": "https://maps.example/1",
            "Provincia": "SAN JOSE",
            "Canton": "CENTRAL",
            "Distrito": "CARMEN",
            "Mesa": "1234"
        }))
        .into_response(),
        "500000000" => (StatusCode::INTERNAL_SERVER_ERROR, "oops\n").into_response(),
        "666666666" => (StatusCode::OK, "not json").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            "persona no encontrada: sql: no rows in result set\n",
        )
            .into_response(),
    }
}

/// Start the stub backend and return its base URL.
async fn spawn_backend() -> String {
    let app = Router::new().route("/persona/:id", get(stub_persona));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client() -> PadronClient {
    PadronClient::new(ClientConfig::new(spawn_backend().await)).unwrap()
}

// ============================================================================
// Config tests (no backend required)
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_persona_url() {
        let config = ClientConfig::new("http://127.0.0.1:9000");
        assert_eq!(
            config.persona_url("123456789"),
            "http://127.0.0.1:9000/persona/123456789"
        );
    }

    #[test]
    fn test_persona_url_trims_trailing_slash() {
        let config = ClientConfig::new("http://padron.example/");
        assert_eq!(
            config.persona_url("123456789"),
            "http://padron.example/persona/123456789"
        );
    }

    #[test]
    fn test_persona_url_encodes_pass_through_input() {
        let config = ClientConfig::default();
        assert_eq!(
            config.persona_url("a b/c?d"),
            "http://localhost:8080/persona/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(ClientConfig::new("http://localhost").validate().is_ok());
        assert!(ClientConfig::new("https://padron.example").validate().is_ok());
        assert!(matches!(
            ClientConfig::new("").validate(),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("localhost:8080").validate(),
            Err(ClientError::Config(_))
        ));
        assert!(PadronClient::new(ClientConfig::new("ftp://x")).is_err());
    }
}

// ============================================================================
// Lookup tests (stub backend)
// ============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_persona_found() {
        let client = client().await;

        let persona = client.get_persona("123456789").await.unwrap();
        assert_eq!(persona.cedula, "123456789");
        assert_eq!(persona.full_name(), "ANA MORA SOTO");
        assert_eq!(persona.centro, "ESCUELA CENTRAL");
        assert_eq!(persona.mesa.as_deref(), Some("1234"));
    }

    #[tokio::test]
    async fn test_get_persona_not_found() {
        let client = client().await;

        let err = client.get_persona("999999999").await.unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.starts_with("persona no encontrada"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_error_mapping() {
        let client = client().await;

        assert!(matches!(
            client.find_persona("999999999").await,
            Err(LookupError::NotFound(_))
        ));
        assert!(matches!(
            client.find_persona("500000000").await,
            Err(LookupError::Status { status: 500, .. })
        ));
        assert!(matches!(
            client.find_persona("666666666").await,
            Err(LookupError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_pass_through_identity_reaches_backend_intact() {
        let client = client().await;

        let persona = client.get_persona("a b/c").await.unwrap();
        assert_eq!(persona.cedula, "a b/c");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PadronClient::new(ClientConfig::new(format!("http://{}", addr))).unwrap();
        assert!(matches!(
            client.find_persona("123456789").await,
            Err(LookupError::Transport(_))
        ));
    }
}

// ============================================================================
// Search controller over HTTP
// ============================================================================

mod search_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_normalizes_and_finds() {
        let (tx, rx) = watch::channel(ViewState::idle());
        let controller = SearchController::new(client().await, tx);

        let outcome = controller.search(" 01 2345 6789 ").await;
        let state = outcome.state().unwrap();
        assert!(state.is_found());
        assert_eq!(state.personas().len(), 1);
        assert_eq!(rx.borrow().personas()[0].cedula, "123456789");
    }

    #[tokio::test]
    async fn test_search_failure_clears_previous_result() {
        let (tx, rx) = watch::channel(ViewState::idle());
        let controller = SearchController::new(client().await, tx);

        controller.search("123456789").await;
        assert!(rx.borrow().is_found());

        controller.search("5-0-0").await;
        assert_eq!(*rx.borrow(), ViewState::not_found());

        controller.search("0500000000").await;
        assert_eq!(*rx.borrow(), ViewState::not_found());
    }
}

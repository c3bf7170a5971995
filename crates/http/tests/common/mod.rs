//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use listkeeper_core::{ClientConfig, MemoryTokenStore, Navigator, Route, Session};
use listkeeper_http::ApiClientFactory;
use std::sync::{Arc, Mutex, Once};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

/// What the client asked the presentation layer to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Notice(String),
    Navigate(Route),
}

#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn notify(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(NavEvent::Notice(message.to_string()));
    }

    fn navigate(&self, route: Route) {
        self.events.lock().unwrap().push(NavEvent::Navigate(route));
    }
}

static TRACING: Once = Once::new();

/// Route client logs through the test writer, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub struct Harness {
    pub server: MockServer,
    pub store: Arc<MemoryTokenStore>,
    pub session: Arc<Session>,
    pub navigator: Arc<RecordingNavigator>,
    pub factory: ApiClientFactory,
}

impl Harness {
    /// Start a mock backend with an empty session
    pub async fn start() -> Self {
        Self::start_with_store(MemoryTokenStore::new()).await
    }

    /// Start a mock backend with a token already in durable storage
    pub async fn start_with_token(token: &str) -> Self {
        Self::start_with_store(MemoryTokenStore::with_token(token)).await
    }

    async fn start_with_store(store: MemoryTokenStore) -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let store = Arc::new(store);
        let session = Arc::new(Session::new(store.clone()));
        let navigator = Arc::new(RecordingNavigator::default());
        let factory = ApiClientFactory::new(
            ClientConfig::with_server_url(server.uri()),
            session.clone(),
            navigator.clone(),
        )
        .unwrap();

        Self {
            server,
            store,
            session,
            navigator,
            factory,
        }
    }

    /// Authorization headers of every request the backend saw, in order
    pub async fn authorization_headers(&self) -> Vec<Option<String>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                request
                    .headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .collect()
    }
}

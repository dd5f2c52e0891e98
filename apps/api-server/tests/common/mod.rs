//! Seed/verify harness for the `/posts` API.
//!
//! Lifecycle per test: spawn a server over its own store, seed it, run one
//! scenario, wipe the store, stop the server.
//!
//! With `TEST_DATABASE_URL` set (environment or `.env`) the store is the
//! PostgreSQL test database, migrated beforehand. Tests then take turns on it.
//! Without it every test gets a private in-memory store and they run in
//! parallel.

#![allow(dead_code)]

use std::future::Future;
use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use tokio::sync::{Mutex, MutexGuard};

use api_server::AppState;
use api_server::config::{AppConfig, Environment};
use api_server::telemetry::init_test_telemetry;
use blogger_core::domain::Post;
use blogger_core::ports::PostStore;
use blogger_infra::InMemoryPostStore;
use blogger_testkit::{DEFAULT_SEED_SIZE, seed_posts, tear_down_store};

/// Serializes tests that share the test database.
static TEST_DATABASE: Mutex<()> = Mutex::const_new(());

/// A running server plus direct access to the store behind it.
#[derive(Clone)]
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub store: Arc<dyn PostStore>,
    server: ServerHandle,
    database_turn: Option<Arc<MutexGuard<'static, ()>>>,
}

impl TestApp {
    /// Suite setup: start a server on a random port over the test store.
    pub async fn spawn() -> Self {
        dotenvy::dotenv().ok();
        Self::spawn_from_config(&AppConfig::from_env()).await
    }

    /// Start over the test database `config` names, or a fresh in-memory
    /// store when it names none. An unreachable database aborts setup.
    pub async fn spawn_from_config(config: &AppConfig) -> Self {
        init_test_telemetry();

        let Some(database) = config.database_for(Environment::Test) else {
            return Self::spawn_with_store(Arc::new(InMemoryPostStore::new())).await;
        };

        let turn = TEST_DATABASE.lock().await;
        let state = AppState::connect(Some(database))
            .await
            .expect("Failed to connect to the test database");

        let mut app = Self::spawn_with_store(state.posts).await;
        app.database_turn = Some(Arc::new(turn));
        // Leftovers from an aborted run.
        app.teardown().await;
        app
    }

    pub async fn spawn_with_store(store: Arc<dyn PostStore>) -> Self {
        init_test_telemetry();

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        let port = listener
            .local_addr()
            .expect("Listener has no local address")
            .port();

        let server = api_server::run(listener, AppState::with_store(store.clone()))
            .expect("Failed to start server");
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            address: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            store,
            server: handle,
            database_turn: None,
        }
    }

    /// Per-scenario setup.
    pub async fn seed(&self, n: usize) -> Vec<Post> {
        seed_posts(self.store.as_ref(), n)
            .await
            .expect("Failed to seed posts")
    }

    /// Per-scenario teardown. The store must be empty afterwards.
    pub async fn teardown(&self) {
        let remaining = tear_down_store(self.store.as_ref())
            .await
            .expect("Failed to tear down store");
        assert_eq!(remaining, 0, "store not empty after teardown");
    }

    /// Suite teardown.
    pub async fn stop(self) {
        self.server.stop(true).await;
    }

    /// One full cycle: seed the default batch, run `scenario`, wipe, stop.
    pub async fn run<F, Fut>(scenario: F)
    where
        F: FnOnce(TestApp) -> Fut,
        Fut: Future<Output = ()>,
    {
        let app = Self::spawn().await;
        app.seed(DEFAULT_SEED_SIZE).await;
        scenario(app.clone()).await;
        app.teardown().await;
        app.stop().await;
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute GET")
    }

    pub async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute POST")
    }

    pub async fn put_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute PUT")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to execute DELETE")
    }

    /// Any stored post, read straight from the store.
    pub async fn any_post(&self) -> Post {
        self.store
            .find_one()
            .await
            .expect("find_one failed")
            .expect("store should hold at least one post")
    }
}

/// Assert the response declares a JSON body.
pub fn assert_json(response: &reqwest::Response) {
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "expected a JSON response, got content-type {:?}",
        content_type
    );
}

/// Assert a post representation carries exactly the public fields.
pub fn assert_post_keys(value: &serde_json::Value) {
    let object = value.as_object().expect("post should be a JSON object");
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["author", "content", "created", "id", "title"]);
}

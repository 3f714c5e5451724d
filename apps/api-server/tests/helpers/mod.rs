//! Test harness: spawns the real server against a fresh in-memory database
//! and drives the seed / exercise / teardown lifecycle.
//!
//! Every phase transition is awaited: migrations complete before the server
//! accepts traffic, seeding completes before a request is issued, and the
//! teardown drop is acknowledged before anything else touches the store.

use std::net::TcpListener;
use std::sync::Arc;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use api_server::state::AppState;
use migration::{Migrator, MigratorTrait};
use quill_core::domain::{Author, NewPost, Post};
use quill_core::ports::PostStore;
use quill_infra::{DatabaseConfig, SeaOrmPostStore};

/// A running server plus a store handle reading the same database, so
/// assertions can compare HTTP responses against ground truth.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub store: Arc<dyn PostStore>,
    server_handle: actix_web::dev::ServerHandle,
}

impl TestApp {
    /// Start the service against a fresh `sqlite::memory:` database.
    ///
    /// The pool is pinned to a single connection: every pooled sqlite
    /// connection gets its own in-memory database otherwise.
    pub async fn spawn() -> Self {
        let db = quill_infra::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        })
        .await
        .expect("failed to open in-memory database");

        Migrator::up(&db, None).await.expect("migrations failed");

        let store: Arc<dyn PostStore> = Arc::new(SeaOrmPostStore::new(db));
        let state = AppState::with_store(store.clone());

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let server = api_server::run(listener, state).expect("failed to start server");
        let server_handle = server.handle();
        tokio::spawn(server);

        Self {
            address,
            client: reqwest::Client::new(),
            store,
            server_handle,
        }
    }

    /// Insert `n` synthetic posts directly through the store and return the
    /// committed records.
    pub async fn seed_posts(&self, n: usize) -> Vec<Post> {
        let new_posts = (0..n).map(|_| generate_new_post()).collect();
        self.store.insert_many(new_posts).await.expect("seeding failed")
    }

    /// Drop every record, awaiting the store's acknowledgment. The next
    /// seed must never start while a teardown is still in flight.
    pub async fn teardown(&self) {
        self.store.drop_all().await.expect("teardown drop failed");
    }

    /// Gracefully stop the server.
    pub async fn shutdown(self) {
        self.server_handle.stop(true).await;
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn post_json(&self, path: &str, body: &impl Serialize) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    pub async fn put_json(&self, path: &str, body: &impl Serialize) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("PUT request failed")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("DELETE request failed")
    }
}

const TITLE_WORDS: &[&str] = &[
    "Midnight", "Harbor", "Letters", "Field", "Notes", "Quiet", "Paper", "Season", "Maps",
    "Weather", "Arrival", "North",
];

const SENTENCES: &[&str] = &[
    "The ferry left before anyone noticed the fog rolling in.",
    "She kept the receipts in a shoebox labelled with the wrong year.",
    "Nobody remembered who planted the orchard behind the station.",
    "The lighthouse keeper wrote one line per day, no more.",
    "By autumn the path had disappeared under the leaves entirely.",
    "The printing press in the basement still smelled of ink.",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Barbara", "Donald", "Radia", "Niklaus", "Edsger",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Liskov", "Knuth", "Perlman", "Wirth", "Dijkstra",
];

/// Randomized realistic post data, one record per call.
pub fn generate_new_post() -> NewPost {
    let mut rng = rand::rng();

    let title_words = rng.random_range(2..=4);
    let title = (0..title_words)
        .map(|_| *TITLE_WORDS.choose(&mut rng).unwrap())
        .collect::<Vec<_>>()
        .join(" ");

    let sentence_count = rng.random_range(1..=3);
    let content = (0..sentence_count)
        .map(|_| *SENTENCES.choose(&mut rng).unwrap())
        .collect::<Vec<_>>()
        .join(" ");

    NewPost {
        title,
        content,
        author: Author {
            first_name: (*FIRST_NAMES.choose(&mut rng).unwrap()).to_string(),
            last_name: (*LAST_NAMES.choose(&mut rng).unwrap()).to_string(),
        },
    }
}

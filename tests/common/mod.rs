//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use coolfetch::fault::FaultInjector;
use coolfetch::fetch::{
    Endpoint, FetchController, FetchState, FetchStatus, HttpClient, StateObserver, TransportError,
};
use coolfetch::resources::{Music, Resource};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;

pub const MUSIC_URL: &str = "http://mock.local/api/music";

pub fn music_body(song: &str, album: &str, artist: &str) -> Value {
    json!({"songName": song, "album": album, "artist": artist})
}

pub fn status_error(status: u16) -> TransportError {
    TransportError::Status {
        url: MUSIC_URL.to_string(),
        status,
        body: "boom".to_string(),
    }
}

// -- HTTP doubles -------------------------------------------------------------

/// Returns queued results in order; counts calls.
#[derive(Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    urls: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with(responses: Vec<Result<Value, TransportError>>) -> Arc<Self> {
        let client = Self::default();
        client.responses.lock().extend(responses);
        Arc::new(client)
    }

    pub fn push(&self, response: Result<Value, TransportError>) {
        self.responses.lock().push_back(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().push(url.to_string());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(status_error(599)))
    }
}

/// Each call waits until the test releases its gate.
#[derive(Default)]
pub struct GatedClient {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<Value, TransportError>>>>,
}

impl GatedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Reserve the gate for the next call.
    pub fn gate(&self) -> oneshot::Sender<Result<Value, TransportError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back(rx);
        tx
    }
}

#[async_trait]
impl HttpClient for GatedClient {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        let gate = self.gates.lock().pop_front();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| {
                Err(TransportError::Timeout {
                    url: url.to_string(),
                    millis: 0,
                })
            }),
            None => Err(status_error(599)),
        }
    }
}

// -- Controller helpers -------------------------------------------------------

pub type Recorded<T> = Arc<Mutex<Vec<FetchState<T>>>>;

/// Observer that appends every applied state.
pub fn recorder<T: Clone + Send + Sync + 'static>() -> (StateObserver<T>, Recorded<T>) {
    let log: Recorded<T> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let observer: StateObserver<T> = Arc::new(move |state: &FetchState<T>| {
        sink.lock().push(state.clone());
    });
    (observer, log)
}

pub fn statuses<T>(log: &Recorded<T>) -> Vec<FetchStatus> {
    log.lock().iter().map(FetchState::status).collect()
}

pub fn music_controller(client: Arc<dyn HttpClient>) -> FetchController<Music> {
    FetchController::new(
        "music",
        Endpoint::new(MUSIC_URL, Arc::new(Music::schema())),
        client,
    )
}

pub fn track(song: &str, album: &str, artist: &str) -> Music {
    Music {
        song_name: song.to_string(),
        album: album.to_string(),
        artist: artist.to_string(),
    }
}

//! Orchestrates one request/response cycle per `fetch()` call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;

use crate::fault::FaultInjector;
use crate::schema::ValidationSchema;
use crate::ui::mvi::Reducer;

use super::client::HttpClient;
use super::error::FetchError;
use super::intent::FetchIntent;
use super::reducer::FetchReducer;
use super::state::{FetchModel, FetchState};

/// Callback invoked with every state the controller applies.
pub type StateObserver<T> = Arc<dyn Fn(&FetchState<T>) + Send + Sync>;

/// Where to fetch from and what the payload must look like.
pub struct Endpoint<T> {
    pub url: String,
    pub schema: Arc<ValidationSchema<T>>,
}

impl<T> Endpoint<T> {
    pub fn new(url: impl Into<String>, schema: Arc<ValidationSchema<T>>) -> Self {
        Self {
            url: url.into(),
            schema,
        }
    }
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            schema: Arc::clone(&self.schema),
        }
    }
}

/// Owns the [`FetchState`] of one view.
///
/// Overlapping calls are allowed: each call takes a new generation when it
/// enters `Loading`, and results of superseded calls are discarded.
pub struct FetchController<T> {
    name: String,
    endpoint: Endpoint<T>,
    client: Arc<dyn HttpClient>,
    faults: Option<FaultInjector>,
    latency: Duration,
    next_generation: AtomicU64,
    model: Mutex<FetchModel<T>>,
    observer: Option<StateObserver<T>>,
}

impl<T> FetchController<T>
where
    T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, endpoint: Endpoint<T>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            name: name.into(),
            endpoint,
            client,
            faults: None,
            latency: Duration::ZERO,
            next_generation: AtomicU64::new(0),
            model: Mutex::new(FetchModel::default()),
            observer: None,
        }
    }

    /// Run every cycle through a fault injector before touching the network.
    pub fn with_faults(mut self, faults: FaultInjector) -> Self {
        self.faults = Some(faults).filter(FaultInjector::is_enabled);
        self
    }

    /// Delay each cycle after entering `Loading`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_observer(mut self, observer: StateObserver<T>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn url(&self) -> &str {
        &self.endpoint.url
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.model.lock().state.clone()
    }

    /// Generation of the request that currently owns the state.
    pub fn generation(&self) -> u64 {
        self.model.lock().generation
    }

    /// Run one fetch cycle and return the state once it has settled.
    ///
    /// If a newer call superseded this one, the returned state is whatever
    /// that newer call has published so far.
    pub async fn fetch(&self) -> FetchState<T> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(FetchIntent::Started { generation });

        let intent = match self.run_cycle(generation).await {
            Ok(data) => FetchIntent::Succeeded { generation, data },
            Err(error) => {
                tracing::debug!(
                    resource = %self.name,
                    generation,
                    kind = error.kind().as_str(),
                    "Fetch cycle failed"
                );
                FetchIntent::Failed { generation, error }
            }
        };
        self.dispatch(intent);
        self.state()
    }

    /// Same as [`fetch`](Self::fetch); bound to the "try again" action.
    pub async fn retry(&self) -> FetchState<T> {
        tracing::debug!(resource = %self.name, "Retry requested");
        self.fetch().await
    }

    async fn run_cycle(&self, generation: u64) -> Result<T, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(faults) = &self.faults {
            if let Err(fault) = faults.maybe_fail() {
                tracing::warn!(
                    resource = %self.name,
                    generation,
                    probability = faults.probability(),
                    "Simulated fault injected, skipping request"
                );
                return Err(fault.into());
            }
        }

        let body = self.client.get(&self.endpoint.url).await.map_err(|err| {
            tracing::error!(
                resource = %self.name,
                url = %self.endpoint.url,
                generation,
                error = %err,
                "Fetch failed"
            );
            FetchError::from(err)
        })?;

        self.endpoint.schema.validate(&body).map_err(|err| {
            for issue in &err.issues {
                tracing::warn!(
                    resource = %self.name,
                    path = %issue.path,
                    problem = %issue.kind,
                    "Field failed validation"
                );
            }
            tracing::error!(
                resource = %self.name,
                url = %self.endpoint.url,
                generation,
                schema = err.schema,
                issue_count = err.issues.len(),
                "Response failed validation"
            );
            FetchError::from(err)
        })
    }

    fn dispatch(&self, intent: FetchIntent<T>) {
        let generation = intent.generation();
        let applied = {
            let mut model = self.model.lock();
            let before = (model.generation, model.state.status());
            let current = std::mem::take(&mut *model);
            *model = FetchReducer::<T>::reduce(current, intent);
            let after = (model.generation, model.state.status());
            (before != after).then(|| model.state.clone())
        };

        match applied {
            Some(state) => {
                tracing::debug!(
                    resource = %self.name,
                    generation,
                    status = ?state.status(),
                    "Fetch state changed"
                );
                if let Some(observer) = &self.observer {
                    observer(&state);
                }
            }
            None => {
                tracing::debug!(
                    resource = %self.name,
                    generation,
                    "Discarding stale fetch event"
                );
            }
        }
    }
}

impl<T> std::fmt::Debug for FetchController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchController")
            .field("name", &self.name)
            .field("url", &self.endpoint.url)
            .field("faults", &self.faults)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

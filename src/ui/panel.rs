//! Type-erased handle over a fetch controller, one per tab.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{Config, ResourceConfig};
use crate::fault::FaultInjector;
use crate::fetch::{Endpoint, FetchController, FetchState, FetchStatus, HttpClient};
use crate::resources::{BookResponse, Music, Resource, ResourceKind, User};

use super::view::PanelView;

/// Called whenever any panel's state changes.
pub type RedrawHook = Arc<dyn Fn() + Send + Sync>;

/// What the UI needs from a controller, independent of its payload type.
#[async_trait]
pub trait FetchPanel: Send + Sync {
    fn kind(&self) -> ResourceKind;

    fn status(&self) -> FetchStatus;

    fn view(&self) -> PanelView;

    /// Initial fetch when the panel is mounted.
    async fn fetch(&self) -> FetchStatus;

    /// User-triggered fetch.
    async fn retry(&self) -> FetchStatus;
}

#[async_trait]
impl<T: Resource> FetchPanel for FetchController<T> {
    fn kind(&self) -> ResourceKind {
        T::KIND
    }

    fn status(&self) -> FetchStatus {
        self.state().status()
    }

    fn view(&self) -> PanelView {
        PanelView::for_state(&self.state())
    }

    async fn fetch(&self) -> FetchStatus {
        FetchController::fetch(self).await.status()
    }

    async fn retry(&self) -> FetchStatus {
        FetchController::retry(self).await.status()
    }
}

/// Build one panel per configured resource, in config order.
///
/// With a `seed`, panel `i` draws faults from `seed + i` so runs are
/// reproducible.
pub fn build_panels(
    config: &Config,
    client: Arc<dyn HttpClient>,
    seed: Option<u64>,
    redraw: Option<RedrawHook>,
) -> Vec<Arc<dyn FetchPanel>> {
    config
        .resources
        .iter()
        .enumerate()
        .map(|(index, resource)| {
            let faults = match seed {
                Some(seed) => FaultInjector::seeded(
                    config.defaults.fault_probability,
                    seed.wrapping_add(index as u64),
                ),
                None => FaultInjector::new(config.defaults.fault_probability),
            };
            let options = PanelOptions {
                client: Arc::clone(&client),
                faults,
                latency: Duration::from_millis(config.defaults.simulated_latency_ms),
                redraw: redraw.clone(),
            };
            match resource.kind {
                ResourceKind::User => build_panel::<User>(resource, options),
                ResourceKind::Book => build_panel::<BookResponse>(resource, options),
                ResourceKind::Music => build_panel::<Music>(resource, options),
            }
        })
        .collect()
}

struct PanelOptions {
    client: Arc<dyn HttpClient>,
    faults: FaultInjector,
    latency: Duration,
    redraw: Option<RedrawHook>,
}

fn build_panel<T: Resource>(resource: &ResourceConfig, options: PanelOptions) -> Arc<dyn FetchPanel> {
    let endpoint = Endpoint::new(resource.endpoint(), Arc::new(T::schema()));
    let mut controller = FetchController::<T>::new(T::KIND.as_str(), endpoint, options.client)
        .with_faults(options.faults)
        .with_latency(options.latency);
    if let Some(redraw) = options.redraw {
        controller = controller.with_observer(Arc::new(move |_: &FetchState<T>| redraw()));
    }
    tracing::debug!(resource = %T::KIND, url = %controller.url(), "Panel created");
    Arc::new(controller)
}

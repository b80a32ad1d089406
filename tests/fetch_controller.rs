//! Fetch cycle behaviour with scripted HTTP responses.

mod common;

use common::{
    music_body, music_controller, recorder, status_error, statuses, track, ScriptedClient,
    MUSIC_URL,
};
use coolfetch::fault::FaultInjector;
use coolfetch::fetch::{FetchErrorKind, FetchState, FetchStatus};
use serde_json::json;
use std::time::{Duration, Instant};

#[tokio::test]
async fn new_controller_is_idle() {
    let controller = music_controller(ScriptedClient::new());
    assert_eq!(controller.state(), FetchState::Idle);
    assert_eq!(controller.generation(), 0);
}

#[tokio::test]
async fn valid_body_ends_in_success() {
    let client = ScriptedClient::with(vec![Ok(music_body("X", "Y", "Z"))]);
    let controller = music_controller(client.clone()).with_faults(FaultInjector::seeded(0.0, 1));

    let state = controller.fetch().await;

    assert_eq!(state, FetchState::Success(track("X", "Y", "Z")));
    assert_eq!(client.calls(), 1);
    assert_eq!(client.urls(), vec![MUSIC_URL.to_string()]);
}

#[tokio::test]
async fn fetch_passes_through_loading() {
    let client = ScriptedClient::with(vec![Ok(music_body("X", "Y", "Z"))]);
    let (observer, log) = recorder();
    let controller = music_controller(client).with_observer(observer);

    controller.fetch().await;

    assert_eq!(
        statuses(&log),
        vec![FetchStatus::Loading, FetchStatus::Success]
    );
}

#[tokio::test]
async fn missing_fields_end_in_validation_failure() {
    let client = ScriptedClient::with(vec![Ok(json!({"songName": "X"}))]);
    let controller = music_controller(client);

    let state = controller.fetch().await;

    let error = state.error_info().expect("expected error state");
    assert_eq!(error.kind(), FetchErrorKind::ValidationFailure);
    let validation = error.validation().unwrap();
    assert!(validation.mentions("album"));
    assert!(validation.mentions("artist"));
    assert!(state.data().is_none());
}

#[tokio::test]
async fn wrong_type_ends_in_validation_failure() {
    let client = ScriptedClient::with(vec![Ok(
        json!({"songName": "X", "album": 12, "artist": "Z"}),
    )]);
    let controller = music_controller(client);

    let state = controller.fetch().await;

    let validation = state.error_info().and_then(|e| e.validation()).unwrap();
    assert_eq!(validation.issues.len(), 1);
    assert!(validation.mentions("album"));
}

#[tokio::test]
async fn transport_error_ends_in_network_failure() {
    let client = ScriptedClient::with(vec![Err(status_error(503))]);
    let (observer, log) = recorder();
    let controller = music_controller(client.clone()).with_observer(observer);

    let state = controller.fetch().await;

    assert_eq!(
        state.error_info().map(|e| e.kind()),
        Some(FetchErrorKind::NetworkFailure)
    );
    assert_eq!(statuses(&log), vec![FetchStatus::Loading, FetchStatus::Error]);
    // No automatic retry
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn certain_fault_skips_the_network() {
    let client = ScriptedClient::with(vec![Ok(music_body("X", "Y", "Z"))]);
    let controller = music_controller(client.clone()).with_faults(FaultInjector::seeded(1.0, 3));

    for _ in 0..20 {
        let state = controller.fetch().await;
        assert_eq!(
            state.error_info().map(|e| e.kind()),
            Some(FetchErrorKind::SimulatedFault)
        );
    }
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn disabled_injector_is_not_installed() {
    let client = ScriptedClient::with(vec![Ok(music_body("X", "Y", "Z"))]);
    let controller = music_controller(client).with_faults(FaultInjector::new(0.0));

    assert!(!format!("{:?}", controller).contains("FaultInjector"));
}

#[tokio::test]
async fn retry_after_error_reaches_success() {
    let client = ScriptedClient::with(vec![
        Err(status_error(500)),
        Ok(music_body("Song", "Album", "Artist")),
    ]);
    let (observer, log) = recorder();
    let controller = music_controller(client.clone()).with_observer(observer);

    let first = controller.fetch().await;
    assert_eq!(first.status(), FetchStatus::Error);

    let second = controller.retry().await;
    assert_eq!(second, FetchState::Success(track("Song", "Album", "Artist")));

    assert_eq!(
        statuses(&log),
        vec![
            FetchStatus::Loading,
            FetchStatus::Error,
            FetchStatus::Loading,
            FetchStatus::Success,
        ]
    );
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn retry_after_success_replaces_data() {
    let client = ScriptedClient::with(vec![
        Ok(music_body("One", "A", "B")),
        Ok(music_body("Two", "C", "D")),
    ]);
    let controller = music_controller(client);

    controller.fetch().await;
    let state = controller.retry().await;

    assert_eq!(state.data(), Some(&track("Two", "C", "D")));
    assert_eq!(controller.generation(), 2);
}

#[tokio::test]
async fn every_observed_state_keeps_data_and_error_exclusive() {
    let client = ScriptedClient::with(vec![
        Ok(music_body("X", "Y", "Z")),
        Err(status_error(500)),
        Ok(json!({"songName": "X"})),
        Ok(music_body("X", "Y", "Z")),
    ]);
    let (observer, log) = recorder();
    let controller = music_controller(client).with_observer(observer);

    for _ in 0..4 {
        controller.retry().await;
    }

    let states = log.lock().clone();
    assert_eq!(states.len(), 8);
    for state in &states {
        assert!(!(state.data().is_some() && state.error_info().is_some()));
        if state.is_loading() {
            assert!(state.data().is_none() && state.error_info().is_none());
        }
    }
}

#[tokio::test]
async fn simulated_latency_delays_the_request() {
    let client = ScriptedClient::with(vec![Ok(music_body("X", "Y", "Z"))]);
    let controller = music_controller(client).with_latency(Duration::from_millis(30));

    let start = Instant::now();
    let state = controller.fetch().await;

    assert!(start.elapsed() >= Duration::from_millis(30));
    assert_eq!(state.status(), FetchStatus::Success);
}

//! Integration tests for SuggestController against a canned backend.
//!
//! These tests verify that the controller correctly:
//! - Gates input on minimum length and unchanged text
//! - Resolves from the cache before reaching the transport
//! - Merges static options and truncates to the display limit
//! - Falls back to a single placeholder for empty or broken responses
//! - Handles dismissal, commits and duplicate rejection
//! - Discards results from superseded requests

mod common;

use common::*;
use sk_core::source::{Origin, ResolvedBatch, StaticTransport};
use sk_core::display::TextTarget;
use sk_core::{CommitOutcome, EventStatus, RejectReason};
use sk_protocol::config_models::{ResponseFormat, StaticPlacement, SuggestConfig};
use sk_protocol::ipc::{Signal, SuggestKey};
use sk_protocol::RawCandidate;
use std::time::Duration;

fn genres_config() -> SuggestConfig {
    SuggestConfig::remote("genres")
}

async fn type_and_settle(harness: &mut Harness, text: &str) -> bool {
    sk_core::runtime::resolve_now(&mut harness.controller, text).await
}

#[tokio::test]
async fn test_prefix_scenario_rock() {
    let mut h = remote_harness(genres_config(), genre_transport());

    let pending = h
        .controller
        .on_text_changed("ro")
        .expect("cache is empty, so the query goes remote");
    assert_eq!(pending.query(), "ro");
    assert_eq!(
        h.drain(),
        vec![Signal::Requesting {
            query: "ro".to_string()
        }]
    );

    let batch = pending.wait().await;
    assert!(h.controller.on_results_ready(batch));

    let state = h.surface.snapshot();
    assert!(state.visible);
    assert_eq!(rendered_texts(&state), vec!["Rock", "Rockabilly"]);
    assert!(state.entries.iter().all(|e| e.selectable));
    assert_eq!(state.highlighted, Some(0));
    assert_eq!(state.entries[0].markup.to_markup(), "<span>Ro</span>ck");
    assert_eq!(state.entries[1].markup.to_markup(), "<span>Ro</span>ckabilly");
    assert_eq!(
        h.drain(),
        vec![
            Signal::Shown,
            Signal::ResultsReady {
                query: "ro".to_string(),
                count: 2
            }
        ]
    );
}

#[tokio::test]
async fn test_short_queries_never_resolve() {
    let mut h = remote_harness(
        SuggestConfig {
            min_input_length: 3,
            ..genres_config()
        },
        genre_transport(),
    );

    for text in ["", "r", "ro", "  ro  "] {
        assert!(h.controller.on_text_changed(text).is_none());
    }

    assert_eq!(h.transport.call_count(), 0);
    assert!(h.drain().is_empty());
    assert!(!h.surface.snapshot().visible);
}

#[tokio::test]
async fn test_min_length_counts_characters() {
    let transport = StaticTransport::new().with_texts("üb", &["Über"]);
    let mut h = remote_harness(
        SuggestConfig {
            min_input_length: 2,
            ..genres_config()
        },
        transport,
    );

    assert!(type_and_settle(&mut h, "üb").await);
    assert_eq!(rendered_texts(&h.surface.snapshot()), vec!["Über"]);
}

#[tokio::test]
async fn test_repeated_query_hits_cache() {
    let mut h = remote_harness(genres_config(), genre_transport());

    assert!(type_and_settle(&mut h, "ro").await);
    assert!(type_and_settle(&mut h, "roc").await);
    assert_eq!(h.transport.call_count(), 2);

    assert!(h.controller.on_text_changed("ro").is_none());

    assert_eq!(h.transport.call_count(), 2);
    assert_eq!(
        rendered_texts(&h.surface.snapshot()),
        vec!["Rock", "Rockabilly"]
    );
    assert_eq!(h.controller.cache_len(), 2);
}

#[tokio::test]
async fn test_disabled_cache_always_reaches_transport() {
    let mut h = remote_harness(
        SuggestConfig {
            use_cache: false,
            ..genres_config()
        },
        genre_transport(),
    );

    type_and_settle(&mut h, "ro").await;
    type_and_settle(&mut h, "roc").await;
    type_and_settle(&mut h, "ro").await;

    assert_eq!(h.transport.call_count(), 3);
    assert_eq!(h.controller.cache_len(), 0);
}

#[tokio::test]
async fn test_bounded_cache_evicts_oldest() {
    let mut h = remote_harness(
        SuggestConfig {
            cache_capacity: Some(1),
            ..genres_config()
        },
        genre_transport(),
    );

    type_and_settle(&mut h, "ro").await;
    type_and_settle(&mut h, "ja").await;
    assert_eq!(h.controller.cache_len(), 1);

    type_and_settle(&mut h, "ro").await;
    assert_eq!(h.transport.call_count(), 3);
}

#[tokio::test]
async fn test_truncation_keeps_server_order() {
    let labels = numbered(15);
    let texts: Vec<&str> = labels.iter().map(String::as_str).collect();
    let transport = StaticTransport::new().with_texts("ge", &texts);
    let mut h = remote_harness(genres_config(), transport);

    assert!(type_and_settle(&mut h, "ge").await);

    let state = h.surface.snapshot();
    assert_eq!(rendered_texts(&state), numbered(10));
    assert_eq!(last_results_count(&h.drain()), Some(10));
}

#[tokio::test]
async fn test_statics_before_are_kept_by_truncation() {
    let labels = numbered(15);
    let texts: Vec<&str> = labels.iter().map(String::as_str).collect();
    let transport = StaticTransport::new().with_texts("ge", &texts);
    let mut h = remote_harness(
        SuggestConfig {
            static_options: Some(vec![RawCandidate::from("Other...")]),
            static_options_placement: StaticPlacement::Before,
            ..genres_config()
        },
        transport,
    );

    type_and_settle(&mut h, "ge").await;

    let rendered = rendered_texts(&h.surface.snapshot());
    assert_eq!(rendered.len(), 10);
    assert_eq!(rendered[0], "Other...");
    assert_eq!(rendered[1..], numbered(9)[..]);

    let ids: Vec<_> = h.controller.candidates().iter().map(|c| c.id.clone()).collect();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len(), "ids must be unique: {ids:?}");
}

#[tokio::test]
async fn test_statics_after_follow_results() {
    let mut h = remote_harness(
        SuggestConfig {
            static_options: Some(vec![RawCandidate::from("Other...")]),
            static_options_placement: StaticPlacement::After,
            ..genres_config()
        },
        genre_transport(),
    );

    type_and_settle(&mut h, "ro").await;

    assert_eq!(
        rendered_texts(&h.surface.snapshot()),
        vec!["Rock", "Rockabilly", "Other..."]
    );
}

#[tokio::test]
async fn test_empty_and_broken_responses_show_one_placeholder() {
    for query in ["zz", "bad", "unknown"] {
        let mut h = remote_harness(
            SuggestConfig {
                static_options: Some(vec![RawCandidate::from("Other...")]),
                ..genres_config()
            },
            genre_transport(),
        );

        assert!(type_and_settle(&mut h, query).await);

        assert_single_placeholder(&h.surface.snapshot(), "Nothing matches...");
        assert_eq!(last_results_count(&h.drain()), Some(0));
        assert_eq!(h.controller.on_key(SuggestKey::Enter), EventStatus::NotConsumed);
        assert!(h.controller.history().is_empty());
    }
}

#[tokio::test]
async fn test_transport_failure_shows_placeholder() {
    let mut h = remote_harness(
        SuggestConfig {
            no_results_text: "No genres".to_string(),
            ..genres_config()
        },
        StaticTransport::failing(),
    );

    assert!(type_and_settle(&mut h, "ro").await);

    assert_single_placeholder(&h.surface.snapshot(), "No genres");
    assert_eq!(h.controller.cache_len(), 0);
}

#[tokio::test]
async fn test_escape_hides_once() {
    let mut h = remote_harness(genres_config(), genre_transport());
    type_and_settle(&mut h, "ro").await;
    h.drain();

    assert_eq!(h.controller.on_key(SuggestKey::Escape), EventStatus::Consumed);
    assert_eq!(h.controller.on_key(SuggestKey::Escape), EventStatus::NotConsumed);

    let signals = h.drain();
    assert_eq!(count_hidden(&signals), 1);
    assert_eq!(signals, vec![Signal::Hidden]);

    let state = h.surface.snapshot();
    assert!(!state.visible);
    assert_eq!(state.highlighted, None);
    assert_eq!(state.hide_count, 1);
    assert!(h.controller.highlighted().is_none());
}

#[tokio::test]
async fn test_duplicate_commit_is_rejected() {
    let mut h = remote_harness(
        SuggestConfig {
            allow_duplicate_selections: false,
            ..genres_config()
        },
        genre_transport(),
    );

    type_and_settle(&mut h, "ro").await;
    assert_eq!(h.controller.on_key(SuggestKey::Enter), EventStatus::Consumed);
    assert!(has_selected(&h.drain()));
    assert_eq!(h.input.value(), "Rock");

    // Same text again, served from the cache.
    h.controller.on_text_changed("ro");
    assert!(h.controller.is_shown());
    h.drain();

    let rock = h
        .controller
        .highlighted()
        .cloned()
        .expect("Rock should be highlighted");
    let outcome = h.controller.on_commit(rock);

    assert_eq!(outcome, CommitOutcome::Rejected(RejectReason::Duplicate));
    assert!(!has_selected(&h.drain()));
    assert_eq!(h.controller.history().len(), 1);
    assert!(h.controller.is_shown());
}

#[tokio::test]
async fn test_duplicates_allowed_by_default() {
    let mut h = remote_harness(genres_config(), genre_transport());

    type_and_settle(&mut h, "ro").await;
    h.controller.on_key(SuggestKey::Enter);
    h.controller.on_text_changed("ro");
    h.controller.on_key(SuggestKey::Enter);

    assert_eq!(
        h.controller.history().texts().collect::<Vec<_>>(),
        vec!["Rock", "Rock"]
    );
}

#[tokio::test]
async fn test_stale_results_are_discarded_but_cached() {
    let transport = genre_transport().with_delay("ro", Duration::from_millis(50));
    let mut h = remote_harness(genres_config(), transport);

    let slow = h.controller.on_text_changed("ro").expect("remote");
    let fast = h.controller.on_text_changed("ja").expect("remote");
    assert!(fast.generation() > slow.generation());

    let fast_batch = fast.wait().await;
    assert!(h.controller.on_results_ready(fast_batch));
    let slow_batch = slow.wait().await;
    assert!(!h.controller.on_results_ready(slow_batch));

    assert_eq!(rendered_texts(&h.surface.snapshot()), vec!["Jazz"]);
    assert_eq!(h.controller.cache_len(), 2);

    h.controller.on_text_changed("ro");
    assert_eq!(h.transport.call_count(), 2);
    assert_eq!(
        rendered_texts(&h.surface.snapshot()),
        vec!["Rock", "Rockabilly"]
    );
}

#[tokio::test]
async fn test_results_after_commit_are_stale() {
    let mut h = remote_harness(genres_config(), genre_transport());
    type_and_settle(&mut h, "ro").await;

    let pending = h.controller.on_text_changed("ja").expect("remote");
    h.controller.on_key(SuggestKey::Enter);
    let batch = pending.wait().await;

    assert!(!h.controller.on_results_ready(batch));
    assert!(!h.controller.is_shown());
}

#[tokio::test]
async fn test_cached_batches_are_not_recached() {
    let mut h = remote_harness(
        SuggestConfig {
            cache_capacity: Some(1),
            ..genres_config()
        },
        genre_transport(),
    );
    type_and_settle(&mut h, "ro").await;
    type_and_settle(&mut h, "xyz").await;
    assert_eq!(h.transport.call_count(), 2);

    let batch = ResolvedBatch {
        generation: h.controller.generation(),
        query: "ja".to_string(),
        candidates: vec![sk_protocol::Candidate::plain("1_opt", "Jazz")],
        origin: Origin::Cache,
    };
    assert!(h.controller.on_results_ready(batch));

    // "ro" is still the only cached query.
    assert!(h.controller.on_text_changed("ro").is_none());
    assert_eq!(h.transport.call_count(), 2);
}

#[tokio::test]
async fn test_html_backend() {
    let transport = StaticTransport::new().with_response(
        "ro",
        r#"<li id="r1">Rock</li><li id="r2"><b>Rock</b>abilly</li>"#,
    );
    let mut h = remote_harness(
        SuggestConfig {
            response_format: ResponseFormat::Html,
            ..genres_config()
        },
        transport,
    );

    type_and_settle(&mut h, "ro").await;
    h.controller.on_key(SuggestKey::Down);
    h.controller.on_key(SuggestKey::Enter);

    assert_eq!(h.input.value(), "Rockabilly");
    assert_eq!(h.controller.history().entries()[0].candidate_id, "r2_opt");
}

#[tokio::test]
async fn test_request_uses_configured_field_and_method() {
    let mut h = remote_harness(
        SuggestConfig {
            request_field_name: "q".to_string(),
            request_method: sk_protocol::RequestMethod::Get,
            ..genres_config()
        },
        genre_transport(),
    );

    type_and_settle(&mut h, "ro").await;

    let request = &h.transport.requests()[0];
    assert_eq!(request.form_pair(), "q=ro");
    assert_eq!(request.method.as_str(), "GET");
    assert_eq!(request.endpoint, "genres");
}

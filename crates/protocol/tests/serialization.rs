use sk_protocol::*;
use serde_json;
use serde_yaml;

#[test]
fn test_config_deserialization_from_toml() {
    let toml_str = r#"
endpoint-url = "https://example.com/genres"
request-method = "GET"
min-input-length = 2
max-displayed = 8
tab-selects = true
static-options = ["Other...", { html = "<i>Ask a librarian</i>", id = "ask" }]
static-options-placement = "after"
response-format = "html"

[seed-candidates]
ro = ["Rock", "Rockabilly"]
"#;

    let config: SuggestConfig = toml::from_str(toml_str).expect("Failed to deserialize SuggestConfig");

    assert_eq!(config.endpoint_url, "https://example.com/genres");
    assert_eq!(config.request_method, RequestMethod::Get);
    assert_eq!(config.min_input_length, 2);
    assert_eq!(config.max_displayed, 8);
    assert!(config.tab_selects);
    assert_eq!(config.static_options_placement, StaticPlacement::After);
    assert_eq!(config.response_format, ResponseFormat::Html);

    let statics = config.static_options.expect("static options should be present");
    assert_eq!(statics.len(), 2);
    assert_eq!(statics[0], RawCandidate::Plain("Other...".to_string()));
    assert!(matches!(statics[1], RawCandidate::Record(_)));

    let seed = config.seed_candidates.expect("seed should be present");
    assert_eq!(seed.get("ro").map(Vec::len), Some(2));

    // Unspecified fields keep their defaults
    assert!(config.use_cache);
    assert_eq!(config.no_results_text, "Nothing matches...");
}

#[test]
fn test_empty_config_is_default() {
    let config: SuggestConfig = toml::from_str("").expect("Empty config should parse");
    assert_eq!(config, SuggestConfig::default());
}

#[test]
fn test_seed_deserialization_from_yaml() {
    let yaml_str = r#"
ja:
  - Jazz
  - html: "<b>Jam band</b>"
    text: "Jam band"
    decade: 1960s
"#;

    let seed: std::collections::BTreeMap<String, Vec<RawCandidate>> =
        serde_yaml::from_str(yaml_str).expect("Failed to deserialize seed");

    let entries = &seed["ja"];
    assert_eq!(entries.len(), 2);
    match &entries[1] {
        RawCandidate::Record(record) => {
            assert_eq!(record.text.as_deref(), Some("Jam band"));
            assert_eq!(
                record.extra.get("decade").and_then(|v| v.as_str()),
                Some("1960s")
            );
        }
        other => panic!("Expected record, got {:?}", other),
    }
}

#[test]
fn test_signal_serialization() {
    let signal = Signal::Selected {
        candidate: Candidate::plain("1_opt", "Rock"),
    };

    let json = serde_json::to_value(&signal).expect("Failed to serialize Signal");
    assert_eq!(json["type"], "selected");
    assert_eq!(json["payload"]["candidate"]["display_text"], "Rock");

    let deserialized: Signal = serde_json::from_value(json).expect("Failed to deserialize Signal");
    assert_eq!(deserialized, signal);
}

#[test]
fn test_unit_signal_serialization() {
    let json = serde_json::to_value(Signal::Hidden).expect("Failed to serialize Signal");
    assert_eq!(json["type"], "hidden");
}

#[test]
fn test_input_event_deserialization() {
    let json = r#"{"type":"key","payload":{"key":"escape"}}"#;
    let event: InputEvent = serde_json::from_str(json).expect("Failed to deserialize InputEvent");
    assert_eq!(
        event,
        InputEvent::Key {
            key: SuggestKey::Escape
        }
    );

    let json = r#"{"type":"textChanged","payload":{"value":"ro"}}"#;
    let event: InputEvent = serde_json::from_str(json).expect("Failed to deserialize InputEvent");
    assert_eq!(
        event,
        InputEvent::TextChanged {
            value: "ro".to_string()
        }
    );
}

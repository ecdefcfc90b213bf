use homeval_domain::config::{
    ApiConfig, LoggingConfig, ServerConfig, UnknownLocationPolicy, ValuationConfig,
};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(server.port, 5000);
    assert!(server.ssl.is_none());
    assert!(server.cors.allowed_origins.is_empty());

    let valuation = ValuationConfig::default();
    assert_eq!(valuation.model_path(), PathBuf::from("artifacts/model.json"));
    assert_eq!(valuation.columns_path(), PathBuf::from("artifacts/columns.json"));
    assert_eq!(valuation.unknown_location, UnknownLocationPolicy::Reject);

    let logging = LoggingConfig::default();
    assert!(logging.directory.is_none());
    assert_eq!(logging.max_files, 10);
}

#[test]
fn api_config_deserializes_partial_input() {
    let raw = json!({
        "server": { "address": "0.0.0.0", "port": 8080, "cors": { "allowed_origins": ["http://localhost:5173"] } },
        "valuation": { "artifacts_dir": "/srv/model", "unknown_location": "baseline" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.cors.allowed_origins, vec!["http://localhost:5173".to_owned()]);
    assert_eq!(cfg.valuation.unknown_location, UnknownLocationPolicy::Baseline);
    assert_eq!(cfg.valuation.model_path(), PathBuf::from("/srv/model/model.json"));
    assert!(!cfg.logging.json);
}

#[test]
fn absolute_artifact_paths_ignore_the_directory() {
    let valuation = ValuationConfig {
        columns_file: PathBuf::from("/etc/homeval/columns.json"),
        ..ValuationConfig::default()
    };
    assert_eq!(valuation.columns_path(), PathBuf::from("/etc/homeval/columns.json"));
}

#[test]
fn unknown_policy_names_are_rejected() {
    let raw = json!({ "valuation": { "unknown_location": "guess" } });
    assert!(serde_json::from_value::<ApiConfig>(raw).is_err());
}

#[test]
fn config_clones_share_until_mutated() {
    let original = ApiConfig::default();
    let mut copy = original.clone();
    copy.server.port = 9000;

    assert_eq!(original.server.port, 5000);
    assert_eq!(copy.server.port, 9000);
}

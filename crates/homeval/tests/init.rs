use homeval::domain::config::ApiConfig;
use homeval::features;
use std::fs;
use tempfile::tempdir;

#[test]
fn valuation_is_always_enabled() {
    assert!(features::is_enabled("valuation"));
    assert!(features::is_enabled("server"));
    assert!(!features::is_enabled("billing"));
}

#[tokio::test]
async fn init_registers_valuation_slice() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("columns.json"),
        r#"{"data_columns":["total_sqft","bath","bhk","Hebbal"]}"#,
    )
    .expect("write columns");
    fs::write(dir.path().join("model.json"), r#"{"intercept":1.0,"coefficients":[0.1,1.0,1.0,5.0]}"#)
        .expect("write model");

    let mut config = ApiConfig::default();
    config.valuation.artifacts_dir = dir.path().to_path_buf();

    let slices = homeval::init(&config).await.expect("init");
    assert_eq!(slices.len(), 1);
}

#[tokio::test]
async fn init_fails_without_artifacts() {
    let dir = tempdir().expect("temp dir");
    let mut config = ApiConfig::default();
    config.valuation.artifacts_dir = dir.path().join("missing");

    let err = homeval::init(&config).await.unwrap_err();
    assert!(err.to_string().contains("columns.json"));
}

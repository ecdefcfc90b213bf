use homeval_kernel::domain::config::{UnknownLocationPolicy, ValuationConfig};
use homeval_valuation::{ArtifactLoader, PriceQuery, ValuationError};
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const COLUMNS: &str =
    r#"{"data_columns":["total_sqft","bath","bhk","1st Phase JP Nagar","Hebbal","Whitefield"]}"#;
const MODEL: &str = r#"{"intercept":-20.0,"coefficients":[0.08,1.5,-1.2,25.0,10.0,-4.0]}"#;

fn artifacts(columns: &str, model: &str) -> TempDir {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("columns.json"), columns).expect("write columns");
    fs::write(dir.path().join("model.json"), model).expect("write model");
    dir
}

fn config(dir: &Path) -> ValuationConfig {
    ValuationConfig { artifacts_dir: dir.to_path_buf(), ..ValuationConfig::default() }
}

#[tokio::test]
async fn loads_vocabulary_in_artifact_order() {
    let dir = artifacts(COLUMNS, MODEL);
    let estimator = ArtifactLoader::from_config(&config(dir.path())).load().await.expect("load");

    assert_eq!(estimator.locations(), ["1st Phase JP Nagar", "Hebbal", "Whitefield"]);
    assert_eq!(estimator.layout().width(), 6);
}

#[tokio::test]
async fn loaded_model_predicts_known_location() {
    let dir = artifacts(COLUMNS, MODEL);
    let estimator = ArtifactLoader::from_config(&config(dir.path())).load().await.expect("load");

    let query = PriceQuery {
        location: "1st Phase JP Nagar".to_owned(),
        total_sqft: 1000.0,
        bhk: 2,
        bath: 2,
    };
    let price = estimator.estimate(&query).expect("estimate");

    // -20 + 80 + 3 - 2.4 + 25
    assert!((price - 85.6).abs() < 1e-9);
    assert_eq!(estimator.estimate(&query).expect("estimate"), price);
}

#[tokio::test]
async fn policy_comes_from_config() {
    let dir = artifacts(COLUMNS, MODEL);
    let cfg = ValuationConfig {
        unknown_location: UnknownLocationPolicy::Baseline,
        ..config(dir.path())
    };
    let estimator = ArtifactLoader::from_config(&cfg).load().await.expect("load");

    let query =
        PriceQuery { location: "Atlantis".to_owned(), total_sqft: 1000.0, bhk: 2, bath: 2 };
    assert!((estimator.estimate(&query).expect("baseline") - 60.6).abs() < 1e-9);
}

#[tokio::test]
async fn missing_files_are_io_errors() {
    let dir = tempdir().expect("temp dir");
    let err = ArtifactLoader::from_config(&config(dir.path())).load().await.unwrap_err();

    assert!(matches!(err, ValuationError::Io { .. }));
    assert!(err.to_string().contains("columns.json"));
}

#[tokio::test]
async fn corrupt_files_are_decode_errors() {
    let dir = artifacts(COLUMNS, "{not json");
    let err = ArtifactLoader::from_config(&config(dir.path())).load().await.unwrap_err();

    assert!(matches!(err, ValuationError::Decode { .. }));
    assert!(err.to_string().contains("model.json"));
}

#[tokio::test]
async fn inconsistent_artifacts_are_rejected() {
    let dir = artifacts(COLUMNS, r#"{"intercept":0.0,"coefficients":[1.0,2.0,3.0]}"#);
    let err = ArtifactLoader::from_config(&config(dir.path())).load().await.unwrap_err();
    assert!(matches!(err, ValuationError::Artifact { .. }));

    let dir = artifacts(r#"{"data_columns":["total_sqft","bhk","Hebbal"]}"#, MODEL);
    let err = ArtifactLoader::from_config(&config(dir.path())).load().await.unwrap_err();
    assert!(err.to_string().contains("bath"));
}

#[tokio::test]
async fn absolute_file_paths_override_the_directory() {
    let dir = artifacts(COLUMNS, MODEL);
    let cfg = ValuationConfig {
        artifacts_dir: "does-not-exist".into(),
        model_file: dir.path().join("model.json"),
        columns_file: dir.path().join("columns.json"),
        ..ValuationConfig::default()
    };

    assert!(ArtifactLoader::from_config(&cfg).load().await.is_ok());
}

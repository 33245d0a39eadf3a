use exo_app::{
    ConfigError, DemoConfig, LogFormat, PredictResponse, Session, SessionError, SessionStatus,
};
use exo_dataset::FileSource;
use exo_test_utils::{SAMPLES_JSON, SYNTHESIS_JSON};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write_datasets(dir: &TempDir) -> DemoConfig {
    let samples = dir.path().join("samples.json");
    let synthesis = dir.path().join("synthesis_data.json");
    fs::write(&samples, SAMPLES_JSON).unwrap();
    fs::write(&synthesis, SYNTHESIS_JSON).unwrap();
    DemoConfig::new().with_paths(samples, synthesis)
}

async fn manual_report(config: &DemoConfig) -> PredictResponse {
    let mut session = Session::from_config(config);
    session
        .load(&FileSource::new(&config.samples_path, &config.synthesis_path))
        .await
        .unwrap();
    session.on_selection_changed(Some("T003")).unwrap();
    session.on_predict_requested(std::iter::empty()).unwrap()
}

#[test]
fn config_file_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo.toml");
    fs::write(
        &path,
        r#"
decision_threshold = 0.7
seed = 11
strict_schema = true

[synthesis]
expert_count = 5

[logging]
format = "json"
"#,
    )
    .unwrap();

    let config = DemoConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.decision_threshold, 0.7);
    assert_eq!(config.seed, Some(11));
    assert!(config.strict_schema);
    assert_eq!(config.synthesis.expert_count, 5);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
    assert!(config.ensure_valid().is_ok());
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = DemoConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[tokio::test]
async fn same_seed_gives_same_manual_prediction() {
    let dir = TempDir::new().unwrap();
    let config = write_datasets(&dir).with_seed(42);

    let first = manual_report(&config).await;
    let second = manual_report(&config).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn configured_expert_count_shapes_manual_report() {
    let dir = TempDir::new().unwrap();
    let mut config = write_datasets(&dir).with_seed(1);
    config.synthesis.expert_count = 3;

    match manual_report(&config).await {
        PredictResponse::Report(report) => assert_eq!(report.experts.len(), 3),
        PredictResponse::Invalid(report) => panic!("unexpected rejection: {report:?}"),
    }
}

#[tokio::test]
async fn missing_dataset_file_fails_the_session() {
    let dir = TempDir::new().unwrap();
    let synthesis = dir.path().join("synthesis_data.json");
    fs::write(&synthesis, SYNTHESIS_JSON).unwrap();
    let config = DemoConfig::new().with_paths(dir.path().join("samples.json"), synthesis);

    let mut session = Session::from_config(&config);
    let err = session
        .load(&FileSource::new(&config.samples_path, &config.synthesis_path))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Load(_)));
    assert_eq!(session.status(), SessionStatus::LoadFailed);
    assert!(session.failure().unwrap().detail.contains("samples"));
}

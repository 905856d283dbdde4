#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use podium_server::infra::{
    config::{Config, DataConfig, ResultsConfig, ServerConfig},
    startup::{build_app, load_state},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const ALGORITHMS: &str = r#"[
  {"id": "a", "algorithmName": "HUGO", "datasetProfile": "BOSSBase-256", "algorithmFamily": "Spatial",
   "compositeScore": 95, "psnrDb": 43.1, "ber": 0.010, "payloadBpp": 0.40, "ssim": 0.98,
   "lastEvaluatedIso": "2026-02-24T10:00:00.000Z", "compressionScore": 96.0, "noiseScore": 91.5},
  {"id": "b", "algorithmName": "S-UNIWARD", "datasetProfile": "BOSSBase-512", "algorithmFamily": "Spatial",
   "compositeScore": 95, "psnrDb": 43.1, "ber": 0.009, "payloadBpp": 0.38, "ssim": 0.99,
   "lastEvaluatedIso": "2026-02-24T11:00:00.000Z"},
  {"id": "c", "algorithmName": "SteganoGAN", "datasetProfile": "DIV2K-Color", "algorithmFamily": "GAN",
   "compositeScore": 90, "psnrDb": 41.0, "ber": 0.015, "payloadBpp": 0.72, "ssim": 0.95,
   "lastEvaluatedIso": "2026-02-20T10:00:00.000Z"}
]"#;

pub const MODELS: &str = r#"[
  {"id": "m1", "modelName": "Orion", "provider": "Acme", "compositeScore": 88, "qualityScore": 90,
   "latencyMs": 420, "costPer1kTokens": 0.012, "lastEvaluatedIso": "2026-03-01T09:30:00Z"},
  {"id": "m2", "modelName": "Lyra", "provider": "Globex", "compositeScore": 91.5, "qualityScore": 87,
   "latencyMs": 610, "costPer1kTokens": 0.03, "lastEvaluatedIso": "2026-03-02T09:30:00Z"}
]"#;

pub const SCORES_CSV: &str = "algorithm,overall_score\nHUGO,95.0\n";

pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn results_dir(&self) -> PathBuf {
        self.dir.path().join("results")
    }
}

pub fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = dir.path().join("data");
    let run = dir.path().join("results").join("example-lsb").join("test-run");
    fs::create_dir_all(&data).expect("data dir");
    fs::create_dir_all(&run).expect("run dir");

    fs::write(data.join("leaderboard.json"), ALGORITHMS).expect("algorithms");
    fs::write(data.join("models.json"), MODELS).expect("models");
    fs::write(run.join("scores-test-run.csv"), SCORES_CSV).expect("scores");
    fs::write(run.join("report.md"), "# Report\n").expect("report");

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        data: DataConfig {
            algorithm_data_path: data.join("leaderboard.json"),
            model_data_path: data.join("models.json"),
        },
        results: ResultsConfig {
            results_dir: dir.path().join("results"),
            test_run_dir: PathBuf::from("example-lsb/test-run"),
        },
    };

    let state = load_state(config).expect("state");
    TestApp {
        router: build_app(state),
        dir,
    }
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    app.router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

pub async fn get_json(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

//! End-to-end load through the public API: config file, application
//! bootstrap and layer loading against a canned HTTP backend.

use std::collections::HashMap;
use std::sync::Mutex;

use nodemap::api::{ApiError, HttpClient};
use nodemap::app::{AppConfig, AppError, MapApplication};
use nodemap::config::{ConfigFile, ConfigKey};
use nodemap::loader::LoadError;
use nodemap::map::MapSurface;
use tempfile::tempdir;

#[derive(Default)]
struct CannedBackend {
    bodies: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl CannedBackend {
    fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }
}

impl HttpClient for CannedBackend {
    async fn get(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.bodies.get(url) {
            Some(body) => Ok(body.clone().into_bytes()),
            None => Err(ApiError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

fn backend(base: &str) -> CannedBackend {
    CannedBackend::default()
        .with(
            &format!("{}/layers/", base),
            r#"[
                {"name": "Roma", "slug": "roma", "description": "Rome mesh"},
                {"name": "Pisa", "slug": "pisa"}
            ]"#,
        )
        .with(
            &format!("{}/layers/roma/geojson/", base),
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "id": 1, "geometry": {"type": "Point", "coordinates": [12.49, 41.87]}, "properties": {"name": "Colosseo", "slug": "colosseo"}},
                {"type": "Feature", "id": 2, "geometry": {"type": "Point", "coordinates": [12.4768, 41.8986]}, "properties": {"slug": "trevi"}},
                {"type": "Feature", "id": 3, "geometry": null, "properties": {"name": "unplaced"}}
            ]}"#,
        )
        .with(
            &format!("{}/layers/pisa/geojson/", base),
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [10.3966, 43.7230]}, "properties": {"name": "Torre"}}
            ]}"#,
        )
}

#[tokio::test]
async fn loads_layers_configured_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.ini");

    let mut file = ConfigFile::default();
    ConfigKey::ApiBaseUrl
        .set(&mut file, "http://nodes.example.org/api/v1/")
        .unwrap();
    ConfigKey::MapZoom.set(&mut file, "12").unwrap();
    file.save_to(&path).unwrap();

    let file = ConfigFile::load_from(&path).unwrap();
    let config = AppConfig::from_config_file(&file).unwrap();
    let app = MapApplication::initialize(config, backend("http://nodes.example.org/api/v1"))
        .await
        .unwrap();

    assert_eq!(app.registry().names(), vec!["Pisa", "Roma"]);

    let roma = app.registry().get("Roma").unwrap();
    assert_eq!(roma.marker_count(), 2);
    assert_eq!(roma.markers()[0].label.as_deref(), Some("Colosseo"));
    assert_eq!(roma.markers()[1].label.as_deref(), Some("trevi"));
    assert!(app.widget().has_overlay(roma));

    let summary = app.summary();
    assert_eq!(summary.view.zoom, 12);
    assert_eq!(summary.total_markers(), 3);
    assert_eq!(summary.base_layers[0].name, "OpenStreetMap");

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["layers"][1]["name"], "Roma");
    assert_eq!(json["layers"][1]["markers"], 2);

    app.dispose();
}

#[tokio::test]
async fn missing_layer_aborts_with_its_url() {
    let base = "http://nodes.example.org/api/v1";
    let client = CannedBackend::default().with(
        &format!("{}/layers/", base),
        r#"[{"name": "Lucca", "slug": "lucca"}]"#,
    );

    let result = MapApplication::initialize(AppConfig::new(base), client).await;

    match result {
        Err(AppError::Load(LoadError::LayerLoadFailed { url, source })) => {
            assert_eq!(url, "http://nodes.example.org/api/v1/layers/lucca/geojson/");
            assert_eq!(
                source,
                ApiError::Status {
                    url: url.clone(),
                    status: 404
                }
            );
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("load should fail"),
    }
}

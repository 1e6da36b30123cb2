//! Application bootstrap implementation.
//!
//! `MapApplication` owns the map widget, the layer registry and the layer
//! control, and runs the layer loader exactly once during `initialize()`.

use tracing::info;

use super::config::AppConfig;
use super::error::AppError;
use super::summary::{AppSummary, BaseLayerSummary, LayerSummary};
use crate::api::{HttpClient, ReqwestClient};
use crate::coord::LatLng;
use crate::loader::LayerLoader;
use crate::map::{LayerControl, LayerRegistry, MapWidget, OSM_LAYER_NAME};

/// Map application with explicit lifecycle.
///
/// # Example
///
/// ```ignore
/// use nodemap::app::{AppConfig, MapApplication};
///
/// let config = AppConfig::new("http://localhost:8000/api/v1");
/// let app = MapApplication::start(config).await?;
///
/// for name in app.registry().names() {
///     println!("{}", name);
/// }
///
/// app.dispose();
/// ```
pub struct MapApplication {
    config: AppConfig,
    widget: MapWidget,
    control: LayerControl,
}

impl MapApplication {
    /// Start the application with a reqwest client built from the config.
    pub async fn start(config: AppConfig) -> Result<Self, AppError> {
        let client =
            ReqwestClient::with_timeout(config.api.timeout_secs).map_err(AppError::ClientCreation)?;
        Self::initialize(config, client).await
    }

    /// Initialize the application with the given HTTP client.
    ///
    /// This method:
    /// 1. Creates the map widget with the configured view and base layer
    /// 2. Loads every layer, showing each one on the widget
    /// 3. Builds the layer control from the base layer and the registry
    ///
    /// # Errors
    ///
    /// Returns an error if any layer fails to load.
    pub async fn initialize<C: HttpClient>(config: AppConfig, client: C) -> Result<Self, AppError> {
        info!(api = %config.api.base_url, "Initializing map application");

        let mut widget = MapWidget::new(config.view, config.base_layer.clone());

        let loader = LayerLoader::new(client, &config.api).with_cluster_options(config.cluster);
        let registry = loader.load(&mut widget).await?;

        let control = LayerControl::new(
            vec![(OSM_LAYER_NAME.to_string(), config.base_layer.clone())],
            registry,
        );

        info!(
            layers = control.overlays().len(),
            visible = widget.overlays().len(),
            "Map application ready"
        );

        Ok(Self {
            config,
            widget,
            control,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn widget(&self) -> &MapWidget {
        &self.widget
    }

    pub fn control(&self) -> &LayerControl {
        &self.control
    }

    pub fn registry(&self) -> &LayerRegistry {
        self.control.overlays()
    }

    /// Show or hide a layer by name.
    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> Result<(), AppError> {
        self.control
            .set_overlay_visible(&mut self.widget, name, visible)?;
        Ok(())
    }

    /// Move the map view.
    pub fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<(), AppError> {
        self.widget
            .view_mut()
            .set_view(center, zoom)
            .map_err(crate::map::MapError::from)?;
        Ok(())
    }

    /// Snapshot of the view and every layer, clustered at the view's zoom.
    pub fn summary(&self) -> AppSummary {
        let zoom = self.widget.view().zoom;

        let base_layers = self
            .control
            .base_layers()
            .iter()
            .map(|(name, layer)| BaseLayerSummary {
                name: name.clone(),
                url_template: layer.url_template.clone(),
            })
            .collect();

        let registry = self.control.overlays();
        let layers = registry
            .names()
            .into_iter()
            .filter_map(|name| registry.get(name).map(|group| (name, group)))
            .map(|(name, group)| LayerSummary {
                name: name.to_string(),
                markers: group.marker_count(),
                shapes: group.shape_count(),
                clusters: group.clusters(zoom).len(),
                visible: self
                    .control
                    .is_overlay_visible(&self.widget, name)
                    .unwrap_or(false),
                bounds: group.bounds(),
            })
            .collect();

        AppSummary {
            view: *self.widget.view(),
            base_layers,
            layers,
        }
    }

    /// Shut the application down, removing every overlay from the map.
    pub fn dispose(mut self) {
        let removed = self.widget.clear_overlays();
        info!(overlays = removed, "Map application disposed");
    }
}

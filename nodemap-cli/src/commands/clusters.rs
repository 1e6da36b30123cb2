//! Clusters command - show how one layer's markers group at a zoom level.

use nodemap::cluster::{Cluster, ClusterGroup};

use super::common::{resolve_app_config, ApiOverrides, CliRunner, GlobalArgs};
use crate::error::CliError;

/// Run the clusters command.
pub fn run(globals: &GlobalArgs, layer: &str, overrides: ApiOverrides) -> Result<(), CliError> {
    let runner = CliRunner::new(globals)?;
    runner.log_startup("clusters");

    let app_config = resolve_app_config(&overrides, runner.config())?;
    let zoom = app_config.view.zoom;
    let app = runner.start_app(app_config)?;

    let group = app.registry().get(layer).ok_or_else(|| CliError::UnknownLayer {
        name: layer.to_string(),
        available: app
            .registry()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })?;

    let clusters = group.clusters(zoom);
    println!(
        "{}: {} markers in {} clusters at zoom {}",
        layer,
        group.marker_count(),
        clusters.len(),
        zoom
    );
    for cluster in &clusters {
        println!("  {}", describe_cluster(group, cluster));
    }

    app.dispose();
    Ok(())
}

/// One line per cluster: size and center, or the marker label for singles.
fn describe_cluster(group: &ClusterGroup, cluster: &Cluster) -> String {
    let center = format!("({:.5}, {:.5})", cluster.center.lat, cluster.center.lng);

    if cluster.is_single() {
        let label = group.markers()[cluster.members[0]]
            .label
            .as_deref()
            .unwrap_or("(unnamed)");
        format!("{:>5}  {}  {}", 1, center, label)
    } else {
        format!("{:>5}  {}", cluster.size(), center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodemap::cluster::ClusterOptions;
    use nodemap::geojson::FeatureCollection;

    fn group() -> ClusterGroup {
        let fc: FeatureCollection = serde_json::from_str(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [12.49, 41.87]}, "properties": {"name": "Colosseo"}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [12.50, 41.88]}, "properties": {}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [10.40, 43.72]}, "properties": {}}
            ]}"#,
        )
        .unwrap();
        ClusterGroup::from_collection(&fc, ClusterOptions::default())
    }

    #[test]
    fn test_describe_clusters() {
        let group = group();
        let clusters = group.clusters(9);

        assert_eq!(
            describe_cluster(&group, &clusters[0]),
            "    2  (41.87500, 12.49500)"
        );
        assert_eq!(
            describe_cluster(&group, &clusters[1]),
            "    1  (43.72000, 10.40000)  (unnamed)"
        );
    }

    #[test]
    fn test_single_marker_shows_label() {
        let group = group();
        let clusters = group.clusters(18);

        assert_eq!(clusters.len(), 3);
        assert!(describe_cluster(&group, &clusters[0]).ends_with("Colosseo"));
    }
}

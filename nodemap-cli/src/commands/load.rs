//! Load command - fetch every layer and print a summary.

use nodemap::app::AppSummary;

use super::common::{resolve_app_config, ApiOverrides, CliRunner, GlobalArgs};
use crate::error::CliError;

/// Run the load command.
pub fn run(globals: &GlobalArgs, overrides: ApiOverrides, json: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(globals)?;
    runner.log_startup("load");

    let app_config = resolve_app_config(&overrides, runner.config())?;
    let app = runner.start_app(app_config)?;
    let summary = app.summary();

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::Output(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", format_summary(&summary));
    }

    app.dispose();
    Ok(())
}

/// Render the summary as a plain text table.
fn format_summary(summary: &AppSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "View: {:.5}, {:.5} at zoom {}\n",
        summary.view.center.lat, summary.view.center.lng, summary.view.zoom
    ));
    for base in &summary.base_layers {
        out.push_str(&format!("Base layer: {} ({})\n", base.name, base.url_template));
    }
    out.push('\n');

    if summary.layers.is_empty() {
        out.push_str("No layers.\n");
        return out;
    }

    let width = summary
        .layers
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(0)
        .max("Layer".len());

    out.push_str(&format!(
        "{:<width$}  {:>7}  {:>6}  {:>8}  {}\n",
        "Layer", "Markers", "Shapes", "Clusters", "Visible",
        width = width
    ));
    for layer in &summary.layers {
        out.push_str(&format!(
            "{:<width$}  {:>7}  {:>6}  {:>8}  {}\n",
            layer.name,
            layer.markers,
            layer.shapes,
            layer.clusters,
            if layer.visible { "yes" } else { "no" },
            width = width
        ));
    }
    out.push_str(&format!(
        "\n{} layers, {} markers\n",
        summary.layers.len(),
        summary.total_markers()
    ));
    out
}

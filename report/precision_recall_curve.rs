use crate::chart::{draw_line_chart, LineChart};
use anyhow::{format_err, Result};
use std::path::Path;

/// Plots the precision-recall curve, with the average precision in the legend.
pub fn plot_precision_recall_curve(
	probabilities: &[f32],
	labels: &[usize],
	output_dir: &Path,
) -> Result<()> {
	let curve = verdict_metrics::precision_recall_curve(probabilities, labels)?;
	let average_precision = verdict_metrics::average_precision(probabilities, labels)?;
	let points: Vec<(f32, f32)> = curve
		.iter()
		.map(|point| (point.recall, point.precision))
		.collect();
	let path = output_dir.join("precision_recall_curve.png");
	let legend = format!("AP = {:.4}", average_precision);
	draw_line_chart(LineChart {
		path: &path,
		caption: "Precision-Recall Curve",
		x_desc: "Recall",
		y_desc: "Precision",
		points: &points,
		legend: &legend,
	})
	.map_err(|error| format_err!("failed to render {}: {}", path.display(), error))
}

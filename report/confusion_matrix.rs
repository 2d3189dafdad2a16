use crate::chart::{CAPTION_FONT, CHART_HEIGHT, CHART_WIDTH};
use anyhow::{ensure, format_err, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::path::Path;
use verdict_metrics::BinaryConfusionMatrix;

const CELL_SIZE: i32 = 150;
const GRID_LEFT: i32 = 200;
const GRID_TOP: i32 = 80;

/// Plots the confusion matrix as a heatmap with the count written in each cell, darker cells labelled in white.
pub fn plot_confusion_matrix(
	predictions: &[usize],
	labels: &[usize],
	class_names: [&str; 2],
	output_dir: &Path,
) -> Result<()> {
	ensure!(
		predictions.len() == labels.len(),
		"predictions and labels have mismatched lengths: {} != {}",
		predictions.len(),
		labels.len()
	);
	ensure!(!labels.is_empty(), "predictions and labels are empty");
	let confusion_matrix = BinaryConfusionMatrix::from_labels(predictions, labels);
	let path = output_dir.join("confusion_matrix.png");
	draw(&confusion_matrix, class_names, &path)
		.map_err(|error| format_err!("failed to render {}: {}", path.display(), error))
}

fn draw(
	confusion_matrix: &BinaryConfusionMatrix,
	class_names: [&str; 2],
	path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
	root.fill(&WHITE)?;
	// rows are the true label, columns are the predicted label
	let cells = [
		[confusion_matrix.true_negatives, confusion_matrix.false_positives],
		[confusion_matrix.false_negatives, confusion_matrix.true_positives],
	];
	let max = *cells.iter().flatten().max().unwrap();
	let caption_style = CAPTION_FONT
		.into_font()
		.color(&BLACK)
		.pos(Pos::new(HPos::Center, VPos::Center));
	root.draw(&Text::new(
		"Confusion Matrix",
		(CHART_WIDTH as i32 / 2, 40),
		caption_style,
	))?;
	for (row, row_cells) in cells.iter().enumerate() {
		for (column, count) in row_cells.iter().enumerate() {
			let x = GRID_LEFT + column as i32 * CELL_SIZE;
			let y = GRID_TOP + row as i32 * CELL_SIZE;
			let fraction = if max == 0 {
				0.0
			} else {
				*count as f64 / max as f64
			};
			root.draw(&Rectangle::new(
				[(x, y), (x + CELL_SIZE, y + CELL_SIZE)],
				BLUE.mix(0.1 + 0.8 * fraction).filled(),
			))?;
			let text_color = if *count * 2 > max { &WHITE } else { &BLACK };
			let count_style = ("sans-serif", 20)
				.into_font()
				.color(text_color)
				.pos(Pos::new(HPos::Center, VPos::Center));
			root.draw(&Text::new(
				count.to_string(),
				(x + CELL_SIZE / 2, y + CELL_SIZE / 2),
				count_style,
			))?;
		}
	}
	let label_style = ("sans-serif", 18)
		.into_font()
		.color(&BLACK)
		.pos(Pos::new(HPos::Center, VPos::Center));
	for (index, class_name) in class_names.iter().enumerate() {
		let center = GRID_LEFT + index as i32 * CELL_SIZE + CELL_SIZE / 2;
		// column labels under the grid, row labels to its left
		root.draw(&Text::new(
			*class_name,
			(center, GRID_TOP + 2 * CELL_SIZE + 20),
			label_style.clone(),
		))?;
		let center = GRID_TOP + index as i32 * CELL_SIZE + CELL_SIZE / 2;
		root.draw(&Text::new(
			*class_name,
			(GRID_LEFT - 40, center),
			label_style.clone(),
		))?;
	}
	root.draw(&Text::new(
		"Predicted label",
		(GRID_LEFT + CELL_SIZE, GRID_TOP + 2 * CELL_SIZE + 50),
		label_style.clone(),
	))?;
	let rotated_style = ("sans-serif", 18)
		.into_font()
		.transform(FontTransform::Rotate270)
		.color(&BLACK)
		.pos(Pos::new(HPos::Center, VPos::Center));
	root.draw(&Text::new(
		"True label",
		(GRID_LEFT - 90, GRID_TOP + CELL_SIZE),
		rotated_style,
	))?;
	root.present()?;
	Ok(())
}

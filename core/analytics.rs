/*!
Static evaluation numbers for each pretrained model, and the ROC curve drawn from them.
*/

use crate::model::ModelKey;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ModelStats {
	pub accuracy: f64,
	pub precision: f64,
	pub recall: f64,
	pub f1: f64,
	pub roc_auc: f64,
}

impl ModelStats {
	pub fn for_model(model: ModelKey) -> ModelStats {
		match model {
			ModelKey::K2 => ModelStats {
				accuracy: 0.92,
				precision: 0.88,
				recall: 0.91,
				f1: 0.895,
				roc_auc: 0.93,
			},
			ModelKey::Kepler => ModelStats {
				accuracy: 0.95,
				precision: 0.94,
				recall: 0.96,
				f1: 0.95,
				roc_auc: 0.97,
			},
			ModelKey::Tess => ModelStats {
				accuracy: 0.89,
				precision: 0.85,
				recall: 0.88,
				f1: 0.865,
				roc_auc: 0.90,
			},
		}
	}

	/// The metrics drawn as gauges.
	pub fn gauges(&self) -> [(&'static str, f64); 3] {
		[
			("Accuracy", self.accuracy),
			("Precision", self.precision),
			("Recall", self.recall),
		]
	}
}

/// The model shown when none is selected.
pub const DEFAULT_MODEL: ModelKey = ModelKey::K2;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ChartPoint {
	pub x: f64,
	pub y: f64,
}

/// The ROC curve for a model with the given area under the curve, sampled every 0.05.
pub fn roc_series(roc_auc: f64) -> Vec<ChartPoint> {
	(0..=100)
		.step_by(5)
		.map(|i| {
			let x = f64::from(i) / 100.0;
			let y = (x * roc_auc + (1.0 - roc_auc) * (1.0 - x)).min(1.0);
			ChartPoint { x, y }
		})
		.collect()
}

/// Format a fraction such as `0.92` as `92.0%`.
pub fn percent_label(value: f64) -> String {
	format!("{:.1}%", value * 100.0)
}

#[test]
fn test_roc_series() {
	let series = roc_series(ModelStats::for_model(ModelKey::K2).roc_auc);
	assert_eq!(series.len(), 21);
	assert_eq!(series[0].x, 0.0);
	assert!((series[0].y - 0.07).abs() < 1e-9);
	assert_eq!(series[20].x, 1.0);
	assert!((series[20].y - 0.93).abs() < 1e-9);
	assert!(series.iter().all(|point| point.y <= 1.0));
	assert!(series.windows(2).all(|pair| pair[0].x < pair[1].x));
}

#[test]
fn test_model_stats() {
	insta::assert_debug_snapshot!(ModelStats::for_model(ModelKey::Kepler), @r###"
 ModelStats {
     accuracy: 0.95,
     precision: 0.94,
     recall: 0.96,
     f1: 0.95,
     roc_auc: 0.97,
 }
 "###);
	assert_eq!(ModelStats::for_model(ModelKey::Tess).f1, 0.865);
	assert_eq!(percent_label(0.92), "92.0%");
	assert_eq!(percent_label(0.88), "88.0%");
}

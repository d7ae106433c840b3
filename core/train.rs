/*!
Model training on the dashboard. The hyperparameters are recorded with the run and shown back to the user, but the report revealed when the run completes is always the same bundle.
*/

use crate::model::ModelKey;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Hyperparameters {
	pub learning_rate: f64,
	pub batch_size: u32,
	pub epochs: u32,
	/// Percent of the dataset held out for validation.
	pub validation_split: u32,
}

impl Default for Hyperparameters {
	fn default() -> Hyperparameters {
		Hyperparameters {
			learning_rate: 0.001,
			batch_size: 32,
			epochs: 10,
			validation_split: 20,
		}
	}
}

impl Hyperparameters {
	/// Apply a submitted form value. Values that do not parse leave the field unchanged.
	pub fn set(&mut self, name: &str, value: &str) -> bool {
		let value = value.trim();
		match name {
			"learning_rate" => match lexical::parse::<f64, _>(value) {
				Ok(learning_rate) if learning_rate.is_finite() => {
					self.learning_rate = learning_rate;
					true
				}
				_ => false,
			},
			"batch_size" => parse_u32(value).map(|v| self.batch_size = v).is_some(),
			"epochs" => parse_u32(value).map(|v| self.epochs = v).is_some(),
			"validation_split" => parse_u32(value)
				.filter(|v| *v <= 100)
				.map(|v| self.validation_split = v)
				.is_some(),
			_ => false,
		}
	}
}

fn parse_u32(value: &str) -> Option<u32> {
	lexical::parse::<u32, _>(value).ok()
}

/// What the user submitted to start a training run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TrainingRequest {
	pub model: ModelKey,
	pub file_name: String,
	pub hyperparameters: Hyperparameters,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RocPoint {
	pub false_positive_rate: f64,
	pub true_positive_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SummaryMetrics {
	pub accuracy: f64,
	pub precision: f64,
	pub recall: f64,
}

impl SummaryMetrics {
	/// Each metric with its display name, in display order.
	pub fn entries(&self) -> [(&'static str, f64); 3] {
		[
			("accuracy", self.accuracy),
			("precision", self.precision),
			("recall", self.recall),
		]
	}
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TrainingReport {
	pub request: TrainingRequest,
	pub loss: Vec<f64>,
	pub val_loss: Vec<f64>,
	pub accuracy: Vec<f64>,
	pub val_accuracy: Vec<f64>,
	pub roc_points: Vec<RocPoint>,
	pub metrics: SummaryMetrics,
}

impl TrainingReport {
	/// The 1-based epoch numbers the loss and accuracy curves are plotted against.
	pub fn epochs(&self) -> Vec<u32> {
		(1..=self.loss.len() as u32).collect()
	}
}

/// Produce the report for a finished run.
pub fn simulated_report(request: &TrainingRequest) -> TrainingReport {
	let roc = [
		(0.0, 0.0),
		(0.1, 0.4),
		(0.2, 0.65),
		(0.3, 0.78),
		(0.4, 0.86),
		(0.5, 0.91),
		(0.6, 0.94),
		(0.7, 0.96),
		(0.8, 0.98),
		(0.9, 0.99),
		(1.0, 1.0),
	];
	TrainingReport {
		request: request.clone(),
		loss: vec![0.9, 0.75, 0.62, 0.55, 0.48, 0.42, 0.38, 0.35, 0.33, 0.3],
		val_loss: vec![0.95, 0.8, 0.7, 0.6, 0.55, 0.5, 0.45, 0.42, 0.4, 0.38],
		accuracy: vec![0.55, 0.65, 0.72, 0.78, 0.82, 0.86, 0.88, 0.91, 0.92, 0.94],
		val_accuracy: vec![0.5, 0.6, 0.68, 0.74, 0.79, 0.83, 0.86, 0.88, 0.9, 0.91],
		roc_points: roc
			.iter()
			.map(|(false_positive_rate, true_positive_rate)| RocPoint {
				false_positive_rate: *false_positive_rate,
				true_positive_rate: *true_positive_rate,
			})
			.collect(),
		metrics: SummaryMetrics {
			accuracy: 0.92,
			precision: 0.88,
			recall: 0.91,
		},
	}
}

#[test]
fn test_hyperparameters_do_not_change_the_report() {
	let request = TrainingRequest {
		model: ModelKey::Kepler,
		file_name: "koi.csv".to_owned(),
		hyperparameters: Hyperparameters::default(),
	};
	let mut other = request.clone();
	other.hyperparameters.epochs = 3;
	other.hyperparameters.learning_rate = 0.5;
	let a = simulated_report(&request);
	let b = simulated_report(&other);
	assert_eq!(a.loss, b.loss);
	assert_eq!(a.roc_points, b.roc_points);
	assert_eq!(a.metrics, b.metrics);
	assert_eq!(b.request.hyperparameters.epochs, 3);
	assert_eq!(a.epochs(), (1..=10).collect::<Vec<u32>>());
	assert_eq!(a.val_loss.len(), 10);
	assert_eq!(a.accuracy.len(), 10);
	assert_eq!(a.val_accuracy.len(), 10);
	assert_eq!(a.roc_points.len(), 11);
}

#[test]
fn test_set_hyperparameters() {
	let mut hyperparameters = Hyperparameters::default();
	assert!(hyperparameters.set("learning_rate", "0.01"));
	assert!(hyperparameters.set("batch_size", " 64 "));
	assert!(!hyperparameters.set("epochs", "ten"));
	assert!(!hyperparameters.set("validation_split", "120"));
	assert!(!hyperparameters.set("momentum", "0.9"));
	insta::assert_debug_snapshot!(hyperparameters, @r###"
 Hyperparameters {
     learning_rate: 0.01,
     batch_size: 64,
     epochs: 10,
     validation_split: 20,
 }
 "###);
}

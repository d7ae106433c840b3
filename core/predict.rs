/*!
The quick prediction shown on the guest landing page. No model is evaluated: a probability is drawn uniformly from [60, 100), rounded to one decimal, and every other characteristic is a threshold on that probability.
*/

use rand::Rng;
use std::collections::BTreeMap;

pub const PROBABILITY_MIN: f64 = 60.0;
pub const PROBABILITY_MAX: f64 = 100.0;

/// A numeric input on the prediction form.
#[derive(Debug, Clone, Copy)]
pub struct PredictionField {
	pub name: &'static str,
	pub label: &'static str,
	pub placeholder: &'static str,
	pub helper: &'static str,
}

pub const PREDICTION_FIELDS: [PredictionField; 4] = [
	PredictionField {
		name: "orbital_period",
		label: "Orbital Period (days)",
		placeholder: "e.g. 365.25",
		helper: "Time the planet takes to orbit its star",
	},
	PredictionField {
		name: "planet_radius",
		label: "Planet Radius (Earth radii)",
		placeholder: "e.g. 1.2",
		helper: "Size of the planet compared to Earth",
	},
	PredictionField {
		name: "stellar_temperature",
		label: "Stellar Temperature (K)",
		placeholder: "e.g. 5778",
		helper: "Temperature of the host star",
	},
	PredictionField {
		name: "transit_depth",
		label: "Transit Depth (%)",
		placeholder: "e.g. 0.01",
		helper: "Dip in brightness during the transit",
	},
];

/// The values typed into the prediction form, keyed by field name. Values are kept as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionInput(BTreeMap<String, String>);

impl PredictionInput {
	/// Keep only the known prediction fields from a query string.
	pub fn from_search_params(search_params: &BTreeMap<String, String>) -> PredictionInput {
		let values = PREDICTION_FIELDS
			.iter()
			.filter_map(|field| {
				search_params
					.get(field.name)
					.map(|value| (field.name.to_owned(), value.clone()))
			})
			.collect();
		PredictionInput(values)
	}

	pub fn set(&mut self, name: &str, value: impl Into<String>) {
		self.0.insert(name.to_owned(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(|value| value.as_str())
	}

	/// A prediction can be triggered once any field holds a value.
	pub fn is_populated(&self) -> bool {
		self.0.values().any(|value| !value.trim().is_empty())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Classification {
	Probable,
	Possible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PlanetType {
	SuperEarth,
	HotJupiter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Zone {
	Habitable,
	NonHabitable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Confidence {
	High,
	Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PredictionResult {
	/// Percentage in [60, 100] with one decimal.
	pub probability: f64,
	pub classification: Classification,
	pub planet_type: PlanetType,
	pub zone: Zone,
	pub confidence: Confidence,
}

/// The result displayed before the first prediction is made.
impl Default for PredictionResult {
	fn default() -> PredictionResult {
		derive(87.3)
	}
}

/// Map a probability to its labels.
pub fn derive(probability: f64) -> PredictionResult {
	PredictionResult {
		probability,
		classification: if probability > 75.0 {
			Classification::Probable
		} else {
			Classification::Possible
		},
		planet_type: if probability > 80.0 {
			PlanetType::SuperEarth
		} else {
			PlanetType::HotJupiter
		},
		zone: if probability > 70.0 {
			Zone::Habitable
		} else {
			Zone::NonHabitable
		},
		confidence: if probability > 85.0 {
			Confidence::High
		} else {
			Confidence::Medium
		},
	}
}

/// Draw a fresh prediction.
pub fn simulate<R: Rng + ?Sized>(rng: &mut R) -> PredictionResult {
	let value: f64 = rng.gen_range(PROBABILITY_MIN..PROBABILITY_MAX);
	derive(round_to_tenth(value))
}

fn round_to_tenth(value: f64) -> f64 {
	(value * 10.0).round() / 10.0
}

impl std::fmt::Display for Classification {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Classification::Probable => write!(f, "PROBABLE"),
			Classification::Possible => write!(f, "POSSIBLE"),
		}
	}
}

impl std::fmt::Display for PlanetType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			PlanetType::SuperEarth => write!(f, "Super-Earth"),
			PlanetType::HotJupiter => write!(f, "Hot Jupiter"),
		}
	}
}

impl std::fmt::Display for Zone {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Zone::Habitable => write!(f, "Habitable"),
			Zone::NonHabitable => write!(f, "Non-Habitable"),
		}
	}
}

impl std::fmt::Display for Confidence {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Confidence::High => write!(f, "High"),
			Confidence::Medium => write!(f, "Medium"),
		}
	}
}

#[test]
fn test_thresholds_hold_for_every_displayable_probability() {
	for tenths in 600..=1000 {
		let probability = f64::from(tenths) / 10.0;
		let result = derive(probability);
		assert_eq!(
			result.classification == Classification::Probable,
			probability > 75.0
		);
		assert_eq!(result.confidence == Confidence::High, probability > 85.0);
		assert_eq!(result.planet_type == PlanetType::SuperEarth, probability > 80.0);
		assert_eq!(result.zone == Zone::Habitable, probability > 70.0);
	}
}

#[test]
fn test_boundaries_are_exclusive() {
	let result = derive(75.0);
	assert_eq!(result.classification, Classification::Possible);
	assert_eq!(result.zone, Zone::Habitable);
	let result = derive(85.0);
	assert_eq!(result.confidence, Confidence::Medium);
	assert_eq!(result.planet_type, PlanetType::SuperEarth);
	let result = derive(70.0);
	assert_eq!(result.zone, Zone::NonHabitable);
}

#[test]
fn test_simulate() {
	use rand::SeedableRng;
	let mut rng = rand::rngs::StdRng::seed_from_u64(42);
	for _ in 0..1000 {
		let result = simulate(&mut rng);
		assert!(result.probability >= PROBABILITY_MIN);
		assert!(result.probability <= PROBABILITY_MAX);
		assert_eq!(round_to_tenth(result.probability), result.probability);
		assert_eq!(result, derive(result.probability));
	}
}

#[test]
fn test_default_result() {
	insta::assert_debug_snapshot!(PredictionResult::default(), @r###"
 PredictionResult {
     probability: 87.3,
     classification: Probable,
     planet_type: SuperEarth,
     zone: Habitable,
     confidence: High,
 }
 "###);
}

#[test]
fn test_prediction_input() {
	let mut search_params = BTreeMap::new();
	search_params.insert("orbital_period".to_owned(), "365.25".to_owned());
	search_params.insert("unrelated".to_owned(), "1".to_owned());
	let input = PredictionInput::from_search_params(&search_params);
	assert_eq!(input.get("orbital_period"), Some("365.25"));
	assert_eq!(input.get("unrelated"), None);
	assert!(input.is_populated());
	let mut input = PredictionInput::default();
	assert!(!input.is_populated());
	input.set("planet_radius", "   ");
	assert!(!input.is_populated());
}

use thiserror::Error;

/// The mission whose catalog a model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ModelKey {
	Kepler,
	Tess,
	K2,
}

impl ModelKey {
	pub const ALL: [ModelKey; 3] = [ModelKey::Kepler, ModelKey::Tess, ModelKey::K2];

	/// The value submitted by the model select fields.
	pub fn as_str(self) -> &'static str {
		match self {
			ModelKey::Kepler => "kepler",
			ModelKey::Tess => "tess",
			ModelKey::K2 => "k2",
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			ModelKey::Kepler => "Kepler",
			ModelKey::Tess => "TESS",
			ModelKey::K2 => "K2",
		}
	}
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown model \"{0}\"")]
pub struct ParseModelKeyError(pub String);

impl std::str::FromStr for ModelKey {
	type Err = ParseModelKeyError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"kepler" => Ok(ModelKey::Kepler),
			"tess" => Ok(ModelKey::Tess),
			"k2" => Ok(ModelKey::K2),
			_ => Err(ParseModelKeyError(s.to_owned())),
		}
	}
}

impl std::fmt::Display for ModelKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.title())
	}
}

#[test]
fn test_parse_model_key() {
	assert_eq!("kepler".parse(), Ok(ModelKey::Kepler));
	assert_eq!("TESS".parse(), Ok(ModelKey::Tess));
	assert_eq!("K2".parse(), Ok(ModelKey::K2));
	assert_eq!(
		"hubble".parse::<ModelKey>(),
		Err(ParseModelKeyError("hubble".to_owned()))
	);
	assert_eq!(
		"".parse::<ModelKey>(),
		Err(ParseModelKeyError("".to_owned()))
	);
	for model in ModelKey::ALL.iter() {
		assert_eq!(model.as_str().parse(), Ok(*model));
		assert_eq!(model.title().parse(), Ok(*model));
	}
}

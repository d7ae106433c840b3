/*!
Batch prediction over an uploaded catalog. The upload is accepted but never read; every run yields the same five KOI records.
*/

pub const CSV_FILE_NAME: &str = "predictions.csv";
pub const CSV_HEADER: [&str; 3] = ["KOI Name", "Prediction", "Probability"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Disposition {
	Confirmed,
	Candidate,
	FalsePositive,
}

impl std::fmt::Display for Disposition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Disposition::Confirmed => write!(f, "CONFIRMED"),
			Disposition::Candidate => write!(f, "CANDIDATE"),
			Disposition::FalsePositive => write!(f, "FALSE POSITIVE"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BatchRecord {
	pub koi_name: String,
	pub prediction: Disposition,
	/// In [0, 1].
	pub probability: f64,
}

impl BatchRecord {
	fn new(koi_name: &str, prediction: Disposition, probability: f64) -> BatchRecord {
		BatchRecord {
			koi_name: koi_name.to_owned(),
			prediction,
			probability,
		}
	}

	/// The probability as a percentage with one decimal, e.g. `95.0%`.
	pub fn probability_label(&self) -> String {
		format_percent(self.probability * 100.0)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassProportion {
	pub disposition: Disposition,
	pub count: usize,
	pub percent: f64,
}

impl ClassProportion {
	pub fn percent_label(&self) -> String {
		format_percent(self.percent)
	}
}

/// The outcome of a completed batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
	pub records: Vec<BatchRecord>,
	pub proportions: Vec<ClassProportion>,
}

impl BatchReport {
	pub fn new(records: Vec<BatchRecord>) -> BatchReport {
		let proportions = class_proportions(&records);
		BatchReport {
			records,
			proportions,
		}
	}
}

/// The records every batch run produces.
pub fn simulated_records() -> Vec<BatchRecord> {
	vec![
		BatchRecord::new("Kepler-22b", Disposition::Confirmed, 0.95),
		BatchRecord::new("Kepler-10c", Disposition::Candidate, 0.78),
		BatchRecord::new("Kepler-438b", Disposition::Confirmed, 0.89),
		BatchRecord::new("Kepler-1658b", Disposition::FalsePositive, 0.32),
		BatchRecord::new("Kepler-452b", Disposition::Candidate, 0.67),
	]
}

/// Count records per disposition in order of first appearance.
pub fn class_proportions(records: &[BatchRecord]) -> Vec<ClassProportion> {
	let mut counts: Vec<(Disposition, usize)> = Vec::new();
	for record in records {
		match counts
			.iter_mut()
			.find(|(disposition, _)| *disposition == record.prediction)
		{
			Some((_, count)) => *count += 1,
			None => counts.push((record.prediction, 1)),
		}
	}
	let total = records.len();
	counts
		.into_iter()
		.map(|(disposition, count)| ClassProportion {
			disposition,
			count,
			percent: count as f64 / total as f64 * 100.0,
		})
		.collect()
}

/// Serialize records to the downloadable csv. Rows are separated by `\n` with no trailing newline.
pub fn to_csv(records: &[BatchRecord]) -> Result<String, csv::Error> {
	let mut writer = csv::WriterBuilder::new()
		.terminator(csv::Terminator::Any(b'\n'))
		.from_writer(Vec::new());
	writer.write_record(&CSV_HEADER)?;
	for record in records {
		writer.write_record(&[
			record.koi_name.clone(),
			record.prediction.to_string(),
			record.probability_label(),
		])?;
	}
	writer.flush()?;
	let mut bytes = writer
		.into_inner()
		.map_err(|error| csv::Error::from(error.into_error()))?;
	if bytes.last() == Some(&b'\n') {
		bytes.pop();
	}
	// Every field written above is valid utf-8.
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn format_percent(value: f64) -> String {
	format!("{:.1}%", value)
}

#[test]
fn test_class_proportions() {
	let report = BatchReport::new(simulated_records());
	insta::assert_debug_snapshot!(report.proportions, @r###"
 [
     ClassProportion {
         disposition: Confirmed,
         count: 2,
         percent: 40.0,
     },
     ClassProportion {
         disposition: Candidate,
         count: 2,
         percent: 40.0,
     },
     ClassProportion {
         disposition: FalsePositive,
         count: 1,
         percent: 20.0,
     },
 ]
 "###);
	let labels: Vec<String> = report
		.proportions
		.iter()
		.map(|proportion| proportion.percent_label())
		.collect();
	assert_eq!(labels, vec!["40.0%", "40.0%", "20.0%"]);
}

#[test]
fn test_class_proportions_of_nothing() {
	assert!(class_proportions(&[]).is_empty());
}

#[test]
fn test_to_csv() {
	let csv = to_csv(&simulated_records()).unwrap();
	let lines: Vec<&str> = csv.lines().collect();
	assert_eq!(lines.len(), 6);
	assert_eq!(
		csv,
		"KOI Name,Prediction,Probability\n\
		Kepler-22b,CONFIRMED,95.0%\n\
		Kepler-10c,CANDIDATE,78.0%\n\
		Kepler-438b,CONFIRMED,89.0%\n\
		Kepler-1658b,FALSE POSITIVE,32.0%\n\
		Kepler-452b,CANDIDATE,67.0%"
	);
	for line in &lines[1..] {
		let probability = line.rsplit(',').next().unwrap();
		assert!(probability.ends_with('%'));
		let digits = probability.trim_end_matches('%');
		assert_eq!(digits.split('.').nth(1).map(str::len), Some(1));
	}
}

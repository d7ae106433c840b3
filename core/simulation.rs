/*!
The state machine shared by the batch and training runs. A run goes from `Idle` to `Loading` when it is started and to `Done` when its timer fires. Each start hands out a ticket, and completing with a ticket from an earlier start does nothing, so a late timer can never overwrite a newer run.
*/

use crate::model::ModelKey;

#[derive(Debug, Clone, PartialEq)]
pub enum TaskState<T> {
	Idle,
	Loading,
	Done(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Simulation<T> {
	state: TaskState<T>,
	generation: u64,
}

impl<T> Default for Simulation<T> {
	fn default() -> Simulation<T> {
		Simulation {
			state: TaskState::Idle,
			generation: 0,
		}
	}
}

impl<T> Simulation<T> {
	pub fn state(&self) -> &TaskState<T> {
		&self.state
	}

	pub fn is_loading(&self) -> bool {
		matches!(self.state, TaskState::Loading)
	}

	pub fn result(&self) -> Option<&T> {
		match &self.state {
			TaskState::Done(value) => Some(value),
			_ => None,
		}
	}

	/// Start a run. Returns `None` if a run is already loading.
	pub fn begin(&mut self) -> Option<Ticket> {
		if self.is_loading() {
			return None;
		}
		self.generation += 1;
		self.state = TaskState::Loading;
		Some(Ticket(self.generation))
	}

	/// Finish the run `ticket` was issued for. Returns whether the value was stored.
	pub fn complete(&mut self, ticket: Ticket, value: T) -> bool {
		if ticket.0 != self.generation || !self.is_loading() {
			return false;
		}
		self.state = TaskState::Done(value);
		true
	}

	/// Drop any result or pending run. Outstanding tickets become stale.
	pub fn reset(&mut self) {
		self.generation += 1;
		self.state = TaskState::Idle;
	}
}

/// A file chosen in an upload field. Only its name and size are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
	pub file_name: String,
	pub size: usize,
}

/// The model and file a run was submitted with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
	pub model: Option<ModelKey>,
	pub file: Option<UploadedFile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
	Model,
	File,
}

impl std::fmt::Display for MissingInput {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			MissingInput::Model => write!(f, "Select a model before starting."),
			MissingInput::File => write!(f, "Upload a CSV file before starting."),
		}
	}
}

impl Selection {
	/// A run can start only with both a model and a file.
	pub fn ready(&self) -> Result<(ModelKey, &UploadedFile), MissingInput> {
		let model = self.model.ok_or(MissingInput::Model)?;
		let file = self.file.as_ref().ok_or(MissingInput::File)?;
		Ok((model, file))
	}
}

#[test]
fn test_begin_and_complete() {
	let mut simulation = Simulation::default();
	assert_eq!(simulation.state(), &TaskState::Idle);
	let ticket = simulation.begin().unwrap();
	assert!(simulation.is_loading());
	assert!(simulation.begin().is_none());
	assert!(simulation.complete(ticket, 1));
	assert_eq!(simulation.result(), Some(&1));
	assert!(!simulation.complete(ticket, 2));
	assert_eq!(simulation.result(), Some(&1));
}

#[test]
fn test_stale_ticket_is_ignored() {
	let mut simulation = Simulation::default();
	let first = simulation.begin().unwrap();
	simulation.reset();
	let second = simulation.begin().unwrap();
	assert!(!simulation.complete(first, "stale"));
	assert!(simulation.is_loading());
	assert!(simulation.complete(second, "fresh"));
	assert_eq!(simulation.state(), &TaskState::Done("fresh"));
	let third = simulation.begin().unwrap();
	assert!(!simulation.complete(second, "late"));
	assert!(simulation.complete(third, "rerun"));
}

#[test]
fn test_selection() {
	let mut selection = Selection::default();
	assert_eq!(selection.ready().unwrap_err(), MissingInput::Model);
	selection.model = Some(ModelKey::Tess);
	assert_eq!(selection.ready().unwrap_err(), MissingInput::File);
	selection.file = Some(UploadedFile {
		file_name: "toi.csv".to_owned(),
		size: 128,
	});
	let (model, file) = selection.ready().unwrap();
	assert_eq!(model, ModelKey::Tess);
	assert_eq!(file.file_name, "toi.csv");
}

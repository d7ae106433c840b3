use super::get::render;
use crate::{
	common::{error::redirect, multipart::parse_multipart},
	Context,
};
use anyhow::Result;
use exo_core::{
	model::ModelKey,
	simulation::MissingInput,
	train::{simulated_report, Hyperparameters, TrainingRequest},
};
use hyper::{Body, Request, Response};

const HYPERPARAMETER_FIELDS: [&str; 4] = ["learning_rate", "batch_size", "epochs", "validation_split"];

pub async fn post(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	let session = context.sessions.resolve(&request).await;
	let mut form = parse_multipart(request).await?;
	let model = form
		.fields
		.get("model")
		.and_then(|model| model.parse::<ModelKey>().ok());
	let mut hyperparameters = Hyperparameters::default();
	for name in HYPERPARAMETER_FIELDS.iter() {
		if let Some(value) = form.fields.get(*name) {
			if !hyperparameters.set(name, value) {
				tracing::debug!(field = %name, %value, "kept default hyperparameter");
			}
		}
	}
	let file = form.files.remove("file");
	let started = context
		.sessions
		.with(session.id, |session| -> Result<_, MissingInput> {
			if session.training.is_loading() {
				return Ok(None);
			}
			session.training_selection.model = model;
			if file.is_some() {
				session.training_selection.file = file;
			}
			session.hyperparameters = hyperparameters;
			let (model, file) = session.training_selection.ready()?;
			let request = TrainingRequest {
				model,
				file_name: file.file_name.clone(),
				hyperparameters,
			};
			Ok(session.training.begin().map(|ticket| (ticket, request)))
		})
		.await;
	match started {
		Err(missing) => render(context, session, Some(missing.to_string())).await,
		Ok(started) => {
			match started {
				Some((ticket, request)) => {
					tracing::info!(
						session = %session.id,
						model = %request.model,
						file = %request.file_name,
						"training started"
					);
					context.sessions.complete_after(
						session.id,
						context.options.training_delay,
						ticket,
						|session| &mut session.training,
						simulated_report(&request),
					);
				}
				None => tracing::debug!(session = %session.id, "training already running"),
			}
			let mut response = redirect("/dashboard/training")?;
			session.set_cookie(&mut response)?;
			Ok(response)
		}
	}
}

use super::get::render;
use crate::{
	common::{error::redirect, multipart::parse_multipart},
	Context,
};
use anyhow::Result;
use exo_core::{
	batch::{simulated_records, BatchReport},
	model::ModelKey,
	simulation::MissingInput,
};
use hyper::{Body, Request, Response};

pub async fn post(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	let session = context.sessions.resolve(&request).await;
	let mut form = parse_multipart(request).await?;
	let model = form
		.fields
		.get("model")
		.and_then(|model| model.parse::<ModelKey>().ok());
	let file = form.files.remove("file");
	let started = context
		.sessions
		.with(session.id, |session| -> Result<_, MissingInput> {
			// The form keeps showing the running job's inputs.
			if session.batch.is_loading() {
				return Ok(None);
			}
			session.batch_selection.model = model;
			if file.is_some() {
				session.batch_selection.file = file;
			}
			session.batch_selection.ready()?;
			Ok(session.batch.begin())
		})
		.await;
	match started {
		Err(missing) => render(context, session, Some(missing.to_string())).await,
		Ok(ticket) => {
			match ticket {
				Some(ticket) => {
					tracing::info!(session = %session.id, model = ?model, "batch prediction started");
					context.sessions.complete_after(
						session.id,
						context.options.batch_delay,
						ticket,
						|session| &mut session.batch,
						BatchReport::new(simulated_records()),
					);
				}
				None => tracing::debug!(session = %session.id, "batch prediction already running"),
			}
			let mut response = redirect("/dashboard/batch")?;
			session.set_cookie(&mut response)?;
			Ok(response)
		}
	}
}

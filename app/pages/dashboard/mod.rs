use crate::{common::session::SessionHandle, layouts::html_response};
use anyhow::Result;
use exo_core::model::ModelKey;
use exo_ui as ui;
use hyper::{Body, Response};

pub mod analytics;
pub mod batch;
pub mod index;
pub mod training;

/// Render a dashboard page, sending the session cookie if the session was just created.
fn dashboard_response(session: SessionHandle, node: html::Node) -> Result<Response<Body>> {
	let mut response = html_response(node)?;
	session.set_cookie(&mut response)?;
	Ok(response)
}

/// The choices of the model select fields.
fn model_options() -> Vec<ui::SelectFieldOption> {
	ModelKey::ALL
		.iter()
		.map(|model| ui::SelectFieldOption {
			text: model.title().to_owned(),
			value: model.as_str().to_owned(),
		})
		.collect()
}

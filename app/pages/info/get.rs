use super::page::InfoPage;
use crate::{layouts::html_response, Context};
use anyhow::Result;
use exo_core::predict::{simulate, PredictionInput, PredictionResult};
use html::html;
use hyper::{Body, Request, Response};
use std::collections::BTreeMap;

pub async fn get(
	context: &Context,
	request: Request<Body>,
	search_params: Option<BTreeMap<String, String>>,
) -> Result<Response<Body>> {
	let user = context.sessions.user(&request).await;
	let input = search_params
		.as_ref()
		.map(PredictionInput::from_search_params)
		.unwrap_or_default();
	let result = if input.is_populated() {
		let result = simulate(&mut rand::thread_rng());
		tracing::debug!(probability = result.probability, "simulated prediction");
		result
	} else {
		PredictionResult::default()
	};
	html_response(html!(<InfoPage input={input} result={result} user={user} />))
}

use crate::{common::error::not_found, Context};
use anyhow::Result;
use exo_core::batch::{to_csv, CSV_FILE_NAME};
use hyper::{header, Body, Request, Response, StatusCode};

pub async fn download(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	let session = context
		.sessions
		.find(&request)
		.await
		.ok_or_else(not_found)?;
	let records = context
		.sessions
		.with(session.id, |session| {
			session.batch.result().map(|report| report.records.clone())
		})
		.await
		.ok_or_else(not_found)?;
	let csv = to_csv(&records)?;
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/csv")
		.header(
			header::CONTENT_DISPOSITION,
			format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
		)
		.body(Body::from(csv))?;
	Ok(response)
}

use crate::Context;
use anyhow::Result;
use hyper::{Body, Request, Response, StatusCode};

pub async fn get(_context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	let response = Response::builder()
		.status(StatusCode::OK)
		.body(Body::empty())?;
	Ok(response)
}

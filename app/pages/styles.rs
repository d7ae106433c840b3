use crate::Context;
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};

const STYLES: &str = include_str!("../styles.css");

pub async fn get(_context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/css")
		.header(header::CACHE_CONTROL, "max-age=3600")
		.body(Body::from(STYLES))?;
	Ok(response)
}

use derive_more::{Display, Error};
use hyper::{header, Body, Response, StatusCode};

#[derive(Display, Debug, Error)]
pub enum Error {
	BadRequest,
	NotFound,
}

/// Send the browser to `location` with a GET, as after a form post.
pub fn redirect(location: &str) -> anyhow::Result<Response<Body>> {
	let response = Response::builder()
		.status(StatusCode::SEE_OTHER)
		.header(header::LOCATION, location)
		.body(Body::empty())?;
	Ok(response)
}

pub fn bad_request() -> anyhow::Error {
	Error::BadRequest.into()
}

pub fn not_found() -> anyhow::Error {
	Error::NotFound.into()
}

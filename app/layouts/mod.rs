use hyper::{header, Body, Response, StatusCode};

mod dashboard_layout;
mod document;
mod page_layout;

pub use self::dashboard_layout::*;
pub use self::document::*;
pub use self::page_layout::*;

/// Render a page into a complete html response.
pub fn html_response(node: html::Node) -> anyhow::Result<Response<Body>> {
	let html = format!("<!doctype html>{}", node.render_to_string());
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Body::from(html))?;
	Ok(response)
}

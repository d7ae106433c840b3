use super::page::HomePage;
use crate::{layouts::html_response, Context};
use anyhow::Result;
use html::html;
use hyper::{Body, Request, Response};

pub async fn get(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	let user = context.sessions.user(&request).await;
	html_response(html!(<HomePage user={user} />))
}

use crate::{common::error::redirect, Context};
use anyhow::Result;
use hyper::{Body, Request, Response};

pub async fn post(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	if let Some(session) = context.sessions.find(&request).await {
		let user = context
			.sessions
			.with(session.id, |session| session.user.take())
			.await;
		if let Some(user) = user {
			tracing::info!(user = %user.user_name, "signed out");
		}
	}
	redirect("/")
}

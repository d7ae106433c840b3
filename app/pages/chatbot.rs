use crate::{
	common::{
		error::{bad_request, redirect},
		session::Sender,
	},
	Context,
};
use anyhow::Result;
use hyper::{body::to_bytes, Body, Request, Response};

#[derive(serde::Deserialize)]
struct ChatForm {
	#[serde(default)]
	message: String,
	return_to: Option<String>,
}

pub async fn post(context: &Context, mut request: Request<Body>) -> Result<Response<Body>> {
	let data = to_bytes(request.body_mut())
		.await
		.map_err(|_| bad_request())?;
	let ChatForm { message, return_to } =
		serde_urlencoded::from_bytes(&data).map_err(|_| bad_request())?;
	let location = local_path(return_to.as_deref());
	let message = message.trim().to_owned();
	if message.is_empty() {
		return redirect(location);
	}
	let session = context.sessions.resolve(&request).await;
	context
		.sessions
		.with(session.id, |session| session.push_chat(Sender::User, message.clone()))
		.await;
	let text = match context.client.send_message(&message).await {
		Ok(reply) => reply,
		Err(error) => error.to_string(),
	};
	context
		.sessions
		.with(session.id, |session| session.push_chat(Sender::Bot, text))
		.await;
	let mut response = redirect(location)?;
	session.set_cookie(&mut response)?;
	Ok(response)
}

/// Only redirect to paths on this site that fit in a `Location` header.
fn local_path(return_to: Option<&str>) -> &str {
	match return_to {
		Some(path)
			if path.starts_with('/')
				&& !path.starts_with("//")
				&& !path.contains('\\')
				&& !path.chars().any(char::is_control) =>
		{
			path
		}
		_ => "/dashboard",
	}
}

#[test]
fn test_local_path() {
	assert_eq!(local_path(Some("/dashboard/training")), "/dashboard/training");
	assert_eq!(local_path(None), "/dashboard");
	assert_eq!(local_path(Some("https://example.com")), "/dashboard");
	assert_eq!(local_path(Some("//example.com")), "/dashboard");
	assert_eq!(local_path(Some("/\\example.com")), "/dashboard");
	assert_eq!(local_path(Some("")), "/dashboard");
	assert_eq!(local_path(Some("/dashboard\r\nX-Evil: 1")), "/dashboard");
	assert_eq!(local_path(Some("/dashboard\u{0}")), "/dashboard");
	assert_eq!(local_path(Some("/dashboard/batch?tab=1")), "/dashboard/batch?tab=1");
}

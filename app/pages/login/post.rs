use super::page::LoginPage;
use crate::{
	common::error::{bad_request, redirect},
	layouts::html_response,
	Context,
};
use anyhow::Result;
use html::html;
use hyper::{body::to_bytes, Body, Request, Response};

#[derive(serde::Deserialize)]
struct LoginForm {
	email: String,
	password: String,
}

pub async fn post(context: &Context, mut request: Request<Body>) -> Result<Response<Body>> {
	let data = to_bytes(request.body_mut())
		.await
		.map_err(|_| bad_request())?;
	let LoginForm { email, password } =
		serde_urlencoded::from_bytes(&data).map_err(|_| bad_request())?;
	let error = match context.client.login(email.trim(), &password).await {
		Ok(response) => match response.user {
			Some(user) => {
				tracing::info!(user = %user.user_name, "signed in");
				let session = context.sessions.resolve(&request).await;
				context
					.sessions
					.with(session.id, |session| session.user = Some(user))
					.await;
				let mut response = redirect("/dashboard")?;
				session.set_cookie(&mut response)?;
				return Ok(response);
			}
			None if response.message.is_empty() => "Invalid email or password.".to_owned(),
			None => response.message,
		},
		Err(error) => error.to_string(),
	};
	let user = context.sessions.user(&request).await;
	html_response(html! {
		<LoginPage email={Some(email)} error={Some(error)} user={user} />
	})
}

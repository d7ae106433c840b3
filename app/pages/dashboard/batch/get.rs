use super::page::BatchPage;
use crate::{common::session::SessionHandle, pages::dashboard::dashboard_response, Context};
use anyhow::Result;
use html::html;
use hyper::{Body, Request, Response};

pub async fn get(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	let session = context.sessions.resolve(&request).await;
	render(context, session, None).await
}

pub(super) async fn render(
	context: &Context,
	session: SessionHandle,
	error: Option<String>,
) -> Result<Response<Body>> {
	let (user, chat, selection, state) = context
		.sessions
		.with(session.id, |session| {
			(
				session.user.clone(),
				session.chat.clone(),
				session.batch_selection.clone(),
				session.batch.state().clone(),
			)
		})
		.await;
	dashboard_response(
		session,
		html! {
			<BatchPage
				chat={chat}
				error={error}
				selection={selection}
				state={state}
				user={user}
			/>
		},
	)
}

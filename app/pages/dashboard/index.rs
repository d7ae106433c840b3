use super::dashboard_response;
use crate::{layouts::DashboardLayout, Context};
use anyhow::Result;
use exo_core::content::{DASHBOARD_MENU, DASHBOARD_TITLE};
use exo_ui as ui;
use html::html;
use hyper::{Body, Request, Response};

pub async fn get(context: &Context, request: Request<Body>) -> Result<Response<Body>> {
	let session = context.sessions.resolve(&request).await;
	let (user, chat) = context
		.sessions
		.with(session.id, |session| (session.user.clone(), session.chat.clone()))
		.await;
	let greeting = user
		.as_ref()
		.map(|user| format!("Welcome, {}.", user.user_name));
	let cards = DASHBOARD_MENU
		.iter()
		.map(|item| {
			html! {
				<a class="dashboard-card-link" href={item.href}>
					<ui::Card title={Some(item.topic.title.to_owned())} accent_color={None}>
						<div class="dashboard-card-step">{item.step}</div>
						<ui::P>{item.topic.description}</ui::P>
					</ui::Card>
				</a>
			}
		})
		.collect::<Vec<_>>();
	dashboard_response(
		session,
		html! {
			<DashboardLayout
				active_href="/dashboard"
				chat={chat}
				refresh={None}
				title="Dashboard"
				user={user}
			>
				<ui::S1>
					{greeting.map(|greeting| html!(<ui::Overline>{greeting}</ui::Overline>))}
					<ui::H1 center={None}>{DASHBOARD_TITLE}</ui::H1>
					<ui::Grid columns={3}>{cards}</ui::Grid>
				</ui::S1>
			</DashboardLayout>
		},
	)
}

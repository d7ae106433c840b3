use super::page_layout::PageLayout;
use crate::common::session::{ChatMessage, Sender};
use exo_client::User;
use exo_core::content::DASHBOARD_MENU;
use html::{classes, component, html};

/// The dashboard chrome: the site layout with a side menu and the chatbot panel.
#[component]
pub fn DashboardLayout(
	active_href: String,
	chat: Vec<ChatMessage>,
	refresh: Option<u32>,
	title: String,
	user: Option<User>,
) {
	let menu = DASHBOARD_MENU
		.iter()
		.map(|item| {
			let active = if item.href == active_href {
				Some("dashboard-menu-item-active")
			} else {
				None
			};
			html! {
				<a class={classes!("dashboard-menu-item", active)} href={item.href}>
					<span class="dashboard-menu-step">{item.step}</span>
					<span class="dashboard-menu-title">{item.topic.title}</span>
				</a>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<PageLayout
			active_href={Some("/dashboard".to_owned())}
			refresh={refresh}
			title={title}
			user={user}
		>
			<div class="dashboard-layout">
				<nav class="dashboard-menu">
					<a class="dashboard-menu-home" href="/dashboard">"Mission Control"</a>
					{menu}
				</nav>
				<div class="dashboard-content">{children}</div>
				<Chatbot messages={chat} return_to={active_href} />
			</div>
		</PageLayout>
	}
}

#[component]
pub fn Chatbot(messages: Vec<ChatMessage>, return_to: String) {
	let empty = if messages.is_empty() {
		Some(html! {
			<div class="chatbot-empty">"Ask Chaska anything about exoplanets."</div>
		})
	} else {
		None
	};
	let messages = messages
		.into_iter()
		.map(|message| {
			let sender_class = match message.sender {
				Sender::User => "chatbot-message-user",
				Sender::Bot => "chatbot-message-bot",
			};
			html! {
				<div class={classes!("chatbot-message", sender_class)}>
					<div class="chatbot-message-sender">{message.sender.name()}</div>
					<div class="chatbot-message-text">{message.text}</div>
				</div>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<aside class="chatbot">
			<div class="chatbot-title">"Chaska"</div>
			<div class="chatbot-messages">
				{empty}
				{messages}
			</div>
			<form action="/chatbot" class="chatbot-form" method="post">
				<input name="return_to" type="hidden" value={return_to} />
				<input
					autocomplete="off"
					class="chatbot-input"
					name="message"
					placeholder="Type a message..."
					type="text"
				/>
				<button class="button" type="submit">"Send"</button>
			</form>
		</aside>
	}
}

#[test]
fn test_chatbot() {
	let messages = vec![
		ChatMessage {
			sender: Sender::User,
			text: "What is a transit?".to_owned(),
		},
		ChatMessage {
			sender: Sender::Bot,
			text: "A dip in starlight.".to_owned(),
		},
	];
	let html = html!(<Chatbot messages={messages} return_to="/dashboard/batch" />).render_to_string();
	assert!(html.contains(r#"<input name="return_to" type="hidden" value="/dashboard/batch" />"#));
	assert!(html.contains(r#"<div class="chatbot-message-sender">Chaska</div>"#));
	assert!(html.contains("What is a transit?"));
	assert!(!html.contains("chatbot-empty"));
	let html = html!(<Chatbot messages={Vec::new()} return_to="/dashboard" />).render_to_string();
	assert!(html.contains("chatbot-empty"));
}

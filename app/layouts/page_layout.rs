use super::document::Document;
use exo_client::User;
use exo_core::content::{
	BRAND_NAME, BRAND_TAGLINE, FOOTER_COPYRIGHT, FOOTER_PLATFORM_LINKS, FOOTER_RESOURCE_LINKS,
};
use html::{component, html};
use exo_ui as ui;

pub fn topbar_items() -> Vec<ui::TopbarItem> {
	[
		("/", "Home"),
		("/info", "Explore"),
		("/team", "Team"),
		("/dashboard", "Dashboard"),
	]
	.iter()
	.map(|(href, title)| ui::TopbarItem {
		href: (*href).to_owned(),
		title: (*title).to_owned(),
	})
	.collect()
}

/// The public site chrome: topbar, content and footer.
#[component]
pub fn PageLayout(
	active_href: Option<String>,
	refresh: Option<u32>,
	title: String,
	user: Option<User>,
) {
	html! {
		<Document refresh={refresh} title={title}>
			<div class="page-layout">
				<ui::Topbar
					active_href={active_href}
					items={topbar_items()}
					logo_href={None}
					title={BRAND_NAME.to_owned()}
				>
					<TopbarAccount user={user} />
				</ui::Topbar>
				<main class="page-layout-content">{children}</main>
				<Footer />
			</div>
		</Document>
	}
}

#[component]
pub fn TopbarAccount(user: Option<User>) {
	match user {
		Some(user) => html! {
			<form action="/logout" class="topbar-account" method="post">
				<span class="topbar-account-name">{user.user_name}</span>
				<button class="topbar-account-logout" type="submit">"Log out"</button>
			</form>
		},
		None => html! {
			<a class="topbar-link topbar-login" href="/login">"Login"</a>
		},
	}
}

#[component]
fn Footer() {
	let column = |title: &'static str, links: &[&'static str]| {
		html! {
			<div class="footer-column">
				<div class="footer-column-title">{title}</div>
				{links.iter().map(|link| html! {
					<div class="footer-link">{*link}</div>
				}).collect::<Vec<_>>()}
			</div>
		}
	};
	html! {
		<footer class="footer">
			<div class="footer-grid">
				<div class="footer-column">
					<div class="footer-brand">{BRAND_NAME}</div>
					<div class="footer-tagline">{BRAND_TAGLINE}</div>
				</div>
				{column("Platform", &FOOTER_PLATFORM_LINKS[..])}
				{column("Resources", &FOOTER_RESOURCE_LINKS[..])}
			</div>
			<div class="footer-copyright">
				{format!("© 2025 {}. {}", BRAND_NAME, FOOTER_COPYRIGHT)}
			</div>
		</footer>
	}
}

#[test]
fn test_topbar_account() {
	let html = html!(<TopbarAccount user={None} />).render_to_string();
	assert_eq!(html, r#"<a class="topbar-link topbar-login" href="/login">Login</a>"#);
	let user = User {
		id_user: 7,
		user_name: "vera".to_owned(),
		email: "vera@example.com".to_owned(),
	};
	let html = html!(<TopbarAccount user={Some(user)} />).render_to_string();
	assert!(html.contains(r#"<span class="topbar-account-name">vera</span>"#));
	assert!(html.contains(r#"action="/logout""#));
}

use html::{classes, component, html};

#[derive(Clone)]
pub struct TopbarItem {
	pub href: String,
	pub title: String,
}

/// The site header. Children are rendered at the right edge, after the links.
#[component]
pub fn Topbar(
	active_href: Option<String>,
	items: Vec<TopbarItem>,
	logo_href: Option<String>,
	title: String,
) {
	let links = items
		.iter()
		.map(|item| {
			let active = if active_href.as_deref() == Some(item.href.as_str()) {
				Some("topbar-link-active")
			} else {
				None
			};
			html! {
				<a class={classes!("topbar-link", active)} href={item.href.clone()}>
					{item.title.clone()}
				</a>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<header class="topbar-wrapper">
			<a class="topbar-link" href={logo_href.unwrap_or_else(|| "/".to_owned())}>
				<div class="topbar-brand-wrapper">
					<div class="topbar-brand-mark"></div>
					<div class="topbar-brand-title">{title}</div>
				</div>
			</a>
			<nav class="topbar-items-wrapper">
				{links}
				{children}
			</nav>
			<details class="topbar-details">
				<summary class="topbar-details-summary">
					<TopbarHamburger />
				</summary>
				<TopbarDropdown items={items} />
			</details>
		</header>
	}
}

#[component]
fn TopbarHamburger() {
	html! {
		<div class="topbar-hamburger">
			<svg
				class="topbar-hamburger-icon"
				height="15px"
				overflow="visible"
				viewBox="0 0 1 1"
				width="15px"
			>
				{[0.0, 0.5, 1.0].iter().map(|y| html!(
					<line
						stroke="currentColor"
						stroke-linecap="round"
						stroke-width="0.2"
						x1="0"
						x2="1"
						y1={y.to_string()}
						y2={y.to_string()}
					/>
				)).collect::<Vec<_>>()}
			</svg>
		</div>
	}
}

#[component]
fn TopbarDropdown(items: Vec<TopbarItem>) {
	html! {
		<div class="topbar-dropdown-wrapper">
			{items.into_iter().map(|item| html! {
				<a class="topbar-dropdown-link" href={item.href}>
					<div class="topbar-dropdown-item">{item.title}</div>
				</a>
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[test]
fn test_topbar_marks_the_active_link() {
	let items = vec![
		TopbarItem {
			href: "/info".to_owned(),
			title: "Explore".to_owned(),
		},
		TopbarItem {
			href: "/team".to_owned(),
			title: "Team".to_owned(),
		},
	];
	let html = html! {
		<Topbar
			active_href={Some("/team".to_owned())}
			items={items}
			logo_href={None}
			title="HAWA HP"
		/>
	}
	.render_to_string();
	assert!(html.contains(r#"<a class="topbar-link" href="/info">Explore</a>"#));
	assert!(html.contains(r#"<a class="topbar-link topbar-link-active" href="/team">Team</a>"#));
	assert!(html.contains(r#"<div class="topbar-dropdown-item">Team</div>"#));
}

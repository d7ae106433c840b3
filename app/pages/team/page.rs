use crate::layouts::PageLayout;
use exo_client::User;
use exo_core::content::{TeamMember, TEAM_MEMBERS, TEAM_SUBTITLE, TEAM_TITLE};
use exo_ui as ui;
use html::{component, html};

#[component]
pub fn TeamPage(user: Option<User>) {
	html! {
		<PageLayout
			active_href={Some("/team".to_owned())}
			refresh={None}
			title="Team"
			user={user}
		>
			<section class="section">
				<ui::S1>
					<ui::H1 center={Some(true)}>{TEAM_TITLE}</ui::H1>
					<ui::P>{TEAM_SUBTITLE}</ui::P>
					<ui::Grid columns={3}>
						{TEAM_MEMBERS.iter().map(member_card).collect::<Vec<_>>()}
					</ui::Grid>
				</ui::S1>
			</section>
		</PageLayout>
	}
}

fn member_card(member: &TeamMember) -> html::Node {
	let initials: String = member
		.name
		.split_whitespace()
		.filter_map(|word| word.chars().next())
		.take(2)
		.collect();
	html! {
		<ui::Card title={None} accent_color={Some(member.accent_color.to_owned())}>
			<div class="team-avatar" style={format!("background-color: {};", member.accent_color)}>
				{initials}
			</div>
			<div class="team-name">{member.name}</div>
			<ui::Chip color={Some(member.accent_color.to_owned())}>{member.role}</ui::Chip>
			<div class="team-degree">{member.degree}</div>
			<div class="team-status">{member.status}</div>
			<div class="team-university">{member.university}</div>
			<div class="team-links">
				<ui::Link class_name={None} href={Some(member.linkedin.to_owned())} title={None}>
					"LinkedIn"
				</ui::Link>
				<ui::Link class_name={None} href={Some(member.github.to_owned())} title={None}>
					"GitHub"
				</ui::Link>
			</div>
		</ui::Card>
	}
}

#[test]
fn test_member_card() {
	let html = member_card(&TEAM_MEMBERS[4]).render_to_string();
	assert!(html.contains(r#"<div class="team-avatar" style="background-color: #10b981;">GF</div>"#));
	assert!(html.contains("Computer Engineering"));
	assert!(html.contains(r#"href="https://github.com/NXT-CRAZZY""#));
}

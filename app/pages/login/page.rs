use crate::layouts::PageLayout;
use exo_client::User;
use exo_ui as ui;
use html::{component, html};

#[component]
pub fn LoginPage(email: Option<String>, error: Option<String>, user: Option<User>) {
	html! {
		<PageLayout active_href={None} refresh={None} title="Login" user={user}>
			<div class="auth-layout">
				<ui::Card title={Some("Welcome back".to_owned())} accent_color={None}>
					<ui::Form
						action={Some("/login".to_owned())}
						autocomplete={None}
						enc_type={None}
						post={Some(true)}
					>
						{error.map(|error| html! {
							<ui::Alert level={ui::Level::Danger} title={None}>{error}</ui::Alert>
						})}
						<ui::TextField
							autocomplete={Some("username".to_owned())}
							field_type={Some(ui::TextFieldType::Email)}
							helper={None}
							label={Some("Email".to_owned())}
							name={Some("email".to_owned())}
							placeholder={Some("you@example.com".to_owned())}
							required={Some(true)}
							value={email}
						/>
						<ui::TextField
							autocomplete={Some("current-password".to_owned())}
							field_type={Some(ui::TextFieldType::Password)}
							helper={None}
							label={Some("Password".to_owned())}
							name={Some("password".to_owned())}
							placeholder={None}
							required={Some(true)}
							value={None}
						/>
						<ui::Button
							button_type={ui::ButtonType::Submit}
							color={None}
							disabled={None}
							download={None}
							href={None}
						>
							"Log in"
						</ui::Button>
					</ui::Form>
				</ui::Card>
			</div>
		</PageLayout>
	}
}

#[test]
fn test_login_page() {
	let html = html! {
		<LoginPage
			email={Some("vera@example.com".to_owned())}
			error={Some("invalid credentials".to_owned())}
			user={None}
		/>
	}
	.render_to_string();
	assert!(html.contains(r#"<div class="alert-wrapper alert-level-danger" role="alert">invalid credentials</div>"#));
	assert!(html.contains(r#"type="email" value="vera@example.com""#));
	assert!(html.contains(r#"name="password""#));
}

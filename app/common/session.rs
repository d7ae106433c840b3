/*!
Per-browser state kept in memory and keyed by a random id stored in a cookie. Nothing is persisted; restarting the server forgets every session.
*/

use exo_client::User;
use exo_core::{
	batch::BatchReport,
	simulation::{Selection, Simulation, Ticket},
	train::{Hyperparameters, TrainingReport},
};
use exo_util::{cookies::parse_cookies, id::Id};
use hyper::{header, Body, Request, Response};
use std::{
	collections::HashMap,
	sync::Arc,
	time::{Duration, Instant},
};
use tokio::sync::Mutex;

pub const SESSION_COOKIE: &str = "exo-session";

/// Sessions not used for this long are dropped the next time a session is created.
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24);

/// Older chat messages are dropped past this length.
pub const MAX_CHAT_MESSAGES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
	User,
	Bot,
}

impl Sender {
	pub fn name(self) -> &'static str {
		match self {
			Sender::User => "You",
			Sender::Bot => "Chaska",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
	pub sender: Sender,
	pub text: String,
}

pub struct Session {
	pub user: Option<User>,
	pub batch: Simulation<BatchReport>,
	pub batch_selection: Selection,
	pub training: Simulation<TrainingReport>,
	pub training_selection: Selection,
	pub hyperparameters: Hyperparameters,
	pub chat: Vec<ChatMessage>,
	last_seen: Instant,
}

impl Default for Session {
	fn default() -> Session {
		Session {
			user: None,
			batch: Simulation::default(),
			batch_selection: Selection::default(),
			training: Simulation::default(),
			training_selection: Selection::default(),
			hyperparameters: Hyperparameters::default(),
			chat: Vec::new(),
			last_seen: Instant::now(),
		}
	}
}

impl Session {
	pub fn push_chat(&mut self, sender: Sender, text: String) {
		self.chat.push(ChatMessage { sender, text });
		if self.chat.len() > MAX_CHAT_MESSAGES {
			let excess = self.chat.len() - MAX_CHAT_MESSAGES;
			self.chat.drain(..excess);
		}
	}
}

/// The session a request belongs to.
#[derive(Debug, Clone, Copy)]
pub struct SessionHandle {
	pub id: Id,
	/// Set when the session was created for this request, so the cookie must be sent.
	pub is_new: bool,
}

impl SessionHandle {
	pub fn set_cookie(&self, response: &mut Response<Body>) -> anyhow::Result<()> {
		if self.is_new {
			let value = set_cookie_header_value(self.id);
			response
				.headers_mut()
				.insert(header::SET_COOKIE, value.parse()?);
		}
		Ok(())
	}
}

#[derive(Clone)]
pub struct Sessions {
	sessions: Arc<Mutex<HashMap<Id, Session>>>,
	idle_timeout: Duration,
}

impl Default for Sessions {
	fn default() -> Sessions {
		Sessions::new(SESSION_IDLE_TIMEOUT)
	}
}

impl Sessions {
	pub fn new(idle_timeout: Duration) -> Sessions {
		Sessions {
			sessions: Arc::new(Mutex::new(HashMap::new())),
			idle_timeout,
		}
	}

	/// Find the request's session, creating one if the cookie is missing or unknown.
	pub async fn resolve(&self, request: &Request<Body>) -> SessionHandle {
		let id = session_id(request);
		let mut sessions = self.sessions.lock().await;
		if let Some(id) = id {
			if let Some(session) = sessions.get_mut(&id) {
				session.last_seen = Instant::now();
				return SessionHandle { id, is_new: false };
			}
		}
		let idle_timeout = self.idle_timeout;
		let count = sessions.len();
		sessions.retain(|_, session| session.last_seen.elapsed() < idle_timeout);
		if sessions.len() < count {
			tracing::debug!(evicted = count - sessions.len(), "evicted idle sessions");
		}
		let id = Id::new();
		sessions.insert(id, Session::default());
		tracing::debug!(session = %id, "created session");
		SessionHandle { id, is_new: true }
	}

	/// The request's existing session, if any. Never creates one.
	pub async fn find(&self, request: &Request<Body>) -> Option<SessionHandle> {
		let id = session_id(request)?;
		let mut sessions = self.sessions.lock().await;
		let session = sessions.get_mut(&id)?;
		session.last_seen = Instant::now();
		Some(SessionHandle { id, is_new: false })
	}

	/// The signed in user, without creating a session.
	pub async fn user(&self, request: &Request<Body>) -> Option<User> {
		let id = session_id(request)?;
		let sessions = self.sessions.lock().await;
		sessions.get(&id).and_then(|session| session.user.clone())
	}

	pub async fn with<T>(&self, id: Id, f: impl FnOnce(&mut Session) -> T) -> T {
		let mut sessions = self.sessions.lock().await;
		let session = sessions.entry(id).or_default();
		session.last_seen = Instant::now();
		f(session)
	}

	#[cfg(test)]
	pub async fn len(&self) -> usize {
		self.sessions.lock().await.len()
	}

	/// Store `value` in the simulation chosen by `select` once `delay` has passed. The value is dropped if the run was restarted or reset in the meantime.
	pub fn complete_after<T, F>(&self, id: Id, delay: Duration, ticket: Ticket, select: F, value: T)
	where
		T: Send + 'static,
		F: FnOnce(&mut Session) -> &mut Simulation<T> + Send + 'static,
	{
		let sessions = self.clone();
		tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			let mut sessions = sessions.sessions.lock().await;
			let completed = match sessions.get_mut(&id) {
				Some(session) => select(session).complete(ticket, value),
				None => false,
			};
			if !completed {
				tracing::debug!(session = %id, "discarded stale result");
			}
		});
	}
}

fn session_id(request: &Request<Body>) -> Option<Id> {
	let cookies = request.headers().get(header::COOKIE)?.to_str().ok()?;
	let cookies = parse_cookies(cookies).ok()?;
	cookies.get(SESSION_COOKIE)?.parse().ok()
}

fn set_cookie_header_value(id: Id) -> String {
	format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

#[cfg(test)]
mod test {
	use super::*;
	use exo_core::{
		batch::{simulated_records, BatchReport},
		simulation::TaskState,
	};

	fn request(cookie: Option<String>) -> Request<Body> {
		let mut builder = Request::builder().uri("/dashboard");
		if let Some(cookie) = cookie {
			builder = builder.header(header::COOKIE, cookie);
		}
		builder.body(Body::empty()).unwrap()
	}

	#[tokio::test]
	async fn test_resolve() {
		let sessions = Sessions::default();
		let handle = sessions.resolve(&request(None)).await;
		assert!(handle.is_new);
		let cookie = format!("theme=dark; {}={}", SESSION_COOKIE, handle.id);
		let again = sessions.resolve(&request(Some(cookie))).await;
		assert!(!again.is_new);
		assert_eq!(again.id, handle.id);
		let unknown = format!("{}={}", SESSION_COOKIE, Id::new());
		assert!(sessions.resolve(&request(Some(unknown))).await.is_new);
		let garbage = format!("{}=not-an-id", SESSION_COOKIE);
		assert!(sessions.resolve(&request(Some(garbage))).await.is_new);
	}

	#[tokio::test]
	async fn test_set_cookie() {
		let sessions = Sessions::default();
		let handle = sessions.resolve(&request(None)).await;
		let mut response = Response::new(Body::empty());
		handle.set_cookie(&mut response).unwrap();
		assert_eq!(
			response.headers().get(header::SET_COOKIE).unwrap(),
			&format!("exo-session={}; Path=/; HttpOnly; SameSite=Lax", handle.id)
		);
		let existing = SessionHandle {
			id: handle.id,
			is_new: false,
		};
		let mut response = Response::new(Body::empty());
		existing.set_cookie(&mut response).unwrap();
		assert!(response.headers().get(header::SET_COOKIE).is_none());
	}

	#[tokio::test]
	async fn test_find_never_creates_a_session() {
		let sessions = Sessions::default();
		assert!(sessions.find(&request(None)).await.is_none());
		let unknown = format!("{}={}", SESSION_COOKIE, Id::new());
		assert!(sessions.find(&request(Some(unknown))).await.is_none());
		assert_eq!(sessions.len().await, 0);
		let handle = sessions.resolve(&request(None)).await;
		let cookie = format!("{}={}", SESSION_COOKIE, handle.id);
		let found = sessions.find(&request(Some(cookie))).await.unwrap();
		assert_eq!(found.id, handle.id);
		assert!(!found.is_new);
		assert_eq!(sessions.len().await, 1);
	}

	#[tokio::test]
	async fn test_idle_sessions_are_evicted() {
		let sessions = Sessions::new(Duration::from_millis(200));
		let stale = sessions.resolve(&request(None)).await;
		let active = sessions.resolve(&request(None)).await;
		tokio::time::sleep(Duration::from_millis(120)).await;
		let cookie = format!("{}={}", SESSION_COOKIE, active.id);
		assert!(!sessions.resolve(&request(Some(cookie.clone()))).await.is_new);
		tokio::time::sleep(Duration::from_millis(120)).await;
		sessions.resolve(&request(None)).await;
		assert_eq!(sessions.len().await, 2);
		let stale_cookie = format!("{}={}", SESSION_COOKIE, stale.id);
		assert!(sessions.find(&request(Some(stale_cookie))).await.is_none());
		assert!(sessions.find(&request(Some(cookie))).await.is_some());
	}

	#[test]
	fn test_chat_history_is_capped() {
		let mut session = Session::default();
		for i in 0..MAX_CHAT_MESSAGES + 5 {
			session.push_chat(Sender::User, i.to_string());
		}
		assert_eq!(session.chat.len(), MAX_CHAT_MESSAGES);
		assert_eq!(session.chat[0].text, "5");
		assert_eq!(
			session.chat.last().map(|message| message.text.as_str()),
			Some((MAX_CHAT_MESSAGES + 4).to_string().as_str())
		);
	}

	#[tokio::test]
	async fn test_complete_after_ignores_reset_runs() {
		let sessions = Sessions::default();
		let id = sessions.resolve(&request(None)).await.id;
		let ticket = sessions
			.with(id, |session| session.batch.begin())
			.await
			.unwrap();
		sessions.complete_after(
			id,
			Duration::from_millis(10),
			ticket,
			|session| &mut session.batch,
			BatchReport::new(simulated_records()),
		);
		sessions.with(id, |session| session.batch.reset()).await;
		tokio::time::sleep(Duration::from_millis(50)).await;
		let idle = sessions
			.with(id, |session| session.batch.state() == &TaskState::Idle)
			.await;
		assert!(idle);
	}
}

/*!
This crate is a client for the backend the dashboard delegates to. It signs users in and relays chatbot conversations. Requests are made once and never retried.
*/

use serde_json::json;
use thiserror::Error;
use url::Url;

pub const LOGIN_PATH: &str = "user/api/v1/user/login/";
pub const CONVERSATION_PATH: &str = "chatbot/api/v1/conversation/";

#[derive(Debug, Error, PartialEq)]
pub enum Error {
	/// The backend answered with a non-success status.
	#[error("{0}")]
	Server(String),
	/// The backend could not be reached or its response could not be read.
	#[error("network error or server unavailable")]
	Network,
	#[error("invalid base url \"{0}\"")]
	InvalidBaseUrl(String),
	#[error("failed to build the http client")]
	Build,
}

const DEFAULT_SERVER_ERROR: &str = "error in the server response";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
	#[serde(rename = "idUser")]
	pub id_user: i64,
	#[serde(rename = "userName")]
	pub user_name: String,
	pub email: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct LoginResponse {
	#[serde(default)]
	pub message: String,
	pub user: Option<User>,
}

#[derive(serde::Deserialize)]
struct ConversationResponse {
	response: String,
}

#[derive(Clone)]
pub struct Client {
	base_url: Url,
	http: reqwest::Client,
}

impl Client {
	pub fn new(base_url: &str) -> Result<Client, Error> {
		let mut base_url =
			Url::parse(base_url).map_err(|_| Error::InvalidBaseUrl(base_url.to_owned()))?;
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}
		// The backend is addressed directly, never through a proxy from the environment.
		let http = reqwest::Client::builder()
			.no_proxy()
			.build()
			.map_err(|error| {
				tracing::error!(%error, "failed to build the http client");
				Error::Build
			})?;
		Ok(Client { base_url, http })
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	fn endpoint(&self, path: &str) -> Result<Url, Error> {
		self.base_url
			.join(path)
			.map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))
	}

	/// Sign in with an email and password. A response without a user means the credentials were rejected.
	pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, Error> {
		let url = self.endpoint(LOGIN_PATH)?;
		let body = json!({ "email": email, "password": password });
		let value = self.post(url, &body).await?;
		serde_json::from_value(value).map_err(|error| {
			tracing::error!(%error, "unexpected login response");
			Error::Server(DEFAULT_SERVER_ERROR.to_owned())
		})
	}

	/// Send one user message and return the assistant's reply.
	pub async fn send_message(&self, user_message: &str) -> Result<String, Error> {
		let url = self.endpoint(CONVERSATION_PATH)?;
		let body = json!({ "user_message": user_message });
		let value = self.post(url, &body).await?;
		let response: ConversationResponse = serde_json::from_value(value).map_err(|error| {
			tracing::error!(%error, "unexpected chatbot response");
			Error::Server(DEFAULT_SERVER_ERROR.to_owned())
		})?;
		Ok(response.response)
	}

	async fn post(&self, url: Url, body: &serde_json::Value) -> Result<serde_json::Value, Error> {
		let response = self
			.http
			.post(url.clone())
			.json(body)
			.send()
			.await
			.map_err(|error| {
				tracing::error!(%url, %error, "request to backend failed");
				Error::Network
			})?;
		let status = response.status();
		let bytes = response.bytes().await.map_err(|error| {
			tracing::error!(%url, %error, "failed to read backend response");
			Error::Network
		})?;
		let value: Option<serde_json::Value> = serde_json::from_slice(&bytes).ok();
		if !status.is_success() {
			tracing::warn!(%url, %status, "backend returned an error");
			return Err(Error::Server(server_error_message(value.as_ref())));
		}
		value.ok_or_else(|| Error::Server(DEFAULT_SERVER_ERROR.to_owned()))
	}
}

/// Pick the message out of an error body, preferring `error` over `detail`.
fn server_error_message(body: Option<&serde_json::Value>) -> String {
	body.and_then(|body| {
		["error", "detail"]
			.iter()
			.filter_map(|key| body.get(*key).and_then(|value| value.as_str()))
			.find(|message| !message.is_empty())
	})
	.unwrap_or(DEFAULT_SERVER_ERROR)
	.to_owned()
}

#[cfg(test)]
mod test {
	use super::*;
	use hyper::{
		service::{make_service_fn, service_fn},
		Body, Request, Response, StatusCode,
	};
	use std::convert::Infallible;

	async fn handle(request: Request<Body>) -> Result<Response<Body>, Infallible> {
		let path = request.uri().path().to_owned();
		let bytes = hyper::body::to_bytes(request.into_body())
			.await
			.unwrap_or_default();
		let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap_or_default();
		let (status, response) = match path.as_str() {
			"/user/api/v1/user/login/" => {
				if body["password"] == "hunter2" {
					(
						StatusCode::OK,
						json!({
							"message": "welcome",
							"user": { "idUser": 7, "userName": "vera", "email": body["email"] },
						}),
					)
				} else {
					(StatusCode::OK, json!({ "message": "invalid credentials" }))
				}
			}
			"/chatbot/api/v1/conversation/" => match body["user_message"].as_str() {
				Some("fail") => (StatusCode::BAD_REQUEST, json!({ "detail": "bad message" })),
				Some("crash") => (StatusCode::INTERNAL_SERVER_ERROR, json!({})),
				Some(message) => (
					StatusCode::OK,
					json!({ "response": format!("you said {}", message) }),
				),
				None => (StatusCode::BAD_REQUEST, json!({ "error": "missing" })),
			},
			_ => (StatusCode::NOT_FOUND, json!({})),
		};
		let response = Response::builder()
			.status(status)
			.header("content-type", "application/json")
			.body(Body::from(response.to_string()))
			.unwrap();
		Ok(response)
	}

	async fn serve() -> String {
		let make_service =
			make_service_fn(|_| async { Ok::<_, Infallible>(service_fn(handle)) });
		let server = hyper::Server::bind(&([127, 0, 0, 1], 0).into()).serve(make_service);
		let addr = server.local_addr();
		tokio::spawn(server);
		format!("http://{}", addr)
	}

	#[tokio::test]
	async fn test_login() {
		let client = Client::new(&serve().await).unwrap();
		let response = client.login("vera@example.com", "hunter2").await.unwrap();
		assert_eq!(response.message, "welcome");
		assert_eq!(
			response.user,
			Some(User {
				id_user: 7,
				user_name: "vera".to_owned(),
				email: "vera@example.com".to_owned(),
			})
		);
		let response = client.login("vera@example.com", "wrong").await.unwrap();
		assert_eq!(response.message, "invalid credentials");
		assert_eq!(response.user, None);
	}

	#[tokio::test]
	async fn test_send_message() {
		let client = Client::new(&serve().await).unwrap();
		assert_eq!(client.send_message("hello").await.unwrap(), "you said hello");
		assert_eq!(
			client.send_message("fail").await,
			Err(Error::Server("bad message".to_owned()))
		);
		assert_eq!(
			client.send_message("crash").await.unwrap_err().to_string(),
			"error in the server response"
		);
	}

	#[tokio::test]
	async fn test_network_error() {
		// Bind then drop a listener so the port is closed.
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);
		let client = Client::new(&format!("http://{}", addr)).unwrap();
		let error = client.send_message("hello").await.unwrap_err();
		assert_eq!(error, Error::Network);
		assert_eq!(error.to_string(), "network error or server unavailable");
	}

	#[test]
	fn test_base_url() {
		let client = Client::new("http://127.0.0.1:8000").unwrap();
		assert_eq!(
			client.endpoint(LOGIN_PATH).unwrap().as_str(),
			"http://127.0.0.1:8000/user/api/v1/user/login/"
		);
		let client = Client::new("http://backend.local/api").unwrap();
		assert_eq!(
			client.endpoint(CONVERSATION_PATH).unwrap().as_str(),
			"http://backend.local/api/chatbot/api/v1/conversation/"
		);
		assert!(Client::new("not a url").is_err());
	}

	#[test]
	fn test_server_error_message() {
		assert_eq!(
			server_error_message(Some(&json!({ "error": "a", "detail": "b" }))),
			"a"
		);
		assert_eq!(server_error_message(Some(&json!({ "detail": "b" }))), "b");
		assert_eq!(
			server_error_message(None),
			"error in the server response"
		);
	}
}

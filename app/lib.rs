/*!
The exo web app. It serves the landing pages, the prediction demo and the dashboard, all rendered on the server.
*/

use self::common::{error::Error, session::Sessions};
use backtrace::Backtrace;
use futures::FutureExt;
use hyper::{
	header,
	service::{make_service_fn, service_fn},
	Body, Method, Request, Response, StatusCode,
};
use std::{
	borrow::Cow, cell::RefCell, collections::BTreeMap, convert::Infallible,
	panic::AssertUnwindSafe, sync::Arc, time::Duration,
};

pub mod common;
mod layouts;
mod pages;

pub struct Options {
	pub api_url: String,
	pub batch_delay: Duration,
	pub host: std::net::IpAddr,
	pub port: u16,
	pub training_delay: Duration,
}

pub struct Context {
	pub client: exo_client::Client,
	pub options: Options,
	pub sessions: Sessions,
}

impl Context {
	pub fn new(options: Options) -> anyhow::Result<Context> {
		let client = exo_client::Client::new(&options.api_url)?;
		Ok(Context {
			client,
			options,
			sessions: Sessions::default(),
		})
	}
}

pub async fn handle(request: Request<Body>, context: Arc<Context>) -> Response<Body> {
	let method = request.method().clone();
	let uri = request.uri().clone();
	let path = uri.path();
	let path_components: Vec<_> = path.split('/').skip(1).collect();
	let search_params: Option<BTreeMap<String, String>> = uri.query().map(|search_params| {
		url::form_urlencoded::parse(search_params.as_bytes())
			.into_owned()
			.collect()
	});
	let result = match (&method, path_components.as_slice()) {
		(&Method::GET, &["health"]) => self::pages::health::get(&context, request).await,
		(&Method::GET, &["styles.css"]) => self::pages::styles::get(&context, request).await,
		(&Method::GET, &[""]) => self::pages::home::get(&context, request).await,
		(&Method::GET, &["info"]) => self::pages::info::get(&context, request, search_params).await,
		(&Method::GET, &["team"]) => self::pages::team::get(&context, request).await,
		(&Method::GET, &["login"]) => self::pages::login::get(&context, request).await,
		(&Method::POST, &["login"]) => self::pages::login::post(&context, request).await,
		(&Method::POST, &["logout"]) => self::pages::logout::post(&context, request).await,
		(&Method::POST, &["chatbot"]) => self::pages::chatbot::post(&context, request).await,
		(&Method::GET, &["dashboard"]) => {
			self::pages::dashboard::index::get(&context, request).await
		}
		(&Method::GET, &["dashboard", "batch"]) => {
			self::pages::dashboard::batch::get(&context, request).await
		}
		(&Method::POST, &["dashboard", "batch"]) => {
			self::pages::dashboard::batch::post(&context, request).await
		}
		(&Method::GET, &["dashboard", "batch", "predictions.csv"]) => {
			self::pages::dashboard::batch::download(&context, request).await
		}
		(&Method::GET, &["dashboard", "training"]) => {
			self::pages::dashboard::training::get(&context, request).await
		}
		(&Method::POST, &["dashboard", "training"]) => {
			self::pages::dashboard::training::post(&context, request).await
		}
		(&Method::GET, &["dashboard", "analytics"]) => {
			self::pages::dashboard::analytics::get(&context, request, search_params).await
		}
		_ => Err(Error::NotFound.into()),
	};
	let response = match result {
		Ok(response) => response,
		Err(error) => {
			if let Some(error) = error.downcast_ref::<Error>() {
				match error {
					Error::BadRequest => Response::builder()
						.status(StatusCode::BAD_REQUEST)
						.body(Body::from("bad request"))
						.unwrap(),
					Error::NotFound => Response::builder()
						.status(StatusCode::NOT_FOUND)
						.body(Body::from("not found"))
						.unwrap(),
				}
			} else {
				tracing::error!(%method, %path, error = %error, "request failed");
				let body: Cow<str> = if cfg!(debug_assertions) {
					format!("{}", error).into()
				} else {
					"internal server error".into()
				};
				Response::builder()
					.status(StatusCode::INTERNAL_SERVER_ERROR)
					.body(Body::from(body))
					.unwrap()
			}
		}
	};
	tracing::info!(%method, %path, status = response.status().as_u16(), "request");
	response
}

pub fn run(options: Options) -> anyhow::Result<()> {
	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(run_impl(options))
}

async fn run_impl(options: Options) -> anyhow::Result<()> {
	tokio::task_local! {
		static PANIC_MESSAGE_AND_BACKTRACE: RefCell<Option<(String, Backtrace)>>;
	}
	let hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(|panic_info| {
		let value = (panic_info.to_string(), Backtrace::new());
		let captured = PANIC_MESSAGE_AND_BACKTRACE.try_with(|panic_message_and_backtrace| {
			panic_message_and_backtrace.borrow_mut().replace(value);
		});
		if captured.is_err() {
			tracing::error!(panic = %panic_info, "panic outside of a request");
		}
	}));
	let context = Arc::new(Context::new(options)?);
	tracing::info!(api_url = %context.client.base_url(), "using backend");
	let service = make_service_fn(|_| {
		let context = context.clone();
		async move {
			Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
				let method = request.method().to_owned();
				let path = request.uri().path().to_owned();
				let context = context.clone();
				PANIC_MESSAGE_AND_BACKTRACE.scope(RefCell::new(None), async move {
					let response = AssertUnwindSafe(handle(request, context))
						.catch_unwind()
						.await
						.unwrap_or_else(|_| {
							let backtrace =
								PANIC_MESSAGE_AND_BACKTRACE.with(|panic_message_and_backtrace| {
									let panic_message_and_backtrace =
										panic_message_and_backtrace.borrow();
									match panic_message_and_backtrace.as_ref() {
										Some((message, backtrace)) => {
											format!("{}\n{:?}", message, backtrace)
										}
										None => "panic".to_owned(),
									}
								});
							tracing::error!(%method, %path, status = 500, "{}", backtrace);
							let body = if cfg!(debug_assertions) {
								backtrace
							} else {
								"internal server error".to_owned()
							};
							Response::builder()
								.status(StatusCode::INTERNAL_SERVER_ERROR)
								.header(header::CONTENT_TYPE, "text/plain")
								.body(Body::from(body))
								.unwrap()
						});
					Ok::<_, Infallible>(response)
				})
			}))
		}
	});
	let addr = std::net::SocketAddr::new(context.options.host, context.options.port);
	let listener = std::net::TcpListener::bind(&addr)?;
	tracing::info!("serving on port {}", context.options.port);
	hyper::Server::from_tcp(listener)?.serve(service).await?;
	std::panic::set_hook(hook);
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use exo_core::{model::ModelKey, simulation::TaskState};
	use exo_util::id::Id;

	pub fn test_context() -> Arc<Context> {
		test_context_with_delay(Duration::from_millis(20))
	}

	fn test_context_with_delay(delay: Duration) -> Arc<Context> {
		let options = Options {
			// Nothing listens here, so backend calls fail fast.
			api_url: "http://127.0.0.1:9".to_owned(),
			batch_delay: delay,
			host: [127, 0, 0, 1].into(),
			port: 0,
			training_delay: delay,
		};
		Arc::new(Context::new(options).unwrap())
	}

	async fn body_string(response: Response<Body>) -> String {
		let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
		String::from_utf8(bytes.to_vec()).unwrap()
	}

	fn session_cookie(response: &Response<Body>) -> String {
		response
			.headers()
			.get(header::SET_COOKIE)
			.unwrap()
			.to_str()
			.unwrap()
			.split(';')
			.next()
			.unwrap()
			.to_owned()
	}

	fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
		let mut builder = Request::builder().method(Method::GET).uri(path);
		if let Some(cookie) = cookie {
			builder = builder.header(header::COOKIE, cookie);
		}
		builder.body(Body::empty()).unwrap()
	}

	fn post_logout() -> Request<Body> {
		Request::builder()
			.method(Method::POST)
			.uri("/logout")
			.body(Body::empty())
			.unwrap()
	}

	fn multipart(path: &str, cookie: &str, model: &str, file_name: &str) -> Request<Body> {
		let boundary = "exoboundary";
		let body = format!(
			"--{b}\r\nContent-Disposition: form-data; name=\"model\"\r\n\r\n{model}\r\n\
			--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file}\"\r\nContent-Type: text/csv\r\n\r\nkepoi_name,koi_period\r\nK00752.01,9.48\r\n\
			--{b}--\r\n",
			b = boundary,
			model = model,
			file = file_name,
		);
		Request::builder()
			.method(Method::POST)
			.uri(path)
			.header(header::COOKIE, cookie)
			.header(
				header::CONTENT_TYPE,
				format!("multipart/form-data; boundary={}", boundary),
			)
			.body(Body::from(body))
			.unwrap()
	}

	#[tokio::test]
	async fn test_health_and_not_found() {
		let context = test_context();
		let response = handle(get("/health", None), context.clone()).await;
		assert_eq!(response.status(), StatusCode::OK);
		let response = handle(get("/nowhere", None), context.clone()).await;
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		let response = handle(get("/styles.css", None), context).await;
		assert_eq!(
			response.headers().get(header::CONTENT_TYPE).unwrap(),
			"text/css"
		);
	}

	#[tokio::test]
	async fn test_info_shows_default_until_fields_are_populated() {
		let context = test_context();
		let response = handle(get("/info", None), context.clone()).await;
		assert_eq!(response.status(), StatusCode::OK);
		let html = body_string(response).await;
		assert!(html.contains("87.3%"));
		let response = handle(get("/info?orbital_period=&planet_radius=", None), context.clone()).await;
		let html = body_string(response).await;
		assert!(html.contains("87.3%"));
		let response = handle(get("/info?orbital_period=365.25", None), context).await;
		let html = body_string(response).await;
		assert!(html.contains(r#"value="365.25""#));
	}

	#[tokio::test]
	async fn test_batch_flow() {
		let context = test_context();
		let response = handle(get("/dashboard/batch", None), context.clone()).await;
		assert_eq!(response.status(), StatusCode::OK);
		let cookie = session_cookie(&response);
		let response = handle(get("/dashboard/batch/predictions.csv", Some(&cookie)), context.clone()).await;
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		// Missing file: nothing starts.
		let response = handle(
			multipart("/dashboard/batch", &cookie, "kepler", ""),
			context.clone(),
		)
		.await;
		assert_eq!(response.status(), StatusCode::OK);
		let id: Id = cookie.split('=').nth(1).unwrap().parse().unwrap();
		let idle = context
			.sessions
			.with(id, |session| session.batch.state() == &TaskState::Idle)
			.await;
		assert!(idle);
		let response = handle(
			multipart("/dashboard/batch", &cookie, "kepler", "koi.csv"),
			context.clone(),
		)
		.await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		let response = handle(get("/dashboard/batch", Some(&cookie)), context.clone()).await;
		let html = body_string(response).await;
		assert!(html.contains(r#"http-equiv="refresh""#));
		tokio::time::sleep(Duration::from_millis(100)).await;
		let response = handle(get("/dashboard/batch", Some(&cookie)), context.clone()).await;
		let html = body_string(response).await;
		assert!(html.contains("Kepler-1658b"));
		assert!(html.contains("CONFIRMED: 2 (40.0%)"));
		assert!(!html.contains(r#"http-equiv="refresh""#));
		let response = handle(get("/dashboard/batch/predictions.csv", Some(&cookie)), context).await;
		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
			r#"attachment; filename="predictions.csv""#
		);
		let csv = body_string(response).await;
		assert_eq!(csv.lines().next(), Some("KOI Name,Prediction,Probability"));
		assert_eq!(csv.lines().count(), 6);
	}

	#[tokio::test]
	async fn test_csv_download_without_a_session_creates_none() {
		let context = test_context();
		for _ in 0..100 {
			let response = handle(get("/dashboard/batch/predictions.csv", None), context.clone()).await;
			assert_eq!(response.status(), StatusCode::NOT_FOUND);
			assert!(response.headers().get(header::SET_COOKIE).is_none());
		}
		let response = handle(post_logout(), context.clone()).await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		assert_eq!(context.sessions.len().await, 0);
	}

	#[tokio::test]
	async fn test_resubmitting_while_loading_keeps_the_running_selection() {
		let context = test_context_with_delay(Duration::from_secs(60));
		let response = handle(get("/dashboard/batch", None), context.clone()).await;
		let cookie = session_cookie(&response);
		let response = handle(
			multipart("/dashboard/batch", &cookie, "kepler", "koi.csv"),
			context.clone(),
		)
		.await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		let response = handle(
			multipart("/dashboard/batch", &cookie, "tess", "toi.csv"),
			context.clone(),
		)
		.await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		let response = handle(
			multipart("/dashboard/training", &cookie, "k2", "k2.csv"),
			context.clone(),
		)
		.await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		let response = handle(
			multipart("/dashboard/training", &cookie, "tess", "toi.csv"),
			context.clone(),
		)
		.await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		let id: Id = cookie.split('=').nth(1).unwrap().parse().unwrap();
		let (batch, training) = context
			.sessions
			.with(id, |session| {
				(
					session.batch_selection.clone(),
					session.training_selection.clone(),
				)
			})
			.await;
		assert_eq!(batch.model, Some(ModelKey::Kepler));
		assert_eq!(batch.file.map(|file| file.file_name), Some("koi.csv".to_owned()));
		assert_eq!(training.model, Some(ModelKey::K2));
		assert_eq!(training.file.map(|file| file.file_name), Some("k2.csv".to_owned()));
	}

	#[tokio::test]
	async fn test_chatbot_ignores_unsafe_return_paths() {
		let context = test_context();
		let request = Request::builder()
			.method(Method::POST)
			.uri("/chatbot")
			.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(Body::from("message=&return_to=%2Fdashboard%0D%0AX-Evil%3A%201"))
			.unwrap();
		let response = handle(request, context.clone()).await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/dashboard");
		assert!(response.headers().get("x-evil").is_none());
		assert_eq!(context.sessions.len().await, 0);
	}

	#[tokio::test]
	async fn test_training_flow() {
		let context = test_context();
		let response = handle(get("/dashboard/training", None), context.clone()).await;
		let cookie = session_cookie(&response);
		let response = handle(
			multipart("/dashboard/training", &cookie, "tess", "toi.csv"),
			context.clone(),
		)
		.await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		tokio::time::sleep(Duration::from_millis(100)).await;
		let response = handle(get("/dashboard/training", Some(&cookie)), context).await;
		let html = body_string(response).await;
		assert!(html.contains("92.0%"));
		assert!(html.contains("88.0%"));
		assert!(html.contains("91.0%"));
		assert!(html.contains("ROC Curve"));
	}

	#[tokio::test]
	async fn test_analytics_model_selection() {
		let context = test_context();
		let response = handle(get("/dashboard/analytics", None), context.clone()).await;
		let html = body_string(response).await;
		assert!(html.contains("93.0%"));
		let response = handle(get("/dashboard/analytics?model=Kepler", None), context.clone()).await;
		let html = body_string(response).await;
		assert!(html.contains("97.0%"));
		let response = handle(get("/dashboard/analytics?model=hubble", None), context).await;
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn test_chatbot_reports_network_errors() {
		let context = test_context();
		let response = handle(get("/dashboard", None), context.clone()).await;
		let cookie = session_cookie(&response);
		let request = Request::builder()
			.method(Method::POST)
			.uri("/chatbot")
			.header(header::COOKIE, cookie.as_str())
			.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(Body::from("message=hello&return_to=%2Fdashboard%2Fbatch"))
			.unwrap();
		let response = handle(request, context.clone()).await;
		assert_eq!(response.status(), StatusCode::SEE_OTHER);
		assert_eq!(
			response.headers().get(header::LOCATION).unwrap(),
			"/dashboard/batch"
		);
		let response = handle(get("/dashboard/batch", Some(&cookie)), context).await;
		let html = body_string(response).await;
		assert!(html.contains("hello"));
		assert!(html.contains("network error or server unavailable"));
	}

	#[tokio::test]
	async fn test_login_failure_rerenders_form() {
		let context = test_context();
		let request = Request::builder()
			.method(Method::POST)
			.uri("/login")
			.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(Body::from("email=vera%40example.com&password=secret"))
			.unwrap();
		let response = handle(request, context).await;
		assert_eq!(response.status(), StatusCode::OK);
		let html = body_string(response).await;
		assert!(html.contains("network error or server unavailable"));
		assert!(html.contains(r#"value="vera@example.com""#));
	}
}

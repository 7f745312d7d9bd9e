use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use axum_server::tls_rustls::RustlsConfig;
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::{Config, IssueError, Issuer, TlsConfig, TokenRequest};

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct WebState {
	pub issuer: Issuer,
}

/// The HTTPS front door: routes token requests to the [`Issuer`] and answers
/// everything else with a liveness "OK".
pub struct Web {
	app: Router,
	bind: SocketAddr,
	tls: TlsConfig,
}

impl Web {
	pub fn new(state: WebState, config: &Config) -> Self {
		Self {
			app: router(state, config.public.clone()),
			bind: config.bind,
			tls: config.tls.clone(),
		}
	}

	/// Serve until the process exits. A TLS load failure is fatal before the
	/// listener is ever bound.
	pub async fn run(self) -> anyhow::Result<()> {
		let tls = RustlsConfig::from_pem_file(&self.tls.cert, &self.tls.key)
			.await
			.context("failed to load TLS certificate or key")?;

		tracing::info!(addr = %self.bind, "listening");

		axum_server::bind_rustls(self.bind, tls)
			.serve(self.app.into_make_service())
			.await?;

		Ok(())
	}
}

/// Build the router: the token endpoint, the CORS policy, and the "OK"
/// fallback.
pub fn router(state: WebState, public: Option<PathBuf>) -> Router {
	async fn handle_ok() -> &'static str {
		"OK"
	}

	// Anything that isn't a POST to /token answers "OK", including other
	// methods on /token itself.
	let mut app = Router::new()
		.route("/token", post(issue_token).fallback(handle_ok))
		.with_state(state);

	if let Some(public) = public {
		tracing::info!(public = %public.display(), "serving directory");

		// Local development: serve the demo frontend, with misses still
		// answering "OK".
		let public = ServeDir::new(public).not_found_service(handle_ok.into_service());
		app = app.fallback_service(public);
	} else {
		app = app.fallback(handle_ok);
	}

	app.layer(middleware::from_fn(cors))
}

// The exact header set the browser clients expect on every response, errors
// and preflights included. tower-http's CorsLayer only emits the method and
// header lists on preflights, so the policy is applied by hand.
async fn cors(request: Request, next: Next) -> Response {
	let mut response = if request.method() == Method::OPTIONS {
		// Preflights are answered here; they never reach a handler.
		StatusCode::NO_CONTENT.into_response()
	} else {
		next.run(request).await
	};

	let headers = response.headers_mut();
	headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
	headers.insert(
		header::ACCESS_CONTROL_ALLOW_METHODS,
		HeaderValue::from_static("GET, POST, OPTIONS"),
	);
	headers.insert(
		header::ACCESS_CONTROL_ALLOW_HEADERS,
		HeaderValue::from_static("Content-Type"),
	);

	response
}

#[derive(Serialize)]
struct TokenBody {
	token: String,
}

#[derive(Serialize)]
struct ErrorBody {
	error: String,
}

impl IntoResponse for IssueError {
	fn into_response(self) -> Response {
		let body = ErrorBody {
			error: self.to_string(),
		};
		(self.status(), Json(body)).into_response()
	}
}

async fn issue_token(
	State(state): State<WebState>,
	body: Result<Json<TokenRequest>, JsonRejection>,
) -> Response {
	let request = match body {
		Ok(Json(request)) => request,
		// A malformed body is the caller's fault.
		Err(err) => {
			let body = ErrorBody {
				error: err.body_text(),
			};
			return (StatusCode::BAD_REQUEST, Json(body)).into_response();
		}
	};

	match state.issuer.issue(request) {
		Ok(token) => Json(TokenBody { token }).into_response(),
		Err(err) => {
			tracing::warn!(%err, "token request refused");
			err.into_response()
		}
	}
}

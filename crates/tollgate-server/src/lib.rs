#![allow(clippy::must_use_candidate)]

//! HTTP dispatcher: routes requests, invokes handlers, and guarantees
//! that every failure leaves as the uniform `{code, message, data}`
//! envelope.

mod login;
mod refresh;
mod respond;
mod users;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing};
use chrono::Duration;
use secrecy::ExposeSecret;
use tollgate_auth::{Authenticator, TokenAuthority};
use tollgate_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let authenticator = Arc::new(build_authenticator(&config.auth));

        let router = Router::new()
            .route("/api/login", routing::post(login::login_handler))
            .route("/api/token/refresh", routing::post(refresh::refresh_handler))
            .route("/api/users", routing::get(users::list_users))
            .route("/api/users/{id}", routing::get(users::get_user))
            .method_not_allowed_fallback(respond::method_not_allowed)
            .fallback(respond::route_not_found)
            .with_state(authenticator)
            .layer(TraceLayer::new_for_http());

        Self {
            router,
            listen_address,
        }
    }

    /// Consume the server and return its router (for embedding in tests)
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

fn build_authenticator(config: &tollgate_config::AuthConfig) -> Authenticator {
    let tokens = TokenAuthority::new(
        config.secret.expose_secret().as_bytes(),
        Duration::seconds(config.access_ttl_secs),
        Duration::seconds(config.refresh_ttl_secs),
    );

    let users: HashMap<_, _> = config
        .users
        .iter()
        .map(|user| (user.username.clone(), user.password.clone()))
        .collect();

    Authenticator::new(users, tokens)
}

// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Component;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::extract::Path as UrlPath;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::i18n::strings;
use crate::play::get;
use crate::play::post;
use crate::play::state::MutableState;
use crate::play::state::ServerState;
use crate::session::Session;
use crate::store::Store;

pub struct ServerOptions {
    pub port: u16,
    pub open_browser: bool,
}

pub async fn start_server(coll: Collection, options: ServerOptions) -> Fallible<()> {
    let lang = coll.config.lang.unwrap_or_default();
    let mut store = Store::new(lang, Box::new(coll.storage()));
    store.bootstrap_auth();

    let state = ServerState {
        source: coll.source.clone(),
        image_directory: coll.image_directory(),
        mutable: Arc::new(Mutex::new(MutableState {
            store,
            session: Session::new(),
            pin_rejected: false,
        })),
    };
    let app = Router::new();
    let app = app.route("/", get(get::start_handler));
    let app = app.route("/fact", get(get::fact_handler));
    let app = app.route("/names", get(get::names_handler).post(post::names_handler));
    let app = app.route("/level", get(get::level_handler).post(post::level_handler));
    let app = app.route("/rules", get(get::rules_handler));
    let app = app.route(
        "/settings",
        get(get::settings_handler).post(post::settings_handler),
    );
    let app = app.route("/auth", get(get::auth_handler).post(post::auth_handler));
    let app = app.route("/play", get(get::play_handler).post(post::play_handler));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.route("/img/{*path}", get(image));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("127.0.0.1:{}", options.port);

    // Start a separate task to open the browser.
    if options.open_browser {
        let url = format!("http://{bind}/");
        let bind = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&bind).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(&url) {
                log::error!("Failed to open {url}: {e}");
            }
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    log::debug!("Shutting down.");
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn image(State(state): State<ServerState>, UrlPath(path): UrlPath<String>) -> Response {
    if !is_safe_relative(&path) {
        log::warn!("Refusing image path {path}");
        return StatusCode::NOT_FOUND.into_response();
    }
    let full_path = state.image_directory.join(&path);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(CONTENT_TYPE, content_type(&full_path))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            log::debug!("Image {path} not served: {e}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Only plain relative paths, so requests cannot leave the image directory.
fn is_safe_relative(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

async fn not_found_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let lang = state.lock().store.language();
    (
        StatusCode::NOT_FOUND,
        Html(strings(lang).not_found.to_string()),
    )
}

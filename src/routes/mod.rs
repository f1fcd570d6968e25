//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It renders every Leptos route on the
//! server, serves the compiled WASM/CSS bundle under `/pkg`, and answers
//! `/healthz` for process supervisors.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not go through Leptos.
fn host_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Directory holding the compiled bundle for a given site root.
fn pkg_dir(site_root: &Path, pkg: &str) -> PathBuf {
    site_root.join(pkg)
}

/// Host routes + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` variables or workspace metadata).
pub fn leptos_app() -> Result<(Router, LeptosOptions), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "generated leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg = pkg_dir(Path::new(leptos_options.site_root.as_ref()), leptos_options.site_pkg_dir.as_ref());

    let app = host_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());
    Ok((app, leptos_options))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

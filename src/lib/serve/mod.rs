use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use color_eyre::Section;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::{
    config::{ASSET_EXTENSIONS, SERVE_ADDR},
    pipeline::render_at,
};

/// Router that renders the page fresh on every request and serves static
/// assets (images, stylesheets) from the project directory as-is.
pub fn router(root: PathBuf) -> Router {
    let root = Arc::new(root);
    Router::new()
        .route("/", get(page))
        .route("/index.html", get(page))
        .fallback(asset)
        .with_state(root)
}

pub async fn serve(root: PathBuf) -> color_eyre::Result<()> {
    let app = router(root);

    info!("Serving on http://{SERVE_ADDR}");
    let listener = tokio::net::TcpListener::bind(SERVE_ADDR)
        .await
        .with_note(|| format!("While binding {SERVE_ADDR}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn page(State(root): State<Arc<PathBuf>>) -> Response {
    let rendered = tokio::task::spawn_blocking(move || render_at(&root)).await;

    match rendered {
        Ok(Ok(html)) => {
            info!(bytes = html.len(), "rendered page");
            Html(html).into_response()
        }
        Ok(Err(e)) => {
            error!("Render failed: {e:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "page could not be rendered").into_response()
        }
        Err(e) => {
            error!("Render task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn asset(State(root): State<Arc<PathBuf>>, req: Request) -> Response {
    if !is_public_asset(req.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match ServeDir::new(root.as_path()).oneshot(req).await {
        Ok(resp) => resp.into_response(),
        Err(never) => match never {},
    }
}

/// Checked on the raw request path: an allowed extension must be spelled out
/// literally, so percent-encoding cannot smuggle in `.inc` or `.toml`.
fn is_public_asset(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ASSET_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

//! HTTP server for the pyrolysis dashboard.
//!
//! The selected time step is held by the browser: every update request
//! carries the current index and the event that fired, and the server
//! answers with the next frame. The server itself keeps no mutable state.
//!
//! # Routes
//!
//! - `GET  /api/manifest`  dataset shapes, slider config, panel ids
//! - `GET  /api/frame?index=N`  frame for a slider position (page load when omitted)
//! - `POST /api/update`  `{"current": i, "event": {"source": ...}}` -> next frame
//! - `GET  /api/heatmap`  full-dataset heatmap description
//! - `GET  /assets/*.js`  D3 chart scripts shared with the WASM frontend
//! - everything else: the `--dist` bundle, or the built-in page

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use anyhow::Context;
use log::info;
use pyro_data::IndexOutOfRange;
use pyro_playback::panels::HEATMAP_ID;
use pyro_playback::{Event, Frame, HeatmapDescription, SliderConfig, UpdateLoop, TIMER_PERIOD_MS};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const LINE_CHART_JS: &str = include_str!("../../pyro-chart-ui/assets/js/line-chart.js");
const HEATMAP_JS: &str = include_str!("../../pyro-chart-ui/assets/js/heatmap.js");

/// Read-only state shared by all handlers.
pub struct ServerState {
    update_loop: UpdateLoop,
    heatmap: Option<HeatmapDescription>,
}

impl ServerState {
    pub fn new(update_loop: UpdateLoop) -> Self {
        // The heatmap never changes; build it once instead of per request.
        let heatmap = update_loop.heatmap();
        Self {
            update_loop,
            heatmap,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub name: String,
    pub positions: usize,
    pub time_steps: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelInfo {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub title: &'static str,
    pub datasets: Vec<DatasetInfo>,
    pub panels: Vec<PanelInfo>,
    pub heatmap_id: Option<&'static str>,
    pub slider: SliderConfig,
    pub timer_period_ms: u32,
}

#[derive(Debug, Deserialize)]
pub struct FrameQuery {
    pub index: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub current: usize,
    pub event: Event,
}

/// JSON error body with an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<IndexOutOfRange> for ApiError {
    fn from(err: IndexOutOfRange) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// API handlers

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn line_chart_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], LINE_CHART_JS)
}

pub async fn heatmap_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], HEATMAP_JS)
}

pub async fn manifest_handler(State(state): State<Arc<ServerState>>) -> Json<Manifest> {
    let ul = &state.update_loop;
    Json(Manifest {
        title: "Wood pyrolysis dynamics",
        datasets: ul
            .panels()
            .iter()
            .map(|p| DatasetInfo {
                name: p.dataset.name().to_string(),
                positions: p.dataset.row_count(),
                time_steps: p.dataset.column_count(),
            })
            .collect(),
        panels: ul
            .panels()
            .iter()
            .map(|p| PanelInfo {
                id: p.config.id.clone(),
                title: p.config.title.clone(),
            })
            .collect(),
        heatmap_id: state.heatmap.as_ref().map(|_| HEATMAP_ID),
        slider: ul.slider(),
        timer_period_ms: TIMER_PERIOD_MS,
    })
}

pub async fn frame_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<FrameQuery>,
) -> Result<Json<Frame>, ApiError> {
    let frame = match query.index {
        Some(index) => state.update_loop.frame_at(index)?,
        None => state.update_loop.step(Event::PageLoaded, 0)?,
    };
    Ok(Json(frame))
}

pub async fn update_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<Frame>, ApiError> {
    let frame = state.update_loop.step(request.event, request.current)?;
    log::debug!(
        "update: {} at {} -> {}",
        request.event.name(),
        request.current,
        frame.index.get()
    );
    Ok(Json(frame))
}

pub async fn heatmap_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<HeatmapDescription>, ApiError> {
    state.heatmap.clone().map(Json).ok_or(ApiError {
        status: StatusCode::NOT_FOUND,
        message: "No heatmap configured".to_string(),
    })
}

/// Build the application router.
pub fn router(state: Arc<ServerState>, dist: Option<PathBuf>, debug: bool) -> Router {
    let api = Router::new()
        .route("/api/manifest", get(manifest_handler))
        .route("/api/frame", get(frame_handler))
        .route("/api/update", post(update_handler))
        .route("/api/heatmap", get(heatmap_handler))
        .route("/assets/line-chart.js", get(line_chart_js))
        .route("/assets/heatmap.js", get(heatmap_js));

    let app = match dist {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.route("/", get(index_handler)),
    }
    .with_state(state);

    if debug {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// Bind, serve until Ctrl+C.
pub async fn run_serve(
    update_loop: UpdateLoop,
    dist: Option<PathBuf>,
    host: IpAddr,
    port: u16,
    debug: bool,
) -> anyhow::Result<()> {
    if let Some(dir) = &dist {
        if !dir.join("index.html").exists() {
            anyhow::bail!("No index.html in bundle directory {}", dir.display());
        }
        info!("Serving dashboard bundle from {}", dir.display());
    }

    let state = Arc::new(ServerState::new(update_loop));
    let app = router(state, dist, debug);

    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Dashboard running at http://{}", addr);
    info!("Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn state() -> Arc<ServerState> {
        Arc::new(ServerState::new(test_support::update_loop()))
    }

    #[tokio::test]
    async fn test_manifest_describes_slider_and_panels() {
        let Json(manifest) = manifest_handler(State(state())).await;
        assert_eq!(manifest.slider.max, 9);
        assert_eq!(manifest.datasets.len(), 2);
        assert_eq!(manifest.datasets[0].positions, 3);
        assert_eq!(manifest.panels[0].id, "rho-char");
        assert_eq!(manifest.heatmap_id, Some(HEATMAP_ID));
        assert_eq!(manifest.timer_period_ms, 100);
    }

    #[tokio::test]
    async fn test_frame_defaults_to_page_load() {
        let Json(frame) = frame_handler(State(state()), Query(FrameQuery { index: None }))
            .await
            .unwrap();
        assert_eq!(frame.index.get(), 0);
        assert_eq!(frame.source, "page_loaded");

        let Json(frame) = frame_handler(State(state()), Query(FrameQuery { index: Some(4) }))
            .await
            .unwrap();
        assert_eq!(frame.index.get(), 4);
        assert_eq!(frame.charts[0].y, vec![0.04; 2]);
    }

    #[tokio::test]
    async fn test_update_applies_only_the_firing_source() {
        let tick = UpdateRequest {
            current: 9,
            event: Event::TimerTick { tick: 42 },
        };
        let Json(frame) = update_handler(State(state()), Json(tick)).await.unwrap();
        assert_eq!(frame.index.get(), 0);

        let slide = UpdateRequest {
            current: 9,
            event: Event::SliderMoved { index: 3 },
        };
        let Json(frame) = update_handler(State(state()), Json(slide)).await.unwrap();
        assert_eq!(frame.index.get(), 3);
    }

    #[tokio::test]
    async fn test_out_of_range_is_bad_request() {
        let forged = UpdateRequest {
            current: 0,
            event: Event::SliderMoved { index: 10 },
        };
        let err = update_handler(State(state()), Json(forged)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = frame_handler(State(state()), Query(FrameQuery { index: Some(99) }))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_heatmap_is_full_dataset() {
        let Json(heat) = heatmap_handler(State(state())).await.unwrap();
        assert_eq!(heat.z.len(), 3);
        assert_eq!(heat.z[0].len(), 10);
        assert_eq!(heat.z_range, (0.0, 0.09));
    }

    #[test]
    fn test_update_request_wire_format() {
        let req: UpdateRequest =
            serde_json::from_str(r#"{"current":2,"event":{"source":"play_clicked"}}"#).unwrap();
        assert_eq!(req.current, 2);
        assert_eq!(req.event, Event::PlayClicked);
    }

    #[test]
    fn test_router_builds_with_and_without_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let _ = router(state(), None, false);
        let _ = router(state(), Some(dir.path().to_path_buf()), true);
    }
}

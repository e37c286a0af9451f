// src/web.rs

//! The live report page.
//!
//! One `RenderSurface` lives for the whole server. Every trigger builds a new
//! `ScanSession` whose sink re-renders the surface after each append and
//! bumps its version; connected pages are told about the new version over
//! SSE and fetch the current table from `/api/report`.

use crate::cancellation::CancellationToken;
use crate::config::{Config, IndentStyle};
use crate::core_types::{FileFeatureInfo, FileIndentationInfo};
use crate::errors::Error;
use crate::opener::{FileOpener, SystemOpener};
use crate::output::html::{render_table, FILTER_SCRIPT};
use crate::output::{feature_table, indentation_table, ReportContext, ReportTable};
use crate::pipeline::{run_pipeline, Pipeline};
use crate::session::ReportSink;
use axum::{
    body::Bytes,
    extract::{Json, State},
    http::{header, StatusCode, Uri},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tower_http::trace::TraceLayer;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// The current state of the rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedReport {
    /// Incremented on every render.
    pub version: u64,
    /// The pipeline that produced the content, `None` before the first trigger.
    pub pipeline: Option<Pipeline>,
    pub title: String,
    /// The `<table>` element.
    pub html: String,
    /// Number of file records in the aggregate.
    pub files: usize,
    /// Number of table rows.
    pub rows: usize,
}

/// The single report surface of a running server.
pub struct RenderSurface {
    current: RwLock<RenderedReport>,
    tx: broadcast::Sender<u64>,
}

impl RenderSurface {
    /// Creates a surface showing an empty feature list.
    pub fn new(ctx: &ReportContext) -> Self {
        let (tx, _rx) = broadcast::channel(64);
        let table = feature_table(&[], ctx);
        Self {
            current: RwLock::new(RenderedReport {
                version: 0,
                pipeline: None,
                title: table.title.to_string(),
                html: render_table(&table, ctx),
                files: 0,
                rows: 0,
            }),
            tx,
        }
    }

    /// Returns a copy of the current content.
    pub fn snapshot(&self) -> RenderedReport {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Receives the version number of every render from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<u64> {
        self.tx.subscribe()
    }

    /// Replaces the content unless `token` was cancelled.
    ///
    /// The check happens under the write lock, so a superseded scan cannot
    /// overwrite the surface after its successor has started.
    fn replace(
        &self,
        token: &CancellationToken,
        pipeline: Pipeline,
        table: &ReportTable,
        ctx: &ReportContext,
        files: usize,
    ) {
        let html = render_table(table, ctx);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if token.is_cancelled() {
            return;
        }
        current.version += 1;
        current.pipeline = Some(pipeline);
        current.title = table.title.to_string();
        current.html = html;
        current.files = files;
        current.rows = table.rows.len();
        // No receivers is not an error.
        let _ = self.tx.send(current.version);
    }
}

/// Re-renders the surface from every aggregate handed to it.
struct WebSink {
    surface: Arc<RenderSurface>,
    ctx: ReportContext,
    token: CancellationToken,
}

impl ReportSink for WebSink {
    fn render_feature_report(&self, records: &[FileFeatureInfo]) {
        let table = feature_table(records, &self.ctx);
        self.surface.replace(
            &self.token,
            Pipeline::FeatureList,
            &table,
            &self.ctx,
            records.len(),
        );
    }

    fn render_indentation_report(&self, records: &[FileIndentationInfo]) {
        let table = indentation_table(records);
        self.surface.replace(
            &self.token,
            Pipeline::IndentationCheck,
            &table,
            &self.ctx,
            records.len(),
        );
    }
}

/// Shared server state.
pub struct AppState {
    base_config: Config,
    surface: Arc<RenderSurface>,
    current_scan: Mutex<CancellationToken>,
    opener: Arc<dyn FileOpener>,
}

impl AppState {
    /// Creates the state for a scan root, opening files with the system opener.
    pub fn new(config: Config) -> Self {
        let opener = Arc::new(SystemOpener::new(config.scan_root.clone()));
        Self::with_opener(config, opener)
    }

    /// Creates the state with a custom file opener.
    pub fn with_opener(config: Config, opener: Arc<dyn FileOpener>) -> Self {
        let surface = Arc::new(RenderSurface::new(&ReportContext::from(&config)));
        Self {
            base_config: config,
            surface,
            current_scan: Mutex::new(CancellationToken::new()),
            opener,
        }
    }

    /// The report surface.
    pub fn surface(&self) -> &Arc<RenderSurface> {
        &self.surface
    }

    /// Cancels the running scan, if any, and returns the token for a new one.
    fn start_scan(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut current = self
            .current_scan
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        current.cancel();
        *current = token.clone();
        token
    }
}

/// Optional per-trigger overrides of the server's configuration.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ScanRequest {
    pub default_indentation: Option<IndentStyle>,
    pub show_tasks: Option<bool>,
    pub show_author: Option<bool>,
}

impl ScanRequest {
    fn apply(&self, base: &Config) -> Config {
        let mut config = base.clone();
        if let Some(style) = self.default_indentation {
            config.analysis.default_indentation = style;
        }
        if let Some(show) = self.show_tasks {
            config.analysis.show_tasks = show;
        }
        if let Some(show) = self.show_author {
            config.analysis.show_author = show;
        }
        config
    }
}

/// Result of a completed trigger.
#[derive(Deserialize, Serialize, Debug)]
pub struct ScanResponse {
    pub pipeline: Pipeline,
    pub files: usize,
    pub version: u64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct OpenRequest {
    pub path: String,
}

// --- Server Startup ---
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/report", get(report_handler))
        .route("/api/events", get(sse_handler))
        .route("/api/scan/features", post(scan_features_handler))
        .route("/api/scan/indentation", post(scan_indentation_handler))
        .route("/api/open", post(open_handler))
        .route("/filter.js", get(filter_script_handler))
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: Config, port: u16, open_browser: bool) -> anyhow::Result<()> {
    log::info!("Serving reports for {}", config.scan_root.display());
    let app = create_router(Arc::new(AppState::new(config)));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let url = format!("http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("featlist report running at {}", url);
    if open_browser {
        if let Err(e) = open::that(&url) {
            log::warn!("Could not open a browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}

// --- Handlers ---

async fn static_handler(uri: Uri) -> impl IntoResponse {
    let mut path = uri.path().trim_start_matches('/').to_string();
    if path.is_empty() {
        path = "index.html".to_string();
    }
    match Assets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

async fn filter_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        FILTER_SCRIPT,
    )
}

async fn report_handler(State(state): State<Arc<AppState>>) -> Json<RenderedReport> {
    Json(state.surface.snapshot())
}

/// Streams a `render` event carrying the new version after every render.
async fn sse_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.surface.subscribe();
    // A lagging client skips versions; it always fetches the latest content anyway.
    let stream = BroadcastStream::new(rx).filter_map(|msg| {
        msg.ok()
            .map(|version| Ok(Event::default().event("render").data(version.to_string())))
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn scan_features_handler(state: State<Arc<AppState>>, body: Bytes) -> Response {
    scan_handler(state, Pipeline::FeatureList, body).await
}

async fn scan_indentation_handler(state: State<Arc<AppState>>, body: Bytes) -> Response {
    scan_handler(state, Pipeline::IndentationCheck, body).await
}

async fn scan_handler(
    State(state): State<Arc<AppState>>,
    pipeline: Pipeline,
    body: Bytes,
) -> Response {
    let request: ScanRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ScanRequest::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(request) => request,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        }
    };
    let config = request.apply(&state.base_config);
    let token = state.start_scan();
    let sink = Arc::new(WebSink {
        surface: state.surface.clone(),
        ctx: ReportContext::from(&config),
        token: token.clone(),
    });
    log::info!("Triggered {}", pipeline);

    let result =
        tokio::task::spawn_blocking(move || run_pipeline(pipeline, &config, &token, sink, None))
            .await;

    match result {
        Ok(Ok(report)) => Json(ScanResponse {
            pipeline,
            files: report.file_count(),
            version: state.surface.snapshot().version,
        })
        .into_response(),
        Ok(Err(Error::Interrupted)) => {
            (StatusCode::CONFLICT, "Scan superseded by a newer trigger").into_response()
        }
        Ok(Err(e)) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// Opens a file from the report. A failure is reported but leaves the page untouched.
async fn open_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OpenRequest>,
) -> Response {
    let opener = state.opener.clone();
    let result = tokio::task::spawn_blocking(move || opener.open(&req.path)).await;

    match result {
        Ok(Ok(())) => StatusCode::NO_CONTENT.into_response(),
        Ok(Err(e)) => {
            log::warn!("{}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ReportContext {
        ReportContext {
            scan_root: "/project".into(),
            show_tasks: true,
            show_author: true,
        }
    }

    #[test]
    fn test_surface_starts_with_empty_feature_table() {
        let surface = RenderSurface::new(&ctx());
        let report = surface.snapshot();
        assert_eq!(report.version, 0);
        assert!(report.pipeline.is_none());
        assert_eq!(report.title, "Features List");
        assert!(report.html.contains("<th>Author</th>"));
    }

    #[test]
    fn test_cancelled_sink_does_not_render() {
        let surface = Arc::new(RenderSurface::new(&ctx()));
        let token = CancellationToken::new();
        let sink = WebSink {
            surface: surface.clone(),
            ctx: ctx(),
            token: token.clone(),
        };
        let mut rx = surface.subscribe();

        sink.render_indentation_report(&[FileIndentationInfo {
            file_name: "b.feature".to_string(),
            relative_path: "b.feature".to_string(),
            inconsistent_lines: vec!["in line 2 detected spaces and tabs".to_string()],
        }]);
        assert_eq!(rx.try_recv().unwrap(), 1);
        let report = surface.snapshot();
        assert_eq!(report.pipeline, Some(Pipeline::IndentationCheck));
        assert_eq!(report.rows, 1);

        token.cancel();
        sink.render_indentation_report(&[]);
        assert_eq!(surface.snapshot().version, 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_scan_request_overrides() {
        let base = Config::new_for_test("/project");
        let request = ScanRequest {
            default_indentation: Some(IndentStyle::Tab),
            show_tasks: Some(false),
            show_author: None,
        };
        let config = request.apply(&base);
        assert_eq!(config.analysis.default_indentation, IndentStyle::Tab);
        assert!(!config.analysis.show_tasks);
        assert!(config.analysis.show_author);
    }

    #[test]
    fn test_start_scan_cancels_previous() {
        let state = AppState::new(Config::new_for_test("/project"));
        let first = state.start_scan();
        let second = state.start_scan();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }
}

#![forbid(unsafe_code)]

use crate::build_info::{VIEWER_NAME, VIEWER_VERSION, build_fingerprint, short_digest};
use crate::http::{HttpRequest, Method, Response, Target, decode_path_segment, decode_query_value};
use sb_core::board::{BoardIntent, BoardSession, GENERIC_RENDERER, resolve_related};
use sb_core::model::Solution;
use sb_storage::SolutionStore;
use serde::Serialize;
use serde_json::{Value, json};

pub(crate) type Board = BoardSession<SolutionStore>;

#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) code: &'static str,
    pub(crate) message: String,
    pub(crate) recovery: Option<String>,
    pub(crate) status: u16,
}

impl ApiError {
    fn new(status: u16, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            recovery: None,
            status,
        }
    }

    fn with_recovery(mut self, recovery: impl Into<String>) -> Self {
        self.recovery = Some(recovery.into());
        self
    }

    fn internal(err: serde_json::Error) -> Self {
        Self::new(500, "INTERNAL", format!("failed to serialize response: {err}"))
    }

    pub(crate) fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code,
                "message": self.message,
                "recovery": self.recovery
            }
        })
    }

    pub(crate) fn status_line(&self) -> &'static str {
        match self.status {
            400 => "400 Bad Request",
            404 => "404 Not Found",
            405 => "405 Method Not Allowed",
            _ => "500 Internal Server Error",
        }
    }

    pub(crate) fn into_response(self) -> Response {
        Response::json(self.status_line(), &self.to_json())
    }
}

#[derive(Serialize)]
struct SolutionEntry<'a> {
    #[serde(flatten)]
    solution: &'a Solution,
    revision: u64,
}

impl<'a> SolutionEntry<'a> {
    fn new(store: &SolutionStore, solution: &'a Solution) -> Self {
        Self {
            solution,
            revision: store.revision(solution.id.as_str()).unwrap_or(0),
        }
    }
}

/// Endpoints the viewer serves, resolved from the undecoded path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route<'p> {
    About,
    State,
    Intent,
    Solutions,
    Solution(&'p str),
    Renderers,
    Events,
}

impl<'p> Route<'p> {
    pub(crate) fn parse(path: &'p str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        let route = match path {
            "/api/about" => Route::About,
            "/api/state" => Route::State,
            "/api/intent" => Route::Intent,
            "/api/solutions" => Route::Solutions,
            "/api/renderers" => Route::Renderers,
            "/api/events" => Route::Events,
            other => {
                let segment = other.strip_prefix("/api/solutions/")?;
                if segment.is_empty() || segment.contains('/') {
                    return None;
                }
                Route::Solution(segment)
            }
        };
        Some(route)
    }

    fn allow(self) -> &'static str {
        match self {
            Route::Intent => "POST",
            _ => "GET, HEAD",
        }
    }
}

pub(crate) fn route(board: &mut Board, request: &HttpRequest) -> Response {
    let path = request.target.path.as_str();
    let Some(route) = Route::parse(path) else {
        return ApiError::new(404, "NOT_FOUND", format!("No endpoint at {path}."))
            .with_recovery("Endpoints live under /api/; see /api/about.")
            .into_response();
    };
    let method = &request.method;
    let result = match route {
        Route::Intent if *method == Method::Post => apply_intent(board, &request.body),
        Route::Intent => Err(method_not_allowed(method, path, route)),
        _ if !method.reads() => Err(method_not_allowed(method, path, route)),
        Route::About => Ok(about(board)),
        Route::State => state(board, request.if_none_match.as_deref()),
        Route::Solutions => solutions(board),
        Route::Solution(raw_id) => solution(board, raw_id),
        Route::Renderers => Ok(renderers(board)),
        Route::Events => events(board, &request.target),
    };
    result.unwrap_or_else(|err| {
        let allow = (err.status == 405).then(|| route.allow());
        let response = err.into_response();
        match allow {
            Some(allow) => response.with_allow(allow),
            None => response,
        }
    })
}

fn method_not_allowed(method: &Method, path: &str, route: Route<'_>) -> ApiError {
    ApiError::new(
        405,
        "METHOD_NOT_ALLOWED",
        format!("{method} is not supported on {path}."),
    )
    .with_recovery(format!("Use {}.", route.allow()))
}

fn about(board: &Board) -> Response {
    let store = board.registry();
    let body = json!({
        "name": VIEWER_NAME,
        "version": VIEWER_VERSION,
        "fingerprint": build_fingerprint(),
        "progress_policy": store.policy().as_str(),
        "solutions": store.len(),
    });
    Response::json("200 OK", &body)
}

/// Full render state plus its digest. The digest is computed before the
/// `etag` field is added.
fn state_body(board: &Board) -> Result<(Value, String), ApiError> {
    let snapshot = board.snapshot();
    let mut body = json!({
        "mode": snapshot.mode,
        "viewport_width": snapshot.viewport_width,
        "board": serde_json::to_value(&snapshot.board).map_err(ApiError::internal)?,
        "detail": serde_json::to_value(&snapshot.detail).map_err(ApiError::internal)?,
        "drag": serde_json::to_value(&snapshot.drag).map_err(ApiError::internal)?,
        "filter": board.filter(),
        "last_event_seq": board.registry().last_event_seq(),
    });
    let etag = short_digest(body.to_string().as_bytes());
    body["etag"] = Value::String(etag.clone());
    Ok((body, etag))
}

fn state(board: &Board, if_none_match: Option<&str>) -> Result<Response, ApiError> {
    let (body, etag) = state_body(board)?;
    if if_none_match == Some(etag.as_str()) {
        return Ok(Response::not_modified(etag));
    }
    Ok(Response::json("200 OK", &body).with_etag(etag))
}

fn apply_intent(board: &mut Board, body: &[u8]) -> Result<Response, ApiError> {
    let recovery = "Send a JSON object such as {\"intent\":\"select_item\",\"item\":\"<id>\"}.";
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(
            ApiError::new(400, "INVALID_INTENT", "Request body must not be empty.")
                .with_recovery(recovery),
        );
    }
    let intent: BoardIntent = serde_json::from_slice(body).map_err(|err| {
        ApiError::new(400, "INVALID_INTENT", format!("Invalid intent: {err}."))
            .with_recovery(recovery)
    })?;
    let outcome = board.apply(intent);
    let (state, etag) = state_body(board)?;
    let body = json!({
        "outcome": serde_json::to_value(&outcome).map_err(ApiError::internal)?,
        "state": state,
    });
    Ok(Response::json("200 OK", &body).with_etag(etag))
}

fn solutions(board: &Board) -> Result<Response, ApiError> {
    let store = board.registry();
    let entries: Vec<SolutionEntry<'_>> = store
        .all()
        .iter()
        .map(|solution| SolutionEntry::new(store, solution))
        .collect();
    let body = json!({
        "count": entries.len(),
        "solutions": serde_json::to_value(&entries).map_err(ApiError::internal)?,
        "tags": store.tags(),
    });
    Ok(Response::json("200 OK", &body))
}

fn solution(board: &Board, raw_id: &str) -> Result<Response, ApiError> {
    let unknown = || {
        ApiError::new(404, "UNKNOWN_SOLUTION", "Unknown solution.")
            .with_recovery("Pick an id returned by /api/solutions.")
    };
    let id = decode_path_segment(raw_id).ok_or_else(unknown)?;
    let store = board.registry();
    let solution = store.get(&id).ok_or_else(unknown)?;
    let related: Vec<&str> = resolve_related(store, solution)
        .into_iter()
        .map(|related| related.id.as_str())
        .collect();
    let renderer = board
        .renderers()
        .resolve(solution.detail_renderer_key.as_deref())
        .key;
    let body = json!({
        "solution": serde_json::to_value(SolutionEntry::new(store, solution))
            .map_err(ApiError::internal)?,
        "related": related,
        "renderer": renderer,
    });
    Ok(Response::json("200 OK", &body))
}

fn renderers(board: &Board) -> Response {
    let body = json!({
        "keys": board.renderers().keys(),
        "fallback": GENERIC_RENDERER,
    });
    Response::json("200 OK", &body)
}

fn events(board: &Board, target: &Target) -> Result<Response, ApiError> {
    let since = match target.query_param("since").filter(|raw| !raw.is_empty()) {
        None => 0,
        Some(raw) => decode_query_value(raw)
            .and_then(|value| value.parse::<u64>().ok())
            .ok_or_else(|| {
                ApiError::new(400, "INVALID_CURSOR", "since: expected a non-negative integer.")
                    .with_recovery("Pass the last_seq from a previous /api/events response.")
            })?,
    };
    let store = board.registry();
    let events: Vec<_> = store.events_after(since).collect();
    let body = json!({
        "events": serde_json::to_value(&events).map_err(ApiError::internal)?,
        "last_seq": store.last_event_seq(),
    });
    Ok(Response::json("200 OK", &body))
}

//! Request handlers.

use std::convert::Infallible;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::ServerState;
use crate::models::{Todo, TodoId};
use crate::protocol::{paths, FunctionCall, FunctionResult, SubscribeParams};
use crate::sse::{ERROR_EVENT, SNAPSHOT_EVENT};
use crate::store::StoreError;

type Reply = (StatusCode, Json<FunctionResult>);

fn ok(value: impl serde::Serialize) -> Reply {
    (StatusCode::OK, Json(FunctionResult::success(value)))
}

fn fail(status: StatusCode, message: impl Into<String>) -> Reply {
    (status, Json(FunctionResult::error(message)))
}

fn store_failure(path: &str, err: StoreError) -> Reply {
    tracing::warn!(%path, error = %err, "function failed");
    let status = match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::EmptyText => StatusCode::BAD_REQUEST,
    };
    fail(status, err.to_string())
}

fn unknown_function(path: &str) -> Reply {
    fail(StatusCode::NOT_FOUND, format!("unknown function {}", path))
}

#[derive(Deserialize)]
struct TextArgs {
    text: String,
}

#[derive(Deserialize)]
struct UpdateArgs {
    id: TodoId,
    completed: bool,
}

#[derive(Deserialize)]
struct UpdateTextArgs {
    id: TodoId,
    text: String,
}

#[derive(Deserialize)]
struct IdArgs {
    id: TodoId,
}

fn parse_args<T: DeserializeOwned>(path: &str, args: Value) -> Result<T, Reply> {
    serde_json::from_value(args).map_err(|e| {
        fail(
            StatusCode::BAD_REQUEST,
            format!("invalid arguments for {}: {}", path, e),
        )
    })
}

/// `POST /api/query`
pub async fn query(State(state): State<ServerState>, Json(call): Json<FunctionCall>) -> Reply {
    match call.path.as_str() {
        paths::GET => ok(state.store.get()),
        other => unknown_function(other),
    }
}

/// `POST /api/mutation`
pub async fn mutation(State(state): State<ServerState>, Json(call): Json<FunctionCall>) -> Reply {
    tracing::debug!(path = %call.path, "mutation");
    match run_mutation(&state, call) {
        Ok(reply) | Err(reply) => reply,
    }
}

fn run_mutation(state: &ServerState, call: FunctionCall) -> Result<Reply, Reply> {
    let path = call.path.as_str();
    let store = &state.store;

    let reply = match path {
        paths::CREATE => {
            let args: TextArgs = parse_args(path, call.args)?;
            let id = store.create(&args.text).map_err(|e| store_failure(path, e))?;
            ok(id)
        }
        paths::UPDATE => {
            let args: UpdateArgs = parse_args(path, call.args)?;
            store
                .update(&args.id, args.completed)
                .map_err(|e| store_failure(path, e))?;
            ok(Value::Null)
        }
        paths::UPDATE_TEXT => {
            let args: UpdateTextArgs = parse_args(path, call.args)?;
            store
                .update_text(&args.id, &args.text)
                .map_err(|e| store_failure(path, e))?;
            ok(Value::Null)
        }
        paths::REMOVE => {
            let args: IdArgs = parse_args(path, call.args)?;
            store.remove(&args.id).map_err(|e| store_failure(path, e))?;
            ok(Value::Null)
        }
        paths::CLEAR_COMPLETED => {
            store.clear_completed();
            ok(Value::Null)
        }
        other => unknown_function(other),
    };
    Ok(reply)
}

fn snapshot_event(todos: &[Todo]) -> Event {
    match Event::default().event(SNAPSHOT_EVENT).json_data(todos) {
        Ok(event) => event,
        Err(e) => Event::default()
            .event(ERROR_EVENT)
            .data(serde_json::json!({ "message": e.to_string() }).to_string()),
    }
}

/// `GET /api/subscribe?path=todos:get`
///
/// Sends the current list at once, then one snapshot per change. Changes
/// arriving faster than the client reads are coalesced.
pub async fn subscribe(
    State(state): State<ServerState>,
    Query(params): Query<SubscribeParams>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, Reply> {
    if params.path != paths::GET {
        return Err(unknown_function(&params.path));
    }

    let changes = state.store.subscribe();
    tracing::debug!("subscriber connected");

    let events = stream::unfold((changes, true), |(mut changes, first)| async move {
        if !first {
            changes.changed().await.ok()?;
        }
        let event = snapshot_event(&changes.borrow_and_update());
        Some((Ok(event), (changes, false)))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

//! In-memory implementation of the todo REST contract, for tests and demos.
//!
//! Ids are assigned from a monotonically increasing counter and the list
//! keeps insertion order, so a freshly created todo always appears at the
//! end of a subsequent list response.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
}

#[derive(Deserialize)]
pub struct TodoPayload {
    pub title: String,
}

/// The `{ "todo": { ... } }` envelope around create and update payloads.
#[derive(Deserialize)]
pub struct TodoEnvelope {
    pub todo: TodoPayload,
}

#[derive(Default)]
struct Store {
    next_id: u64,
    todos: Vec<Todo>,
}

type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Db::default();
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(envelope): Json<TodoEnvelope>,
) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        title: envelope.todo.title,
    };
    store.todos.push(todo.clone());
    tracing::debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store
        .todos
        .iter()
        .find(|todo| todo.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(envelope): Json<TodoEnvelope>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store
        .todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todo.title = envelope.todo.title;
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|todo| todo.id != id);
    if store.todos.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::debug!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

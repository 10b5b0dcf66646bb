use crate::agents::answer::AnswerAgent;
use crate::models::AppState;
use crate::routes::error_payload;
use axum::extract::State;
use axum::{routing::post, Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask_question))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct AskForm {
    #[serde(default)]
    question: String,
}

async fn ask_question(State(state): State<AppState>, Form(form): Form<AskForm>) -> Json<Value> {
    match AnswerAgent::answer(&state, &form.question).await {
        Ok(answer) => Json(json!({ "answer": answer })),
        Err(err) => error_payload(&err),
    }
}

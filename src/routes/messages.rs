use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::Result, models::Message, utils::extractors::ValidJson};

pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<i32>,
) -> Result<Json<Vec<Message>>> {
    let messages = state.store()?.chat_messages(chat_id);

    Ok(Json(messages))
}

pub async fn send_message(
    State(state): State<AppState>,
    ValidJson(message): ValidJson<Message>,
) -> Result<Json<Message>> {
    let sent = state.store()?.send_message(message);

    Ok(Json(sent))
}

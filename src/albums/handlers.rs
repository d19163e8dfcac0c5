use super::store::AlbumStore;
use super::types::{AlbumPayload, MessageResponse};

use axum::{
    Extension,
    body::Bytes,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// Renders `value` as indented JSON with the given status.
///
/// A serialization failure becomes a 500 with a `{"message": ...}` body.
pub fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            let body = serde_json::json!({ "message": "failed to serialize response" });
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                body.to_string(),
            )
                .into_response()
        }
    }
}

fn parse_payload(body: &[u8]) -> Result<AlbumPayload, Response> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected album payload: {}", e);
        pretty_json(
            StatusCode::BAD_REQUEST,
            &MessageResponse::new(format!("invalid album payload: {}", e)),
        )
    })
}

pub async fn handle_list_albums(Extension(store): Extension<Arc<AlbumStore>>) -> Response {
    pretty_json(StatusCode::OK, &store.list().await)
}

pub async fn handle_get_album(
    Extension(store): Extension<Arc<AlbumStore>>,
    Path(id): Path<String>,
) -> Response {
    match store.get(&id).await {
        Some(album) => pretty_json(StatusCode::OK, &album),
        None => {
            tracing::warn!("Album {} not found", id);
            pretty_json(
                StatusCode::NOT_FOUND,
                &MessageResponse::new("album not found"),
            )
        }
    }
}

pub async fn handle_create_album(
    Extension(store): Extension<Arc<AlbumStore>>,
    body: Bytes,
) -> Response {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(rejection) => return rejection,
    };

    let album = store.create(payload).await;
    pretty_json(StatusCode::CREATED, &album)
}

pub async fn handle_update_album(
    Extension(store): Extension<Arc<AlbumStore>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(rejection) => return rejection,
    };

    match store.update(&id, payload.clone()).await {
        Some(albums) => pretty_json(StatusCode::OK, &albums),
        None => {
            // Nothing was applied; echo back what the client tried to write.
            tracing::warn!("Album {} not found, nothing modified", id);
            pretty_json(StatusCode::NOT_MODIFIED, &payload)
        }
    }
}

pub async fn handle_delete_album(
    Extension(store): Extension<Arc<AlbumStore>>,
    Path(id): Path<String>,
) -> Response {
    match store.delete(&id).await {
        Some(albums) => pretty_json(StatusCode::OK, &albums),
        None => {
            tracing::warn!("Album {} to be deleted not found", id);
            pretty_json(
                StatusCode::NOT_FOUND,
                &MessageResponse::new("album to be deleted not found"),
            )
        }
    }
}

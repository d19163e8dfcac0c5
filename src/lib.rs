//! In-Memory Album Catalogue Service
//!
//! This library crate defines the modules that make up the album service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Modules
//! - **`albums`**: The album collection. Holds the shared `AlbumStore` (an ordered,
//!   lock-guarded sequence of records with positional IDs) and the HTTP handlers
//!   that expose CRUD operations over it.
//! - **`config`**: Command line and environment configuration for the server.
//!
//! The router is assembled by [`app`] so that the binary and the integration
//! tests serve exactly the same routes.

pub mod albums;
pub mod config;

use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use albums::handlers::{
    handle_create_album, handle_delete_album, handle_get_album, handle_list_albums,
    handle_update_album,
};
use albums::store::AlbumStore;

/// Builds the HTTP router with the store injected as an `Extension`.
///
/// | Method | Path           | Handler               |
/// |--------|----------------|-----------------------|
/// | GET    | `/albums`      | `handle_list_albums`  |
/// | POST   | `/albums`      | `handle_create_album` |
/// | GET    | `/albums/:id`  | `handle_get_album`    |
/// | POST   | `/albums/:id`  | `handle_update_album` |
/// | DELETE | `/albums/:id`  | `handle_delete_album` |
pub fn app(store: Arc<AlbumStore>) -> Router {
    Router::new()
        .route("/albums", get(handle_list_albums).post(handle_create_album))
        .route(
            "/albums/:id",
            get(handle_get_album)
                .post(handle_update_album)
                .delete(handle_delete_album),
        )
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
}

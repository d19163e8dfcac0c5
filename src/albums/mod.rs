//! Album Collection Module
//!
//! Holds the only data set of the service: an ordered, in-memory sequence of
//! album records, and the HTTP API over it.
//!
//! ## Core Concepts
//! - **Store**: `AlbumStore` owns the sequence behind a single lock. Every operation
//!   takes the lock once, so concurrent requests observe whole operations only.
//! - **Positional IDs**: an album's `id` is the decimal form of its index. New albums get
//!   the current length as their id, and a delete renumbers every survivor to `0..len-1`.
//!   IDs are therefore not stable across deletes.
//! - **API**: handlers render pretty-printed JSON and report misses and malformed bodies
//!   with a `{"message": ...}` body.
//!
//! ## Submodules
//! - **`types`**: The `Album` record and request/response bodies.
//! - **`store`**: The shared collection and its list/get/create/update/delete operations.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod handlers;
pub mod store;
pub mod types;

//! Wire-level data transfer objects.
//!
//! These types define the JSON shapes accepted and returned by the HTTP API.
//! Field names are part of the public contract and must not change.

pub mod api;
pub mod chapter;
pub mod layer;
pub mod series;

//! HTTP request handlers.
//!
//! Controllers authenticate the caller where required, convert DTOs into
//! parameter models, call the matching service and convert the result back
//! into a DTO. Each handler carries a `utoipa::path` annotation for the
//! OpenAPI document served at `/api/docs`.

pub mod admin;
pub mod chapter;
pub mod layer;
pub mod series;

#[cfg(test)]
mod test;

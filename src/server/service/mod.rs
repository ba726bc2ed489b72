//! Business logic layer.
//!
//! Services sit between controllers and repositories. They assign identities
//! and timestamps, enforce creation rules and translate missing records into
//! `AppError::NotFound`. Each service is generic over the repository capability
//! it needs so it can run against SeaORM or an in-memory store.

pub mod admin;
pub mod comic;
pub mod layer;
pub mod tag;
pub mod translator;

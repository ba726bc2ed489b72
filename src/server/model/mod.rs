//! Domain models and operation parameter types.
//!
//! Domain models sit between the entity layer and the wire DTOs. They are built
//! from entities with `from_entity`, carry nested children assembled by the data
//! layer, and convert to DTOs with `into_dto`. Parameter types carry the fields a
//! caller supplies for a create operation.

pub mod chapter;
pub mod layer;
pub mod series;
pub mod tag;

//! Boundary between raw input and the pipeline: validation on the way in,
//! report serialization on the way out.

pub mod csv;
pub mod health_check;
pub mod json;

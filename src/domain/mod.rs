//! Domain types shared by every pipeline stage.
//!
//! Closed sets (event types, anomaly types, severities, decisions) are enums so
//! that an unknown value is rejected when it is parsed, never deep inside a stage.

pub mod decision;
pub mod event;
pub mod finding;
pub mod ports;
pub mod routing;

//! Domain Layer
//!
//! Server records, input validation, probe results, and persistence
//! interfaces. Nothing here touches IO.

pub mod entities;
pub mod probe;
pub mod repository;
pub mod value_objects;

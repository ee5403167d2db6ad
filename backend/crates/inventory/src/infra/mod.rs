//! Infrastructure Layer
//!
//! Server stores and the system prober.

pub mod memory;
pub mod postgres;
pub mod system_prober;

//! Service Ports
//!
//! Interfaces for external collaborators the domain depends on.

mod clock;

pub use clock::*;

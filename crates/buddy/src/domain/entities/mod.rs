//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Pet: The single companion owned by a user session
//! - MessageEntry / MessageLog: Lines the pet says, bounded FIFO

mod message;
mod pet;

pub use message::*;
pub use pet::*;

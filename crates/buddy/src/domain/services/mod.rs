//! Domain Services
//!
//! Stateless rules over the Pet entity.

pub mod decay;
pub mod interaction;
pub mod responses;

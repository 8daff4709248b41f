//! dns-check Infrastructure Layer
//!
//! Wires the dual-stack check to a real resolver backed by `hickory-resolver`.
pub mod dns;

pub use dns::{check, HickoryRecordResolver};

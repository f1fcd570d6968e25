//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `directory`, `schedule`, etc.) so
//! individual pages can depend on small focused models. Only `session` holds
//! reactive signals; the rest are plain data plus pure functions.

pub mod application;
pub mod directory;
pub mod schedule;
pub mod session;
pub mod social;

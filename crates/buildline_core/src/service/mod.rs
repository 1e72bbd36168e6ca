//! View-level services.
//!
//! # Responsibility
//! - Wire the pure timeline stages to the state of one hosting view.
//! - Keep hosts decoupled from individual layout stages.

pub mod timeline_service;

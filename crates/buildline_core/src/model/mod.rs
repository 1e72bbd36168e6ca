//! Domain model for the project timeline.
//!
//! # Responsibility
//! - Mirror source records from the project store (`record`).
//! - Define the canonical dated item every record projects into (`item`).
//!
//! # Invariants
//! - The engine borrows records; it never owns or mutates them.

pub mod item;
pub mod record;

//! Timeline layout engine.
//!
//! # Responsibility
//! - Turn normalized schedule items into screen geometry for the Gantt view.
//!
//! # Invariants
//! - Every stage is a pure function of its inputs, except `viewport`,
//!   which holds the container scroll state.
//! - No stage performs I/O or can block.

pub mod bounds;
pub mod calendar;
pub mod geometry;
pub mod glyph;
pub mod header;
pub mod layout;
pub mod normalize;
pub mod viewport;
pub mod zoom;

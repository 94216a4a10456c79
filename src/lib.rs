//! Grammar-based L-system fractal drawings, rendered with a raster pen.
//!
//! This library rewrites an axiom string with per-symbol production rules,
//! then interprets the expanded string as pen commands (`push`, `pop`,
//! `rotate`, `move`, `draw`) to trace fractal line art, which can be saved
//! as a PNG. See [`l_system::LSystem`] for the entry point and examples,
//! and [`definition::LSystemDef`] to load whole systems from RON files.

/// Raster pen backend: position, heading, stroke capture, PNG output
pub mod turtle;

/// L-system implementation: rewriting engine and command interpreter
pub mod l_system;

/// Serializable L-system definitions (RON)
pub mod definition;

/// Error types for interpretation and persistence
pub mod errors;

/// Make your life easy! Just import prelude::* and ignore all the warnings!
pub mod prelude {
    pub use crate::definition::LSystemDef;
    pub use crate::errors::{LSystemError, PenError};
    pub use crate::l_system::ops::Command;
    pub use crate::l_system::LSystem;
    pub use crate::turtle::{Pen, PenState, Stroke};
}

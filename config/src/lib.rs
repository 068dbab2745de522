//! # Config Crate
//!
//! Centralized configuration constants for the SCAD compiler pipeline.
//! Resolution defaults and parser safety limits are defined here so the
//! parser and transpiler agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{compute_segments, DEFAULT_FA, DEFAULT_FS, MIN_SEGMENTS};
//!
//! // No $fn: segments come from $fa/$fs and are clamped to the supported range
//! let segments = compute_segments(1.0, 0, DEFAULT_FA, DEFAULT_FS);
//! assert_eq!(segments, MIN_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **OpenSCAD Compatible**: `$fa`/`$fs` defaults match OpenSCAD behavior

pub mod constants;

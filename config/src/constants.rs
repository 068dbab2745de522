//! # Configuration Constants
//!
//! Centralized constants for the SCAD compiler pipeline. Resolution defaults,
//! parser safety limits and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Segment defaults and clamp range ($fn, $fa, $fs)
//! - **Limits**: Parser safety bounds (nesting depth, iteration ceiling)

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when checking generated parameters for degenerate values
/// (zero-length mirror normals, zero radii).
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RESOLUTION CONSTANTS ($fn, $fa, $fs)
// =============================================================================

/// Default value for $fa (minimum fragment angle in degrees).
///
/// Used when neither the source nor the caller supplies `$fn`.
///
/// OpenSCAD default: 12.0 degrees
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FA;
///
/// // Maximum fragments from angle: 360 / $fa
/// let max_from_angle = 360.0 / DEFAULT_FA; // = 30 fragments
/// assert_eq!(max_from_angle, 30.0);
/// ```
pub const DEFAULT_FA: f64 = 12.0;

/// Default value for $fs (minimum fragment size).
///
/// OpenSCAD default: 2.0 units
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FS;
///
/// // Maximum fragments from size: circumference / $fs = 2*PI*r / $fs
/// let radius = 10.0;
/// let max_from_size = (2.0 * std::f64::consts::PI * radius) / DEFAULT_FS;
/// assert!(max_from_size > 31.0);
/// ```
pub const DEFAULT_FS: f64 = 2.0;

/// Minimum number of segments emitted for any curved primitive.
///
/// The builder consumer renders interactively; fewer than 16 segments
/// produces visibly faceted previews.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 6;
/// assert_eq!(requested.max(MIN_SEGMENTS), 16);
/// ```
pub const MIN_SEGMENTS: u32 = 16;

/// Maximum number of segments emitted for any curved primitive.
///
/// Safety limit to keep generated meshes small enough for the viewer.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SEGMENTS;
///
/// let requested = 10_000;
/// assert_eq!(requested.min(MAX_SEGMENTS), 128);
/// ```
pub const MAX_SEGMENTS: u32 = 128;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum nesting depth of child statements and vector literals.
///
/// The parser and the transpiler both recurse per nesting level; this bound
/// turns adversarial nesting into a parse error instead of a stack overflow.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_NESTING_DEPTH;
///
/// let current_depth = 64;
/// assert!(current_depth < MAX_NESTING_DEPTH);
/// ```
pub const MAX_NESTING_DEPTH: usize = 256;

/// Multiplier applied to the token count to derive the parser's
/// statement-loop iteration ceiling.
///
/// Every loop iteration consumes at least one token, so a correct parser
/// never approaches this bound.
pub const PARSER_ITERATION_FACTOR: usize = 4;

/// Constant added to the iteration ceiling so tiny inputs still get headroom.
pub const PARSER_ITERATION_SLACK: usize = 64;

/// Computes the parser iteration ceiling for a token stream.
///
/// # Example
///
/// ```rust
/// use config::constants::{iteration_ceiling, PARSER_ITERATION_SLACK};
///
/// assert_eq!(iteration_ceiling(0), PARSER_ITERATION_SLACK);
/// assert!(iteration_ceiling(100) > 100);
/// ```
pub const fn iteration_ceiling(token_count: usize) -> usize {
    token_count
        .saturating_mul(PARSER_ITERATION_FACTOR)
        .saturating_add(PARSER_ITERATION_SLACK)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a segment count into `MIN_SEGMENTS..=MAX_SEGMENTS`.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_segments, MAX_SEGMENTS, MIN_SEGMENTS};
///
/// assert_eq!(clamp_segments(3), MIN_SEGMENTS);
/// assert_eq!(clamp_segments(64), 64);
/// assert_eq!(clamp_segments(4096), MAX_SEGMENTS);
/// ```
#[inline]
pub fn clamp_segments(segments: u32) -> u32 {
    segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Computes the number of segments for a circular shape.
///
/// Implements OpenSCAD's resolution formula:
/// - If $fn > 0: use $fn
/// - Otherwise: ceil(min(360/$fa, 2*PI*r/$fs))
///
/// The result is always clamped to `MIN_SEGMENTS..=MAX_SEGMENTS`.
///
/// # Arguments
///
/// * `radius` - The radius of the circular shape
/// * `fn_value` - The $fn override (0 means use $fa/$fs)
/// * `fa_value` - The $fa value (minimum angle per fragment)
/// * `fs_value` - The $fs value (minimum fragment size)
///
/// # Example
///
/// ```rust
/// use config::constants::{compute_segments, DEFAULT_FA, DEFAULT_FS};
///
/// // With $fn override
/// assert_eq!(compute_segments(10.0, 32, DEFAULT_FA, DEFAULT_FS), 32);
///
/// // Without $fn override (uses $fa/$fs)
/// assert!(compute_segments(10.0, 0, DEFAULT_FA, DEFAULT_FS) >= 16);
/// ```
pub fn compute_segments(radius: f64, fn_value: u32, fa_value: f64, fs_value: f64) -> u32 {
    if fn_value > 0 {
        return clamp_segments(fn_value);
    }

    let from_angle = if fa_value > 0.0 { 360.0 / fa_value } else { f64::INFINITY };
    let from_size = if fs_value > 0.0 {
        (2.0 * std::f64::consts::PI * radius.abs()) / fs_value
    } else {
        f64::INFINITY
    };
    let fragments = from_angle.min(from_size).ceil();

    if fragments.is_finite() {
        clamp_segments(fragments as u32)
    } else {
        MAX_SEGMENTS
    }
}

/// Computes the number of segments for a revolution where no radius is known.
///
/// Only `$fn` and `$fa` participate; a non-positive `$fs` disables the size term.
///
/// # Example
///
/// ```rust
/// use config::constants::{compute_revolve_segments, DEFAULT_FA};
///
/// assert_eq!(compute_revolve_segments(0, DEFAULT_FA), 30);
/// assert_eq!(compute_revolve_segments(48, DEFAULT_FA), 48);
/// ```
pub fn compute_revolve_segments(fn_value: u32, fa_value: f64) -> u32 {
    compute_segments(0.0, fn_value, fa_value, 0.0)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

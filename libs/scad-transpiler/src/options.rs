//! Transpiler options.

use serde::{Deserialize, Serialize};

/// Options recognized by [`crate::transpile`].
///
/// ```rust
/// use scad_transpiler::TranspileOptions;
///
/// let options: TranspileOptions = serde_json::from_str(r#"{ "defaultFn": 32 }"#).unwrap();
/// assert_eq!(options.default_fn, Some(32));
/// assert_eq!(TranspileOptions::default().default_fn, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranspileOptions {
    /// Segment count applied when the source sets no `$fn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fn: Option<u32>,
}

impl TranspileOptions {
    /// Options with a default segment count.
    pub fn with_default_fn(default_fn: u32) -> Self {
        Self {
            default_fn: Some(default_fn),
        }
    }
}

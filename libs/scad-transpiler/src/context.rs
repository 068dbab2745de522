//! # Resolution Context
//!
//! `$fn`, `$fa` and `$fs` assignments in a block apply to the statements
//! that follow them in that block, including their descendants. Each block
//! works on its own copy of the enclosing scope, so an assignment never
//! leaks to siblings of the block or to the parent.
//!
//! ## Segment Precedence
//!
//! 1. `$fn` given on the call itself
//! 2. `$fn` assigned in an enclosing block
//! 3. [`TranspileOptions::default_fn`]
//! 4. Computed from `$fa`/`$fs` (call overrides first, then the scope)
//!
//! A `$fn` of 0 at any level selects step 4 explicitly. The result is always
//! clamped to the configured segment range.

use crate::diagnostic::Diagnostic;
use crate::error::TranspileError;
use crate::options::TranspileOptions;
use config::constants::{clamp_segments, compute_revolve_segments, compute_segments, DEFAULT_FA, DEFAULT_FS};
use scad_ast::{Position, Resolution, SpecialValue, SpecialVar, SpecialVarAssign};

/// Resolution values visible at one point of a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolutionScope {
    fn_: Option<u32>,
    fa: f64,
    fs: f64,
}

impl Default for ResolutionScope {
    fn default() -> Self {
        Self {
            fn_: None,
            fa: DEFAULT_FA,
            fs: DEFAULT_FS,
        }
    }
}

impl ResolutionScope {
    /// Applies a `$fn = ...;` style assignment to the rest of the block.
    pub(crate) fn assign(&mut self, assign: &SpecialVarAssign) -> Result<(), TranspileError> {
        let name = assign.name.name();
        let value = match &assign.value {
            SpecialValue::Number(n) => *n,
            SpecialValue::Vector(_) => {
                return Err(TranspileError::at(
                    name,
                    assign.position,
                    format!("{name} must be a number, not a vector"),
                ));
            }
        };

        match assign.name {
            SpecialVar::Fn => {
                // $fn below 1 falls back to $fa/$fs, as in OpenSCAD.
                self.fn_ = Some(if value < 1.0 { 0 } else { value.min(u32::MAX as f64) as u32 });
            }
            SpecialVar::Fa => self.fa = positive(name, value, assign.position)?,
            SpecialVar::Fs => self.fs = positive(name, value, assign.position)?,
        }
        Ok(())
    }

    /// Segment count for a curved construct of the given radius.
    pub(crate) fn segments(
        &self,
        local: &Resolution,
        radius: f64,
        options: &TranspileOptions,
        site: Site<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<u32, TranspileError> {
        let (fa, fs) = self.angle_and_size(local, site)?;
        let fn_ = self.explicit_fn(local, options);
        warn_if_clamped(fn_, site, diagnostics);
        Ok(compute_segments(radius, fn_, fa, fs))
    }

    /// Segment count for a full revolution, where only `$fn` and `$fa` apply.
    pub(crate) fn revolve_segments(
        &self,
        local: &Resolution,
        options: &TranspileOptions,
        site: Site<'_>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<u32, TranspileError> {
        let (fa, _) = self.angle_and_size(local, site)?;
        let fn_ = self.explicit_fn(local, options);
        warn_if_clamped(fn_, site, diagnostics);
        Ok(compute_revolve_segments(fn_, fa))
    }

    fn explicit_fn(&self, local: &Resolution, options: &TranspileOptions) -> u32 {
        local.fn_.or(self.fn_).or(options.default_fn).unwrap_or(0)
    }

    fn angle_and_size(&self, local: &Resolution, site: Site<'_>) -> Result<(f64, f64), TranspileError> {
        let fa = match local.fa {
            Some(fa) => positive("$fa", fa, site.position).map_err(|e| site.relabel(e))?,
            None => self.fa,
        };
        let fs = match local.fs {
            Some(fs) => positive("$fs", fs, site.position).map_err(|e| site.relabel(e))?,
            None => self.fs,
        };
        Ok((fa, fs))
    }
}

/// Construct and position a segment count is computed for.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Site<'a> {
    pub construct: &'a str,
    pub position: Position,
}

impl Site<'_> {
    fn relabel(&self, mut err: TranspileError) -> TranspileError {
        err.construct = Some(self.construct.to_string());
        err
    }
}

fn positive(name: &str, value: f64, position: Position) -> Result<f64, TranspileError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(TranspileError::at(
            name,
            position,
            format!("{name} must be greater than 0, found {}", crate::emit::number(value)),
        ))
    }
}

fn warn_if_clamped(fn_: u32, site: Site<'_>, diagnostics: &mut Vec<Diagnostic>) {
    if fn_ == 0 {
        return;
    }
    let clamped = clamp_segments(fn_);
    if clamped != fn_ {
        diagnostics.push(
            Diagnostic::warning(
                format!("$fn = {fn_} on {} is clamped to {clamped} segments", site.construct),
                site.position,
            )
            .with_hint("use a $fn between 16 and 128"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};

    fn site() -> Site<'static> {
        Site {
            construct: "sphere",
            position: Position::new(1, 1),
        }
    }

    fn assign(name: SpecialVar, value: SpecialValue) -> SpecialVarAssign {
        SpecialVarAssign {
            name,
            value,
            position: Position::new(1, 1),
        }
    }

    fn segments(scope: &ResolutionScope, local: Resolution, options: TranspileOptions) -> (u32, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let n = scope.segments(&local, 10.0, &options, site(), &mut diagnostics).unwrap();
        (n, diagnostics)
    }

    #[test]
    fn test_local_fn_wins_over_scope_and_options() {
        let mut scope = ResolutionScope::default();
        scope.assign(&assign(SpecialVar::Fn, SpecialValue::Number(40.0))).unwrap();
        let local = Resolution { fn_: Some(24), ..Resolution::default() };
        assert_eq!(segments(&scope, local, TranspileOptions::with_default_fn(64)).0, 24);
    }

    #[test]
    fn test_scope_fn_wins_over_options() {
        let mut scope = ResolutionScope::default();
        scope.assign(&assign(SpecialVar::Fn, SpecialValue::Number(40.0))).unwrap();
        assert_eq!(segments(&scope, Resolution::default(), TranspileOptions::with_default_fn(64)).0, 40);
    }

    #[test]
    fn test_options_default_fn_applies_last() {
        let scope = ResolutionScope::default();
        assert_eq!(segments(&scope, Resolution::default(), TranspileOptions::with_default_fn(64)).0, 64);
    }

    #[test]
    fn test_zero_fn_computes_from_fa_fs() {
        let mut scope = ResolutionScope::default();
        scope.assign(&assign(SpecialVar::Fn, SpecialValue::Number(0.0))).unwrap();
        scope.assign(&assign(SpecialVar::Fa, SpecialValue::Number(1.0))).unwrap();
        scope.assign(&assign(SpecialVar::Fs, SpecialValue::Number(0.5))).unwrap();
        // min(360 / 1, 2π·10 / 0.5) = 126 segments
        assert_eq!(segments(&scope, Resolution::default(), TranspileOptions::with_default_fn(64)).0, 126);
    }

    #[test]
    fn test_clamping_warns() {
        let scope = ResolutionScope::default();
        let local = Resolution { fn_: Some(500), ..Resolution::default() };
        let (n, diagnostics) = segments(&scope, local, TranspileOptions::default());
        assert_eq!(n, MAX_SEGMENTS);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("clamped to 128"));

        let local = Resolution { fn_: Some(3), ..Resolution::default() };
        assert_eq!(segments(&scope, local, TranspileOptions::default()).0, MIN_SEGMENTS);
    }

    #[test]
    fn test_vector_fn_is_rejected() {
        let mut scope = ResolutionScope::default();
        let err = scope
            .assign(&assign(SpecialVar::Fn, SpecialValue::Vector(vec![1.0, 2.0])))
            .unwrap_err();
        assert_eq!(err.message, "$fn must be a number, not a vector");
        assert_eq!(err.construct.as_deref(), Some("$fn"));
    }

    #[test]
    fn test_non_positive_fs_is_rejected() {
        let mut scope = ResolutionScope::default();
        let err = scope.assign(&assign(SpecialVar::Fs, SpecialValue::Number(0.0))).unwrap_err();
        assert!(err.message.contains("$fs must be greater than 0"));
    }

    #[test]
    fn test_revolve_segments_ignore_fs() {
        let scope = ResolutionScope::default();
        let mut diagnostics = Vec::new();
        let n = scope
            .revolve_segments(&Resolution::default(), &TranspileOptions::default(), site(), &mut diagnostics)
            .unwrap();
        assert_eq!(n, 30);
    }
}

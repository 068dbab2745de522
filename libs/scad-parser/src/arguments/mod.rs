//! # Argument Mapping
//!
//! Calls are first collected into a generic [`Arguments`] record together
//! with the source site of every value. Per-construct mapping then turns the
//! record into the construct's typed shape, converting diameters to radii
//! and rejecting unknown names, surplus positionals and wrongly typed values.

mod extrudes;
mod primitives;
mod shared;
mod transforms;

pub(crate) use extrudes::extrude;
pub(crate) use primitives::primitive;
pub(crate) use transforms::transform;

use crate::error::ParseError;
use crate::grammar;
use crate::lexer::{Token, TokenKind};
use scad_ast::{Arguments, Position, Resolution, Value};
use std::collections::BTreeMap;

// =============================================================================
// ARGUMENT LIST
// =============================================================================

/// Where an argument came from.
#[derive(Debug, Clone)]
struct Site {
    position: Position,
    lexeme: String,
}

impl Site {
    fn of(token: &Token) -> Self {
        Self {
            position: token.position(),
            lexeme: token.lexeme().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct NamedSite {
    name: Site,
    value: Site,
}

/// Arguments of one call in source form.
#[derive(Debug, Clone)]
pub(crate) struct ArgumentList {
    /// The call's keyword token.
    keyword: TokenKind,
    call: Site,
    record: Arguments,
    positional_sites: Vec<Site>,
    named_sites: BTreeMap<String, NamedSite>,
}

impl ArgumentList {
    pub(crate) fn new(keyword: &Token) -> Self {
        Self {
            keyword: keyword.kind,
            call: Site::of(keyword),
            record: Arguments::default(),
            positional_sites: Vec::new(),
            named_sites: BTreeMap::new(),
        }
    }

    pub(crate) fn push_positional(&mut self, first: &Token, value: Value) {
        self.record.positional.push(value);
        self.positional_sites.push(Site::of(first));
    }

    /// Add a named argument; a repeated name is an error.
    pub(crate) fn push_named(&mut self, name: &Token, first: &Token, value: Value) -> Result<(), ParseError> {
        if self.record.named.contains_key(&name.value) {
            return Err(ParseError::unsupported(
                name,
                format!("Argument '{}' is given more than once", name.value),
            ));
        }
        self.record.named.insert(name.value.clone(), value);
        self.named_sites.insert(
            name.value.clone(),
            NamedSite {
                name: Site::of(name),
                value: Site::of(first),
            },
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.keyword.display()
    }
}

// =============================================================================
// SIGNATURE
// =============================================================================

/// Accepted parameters of a construct.
pub(crate) struct Signature {
    /// Parameters that may be given by position, in order.
    pub positional: &'static [&'static str],
    /// Every accepted name, positional ones included.
    pub named: &'static [&'static str],
}

// =============================================================================
// READER
// =============================================================================

/// Typed access to a validated argument list.
pub(crate) struct Reader<'a> {
    args: &'a ArgumentList,
    signature: &'a Signature,
}

impl<'a> Reader<'a> {
    /// Validate `args` against `signature`.
    ///
    /// Surplus positional arguments and unknown names are errors.
    pub(crate) fn new(args: &'a ArgumentList, signature: &'a Signature) -> Result<Self, ParseError> {
        if let Some(extra) = args.positional_sites.get(signature.positional.len()) {
            let message = match signature.positional.len() {
                0 => format!("{} takes no positional arguments", args.name()),
                1 => format!("{} takes at most 1 positional argument", args.name()),
                n => format!("{} takes at most {} positional arguments", args.name(), n),
            };
            return Err(ParseError::new(extra.position, &extra.lexeme, &[grammar::CLOSE_PAREN], message));
        }

        for (name, site) in &args.named_sites {
            if !signature.named.contains(&name.as_str()) {
                let message = if signature.named.is_empty() {
                    format!("{} takes no arguments, found '{}'", args.name(), name)
                } else {
                    format!("Unknown argument '{}' for {}", name, args.name())
                };
                return Err(ParseError::new(site.name.position, &site.name.lexeme, signature.named, message));
            }
        }

        Ok(Self { args, signature })
    }

    /// Name of the construct being mapped.
    pub(crate) fn construct(&self) -> &'static str {
        self.args.name()
    }

    /// Whether `name` was supplied, by name or position.
    pub(crate) fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// A named argument takes precedence over the positional slot of the same name.
    fn lookup(&self, name: &str) -> Option<(&'a Value, &'a Site)> {
        if let (Some(value), Some(site)) = (self.args.record.get(name), self.args.named_sites.get(name)) {
            return Some((value, &site.value));
        }
        let index = self.signature.positional.iter().position(|p| *p == name)?;
        let value = self.args.record.positional(index)?;
        let site = self.args.positional_sites.get(index)?;
        Some((value, site))
    }

    /// Convert `name` with `convert`; a failed conversion reports `must_be`.
    pub(crate) fn get<T>(
        &self,
        name: &str,
        expected: &[&str],
        must_be: &str,
        convert: impl FnOnce(&Value) -> Option<T>,
    ) -> Result<Option<T>, ParseError> {
        let Some((value, site)) = self.lookup(name) else {
            return Ok(None);
        };
        match convert(value) {
            Some(converted) => Ok(Some(converted)),
            None => Err(ParseError::new(
                site.position,
                &site.lexeme,
                expected,
                format!("{} {} must be {}, found {}", self.construct(), name, must_be, value.type_name()),
            )),
        }
    }

    pub(crate) fn number(&self, name: &str) -> Result<Option<f64>, ParseError> {
        self.get(name, &[grammar::NUMBER], "a number", shared::finite)
    }

    pub(crate) fn boolean(&self, name: &str) -> Result<Option<bool>, ParseError> {
        self.get(name, &[grammar::BOOLEAN], "a boolean", Value::as_bool)
    }

    pub(crate) fn string(&self, name: &str) -> Result<Option<String>, ParseError> {
        self.get(name, &[grammar::STRING], "a string", |v| v.as_str().map(str::to_string))
    }

    /// Non-negative whole count such as `$fn` or `slices`.
    pub(crate) fn count(&self, name: &str) -> Result<Option<u32>, ParseError> {
        self.get(name, &[grammar::NUMBER], "a non-negative number", shared::count)
    }

    /// Radius from `radius`, or half of `diameter`. The radius wins when both are given.
    pub(crate) fn radius(&self, radius: &str, diameter: &str) -> Result<Option<f64>, ParseError> {
        match self.number(radius)? {
            Some(r) => Ok(Some(r)),
            None => Ok(self.number(diameter)?.map(|d| d / 2.0)),
        }
    }

    /// `$fn`, `$fa` and `$fs` overrides.
    pub(crate) fn resolution(&self) -> Result<Resolution, ParseError> {
        Ok(Resolution {
            fn_: self.count("$fn")?,
            fa: self.number("$fa")?,
            fs: self.number("$fs")?,
        })
    }

    /// Error anchored at the call itself, for argument combinations.
    pub(crate) fn call_error(&self, expected: &[&str], message: impl Into<String>) -> ParseError {
        ParseError::new(self.args.call.position, &self.args.call.lexeme, expected, message)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::parse;

    fn parse_err(source: &str) -> crate::ParseError {
        parse(source).unwrap_err().as_parse().cloned().unwrap()
    }

    #[test]
    fn test_duplicate_named_argument() {
        let err = parse_err("sphere(r = 1, r = 2);");
        assert!(err.message.contains("more than once"));
        assert_eq!((err.line, err.column), (1, 15));
    }

    #[test]
    fn test_unknown_named_argument_lists_accepted_names() {
        let err = parse_err("cube(size = 1, centre = true);");
        assert_eq!(err.message, "Unknown argument 'centre' for cube");
        assert_eq!(err.found, "centre");
        assert_eq!(err.expected, vec!["size", "center"]);
    }

    #[test]
    fn test_surplus_positional_argument() {
        let err = parse_err("cube(1, true, 3);");
        assert_eq!(err.message, "cube takes at most 2 positional arguments");
        assert_eq!(err.found, "3");
    }

    #[test]
    fn test_wrong_type_reports_value_site() {
        let err = parse_err("cube(1, center = \"yes\");");
        assert_eq!(err.message, "cube center must be a boolean, found string");
        assert_eq!(err.column, 18);
        assert_eq!(err.expected, vec!["boolean"]);
    }

    #[test]
    fn test_hull_takes_no_arguments() {
        let err = parse_err("hull(r = 1) cube(1);");
        assert_eq!(err.message, "hull takes no arguments, found 'r'");
    }
}

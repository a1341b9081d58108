//! Annotation parser
//!
//! An annotation is a list of clauses separated by `;`. Each clause is a rule
//! name, optionally followed by `:` and a raw argument. Rule names are not
//! checked here; the checkers ignore names they do not know.

use super::config::ValidatorConfig;

/// One `rule:arg` clause of an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'a> {
    /// Clause exactly as written, separator included
    pub text: &'a str,
    pub rule: &'a str,
    pub arg: &'a str,
}

impl<'a> Clause<'a> {
    pub fn new(text: &'a str, rule: &'a str, arg: &'a str) -> Self {
        Self { text, rule, arg }
    }
}

/// Parses an annotation with the default separators.
pub fn parse(annotation: &str) -> Vec<Clause<'_>> {
    parse_with(annotation, &ValidatorConfig::default())
}

/// Parses an annotation with the separators from `config`.
///
/// Only the first argument separator of a clause splits; the rest stays in
/// the argument.
pub fn parse_with<'a>(annotation: &'a str, config: &ValidatorConfig) -> Vec<Clause<'a>> {
    annotation
        .split(config.clause_separator)
        .map(|clause| match clause.split_once(config.argument_separator) {
            Some((rule, arg)) => Clause::new(clause, rule, arg),
            None => Clause::new(clause, clause, ""),
        })
        .collect()
}

/// Parses an integer rule argument. Accepts an optional sign; no whitespace.
pub fn parse_int(arg: &str) -> Option<i64> {
    arg.parse().ok()
}

/// Splits an `in` argument into its elements.
///
/// An empty argument still yields one empty element.
pub fn split_list<'a>(arg: &'a str, config: &ValidatorConfig) -> Vec<&'a str> {
    arg.split(config.list_separator).collect()
}

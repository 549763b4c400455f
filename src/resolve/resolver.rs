//! Resolver trait and request/response types

use super::errors::ResolveResult;

/// A request for the value of one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest<'a> {
    /// Variable the engine needs a value for.
    pub variable: &'a str,
    /// Catalog candidates, sorted, when the variable has any.
    ///
    /// `Some` means the resolver should offer an enumerated choice with an
    /// explicit "skip" entry after the last value; `None` means free text
    /// where an empty answer is a skip.
    pub candidates: Option<&'a [String]>,
}

/// What the operator (or script) answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A value was chosen or entered; the engine binds it verbatim.
    Supplied(String),
    /// Explicit decline; the variable joins the skipped set.
    Declined,
    /// Unusable answer (out-of-range choice, non-numeric input). No
    /// progress, but the variable stays eligible for a later prompt.
    Invalid,
}

/// Obtains values for missing variables.
///
/// Implementations own all interaction concerns (prompt wording, menu
/// numbering, input validation); the engine only interprets the returned
/// `Resolution`.
pub trait FactResolver {
    /// Resolve one variable.
    fn resolve(&mut self, request: &ResolveRequest<'_>) -> ResolveResult<Resolution>;
}

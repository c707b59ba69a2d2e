//! The compile-time error type for selector parsing.
//!
//! Matching never fails: every error this crate can produce is detected
//! while compiling the selector text, and is surfaced to the caller with
//! the offending text or byte offset. Nothing is silently recovered or
//! defaulted.

use thiserror::Error;

/// A selector string did not conform to the grammar.
///
/// Offsets are byte offsets into the selector string passed to
/// [`compile`](crate::compile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The input ended where a selector was expected.
    #[error("expected a selector, found end of input")]
    EmptySelector,

    /// An identifier was expected (type name, id, class, attribute key,
    /// pseudo-class name, or unquoted attribute value) but not found.
    #[error("expected an identifier at offset {offset}")]
    ExpectedIdentifier {
        /// Byte offset where the identifier should have started.
        offset: usize,
    },

    /// A quoted attribute value was never closed.
    #[error("unterminated quoted string starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// An attribute selector was never closed with `]`.
    #[error("attribute selector starting at offset {offset} is missing its closing ']'")]
    UnterminatedAttribute {
        /// Byte offset of the opening `[`.
        offset: usize,
    },

    /// Inside `[...]`, something other than `]` or one of the operators
    /// `=`, `~=`, `|=`, `^=`, `$=`, `*=` followed the attribute key.
    #[error("expected ']' or an attribute operator at offset {offset}")]
    ExpectedAttributeOperator {
        /// Byte offset of the unexpected character.
        offset: usize,
    },

    /// A pseudo-class name outside the supported set
    /// (`not`, `nth-child`, `nth-last-child`).
    #[error("unknown pseudo-class :{name}")]
    UnknownPseudoClass {
        /// The pseudo-class name as written (lowercased).
        name: String,
    },

    /// A functional pseudo-class was missing its `(` or `)`.
    #[error("expected '{expected}' at offset {offset}")]
    ExpectedParenthesis {
        /// The parenthesis that was expected.
        expected: char,
        /// Byte offset where it should have appeared.
        offset: usize,
    },

    /// The argument of `nth-child`/`nth-last-child` was not a valid
    /// `an+b` formula (`odd`, `even`, an integer, or `[sign]N?n[sign]M`).
    #[error("invalid an+b formula at offset {offset}")]
    InvalidFormula {
        /// Byte offset where the formula starts or went wrong.
        offset: usize,
    },

    /// A complete simple selector sequence was parsed but input remained.
    /// Trailing garbage is never ignored: combinators and selector lists
    /// are outside this crate's grammar and land here.
    #[error("parsing {selector:?}: {remaining} bytes left over")]
    TrailingInput {
        /// The full selector text as passed to `compile`.
        selector: String,
        /// Number of unconsumed trailing bytes.
        remaining: usize,
    },
}

//! Recursive-descent parser for simple selector sequences.
//!
//! [§ 4 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax)
//!
//! The grammar recognized here is one *simple selector sequence*:
//!
//! ```text
//! simple_selector_sequence := (type_selector | '*')? qualifier*
//! qualifier := '#' ident              -- id
//!            | '.' ident              -- class
//!            | '[' attribute_expr ']' -- attribute
//!            | ':' pseudo_class       -- not / nth-child / nth-last-child
//! ```
//!
//! The parser is an explicit cursor (source string plus byte offset)
//! threaded through the parse functions. Each function either fully
//! consumes what it recognizes, advancing the cursor, or fails with a
//! [`SyntaxError`]; nothing backtracks past a parsed fragment. Every
//! recognized fragment is compiled to a [`Predicate`] on the spot and
//! intersected left-to-right with the fragments before it.

use crate::SyntaxError;
use crate::nth::NthFormula;
use crate::predicate::{AttributeSelector, Predicate};

/// Parse a full selector string into one compiled predicate.
///
/// Requires the entire input to be consumed: anything left after the
/// simple selector sequence (combinators, selector lists, stray text)
/// is a [`SyntaxError::TrailingInput`], never a best-effort prefix match.
pub(crate) fn parse(selector: &str) -> Result<Predicate, SyntaxError> {
    let mut parser = Parser::new(selector);
    let predicate = parser.parse_simple_selector_sequence()?;

    if parser.pos < selector.len() {
        return Err(SyntaxError::TrailingInput {
            selector: selector.to_string(),
            remaining: selector.len() - parser.pos,
        });
    }

    Ok(predicate)
}

/// The parser cursor: source string plus current byte offset.
///
/// Advanced monotonically by each parse step; never global or shared, so
/// individual grammar productions stay re-entrant and testable.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Parser { input, pos: 0 }
    }

    /// The character under the cursor, if any.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advance the cursor past the character under it.
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume `expected` if it is under the cursor.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    /// `simple_selector_sequence := (type_selector | '*')? qualifier*`
    ///
    /// A leading type selector (or explicit `*`) seeds the result; each
    /// qualifier's predicate is intersected with it left-to-right. A
    /// sequence with qualifiers only (`.t1`, `#x`, `[href]`, `:not(p)`)
    /// implicitly starts from the match-everything predicate.
    fn parse_simple_selector_sequence(&mut self) -> Result<Predicate, SyntaxError> {
        let mut result: Option<Predicate> = None;

        match self.peek() {
            None => return Err(SyntaxError::EmptySelector),
            Some('*') => {
                self.advance();
                result = Some(Predicate::Universal);
            }
            // A qualifier-first sequence; the loop below picks it up.
            Some('#' | '.' | '[' | ':') => {}
            Some(_) => {
                let tag = self.parse_identifier()?;
                result = Some(Predicate::Type(tag.to_ascii_lowercase()));
            }
        }

        loop {
            let qualifier = match self.peek() {
                Some('#') => {
                    self.advance();
                    Predicate::id(self.parse_identifier()?)
                }
                Some('.') => {
                    self.advance();
                    Predicate::class(self.parse_identifier()?)
                }
                Some('[') => {
                    let open = self.pos;
                    self.advance();
                    self.parse_attribute_selector(open)?
                }
                Some(':') => {
                    self.advance();
                    self.parse_pseudo_class()?
                }
                _ => break,
            };

            result = Some(match result {
                Some(previous) => previous.and(qualifier),
                None => qualifier,
            });
        }

        // Unreachable with the entry dispatch above, but a bare sequence
        // still means "match everything".
        Ok(result.unwrap_or(Predicate::Universal))
    }

    /// [§ 4.2 CSS identifiers](https://www.w3.org/TR/css-syntax-3/#ident-token-diagram)
    ///
    /// First char: ASCII letter, `_`, `-`, or non-ASCII; continuation
    /// also allows digits.
    fn parse_identifier(&mut self) -> Result<String, SyntaxError> {
        let start = self.pos;

        match self.peek() {
            Some(c) if is_ident_start_char(c) || c == '-' => self.advance(),
            _ => {
                return Err(SyntaxError::ExpectedIdentifier { offset: self.pos });
            }
        }

        while self.peek().is_some_and(is_ident_char) {
            self.advance();
        }

        Ok(self.input[start..self.pos].to_string())
    }

    /// A single- or double-quoted string; the opening quote is under the
    /// cursor. No escape processing — the closing quote ends the string.
    fn parse_string(&mut self, quote: char) -> Result<String, SyntaxError> {
        let open = self.pos;
        self.advance();
        let content_start = self.pos;

        while let Some(c) = self.peek() {
            if c == quote {
                let value = self.input[content_start..self.pos].to_string();
                self.advance();
                return Ok(value);
            }
            self.advance();
        }

        Err(SyntaxError::UnterminatedString { offset: open })
    }

    /// An attribute value: either a quoted string or a bare token of
    /// identifier characters (dots allowed, for values like `a.b.c`).
    fn parse_attribute_value(&mut self) -> Result<String, SyntaxError> {
        self.skip_whitespace();

        if let Some(quote @ ('"' | '\'')) = self.peek() {
            return self.parse_string(quote);
        }

        let start = self.pos;
        while self.peek().is_some_and(|c| is_ident_char(c) || c == '.') {
            self.advance();
        }

        if self.pos == start {
            return Err(SyntaxError::ExpectedIdentifier { offset: start });
        }

        Ok(self.input[start..self.pos].to_string())
    }

    /// `attribute_expr := key (('=' | '~=' | '|=' | '^=' | '$=' | '*=') value)?`
    ///
    /// The opening `[` (at byte offset `open`) is already consumed.
    /// ASCII whitespace is tolerated around the key, the operator, and
    /// the value. The key is folded to lowercase at compile time.
    fn parse_attribute_selector(&mut self, open: usize) -> Result<Predicate, SyntaxError> {
        self.skip_whitespace();
        let key = self.parse_identifier()?.to_ascii_lowercase();
        self.skip_whitespace();

        let selector = match self.peek() {
            Some(']') => {
                self.advance();
                return Ok(Predicate::Attribute(AttributeSelector::Exists(key)));
            }
            Some('=') => {
                self.advance();
                AttributeSelector::Equals(key, self.parse_attribute_value()?)
            }
            Some(op @ ('~' | '|' | '^' | '$' | '*')) => {
                self.advance();
                if !self.eat('=') {
                    return Err(SyntaxError::ExpectedAttributeOperator { offset: self.pos });
                }
                let value = self.parse_attribute_value()?;
                match op {
                    '~' => AttributeSelector::Includes(key, value),
                    '|' => AttributeSelector::DashMatch(key, value),
                    '^' => AttributeSelector::Prefix(key, value),
                    '$' => AttributeSelector::Suffix(key, value),
                    _ => AttributeSelector::Substring(key, value),
                }
            }
            Some(_) => {
                return Err(SyntaxError::ExpectedAttributeOperator { offset: self.pos });
            }
            None => return Err(SyntaxError::UnterminatedAttribute { offset: open }),
        };

        self.skip_whitespace();
        if !self.eat(']') {
            return Err(SyntaxError::UnterminatedAttribute { offset: open });
        }

        Ok(Predicate::Attribute(selector))
    }

    /// `pseudo_class := ('not' | 'nth-child' | 'nth-last-child') '(' ... ')'`
    ///
    /// The `:` is already consumed. Names are matched
    /// ASCII-case-insensitively; anything outside the supported set is a
    /// [`SyntaxError::UnknownPseudoClass`] rather than a silent no-match.
    fn parse_pseudo_class(&mut self) -> Result<Predicate, SyntaxError> {
        let name = self.parse_identifier()?.to_ascii_lowercase();

        let from_end = match name.as_str() {
            "not" => {
                self.expect_open_paren()?;
                let inner = self.parse_simple_selector_sequence()?;
                self.expect_close_paren()?;
                return Ok(Predicate::Not(Box::new(inner)));
            }
            "nth-child" => false,
            "nth-last-child" => true,
            _ => return Err(SyntaxError::UnknownPseudoClass { name }),
        };

        self.expect_open_paren()?;
        let formula = self.parse_formula()?;
        self.expect_close_paren()?;

        Ok(Predicate::NthChild { formula, from_end })
    }

    /// Consume `(` plus any whitespace after it.
    fn expect_open_paren(&mut self) -> Result<(), SyntaxError> {
        if !self.eat('(') {
            return Err(SyntaxError::ExpectedParenthesis {
                expected: '(',
                offset: self.pos,
            });
        }
        self.skip_whitespace();
        Ok(())
    }

    /// Consume any whitespace then `)`.
    fn expect_close_paren(&mut self) -> Result<(), SyntaxError> {
        self.skip_whitespace();
        if !self.eat(')') {
            return Err(SyntaxError::ExpectedParenthesis {
                expected: ')',
                offset: self.pos,
            });
        }
        Ok(())
    }

    /// [§ 6 The An+B microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)
    ///
    /// `formula := 'odd' | 'even' | [sign] INT | [sign] INT? ('n'|'N') ([sign] INT)?`
    ///
    /// An absent magnitude before `n` means 1 (`n` ≡ `1n`, `-n` ≡ `-1n`);
    /// an absent trailing term means an offset of 0.
    fn parse_formula(&mut self) -> Result<NthFormula, SyntaxError> {
        let start = self.pos;

        let mut sign = 1;
        let signed = match self.peek() {
            Some('+') => {
                self.advance();
                true
            }
            Some('-') => {
                self.advance();
                sign = -1;
                true
            }
            _ => false,
        };

        match self.peek() {
            Some(c) if c.is_ascii_digit() => {
                let magnitude = self.parse_integer()?;
                if self.eat('n') || self.eat('N') {
                    // `an+b` with explicit a
                    let offset = self.parse_formula_offset()?;
                    Ok(NthFormula::new(sign * magnitude, offset))
                } else {
                    // bare integer: the single fixed position b
                    Ok(NthFormula::new(0, sign * magnitude))
                }
            }
            Some('n' | 'N') => {
                self.advance();
                let offset = self.parse_formula_offset()?;
                Ok(NthFormula::new(sign, offset))
            }
            Some(c) if !signed && is_ident_start_char(c) => {
                let keyword = self.parse_identifier()?.to_ascii_lowercase();
                match keyword.as_str() {
                    "odd" => Ok(NthFormula::ODD),
                    "even" => Ok(NthFormula::EVEN),
                    _ => Err(SyntaxError::InvalidFormula { offset: start }),
                }
            }
            _ => Err(SyntaxError::InvalidFormula { offset: start }),
        }
    }

    /// The optional `[sign] INT` tail after `n`. A sign with no digits
    /// following it is malformed.
    fn parse_formula_offset(&mut self) -> Result<i32, SyntaxError> {
        let sign = match self.peek() {
            Some('+') => 1,
            Some('-') => -1,
            _ => return Ok(0),
        };
        self.advance();

        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(SyntaxError::InvalidFormula { offset: self.pos });
        }

        Ok(sign * self.parse_integer()?)
    }

    /// A run of ASCII digits as an `i32`; overflow is malformed.
    fn parse_integer(&mut self) -> Result<i32, SyntaxError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        self.input[start..self.pos]
            .parse()
            .map_err(|_| SyntaxError::InvalidFormula { offset: start })
    }
}

/// Check if a character can start an identifier.
/// [§ 4.3.10 ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
const fn is_ident_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Check if a character can continue an identifier.
/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
const fn is_ident_char(c: char) -> bool {
    is_ident_start_char(c) || c.is_ascii_digit() || c == '-'
}

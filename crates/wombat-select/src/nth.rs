//! The `an+b` formula behind `:nth-child` and `:nth-last-child`.
//!
//! [§ 6 The An+B microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)
//!
//! "The An+B notation... represents an integer step and offset, and
//! matches the An+Bth elements in a list, for every positive integer or
//! zero value of n."

/// The `(a, b)` pair from an `an+b` positional expression.
///
/// Denotes the set of 1-based positions `{a·n + b : n ≥ 0}`; the special
/// case `a = 0` denotes the single fixed position `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthFormula {
    /// The step `a`: the spacing between selected positions. May be
    /// negative (`-n+2` selects positions 2, 1) or zero (fixed position).
    pub step: i32,
    /// The offset `b`: the first selected position when `n = 0`.
    pub offset: i32,
}

impl NthFormula {
    /// The `odd` keyword: positions 1, 3, 5, ... (`2n+1`).
    pub const ODD: NthFormula = NthFormula { step: 2, offset: 1 };

    /// The `even` keyword: positions 2, 4, 6, ... (`2n`).
    pub const EVEN: NthFormula = NthFormula { step: 2, offset: 0 };

    /// Create a formula from its step (`a`) and offset (`b`).
    #[must_use]
    pub const fn new(step: i32, offset: i32) -> Self {
        NthFormula { step, offset }
    }

    /// Whether a 1-based sibling position is selected by this formula.
    ///
    /// [§ 6](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)
    /// "matches the An+Bth elements... for every positive integer or zero
    /// value of n."
    ///
    /// With `i = position - b`: if `a = 0`, the position matches iff
    /// `i == 0`; otherwise it matches iff `i` is evenly divisible by `a`
    /// and the quotient `n = i / a` is non-negative. The quotient sign
    /// check is what rejects positions that would need a negative `n`
    /// while still allowing a negative step (`-n+2` selects positions
    /// 1 and 2 only).
    #[must_use]
    pub fn matches_position(self, position: usize) -> bool {
        let Ok(position) = i64::try_from(position) else {
            return false;
        };
        let step = i64::from(self.step);
        let i = position - i64::from(self.offset);

        if step == 0 {
            return i == 0;
        }

        // Truncating division: i / step rounds toward zero, so the sign
        // of the quotient is meaningful even when i and step differ in sign.
        i % step == 0 && i / step >= 0
    }
}

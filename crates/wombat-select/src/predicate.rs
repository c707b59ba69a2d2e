//! Compiled matching predicates.
//!
//! A selector compiles to a tree of [`Predicate`] values: one leaf per
//! simple-selector component, combined with [`Predicate::And`]. A
//! predicate is a pure boolean test over one node — it closes over
//! compile-time constants only, is never mutated after construction, and
//! is safe to apply to unboundedly many nodes and trees.

use wombat_dom::{DomTree, ElementData, NodeId};

use crate::nth::NthFormula;

/// A compiled matching predicate: a pure boolean test over one node.
///
/// [§ 3.1 Structure of a Selector](https://www.w3.org/TR/selectors-4/#structure)
///
/// One variant per simple-selector kind, plus the two combining forms
/// (negation and intersection). The closed enum keeps predicates
/// inspectable and printable while [`Predicate::matches`] provides the
/// single dispatch point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// `*` — matches every node, including the document root and
    /// non-element nodes.
    Universal,

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// Matches an element whose tag name equals the stored name,
    /// ASCII-case-insensitively. The name is folded to lowercase at
    /// compile time.
    Type(String),

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// Matches an element by one of its own attribute pairs; never
    /// matches a non-element node. The id (`#x`) and class (`.x`)
    /// shorthands lower to attribute predicates on `id` and `class`.
    Attribute(AttributeSelector),

    /// [§ 4.3 The negation pseudo-class](https://www.w3.org/TR/selectors-4/#negation)
    /// `:not(...)` — logical NOT of the inner predicate.
    Not(Box<Predicate>),

    /// Intersection of two predicates, built left-to-right from the
    /// components of a simple selector sequence. Short-circuits: the
    /// left predicate is evaluated first, the right only if it held.
    And(Box<Predicate>, Box<Predicate>),

    /// [§ 4.14 :nth-child / :nth-last-child](https://www.w3.org/TR/selectors-4/#child-index)
    /// Positional test against the node's 1-based index among ALL of its
    /// parent's children (counted from the end when `from_end` is set).
    NthChild {
        /// The `an+b` formula to test the position against.
        formula: NthFormula,
        /// Count positions from the last child (`:nth-last-child`).
        from_end: bool,
    },
}

impl Predicate {
    /// The `#id` shorthand: an attribute-equals predicate on `id`.
    ///
    /// [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors)
    #[must_use]
    pub fn id(value: String) -> Predicate {
        Predicate::Attribute(AttributeSelector::Equals("id".to_string(), value))
    }

    /// The `.class` shorthand: an attribute-includes predicate on `class`.
    ///
    /// [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html)
    #[must_use]
    pub fn class(name: String) -> Predicate {
        Predicate::Attribute(AttributeSelector::Includes("class".to_string(), name))
    }

    /// Intersect this predicate with another (left-to-right order kept).
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Evaluate this predicate against one node of the tree.
    ///
    /// Pure and infallible: matching never mutates the tree and never
    /// errors (everything that can go wrong is caught while compiling
    /// the selector text).
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        match self {
            Predicate::Universal => true,
            Predicate::Type(tag) => tree
                .as_element(node)
                .is_some_and(|element| element.tag_name.eq_ignore_ascii_case(tag)),
            Predicate::Attribute(selector) => tree
                .as_element(node)
                .is_some_and(|element| selector.matches(element)),
            Predicate::Not(inner) => !inner.matches(tree, node),
            Predicate::And(left, right) => left.matches(tree, node) && right.matches(tree, node),
            Predicate::NthChild { formula, from_end } => {
                nth_child_matches(tree, node, *formula, *from_end)
            }
        }
    }
}

/// Positional test for `:nth-child` / `:nth-last-child`.
///
/// A node with no parent has no sibling index and never matches. The
/// position is the 1-based index among ALL of the parent's children in
/// document order — text and comment siblings count too, exactly as the
/// tree stores them. For `from_end`, the position is replaced with
/// `child_count - index` so the last child is position 1.
fn nth_child_matches(tree: &DomTree, node: NodeId, formula: NthFormula, from_end: bool) -> bool {
    let Some(parent) = tree.parent(node) else {
        return false;
    };

    let siblings = tree.children(parent);
    let Some(index) = siblings.iter().position(|&child| child == node) else {
        return false;
    };

    let position = if from_end {
        siblings.len() - index
    } else {
        index + 1
    };

    formula.matches_position(position)
}

/// Attribute selectors per [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors).
///
/// Keys are folded to ASCII lowercase at compile time and looked up
/// case-insensitively; values are compared byte-exactly, never folded.
/// Every operator finds the FIRST attribute pair with a matching key and
/// applies its rule to that pair's value only; an absent key never
/// matches, for any operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSelector {
    /// `[attr]` — "Represents an element with the att attribute."
    Exists(String),

    /// `[attr=value]` — "Represents an element with the att attribute
    /// whose value is exactly 'val'."
    Equals(String, String),

    /// `[attr~=value]` — "Represents an element with the att attribute
    /// whose value is a whitespace-separated list of words, one of which
    /// is exactly 'val'." An empty value can never be a word, so it
    /// never matches.
    Includes(String, String),

    /// `[attr|=value]` — "Represents an element with the att attribute,
    /// its value either being exactly 'val' or beginning with 'val'
    /// immediately followed by '-'."
    DashMatch(String, String),

    /// `[attr^=value]` — "whose value begins with the prefix 'val'."
    Prefix(String, String),

    /// `[attr$=value]` — "whose value ends with the suffix 'val'."
    Suffix(String, String),

    /// `[attr*=value]` — "whose value contains at least one instance of
    /// the substring 'val'."
    Substring(String, String),
}

impl AttributeSelector {
    /// Check this attribute selector against an element's own attribute
    /// list. No inheritance from ancestors.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Exists(key) => element.has_attr(key),
            Self::Equals(key, val) => element.attr(key).is_some_and(|v| v == val),
            // ASCII whitespace per CSS: space, tab, CR, LF, and form feed,
            // which is exactly the set split_ascii_whitespace splits on.
            Self::Includes(key, val) => element
                .attr(key)
                .is_some_and(|v| v.split_ascii_whitespace().any(|word| word == val)),
            Self::DashMatch(key, val) => element.attr(key).is_some_and(|v| {
                v == val
                    || v.strip_prefix(val.as_str())
                        .is_some_and(|rest| rest.starts_with('-'))
            }),
            Self::Prefix(key, val) => element
                .attr(key)
                .is_some_and(|v| v.starts_with(val.as_str())),
            Self::Suffix(key, val) => element
                .attr(key)
                .is_some_and(|v| v.ends_with(val.as_str())),
            Self::Substring(key, val) => element
                .attr(key)
                .is_some_and(|v| v.contains(val.as_str())),
        }
    }
}

//! CSS simple-selector compiler and matcher for wombat markup trees.
//!
//! This crate is the query layer over an already-parsed
//! [`wombat_dom::DomTree`]: it compiles a textual selector into an
//! executable predicate and collects every matching node in document
//! order. It does not parse markup itself.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector parsing** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type and universal selectors: `div`, `*`
//!   - ID and class selectors: `#main`, `.odd`
//!   - All six attribute operators: `[k]`, `[k=v]`, `[k~=v]`, `[k|=v]`,
//!     `[k^=v]`, `[k$=v]`, `[k*=v]`, with quoted or bare values
//!   - Pseudo-classes: `:not(...)`, `:nth-child(an+b)`, `:nth-last-child(an+b)`
//! - **Predicate compilation** — each component becomes a self-contained
//!   [`Predicate`] closed over its matching data; a sequence compiles to
//!   their left-to-right intersection
//! - **Tree matching** — pre-order collection of every matching node
//!
//! # Not Implemented
//!
//! - Combinators (descendant, `>`, `+`, `~`) and selector lists (`,`):
//!   the grammar is a single simple selector sequence, and anything past
//!   it is rejected as trailing input rather than silently ignored
//! - Pseudo-elements and the wider pseudo-class set
//! - Namespaces and escape sequences in identifiers
//!
//! # Example
//!
//! ```
//! use wombat_dom::{DomTree, ElementData, NodeKind};
//! use wombat_select::compile;
//!
//! let mut tree = DomTree::new();
//! let list = tree.alloc(NodeKind::Element(ElementData::new("ul", &[])));
//! tree.append_child(tree.root(), list);
//! for class in ["odd", "even", "odd"] {
//!     let item = tree.alloc(NodeKind::Element(ElementData::new("li", &[("class", class)])));
//!     tree.append_child(list, item);
//! }
//!
//! let selector = compile("li.odd").unwrap();
//! assert_eq!(selector.match_all(&tree, tree.root()).len(), 2);
//! ```

/// The compile-time `SyntaxError` type.
pub mod error;
/// The `an+b` formula for positional pseudo-classes.
pub mod nth;
/// Compiled matching predicates and their evaluation rules.
pub mod predicate;

mod parser;

pub use error::SyntaxError;
pub use nth::NthFormula;
pub use predicate::{AttributeSelector, Predicate};

use wombat_dom::{DomTree, NodeId};

/// A compiled selector, ready for matching.
///
/// Stateless and immutable once compiled: it closes over compile-time
/// constants only, so one `Selector` may be applied to unboundedly many
/// nodes and trees, concurrently, without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    predicate: Predicate,
}

impl Selector {
    /// The compiled predicate tree, for introspection.
    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Whether this selector matches one node. Direct application of the
    /// predicate; no traversal.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.predicate.matches(tree, node)
    }

    /// Collect every node under (and including) `root` that matches this
    /// selector, in document pre-order.
    ///
    /// [§ 2 Selectors Overview](https://www.w3.org/TR/selectors-4/#overview)
    ///
    /// A node is tested before its children, and children are visited
    /// left-to-right, so an ancestor always precedes its matching
    /// descendants in the result. Every node is visited exactly once;
    /// there is no early exit, since all matches are wanted.
    #[must_use]
    pub fn match_all(&self, tree: &DomTree, root: NodeId) -> Vec<NodeId> {
        let mut matches = Vec::new();
        self.collect_matches(tree, root, &mut matches);
        matches
    }

    fn collect_matches(&self, tree: &DomTree, node: NodeId, matches: &mut Vec<NodeId>) {
        if self.predicate.matches(tree, node) {
            matches.push(node);
        }
        for &child in tree.children(node) {
            self.collect_matches(tree, child, matches);
        }
    }
}

/// Compile a selector string into a [`Selector`].
///
/// Parses exactly one simple selector sequence and requires the entire
/// input to be consumed; there is no partial or best-effort result.
///
/// # Errors
///
/// Returns a [`SyntaxError`] when the text does not conform to the
/// grammar: malformed attribute expressions, unknown pseudo-classes,
/// invalid `an+b` formulas, unterminated brackets or parentheses, or
/// non-whitespace input remaining after the sequence.
pub fn compile(selector: &str) -> Result<Selector, SyntaxError> {
    let predicate = parser::parse(selector)?;
    Ok(Selector { predicate })
}

//! Renderers for the induced [`DecisionTree`](crate::DecisionTree).
//! Both backends consume the tree through its public accessors only:
//! leaves expose a class value and a sample count,
//! decision nodes expose the splitting attribute, a sample count,
//! and per-value partition entropies and children.

/// Graphviz digraph output.
pub mod dot;
/// Hierarchical node placement.
pub mod layout;
/// SVG drawing of a laid-out tree.
pub mod plot;


pub use dot::digraph;
pub use layout::{hierarchy, PlacedNode};
pub use plot::render_svg;

//! Entropy-based decision tree induction.

/// Defines the induction engine and its builder.
pub mod builder;
/// Defines the tree produced by `Id3`.
pub mod decision_tree;

/// Defines the inner representations of `DecisionTree`.
mod node;
mod grow;

/// Defines the observer hooks fired while a tree grows.
pub mod observer;


pub use builder::{Id3, Id3Builder};
pub use decision_tree::DecisionTree;
pub use node::{DecisionNode, LeafNode, Node};
pub use observer::{
    BranchReport,
    GainReport,
    GrowthObserver,
    LeafReason,
};

//! Defines the inner representation
//! of the induced decision tree.
use serde::{Serialize, Deserialize};

use std::collections::{BTreeMap, HashMap};


/// Enumeration of `DecisionNode` and `LeafNode`.
/// Every node is owned by its parent;
/// the whole tree is a strict ownership tree
/// and is immutable once induction returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that routes a row to a child
    /// based on the value of one attribute.
    Decision(DecisionNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the internal nodes of the decision tree.
/// A `DecisionNode` has one child per attribute value
/// observed in the rows that reached it,
/// so it may have fewer branches
/// than the attribute takes values globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNode {
    pub(super) attribute: String,
    pub(super) n_sample: usize,
    pub(super) branch_entropies: BTreeMap<String, f64>,
    pub(super) branches: BTreeMap<String, Node>,
}


/// Represents the leaf nodes of the decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) class: String,
    pub(super) n_sample: usize,
}


impl Node {
    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Decision(_) => false,
            Node::Leaf(_) => true,
        }
    }


    /// The number of rows that reached this node.
    #[inline]
    pub fn n_sample(&self) -> usize {
        match self {
            Node::Decision(ref node) => node.n_sample,
            Node::Leaf(ref node) => node.n_sample,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    #[inline]
    pub fn leaves(&self) -> usize {
        match self {
            Node::Decision(ref node) => {
                node.branches()
                    .map(|(_, child)| child.leaves())
                    .sum()
            },
            Node::Leaf(_) => 1_usize,
        }
    }


    /// Route `case` down to a leaf.
    /// Returns `None` when an attribute is absent from `case`
    /// or a branch for its value does not exist.
    pub(crate) fn route<'a>(&'a self, case: &HashMap<&str, &str>)
        -> Option<&'a LeafNode>
    {
        match self {
            Node::Leaf(ref leaf) => Some(leaf),
            Node::Decision(ref node) => {
                let value = case.get(node.attribute.as_str())?;
                node.branches.get(*value)?.route(case)
            },
        }
    }
}


impl DecisionNode {
    /// The attribute this node splits on.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }


    /// The number of rows that reached this node.
    pub fn n_sample(&self) -> usize {
        self.n_sample
    }


    /// The entropy of the partition collected by `value`,
    /// if the value was observed at this node.
    pub fn branch_entropy(&self, value: &str) -> Option<f64> {
        self.branch_entropies.get(value).copied()
    }


    /// Iterate `(value, child)` pairs in natural value order.
    pub fn branches(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.branches.iter().map(|(value, child)| (value.as_str(), child))
    }


    /// The child reached through `value`, if it exists.
    pub fn branch(&self, value: &str) -> Option<&Node> {
        self.branches.get(value)
    }
}


impl LeafNode {
    /// The class value this leaf predicts.
    pub fn class(&self) -> &str {
        &self.class
    }


    /// The number of rows that reached this leaf.
    pub fn n_sample(&self) -> usize {
        self.n_sample
    }
}

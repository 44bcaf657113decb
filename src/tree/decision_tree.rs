//! Defines the tree produced by `Id3`.
use serde::{Serialize, Deserialize};

use std::collections::HashMap;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use super::node::Node;


/// The decision tree induced by [`Id3`](crate::Id3).
/// This struct is a wrapper of the root [`Node`]
/// that remembers the name of the target column,
/// so renderers can label leaves with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    target_name: String,
    root: Node,
}


impl DecisionTree {
    #[inline]
    pub(super) fn from_components(target_name: String, root: Node) -> Self {
        Self { target_name, root }
    }


    /// The root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// The name of the target column the tree predicts.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }


    /// Route a case of `(attribute, value)` assignments
    /// down to a leaf and return its class value.
    ///
    /// Branches are data-driven,
    /// so `None` is returned when the case takes a value
    /// that no row of the training partition took,
    /// or when an attribute on the path is absent from `case`.
    pub fn predict(&self, case: &[(&str, &str)]) -> Option<&str> {
        let case = case.iter()
            .copied()
            .collect::<HashMap<_, _>>();

        self.root.route(&case).map(|leaf| leaf.class())
    }


    /// Render the tree as a Graphviz digraph.
    #[inline]
    pub fn to_dot(&self) -> String {
        crate::render::dot::digraph(self)
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;

        Ok(())
    }
}

//! Hierarchical placement of the tree nodes:
//! each node is centered over its children,
//! and the children share the parent's horizontal span equally.
use crate::tree::{DecisionTree, Node};


/// One node placed on a unit-width canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    /// Horizontal center, in `[0, 1]`.
    pub x: f64,
    /// Depth of the node; the root has depth `0`.
    pub depth: usize,
    /// Label lines of the node,
    /// e.g. `["Attribute: Outlook", "Samples: 14"]`.
    pub label: Vec<String>,
    /// Index of the parent in the returned vector;
    /// `None` for the root.
    pub parent: Option<usize>,
    /// Label lines of the incoming edge
    /// (branch value and partition entropy);
    /// empty for the root.
    pub edge_label: Vec<String>,
}


/// Position every node of `tree` for drawing.
/// Nodes are returned in depth-first order with the root first,
/// so a child always follows its parent.
pub fn hierarchy(tree: &DecisionTree) -> Vec<PlacedNode> {
    let mut placed = Vec::new();
    place(
        tree.root(),
        tree.target_name(),
        0.5,
        1.0,
        0,
        None,
        Vec::new(),
        &mut placed,
    );
    placed
}


#[allow(clippy::too_many_arguments)]
fn place(
    node: &Node,
    target_name: &str,
    xcenter: f64,
    width: f64,
    depth: usize,
    parent: Option<usize>,
    edge_label: Vec<String>,
    placed: &mut Vec<PlacedNode>,
)
{
    let label = match node {
        Node::Leaf(leaf) => vec![
            format!("{target_name}: {}", leaf.class()),
            format!("Samples: {}", leaf.n_sample()),
        ],
        Node::Decision(branch) => vec![
            format!("Attribute: {}", branch.attribute()),
            format!("Samples: {}", branch.n_sample()),
        ],
    };

    let index = placed.len();
    placed.push(PlacedNode {
        x: xcenter,
        depth,
        label,
        parent,
        edge_label,
    });

    if let Node::Decision(branch) = node {
        let n_branch = branch.branches().count();
        let dx = width / n_branch as f64;
        let mut next_x = xcenter - width / 2.0 - dx / 2.0;

        for (value, child) in branch.branches() {
            next_x += dx;

            let edge = match branch.branch_entropy(value) {
                Some(entropy) => vec![
                    format!("{} = {value}", branch.attribute()),
                    format!("Entropy: {entropy:.4}"),
                ],
                None => vec![
                    format!("{} = {value}", branch.attribute()),
                ],
            };

            place(
                child,
                target_name,
                next_x,
                dx,
                depth + 1,
                Some(index),
                edge,
                placed,
            );
        }
    }
}

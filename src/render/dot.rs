//! Graphviz rendering of a decision tree.
use crate::tree::{DecisionTree, Node};


/// Render `tree` as a Graphviz digraph.
///
/// Node identifiers derive from the tree path:
/// the root is `root`, and the child reached through the
/// branch value `v` of node `p` is `p_v`.
/// Decision nodes are labeled with their attribute and
/// sample count, leaves with the predicted target value and
/// sample count, and each edge with the branch value and the
/// entropy of the corresponding partition.
pub fn digraph(tree: &DecisionTree) -> String {
    let mut info = String::from("digraph decision_tree {\n");
    node_info(tree.root(), tree.target_name(), "root", &mut info);
    info.push('}');
    info.push('\n');

    info
}


fn node_info(node: &Node, target_name: &str, id: &str, info: &mut String) {
    match node {
        Node::Leaf(leaf) => {
            let line = format!(
                "\t\"{id}\" [ \
                 label = \"{label}\", \
                 shape = box, \
                 ];\n",
                id = escape(id),
                label = escape(&format!(
                    "{target_name}: {class}\nSamples: {n}",
                    class = leaf.class(),
                    n = leaf.n_sample(),
                )),
            );
            info.push_str(&line);
        },
        Node::Decision(branch) => {
            let line = format!(
                "\t\"{id}\" [ label = \"{label}\" ];\n",
                id = escape(id),
                label = escape(&format!(
                    "Attribute: {attr}\nSamples: {n}",
                    attr = branch.attribute(),
                    n = branch.n_sample(),
                )),
            );
            info.push_str(&line);

            for (value, child) in branch.branches() {
                let child_id = format!("{id}_{value}");

                let edge_label = match branch.branch_entropy(value) {
                    Some(entropy) => format!(
                        "{attr} = {value}\nEntropy: {entropy:.4}",
                        attr = branch.attribute(),
                    ),
                    None => format!(
                        "{attr} = {value}",
                        attr = branch.attribute(),
                    ),
                };
                let edge = format!(
                    "\t\"{id}\" -> \"{child_id}\" [ label = \"{label}\" ];\n",
                    id = escape(id),
                    child_id = escape(&child_id),
                    label = escape(&edge_label),
                );
                info.push_str(&edge);

                node_info(child, target_name, &child_id, info);
            }
        },
    }
}


/// Escape a string for use inside a double-quoted DOT string.
fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

//! The recursive induction loop.
use rayon::prelude::*;

use std::collections::{BTreeMap, HashMap};

use crate::Sample;
use crate::entropy::{Breakdown, LabelUniverse};
use super::node::{DecisionNode, LeafNode, Node};
use super::observer::{
    BranchReport,
    GainReport,
    GrowthObserver,
    LeafReason,
};


/// A node whose entropy falls below this tolerance is pure.
pub(crate) const PURITY_TOLERANCE: f64 = 1e-6;


/// The gain of one candidate attribute,
/// together with the row partitions the report was computed from.
/// The partitions of the winning candidate
/// become the sub-samples of its branches.
struct Candidate {
    report: GainReport,
    partitions: Vec<Vec<usize>>,
}


/// Expand one node over the rows `rows` of `sample`.
///
/// `features` holds the indices of the remaining candidate
/// attributes, in the caller-supplied order;
/// the chosen attribute is removed before recursing,
/// so the recursion depth is at most `features.len() + 1`.
/// `rows` is never empty: the top-level call rejects empty
/// samples, and every partition contains at least one row
/// of its parent.
pub(super) fn grow_tree<O: GrowthObserver>(
    sample: &Sample,
    rows: Vec<usize>,
    features: Vec<usize>,
    universe: &LabelUniverse,
    depth: usize,
    observer: &mut O,
) -> Node
{
    let target = sample.target();

    let breakdown = Breakdown::from_labels(
        rows.iter().map(|&i| target[i].as_str()),
        universe,
    );
    observer.node_entropy(depth, rows.len(), &breakdown);


    // Leaf rule: the node is pure,
    // so every row shares the label of the first one.
    if breakdown.value() < PURITY_TOLERANCE {
        let class = target[rows[0]].clone();
        observer.leaf_reached(LeafReason::Pure, &class, rows.len());
        return Node::Leaf(LeafNode { class, n_sample: rows.len() });
    }


    // Leaf rule: no attribute is left to split on.
    if features.is_empty() {
        let class = majority_label(target, &rows);
        observer.leaf_reached(
            LeafReason::ExhaustedAttributes, &class, rows.len()
        );
        return Node::Leaf(LeafNode { class, n_sample: rows.len() });
    }


    // Score every candidate attribute.
    // The ordered collect keeps the candidates
    // in the supplied attribute order,
    // so the selection below is independent of
    // how the work was scheduled.
    let mut candidates = features.par_iter()
        .map(|&feat| gain_of(sample, &rows, feat, &breakdown, universe))
        .collect::<Vec<_>>();

    for candidate in candidates.iter() {
        observer.gain_computed(&candidate.report);
    }


    // Best-seen-so-far scan with a strict `>`:
    // on an exact tie the first-encountered attribute wins.
    let mut best_gain = f64::NEG_INFINITY;
    let mut best_index = 0_usize;
    for (k, candidate) in candidates.iter().enumerate() {
        if candidate.report.gain > best_gain {
            best_gain = candidate.report.gain;
            best_index = k;
        }
    }

    let winner = candidates.swap_remove(best_index);
    observer.attribute_chosen(&winner.report);

    let chosen = features[best_index];
    let rest = features.into_iter()
        .filter(|&feat| feat != chosen)
        .collect::<Vec<_>>();


    // Grow one child per observed value of the winner.
    let n_sample = rows.len();
    let Candidate { report, partitions } = winner;
    let mut branch_entropies = BTreeMap::new();
    let mut branches = BTreeMap::new();
    for (branch, part_rows) in report.branches.into_iter().zip(partitions) {
        branch_entropies.insert(branch.value.clone(), branch.breakdown.value());

        let child = grow_tree(
            sample, part_rows, rest.clone(), universe, depth + 1, observer
        );
        branches.insert(branch.value, child);
    }


    Node::Decision(DecisionNode {
        attribute: report.attribute,
        n_sample,
        branch_entropies,
        branches,
    })
}


/// Compute the information gain of the attribute at index `feat`
/// over the rows `rows`.
/// The value space is data-driven:
/// only values observed in the current sub-sample
/// produce a partition.
fn gain_of(
    sample: &Sample,
    rows: &[usize],
    feat: usize,
    parent: &Breakdown,
    universe: &LabelUniverse,
) -> Candidate
{
    let feature = &sample.features()[feat];
    let target = sample.target();

    // Partition the rows by attribute value,
    // keeping first-encountered value order.
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for &i in rows {
        let value = &feature[i];
        groups.entry(value)
            .or_insert_with(|| {
                order.push(value);
                Vec::new()
            })
            .push(i);
    }


    let n_parent = rows.len();
    let mut conditional = 0.0;
    let mut branch_reports = Vec::with_capacity(order.len());
    let mut partitions = Vec::with_capacity(order.len());
    for value in order {
        let part = groups.remove(value).unwrap();
        let breakdown = Breakdown::from_labels(
            part.iter().map(|&i| target[i].as_str()),
            universe,
        );

        let weight = part.len() as f64 / n_parent as f64;
        conditional += weight * breakdown.value();

        branch_reports.push(BranchReport {
            value: value.to_string(),
            n_sample: part.len(),
            n_parent,
            breakdown,
        });
        partitions.push(part);
    }


    let gain = parent.value() - conditional;
    Candidate {
        report: GainReport {
            attribute: feature.name().to_string(),
            parent_entropy: parent.value(),
            conditional_entropy: conditional,
            gain,
            branches: branch_reports,
        },
        partitions,
    }
}


/// The most frequent label among `rows`.
/// Ties resolve to the lexicographically smallest label:
/// the counts iterate in natural label order and only a
/// strictly greater count replaces the current best.
fn majority_label(target: &[String], rows: &[usize]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in rows {
        *counts.entry(target[i].as_str()).or_insert(0) += 1;
    }

    let mut best = "";
    let mut best_count = 0_usize;
    for (label, count) in counts {
        if count > best_count {
            best = label;
            best_count = count;
        }
    }

    best.to_string()
}

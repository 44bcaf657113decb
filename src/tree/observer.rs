//! Observer hooks fired while a tree grows.
//! Observation is one-directional:
//! an implementation sees every entropy and gain computation,
//! but nothing it does can change the induced tree.

use crate::entropy::Breakdown;


/// Why a leaf was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafReason {
    /// Every row that reached the node shares one label.
    Pure,
    /// No candidate attribute is left to split on;
    /// the leaf predicts the majority label.
    ExhaustedAttributes,
}


/// The entropy of one branch of a candidate split.
#[derive(Debug, Clone)]
pub struct BranchReport {
    /// The attribute value this branch collects.
    pub value: String,
    /// The number of rows in this branch.
    pub n_sample: usize,
    /// The number of rows at the parent node.
    pub n_parent: usize,
    /// Entropy breakdown of the branch's target labels.
    pub breakdown: Breakdown,
}


impl BranchReport {
    /// The weight `n_sample / n_parent` of this branch.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.n_sample as f64 / self.n_parent as f64
    }


    /// The branch's contribution to the conditional entropy,
    /// `weight * entropy`.
    #[inline]
    pub fn weighted_entropy(&self) -> f64 {
        self.weight() * self.breakdown.value()
    }
}


/// Everything computed while scoring one candidate attribute.
#[derive(Debug, Clone)]
pub struct GainReport {
    /// The candidate attribute name.
    pub attribute: String,
    /// Entropy of the target column at the node being expanded.
    pub parent_entropy: f64,
    /// Weighted sum of the branch entropies.
    pub conditional_entropy: f64,
    /// `parent_entropy - conditional_entropy`.
    pub gain: f64,
    /// One entry per value observed at this node,
    /// in first-encountered row order.
    pub branches: Vec<BranchReport>,
}


/// Callbacks fired while [`Id3`](crate::Id3) grows a tree.
/// All methods default to doing nothing, and `()` implements
/// the trait silently, so an observer only overrides
/// the events it cares about.
pub trait GrowthObserver {
    /// The entropy of the target column
    /// at the node now being expanded.
    fn node_entropy(
        &mut self,
        depth: usize,
        n_sample: usize,
        breakdown: &Breakdown,
    )
    {
        let _ = (depth, n_sample, breakdown);
    }


    /// Fired after the gain of one candidate attribute
    /// has been computed.
    /// Candidates are reported in the supplied attribute order.
    fn gain_computed(&mut self, report: &GainReport) {
        let _ = report;
    }


    /// Fired when the best attribute of the node has been chosen.
    fn attribute_chosen(&mut self, report: &GainReport) {
        let _ = report;
    }


    /// Fired when a leaf is emitted.
    fn leaf_reached(
        &mut self,
        reason: LeafReason,
        class: &str,
        n_sample: usize,
    )
    {
        let _ = (reason, class, n_sample);
    }
}


impl GrowthObserver for () {}

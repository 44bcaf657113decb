//! Exports the standard types of this crate.
//!
pub use crate::sample::{
    // Batch sample of categorical examples
    Sample,
    SampleReader,
    Attribute,
};


pub use crate::entropy::{
    // Entropy evaluation -----------------------
    entropy,
    Breakdown,
    LabelUniverse,
};


pub use crate::tree::{
    // Induction engine -------------------------
    Id3,
    Id3Builder,


    // The induced tree
    DecisionTree,
    Node,
    DecisionNode,
    LeafNode,


    // Observer hooks
    GrowthObserver,
    GainReport,
    BranchReport,
    LeafReason,
};


pub use crate::explain::Explainer;


pub use crate::naive_bayes::{
    CategoricalNB,
    Posterior,
};


pub use crate::errors::MiniTreesError;

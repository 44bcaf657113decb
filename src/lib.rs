#![warn(missing_docs)]

//!
//! A crate that grows classification decision trees
//! from categorical data.
//!
//! The induction engine follows the classic recipe:
//! compute the Shannon entropy of the target column,
//! rank every candidate attribute by information gain,
//! split on the best one, and recurse on each partition
//! with that attribute removed,
//! until a node is pure or no attribute is left.
//!
//! Next to the engine this crate ships
//!
//! - an entropy evaluator that keeps the per-label frequency
//!     breakdown, so every split decision can be justified
//!     to a human reader,
//! - an observer hook ([`GrowthObserver`]) with a colored
//!     console narrator ([`Explainer`]),
//! - two tree renderers (Graphviz text and an SVG drawing),
//! - a categorical naive Bayes calculator
//!     ([`CategoricalNB`]) over the same samples.
//!
//! ```no_run
//! use minitrees::prelude::*;
//!
//! fn main() -> Result<(), minitrees::MiniTreesError> {
//!     let sample = SampleReader::new()
//!         .file("weather.csv")
//!         .has_header(true)
//!         .target_feature("Play")
//!         .read()?;
//!
//!     let id3 = Id3Builder::new(&sample)
//!         .verbose(true)
//!         .build()?;
//!     let tree = id3.grow();
//!
//!     println!("{}", tree.to_dot());
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod sample;
pub mod entropy;
pub mod tree;
pub mod explain;
pub mod render;
pub mod naive_bayes;

pub mod prelude;


pub use errors::MiniTreesError;

pub use sample::{Attribute, Sample, SampleReader};

pub use entropy::{entropy, Breakdown, LabelUniverse};

pub use tree::{
    Id3,
    Id3Builder,
    DecisionTree,
    DecisionNode,
    LeafNode,
    Node,
    GrowthObserver,
    GainReport,
    BranchReport,
    LeafReason,
};

pub use explain::Explainer;

pub use naive_bayes::{CategoricalNB, Posterior};

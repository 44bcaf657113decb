use std::collections::HashSet;

use crate::Sample;
use crate::entropy::LabelUniverse;
use crate::errors::MiniTreesError;
use crate::explain::Explainer;
use super::decision_tree::DecisionTree;
use super::grow::grow_tree;
use super::observer::GrowthObserver;


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for constructing `Id3`
/// and validates them when [`Id3Builder::build`] is called.
///
/// # Example
///
/// ```no_run
/// use minitrees::prelude::*;
///
/// # fn main() -> Result<(), minitrees::MiniTreesError> {
/// # let sample = minitrees::SampleReader::new()
/// #     .file("weather.csv")
/// #     .has_header(true)
/// #     .target_feature("Play")
/// #     .read()?;
/// let id3 = Id3Builder::new(&sample)
///     .attributes(&["Outlook", "Humidity"])
///     .verbose(true)
///     .build()?;
/// let tree = id3.grow();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Id3Builder<'a> {
    sample: &'a Sample,
    attributes: Option<Vec<String>>,
    verbose: bool,
}


impl<'a> Id3Builder<'a> {
    /// Construct a new instance of [`Id3Builder`].
    /// By default every attribute of `sample` is a candidate,
    /// in column order, and narration is off.
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            attributes: None,
            verbose: false,
        }
    }


    /// Restrict the candidate attributes to `names`.
    /// The supplied order is kept:
    /// when two attributes yield the same gain,
    /// the earlier one wins the split.
    pub fn attributes<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        let names = names.iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();
        self.attributes = Some(names);
        self
    }


    /// Narrate every entropy and gain computation to stdout
    /// while the tree grows.
    /// Default is `false.`
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }


    /// Validate the parameters and build an [`Id3`].
    /// This method consumes `self`.
    ///
    /// Fails fast, before any induction starts, when
    /// the target column is not set,
    /// the sample has no rows,
    /// an attribute does not exist,
    /// the attribute set contains the target column,
    /// or an attribute appears twice.
    pub fn build(self) -> Result<Id3<'a>, MiniTreesError> {
        let sample = self.sample;

        let target_name = sample.target_name()
            .ok_or(MiniTreesError::TargetNotSet)?
            .to_string();

        if sample.shape().0 == 0 {
            return Err(MiniTreesError::EmptySample);
        }

        let names = self.attributes.unwrap_or_else(|| {
            sample.features()
                .iter()
                .map(|feat| feat.name().to_string())
                .collect::<Vec<_>>()
        });

        let mut seen = HashSet::new();
        let mut features = Vec::with_capacity(names.len());
        for name in names {
            if name == target_name {
                return Err(MiniTreesError::TargetInAttributes(name));
            }
            if !seen.insert(name.clone()) {
                return Err(MiniTreesError::DuplicateAttribute(name));
            }

            let pos = sample.features()
                .iter()
                .position(|feat| feat.name() == name)
                .ok_or(MiniTreesError::AttributeNotFound(name))?;
            features.push(pos);
        }

        let id3 = Id3 {
            sample,
            target_name,
            features,
            verbose: self.verbose,
        };
        Ok(id3)
    }
}


/// Generates a [`DecisionTree`] for a validated sample
/// by recursive information-gain maximization.
/// Construct it through [`Id3Builder`].
#[derive(Debug)]
pub struct Id3<'a> {
    sample: &'a Sample,
    target_name: String,
    features: Vec<usize>,
    verbose: bool,
}


impl<'a> Id3<'a> {
    /// Grow a decision tree.
    /// Given an identical sample (including row order)
    /// and attribute order, the result is identical:
    /// induction performs no I/O and holds no hidden state.
    pub fn grow(&self) -> DecisionTree {
        if self.verbose {
            let mut explainer = Explainer::new(&self.target_name);
            self.grow_with(&mut explainer)
        } else {
            self.grow_with(&mut ())
        }
    }


    /// Grow a decision tree,
    /// reporting every computation to `observer`.
    /// The observer cannot change the induced tree.
    pub fn grow_with<O>(&self, observer: &mut O) -> DecisionTree
        where O: GrowthObserver,
    {
        // The label universe is fixed here, once,
        // and threaded through every recursive call.
        let universe = LabelUniverse::from_labels(self.sample.target());

        let n_sample = self.sample.shape().0;
        let rows = (0..n_sample).collect::<Vec<usize>>();

        let root = grow_tree(
            self.sample,
            rows,
            self.features.clone(),
            &universe,
            0,
            observer,
        );

        DecisionTree::from_components(self.target_name.clone(), root)
    }
}

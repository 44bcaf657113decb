use std::collections::BTreeMap;

use crate::Sample;
use crate::errors::MiniTreesError;


/// A naive Bayes model over categorical attributes.
///
/// [`CategoricalNB::fit`] tabulates the per-class and
/// per-(attribute, value, class) frequencies of a sample;
/// [`CategoricalNB::posterior`] multiplies the
/// relative-frequency likelihoods of a case with the class
/// prior and normalizes over the classes.
/// When a zero count collapses some posterior to 0% or 100%,
/// [`Posterior::is_degenerate`] flags it so the caller can
/// re-run with add-k smoothing
/// via [`CategoricalNB::posterior_laplace`].
#[derive(Debug, Clone)]
pub struct CategoricalNB {
    target_name: String,
    n_sample: usize,
    class_counts: BTreeMap<String, usize>,
    // attribute -> value -> class -> count
    value_counts: BTreeMap<String, BTreeMap<String, BTreeMap<String, usize>>>,
    // attribute -> number of distinct values, for smoothing
    cardinality: BTreeMap<String, usize>,
}


impl CategoricalNB {
    /// Count the frequencies of `sample`.
    /// The target column must be set and the sample non-empty.
    pub fn fit(sample: &Sample) -> Result<Self, MiniTreesError> {
        let target_name = sample.target_name()
            .ok_or(MiniTreesError::TargetNotSet)?
            .to_string();

        let n_sample = sample.shape().0;
        if n_sample == 0 {
            return Err(MiniTreesError::EmptySample);
        }

        let target = sample.target();
        let mut class_counts: BTreeMap<String, usize> = BTreeMap::new();
        for label in target {
            *class_counts.entry(label.clone()).or_insert(0) += 1;
        }

        let mut value_counts = BTreeMap::new();
        let mut cardinality = BTreeMap::new();
        for feat in sample.features() {
            let mut per_value: BTreeMap<String, BTreeMap<String, usize>> =
                BTreeMap::new();
            for (i, value) in feat.values().iter().enumerate() {
                *per_value.entry(value.clone())
                    .or_default()
                    .entry(target[i].clone())
                    .or_insert(0) += 1;
            }

            cardinality.insert(feat.name().to_string(), per_value.len());
            value_counts.insert(feat.name().to_string(), per_value);
        }

        let model = Self {
            target_name,
            n_sample,
            class_counts,
            value_counts,
            cardinality,
        };
        Ok(model)
    }


    /// The name of the target column this model predicts.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }


    /// The class values, in natural order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_counts.keys().map(String::as_str)
    }


    /// The number of rows labeled `class`.
    pub fn class_count(&self, class: &str) -> usize {
        self.class_counts.get(class).copied().unwrap_or(0)
    }


    /// Posteriors of `case` from raw relative frequencies.
    /// A value never seen under some class zeroes that class out;
    /// check [`Posterior::is_degenerate`] and fall back to
    /// [`CategoricalNB::posterior_laplace`] when that matters.
    pub fn posterior(&self, case: &[(&str, &str)])
        -> Result<Posterior, MiniTreesError>
    {
        self.posterior_impl(case, None)
    }


    /// Posteriors of `case` with add-`smoothing` correction:
    /// an attribute taking `v` distinct values contributes
    /// `(count + k) / (class total + k * v)` per term.
    pub fn posterior_laplace(&self, case: &[(&str, &str)], smoothing: usize)
        -> Result<Posterior, MiniTreesError>
    {
        self.posterior_impl(case, Some(smoothing))
    }


    fn posterior_impl(
        &self,
        case: &[(&str, &str)],
        smoothing: Option<usize>,
    ) -> Result<Posterior, MiniTreesError>
    {
        for (attribute, _) in case {
            if !self.value_counts.contains_key(*attribute) {
                return Err(
                    MiniTreesError::AttributeNotFound(attribute.to_string())
                );
            }
        }

        let mut likelihoods = BTreeMap::new();
        let mut terms = BTreeMap::new();
        for (class, &n_class) in self.class_counts.iter() {
            let mut likelihood = 1.0;
            let mut fractions = Vec::with_capacity(case.len() + 1);

            for (attribute, value) in case {
                let count = self.count(attribute, value, class);
                match smoothing {
                    None => {
                        fractions.push(format!("{count}/{n_class}"));
                        likelihood *= if n_class > 0 {
                            count as f64 / n_class as f64
                        } else {
                            0.0
                        };
                    },
                    Some(k) => {
                        let v = self.cardinality[*attribute];
                        fractions.push(format!(
                            "({count}+{k})/({n_class}+{kv})",
                            kv = k * v,
                        ));
                        likelihood *=
                            (count + k) as f64 / (n_class + k * v) as f64;
                    },
                }
            }

            // Class prior.
            fractions.push(format!("{n_class}/{}", self.n_sample));
            likelihood *= n_class as f64 / self.n_sample as f64;

            likelihoods.insert(class.clone(), likelihood);
            terms.insert(class.clone(), fractions);
        }

        let total = likelihoods.values().sum::<f64>();
        let normalized = likelihoods.iter()
            .map(|(class, &likelihood)| {
                let p = if total != 0.0 { likelihood / total } else { 0.0 };
                (class.clone(), p)
            })
            .collect::<BTreeMap<_, _>>();

        let posterior = Posterior { likelihoods, normalized, terms };
        Ok(posterior)
    }


    fn count(&self, attribute: &str, value: &str, class: &str) -> usize {
        self.value_counts.get(attribute)
            .and_then(|per_value| per_value.get(value))
            .and_then(|per_class| per_class.get(class))
            .copied()
            .unwrap_or(0)
    }
}


/// Per-class likelihoods and normalized posteriors of one case.
#[derive(Debug, Clone)]
pub struct Posterior {
    likelihoods: BTreeMap<String, f64>,
    normalized: BTreeMap<String, f64>,
    terms: BTreeMap<String, Vec<String>>,
}


impl Posterior {
    /// The class with the largest posterior probability.
    /// On an exact tie the lexicographically smallest class wins.
    pub fn prediction(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (class, &p) in self.normalized.iter() {
            match best {
                Some((_, q)) if p <= q => {},
                _ => { best = Some((class, p)); },
            }
        }
        best.map(|(class, _)| class)
    }


    /// The unnormalized likelihood of `class`;
    /// `0` for an unknown class.
    pub fn likelihood(&self, class: &str) -> f64 {
        self.likelihoods.get(class).copied().unwrap_or(0.0)
    }


    /// The normalized probability of `class`;
    /// `0` for an unknown class.
    pub fn probability(&self, class: &str) -> f64 {
        self.normalized.get(class).copied().unwrap_or(0.0)
    }


    /// `(class, probability)` pairs in natural class order.
    pub fn probabilities(&self) -> impl Iterator<Item = (&str, f64)> {
        self.normalized.iter().map(|(class, &p)| (class.as_str(), p))
    }


    /// The fraction terms the likelihood of `class` multiplies,
    /// e.g. `["0/5", "3/5", "5/14"]` (the last term is the prior).
    pub fn terms(&self, class: &str) -> Option<&[String]> {
        self.terms.get(class).map(Vec::as_slice)
    }


    /// Returns `true` when some class ended at exactly 0% or
    /// 100%, i.e. a zero count wiped the evidence of the other
    /// terms; re-run with smoothing to recover them.
    pub fn is_degenerate(&self) -> bool {
        self.normalized.values().any(|&p| p == 0.0 || p == 1.0)
    }
}

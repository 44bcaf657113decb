//! Shannon entropy of a categorical label column,
//! together with the per-label frequency breakdown
//! used for human-readable justification.

use std::collections::{BTreeMap, BTreeSet};


/// The set of all distinct values the target column takes
/// over the *original, top-level* sample.
/// The universe is fixed once at the start of induction
/// and threaded through every entropy computation,
/// so that a sub-sample lacking some label
/// still reports a zero count for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelUniverse(BTreeSet<String>);


impl LabelUniverse {
    /// Collect the distinct labels of `labels`.
    /// The universe iterates its labels
    /// in the natural (lexicographic) order,
    /// regardless of the order they appear in `labels`.
    pub fn from_labels<I, S>(labels: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let set = labels.into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<BTreeSet<_>>();
        Self(set)
    }


    /// Iterate the labels in natural order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }


    /// The number of labels in this universe.
    pub fn len(&self) -> usize {
        self.0.len()
    }


    /// Returns `true` if this universe has no label.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }


    /// Returns `true` if `label` belongs to this universe.
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }
}


/// The entropy of a label column and its per-label frequencies.
/// [`Breakdown::value`] alone drives the induction decisions;
/// the counts exist so a caller can render a proof of the number.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    counts: BTreeMap<String, usize>,
    total: usize,
    value: f64,
}


impl Breakdown {
    pub(crate) fn from_labels<'a, I>(labels: I, universe: &LabelUniverse)
        -> Self
        where I: IntoIterator<Item = &'a str>,
    {
        let mut observed: BTreeMap<&str, usize> = BTreeMap::new();
        let mut total = 0_usize;
        for label in labels {
            *observed.entry(label).or_insert(0) += 1;
            total += 1;
        }

        // Labels outside the universe count toward `total`
        // but contribute no term.
        let counts = universe.iter()
            .map(|label| {
                let count = observed.get(label).copied().unwrap_or(0);
                (label.to_string(), count)
            })
            .collect::<BTreeMap<_, _>>();

        let value = counts.values()
            .map(|&count| {
                // `0 * log2(0)` is taken as `0`;
                // an empty column has entropy `0`.
                if count == 0 || total == 0 {
                    0.0
                } else {
                    let p = count as f64 / total as f64;
                    -p * p.log2()
                }
            })
            .sum::<f64>();

        Self { counts, total, value }
    }


    /// The entropy, in bits.
    /// Lies in `[0, log2(k)]` for a universe of `k` labels.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }


    /// The number of rows the breakdown was computed over.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }


    /// The number of rows labeled `label`.
    /// Returns `0` for a label outside the universe.
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }


    /// Per-label counts, iterated in natural label order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, &count)| (label.as_str(), count))
    }


    /// The frequency line of the justification, e.g.
    /// `Frequencies: class 'No' 0/4, class 'Yes' 4/4`.
    pub fn frequencies(&self) -> String {
        let total = self.total;
        let fractions = self.counts()
            .map(|(label, count)| format!("class '{label}' {count}/{total}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Frequencies: {fractions}")
    }


    /// The formula line of the justification, e.g.
    /// `-(0/4) * log2 (0/4) - (4/4) * log2 (4/4) = 0.0000`.
    /// Zero-count terms are shown even though they contribute nothing.
    pub fn formula(&self) -> String {
        let total = self.total;
        let terms = self.counts()
            .map(|(_, count)| {
                format!("({count}/{total}) * log2 ({count}/{total})")
            })
            .collect::<Vec<_>>()
            .join(" - ");
        format!("-{terms} = {:.4}", self.value)
    }
}


/// Compute the Shannon entropy (base 2) of `labels`
/// against the given label universe.
/// If `universe` is `None`,
/// it defaults to the distinct values observed in `labels`.
///
/// Each label `v` contributes `-p(v) * log2(p(v))`
/// where `p(v) = count(v) / labels.len()`;
/// a zero-probability label contributes `0`
/// (guarding against `log2(0)`),
/// and an empty `labels` has entropy `0`.
pub fn entropy<S: AsRef<str>>(labels: &[S], universe: Option<&LabelUniverse>)
    -> Breakdown
{
    let labels = labels.iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>();

    match universe {
        Some(universe) => Breakdown::from_labels(labels, universe),
        None => {
            let universe = LabelUniverse::from_labels(&labels);
            Breakdown::from_labels(labels, &universe)
        },
    }
}

//! Narrated walkthrough of a growing tree.
use colored::Colorize;

use crate::entropy::Breakdown;
use crate::tree::observer::{
    GainReport,
    GrowthObserver,
    LeafReason,
};


/// An observer that prints a step-by-step justification of the
/// induced tree to stdout:
/// the entropy of the target column with its frequency and
/// formula lines, every candidate attribute's gain derivation,
/// the chosen split, and the reason for each leaf.
///
/// `Id3Builder::verbose(true)` installs an `Explainer`;
/// it can also be passed to
/// [`Id3::grow_with`](crate::Id3::grow_with) directly.
pub struct Explainer {
    target_name: String,
}


impl Explainer {
    /// Construct an `Explainer` for a tree
    /// predicting the column `target_name`.
    pub fn new<S: AsRef<str>>(target_name: S) -> Self {
        Self {
            target_name: target_name.as_ref().to_string(),
        }
    }
}


impl GrowthObserver for Explainer {
    fn node_entropy(
        &mut self,
        depth: usize,
        n_sample: usize,
        breakdown: &Breakdown,
    )
    {
        let header = if depth == 0 {
            format!(
                "\nEntropy of the target column `{}`:",
                self.target_name,
            )
        } else {
            format!(
                "\nEntropy of `{}` at depth {depth} ({n_sample} rows):",
                self.target_name,
            )
        };
        println!("{}", header.green());
        println!("{}", breakdown.frequencies());
        println!("{}", breakdown.formula());
    }


    fn gain_computed(&mut self, report: &GainReport) {
        let attribute = &report.attribute;
        println!(
            "{}",
            format!("\nComputing gain for attribute `{attribute}`").green()
        );

        for branch in report.branches.iter() {
            let value = &branch.value;
            println!("\nAttribute {attribute}, value {value}:");
            println!("{}", branch.breakdown.frequencies());
            println!("{}", branch.breakdown.formula());
            println!(
                "Weight: ({}/{}) = {:.4}",
                branch.n_sample,
                branch.n_parent,
                branch.weight(),
            );
            println!(
                "Weighted share: ({}/{}) * {:.4} = {:.4}",
                branch.n_sample,
                branch.n_parent,
                branch.breakdown.value(),
                branch.weighted_entropy(),
            );
        }

        let addition = report.branches.iter()
            .map(|branch| format!("{:.4}", branch.weighted_entropy()))
            .collect::<Vec<_>>()
            .join(" + ");
        println!(
            "\nGain for attribute {attribute}: \
             {:.4} - ({addition}) = {:.4}",
            report.parent_entropy,
            report.gain,
        );
    }


    fn attribute_chosen(&mut self, report: &GainReport) {
        println!(
            "{}",
            format!(
                "\nBest attribute: {} (gain = {:.4})",
                report.attribute,
                report.gain,
            ).green()
        );
    }


    fn leaf_reached(
        &mut self,
        reason: LeafReason,
        class: &str,
        n_sample: usize,
    )
    {
        match reason {
            LeafReason::Pure => {
                println!(
                    "Node is pure (entropy 0). \
                     Unanimous value: {class} ({n_sample} rows)"
                );
            },
            LeafReason::ExhaustedAttributes => {
                println!(
                    "No attributes left. \
                     Leaf with majority value: {class} ({n_sample} rows)"
                );
            },
        }
    }
}

//! Defines the categorical naive Bayes calculator.

mod nbayes;


pub use nbayes::{CategoricalNB, Posterior};

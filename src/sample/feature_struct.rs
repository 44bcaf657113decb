use std::collections::HashSet;
use std::ops::Index;


/// A named column of categorical values.
/// Every cell is stored as a string,
/// so numeric columns become discrete categories such as `"3"`.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Attribute name.
    pub(crate) name: String,
    /// Category values, one per row.
    pub(crate) values: Vec<String>,
}


impl Attribute {
    /// Construct an empty attribute named `name`.
    pub(crate) fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
        }
    }


    pub(crate) fn append<T: ToString>(&mut self, value: T) {
        self.values.push(value.to_string());
    }


    /// Get the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the number of rows in this attribute.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the number of rows is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns all category values of this attribute.
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }


    /// Distinct values of this attribute
    /// in first-encountered row order.
    pub fn distinct_values(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.values.iter()
            .map(String::as_str)
            .filter(|v| seen.insert(*v))
            .collect()
    }


    /// The number of distinct values this attribute takes.
    pub fn distinct_value_count(&self) -> usize {
        self.values.iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }


    pub(crate) fn into_target(self) -> Vec<String> {
        self.values
    }
}


impl Index<usize> for Attribute {
    type Output = str;


    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}

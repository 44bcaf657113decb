use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;

use super::feature_struct::Attribute;
use crate::errors::MiniTreesError;


/// Struct `Sample` holds a batch of categorical examples
/// as an ordered collection of named columns with aligned rows.
/// One column can be designated as the target (class) column
/// via [`Sample::set_target`];
/// the remaining columns are the candidate attributes.
#[derive(Debug)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Attribute>,
    pub(super) target: Vec<String>,
    pub(super) target_name: Option<String>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Convert `polars::DataFrame` into `Sample`.
    /// This method takes the ownership for the given `data`.
    /// Every column is treated as categorical;
    /// numeric columns are converted to their string form.
    /// A column that cannot be converted,
    /// or that holds a missing value, yields an error.
    pub fn from_dataframe(data: DataFrame) -> Result<Self, MiniTreesError> {
        let (n_sample, n_feature) = data.shape();

        let features = data.get_columns()
            .iter()
            .map(categorical_column)
            .collect::<Result<Vec<_>, _>>()?;

        let name_to_index = index_by_name(&features);

        let sample = Self {
            name_to_index,
            features,
            target: Vec::with_capacity(0),
            target_name: None,
            n_sample,
            n_feature,
        };
        Ok(sample)
    }


    /// Read a CSV format file to `Sample` type
    /// with `,` as the field separator.
    /// See [`SampleReader`](crate::SampleReader) for other separators.
    pub fn from_csv<P>(file: P, has_header: bool)
        -> Result<Self, MiniTreesError>
        where P: AsRef<Path>,
    {
        Self::from_csv_split(file, has_header, ',')
    }


    /// Read a delimited text file to `Sample` type.
    /// If `has_header` is `false`,
    /// column names `Attr. [1], Attr. [2], ...` are synthesized.
    pub(crate) fn from_csv_split<P>(
        file: P,
        has_header: bool,
        separator: char,
    ) -> Result<Self, MiniTreesError>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut features: Vec<Attribute> = Vec::new();
        if has_header {
            if let Some(line) = lines.next() {
                features = line?.split(separator)
                    .map(|name| Attribute::new(name.trim()))
                    .collect::<Vec<_>>();
            }
        }
        let mut n_sample = 0_usize;

        // For each line of the file
        for line in lines {
            let line = line?;
            let fields = line.split(separator)
                .map(|x| x.trim().to_string())
                .collect::<Vec<_>>();

            // if the header does not exist,
            // construct a dummy header from the first data row.
            if !has_header && features.is_empty() {
                let n_feature = fields.len();
                features = (1..=n_feature).map(|i| {
                        let name = format!("Attr. [{i}]");
                        Attribute::new(name)
                    })
                    .collect::<Vec<_>>();
            }

            if fields.len() != features.len() {
                return Err(MiniTreesError::RaggedRow {
                    row: n_sample,
                    expected: features.len(),
                    found: fields.len(),
                });
            }

            for (feat, x) in features.iter_mut().zip(fields) {
                feat.append(x);
            }
            n_sample += 1;
        }

        let n_feature = features.len();
        let name_to_index = index_by_name(&features);

        let sample = Self {
            name_to_index,
            features,
            target: Vec::with_capacity(0),
            target_name: None,
            n_sample,
            n_feature,
        };

        Ok(sample)
    }


    /// Set the column of name `target` to the target (class) column.
    /// The column is moved out of the attribute list,
    /// so it can no longer be chosen as a splitting attribute.
    pub fn set_target<S: AsRef<str>>(mut self, target: S)
        -> Result<Self, MiniTreesError>
    {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| {
                MiniTreesError::TargetNotFound(target.to_string())
            })?;


        let column = self.features.remove(pos);
        self.target_name = Some(column.name().to_string());
        self.target = column.into_target();
        self.n_feature -= 1;


        self.name_to_index = index_by_name(&self.features);

        Ok(self)
    }


    /// Returns the target (class) column.
    /// The slice is empty until [`Sample::set_target`] is called.
    pub fn target(&self) -> &[String] {
        &self.target[..]
    }


    /// Returns the name of the target column, if one is set.
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }


    /// Returns a slice of type `Attribute`.
    pub fn features(&self) -> &[Attribute] {
        &self.features[..]
    }


    /// Returns the attribute of the given name, if it exists.
    pub fn feature<S: AsRef<str>>(&self, name: S) -> Option<&Attribute> {
        self.name_to_index.get(name.as_ref())
            .map(|&k| &self.features[k])
    }


    /// Returns the pair of the number of examples and
    /// the number of attributes.
    /// The target column does not count as an attribute.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }
}


/// Convert a polars column into a categorical [`Attribute`].
fn categorical_column(series: &Series) -> Result<Attribute, MiniTreesError> {
    let name = series.name().to_string();

    let casted = series.cast(&DataType::Utf8)
        .map_err(|_| MiniTreesError::ColumnConversion(name.clone()))?;
    let casted = casted.utf8()
        .map_err(|_| MiniTreesError::ColumnConversion(name.clone()))?;

    let mut values = Vec::with_capacity(series.len());
    for (row, cell) in casted.into_iter().enumerate() {
        match cell {
            Some(v) => { values.push(v.to_string()); },
            None => {
                return Err(MiniTreesError::MissingValue {
                    column: name,
                    row,
                });
            },
        }
    }

    Ok(Attribute { name, values })
}


fn index_by_name(features: &[Attribute]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect::<HashMap<_, _>>()
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Attribute;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name).unwrap();
        &self.features[k]
    }
}

use std::path::Path;

use super::sample_struct::Sample;
use crate::errors::MiniTreesError;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited text file to [`Sample`].
/// The file is parsed as delimited text regardless of its extension;
/// use [`SampleReader::separator`] for files delimited by `;`, `|`, etc.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minitrees::SampleReader;
///
/// # fn main() -> Result<(), minitrees::MiniTreesError> {
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("Play")
///     .read()?;
/// # Ok(())
/// # }
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    separator: char,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            separator: ',',
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the field separator.
    /// Default is `','.`
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the target (class) column.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}



impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Sample, MiniTreesError>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample, MiniTreesError> {
        if self.file.is_none() {
            panic!("The file name is not set");
        }
        let file = self.file.unwrap();

        if self.target.is_none() {
            panic!(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`."
            );
        }
        let target = self.target.unwrap();

        Sample::from_csv_split(file, self.has_header, self.separator)?
            .set_target(target.as_ref())
    }
}

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::ProteinDataError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, ProteinDataError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|source| ProteinDataError::FileReadError {
        path: path.to_owned(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Strip comments and surrounding whitespace from one input line.
///
/// Everything from the first `#` onwards is dropped. Returns `None` when
/// nothing is left, i.e. for blank lines and full-line comments.
///
pub fn strip_comment(line: &str) -> Option<&str> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let content = content.trim();

    match content.is_empty() {
        true => None,
        false => Some(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("", None)]
    #[case("   \t ", None)]
    #[case("# a comment", None)]
    #[case("   # indented comment", None)]
    #[case("P12345 1.5", Some("P12345 1.5"))]
    #[case("P12345 1.5   # trailing", Some("P12345 1.5"))]
    #[case("  P12345 1.5\n", Some("P12345 1.5"))]
    fn test_strip_comment(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(strip_comment(line), expected);
    }

    #[rstest]
    fn test_missing_file_reports_path() {
        let err = get_dynamic_reader(Path::new("does/not/exist.txt")).err().unwrap();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}

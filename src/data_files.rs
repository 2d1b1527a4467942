//! Data file list configuration.
//!
//! Converts lines of the form `name\0url` into the JSON document consumed by
//! the front end:
//!
//! ```json
//! {
//!  "dataFilesList": [
//!   {
//!    "name": "...",
//!    "url": "..."
//!   }
//!  ]
//! }
//! ```
//!
//! Output is indented with a single space per level.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

/// Separator between name and URL on each input line.
pub const FIELD_SEPARATOR: char = '\0';

/// Errors raised while reading or writing a data file list.
#[derive(Debug, thiserror::Error)]
pub enum DataFilesError {
	/// The line has no `\0` separator.
	#[error("line {line}: expected `name\\0url`, found no separator")]
	MissingSeparator {
		/// 1-based line number.
		line: usize,
	},
	/// The line has more than one `\0` separator.
	#[error("line {line}: expected `name\\0url`, found more than one separator")]
	TooManySeparators {
		/// 1-based line number.
		line: usize,
	},
	/// Reading input or writing output failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
	/// JSON serialization failed.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// One downloadable data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFile {
	/// Display name.
	pub name: String,
	/// Download location.
	pub url: String,
}

/// The `{"dataFilesList": [...]}` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFilesConfig {
	/// Entries in input order.
	pub data_files_list: Vec<DataFile>,
}

impl DataFile {
	/// Parses a single `name\0url` line. Trailing whitespace is ignored.
	///
	/// `line_no` is only used for error reporting.
	pub fn parse_line(line: &str, line_no: usize) -> Result<Self, DataFilesError> {
		let line = line.trim_end();
		let mut parts = line.split(FIELD_SEPARATOR);
		let (Some(name), Some(url)) = (parts.next(), parts.next()) else {
			return Err(DataFilesError::MissingSeparator { line: line_no });
		};
		if parts.next().is_some() {
			return Err(DataFilesError::TooManySeparators { line: line_no });
		}
		Ok(Self {
			name: name.to_string(),
			url: url.to_string(),
		})
	}
}

impl DataFilesConfig {
	/// Reads every line of `reader` as a [`DataFile`].
	///
	/// # Errors
	///
	/// Fails on the first malformed line or on an I/O error.
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DataFilesError> {
		let mut data_files_list = Vec::new();
		for (index, line) in reader.lines().enumerate() {
			let line = line?;
			data_files_list.push(DataFile::parse_line(&line, index + 1)?);
		}
		tracing::debug!(count = data_files_list.len(), "parsed data file list");
		Ok(Self { data_files_list })
	}

	/// Writes the document as JSON indented by one space.
	///
	/// No trailing newline is written.
	pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), DataFilesError> {
		let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
		let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
		self.serialize(&mut serializer)?;
		Ok(())
	}

	/// Renders the document to a JSON string.
	pub fn to_json_string(&self) -> Result<String, DataFilesError> {
		let mut buf = Vec::new();
		self.to_writer(&mut buf)?;
		// serde_json only emits valid UTF-8
		Ok(String::from_utf8_lossy(&buf).into_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Cursor;

	#[rstest]
	fn test_parse_line() {
		let file = DataFile::parse_line("train.csv\0https://example.com/train.csv  ", 1).unwrap();
		assert_eq!(
			file,
			DataFile {
				name: "train.csv".to_string(),
				url: "https://example.com/train.csv".to_string(),
			}
		);
	}

	#[rstest]
	#[case("no separator")]
	#[case("")]
	fn test_parse_line_missing_separator(#[case] line: &str) {
		let err = DataFile::parse_line(line, 7).unwrap_err();
		assert!(matches!(err, DataFilesError::MissingSeparator { line: 7 }));
	}

	#[rstest]
	fn test_parse_line_too_many_separators() {
		let err = DataFile::parse_line("a\0b\0c", 2).unwrap_err();
		assert!(matches!(err, DataFilesError::TooManySeparators { line: 2 }));
		assert_eq!(
			err.to_string(),
			"line 2: expected `name\\0url`, found more than one separator"
		);
	}

	#[rstest]
	fn test_from_reader_reports_line_number() {
		let input = "a\0http://a\nbroken\n";
		let err = DataFilesConfig::from_reader(Cursor::new(input)).unwrap_err();
		assert!(matches!(err, DataFilesError::MissingSeparator { line: 2 }));
	}

	#[rstest]
	fn test_json_layout() {
		let input = "a\0http://a\nb\0http://b\n";
		let config = DataFilesConfig::from_reader(Cursor::new(input)).unwrap();

		assert_eq!(
			config.to_json_string().unwrap(),
			"{\n \"dataFilesList\": [\n  {\n   \"name\": \"a\",\n   \"url\": \"http://a\"\n  },\n  {\n   \"name\": \"b\",\n   \"url\": \"http://b\"\n  }\n ]\n}"
		);
	}

	#[rstest]
	fn test_empty_input() {
		let config = DataFilesConfig::from_reader(Cursor::new("")).unwrap();
		assert_eq!(config.to_json_string().unwrap(), "{\n \"dataFilesList\": []\n}");
	}

	#[rstest]
	fn test_round_trip_through_serde() {
		let json = r#"{"dataFilesList": [{"name": "x", "url": "y"}]}"#;
		let config: DataFilesConfig = serde_json::from_str(json).unwrap();
		assert_eq!(config.data_files_list.len(), 1);
		assert_eq!(config.data_files_list[0].name, "x");
	}
}

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tabular::{Cell, absent, cell};

use crate::error::{CliError, Result};

/// A parsed input grid: optional headline plus body rows.
#[derive(Debug)]
pub struct Input {
    pub headline: Option<Vec<Cell>>,
    pub body: Vec<Vec<Cell>>,
}

/// Read delimiter-separated records from `path`, or stdin when `None`.
pub fn read(path: Option<&Path>, delimiter: char, with_header: bool) -> Result<Input> {
    let mut text = String::new();
    match path {
        Some(path) => {
            File::open(path)
                .map_err(|e| {
                    CliError::Io(e).with_context(format!("Failed to open '{}'", path.display()))
                })?
                .read_to_string(&mut text)?;
        }
        None => {
            io::stdin().read_to_string(&mut text)?;
        }
    }

    parse(&text, delimiter, with_header)
}

/// Parse records into cells; an empty field becomes an absent cell. Ragged
/// records are passed through as-is, the renderer reports them.
pub fn parse(text: &str, delimiter: char, with_header: bool) -> Result<Input> {
    if !delimiter.is_ascii() {
        return Err(CliError::InvalidDelimiter(delimiter));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        absent()
                    } else {
                        cell(field)
                    }
                })
                .collect(),
        );
    }

    let headline = if with_header && !rows.is_empty() {
        Some(rows.remove(0))
    } else {
        None
    };

    Ok(Input { headline, body: rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_off_the_header_row() {
        let input = parse("name,qty\nbolt,42\n", ',', true).unwrap();

        assert_eq!(input.headline, Some(vec![cell("name"), cell("qty")]));
        assert_eq!(input.body, vec![vec![cell("bolt"), cell("42")]]);
    }

    #[test]
    fn no_header_keeps_every_row_in_the_body() {
        let input = parse("a,b\nc,d\n", ',', false).unwrap();

        assert_eq!(input.headline, None);
        assert_eq!(input.body.len(), 2);
    }

    #[test]
    fn empty_fields_become_absent_cells() {
        let input = parse("a,,c\n", ',', false).unwrap();

        assert_eq!(input.body, vec![vec![cell("a"), absent(), cell("c")]]);
    }

    #[test]
    fn empty_input_yields_an_empty_table() {
        let input = parse("", ',', true).unwrap();

        assert_eq!(input.headline, None);
        assert!(input.body.is_empty());
    }

    #[test]
    fn reads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a;b\n1;2\n").unwrap();

        let input = read(Some(file.path()), ';', true).unwrap();

        assert_eq!(input.headline, Some(vec![cell("a"), cell("b")]));
        assert_eq!(input.body, vec![vec![cell("1"), cell("2")]]);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let error = read(Some(Path::new("/no/such/file.csv")), ',', true).unwrap_err();

        assert!(error.user_message().contains("/no/such/file.csv"));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        assert!(parse("a,b", '¦', false).is_err());
    }
}

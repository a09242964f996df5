// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the means to read a catalog of items from a text
//! source. Each line holds one item as three whitespace-separated integers:
//! `identity size value`. Empty lines and comment lines (starting with `#`)
//! are skipped.

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use crate::{Catalog, Item};

/// This enumeration simply groups the kind of errors that might occur when
/// reading a catalog from file. There can be io errors (file unavailable ?),
/// format errors (e.g. a line holds two numbers instead of three), or parse
/// int errors (the reader expected an integer number but got something else).
///
/// These errors belong to the input side of the program: the solvers never
/// report any of them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("not an integer")]
    ParseInt(#[from] ParseIntError),
    /// The line does not hold exactly three fields
    #[error("ill formed item at line {line}")]
    Format { line: usize },
}

/// Reads a catalog from the file at the given location.
pub fn read_catalog<P: AsRef<Path>>(fname: P) -> Result<Catalog, Error> {
    let f = File::open(fname)?;
    let f = BufReader::new(f);
    parse_catalog(f)
}

/// Reads a catalog from any buffered source.
///
/// ```
/// # use knapsack_dp::{io_utils::parse_catalog, Item};
/// let text = "# id size value\n1 10 60\n2 20 100\n\n3 30 120\n";
/// let catalog = parse_catalog(text.as_bytes()).unwrap();
/// assert_eq!(3, catalog.len());
/// assert_eq!(Item::new(2, 20, 100), catalog[1]);
/// ```
pub fn parse_catalog<R: BufRead>(source: R) -> Result<Catalog, Error> {
    let mut catalog = Catalog::default();
    for (lc, line) in source.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let format = || Error::Format { line: lc + 1 };
        let mut fields = line.split_whitespace();
        let id    = fields.next().ok_or_else(format)?.parse::<usize>()?;
        let size  = fields.next().ok_or_else(format)?.parse::<isize>()?;
        let value = fields.next().ok_or_else(format)?.parse::<isize>()?;
        if fields.next().is_some() {
            return Err(format());
        }

        catalog.push(Item::new(id, size, value));
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::ItemId;

    #[test]
    fn items_are_read_in_order() {
        let catalog = parse_catalog("1 1 1\n2 3 4\n3 4 5\n4 5 7\n".as_bytes()).unwrap();
        assert_eq!(4, catalog.len());
        assert_eq!(Item::new(1, 1, 1), catalog[0]);
        assert_eq!(Item::new(4, 5, 7), catalog[3]);
    }
    #[test]
    fn blanks_comments_and_extra_whitespace_are_ignored() {
        let text = "# a knapsack instance\n\n   # another comment\n 7\t 2   3 \r\n";
        let catalog = parse_catalog(text.as_bytes()).unwrap();
        assert_eq!(1, catalog.len());
        assert_eq!(ItemId(7), catalog[0].id);
    }
    #[test]
    fn negative_sizes_are_left_for_the_solvers_to_reject() {
        let catalog = parse_catalog("1 -3 4\n".as_bytes()).unwrap();
        assert_eq!(-3, catalog[0].size);
    }
    #[test]
    fn a_missing_field_is_a_format_error() {
        let err = parse_catalog("1 2 3\n4 5\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Format { line: 2 }));
    }
    #[test]
    fn an_extra_field_is_a_format_error() {
        let err = parse_catalog("1 2 3 4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Format { line: 1 }));
    }
    #[test]
    fn only_hash_lines_are_comments() {
        let err = parse_catalog("c not a comment\n1 2 3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::ParseInt(_)));
    }
    #[test]
    fn the_cause_of_a_parse_error_is_reported_once() {
        let err   = parse_catalog("1 two 3\n".as_bytes()).unwrap_err();
        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(1, chain.matches("invalid digit").count());
    }
    #[test]
    fn a_non_numeric_field_is_a_parse_error() {
        let err = parse_catalog("1 two 3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::ParseInt(_)));
    }
    #[test]
    fn a_missing_file_is_an_io_error() {
        let fname = PathBuf::new()
            .join(env!("CARGO_MANIFEST_DIR"))
            .join("resources/knapsack/does_not_exist");
        assert!(matches!(read_catalog(fname), Err(Error::Io(_))));
    }
}

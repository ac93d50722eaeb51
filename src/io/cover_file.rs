//! Plain-text exact cover instances
//!
//! The format is a stream of whitespace-separated integers: the number of
//! matrix entries, that many `row column` pairs, then the number of optional
//! columns followed by their ids. The optional section may be left out
//! entirely, meaning no optional columns.

use crate::algorithm::matrix::Matrix;
use crate::io::error::{DlxError, Result, WithContext, invalid_input};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Exact cover instance as read from or written to a cover file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverFile {
    /// Matrix entries as `(row, column)` in insertion order
    pub pairs: Vec<(i32, i32)>,
    /// Columns that may be covered at most once
    pub optional: Vec<i32>,
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        let token = self.inner.next()?;
        self.position += 1;
        Some(token)
    }

    fn expect<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let Some(token) = self.next_raw() else {
            return Err(invalid_input(
                self.position + 1,
                &format!("expected {what}, found end of input"),
            ));
        };
        token.parse().map_err(|_parse_error| {
            invalid_input(self.position, &format!("expected {what}, found '{token}'"))
        })
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let value: i64 = self.expect(what)?;
        usize::try_from(value).map_err(|_conversion_error| {
            invalid_input(
                self.position,
                &format!("{what} must not be negative, found {value}"),
            )
        })
    }
}

impl CoverFile {
    /// Parse the text of a cover file
    ///
    /// # Errors
    ///
    /// Returns [`DlxError::InvalidInput`] if a count or id is missing or not
    /// an integer, a count is negative, or tokens follow the last section.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);

        let pair_count = tokens.count("entry count")?;
        let mut pairs = Vec::with_capacity(pair_count);
        for _ in 0..pair_count {
            let row = tokens.expect("row id")?;
            let column = tokens.expect("column id")?;
            pairs.push((row, column));
        }

        let mut optional = Vec::new();
        if let Some(token) = tokens.next_raw() {
            let optional_count = token
                .parse::<i64>()
                .ok()
                .and_then(|value| usize::try_from(value).ok())
                .ok_or_else(|| {
                    invalid_input(
                        tokens.position,
                        &format!("expected optional column count, found '{token}'"),
                    )
                })?;
            optional.reserve(optional_count);
            for _ in 0..optional_count {
                optional.push(tokens.expect("optional column id")?);
            }
        }

        if let Some(extra) = tokens.next_raw() {
            return Err(invalid_input(
                tokens.position,
                &format!("unexpected trailing data '{extra}'"),
            ));
        }

        Ok(Self { pairs, optional })
    }

    /// Read and parse a cover file from disk
    ///
    /// # Errors
    ///
    /// Returns [`DlxError::FileSystem`] if the file cannot be read and
    /// [`DlxError::InvalidInput`] if its content is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read")?;
        Self::parse(&text)
    }

    /// Build the matrix: entries in file order, then optional columns
    pub fn build(&self) -> Matrix<i32, i32> {
        let mut matrix = Matrix::new();
        for &(row, column) in &self.pairs {
            matrix.add(row, column);
        }
        for &column in &self.optional {
            matrix.optional(column);
        }
        matrix
    }

    /// Write the instance in cover file format, one entry per line
    ///
    /// # Errors
    ///
    /// Returns [`DlxError::Output`] if writing fails.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let write = |out: &mut W| -> std::io::Result<()> {
            writeln!(out, "{}", self.pairs.len())?;
            for (row, column) in &self.pairs {
                writeln!(out, "{row} {column}")?;
            }
            writeln!(out, "{}", self.optional.len())?;
            for column in &self.optional {
                writeln!(out, "{column}")?;
            }
            Ok(())
        };
        write(out).map_err(|source| DlxError::Output { source })
    }

    /// Write the instance to a file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`DlxError::FileSystem`] if the file cannot be created or
    /// written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path).with_path(path, "create")?;
        match self.write_to(&mut file) {
            Err(DlxError::Output { source }) => Err::<(), _>(source).with_path(path, "write"),
            other => other,
        }
    }
}

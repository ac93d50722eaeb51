//! Word squares as exact cover instances
//!
//! Every word of an `n`-letter word list may be laid across on any of the `n`
//! grid rows or down on any of the `n` grid columns. Each grid cell carries
//! one column per letter and direction, `(i, j, letter, across)`. An across
//! word on row `i` covers `(i, j, letter, true)` for its own letter at `j`
//! and `(i, j, letter, false)` for the 25 others; a down word does the
//! opposite. Each cell is then covered exactly once only when the across and
//! down letters agree, which needs an alphabet of more than two letters.

use crate::io::cover_file::CoverFile;
use crate::io::error::{Result, invalid_parameter};

const ALPHABET: usize = 26;

/// Build the word square instance for `words`
///
/// Row `(w * n + k) * 2 + d` places word `w` on line `k`, across when `d` is
/// 0 and down when `d` is 1. Column `((i * n + j) * 26 + l) * 2 + h` is cell
/// `(i, j)` holding letter `l`, with `h` 0 for the across side and 1 for the
/// down side. With `double`, word `w` also gets the optional column
/// `-(w + 1)`, so each word is used at most once and solutions come in
/// transposed pairs.
///
/// # Errors
///
/// Returns [`DlxError::InvalidParameter`](crate::DlxError::InvalidParameter)
/// if words differ in length, contain anything but ASCII letters, or the
/// instance is too large for `i32` ids.
pub fn crossword<S: AsRef<str>>(words: &[S], double: bool) -> Result<CoverFile> {
    let Some(first) = words.first() else {
        return Ok(CoverFile::default());
    };
    let n = first.as_ref().len();

    let mut letters = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref();
        if word.len() != n {
            return Err(invalid_parameter(
                "words",
                &word,
                &format!("every word must have {n} letters"),
            ));
        }
        if !word.bytes().all(|byte| byte.is_ascii_alphabetic()) {
            return Err(invalid_parameter(
                "words",
                &word,
                &"only ASCII letters are allowed",
            ));
        }
        letters.push(
            word.bytes()
                .map(|byte| usize::from(byte.to_ascii_lowercase() - b'a'))
                .collect::<Vec<_>>(),
        );
    }

    let too_large = || invalid_parameter("words", &words.len(), &"instance ids overflow i32");
    let id = |value: usize| i32::try_from(value).map_err(|_overflow| too_large());
    id(words.len() * n * 2)?;
    id(n * n * ALPHABET * 2)?;

    let per_row = n * ALPHABET + usize::from(double);
    let mut pairs = Vec::with_capacity(words.len() * n * 2 * per_row);
    for (w, word) in letters.iter().enumerate() {
        for k in 0..n {
            for across in [true, false] {
                let row = id((w * n + k) * 2 + usize::from(!across))?;
                for (position, &letter) in word.iter().enumerate() {
                    let (i, j) = if across { (k, position) } else { (position, k) };
                    for l in 0..ALPHABET {
                        let side = (l == letter) == across;
                        let column = ((i * n + j) * ALPHABET + l) * 2 + usize::from(!side);
                        pairs.push((row, id(column)?));
                    }
                }
                if double {
                    pairs.push((row, -id(w + 1)?));
                }
            }
        }
    }

    let optional = if double {
        (1..=words.len())
            .map(|w| id(w).map(|w| -w))
            .collect::<Result<Vec<_>>>()?
    } else {
        Vec::new()
    };

    Ok(CoverFile { pairs, optional })
}

//! N queens as an exact cover instance

use crate::io::cover_file::CoverFile;

/// Place `n` non-attacking queens on an `n` by `n` board
///
/// Row `r * n + c` puts a queen on square `(r, c)`. Ranks are columns
/// `0..n` and files `n..2n`, both mandatory. The `2n - 1` diagonals and
/// `2n - 1` anti-diagonals follow and are optional, since most of them stay
/// empty in a solution. Boards whose square or column numbers do not fit
/// in an `i32` give an empty instance.
pub fn queens(n: usize) -> CoverFile {
    let Ok(size) = i32::try_from(n) else {
        return CoverFile::default();
    };
    // Largest square id is n^2 - 1 and largest column id is 6n - 3
    if size.checked_mul(size).is_none() || size.checked_mul(6).is_none() {
        return CoverFile::default();
    }

    let diagonals = 2 * size - 1;
    let mut pairs = Vec::new();
    for rank in 0..size {
        for file in 0..size {
            let square = rank * size + file;
            pairs.push((square, rank));
            pairs.push((square, size + file));
            pairs.push((square, 2 * size + rank + file));
            pairs.push((square, 2 * size + diagonals + rank - file + size - 1));
        }
    }

    let optional = (2 * size..2 * size + 2 * diagonals.max(0)).collect();
    CoverFile { pairs, optional }
}

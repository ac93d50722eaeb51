//! Algorithm X over the dancing links matrix
//!
//! The search keeps one frame per chosen column on a heap stack instead of
//! recursing, so deep instances cannot exhaust the call stack.

use crate::algorithm::fabric::NodeId;
use crate::algorithm::matrix::{CoverToken, Matrix};
use std::hash::Hash;

/// Receiver for the terminal nodes of a search
///
/// Both hooks return whether the search should go on. Returning `false` from
/// either one unwinds the search immediately, restoring the matrix on the way
/// out.
pub trait Terminal<R> {
    /// Called with the selected rows whenever every mandatory column is covered
    fn on_solution(&mut self, _rows: &[R]) -> bool {
        true
    }

    /// Called whenever some mandatory column has no candidate rows left
    fn on_dead_end(&mut self) -> bool {
        true
    }
}

/// [`Terminal`] built from two closures
pub struct Callbacks<S, D> {
    on_solution: S,
    on_dead_end: D,
}

impl<S, D> Callbacks<S, D> {
    /// Wrap a solution hook and a dead-end hook
    pub const fn new(on_solution: S, on_dead_end: D) -> Self {
        Self {
            on_solution,
            on_dead_end,
        }
    }
}

const fn keep_going() -> bool {
    true
}

impl<S> Callbacks<S, fn() -> bool> {
    /// Wrap a solution hook; dead ends always continue
    pub fn solutions(on_solution: S) -> Self {
        Self::new(on_solution, keep_going)
    }
}

impl<R, S, D> Terminal<R> for Callbacks<S, D>
where
    S: FnMut(&[R]) -> bool,
    D: FnMut() -> bool,
{
    fn on_solution(&mut self, rows: &[R]) -> bool {
        (self.on_solution)(rows)
    }

    fn on_dead_end(&mut self) -> bool {
        (self.on_dead_end)()
    }
}

/// One level of the search: the covered column and the row being tried
struct Frame {
    header: NodeId,
    token: CoverToken,
    /// Candidate currently selected, or the header before the first one
    cursor: NodeId,
}

impl<R, C> Matrix<R, C>
where
    R: Clone + Eq + Hash,
    C: Clone + Eq + Hash,
{
    /// Enumerate exact covers extending the current selection
    ///
    /// Visits solutions in a deterministic order fixed by insertion history.
    /// Returns `false` if a hook stopped the search early and `true` if the
    /// tree was exhausted. The matrix and selection are left as they were.
    pub fn search<T>(&mut self, terminal: &mut T) -> bool
    where
        T: Terminal<R> + ?Sized,
    {
        let mut frames: Vec<Frame> = Vec::new();
        let mut running = true;
        let mut descend = true;

        loop {
            if descend {
                match self.choose_column() {
                    None => running = terminal.on_solution(self.selection()),
                    Some(header) if self.fabric.size(header) == 0 => {
                        running = terminal.on_dead_end();
                    }
                    Some(header) => {
                        let token = self.cover_header(header);
                        frames.push(Frame {
                            header,
                            token,
                            cursor: header,
                        });
                    }
                }
            }

            let Some(frame) = frames.last_mut() else {
                return running;
            };

            if frame.cursor != frame.header {
                self.pop();
            }

            let next = self.fabric.down(frame.cursor);
            if running && next != frame.header {
                frame.cursor = next;
                self.choose(next);
                descend = true;
            } else {
                if let Some(done) = frames.pop() {
                    self.uncover(done.token);
                }
                descend = false;
            }
        }
    }
}

//! Run-length encoding with single-digit counts
//!
//! Maximal runs of adjacent equal values become `<value><count>` tokens. A
//! count never exceeds [`MAX_RUN_COUNT`], so long runs split into several
//! tokens: every token of a run carries 9 except the last, which carries the
//! remainder (or 9 when the run length is an exact multiple of 9).

use std::fmt;

use crate::io::configuration::MAX_RUN_COUNT;

/// One run-length token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<T> {
    /// Repeated value
    pub value: T,
    /// Number of repetitions, between 1 and [`MAX_RUN_COUNT`]
    pub count: usize,
}

impl<T> Token<T> {
    /// Token for `count` repetitions of `value`
    pub const fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }
}

impl<T: Clone> Token<T> {
    /// The values this token stands for
    pub fn expand(&self) -> impl Iterator<Item = T> + '_ {
        std::iter::repeat_n(self.value.clone(), self.count)
    }
}

impl<T: fmt::Display> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.count)
    }
}

/// Split one run of `length` copies of `value` into capped tokens
fn split_run<T: Clone>(value: &T, length: usize, tokens: &mut Vec<Token<T>>) {
    let full = length / MAX_RUN_COUNT;
    let remainder = length % MAX_RUN_COUNT;
    tokens.extend(std::iter::repeat_n(
        Token::new(value.clone(), MAX_RUN_COUNT),
        full,
    ));
    if remainder > 0 {
        tokens.push(Token::new(value.clone(), remainder));
    }
}

/// Encode `sequence` as run-length tokens in run order
///
/// An empty sequence produces no tokens. Runs are split only at changes of
/// value between neighbours.
pub fn encode_run_length<T: PartialEq + Clone>(sequence: &[T]) -> Vec<Token<T>> {
    let mut tokens = Vec::new();
    for run in sequence.chunk_by(|a, b| a == b) {
        if let Some(value) = run.first() {
            split_run(value, run.len(), &mut tokens);
        }
    }
    tokens
}

//! Cause chain traversal for any `std::error::Error`.

use std::error::Error as StdError;

/// Iterator over an error chain, following `source()` until it runs out
#[derive(Debug, Clone)]
pub struct Causes<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Causes<'a> {
    /// Start iterating at `first`, which is yielded itself
    pub fn new(first: Option<&'a (dyn StdError + 'static)>) -> Self {
        Self { next: first }
    }
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate `err` and everything beneath it
pub fn causes<'a>(err: &'a (dyn StdError + 'static)) -> Causes<'a> {
    Causes::new(Some(err))
}

/// The deepest error beneath `err`, or `err` itself when it has no source
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

/// Render every link of the chain with `Display`
pub fn render_chain(err: &(dyn StdError + 'static)) -> Vec<String> {
    causes(err).map(|e| e.to_string()).collect()
}

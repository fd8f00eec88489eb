//! Extraction state threaded through the tree walk.

use smol_str::SmolStr;

/// The last significant token kind seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum Lookback {
    #[default]
    None,
    /// Just saw `:`; the next identifier is the declared type
    Colon,
    /// Just saw `=`; terminals accumulate into the value
    Assignment,
}

/// State for one declaration walk.
///
/// Every step consumes the previous state and returns the next one, so a walk
/// owns its state outright and nothing leaks between declarations.
#[derive(Debug, Clone, Default)]
pub(super) struct ExtractState {
    pub lookback: Lookback,
    /// Initializer tokens seen since the last `=`
    pub pending_value: Vec<SmolStr>,
    pub identifier_committed: bool,
    pub type_committed: bool,
}

impl ExtractState {
    pub fn with_lookback(self, lookback: Lookback) -> Self {
        Self { lookback, ..self }
    }

    pub fn accumulating(&self) -> bool {
        self.lookback == Lookback::Assignment
    }

    pub fn push_value(mut self, token: &str) -> Self {
        self.pending_value.push(SmolStr::new(token));
        self
    }

    /// Close value accumulation, handing back the collected tokens.
    pub fn take_value(self) -> (Self, Vec<SmolStr>) {
        let next = Self {
            lookback: Lookback::None,
            pending_value: Vec::new(),
            identifier_committed: self.identifier_committed,
            type_committed: self.type_committed,
        };
        (next, self.pending_value)
    }
}

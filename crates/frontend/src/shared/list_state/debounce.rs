//! Debounce state for the search box.
//!
//! Timer-free: the component owns the timer and hands back the ticket it got
//! from [`Debouncer::input`]. Only the latest ticket may commit.

/// Quiet time before the search text is committed, ms
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    draft: String,
    committed: String,
    generation: u64,
    pending: Option<u64>,
}

impl Debouncer {
    pub fn new(committed: impl Into<String>) -> Self {
        let committed = committed.into();
        Self {
            draft: committed.clone(),
            committed,
            generation: 0,
            pending: None,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a keystroke and restarts the window.
    pub fn input(&mut self, text: impl Into<String>) -> DebounceTicket {
        self.draft = text.into();
        self.generation += 1;
        self.pending = Some(self.generation);
        DebounceTicket(self.generation)
    }

    /// Timer elapsed for `ticket`. Returns the value to commit, if any.
    ///
    /// Superseded tickets and drafts equal to the committed value yield
    /// `None`.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<String> {
        if self.pending != Some(ticket.0) {
            return None;
        }
        self.pending = None;
        if self.draft == self.committed {
            return None;
        }
        self.committed = self.draft.clone();
        Some(self.committed.clone())
    }

    /// Clear button: drops the pending timer and commits `""` right away.
    pub fn clear(&mut self) -> Option<String> {
        self.pending = None;
        self.draft.clear();
        if self.committed.is_empty() {
            return None;
        }
        self.committed.clear();
        Some(String::new())
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The committed value changed from outside (back/forward, manual URL
    /// edit). Cancels the pending commit and resets the draft. Returns `true`
    /// when the draft was replaced.
    pub fn sync_committed(&mut self, value: &str) -> bool {
        if value == self.committed {
            return false;
        }
        self.committed = value.to_string();
        self.draft = value.to_string();
        self.pending = None;
        true
    }
}

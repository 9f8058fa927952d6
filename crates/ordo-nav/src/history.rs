//! The history capability.
//!
//! The navigator does not own a browsing environment; it consumes a minimal
//! push/replace interface the host supplies. Externally triggered changes
//! (back/forward buttons, direct URL entry) flow the other way: the host
//! observes them in its environment and calls `Navigator::sync` with the new
//! path. Keeping the capability this small makes the navigator testable with
//! the in-memory implementation below.

/// Minimal history capability supplied by the host environment.
pub trait History {
    /// Appends an entry for `path`, discarding any forward entries.
    fn push(&mut self, path: &str);

    /// Rewrites the current entry to `path` without growing the stack.
    fn replace(&mut self, path: &str);

    /// The path of the current entry, `None` before the first write.
    fn location(&self) -> Option<String>;
}

/// In-memory history: an entry vector plus a cursor.
///
/// Stands in for the browser in tests and demos. `back` and `forward` move
/// the cursor and return the new current path, which the host then feeds to
/// `Navigator::sync`, the same shape as a popstate notification.
///
/// # Examples
///
/// ```
/// use ordo_nav::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::new();
/// history.push("/orders/history");
/// history.push("/orders/new");
///
/// assert_eq!(history.back(), Some("/orders/history".to_string()));
/// assert_eq!(history.forward(), Some("/orders/new".to_string()));
/// assert_eq!(history.forward(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Moves one entry back, returning the new current path. `None` when
    /// already at the oldest entry.
    pub fn back(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Moves one entry forward, returning the new current path. `None` when
    /// already at the newest entry.
    pub fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, path: &str) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = path.to_string(),
            None => self.entries.push(path.to_string()),
        }
    }

    fn location(&self) -> Option<String> {
        self.entries.get(self.cursor).cloned()
    }
}

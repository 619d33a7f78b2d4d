#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Relay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBody {
    Text(String),
    /// Reply slot reserved by a send that has not resolved yet.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub seq: u64,
    pub author: Author,
    pub body: EntryBody,
}

impl Entry {
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            EntryBody::Text(t) => Some(t),
            EntryBody::Pending => None,
        }
    }
}

/// Ordered chat transcript with a scroll position that follows the newest entry.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    scroll: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, seq: u64, text: impl Into<String>) {
        self.entries.push(Entry {
            seq,
            author: Author::User,
            body: EntryBody::Text(text.into()),
        });
        self.scroll_to_latest();
    }

    pub fn reserve_reply(&mut self, seq: u64) {
        self.entries.push(Entry {
            seq,
            author: Author::Relay,
            body: EntryBody::Pending,
        });
    }

    /// Fill the reply slot of `seq`. Returns false when no such pending slot exists.
    pub fn fill_reply(&mut self, seq: u64, text: impl Into<String>) -> bool {
        let slot = self
            .entries
            .iter_mut()
            .find(|e| e.seq == seq && e.author == Author::Relay && e.body == EntryBody::Pending);

        match slot {
            Some(entry) => {
                entry.body = EntryBody::Text(text.into());
                self.scroll_to_latest();
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Texts of every resolved entry, in transcript order.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().filter_map(Entry::text).collect()
    }

    pub fn pending(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.body == EntryBody::Pending)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn scroll_to_latest(&mut self) {
        self.scroll = self.entries.len();
    }

    /// Index one past the last entry in view.
    pub fn scroll_position(&self) -> usize {
        self.scroll
    }

    /// The `rows` entries ending at the scroll position.
    pub fn visible(&self, rows: usize) -> &[Entry] {
        let end = self.scroll.min(self.entries.len());
        &self.entries[end.saturating_sub(rows)..end]
    }
}

use super::{Entry, Transcript};

/// Transcript kept in memory, with a scroll offset measured in entries.
#[derive(Debug, Default)]
pub struct MemoryTranscript {
    entries: Vec<Entry>,
    scroll_offset: usize,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn max_scroll_offset(&self) -> usize {
        self.entries.len()
    }

    pub fn is_scrolled_to_end(&self) -> bool {
        self.scroll_offset == self.max_scroll_offset()
    }
}

impl Transcript for MemoryTranscript {
    fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn scroll_to_end(&mut self) {
        self.scroll_offset = self.max_scroll_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Role;

    #[test]
    fn test_append_keeps_order() {
        let mut transcript = MemoryTranscript::new();
        transcript.append(Entry::user("You: a"));
        transcript.append(Entry::assistant("→ GET /a\n   success"));
        transcript.append(Entry::user("You: a"));

        let roles: Vec<_> = transcript.entries().iter().map(Entry::role).collect();
        assert_eq!(roles, [Role::User, Role::Assistant, Role::User]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn test_append_does_not_scroll() {
        let mut transcript = MemoryTranscript::new();
        assert!(transcript.is_scrolled_to_end());

        transcript.append(Entry::user("You: a"));
        assert!(!transcript.is_scrolled_to_end());

        transcript.scroll_to_end();
        assert!(transcript.is_scrolled_to_end());
        assert_eq!(transcript.scroll_offset(), 1);
    }
}

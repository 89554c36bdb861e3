use std::io::{self, Stdout, Write};
use tracing::warn;

use super::{Entry, Role, Transcript};
use crate::ui::Style;

/// Transcript printed to a terminal (stdout by default).
///
/// A terminal always shows its last line, so scrolling only flushes.
pub struct TerminalTranscript<W: Write = Stdout> {
    out: W,
}

impl TerminalTranscript {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalTranscript<W> {
    pub const fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_entry(&mut self, entry: &Entry) -> io::Result<()> {
        for line in entry.text().lines() {
            let styled = match entry.role() {
                Role::User => Style::user(line),
                Role::Assistant => Style::assistant(line),
            };
            writeln!(self.out, "{styled}")?;
        }
        if entry.role() == Role::Assistant {
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> Transcript for TerminalTranscript<W> {
    fn append(&mut self, entry: Entry) {
        if let Err(e) = self.write_entry(&entry) {
            warn!(error = %e, role = %entry.role(), "failed to print transcript entry");
        }
    }

    fn scroll_to_end(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "failed to flush transcript");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn buffer_transcript() -> TerminalTranscript<Vec<u8>> {
        TerminalTranscript::with_writer(Vec::new())
    }

    #[test]
    fn test_user_entry_is_printed() {
        let mut transcript = buffer_transcript();
        transcript.append(Entry::user("You: hello"));

        let printed = String::from_utf8(transcript.into_inner()).unwrap();
        assert!(printed.contains("You: hello"));
    }

    #[test]
    fn test_assistant_entry_prints_every_line_then_blank() {
        let mut transcript = buffer_transcript();
        transcript.append(Entry::assistant("→ GET /x\n   200"));

        let printed = String::from_utf8(transcript.into_inner()).unwrap();
        assert!(printed.contains("→ GET /x"));
        assert!(printed.contains("   200"));
        assert!(printed.ends_with("\n\n"));
    }
}

/// Strips surrounding whitespace, including a stray byte-order mark.
pub fn trim_prompt(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Editable text field the submission handler reads from and clears.
pub trait PromptInput {
    fn value(&self) -> &str;
    fn clear(&mut self);
}

/// A single line of typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    value: String,
}

impl LineInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<String> for LineInput {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl PromptInput for LineInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

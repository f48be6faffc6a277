/// Write-only clipboard.
pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Holds the last copied text. Used by the preview server, where the real
/// clipboard lives in the visitor's browser.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

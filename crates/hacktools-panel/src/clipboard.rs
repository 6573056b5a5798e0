use std::cell::RefCell;

/// The host's clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str);
    fn read_text(&self) -> Option<String>;
}

/// Keeps the last written text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> MemoryClipboard {
        MemoryClipboard::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) {
        *self.contents.borrow_mut() = Some(text.to_string());
    }

    fn read_text(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

//! Console status reporting
//!
//! Small reporter used by the init commands. When the output target is
//! stdout the serialized config must be the only thing printed, so every
//! status line goes through the `no_print` switch.

/// Prints status messages unless silenced.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    no_print: bool,
}

impl Reporter {
    pub fn new(no_print: bool) -> Self {
        Self { no_print }
    }

    /// Success message.
    pub fn good(&self, msg: &str) {
        if !self.no_print {
            println!("\u{2713} {msg}");
        }
    }

    /// Informational message.
    pub fn info(&self, msg: &str) {
        if !self.no_print {
            println!("\u{2139} {msg}");
        }
    }

    /// Non-fatal warning.
    pub fn warn(&self, msg: &str) {
        if !self.no_print {
            println!("\u{26a0} {msg}");
        }
    }

    /// Plain text line.
    pub fn text(&self, msg: &str) {
        if !self.no_print {
            println!("{msg}");
        }
    }

    /// Section divider for multi-part output such as diffs.
    pub fn divider(&self, title: &str) {
        if !self.no_print {
            println!("=== {title} ===");
        }
    }
}

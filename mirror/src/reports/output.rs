//! Where mirror summaries and dry-run previews are printed.

/// Sink for run summaries.
///
/// A mirror report only says which source produced which artifacts;
/// the sink decides how that looks. Tests record the calls instead of
/// printing them.
pub trait Output {
    /// Heading for one mirrored source, e.g. `src/components/Card.tsx (Card)`.
    fn section(&mut self, name: &str);

    /// Totals line such as `Generated: 4 files under rails`.
    fn key_value(&mut self, key: &str, value: &str);

    /// An artifact that was left untouched.
    fn list_item(&mut self, text: &str);

    /// An artifact that was written.
    fn added_item(&mut self, text: &str);

    fn warning(&mut self, msg: &str);

    /// Label line between previewed artifacts.
    fn divider(&mut self, label: &str);

    /// Rendered artifact text, printed verbatim.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Something printable once a run is over.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout; warnings go to stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    fn newline(&mut self) {
        println!();
    }
}

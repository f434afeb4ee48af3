//! Message structure

use super::category::Category;
use super::clock::{format_timestamp, Clock, SystemClock};
use super::prefix_table::PrefixTable;
use colored::Colorize;
use std::fmt;

/// One status line: category, caller text, rendered text and timestamp
///
/// The rendered text and timestamp are computed when the message is built.
/// A [`Preprocessor`](crate::Preprocessor) may change the raw text or
/// category, after which the messenger renders the message once more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    category: Category,
    raw: String,
    preprocessed: String,
    text: String,
    plain: String,
    timestamp: String,
    discard: bool,
}

impl Message {
    /// Build a message with the built-in prefixes and the system clock
    pub fn new(category: Category, raw: impl Into<String>) -> Self {
        Self::build(category, raw, &PrefixTable::default(), &SystemClock)
    }

    pub fn build(
        category: Category,
        raw: impl Into<String>,
        prefixes: &PrefixTable,
        clock: &dyn Clock,
    ) -> Self {
        let raw = raw.into();
        let mut message = Self {
            category,
            preprocessed: raw.clone(),
            raw,
            text: String::new(),
            plain: String::new(),
            timestamp: format_timestamp(&clock.now()),
            discard: false,
        };
        message.render(prefixes);
        message
    }

    pub(crate) fn render(&mut self, prefixes: &PrefixTable) {
        self.text = render_text(self.category, &self.raw, prefixes, true);
        self.plain = render_text(self.category, &self.raw, prefixes, false);
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Caller text, as changed by the preprocessor if one ran
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// Caller text exactly as it was supplied, before preprocessing
    pub fn preprocessed(&self) -> &str {
        &self.preprocessed
    }

    /// Rendered text without timestamp
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rendered text with an undecorated prefix
    pub fn plain_text(&self) -> &str {
        &self.plain
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Drop this message: no console output and no handler dispatch
    pub fn discard(&mut self) {
        self.discard = true;
    }

    pub fn is_discarded(&self) -> bool {
        self.discard
    }

    /// Timestamp and raw text, no prefix
    pub fn raw_string(&self) -> String {
        format!("{}: {}", self.timestamp, self.raw)
    }

    /// Timestamp and rendered text without color codes
    pub fn plain_string(&self) -> String {
        format!("{}: {}", self.timestamp, self.plain)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.timestamp, self.text)
    }
}

/// Prefix (colored when `decorate`, plus one space) followed by the raw text
fn render_text(category: Category, raw: &str, prefixes: &PrefixTable, decorate: bool) -> String {
    let prefix = prefixes.get(category);
    if prefix.is_empty() {
        return raw.to_string();
    }

    let decorated = match category.color() {
        Some(color) if decorate => prefix.color(color).to_string(),
        _ => prefix.to_string(),
    };

    format!("{} {}", decorated, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::parse("2025-01-08T10:30:45Z").expect("valid timestamp")
    }

    fn plain(text: &str) -> String {
        strip_ansi_escapes::strip_str(text)
    }

    #[test]
    fn test_prefixed_rendering() {
        let msg = Message::build(Category::Info, "starting", &PrefixTable::default(), &clock());
        assert_eq!(plain(msg.text()), "[*] starting");
        assert_eq!(msg.timestamp(), "2025-01-08T10:30:45Z");
        assert_eq!(plain(&msg.to_string()), "2025-01-08T10:30:45Z: [*] starting");
    }

    #[test]
    fn test_plain_category_passes_through() {
        let msg = Message::build(Category::Msg, "as is", &PrefixTable::default(), &clock());
        assert_eq!(msg.text(), "as is");

        let msg = Message::build(Category::Custom(12), "unknown", &PrefixTable::default(), &clock());
        assert_eq!(msg.text(), "unknown");
    }

    #[test]
    fn test_custom_category_prefix_is_uncolored() {
        let mut table = PrefixTable::default();
        table.set(Category::Custom(1), "[~]");
        let msg = Message::build(Category::Custom(1), "tilde", &table, &clock());
        assert_eq!(msg.text(), "[~] tilde");
    }

    #[test]
    fn test_representations() {
        let msg = Message::build(Category::Warn, "careful", &PrefixTable::default(), &clock());
        assert_eq!(msg.raw_string(), "2025-01-08T10:30:45Z: careful");
        assert_eq!(msg.plain_string(), "2025-01-08T10:30:45Z: [-] careful");
    }

    #[test]
    fn test_plain_form_keeps_control_characters() {
        colored::control::set_override(true);
        let msg = Message::build(
            Category::Info,
            "col1\tcol2\rend",
            &PrefixTable::default(),
            &clock(),
        );
        assert_eq!(msg.plain_text(), "[*] col1\tcol2\rend");
        assert_eq!(msg.plain_string(), "2025-01-08T10:30:45Z: [*] col1\tcol2\rend");
        assert!(!msg.plain_string().contains('\u{1b}'));
    }

    #[test]
    fn test_rerender_after_mutation() {
        let table = PrefixTable::default();
        let mut msg = Message::build(Category::Good, "before", &table, &clock());
        msg.set_raw("after");
        msg.set_category(Category::Err);

        // Rendered text only changes once re-rendered
        assert_eq!(plain(msg.text()), "[+] before");

        msg.render(&table);
        assert_eq!(plain(msg.text()), "[!] after");
        assert_eq!(msg.plain_text(), "[!] after");
        assert_eq!(msg.preprocessed(), "before");
    }

    #[test]
    fn test_discard_flag() {
        let mut msg = Message::new(Category::Debug, "noise");
        assert!(!msg.is_discarded());
        msg.discard();
        assert!(msg.is_discarded());
    }
}

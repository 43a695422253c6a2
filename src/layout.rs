//! # Ticket Layout Helpers
//!
//! Fixed-pitch text layout for the order ticket: greedy word wrapping,
//! item lines with a right-aligned price column, and label/value rows
//! aligned to a fixed column.
//!
//! Widths are measured in characters. The printer renders a fixed-pitch
//! font, so a character position maps directly to a column on paper.
//!
//! ## Wrap Width Asymmetry
//!
//! [`wrap`] checks `line + word` against the width, where the running
//! line carries its trailing separator space; [`wrap_priced`] instead
//! reserves one extra column for the separator before comparing. The two
//! break at slightly different points for the same input. Tickets
//! already in the field were printed with both behaviors, so they are
//! kept as distinct functions rather than unified.

/// Default wrap width for free-form note text.
pub const NOTES_WIDTH: usize = 32;

/// Default wrap width for item lines (full printable width).
pub const ITEM_WIDTH: usize = 42;

/// Column at which label/value rows start their value.
pub const LABEL_WIDTH: usize = 13;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Greedily wrap `text` into lines of at most `max_width` characters.
///
/// Words are split on single spaces and packed until the next word would
/// push the line past the width; the line is then closed (trimmed of its
/// separator spaces) and a new one started. Empty input produces a
/// single empty line. A word longer than the width overflows its line
/// rather than being split.
///
/// ## Example
///
/// ```
/// use comanda::layout::wrap;
///
/// assert_eq!(wrap("extra sauce on the side", 12), "extra sauce\non the side");
/// assert_eq!(wrap("", 32), "");
/// ```
pub fn wrap(text: &str, max_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        if char_len(&current) + char_len(word) <= max_width {
            current.push_str(word);
            current.push(' ');
        } else {
            lines.push(current.trim().to_string());
            current = format!("{} ", word);
        }
    }
    if !current.is_empty() {
        lines.push(current.trim().to_string());
    }
    lines.join("\n")
}

/// Wrap an item description and right-align its price on the last line.
///
/// Same greedy packing as [`wrap`], but the width check reserves one
/// column for the separator space. After wrapping, the last line is
/// padded with spaces to `max_width - price` characters and the price
/// appended, so the price's final character lands exactly at column
/// `max_width`. Empty text degrades to a price-only line. A price longer
/// than `max_width` overflows the line; it is not an error.
///
/// ## Example
///
/// ```
/// use comanda::layout::wrap_priced;
///
/// let line = wrap_priced("2 x Chicken Burger", "#5.50", 42);
/// assert_eq!(line.chars().count(), 42);
/// assert!(line.ends_with("#5.50"));
/// ```
pub fn wrap_priced(text: &str, price: &str, max_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        if char_len(&current) + char_len(word) + 1 <= max_width {
            current.push_str(word);
            current.push(' ');
        } else {
            lines.push(current.trim().to_string());
            current = format!("{} ", word);
        }
    }
    if !current.is_empty() {
        lines.push(current.trim().to_string());
    }
    let last = lines.pop().unwrap_or_default();
    let pad = max_width.saturating_sub(char_len(price));
    lines.push(format!("{:<pad$}{}", last, price));
    lines.join("\n")
}

/// Format a `label` / `value` row with the value starting at a fixed
/// column, so values align vertically across consecutive rows.
///
/// ## Example
///
/// ```
/// use comanda::layout::label_value;
///
/// assert_eq!(label_value("Type:", "Delivery"), "Type:        Delivery");
/// ```
pub fn label_value(label: &str, value: &str) -> String {
    format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
}

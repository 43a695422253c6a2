//! # MC-Print3 Escape Commands
//!
//! This module implements the escape-sequence commands understood by the
//! Star MC-Print3 thermal receipt printer in its line-mode emulation.
//!
//! ## Protocol Overview
//!
//! Commands are byte sequences starting with escape characters,
//! interleaved with printable text. The ticket renderer uses:
//!
//! - **Alignment**: left / center / right
//! - **Character size**: vertical and horizontal expansion
//! - **Emphasis**: bold on / off
//! - **Magnification**: character scale select
//! - **Paper control**: line feed and cut
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Two bytes: `ESC E`, `ESC F`, `ESC i`
//! - Multi-byte with parameters: `ESC i n1 n2`, `ESC GS a n`
//!
//! The printer interprets commands positionally within the byte stream,
//! so the renderer must emit them at exact points in the ticket.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Every command in this vocabulary begins with ESC (0x1B). This byte
/// signals the start of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used in combination with ESC for extended commands:
/// - `ESC GS` prefix for alignment and magnification
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC GS a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS a n |
/// | Hex     | 1B 1D 61 n |
/// | Decimal | 27 29 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use comanda::protocol::commands::{align, Alignment};
///
/// let center = align(Alignment::Center);
/// assert_eq!(center, vec![0x1B, 0x1D, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, GS, b'a', alignment as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (ESC i n1 n2)
///
/// Sets vertical and horizontal character expansion.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC i n1 n2 |
/// | Hex     | 1B 69 n1 n2 |
/// | Decimal | 27 105 n1 n2 |
///
/// ## Parameters
///
/// - `n1`: Vertical expansion (0 = 1x, 1 = 2x)
/// - `n2`: Horizontal expansion (0 = 1x, 1 = 2x)
///
/// ## Example
///
/// ```
/// use comanda::protocol::commands::size;
///
/// // Double height, normal width
/// let tall = size(1, 0);
/// assert_eq!(tall, vec![0x1B, 0x69, 0x01, 0x00]);
/// ```
pub fn size(height_mult: u8, width_mult: u8) -> Vec<u8> {
    vec![ESC, b'i', height_mult, width_mult]
}

/// Reset to normal size (1x1)
#[inline]
pub fn size_normal() -> Vec<u8> {
    size(0, 0)
}

/// Double height, normal width (2x1) - used for headers and banners
#[inline]
pub fn size_double_height() -> Vec<u8> {
    size(1, 0)
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Enable Bold/Emphasis (ESC E)
///
/// Turns on emphasized (bold) printing for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E |
/// | Hex     | 1B 45 |
/// | Decimal | 27 69 |
///
/// ## Example
///
/// ```
/// use comanda::protocol::commands::{bold_on, bold_off};
///
/// let mut data = Vec::new();
/// data.extend(bold_on());
/// data.extend(b"PAYMENT: PAID");
/// data.extend(bold_off());
/// ```
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E']
}

/// # Disable Bold/Emphasis (ESC F)
///
/// Turns off emphasized (bold) printing.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC F |
/// | Hex     | 1B 46 |
/// | Decimal | 27 70 |
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'F']
}

// ============================================================================
// CHARACTER MAGNIFICATION
// ============================================================================

/// # Select Character Magnification (ESC GS ! n)
///
/// Selects the character scale for subsequent text. The ticket uses it
/// only to return to the normal scale after the enlarged header.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS ! n |
/// | Hex     | 1B 1D 21 n |
/// | Decimal | 27 29 33 n |
///
/// ## Parameters
///
/// - `n = 0`: Normal scale
/// - Higher nibble/lower nibble encode width/height multipliers
pub fn magnify(n: u8) -> Vec<u8> {
    vec![ESC, GS, b'!', n]
}

/// Return to normal character scale
#[inline]
pub fn magnify_normal() -> Vec<u8> {
    magnify(0)
}

// ============================================================================
// PAPER CONTROL
// ============================================================================

/// # Print and Feed N Lines (ESC d n)
///
/// Prints any data in the line buffer and advances the paper by `n`
/// lines. Used as the trailer before cutting.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC d n |
/// | Hex     | 1B 64 n |
/// | Decimal | 27 100 n |
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Partial Cut (ESC i)
///
/// Performs a partial cut, leaving a small hinge connecting the ticket
/// to the roll so kitchen staff can tear it off.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC i |
/// | Hex     | 1B 69 |
/// | Decimal | 27 105 |
///
/// ## Note
///
/// The parameterless form is the MC-Print3 emulation cut. It shares its
/// lead bytes with `ESC i n1 n2` (character size); the printer
/// disambiguates by position, which is why this must be the final
/// command of the ticket.
#[inline]
pub fn cut() -> Vec<u8> {
    vec![ESC, b'i']
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x1D, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x1D, 0x61, 0x01]);
        assert_eq!(align(Alignment::Right), vec![0x1B, 0x1D, 0x61, 0x02]);
    }

    #[test]
    fn test_size() {
        assert_eq!(size(0, 0), vec![0x1B, 0x69, 0x00, 0x00]);
        assert_eq!(size(1, 0), vec![0x1B, 0x69, 0x01, 0x00]);
        assert_eq!(size_normal(), size(0, 0));
        assert_eq!(size_double_height(), size(1, 0));
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold_on(), vec![0x1B, 0x45]);
        assert_eq!(bold_off(), vec![0x1B, 0x46]);
    }

    #[test]
    fn test_magnify() {
        assert_eq!(magnify(0), vec![0x1B, 0x1D, 0x21, 0x00]);
        assert_eq!(magnify_normal(), vec![0x1B, 0x1D, 0x21, 0x00]);
    }

    #[test]
    fn test_feed_lines() {
        assert_eq!(feed_lines(0), vec![0x1B, 0x64, 0x00]);
        assert_eq!(feed_lines(2), vec![0x1B, 0x64, 0x02]);
        assert_eq!(feed_lines(255), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(), vec![0x1B, 0x69]);
    }
}

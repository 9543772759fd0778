//! Static lookup data: element colors, sub/superscript glyphs, R-group
//! aliases.
//!
//! All tables are plain `match` functions over `'static` data; nothing
//! here is mutated after compile time, so concurrent renders can share
//! them freely.

use crate::color::Rgba;

/// Default foreground used for bonds and for elements without a table
/// entry (the carbon gray).
pub const DEFAULT_DRAW_COLOR: Rgba = Rgba::opaque(58, 58, 58);

/// Per-element label color. Falls back to the default draw color for
/// elements without an assigned hue.
#[must_use]
pub fn element_color(symbol: &str) -> Rgba {
    match symbol {
        "C" | "H" => DEFAULT_DRAW_COLOR,
        "Cl" | "F" => Rgba::opaque(54, 180, 73),
        "P" => Rgba::opaque(230, 219, 69),
        "S" => Rgba::opaque(143, 160, 48),
        "Br" => Rgba::opaque(115, 84, 35),
        "N" => Rgba::opaque(93, 69, 230),
        "O" => Rgba::opaque(230, 93, 69),
        "Na" => Rgba::opaque(48, 143, 160),
        "I" => Rgba::opaque(230, 69, 205),
        _ => DEFAULT_DRAW_COLOR,
    }
}

/// Elements whose implicit-hydrogen label conventionally sits to the
/// left of the symbol (HO-, HS-, halogen acids) when the atom has no
/// bonded neighbors to steer the placement.
#[must_use]
pub fn hydrogen_forced_left(symbol: &str) -> bool {
    matches!(symbol, "O" | "Cl" | "S" | "Br" | "I" | "F")
}

/// Unicode subscript digit for `0..=9`, used for hydrogen counts.
#[must_use]
pub fn subscript_digit(digit: u32) -> Option<char> {
    match digit {
        0 => Some('\u{2080}'),
        1 => Some('\u{2081}'),
        2 => Some('\u{2082}'),
        3 => Some('\u{2083}'),
        4 => Some('\u{2084}'),
        5 => Some('\u{2085}'),
        6 => Some('\u{2086}'),
        7 => Some('\u{2087}'),
        8 => Some('\u{2088}'),
        9 => Some('\u{2089}'),
        _ => None,
    }
}

/// Whether a character is one of the subscript digits produced by
/// [`subscript_digit`]; such glyphs get a baseline shift when placed.
#[must_use]
pub fn is_subscript_glyph(c: char) -> bool {
    ('\u{2080}'..='\u{2089}').contains(&c)
}

/// Unicode superscript digit for a single decimal digit.
#[must_use]
fn superscript_digit(digit: u32) -> Option<char> {
    match digit {
        0 => Some('\u{2070}'),
        1 => Some('\u{00B9}'),
        2 => Some('\u{00B2}'),
        3 => Some('\u{00B3}'),
        4 => Some('\u{2074}'),
        5 => Some('\u{2075}'),
        6 => Some('\u{2076}'),
        7 => Some('\u{2077}'),
        8 => Some('\u{2078}'),
        9 => Some('\u{2079}'),
        _ => None,
    }
}

/// Render a non-negative number as a run of superscript digits
/// (isotope mass numbers, charge magnitudes, atom-map numbers).
#[must_use]
pub fn superscript_number(value: u32) -> String {
    let mut out = String::new();
    for c in value.to_string().chars() {
        if let Some(d) = c.to_digit(10).and_then(superscript_digit) {
            out.push(d);
        }
    }
    out
}

/// Superscript plus sign.
pub const SUPERSCRIPT_PLUS: char = '\u{207A}';
/// Superscript minus sign.
pub const SUPERSCRIPT_MINUS: char = '\u{207B}';

/// Textual alias for an R-group placeholder atom. Indices 90-94 carry
/// fixed biochemistry shorthand; everything else renders as `R<n>`.
#[must_use]
pub fn r_group_text(index: u32) -> String {
    match index {
        90 => "[B]".to_owned(),
        91 => "5'".to_owned(),
        92 => "3'".to_owned(),
        93 => "{C-TERM}".to_owned(),
        94 => "{N-TERM}".to_owned(),
        n => format!("R{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_elements_have_distinct_colors() {
        assert_ne!(element_color("O"), element_color("N"));
        assert_eq!(element_color("Cl"), element_color("F"));
        assert_eq!(element_color("Xx"), DEFAULT_DRAW_COLOR);
    }

    #[test]
    fn superscript_runs() {
        assert_eq!(superscript_number(13), "\u{00B9}\u{00B3}");
        assert_eq!(superscript_number(0), "\u{2070}");
    }

    #[test]
    fn subscript_glyph_detection() {
        let two = subscript_digit(2).unwrap();
        assert!(is_subscript_glyph(two));
        assert!(!is_subscript_glyph('2'));
    }

    #[test]
    fn r_group_aliases() {
        assert_eq!(r_group_text(91), "5'");
        assert_eq!(r_group_text(94), "{N-TERM}");
        assert_eq!(r_group_text(7), "R7");
    }
}

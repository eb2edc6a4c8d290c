//! Block glyph art for the backdrop statistic counters.

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Columns in every glyph.
pub const GLYPH_WIDTH: usize = 3;

type Glyph = [&'static str; GLYPH_HEIGHT];

/// Digits 0-9 (5 lines tall, 3 chars wide)
pub static DIGITS: [Glyph; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", " ██", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Plus sign suffix
pub const PLUS: Glyph = ["   ", " █ ", "███", " █ ", "   "];

/// Percent sign suffix
pub const PERCENT: Glyph = ["█ █", "  █", " █ ", "█  ", "█ █"];

const BLANK: Glyph = ["   "; GLYPH_HEIGHT];

/// Glyph for a counter character. Unsupported characters render blank.
pub fn glyph(ch: char) -> &'static Glyph {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        '+' => &PLUS,
        '%' => &PERCENT,
        _ => &BLANK,
    }
}

/// Build block art for a counter label such as `15+` or `100%`.
///
/// # Returns
/// A vector of [`GLYPH_HEIGHT`] strings, glyphs separated by one space.
pub fn build_counter_art(label: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            label
                .chars()
                .map(|ch| glyph(ch)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Display width, in columns, of the art for `label`.
pub fn art_width(label: &str) -> usize {
    let glyphs = label.chars().count();
    (glyphs * (GLYPH_WIDTH + 1)).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_uniform() {
        for g in DIGITS.iter().chain([&PLUS, &PERCENT]) {
            for row in g {
                assert_eq!(row.chars().count(), GLYPH_WIDTH);
            }
        }
    }

    #[test]
    fn test_build_counter_art() {
        let art = build_counter_art("15+");
        assert_eq!(art.len(), GLYPH_HEIGHT);
        assert_eq!(art[0], " █  ███    ");
        assert_eq!(art[2], " █  ███ ███");
        for line in &art {
            assert_eq!(line.chars().count(), art_width("15+"));
        }
    }

    #[test]
    fn test_unknown_chars_are_blank() {
        assert_eq!(glyph('x'), &BLANK);
        assert_eq!(build_counter_art("")[0], "");
        assert_eq!(art_width(""), 0);
    }
}

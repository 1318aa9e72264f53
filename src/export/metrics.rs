//! Glyph widths of the PDF core fonts for WinAnsi bytes 32..=255, in 1/1000 em
//! (Adobe Helvetica AFM metrics). Helvetica-Oblique shares the Helvetica widths.

const FIRST_CHAR: u8 = 32;

/// 控制字元沒有字形，用空白寬度
const FALLBACK_WIDTH: u16 = 278;

#[rustfmt::skip]
const HELVETICA: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 350,
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 350,
    556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Width of one WinAnsi byte in 1/1000 em.
pub fn glyph_width(bold: bool, byte: u8) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    byte
        .checked_sub(FIRST_CHAR)
        .and_then(|i| table.get(usize::from(i)))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Width of encoded text in points at the given font size.
pub fn text_width(bold: bool, text: &[u8], size: f32) -> f32 {
    let units: u32 = text.iter().map(|b| u32::from(glyph_width(bold, *b))).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_width_known_values() {
        assert_eq!(glyph_width(false, b' '), 278);
        assert_eq!(glyph_width(false, b'W'), 944);
        assert_eq!(glyph_width(false, b'i'), 222);
        assert_eq!(glyph_width(true, b'i'), 278);
        assert_eq!(glyph_width(false, 0x97), 1000);
        assert_eq!(glyph_width(true, 0xff), 556);
        assert_eq!(glyph_width(false, b'\t'), FALLBACK_WIDTH);
    }

    #[test]
    fn test_text_width_in_points() {
        // W + A = 944 + 667
        let width = text_width(false, b"WA", 10.0);
        assert!((width - 16.11).abs() < 1e-3);
        assert!(text_width(true, b"abc", 12.0) > text_width(false, b"abc", 12.0));
        assert_eq!(text_width(false, b"", 12.0), 0.0);
    }
}

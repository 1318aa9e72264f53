//! Printable one-page (or more) summary rendered with the PDF core fonts.

use crate::core::interpretation::interpretation;
use crate::export::json::ReportPayload;
use crate::export::metrics::text_width;
use crate::utils::error::{NumerologyError, Result};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

/// 1 mm 換算成 point；版面座標一律用 point
const MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH: f32 = 210.0 * MM;
const PAGE_HEIGHT: f32 = 297.0 * MM;
const SIDE_MARGIN: f32 = 10.0 * MM;
const TOP_MARGIN: f32 = 10.0 * MM;
const BOTTOM_MARGIN: f32 = 15.0 * MM;

/// 左右邊界之間可用的文字寬度
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * SIDE_MARGIN;

pub const DISCLAIMER: &str = "This report is for educational and entertainment purposes only.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

impl FontStyle {
    const ALL: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic];

    fn resource_name(&self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"F1",
            FontStyle::Bold => b"F2",
            FontStyle::Italic => b"F3",
        }
    }

    fn is_bold(&self) -> bool {
        matches!(self, FontStyle::Bold)
    }

    fn base_font(&self) -> &'static [u8] {
        match self {
            FontStyle::Regular => b"Helvetica",
            FontStyle::Bold => b"Helvetica-Bold",
            FontStyle::Italic => b"Helvetica-Oblique",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Layout unit. Font sizes, heights and gaps are all in points.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Single line; never wraps.
    Cell {
        text: String,
        style: FontStyle,
        size: f32,
        height: f32,
        align: Align,
    },
    /// Wrapped paragraph, one `height` per line; `\n` starts a new line.
    Paragraph {
        text: String,
        style: FontStyle,
        size: f32,
        height: f32,
    },
    Gap(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: Vec<u8>,
    pub style: FontStyle,
    pub size: f32,
    pub x: f32,
    pub baseline: f32,
}

/// 把 Unicode 轉成 WinAnsi 單位元組編碼，核心字型以外的字元回傳錯誤
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => Ok(c as u8),
            '\u{a0}'..='\u{ff}' => Ok(c as u32 as u8),
            '€' => Ok(0x80),
            '‚' => Ok(0x82),
            'ƒ' => Ok(0x83),
            '„' => Ok(0x84),
            '…' => Ok(0x85),
            '†' => Ok(0x86),
            '‡' => Ok(0x87),
            'ˆ' => Ok(0x88),
            '‰' => Ok(0x89),
            '‘' => Ok(0x91),
            '’' => Ok(0x92),
            '“' => Ok(0x93),
            '”' => Ok(0x94),
            '•' => Ok(0x95),
            '–' => Ok(0x96),
            '—' => Ok(0x97),
            '˜' => Ok(0x98),
            '™' => Ok(0x99),
            'Š' => Ok(0x8a),
            '‹' => Ok(0x8b),
            '›' => Ok(0x9b),
            'Œ' => Ok(0x8c),
            'Ž' => Ok(0x8e),
            'š' => Ok(0x9a),
            'œ' => Ok(0x9c),
            'ž' => Ok(0x9e),
            'Ÿ' => Ok(0x9f),
            '\t' | '\r' | '\n' => Ok(b' '),
            other => Err(NumerologyError::PdfError {
                message: format!(
                    "character '{}' (U+{:04X}) cannot be encoded with the built-in Helvetica font",
                    other, other as u32
                ),
            }),
        })
        .collect()
}

/// Greedy word wrap measured with the font metrics; words wider than
/// `max_width` points are split between glyphs.
pub fn wrap_line(text: &[u8], style: FontStyle, size: f32, max_width: f32) -> Vec<Vec<u8>> {
    let fits = |line: &[u8]| text_width(style.is_bold(), line, size) <= max_width;
    let mut lines = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    for word in text.split(|b| *b == b' ').filter(|w| !w.is_empty()) {
        let mut candidate = current.clone();
        if !candidate.is_empty() {
            candidate.push(b' ');
        }
        candidate.extend_from_slice(word);
        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        for byte in word {
            current.push(*byte);
            // 單一字形至少占一行
            if current.len() > 1 && !fits(&current) {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(*byte);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct Cursor {
    pages: Vec<Vec<PlacedLine>>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: PAGE_HEIGHT - TOP_MARGIN,
        }
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y - height < BOTTOM_MARGIN {
            self.pages.push(Vec::new());
            self.y = PAGE_HEIGHT - TOP_MARGIN;
        }
    }

    fn place(&mut self, text: Vec<u8>, style: FontStyle, size: f32, height: f32, align: Align) {
        self.ensure_room(height);
        let width = text_width(style.is_bold(), &text, size);
        let x = match align {
            Align::Left => SIDE_MARGIN,
            Align::Center => ((PAGE_WIDTH - width) / 2.0).max(SIDE_MARGIN),
        };
        // 基線放在行高中間偏下
        let baseline = self.y - (height + size * 0.7) / 2.0;
        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine {
                text,
                style,
                size,
                x,
                baseline,
            });
        }
        self.y -= height;
    }
}

/// Positions every block on A4 pages, breaking pages at the bottom margin.
pub fn layout(blocks: &[Block]) -> Result<Vec<Vec<PlacedLine>>> {
    let mut cursor = Cursor::new();

    for block in blocks {
        match block {
            Block::Cell {
                text,
                style,
                size,
                height,
                align,
            } => {
                let encoded = encode_win_ansi(text)?;
                cursor.place(encoded, *style, *size, *height, *align);
            }
            Block::Paragraph {
                text,
                style,
                size,
                height,
            } => {
                for part in text.split('\n') {
                    let encoded = encode_win_ansi(part.trim_end_matches('\r'))?;
                    for line in wrap_line(&encoded, *style, *size, TEXT_WIDTH) {
                        cursor.place(line, *style, *size, *height, Align::Left);
                    }
                }
            }
            Block::Gap(h) => {
                cursor.y -= h;
            }
        }
    }

    Ok(cursor.pages)
}

fn paragraph(text: String) -> Block {
    Block::Paragraph {
        text,
        style: FontStyle::Regular,
        size: 11.0,
        height: 7.0 * MM,
    }
}

fn with_meaning(label: &str, n: u64) -> String {
    format!("{}: {} — {}", label, n, interpretation(n))
}

/// 報告內容：標題、輸入設定、核心數字與免責聲明
pub fn report_blocks(payload: &ReportPayload) -> Vec<Block> {
    let mut blocks = vec![
        Block::Cell {
            text: "Numerology Report".to_string(),
            style: FontStyle::Bold,
            size: 16.0,
            height: 10.0 * MM,
            align: Align::Center,
        },
        Block::Gap(4.0 * MM),
    ];

    if let Some(name) = &payload.input_name {
        blocks.push(paragraph(format!("Name: {}", name)));
    }
    blocks.push(paragraph(format!("System: {}", payload.system)));
    blocks.push(paragraph(format!("Keep master numbers: {}", payload.keep_master)));
    blocks.push(paragraph(format!("Digits-as-numbers: {}", payload.digits_as_numbers)));
    blocks.push(paragraph(format!("Y as vowel: {}", payload.y_as_vowel)));
    if let Some(date) = &payload.birth_date {
        blocks.push(paragraph(format!("Birth date: {}", date)));
    }
    blocks.push(paragraph(format!("Generated at (UTC): {}", payload.generated_at)));

    blocks.push(Block::Gap(3.0 * MM));
    blocks.push(Block::Cell {
        text: "Core Numbers".to_string(),
        style: FontStyle::Bold,
        size: 12.0,
        height: 8.0 * MM,
        align: Align::Left,
    });

    if let Some(totals) = &payload.totals {
        blocks.push(paragraph(with_meaning("Expression/Destiny", totals.expression_final)));
        blocks.push(paragraph(with_meaning("Soul Urge (Vowels)", totals.soul_urge_final)));
        blocks.push(paragraph(with_meaning(
            "Personality (Consonants)",
            totals.personality_final,
        )));
    }
    if let Some(lp) = &payload.life_path {
        blocks.push(paragraph(with_meaning("Life Path", lp.final_number)));
    }

    blocks.push(Block::Gap(3.0 * MM));
    blocks.push(Block::Paragraph {
        text: DISCLAIMER.to_string(),
        style: FontStyle::Italic,
        size: 10.0,
        height: 6.0 * MM,
    });

    blocks
}

/// Renders the payload to PDF bytes. Fails only when some text cannot be
/// encoded for the core fonts.
pub fn report_pdf(payload: &ReportPayload) -> Result<Vec<u8>> {
    let pages = layout(&report_blocks(payload))?;

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let info_id = Ref::new(3);
    let font_ids: Vec<(FontStyle, Ref)> = FontStyle::ALL
        .iter()
        .enumerate()
        .map(|(i, style)| (*style, Ref::new(4 + i as i32)))
        .collect();
    let first_page = 4 + font_ids.len() as i32;
    let page_ids: Vec<Ref> = (0..pages.len())
        .map(|i| Ref::new(first_page + 2 * i as i32))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    for (style, id) in &font_ids {
        pdf.type1_font(*id)
            .base_font(Name(style.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (lines, page_id) in pages.iter().zip(&page_ids) {
        let content_id = Ref::new(page_id.get() + 1);

        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (style, id) in &font_ids {
                fonts.pair(Name(style.resource_name()), *id);
            }
        }
        page.finish();

        let mut content = Content::new();
        for line in lines {
            content.begin_text();
            content.set_font(Name(line.style.resource_name()), line.size);
            content.next_line(line.x, line.baseline);
            content.show(Str(&line.text));
            content.end_text();
        }
        pdf.stream(content_id, &content.finish());
    }

    pdf.document_info(info_id)
        .title(TextStr("Numerology Report"))
        .producer(TextStr("numerology-report"));

    tracing::debug!("Rendered PDF with {} page(s)", pages.len());
    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::build_report;
    use crate::domain::model::{Settings, Subject};
    use chrono::{NaiveDate, Utc};

    fn payload(name: &str) -> ReportPayload {
        let subject = Subject::new(Some(name.to_string()), NaiveDate::from_ymd_opt(1990, 5, 15));
        ReportPayload::from_report(&build_report(subject, Settings::default(), Utc::now()))
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Ab 1").unwrap(), b"Ab 1".to_vec());
        assert_eq!(encode_win_ansi("é").unwrap(), vec![0xe9]);
        assert_eq!(encode_win_ansi("—").unwrap(), vec![0x97]);
        assert!(encode_win_ansi("Жанна").is_err());
    }

    #[test]
    fn test_encode_win_ansi_upper_punctuation() {
        assert_eq!(
            encode_win_ansi("ƒ†‡ˆ‰‹˜›").unwrap(),
            vec![0x83, 0x86, 0x87, 0x88, 0x89, 0x8b, 0x98, 0x9b]
        );
        assert_eq!(encode_win_ansi("a\r\nb").unwrap(), b"a  b".to_vec());
    }

    #[test]
    fn test_wrap_line() {
        // 10pt Helvetica: a/b = 5.56, c = 5.0, space = 2.78
        let lines = wrap_line(b"aaa bbb ccc", FontStyle::Regular, 10.0, 40.0);
        assert_eq!(lines, vec![b"aaa bbb".to_vec(), b"ccc".to_vec()]);

        let lines = wrap_line(b"abcdefghij", FontStyle::Regular, 10.0, 20.0);
        assert_eq!(lines, vec![b"abc".to_vec(), b"defg".to_vec(), b"hij".to_vec()]);

        assert_eq!(
            wrap_line(b"", FontStyle::Regular, 10.0, 20.0),
            vec![Vec::<u8>::new()]
        );
    }

    #[test]
    fn test_wrap_line_measures_wide_capitals() {
        // W = 9.44pt at 10pt
        let lines = wrap_line(b"WWWW", FontStyle::Regular, 10.0, 20.0);
        assert_eq!(lines, vec![b"WW".to_vec(), b"WW".to_vec()]);
    }

    #[test]
    fn test_all_lines_stay_inside_right_margin() {
        for name in [
            "W".repeat(85),
            "MAXIMILIAN WOLFGANG ".repeat(8),
            "Bartholomew ".repeat(40),
        ] {
            let pages = layout(&report_blocks(&payload(&name))).unwrap();
            for line in pages.iter().flatten() {
                let right_edge = line.x + text_width(line.style.is_bold(), &line.text, line.size);
                assert!(
                    right_edge <= PAGE_WIDTH - SIDE_MARGIN + 1e-3,
                    "line ends at {}pt",
                    right_edge
                );
            }
        }
    }

    #[test]
    fn test_newline_in_name_starts_new_line() {
        let pages = layout(&report_blocks(&payload("Ada\r\nLovelace"))).unwrap();
        let lines: Vec<&[u8]> = pages.iter().flatten().map(|l| l.text.as_slice()).collect();
        let name_at = lines.iter().position(|l| *l == b"Name: Ada").unwrap();
        assert_eq!(lines[name_at + 1], b"Lovelace");
    }

    #[test]
    fn test_report_pdf_contains_core_numbers() {
        let bytes = report_pdf(&payload("Ada Lovelace")).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"Numerology Report"));
        assert!(contains(&bytes, b"Name: Ada Lovelace"));
        assert!(contains(&bytes, DISCLAIMER.as_bytes()));
        assert!(contains(&bytes, b"Helvetica-Bold"));
    }

    #[test]
    fn test_core_number_lines_use_win_ansi_dash() {
        let pages = layout(&report_blocks(&payload("Ada Lovelace"))).unwrap();
        let lines: Vec<&PlacedLine> = pages.iter().flatten().collect();

        let life_path = lines
            .iter()
            .find(|l| l.text.starts_with(b"Life Path: 3"))
            .unwrap();
        assert!(life_path.text.contains(&0x97));
        assert!(lines.iter().any(|l| l.text.starts_with(b"Expression/Destiny: 9")));
    }

    #[test]
    fn test_report_pdf_fails_on_unencodable_name() {
        let err = report_pdf(&payload("Жанна Иванова")).unwrap_err();
        assert!(matches!(err, NumerologyError::PdfError { .. }));
        assert!(err.to_string().starts_with("PDF generation failed:"));
    }

    #[test]
    fn test_long_name_flows_onto_more_pages() {
        let long_name = "Bartholomew ".repeat(600);
        let pages = layout(&report_blocks(&payload(&long_name))).unwrap();
        assert!(pages.len() > 1);
        for page in &pages {
            for line in page {
                assert!(line.baseline > BOTTOM_MARGIN - 7.0 * MM);
            }
        }
    }

    #[test]
    fn test_short_report_fits_one_page() {
        let pages = layout(&report_blocks(&payload("Ada"))).unwrap();
        assert_eq!(pages.len(), 1);
    }
}

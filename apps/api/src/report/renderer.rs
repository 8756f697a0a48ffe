//! PDF assembly for the proposal report (建築提案書).
//!
//! Layout: title and generation date, the cost-comparison table (one line per
//! structural type), then one section per proposal with its full generated
//! text line-wrapped. A4 portrait, external Japanese-capable TrueType font.
//! Any font or encoding problem fails the render — a visible error beats a
//! corrupted download.

use std::io::Cursor;

use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::errors::AppError;
use crate::models::proposal::ProposalSet;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
/// 1 pt = 0.3528 mm
const MM_PER_PT: f32 = 0.3528;

const TITLE_PT: f32 = 14.0;
const HEADING_PT: f32 = 11.0;
const BODY_PT: f32 = 10.0;

/// Renders the proposal set as PDF bytes. The font at `font_path` must cover
/// the Japanese character set used in the rule tables and generated text.
pub fn render_report(set: &ProposalSet, font_path: &str) -> Result<Vec<u8>, AppError> {
    let font_bytes = std::fs::read(font_path)
        .map_err(|e| AppError::Render(format!("cannot read font file '{font_path}': {e}")))?;

    let (doc, page, layer) = PdfDocument::new(
        "建築提案書",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_external_font(Cursor::new(font_bytes))
        .map_err(|e| AppError::Render(format!("cannot embed font '{font_path}': {e}")))?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        font: &font,
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    writer.line("建築提案書", TITLE_PT, 10.0);
    let today = chrono::Local::now().date_naive();
    writer.line(&format!("作成日：{today}"), BODY_PT, 10.0);
    writer.space(6.0);

    writer.line("【構造別 概算費用 比較表】", HEADING_PT, 8.0);
    for row in &set.cost_table {
        writer.line(
            &format!(
                "{}: 延床 {}㎡ / 単価 {} 円 → 概算費用 {} 円",
                row.structure.label(),
                row.floor_area_m2,
                row.unit_price,
                format_yen(row.estimated_cost)
            ),
            BODY_PT,
            7.0,
        );
    }
    writer.space(5.0);

    let body_width_em = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / (BODY_PT * MM_PER_PT);
    for record in &set.records {
        writer.line(
            &format!("【{} の提案】", record.structure.label()),
            HEADING_PT,
            8.0,
        );
        for line in crate::report::metrics::wrap_text(&record.proposal_text, body_width_em) {
            writer.line(&line, BODY_PT, 5.5);
        }
        writer.space(4.0);
    }

    writer.finish();
    doc.save_to_bytes()
        .map_err(|e| AppError::Render(format!("PDF serialization failed: {e}")))
}

/// Formats a yen amount with thousands separators (105000000 → 105,000,000).
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Cursor over the current page; starts a fresh page when a line would land
/// below the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    font: &'a IndirectFontRef,
    y_mm: f32,
}

impl PageWriter<'_> {
    fn line(&mut self, text: &str, size_pt: f32, line_height_mm: f32) {
        if self.y_mm - line_height_mm < BOTTOM_MARGIN_MM {
            self.new_page();
        }
        self.y_mm -= line_height_mm;
        if !text.is_empty() {
            self.layer
                .use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.y_mm), self.font);
        }
    }

    fn space(&mut self, height_mm: f32) {
        self.y_mm -= height_mm;
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn finish(self) {}
}

//! Word document assembly for claim chart export
//!
//! Builds the whole Evidence of Use document in memory and packs it into
//! .docx bytes. Narrative sections are left blank for the analyst.

use docx_rs::{
    AlignmentType, BreakType, Docx, HeightRule, PageOrientationType, Paragraph, Run, Table,
    TableCell, TableRow, WidthType,
};
use std::borrow::Cow;
use std::io::Cursor;

use crate::chart::{build_claim_chart, ClaimRow};
use crate::record::PatentRecord;

/// MIME type of the exported document
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

// Page and table geometry, in twentieths of a point (1 inch = 1440)
const LETTER_LONG_EDGE: u32 = 15840;
const LETTER_SHORT_EDGE: u32 = 12240;
const CHART_COLUMN_WIDTH: usize = 5760;
const SUMMARY_KEY_WIDTH: usize = 2880;
const SUMMARY_VALUE_WIDTH: usize = 10080;
const MIN_ROW_HEIGHT: f32 = 576.0;

// Font sizes, in half-points
const TITLE_SIZE: usize = 56;
const COVER_NOTICE_SIZE: usize = 32;
const HEADING_SIZE: usize = 32;
const SECTION_SIZE: usize = 28;
const BODY_SIZE: usize = 22;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to pack claim chart document: {0}")]
    Pack(String),
}

/// Download name for a patent's claim chart
pub fn chart_filename(publication_number: &str) -> String {
    format!("{}_claim_chart.docx", publication_number)
}

/// Evidence of Use report layout
pub struct ClaimChartDocument {
    company_name: String,
}

impl ClaimChartDocument {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
        }
    }

    /// Assemble the report for `record` using only the selected claim blocks
    pub fn assemble<S: AsRef<str>>(
        &self,
        record: &PatentRecord,
        selected_claims: &[S],
    ) -> Result<Vec<u8>, DocumentError> {
        let rows = build_claim_chart(selected_claims);
        tracing::info!(
            "Assembling claim chart for {}: {} claims, {} rows",
            record.publication_number,
            selected_claims.len(),
            rows.len()
        );

        let docx = Docx::new()
            .page_size(LETTER_LONG_EDGE, LETTER_SHORT_EDGE)
            .page_orient(PageOrientationType::Landscape);

        let docx = self.cover_page(docx);
        let docx = summary_page(docx, record, selected_claims.len());
        let docx = defendant_page(docx, &record.publication_number);
        let docx = accused_product_page(docx);
        let docx = chart_page(docx, &record.publication_number, &rows);

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| DocumentError::Pack(e.to_string()))?;

        Ok(buf.into_inner())
    }

    fn cover_page(&self, docx: Docx) -> Docx {
        docx.add_paragraph(centered(&self.company_name, TITLE_SIZE))
            .add_paragraph(centered("Evidence of Use (EoU) Analysis", TITLE_SIZE))
            .add_paragraph(centered("Strictly Confidential", COVER_NOTICE_SIZE))
            .add_paragraph(page_break())
    }
}

// ============================================================================
// Pages
// ============================================================================

fn summary_page(docx: Docx, record: &PatentRecord, claim_count: usize) -> Docx {
    let rows = record
        .summary_fields(claim_count)
        .into_iter()
        .map(|(key, value)| {
            TableRow::new(vec![
                text_cell(key, SUMMARY_KEY_WIDTH),
                text_cell(&value, SUMMARY_VALUE_WIDTH),
            ])
        })
        .collect();

    let table = Table::new(rows).set_grid(vec![SUMMARY_KEY_WIDTH, SUMMARY_VALUE_WIDTH]);

    docx.add_paragraph(heading(&format!(
        "Patent Summary for {}",
        record.publication_number
    )))
    .add_table(table)
    .add_paragraph(page_break())
}

fn defendant_page(docx: Docx, publication_number: &str) -> Docx {
    docx.add_paragraph(centered(
        &format!(
            "Preliminary Analysis of Infringement of U.S. Patent No. {}",
            publication_number
        ),
        BODY_SIZE,
    ))
    .add_paragraph(centered("Strictly Confidential", BODY_SIZE))
    .add_paragraph(Paragraph::new())
    .add_paragraph(section_title("About the Defendant: Company Name"))
    .add_paragraph(Paragraph::new())
    .add_paragraph(Paragraph::new())
    .add_paragraph(Paragraph::new())
    .add_paragraph(Paragraph::new().add_run(text_run("Source:").bold()))
    .add_paragraph(page_break())
}

fn accused_product_page(docx: Docx) -> Docx {
    docx.add_paragraph(section_title("Accused Instrumentality: Product Name"))
        .add_paragraph(Paragraph::new())
        .add_paragraph(Paragraph::new())
        .add_paragraph(Paragraph::new())
        .add_paragraph(
            Paragraph::new().add_run(text_run("Source:").bold().size(BODY_SIZE)),
        )
        .add_paragraph(page_break())
}

fn chart_page(docx: Docx, publication_number: &str, rows: &[ClaimRow]) -> Docx {
    let mut table_rows = Vec::with_capacity(rows.len() + 1);
    table_rows.push(chart_row("Claim Element", "Evidence"));
    table_rows.extend(rows.iter().map(|row| chart_row(&row.label(), "")));

    let table = Table::new(table_rows).set_grid(vec![CHART_COLUMN_WIDTH, CHART_COLUMN_WIDTH]);

    docx.add_paragraph(heading(&format!("Claim Chart for {}", publication_number)))
        .add_table(table)
}

// ============================================================================
// Building blocks
// ============================================================================

/// Drop control characters XML 1.0 does not allow (tab, LF and CR are kept)
pub fn xml_safe(text: &str) -> Cow<'_, str> {
    let forbidden = |c: char| c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r');
    if text.chars().any(forbidden) {
        Cow::Owned(text.chars().filter(|&c| !forbidden(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

fn text_run(text: &str) -> Run {
    Run::new().add_text(xml_safe(text))
}

fn centered(text: &str, size: usize) -> Paragraph {
    Paragraph::new()
        .add_run(text_run(text).bold().size(size))
        .align(AlignmentType::Center)
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(text_run(text).bold().size(HEADING_SIZE))
}

fn section_title(text: &str) -> Paragraph {
    Paragraph::new().add_run(
        text_run(text)
            .bold()
            .underline("single")
            .size(SECTION_SIZE),
    )
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

fn text_cell(text: &str, width: usize) -> TableCell {
    let paragraph = if text.is_empty() {
        Paragraph::new()
    } else {
        Paragraph::new().add_run(text_run(text))
    };
    TableCell::new()
        .add_paragraph(paragraph)
        .width(width, WidthType::Dxa)
}

fn chart_row(element: &str, evidence: &str) -> TableRow {
    TableRow::new(vec![
        text_cell(element, CHART_COLUMN_WIDTH),
        text_cell(evidence, CHART_COLUMN_WIDTH),
    ])
    .row_height(MIN_ROW_HEIGHT)
    .height_rule(HeightRule::AtLeast)
}

use crate::error::{EvidexError, Result};
use crate::models::Page;

pub struct DocxExtractor;

impl DocxExtractor {
    /// Flatten a DOCX body into a single page.
    ///
    /// All top-level paragraphs come first, in document order, followed by
    /// every table cell (table, then row, then cell). Tables therefore lose
    /// their position relative to the surrounding paragraphs; downstream
    /// offsets depend on this layout, so keep it.
    pub fn extract(bytes: &[u8]) -> Result<Vec<Page>> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| EvidexError::Docx(format!("DOCX parse error: {e}")))?;

        let mut paragraphs: Vec<String> = Vec::new();
        let mut cells: Vec<String> = Vec::new();

        for child in &docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => {
                    paragraphs.push(Self::extract_paragraph(paragraph));
                }
                docx_rs::DocumentChild::Table(table) => {
                    Self::extract_table_cells(table, &mut cells);
                }
                _ => {}
            }
        }

        paragraphs.extend(cells);
        let text = paragraphs.join("\n");
        let text = text.trim();

        if text.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![Page::new(1, text)])
    }

    fn extract_paragraph(paragraph: &docx_rs::Paragraph) -> String {
        let mut content = String::new();
        Self::push_paragraph_children(&paragraph.children, &mut content);
        content
    }

    fn push_paragraph_children(children: &[docx_rs::ParagraphChild], content: &mut String) {
        for para_child in children {
            match para_child {
                docx_rs::ParagraphChild::Run(run) => {
                    for run_child in &run.children {
                        match run_child {
                            docx_rs::RunChild::Text(text) => content.push_str(&text.text),
                            docx_rs::RunChild::Tab(_) => content.push('\t'),
                            docx_rs::RunChild::Break(_) => content.push('\n'),
                            _ => {}
                        }
                    }
                }
                docx_rs::ParagraphChild::Hyperlink(link) => {
                    Self::push_paragraph_children(&link.children, content);
                }
                _ => {}
            }
        }
    }

    fn extract_table_cells(table: &docx_rs::Table, cells: &mut Vec<String>) {
        for table_child in &table.rows {
            let docx_rs::TableChild::TableRow(row) = table_child;
            for row_child in &row.cells {
                let docx_rs::TableRowChild::TableCell(cell) = row_child;
                let cell_paragraphs: Vec<String> = cell
                    .children
                    .iter()
                    .filter_map(|cell_child| match cell_child {
                        docx_rs::TableCellContent::Paragraph(para) => {
                            Some(Self::extract_paragraph(para))
                        }
                        _ => None,
                    })
                    .collect();
                cells.push(cell_paragraphs.join("\n"));
            }
        }
    }
}

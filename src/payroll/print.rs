use tracing::{debug, info};

use super::rows::{ReportRow, TABLE_COLUMNS};
use super::view::PayrollView;

pub const DOCUMENT_TITLE: &str = "Payroll &amp; History";

const PRINT_STYLE: &str = "body { padding: 20px; }
      @media print {
        body { margin: 0; padding: 15px; }
        table { width: 100%; border-collapse: collapse; }
        td, th { padding: 8px; border: 1px solid #ddd; }
      }";

/// A freshly opened output context, e.g. a browser window.
pub trait PrintDocument {
    fn write(&mut self, html: &str);
    fn close(&mut self);
}

/// Host platform hook for printing.
pub trait PrintTarget {
    type Document: PrintDocument;

    /// `None` when the platform refuses to open a new context (popup
    /// blocked, dialog dismissed).
    fn open(&mut self) -> Option<Self::Document>;

    fn print(&mut self, document: Self::Document);
}

pub fn render_table_html(rows: &[ReportRow]) -> String {
    let mut html = String::from("<table>\n  <thead>\n    <tr>");
    for column in TABLE_COLUMNS {
        html.push_str(&format!("<th>{column}</th>"));
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for row in rows {
        html.push_str("    <tr>");
        for cell in row.cells() {
            html.push_str(&format!("<td>{}</td>", ammonia::clean_text(&cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("  </tbody>\n</table>");
    html
}

pub fn print_document(table_html: &str, base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    format!(
        r#"<html>
  <head>
    <title>{DOCUMENT_TITLE}</title>
    <link rel="stylesheet" href="{base_url}/styles.css" />
    <style>
      {PRINT_STYLE}
    </style>
  </head>
  <body>
    {table_html}
  </body>
</html>
"#
    )
}

/// Sends the rendered table to the print target. Returns whether anything
/// was printed; a view without a table or a target that will not open is
/// quietly skipped.
pub fn print_view<T: PrintTarget>(view: &PayrollView, target: &mut T, base_url: &str) -> bool {
    let PayrollView::Table { rows, .. } = view else {
        debug!("Nothing to print");
        return false;
    };

    let Some(mut document) = target.open() else {
        debug!("Print target unavailable");
        return false;
    };

    document.write(&print_document(&render_table_html(rows), base_url));
    document.close();
    target.print(document);
    info!(rows = rows.len(), "Printed payroll history");
    true
}

/// Keeps printed documents in memory; used to hand the page back over HTTP.
#[derive(Debug, Default)]
pub struct CapturedPrints {
    pub printed: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CapturedDocument {
    html: String,
    closed: bool,
}

impl PrintDocument for CapturedDocument {
    fn write(&mut self, html: &str) {
        if !self.closed {
            self.html.push_str(html);
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

impl PrintTarget for CapturedPrints {
    type Document = CapturedDocument;

    fn open(&mut self) -> Option<Self::Document> {
        Some(CapturedDocument::default())
    }

    fn print(&mut self, document: Self::Document) {
        self.printed.push(document.html);
    }
}

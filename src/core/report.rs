use crate::domain::model::Deal;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook};

pub const REPORT_HEADERS: [&str; 5] = ["Deal Name", "Amount", "Stage", "Close Date", "Created Date"];

/// Excel worksheet names are capped at 31 characters.
const SHEET_NAME_LIMIT: usize = 31;
const MAX_COLUMN_WIDTH: usize = 50;
const HEADER_FILL_COLOR: u32 = 0x366092;
const HEADER_FONT_COLOR: u32 = 0xFFFFFF;

/// Renders deal lists into a single-sheet styled workbook and writes it
/// through the storage port. One file per call, path timestamped to the
/// second; a collision within the same second is accepted.
pub struct ReportExporter<S: Storage> {
    storage: S,
    output_dir: String,
}

impl<S: Storage> ReportExporter<S> {
    pub fn new(storage: S, output_dir: String) -> Self {
        Self {
            storage,
            output_dir,
        }
    }

    pub async fn export(&self, pipeline_name: &str, deals: &[Deal]) -> Result<String> {
        let workbook_data = render_workbook(pipeline_name, deals)?;
        let filename = report_filename(pipeline_name, Local::now());

        tracing::debug!(
            "Writing workbook ({} bytes) with {} data rows",
            workbook_data.len(),
            deals.len()
        );
        self.storage.write_file(&filename, &workbook_data).await?;

        Ok(format!("{}/{}", self.output_dir, filename))
    }
}

/// Worksheet title: the pipeline name truncated to the Excel limit,
/// on a char boundary.
pub fn sheet_title(pipeline_name: &str) -> String {
    pipeline_name.chars().take(SHEET_NAME_LIMIT).collect()
}

pub fn report_filename(pipeline_name: &str, at: DateTime<Local>) -> String {
    format!(
        "{}_{}.xlsx",
        pipeline_name.replace(' ', "_"),
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Width for one column: widest rendered value (header included) plus
/// padding, capped.
pub fn column_width(max_len: usize) -> usize {
    (max_len + 2).min(MAX_COLUMN_WIDTH)
}

fn column_widths(deals: &[Deal]) -> [usize; 5] {
    let mut widths = [0usize; 5];
    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        widths[col] = header.chars().count();
    }
    for deal in deals {
        for (col, value) in deal.display_fields().iter().enumerate() {
            widths[col] = widths[col].max(value.chars().count());
        }
    }
    widths.map(column_width)
}

fn render_workbook(pipeline_name: &str, deals: &[Deal]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_title(pipeline_name))?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(HEADER_FONT_COLOR)
        .set_background_color(HEADER_FILL_COLOR);

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (row, deal) in deals.iter().enumerate() {
        for (col, value) in deal.display_fields().iter().enumerate() {
            worksheet.write_string((row + 1) as u32, col as u16, *value)?;
        }
    }

    for (col, width) in column_widths(deals).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}

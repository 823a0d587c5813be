//! Source file readers.
//!
//! Bid opening tables arrive as PDF exports, CSV dumps, or Excel workbooks.
//! Each reader produces the same shape: a list of raw string rows plus any
//! per-row warnings collected along the way.

use std::path::Path;

use calamine::{open_workbook_from_rs, DataType, Reader, Xlsx};
use regex::Regex;
use tendara_utils::{TendaraError, TendaraResult};
use uuid::Uuid;

/// Supported source file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Csv,
    Excel, // XLSX/XLS
}

impl SourceFormat {
    /// Detect format from file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" => Some(Self::Excel),
            _ => None,
        }
    }
}

/// Raw table scraped from one source file.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub id: Uuid,
    pub source: String,
    pub format: SourceFormat,
    pub rows: Vec<Vec<String>>,
    /// Full document text, kept for PDF sources so notice-style documents
    /// can still be field-extracted when they carry no table.
    pub text: Option<String>,
    pub warnings: Vec<String>,
}

/// Multi-format table reader.
pub struct SourceReader {
    /// Column boundary within a PDF text line: two or more spaces or a tab run.
    column_splitter: Regex,
}

impl SourceReader {
    pub fn new() -> Self {
        Self {
            column_splitter: Regex::new(r" {2,}|\t+").unwrap(),
        }
    }

    /// Reads one source file into a raw table.
    pub fn read(&self, path: &Path) -> TendaraResult<ParsedTable> {
        let format = SourceFormat::from_extension(path).ok_or_else(|| {
            TendaraError::validation(
                "file_type",
                format!("Unsupported source file: {}", path.display()),
            )
        })?;

        let data = std::fs::read(path)
            .map_err(|e| TendaraError::source_unreadable(path.display().to_string(), e.to_string()))?;
        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        match format {
            SourceFormat::Pdf => self.read_pdf(source, &data),
            SourceFormat::Csv => self.read_csv(source, &data),
            SourceFormat::Excel => self.read_excel(source, &data),
        }
    }

    /// PDF text is reconstructed into rows by splitting each line on runs of
    /// whitespace; lines with a single fragment are prose, not table rows.
    fn read_pdf(&self, source: String, data: &[u8]) -> TendaraResult<ParsedTable> {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| TendaraError::extraction(format!("Failed to extract text from {source}: {e}")))?;

        let rows: Vec<Vec<String>> = text
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let cells: Vec<String> = self
                    .column_splitter
                    .split(trimmed)
                    .map(|c| c.to_string())
                    .collect();
                if cells.len() >= 2 {
                    Some(cells)
                } else {
                    None
                }
            })
            .collect();

        Ok(ParsedTable {
            id: Uuid::new_v4(),
            source,
            format: SourceFormat::Pdf,
            rows,
            text: Some(text),
            warnings: Vec::new(),
        })
    }

    /// CSV dumps carry no stable header, so every record is kept as a raw
    /// row; the table parser finds the header line itself.
    fn read_csv(&self, source: String, data: &[u8]) -> TendaraResult<ParsedTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    rows.push(record.iter().map(|c| c.to_string()).collect());
                }
                Err(e) => {
                    warnings.push(format!("Row {}: parse error - {}", idx + 1, e));
                }
            }
        }

        Ok(ParsedTable {
            id: Uuid::new_v4(),
            source,
            format: SourceFormat::Csv,
            rows,
            text: None,
            warnings,
        })
    }

    fn read_excel(&self, source: String, data: &[u8]) -> TendaraResult<ParsedTable> {
        let cursor = std::io::Cursor::new(data.to_vec());
        let mut workbook: Xlsx<_> = open_workbook_from_rs(cursor)
            .map_err(|e| TendaraError::extraction(format!("Failed to open workbook {source}: {e}")))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| TendaraError::extraction(format!("No sheets found in {source}")))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .ok_or_else(|| TendaraError::extraction(format!("Failed to read worksheet in {source}")))?
            .map_err(|e| TendaraError::extraction(format!("Failed to read worksheet in {source}: {e}")))?;

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(|cell: &DataType| cell.to_string()).collect())
            .collect();

        Ok(ParsedTable {
            id: Uuid::new_v4(),
            source,
            format: SourceFormat::Excel,
            rows,
            text: None,
            warnings: Vec::new(),
        })
    }
}

impl Default for SourceReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(SourceFormat::from_extension(Path::new("bids_2024.pdf")), Some(SourceFormat::Pdf));
        assert_eq!(SourceFormat::from_extension(Path::new("bids_2024.CSV")), Some(SourceFormat::Csv));
        assert_eq!(SourceFormat::from_extension(Path::new("bids_2024.xlsx")), Some(SourceFormat::Excel));
        assert_eq!(SourceFormat::from_extension(Path::new("bids_2024.txt")), None);
        assert_eq!(SourceFormat::from_extension(Path::new("no_extension")), None);
    }

    #[test]
    fn test_csv_rows_are_kept_raw() {
        let reader = SourceReader::new();
        let data = b"COLLECTIVE NO,RFP TITLE,CLOSING DATE,COMPANIES\n25/0101,Generator sets,01-Apr-2025,Acme Corp\n";

        let table = reader.read_csv("bids_2025.csv".to_string(), data).unwrap();

        assert_eq!(table.format, SourceFormat::Csv);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "RFP TITLE");
        assert_eq!(table.rows[1][0], "25/0101");
        assert!(table.warnings.is_empty());
    }

    #[test]
    fn test_csv_quoted_newlines_stay_in_one_cell() {
        let reader = SourceReader::new();
        let data = b"25/0101,Trailer lease,01-Apr-2025,\"Acme Corp\nGlobex\"\n";

        let table = reader.read_csv("bids.csv".to_string(), data).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][3], "Acme Corp\nGlobex");
    }

    #[test]
    fn test_pdf_line_splitting_drops_prose() {
        let reader = SourceReader::new();
        let text = "BID OPENING RESULTS FOR 2025\n25/0101  Generator sets  01-Apr-2025  Acme Corp\nPage 1 of 3\n";

        // Exercise the splitter directly; full PDF decoding is covered by the
        // pipeline integration test.
        let rows: Vec<Vec<String>> = text
            .lines()
            .filter_map(|line| {
                let cells: Vec<String> =
                    reader.column_splitter.split(line.trim()).map(|c| c.to_string()).collect();
                (cells.len() >= 2).then_some(cells)
            })
            .collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["25/0101", "Generator sets", "01-Apr-2025", "Acme Corp"]);
    }
}

//! Bid opening table parsing.
//!
//! Bid tables share a loose layout across years: a header row mentioning the
//! collective number / RFP title / closing date / companies columns, followed
//! by one data row per contract. Rows that do not look like data (headers,
//! banners, padding) are rejected as non-rows, never as errors.

/// Column headings that mark the header row of a bid table.
const HEADER_MARKERS: [&str; 4] = ["COLLECTIVE", "RFP TITLE", "CLOSING DATE", "COMPANIES"];

/// Title cells that mark a non-data row.
const REJECTED_TITLES: [&str; 2] = ["RFP TITLE", "TITLE"];

/// Country names recognized in bidder blocks for the multinational flag.
const RECOGNIZED_COUNTRIES: [&str; 12] = [
    "Germany",
    "Italy",
    "France",
    "Spain",
    "USA",
    "Canada",
    "Norway",
    "Netherlands",
    "Belgium",
    "Turkey",
    "Poland",
    "United Kingdom",
];

/// Fields read directly off a table row, before classification and scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBidRow {
    pub contract_id: String,
    pub title: String,
    pub closing_date: String,
    pub bidders: String,
    pub country: String,
    pub bidder_count: u32,
    pub is_multinational: bool,
}

pub struct TableRowParser;

impl TableRowParser {
    pub fn new() -> Self {
        Self
    }

    /// Index of the header row within a table, if the table has one.
    ///
    /// Tables without a recognizable header are not bid tables and are
    /// skipped wholesale.
    pub fn header_row_index(rows: &[Vec<String>]) -> Option<usize> {
        rows.iter().position(|row| {
            let joined = row.join(" ").to_uppercase();
            HEADER_MARKERS.iter().any(|marker| joined.contains(marker))
        })
    }

    /// Parses one data row. `None` means "not a data row", not an error.
    pub fn parse_row(&self, cells: &[String]) -> Option<RawBidRow> {
        let cleaned: Vec<String> = cells.iter().map(|c| c.trim().to_string()).collect();

        if cleaned.iter().filter(|c| !c.is_empty()).count() < 4 {
            return None;
        }

        let title = cleaned[1].clone();
        let title_upper = title.to_uppercase();
        if title.is_empty()
            || REJECTED_TITLES.contains(&title_upper.as_str())
            || title_upper.contains("BID OPENING")
        {
            return None;
        }

        let bidders = cleaned[3].clone();

        Some(RawBidRow {
            contract_id: cleaned[0].clone(),
            title,
            closing_date: cleaned[2].clone(),
            bidder_count: Self::count_bidders(&bidders),
            is_multinational: Self::is_multinational(&bidders),
            bidders,
            country: cleaned.get(4).cloned().unwrap_or_default(),
        })
    }

    /// Number of companies in a newline-separated bidder block, capped at 10.
    pub fn count_bidders(bidders: &str) -> u32 {
        if bidders.is_empty() {
            return 0;
        }
        (bidders.matches('\n').count() as u32 + 1).clamp(1, 10)
    }

    /// True when more than one recognized country appears in the block.
    pub fn is_multinational(bidders: &str) -> bool {
        if bidders.is_empty() {
            return false;
        }
        RECOGNIZED_COUNTRIES
            .iter()
            .filter(|country| bidders.contains(*country))
            .count()
            > 1
    }
}

impl Default for TableRowParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cells(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_complete_row() {
        let parser = TableRowParser::new();
        let row = cells(&[
            "25/0101",
            "SATELLITE Communication Shelter Contract",
            "15-Mar-2025",
            "Thales Alenia\nAirbus Defence",
            "Luxembourg",
        ]);

        let raw = parser.parse_row(&row).unwrap();
        assert_eq!(raw.contract_id, "25/0101");
        assert_eq!(raw.closing_date, "15-Mar-2025");
        assert_eq!(raw.bidder_count, 2);
        assert_eq!(raw.country, "Luxembourg");
        assert!(!raw.is_multinational);
    }

    #[test]
    fn test_three_cell_row_is_rejected() {
        let parser = TableRowParser::new();
        assert!(parser.parse_row(&cells(&["25/0102", "Generator sets", "01-Apr-2025"])).is_none());
    }

    #[test]
    fn test_blank_padding_does_not_count() {
        let parser = TableRowParser::new();
        // Five cells but only three non-empty
        let row = cells(&["25/0103", "Generator sets", "", "  ", "Norway"]);
        assert!(parser.parse_row(&row).is_none());
    }

    #[test]
    fn test_header_and_banner_rows_are_rejected() {
        let parser = TableRowParser::new();
        let header = cells(&["COLLECTIVE NO", "RFP TITLE", "CLOSING DATE", "COMPANIES"]);
        assert!(parser.parse_row(&header).is_none());

        let banner = cells(&["", "BID OPENING RESULTS 2025", "x", "y", "z"]);
        assert!(parser.parse_row(&banner).is_none());
    }

    #[test]
    fn test_header_row_index() {
        let rows = vec![
            cells(&["Bid opening results", "", "", ""]),
            cells(&["COLLECTIVE NO", "RFP TITLE", "CLOSING DATE", "COMPANIES", "COUNTRY"]),
            cells(&["25/0101", "Generator sets", "01-Apr-2025", "Acme"]),
        ];
        assert_eq!(TableRowParser::header_row_index(&rows), Some(1));

        let no_header = vec![cells(&["a", "b", "c", "d"])];
        assert_eq!(TableRowParser::header_row_index(&no_header), None);
    }

    #[test]
    fn test_bidder_count_clamps() {
        assert_eq!(TableRowParser::count_bidders(""), 0);
        assert_eq!(TableRowParser::count_bidders("Acme"), 1);
        assert_eq!(TableRowParser::count_bidders("a\nb\nc"), 3);
        let many = vec!["bidder"; 15].join("\n");
        assert_eq!(TableRowParser::count_bidders(&many), 10);
    }

    #[test]
    fn test_multinational_needs_two_countries() {
        assert!(!TableRowParser::is_multinational("Rheinmetall Germany"));
        assert!(TableRowParser::is_multinational("Rheinmetall Germany\nLeonardo Italy"));
        assert!(!TableRowParser::is_multinational(""));
    }

    proptest! {
        /// Any row with fewer than four non-empty cells yields no record.
        #[test]
        fn prop_short_rows_never_parse(
            row in prop::collection::vec("[ a-zA-Z0-9]{0,12}", 0..4),
        ) {
            let parser = TableRowParser::new();
            let cells: Vec<String> = row.iter().map(|s| s.to_string()).collect();
            prop_assert!(parser.parse_row(&cells).is_none());
        }

        /// Bidder counts stay within the documented cap.
        #[test]
        fn prop_bidder_count_bounded(block in "[a-zA-Z \n]{0,200}") {
            let count = TableRowParser::count_bidders(&block);
            prop_assert!(count <= 10);
            if block.is_empty() {
                prop_assert_eq!(count, 0);
            }
        }
    }
}

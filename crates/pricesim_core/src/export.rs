//! CSV encoding and decoding of scenario rows
//!
//! The file layout matches the downloadable results table: one header row and
//! one line per scenario, money rounded to cents and quantity to whole units.

use std::fmt;
use std::io::{self, Write};

use crate::error::CsvError;
use crate::model::ScenarioRow;

/// Header row of every exported file
pub const CSV_HEADER: &str =
    "Price Change (%),New Price ($),New Quantity,New Revenue ($),Revenue Change ($)";

/// File name offered for downloads
pub const DEFAULT_FILE_NAME: &str = "pricing_simulation.csv";

const COLUMNS: [&str; 5] = [
    "Price Change (%)",
    "New Price ($)",
    "New Quantity",
    "New Revenue ($)",
    "Revenue Change ($)",
];

/// Round a dollar amount to cents, ties to even
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// One decoded CSV line. Values carry the rounding applied on export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CsvRecord {
    pub price_change_pct: i32,
    pub new_price: f64,
    pub new_quantity: i64,
    pub new_revenue: f64,
    pub revenue_change: f64,
}

impl From<&ScenarioRow> for CsvRecord {
    fn from(row: &ScenarioRow) -> Self {
        Self {
            price_change_pct: row.price_change_pct,
            new_price: round_to_cents(row.new_price),
            new_quantity: row.new_quantity,
            new_revenue: round_to_cents(row.new_revenue),
            revenue_change: round_to_cents(row.revenue_change),
        }
    }
}

impl CsvRecord {
    /// True when every field agrees with `row` within half a cent
    pub fn matches(&self, row: &ScenarioRow) -> bool {
        const TOLERANCE: f64 = 0.005 + 1e-9;
        self.price_change_pct == row.price_change_pct
            && self.new_quantity == row.new_quantity
            && (self.new_price - row.new_price).abs() <= TOLERANCE
            && (self.new_revenue - row.new_revenue).abs() <= TOLERANCE
            && (self.revenue_change - row.revenue_change).abs() <= TOLERANCE
    }
}

/// One data line, without the trailing newline
struct CsvLine<'a>(&'a ScenarioRow);

impl fmt::Display for CsvLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Normalise -0.00 so a tiny negative change does not print with a sign
        let money = |v: f64| round_to_cents(v) + 0.0;
        let row = self.0;
        write!(
            f,
            "{},{:.2},{},{:.2},{:.2}",
            row.price_change_pct,
            money(row.new_price),
            row.new_quantity,
            money(row.new_revenue),
            money(row.revenue_change),
        )
    }
}

/// Write the header and one line per row.
pub fn write_csv<'a, W, I>(rows: I, mut writer: W) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ScenarioRow>,
{
    writeln!(writer, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(writer, "{}", CsvLine(row))?;
    }
    writer.flush()
}

/// Encode rows into an in-memory CSV document.
pub fn to_csv_string<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a ScenarioRow>,
{
    let mut out = format!("{CSV_HEADER}\n");
    for row in rows {
        out.push_str(&CsvLine(row).to_string());
        out.push('\n');
    }
    out
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    line: usize,
    column: usize,
) -> Result<T, CsvError> {
    raw.trim().parse().map_err(|_| CsvError::InvalidField {
        line,
        column: COLUMNS[column],
        value: raw.to_string(),
    })
}

fn parse_money(raw: &str, line: usize, column: usize) -> Result<f64, CsvError> {
    let value: f64 = parse_field(raw, line, column)?;
    if !value.is_finite() {
        return Err(CsvError::InvalidField {
            line,
            column: COLUMNS[column],
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Decode a document produced by [`write_csv`].
///
/// Line numbers in errors are 1-based and count the header.
pub fn parse_csv(input: &str) -> Result<Vec<CsvRecord>, CsvError> {
    let mut lines = input.lines().enumerate();

    let header = lines
        .by_ref()
        .map(|(_, l)| l.trim_end_matches('\r'))
        .find(|l| !l.trim().is_empty())
        .ok_or(CsvError::MissingHeader)?;
    if header.trim_start_matches('\u{feff}') != CSV_HEADER {
        return Err(CsvError::HeaderMismatch {
            found: header.to_string(),
        });
    }

    let mut records = Vec::new();
    for (idx, raw) in lines {
        let raw = raw.trim_end_matches('\r');
        if raw.trim().is_empty() {
            continue;
        }
        let line = idx + 1;
        let fields: Vec<&str> = raw.split(',').collect();
        if fields.len() != COLUMNS.len() {
            return Err(CsvError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        records.push(CsvRecord {
            price_change_pct: parse_field(fields[0], line, 0)?,
            new_price: parse_money(fields[1], line, 1)?,
            new_quantity: parse_field(fields[2], line, 2)?,
            new_revenue: parse_money(fields[3], line, 3)?,
            revenue_change: parse_money(fields[4], line, 4)?,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pct: i32, price: f64, qty: i64, revenue: f64, change: f64) -> ScenarioRow {
        ScenarioRow {
            price_change_pct: pct,
            new_price: price,
            quantity_change_pct: 0.0,
            new_quantity: qty,
            new_revenue: revenue,
            revenue_change: change,
        }
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(23.819_666), 23.82);
        assert_eq!(round_to_cents(-7_869.004), -7_869.0);
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(-0.125), -0.12);
    }

    #[test]
    fn test_cent_ties_round_to_even_in_csv() {
        let csv = to_csv_string(&[row(0, 0.125, 1, 0.125, 0.0)]);
        assert_eq!(csv.lines().nth(1), Some("0,0.12,1,0.12,0.00"));
    }

    #[test]
    fn test_string_and_writer_encodings_agree() {
        let rows = [row(-3, 20.0, 9_000, 180_000.0, -3_000.0), row(0, 0.375, 2, 0.75, 0.0)];
        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_csv_string(&rows));
    }

    #[test]
    fn test_write_csv_layout() {
        let rows = [
            row(-1, 21.437_7, 8_561, 183_511.3, 511.3),
            row(0, 21.654_242, 8_451, 183_000.0, 0.0),
        ];
        let csv = to_csv_string(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "-1,21.44,8561,183511.30,511.30");
        assert_eq!(lines[2], "0,21.65,8451,183000.00,0.00");
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_negative_zero_is_printed_unsigned() {
        let csv = to_csv_string(&[row(0, 1.0, 1, 1.0, -0.000_1)]);
        assert!(csv.ends_with(",0.00\n"), "got {csv:?}");
    }

    #[test]
    fn test_parse_rejects_wrong_header() {
        let err = parse_csv("pct,price\n1,2\n").unwrap_err();
        assert!(matches!(err, CsvError::HeaderMismatch { .. }));
        assert_eq!(parse_csv("\n\n").unwrap_err(), CsvError::MissingHeader);
    }

    #[test]
    fn test_parse_reports_line_and_column() {
        let input = format!("{CSV_HEADER}\n1,2.00,3,4.00,5.00\n2,abc,3,4.00,5.00\n");
        assert_eq!(
            parse_csv(&input).unwrap_err(),
            CsvError::InvalidField {
                line: 3,
                column: "New Price ($)",
                value: "abc".to_string(),
            }
        );

        let input = format!("{CSV_HEADER}\n1,2.00,3,4.00\n");
        assert_eq!(
            parse_csv(&input).unwrap_err(),
            CsvError::FieldCount { line: 2, found: 4 }
        );
    }

    #[test]
    fn test_parse_accepts_crlf_and_trailing_blank_lines() {
        let input = format!("{CSV_HEADER}\r\n5,10.50,100,1050.00,-20.25\r\n\r\n");
        let records = parse_csv(&input).unwrap();
        assert_eq!(
            records,
            vec![CsvRecord {
                price_change_pct: 5,
                new_price: 10.5,
                new_quantity: 100,
                new_revenue: 1050.0,
                revenue_change: -20.25,
            }]
        );
    }
}

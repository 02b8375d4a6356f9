// 📤 CSV export of a generated dataset
//
// Columns follow the Transaction serde names: Date, Amount, Category, Description.

use crate::error::Result;
use crate::transaction::Transaction;
use std::io::Write;

/// Write `transactions` as CSV with a header row. Returns the number of rows written.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);

    for tx in transactions {
        wtr.serialize(tx)?;
    }
    wtr.flush()?;

    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_write_csv_header_and_rows() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        let transactions = vec![
            Transaction::new(date, -23.5, Category::Food),
            Transaction::new(date, 1999.99, Category::Salary),
        ];

        let mut buf = Vec::new();
        let written = write_csv(&transactions, &mut buf).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Amount,Category,Description");
        assert_eq!(lines[1], "2025-03-09T14:05:00,-23.5,Food,Expense in Food");
        assert_eq!(lines[2], "2025-03-09T14:05:00,1999.99,Salary,Expense in Salary");
    }

    #[test]
    fn test_write_csv_reads_back() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let original = vec![Transaction::new(date, -410.25, Category::Transport)];

        let mut buf = Vec::new();
        write_csv(&original, &mut buf).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let parsed: Vec<Transaction> = rdr
            .deserialize::<Transaction>()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_write_csv_empty() {
        let mut buf = Vec::new();
        assert_eq!(write_csv(&[], &mut buf).unwrap(), 0);
    }
}

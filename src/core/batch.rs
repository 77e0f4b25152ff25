use crate::core::form::FormValidator;
use crate::domain::model::{DigitPolicy, FestivalStatistics, FieldError, RegistrationRecord};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Read, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcome {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub id: Option<u64>,
    pub national_id: String,
    pub errors: Vec<FieldError>,
    /// Row of the first registration that used the same national ID.
    pub duplicate_of: Option<usize>,
}

impl RowOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.duplicate_of.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub duplicates: usize,
    pub rows: Vec<RowOutcome>,
    pub statistics: FestivalStatistics,
}

impl BatchReport {
    pub fn invalid_rows(&self) -> impl Iterator<Item = &RowOutcome> {
        self.rows.iter().filter(|r| !r.is_valid())
    }

    /// One line per row: row, id, national_id, status, messages.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["row", "id", "national_id", "status", "errors"])?;

        for outcome in &self.rows {
            let status = if outcome.is_valid() { "valid" } else { "invalid" };
            let mut messages: Vec<String> = outcome
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            if let Some(first) = outcome.duplicate_of {
                messages.push(format!("duplicate of row {}", first));
            }

            csv_writer.write_record([
                outcome.row.to_string(),
                outcome.id.map(|id| id.to_string()).unwrap_or_default(),
                outcome.national_id.clone(),
                status.to_string(),
                messages.join("; "),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Validates a CSV export of registrations row by row.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchValidator {
    form_validator: FormValidator,
}

impl BatchValidator {
    pub fn new(policy: DigitPolicy) -> Self {
        Self {
            form_validator: FormValidator::new(policy),
        }
    }

    pub fn validate_reader<R: Read>(&self, reader: R) -> Result<BatchReport> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<RegistrationRecord>() {
            records.push(row?);
        }
        tracing::debug!("Read {} registrations", records.len());

        Ok(self.validate_records(&records))
    }

    pub fn validate_records(&self, records: &[RegistrationRecord]) -> BatchReport {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut rows = Vec::with_capacity(records.len());
        let mut duplicates = 0;

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            let report = self.form_validator.validate(&record.as_form());

            let key = record.national_id.as_str();
            let duplicate_of = if key.is_empty() {
                None
            } else {
                match first_seen.get(key) {
                    Some(&first) => Some(first),
                    None => {
                        first_seen.insert(key, row);
                        None
                    }
                }
            };

            if let Some(first) = duplicate_of {
                duplicates += 1;
                tracing::warn!("Row {} repeats national id of row {}", row, first);
            }

            rows.push(RowOutcome {
                row,
                id: record.id,
                national_id: record.national_id.clone(),
                errors: report.errors,
                duplicate_of,
            });
        }

        let valid = rows.iter().filter(|r| r.is_valid()).count();
        let report = BatchReport {
            generated_at: Utc::now(),
            total: rows.len(),
            valid,
            invalid: rows.len() - valid,
            duplicates,
            rows,
            statistics: FestivalStatistics::from_records(records),
        };

        tracing::info!(
            "✅ Validated {} registrations: {} valid, {} invalid ({} duplicates)",
            report.total,
            report.valid,
            report.invalid,
            report.duplicates
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
id,first_name,last_name,national_id,phone_number,gender,festival_format,festival_topic
1,Sara,Ahmadi,0010008942,09123456789,female,photo,
2,Reza,Karimi,1111111111,09121234567,male,podcast,
3,Nika,Moradi,0010008942,0912-000-1111,female,photo,
4,Ali,Rahimi,1234567891,912345,male,,
";

    #[test]
    fn test_report_counts() {
        let report = BatchValidator::default()
            .validate_reader(EXPORT.as_bytes())
            .unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.valid, 1);
        assert_eq!(report.invalid, 3);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.rows[2].duplicate_of, Some(1));
        assert!(report.rows[2].errors.is_empty());
        assert_eq!(report.statistics.by_format.get("photo"), Some(&2));
    }

    #[test]
    fn test_invalid_rows_carry_field_errors() {
        let report = BatchValidator::default()
            .validate_reader(EXPORT.as_bytes())
            .unwrap();
        let invalid: Vec<usize> = report.invalid_rows().map(|r| r.row).collect();
        assert_eq!(invalid, vec![2, 3, 4]);
        assert_eq!(report.rows[3].errors.len(), 1);
    }

    #[test]
    fn test_csv_output_has_one_line_per_row() {
        let report = BatchValidator::default()
            .validate_reader(EXPORT.as_bytes())
            .unwrap();
        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("duplicate of row 1"));
    }

    #[test]
    fn test_missing_required_column_is_an_error() {
        let result = BatchValidator::default().validate_reader("id,national_id\n1,0010008942\n".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_padded_values_reach_the_validator_unchanged() {
        let export = "national_id,phone_number\n 0010008942 ,09123456789\n0010008942,09123456789\n";
        let report = BatchValidator::default()
            .validate_reader(export.as_bytes())
            .unwrap();
        assert_eq!(report.rows[0].national_id, " 0010008942 ");
        assert_eq!(report.rows[0].errors.len(), 1);
        assert_eq!(report.rows[1].duplicate_of, None);
        assert_eq!(report.valid, 1);
    }

    #[test]
    fn test_padded_headers_are_still_recognised() {
        let export = " national_id , phone_number \n0010008942,09123456789\n";
        let report = BatchValidator::default()
            .validate_reader(export.as_bytes())
            .unwrap();
        assert_eq!(report.valid, 1);
    }
}

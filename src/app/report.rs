use crate::config::OutputFormat;
use crate::core::engine::{BucketSnapshot, ExpiryEngine};
use crate::domain::model::{BucketFlags, DomainRecord};
use crate::domain::ports::RecordSource;
use crate::utils::datetime::{format_instant, DEFAULT_DATE_FORMAT};
use crate::utils::error::{Result, TrackerError};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::io::Write;

const TABLE_HEADER: &str =
    "ID\tName\t\tOwner\t\tStart Date\tExpiry Date\t30 Days\t7 Days\tExpired\tRedemption";
const TABLE_RULE: &str =
    "------------------------------------------------------------------------------------------";

/// Renders overview, search and export views. Buckets are computed once per call.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    date_format: String,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl ReportRenderer {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn write_overview<W, S>(
        &self,
        out: &mut W,
        engine: &ExpiryEngine<S>,
        now: NaiveDateTime,
    ) -> Result<()>
    where
        W: Write,
        S: RecordSource,
    {
        let snapshot = engine.snapshot(now);

        writeln!(out, "Domains Overview:")?;
        self.write_table(out, engine.records().iter(), &snapshot)
    }

    /// Search and print results. An absent term is reported to the reader, not propagated.
    pub fn write_search_results<W, S>(
        &self,
        out: &mut W,
        engine: &ExpiryEngine<S>,
        now: NaiveDateTime,
        term: Option<&str>,
    ) -> Result<()>
    where
        W: Write,
        S: RecordSource,
    {
        let results = match engine.search(term) {
            Ok(results) => results,
            Err(TrackerError::InvalidArgument { message }) => {
                writeln!(out, "{}", message)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if results.is_empty() {
            writeln!(out, "No matching domains or owners found.")?;
            return Ok(());
        }

        let snapshot = engine.snapshot(now);
        writeln!(out, "\nSearch Results:")?;
        self.write_table(out, results.into_iter(), &snapshot)
    }

    /// Machine-readable overview with an extra inferred status column.
    pub fn write_export<W, S>(
        &self,
        out: &mut W,
        engine: &ExpiryEngine<S>,
        now: NaiveDateTime,
        format: OutputFormat,
    ) -> Result<()>
    where
        W: Write,
        S: RecordSource,
    {
        let snapshot = engine.snapshot(now);
        let rows = engine
            .records()
            .iter()
            .map(|record| self.export_row(record, &snapshot))
            .collect::<Result<Vec<_>>>()?;

        let delimiter = match format {
            OutputFormat::Csv => b',',
            OutputFormat::Tsv => b'\t',
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &rows)?;
                writeln!(out)?;
                return Ok(());
            }
            OutputFormat::Table => {
                return Err(TrackerError::InvalidConfigValueError {
                    field: "format".to_string(),
                    value: format.to_string(),
                    reason: "table output is not an export format".to_string(),
                })
            }
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(out);
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        tracing::debug!(rows = rows.len(), %format, "export written");
        Ok(())
    }

    fn write_table<'r, W, I>(
        &self,
        out: &mut W,
        records: I,
        snapshot: &BucketSnapshot,
    ) -> Result<()>
    where
        W: Write,
        I: Iterator<Item = &'r DomainRecord>,
    {
        writeln!(out, "{}", TABLE_HEADER)?;
        writeln!(out, "{}", TABLE_RULE)?;

        for record in records {
            let flags = snapshot.flags_for(record.name());
            writeln!(
                out,
                "{}\t{:<15}\t{:<15}\t{}\t{}\t{}\t{}\t{}\t{}",
                record.id(),
                record.name(),
                record.owner(),
                self.format_date(record.start_date())?,
                self.format_date(record.expiry_date())?,
                yes_no(flags.thirty_day),
                yes_no(flags.seven_day),
                yes_no(flags.expired),
                yes_no(flags.redemption),
            )?;
        }
        Ok(())
    }

    fn export_row<'r>(
        &self,
        record: &'r DomainRecord,
        snapshot: &BucketSnapshot,
    ) -> Result<ExportRow<'r>> {
        let flags = snapshot.flags_for(record.name());
        Ok(ExportRow {
            id: record.id(),
            name: record.name(),
            owner: record.owner(),
            start_date: self.format_date(record.start_date())?,
            expiry_date: self.format_date(record.expiry_date())?,
            thirty_days: yes_no(flags.thirty_day),
            seven_days: yes_no(flags.seven_day),
            expired: yes_no(flags.expired),
            redemption: yes_no(flags.redemption),
            status: status_label(&flags),
        })
    }

    fn format_date(&self, instant: NaiveDateTime) -> Result<String> {
        format_instant(instant, &self.date_format)
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'r> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Name")]
    name: &'r str,
    #[serde(rename = "Owner")]
    owner: &'r str,
    #[serde(rename = "Start Date")]
    start_date: String,
    #[serde(rename = "Expiry Date")]
    expiry_date: String,
    #[serde(rename = "30 Days")]
    thirty_days: &'static str,
    #[serde(rename = "7 Days")]
    seven_days: &'static str,
    #[serde(rename = "Expired")]
    expired: &'static str,
    #[serde(rename = "Redemption")]
    redemption: &'static str,
    #[serde(rename = "Status")]
    status: String,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn status_label(flags: &BucketFlags) -> String {
    flags.primary().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::DomainStore;
    use crate::utils::datetime::shift_days;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn store() -> DomainStore {
        let mut store = DomainStore::new();
        store.insert(1, "seven.net", "Sam Seven", shift_days(now(), -363));
        store.insert(2, "redemption.io", "Rachel Rays", shift_days(now(), -368));
        store
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_overview_rows() {
        let store = store();
        let engine = ExpiryEngine::new(&store);
        let text = render(|out| ReportRenderer::default().write_overview(out, &engine, now()));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Domains Overview:");
        assert_eq!(lines[1], TABLE_HEADER);
        assert_eq!(lines[2], TABLE_RULE);
        assert_eq!(
            lines[3],
            "1\tseven.net      \tSam Seven      \t2024-06-17\t2025-06-17\tNo\tYes\tNo\tNo"
        );
        assert_eq!(
            lines[4],
            "2\tredemption.io  \tRachel Rays    \t2024-06-12\t2025-06-12\tNo\tNo\tYes\tYes"
        );
    }

    #[test]
    fn test_custom_date_format() {
        let store = store();
        let engine = ExpiryEngine::new(&store);
        let text =
            render(|out| ReportRenderer::new("%d/%m/%Y").write_overview(out, &engine, now()));
        assert!(text.contains("17/06/2024\t17/06/2025"));
    }

    #[test]
    fn test_offset_pattern_is_an_error_not_a_panic() {
        let store = store();
        let engine = ExpiryEngine::new(&store);
        let renderer = ReportRenderer::new("%z");

        let mut buf = Vec::new();
        let err = renderer.write_overview(&mut buf, &engine, now()).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfigValueError { .. }));

        let mut buf = Vec::new();
        let err = renderer
            .write_export(&mut buf, &engine, now(), OutputFormat::Csv)
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_search_messages() {
        let store = store();
        let engine = ExpiryEngine::new(&store);
        let renderer = ReportRenderer::default();

        let absent = render(|out| renderer.write_search_results(out, &engine, now(), None));
        assert_eq!(absent, "Search term cannot be null.\n");

        let none = render(|out| renderer.write_search_results(out, &engine, now(), Some("zzz")));
        assert_eq!(none, "No matching domains or owners found.\n");

        let hit =
            render(|out| renderer.write_search_results(out, &engine, now(), Some("RACHEL")));
        assert!(hit.starts_with("\nSearch Results:\n"));
        assert!(hit.contains("redemption.io"));
        assert!(!hit.contains("seven.net"));
    }

    #[test]
    fn test_csv_export() {
        let store = store();
        let engine = ExpiryEngine::new(&store);
        let text = render(|out| {
            ReportRenderer::default().write_export(out, &engine, now(), OutputFormat::Csv)
        });

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "ID,Name,Owner,Start Date,Expiry Date,30 Days,7 Days,Expired,Redemption,Status"
        );
        assert_eq!(
            lines[1],
            "1,seven.net,Sam Seven,2024-06-17,2025-06-17,No,Yes,No,No,7 Days"
        );
        assert_eq!(
            lines[2],
            "2,redemption.io,Rachel Rays,2024-06-12,2025-06-12,No,No,Yes,Yes,Redemption"
        );
    }

    #[test]
    fn test_json_export() {
        let store = store();
        let engine = ExpiryEngine::new(&store);
        let text = render(|out| {
            ReportRenderer::default().write_export(out, &engine, now(), OutputFormat::Json)
        });

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["Name"], "seven.net");
        assert_eq!(value[1]["Status"], "Redemption");
    }

    #[test]
    fn test_table_is_not_an_export_format() {
        let store = store();
        let engine = ExpiryEngine::new(&store);
        let mut buf = Vec::new();
        let err = ReportRenderer::default()
            .write_export(&mut buf, &engine, now(), OutputFormat::Table)
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfigValueError { .. }));
    }
}

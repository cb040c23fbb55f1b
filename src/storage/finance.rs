//! Finance-specific store operations

use chrono::NaiveDate;

use crate::error::AssistantResult;
use crate::models::FinanceRecord;

use super::store::RecordStore;

/// Store of finance records backed by finance.json
pub type FinanceRepository = RecordStore<FinanceRecord>;

impl RecordStore<FinanceRecord> {
    /// Records dated within `[start, end]`, both ends included, in stored order
    ///
    /// # Errors
    ///
    /// Returns a format error if any stored record has a malformed date.
    pub fn in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AssistantResult<Vec<&FinanceRecord>> {
        let mut matched = Vec::new();
        for record in self.list() {
            let date = record.parsed_date()?;
            if start <= date && date <= end {
                matched.push(record);
            }
        }
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinanceFields, Money};
    use tempfile::TempDir;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_repo(dates: &[&str]) -> (TempDir, FinanceRepository) {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = FinanceRepository::open(temp_dir.path().join("finance.json")).unwrap();
        for d in dates {
            repo.create(FinanceFields::new(Money::from_units(10), "misc", *d, ""))
                .unwrap();
        }
        (temp_dir, repo)
    }

    #[test]
    fn test_range_is_inclusive() {
        let (_temp_dir, repo) =
            create_test_repo(&["31-12-2023", "01-01-2024", "15-01-2024", "31-01-2024", "01-02-2024"]);

        let matched = repo.in_date_range(date(1, 1, 2024), date(31, 1, 2024)).unwrap();
        let dates: Vec<_> = matched.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["01-01-2024", "15-01-2024", "31-01-2024"]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let (_temp_dir, repo) = create_test_repo(&["15-01-2024"]);
        let matched = repo.in_date_range(date(31, 1, 2024), date(1, 1, 2024)).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_sub_cent_amount_on_disk_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"amount":0.125,"category":"misc","date":"01-01-2024","description":""}]"#,
        )
        .unwrap();

        let err = FinanceRepository::open(&path).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_amounts_survive_load_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance.json");
        let raw = r#"[
            {"id":1,"amount":10.99,"category":"misc","date":"01-01-2024","description":""},
            {"id":2,"amount":-40.5,"category":"food","date":"02-01-2024","description":""},
            {"id":3,"amount":0.01,"category":"misc","date":"03-01-2024","description":""}
        ]"#;
        std::fs::write(&path, raw).unwrap();

        let repo = FinanceRepository::open(&path).unwrap();
        crate::storage::save(&path, repo.list()).unwrap();

        let before: serde_json::Value = serde_json::from_str(raw).unwrap();
        let after: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_malformed_stored_date() {
        let (_temp_dir, repo) = create_test_repo(&["15-01-2024", "yesterday"]);
        let err = repo
            .in_date_range(date(1, 1, 2024), date(31, 1, 2024))
            .unwrap_err();
        assert!(err.is_format());
    }
}

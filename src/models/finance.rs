//! Finance record model
//!
//! A single income or expense entry. The sign of the amount decides which:
//! positive amounts are income, negative amounts are expenses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::parse_date;
use super::ids::RecordId;
use super::money::Money;
use super::record::Record;
use crate::audit::EntityType;
use crate::error::{AssistantError, AssistantResult};

/// An income or expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinanceRecord {
    pub id: RecordId,
    pub amount: Money,
    pub category: String,
    /// `DD-MM-YYYY`, kept as entered
    pub date: String,
    pub description: String,
}

impl FinanceRecord {
    /// Parse the record's date
    ///
    /// # Errors
    ///
    /// Returns a format error naming the record when its date is malformed.
    pub fn parsed_date(&self) -> AssistantResult<NaiveDate> {
        parse_date(&self.date).map_err(|_| {
            AssistantError::Format(format!(
                "Finance record {} has an invalid date '{}': expected DD-MM-YYYY",
                self.id, self.date
            ))
        })
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

/// Finance record fields without the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinanceFields {
    pub amount: Money,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl FinanceFields {
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.into(),
            description: description.into(),
        }
    }
}

impl Record for FinanceRecord {
    type Fields = FinanceFields;

    const ENTITY_TYPE: EntityType = EntityType::FinanceRecord;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_fields(id: RecordId, fields: FinanceFields) -> Self {
        Self {
            id,
            amount: fields.amount,
            category: fields.category,
            date: fields.date,
            description: fields.description,
        }
    }

    fn apply(&mut self, fields: FinanceFields) {
        self.amount = fields.amount;
        self.category = fields.category;
        self.date = fields.date;
        self.description = fields.description;
    }

    fn label(&self) -> String {
        format!("{} {}", self.date, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_compatibility() {
        let json = r#"{"id":2,"amount":-40.5,"category":"Food","date":"15-01-2024","description":"lunch"}"#;
        let record: FinanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount, Money::from_cents(-4050));
        assert!(record.is_expense());

        let back = serde_json::to_string(&record).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_parsed_date_error_names_record() {
        let record = FinanceRecord::from_fields(
            RecordId::new(9),
            FinanceFields::new(Money::from_units(1), "x", "2024-01-01", ""),
        );
        let err = record.parsed_date().unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("9"));
    }
}

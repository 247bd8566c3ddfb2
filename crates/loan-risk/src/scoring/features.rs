//! Feature-alignment step: expand an applicant record into a named row,
//! one-hot encode the categoricals, and reindex against the frozen schema.

use std::collections::BTreeMap;

use super::artifacts::SchemaColumns;
use super::domain::ApplicantRecord;

pub const COL_INCOME: &str = "income";
pub const COL_EMPLOYMENT_YEARS: &str = "employment_experience_years";
pub const COL_LOAN_AMOUNT: &str = "loan_amount";
pub const COL_INTEREST_RATE: &str = "loan_interest_rate";
pub const COL_PERCENT_OF_INCOME: &str = "loan_percent_of_income";

/// A flat named row holding raw numerics plus `{field}_{value}` one-hot
/// indicators for the record's categorical choices.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: BTreeMap<String, f64>,
}

impl FeatureRow {
    pub fn from_record(record: &ApplicantRecord) -> Self {
        let mut values = BTreeMap::new();

        values.insert(COL_INCOME.to_string(), record.income as f64);
        values.insert(
            COL_EMPLOYMENT_YEARS.to_string(),
            record.employment_experience_years as f64,
        );
        values.insert(COL_LOAN_AMOUNT.to_string(), record.loan_amount as f64);
        values.insert(COL_INTEREST_RATE.to_string(), record.loan_interest_rate);
        values.insert(
            COL_PERCENT_OF_INCOME.to_string(),
            record.loan_percent_of_income,
        );

        values.insert(
            indicator_column("home_ownership", record.home_ownership.code()),
            1.0,
        );
        values.insert(
            indicator_column(
                "previous_default_on_file",
                record.previous_default_on_file.code(),
            ),
            1.0,
        );

        Self { values }
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    /// Align the row to the training-time feature space: for each schema
    /// column take the row's value if present, else 0. Row entries without
    /// a schema column are dropped, so an indicator for a category the
    /// training data never saw simply vanishes instead of erroring.
    pub fn reindex(&self, columns: &SchemaColumns) -> Vec<f64> {
        columns
            .iter()
            .map(|column| self.values.get(column).copied().unwrap_or(0.0))
            .collect()
    }
}

/// Column name for a one-hot indicator, matching the training encoder.
pub fn indicator_column(field: &str, value: &str) -> String {
    format!("{field}_{value}")
}

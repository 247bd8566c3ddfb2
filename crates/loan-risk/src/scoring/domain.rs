use serde::{Deserialize, Serialize};

/// Home ownership status as captured on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HomeOwnership {
    Own,
    Rent,
    Mortgage,
    Other,
}

impl HomeOwnership {
    /// The category code frozen in the training-time column names.
    pub const fn code(self) -> &'static str {
        match self {
            HomeOwnership::Own => "OWN",
            HomeOwnership::Rent => "RENT",
            HomeOwnership::Mortgage => "MORTGAGE",
            HomeOwnership::Other => "OTHER",
        }
    }
}

/// Whether the applicant has a prior default on file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PreviousDefault {
    Yes,
    No,
}

impl PreviousDefault {
    pub const fn code(self) -> &'static str {
        match self {
            PreviousDefault::Yes => "YES",
            PreviousDefault::No => "NO",
        }
    }
}

/// One loan application as submitted through the form or a batch file.
///
/// Numeric fields are accepted permissively beyond non-negativity; the
/// pipeline applies no clipping even for implausibly large values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub income: u64,
    pub employment_experience_years: u32,
    pub home_ownership: HomeOwnership,
    pub loan_amount: u64,
    pub loan_interest_rate: f64,
    pub loan_percent_of_income: f64,
    pub previous_default_on_file: PreviousDefault,
}

/// Binary verdict produced by the classifier's own decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    Default,
    NoDefault,
}

impl RiskLabel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLabel::Default => "default",
            RiskLabel::NoDefault => "no_default",
        }
    }

    /// Headline shown in the result panel.
    pub const fn verdict(self) -> &'static str {
        match self {
            RiskLabel::Default => "High Risk of Default",
            RiskLabel::NoDefault => "Low Risk - Likely to Repay",
        }
    }
}

/// Severity band for the probability gauge. Boundaries are fixed:
/// [0,25) low, [25,50) guarded, [50,75) elevated, [75,100] severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Guarded,
    Elevated,
    Severe,
}

impl RiskBand {
    pub fn from_probability(probability_of_default: f64) -> Self {
        if probability_of_default < 25.0 {
            RiskBand::Low
        } else if probability_of_default < 50.0 {
            RiskBand::Guarded
        } else if probability_of_default < 75.0 {
            RiskBand::Elevated
        } else {
            RiskBand::Severe
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Guarded => "guarded",
            RiskBand::Elevated => "elevated",
            RiskBand::Severe => "severe",
        }
    }

    /// Gauge step color carried over from the original dashboard palette.
    pub const fn gauge_color(self) -> &'static str {
        match self {
            RiskBand::Low => "#2A9D8F",
            RiskBand::Guarded => "#E9C46A",
            RiskBand::Elevated => "#F4A261",
            RiskBand::Severe => "#E63946",
        }
    }
}

/// Outcome of one pipeline run: the classifier's label plus the estimated
/// probability of default expressed as a percentage in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    pub probability_of_default: f64,
}

impl PredictionResult {
    pub fn band(&self) -> RiskBand {
        RiskBand::from_probability(self.probability_of_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(RiskBand::from_probability(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(24.999), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(25.0), RiskBand::Guarded);
        assert_eq!(RiskBand::from_probability(49.999), RiskBand::Guarded);
        assert_eq!(RiskBand::from_probability(50.0), RiskBand::Elevated);
        assert_eq!(RiskBand::from_probability(75.0), RiskBand::Severe);
        assert_eq!(RiskBand::from_probability(100.0), RiskBand::Severe);
    }

    #[test]
    fn categorical_codes_match_training_column_suffixes() {
        assert_eq!(HomeOwnership::Mortgage.code(), "MORTGAGE");
        assert_eq!(PreviousDefault::No.code(), "NO");
    }

    #[test]
    fn applicant_record_round_trips_uppercase_enums() {
        let json = serde_json::json!({
            "income": 60000,
            "employment_experience_years": 5,
            "home_ownership": "RENT",
            "loan_amount": 10000,
            "loan_interest_rate": 12.5,
            "loan_percent_of_income": 0.17,
            "previous_default_on_file": "NO",
        });

        let record: ApplicantRecord =
            serde_json::from_value(json).expect("record deserializes");
        assert_eq!(record.home_ownership, HomeOwnership::Rent);
        assert_eq!(record.previous_default_on_file, PreviousDefault::No);
    }

    #[test]
    fn negative_income_is_rejected_at_the_boundary() {
        let json = serde_json::json!({
            "income": -1,
            "employment_experience_years": 5,
            "home_ownership": "RENT",
            "loan_amount": 10000,
            "loan_interest_rate": 12.5,
            "loan_percent_of_income": 0.17,
            "previous_default_on_file": "NO",
        });

        assert!(serde_json::from_value::<ApplicantRecord>(json).is_err());
    }
}

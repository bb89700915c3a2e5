use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::RawTransaction;

/// Earnings posted on or before this day of the month belong to the previous quarter's close.
pub const CUTOVER_DAY: u32 = 5;

/// Date fields in the order they are tried.
pub const DEFAULT_DATE_PRECEDENCE: [DateField; 2] = [DateField::Effective, DateField::Tran];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Effective,
    Tran
}

impl DateField {
    /// The field's value, `None` when absent or blank.
    pub fn value(self, raw: &RawTransaction) -> Option<&str> {
        let value = match self {
            DateField::Effective => raw.effective_date.as_deref(),
            DateField::Tran => raw.tran_date.as_deref()
        };

        value.map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Which months the cutover rule applies to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutoverScope {
    /// Early postings in any month shift back one quarter.
    AnyMonth,
    /// Only early postings in January, April, July and October shift.
    QuarterStartMonth
}

/// What happens to transaction types that match no known category.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclassifiedTreatment {
    /// Summed into `unclassified_dollar`; excluded from balances and returns.
    Track,
    /// Folded into income paid, so it counts as realized return.
    RealizedIncome
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PipelineConfig {
    /// `0` disables the cutover rule.
    pub cutover_day: u32,
    pub cutover_scope: CutoverScope,
    pub date_precedence: [DateField; 2],
    pub unclassified: UnclassifiedTreatment
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cutover_day: CUTOVER_DAY,
            cutover_scope: CutoverScope::AnyMonth,
            date_precedence: DEFAULT_DATE_PRECEDENCE,
            unclassified: UnclassifiedTreatment::Track
        }
    }
}

impl PipelineConfig {
    /// Loads a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

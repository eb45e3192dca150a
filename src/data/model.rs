use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: outcome must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: f64 },
    #[error("row {row}: payload mass must be a finite nonnegative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },
    #[error("dataset contains no launch records")]
    Empty,
}

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome. Stored in the CSV as `0` / `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse the numeric `class` cell. Pandas may write it as `1` or `1.0`.
    pub fn from_class(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Outcome::Failure)
        } else if value == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    pub fn as_f64(self) -> f64 {
        u8::from(self) as f64
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        match outcome {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
    pub booster_category: Option<String>,
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Global payload mass bounds over the full dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Per-site aggregate used by the selector and the summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSummary {
    pub name: String,
    pub launches: usize,
    pub successes: usize,
}

impl SiteSummary {
    pub fn success_rate(&self) -> f64 {
        if self.launches == 0 {
            0.0
        } else {
            self.successes as f64 / self.launches as f64
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Read-only launch dataset with bounds and site summaries computed at load.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
    /// Sorted by site name, like a group-by on the site column.
    sites: Vec<SiteSummary>,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut by_site: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

        for (row, rec) in records.iter().enumerate() {
            let mass = rec.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 {
                return Err(DatasetError::InvalidPayload { row, value: mass });
            }
            min = min.min(mass);
            max = max.max(mass);

            let entry = by_site.entry(rec.launch_site.as_str()).or_default();
            entry.0 += 1;
            if rec.outcome.is_success() {
                entry.1 += 1;
            }
        }

        let sites = by_site
            .into_iter()
            .map(|(name, (launches, successes))| SiteSummary {
                name: name.to_string(),
                launches,
                successes,
            })
            .collect();

        Ok(LaunchDataset {
            bounds: PayloadBounds { min, max },
            sites,
            records,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn sites(&self) -> &[SiteSummary] {
        &self.sites
    }

    /// Distinct site names in selector order.
    pub fn site_names(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

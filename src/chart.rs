//! Chart values and the functions that recompute them from the
//! current view state.
//!
//! Both recomputation functions are pure: the same dataset and inputs always
//! produce an equal chart value.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{
    FAIL_LABEL, PIE_TITLE_ALL, SCATTER_TITLE, SCATTER_X_LABEL, SCATTER_Y_LABEL, SUCCESS_LABEL,
};
use crate::data::filter::{PayloadRange, SiteSelection, records_at, records_in};
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Success counts per site for all sites, or Fail/Success counts for one site.
pub fn pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => PieChart {
            title: PIE_TITLE_ALL.to_string(),
            slices: dataset
                .sites()
                .iter()
                .map(|s| PieSlice {
                    label: s.name.clone(),
                    value: s.successes,
                })
                .collect(),
        },
        SiteSelection::Site(name) => {
            let count = |outcome: Outcome| {
                records_at(dataset, site)
                    .filter(|r| r.outcome == outcome)
                    .count()
            };
            PieChart {
                title: format!("Success vs. Failed at {name}"),
                slices: vec![
                    PieSlice {
                        label: FAIL_LABEL.to_string(),
                        value: count(Outcome::Failure),
                    },
                    PieSlice {
                        label: SUCCESS_LABEL.to_string(),
                        value: count(Outcome::Success),
                    },
                ],
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Payload mass (kg).
    pub x: f64,
    /// Outcome as 0.0 / 1.0.
    pub y: f64,
    pub category: Outcome,
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Points of one outcome category, as `[x, y]` pairs for plotting.
    pub fn series(&self, category: Outcome) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .filter(|p| p.category == category)
            .map(|p| [p.x, p.y])
            .collect()
    }

    /// The point of the `y` category closest to payload `x`.
    pub fn point_near(&self, x: f64, y: f64) -> Option<&ScatterPoint> {
        self.points
            .iter()
            .filter(|p| p.y == y)
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
    }

    /// Tooltip for a hovered point of series `name`. Empty when the cursor
    /// is not over a series.
    pub fn hover_text(&self, name: &str, x: f64, y: f64) -> String {
        if name.is_empty() {
            return String::new();
        }
        let mut text = format!("{name}\n{x:.0} kg");
        let Some(point) = self.point_near(x, y) else {
            return text;
        };

        text.push('\n');
        text.push_str(&point.site);
        if let Some(flight) = point.flight_number {
            text.push_str(&format!(", flight {flight}"));
        }
        match (&point.booster_version, &point.booster_category) {
            (Some(version), Some(category)) => {
                text.push_str(&format!("\n{version} ({category})"))
            }
            (Some(only), None) | (None, Some(only)) => text.push_str(&format!("\n{only}")),
            (None, None) => {}
        }
        text
    }
}

/// Payload mass vs. outcome for launches in `range` at the selected site(s).
pub fn scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let title = match site {
        SiteSelection::All => SCATTER_TITLE.to_string(),
        SiteSelection::Site(name) => format!("{SCATTER_TITLE} at {name}"),
    };

    let points = records_in(dataset, site, range)
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: r.outcome.as_f64(),
            category: r.outcome,
            site: r.launch_site.clone(),
            flight_number: r.flight_number,
            booster_version: r.booster_version.clone(),
            booster_category: r.booster_category.clone(),
        })
        .collect();

    ScatterChart {
        title,
        x_label: SCATTER_X_LABEL.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        points,
    }
}

// ---------------------------------------------------------------------------
// JSON export
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ChartExport<'a> {
    pie: &'a PieChart,
    scatter: &'a ScatterChart,
}

/// Write both charts as pretty JSON.
pub fn write_json<W: Write>(out: W, pie: &PieChart, scatter: &ScatterChart) -> Result<()> {
    serde_json::to_writer_pretty(out, &ChartExport { pie, scatter })
        .context("serializing charts")
}

/// Export both charts to `path`, replacing any existing file.
pub fn export_file(path: &Path, pie: &PieChart, scatter: &ScatterChart) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_json(&mut out, pie, scatter)?;
    out.flush().context("flushing chart export")
}

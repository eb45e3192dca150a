use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{DatasetError, LaunchDataset, LaunchRecord, Outcome};
use crate::config::{COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – header row; `Launch Site`, `Payload Mass (kg)` and `class`
///   are required, `Flight Number`, `Booster Version` and
///   `Booster Version Category` are picked up when present.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            load_csv(file).with_context(|| format!("loading {}", path.display()))
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Row layout written by `df.to_csv()` on the launch dataframe. The leading
/// unnamed index column and any other extra columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category", default)]
    booster_category: Option<String>,
}

pub fn load_csv<R: Read>(input: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for required in [COL_LAUNCH_SITE, COL_PAYLOAD_MASS, COL_CLASS] {
        if !headers.iter().any(|h| h == required) {
            return Err(DatasetError::MissingColumn(required.to_string()).into());
        }
    }

    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let outcome = Outcome::from_class(row.class).ok_or(DatasetError::InvalidOutcome {
            row: row_no,
            value: row.class,
        })?;

        records.push(LaunchRecord {
            launch_site: row.launch_site,
            payload_mass_kg: row.payload_mass_kg,
            outcome,
            flight_number: row.flight_number,
            booster_version: row.booster_version.filter(|s| !s.is_empty()),
            booster_category: row.booster_category.filter(|s| !s.is_empty()),
        });
    }

    let dataset = LaunchDataset::from_records(records)?;
    log::debug!(
        "Parsed {} launch records across {} sites",
        dataset.len(),
        dataset.sites().len()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0004,v1.0
2,3,VAFB SLC-4E,1,500.0,F9 v1.1,v1.1
3,4,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    #[test]
    fn loads_dataframe_export_layout() {
        let ds = load_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(
            ds.site_names().collect::<Vec<_>>(),
            vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        let first = &ds.records()[0];
        assert_eq!(first.flight_number, Some(1));
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.booster_category.as_deref(), Some("v1.0"));
        assert_eq!(ds.bounds().max, 2490.0);
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let csv = "Launch Site,Payload Mass (kg),class\nA,100,1\nB,200.5,0\n";
        let ds = load_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].payload_mass_kg, 200.5);
        assert_eq!(ds.records()[1].booster_version, None);
    }

    #[test]
    fn float_class_values_are_accepted() {
        let csv = "Launch Site,Payload Mass (kg),class\nA,100,1.0\n";
        let ds = load_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records()[0].outcome, Outcome::Success);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "Launch Site,class\nA,1\n";
        let err = load_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatasetError>(),
            Some(&DatasetError::MissingColumn(COL_PAYLOAD_MASS.to_string()))
        );
    }

    #[test]
    fn outcome_outside_zero_one_is_an_error() {
        let csv = "Launch Site,Payload Mass (kg),class\nA,100,1\nA,100,2\n";
        let err = load_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatasetError>(),
            Some(&DatasetError::InvalidOutcome { row: 1, value: 2.0 })
        );
    }

    #[test]
    fn non_numeric_payload_is_an_error() {
        let csv = "Launch Site,Payload Mass (kg),class\nA,heavy,1\n";
        assert!(load_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn header_only_file_is_empty_dataset_error() {
        let csv = "Launch Site,Payload Mass (kg),class\n";
        let err = load_csv(csv.as_bytes()).unwrap_err();
        assert_eq!(err.downcast_ref::<DatasetError>(), Some(&DatasetError::Empty));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        drop(f);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn load_file_rejects_unknown_extension() {
        let err = load_file(Path::new("launches.parquet")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn load_file_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file(&dir.path().join("nope.csv")).is_err());
    }
}

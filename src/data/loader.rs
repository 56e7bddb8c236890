use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

use super::model::{ContractionTable, MeasurementRow, ScourRegime, StudyLabel, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while reading the measurement table.
/// All of these are fatal for a run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found at: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("required column '{0}' is missing")]
    MissingColumn(String),

    #[error("line {line}: {source}")]
    Record {
        /// 1-based line in the file; the header is line 1.
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {0} is not a JSON object")]
    NotAnObject(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the measurement table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, one observation per line (the lab spreadsheet export)
/// * `.json` – `[{ "Type of scour": "live-bed", ... }, ...]`
///
/// The existence check happens first so that a wrong path is reported as
/// such, before any parsing.
pub fn load_file(path: &Path) -> Result<ContractionTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?)?,
        "json" => read_json(&std::fs::read_to_string(path)?)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    log::info!(
        "loaded {} rows ({} columns) from {}",
        table.len(),
        table.column_names.len(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Record layout shared by both formats
// ---------------------------------------------------------------------------

/// One row as it sits in the file, keyed by the trimmed header names.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Type of scour", default)]
    scour_type: Option<String>,
    #[serde(rename = "Authors of the study", default)]
    authors: Option<String>,
    #[serde(rename = "Upstream average flow velocity u1 [m/s]", deserialize_with = "lenient_f64")]
    u1: f64,
    #[serde(rename = "Upstream flow depth y1 [m]", deserialize_with = "lenient_f64")]
    y1: f64,
    #[serde(rename = "Ratio b2/b1", deserialize_with = "lenient_f64")]
    ratio_b2_b1: f64,
    #[serde(rename = "Median diameter  [mm]", deserialize_with = "lenient_f64")]
    d50_mm: f64,
    #[serde(rename = "Geometric standard deviation", deserialize_with = "lenient_f64")]
    geom_std: f64,
    #[serde(rename = "Specific density", deserialize_with = "lenient_f64")]
    specific_density: f64,
    #[serde(rename = "Flow depth at contracted reach y2 [m]", deserialize_with = "lenient_f64")]
    y2: f64,
}

impl From<RawRecord> for MeasurementRow {
    fn from(raw: RawRecord) -> Self {
        MeasurementRow {
            study: StudyLabel::parse(raw.authors.as_deref().unwrap_or("")),
            regime: ScourRegime::parse(raw.scour_type.as_deref().unwrap_or("")),
            u1: raw.u1,
            y1: raw.y1,
            ratio_b2_b1: raw.ratio_b2_b1,
            d50_mm: raw.d50_mm,
            geom_std: raw.geom_std,
            specific_density: raw.specific_density,
            y2: raw.y2,
        }
    }
}

/// Numeric cell: numbers pass through, empty cells and nulls become NaN.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    struct CellVisitor;

    impl<'de> Visitor<'de> for CellVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, an empty cell or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(f64::NAN);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(f64::NAN)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(f64::NAN)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<f64, D::Error> {
            lenient_f64(d)
        }
    }

    deserializer.deserialize_any(CellVisitor)
}

fn check_required(columns: &[String]) -> Result<(), LoadError> {
    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a comma-separated table with a header row. Header names are trimmed
/// of surrounding whitespace; cell contents are taken as-is.
pub fn read_csv<R: io::Read>(source: R) -> Result<ContractionTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    check_required(&headers)?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.map_err(|source| LoadError::Record { line: row_no + 2, source })?;
        rows.push(MeasurementRow::from(raw));
    }

    Ok(ContractionTable::new(rows, headers))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Type of scour": "live-bed", "Authors of the study": "Gill",
///     "Upstream average flow velocity u1 [m/s]": 0.35, ... },
///   ...
/// ]
/// ```
pub fn read_json(text: &str) -> Result<ContractionTable, LoadError> {
    let records: Vec<JsonValue> = serde_json::from_str(text)?;

    let mut column_names: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.into_iter().enumerate() {
        let JsonValue::Object(obj) = rec else {
            return Err(LoadError::NotAnObject(i));
        };

        let normalized: Map<String, JsonValue> = obj
            .into_iter()
            .map(|(key, val)| (key.trim().to_string(), val))
            .collect();
        let keys: Vec<String> = normalized.keys().cloned().collect();
        check_required(&keys)?;
        if column_names.is_empty() {
            column_names = keys;
        }

        let raw: RawRecord = serde_json::from_value(JsonValue::Object(normalized))?;
        rows.push(MeasurementRow::from(raw));
    }

    Ok(ContractionTable::new(rows, column_names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Study, COL_D50_MM, COL_SCOUR_TYPE, COL_U1};

    const HEADER: &str = " Type of scour ,Authors of the study,Upstream average flow velocity u1 [m/s],  Upstream flow depth y1 [m],Ratio b2/b1,Median diameter  [mm] ,Geometric standard deviation,Specific density,Flow depth at contracted reach y2 [m],Notes\n";

    #[test]
    fn csv_headers_are_trimmed_and_rows_parsed() {
        let text = format!(
            "{HEADER}live-bed,Gill,0.40,0.10,0.5,0.9,1.3,2.65,0.16,run 3\n\
             clear-water,Straub,0.25,0.12,0.75,1.2,1.2,2.65,0.14,\n"
        );
        let table = read_csv(text.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.column_names.iter().any(|c| c == COL_SCOUR_TYPE));
        assert!(table.column_names.iter().any(|c| c == COL_D50_MM));

        let first = &table.rows[0];
        assert_eq!(first.regime, ScourRegime::LiveBed);
        assert_eq!(first.study, StudyLabel::Known(Study::Gill));
        assert_eq!(first.u1, 0.40);
        assert_eq!(first.d50_mm, 0.9);
        assert_eq!(first.y2, 0.16);
        assert_eq!(table.rows[1].regime, ScourRegime::ClearWater);
    }

    #[test]
    fn empty_numeric_cell_becomes_nan() {
        let text = format!("{HEADER}live-bed,Rana,0.40,0.10,0.5,,1.3,2.65,0.16,\n");
        let table = read_csv(text.as_bytes()).unwrap();
        assert!(table.rows[0].d50_mm.is_nan());
        assert_eq!(table.rows[0].geom_std, 1.3);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let text = "Type of scour,Authors of the study\nlive-bed,Gill\n";
        match read_csv(text.as_bytes()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, COL_U1),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cell_is_a_record_error() {
        let text = format!("{HEADER}live-bed,Gill,fast,0.10,0.5,0.9,1.3,2.65,0.16,\n");
        assert!(matches!(
            read_csv(text.as_bytes()),
            Err(LoadError::Record { line: 2, .. })
        ));
    }

    #[test]
    fn record_error_names_the_file_line() {
        let text = format!(
            "{HEADER}live-bed,Gill,0.40,0.10,0.5,0.9,1.3,2.65,0.16,\nlive-bed,Gill,0.40,0.10,0.5,coarse,1.3,2.65,0.16,\n"
        );
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Record { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3: "), "{err}");
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = Path::new("definitely/not/here/contraction.csv");
        let err = load_file(path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert!(err.to_string().contains("contraction.csv"));
    }

    #[test]
    fn json_records_with_padded_keys() {
        let text = r#"[
            {" Type of scour": "live-bed", "Authors of the study": "Nowroozpour and Ettema",
             "Upstream average flow velocity u1 [m/s]": 0.5, "Upstream flow depth y1 [m]": 0.2,
             "Ratio b2/b1": 0.6, "Median diameter  [mm]": "0.8", "Geometric standard deviation": 1.4,
             "Specific density": 2.65, "Flow depth at contracted reach y2 [m]": null}
        ]"#;
        let table = read_json(text).unwrap();
        let row = &table.rows[0];
        assert_eq!(row.study, StudyLabel::Known(Study::NowroozpourEttema));
        assert_eq!(row.d50_mm, 0.8);
        assert!(row.y2.is_nan());
    }

    #[test]
    fn json_non_object_record_is_rejected() {
        assert!(matches!(read_json("[1, 2]"), Err(LoadError::NotAnObject(0))));
    }
}

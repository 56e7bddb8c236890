use std::fmt;

// ---------------------------------------------------------------------------
// Column names – as they appear in the lab spreadsheet (after trimming)
// ---------------------------------------------------------------------------

pub const COL_SCOUR_TYPE: &str = "Type of scour";
pub const COL_AUTHORS: &str = "Authors of the study";
pub const COL_U1: &str = "Upstream average flow velocity u1 [m/s]";
pub const COL_Y1: &str = "Upstream flow depth y1 [m]";
pub const COL_RATIO_B2_B1: &str = "Ratio b2/b1";
/// Note the double space: the spreadsheet header really reads like this.
pub const COL_D50_MM: &str = "Median diameter  [mm]";
pub const COL_GEOM_STD: &str = "Geometric standard deviation";
pub const COL_SPECIFIC_DENSITY: &str = "Specific density";
pub const COL_Y2: &str = "Flow depth at contracted reach y2 [m]";

/// Every column the pipeline reads. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_SCOUR_TYPE,
    COL_AUTHORS,
    COL_U1,
    COL_Y1,
    COL_RATIO_B2_B1,
    COL_D50_MM,
    COL_GEOM_STD,
    COL_SPECIFIC_DENSITY,
    COL_Y2,
];

// ---------------------------------------------------------------------------
// ScourRegime – the "Type of scour" column
// ---------------------------------------------------------------------------

/// Sediment regime of an experiment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScourRegime {
    ClearWater,
    LiveBed,
    /// Anything else found in the column, kept verbatim.
    Other(String),
}

impl ScourRegime {
    pub fn parse(label: &str) -> Self {
        match label {
            "clear-water" => ScourRegime::ClearWater,
            "live-bed" => ScourRegime::LiveBed,
            other => ScourRegime::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ScourRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScourRegime::ClearWater => f.pad("clear-water"),
            ScourRegime::LiveBed => f.pad("live-bed"),
            ScourRegime::Other(s) => f.pad(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Study – closed set of live-bed laboratory campaigns
// ---------------------------------------------------------------------------

/// The live-bed studies the comparison is built around, in plotting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Study {
    Straub,
    Ashida,
    Komura,
    Gill,
    Rana,
    NowroozpourEttema,
}

impl Study {
    pub const ALL: [Study; 6] = [
        Study::Straub,
        Study::Ashida,
        Study::Komura,
        Study::Gill,
        Study::Rana,
        Study::NowroozpourEttema,
    ];

    /// Label as written in the "Authors of the study" column.
    pub fn label(self) -> &'static str {
        match self {
            Study::Straub => "Straub",
            Study::Ashida => "Ashida",
            Study::Komura => "Komura",
            Study::Gill => "Gill",
            Study::Rana => "Rana",
            Study::NowroozpourEttema => "Nowroozpour and Ettema",
        }
    }

    /// Label with publication year, used in the figure legend.
    pub fn citation(self) -> &'static str {
        match self {
            Study::Straub => "Straub (1934)",
            Study::Ashida => "Ashida (1963)",
            Study::Komura => "Komura (1966)",
            Study::Gill => "Gill (1981)",
            Study::Rana => "Rana (1986)",
            Study::NowroozpourEttema => "Nowroozpour and Ettema (2021)",
        }
    }

    /// Exact (case-sensitive) label match.
    pub fn from_label(label: &str) -> Option<Study> {
        Study::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Study {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Study label of a row: one of the known studies, or the raw text of an
/// unrecognized one. Unrecognized rows never reach the per-study outputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StudyLabel {
    Known(Study),
    Unrecognized(String),
}

impl StudyLabel {
    pub fn parse(label: &str) -> Self {
        match Study::from_label(label) {
            Some(study) => StudyLabel::Known(study),
            None => StudyLabel::Unrecognized(label.to_string()),
        }
    }

    pub fn study(&self) -> Option<Study> {
        match self {
            StudyLabel::Known(s) => Some(*s),
            StudyLabel::Unrecognized(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// MeasurementRow – one row of the spreadsheet
// ---------------------------------------------------------------------------

/// A single laboratory observation. Numeric cells that were empty hold NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRow {
    pub study: StudyLabel,
    pub regime: ScourRegime,
    /// Upstream average flow velocity u1 [m/s].
    pub u1: f64,
    /// Upstream flow depth y1 [m].
    pub y1: f64,
    /// Contracted over uncontracted channel width.
    pub ratio_b2_b1: f64,
    /// Median sediment diameter [mm].
    pub d50_mm: f64,
    /// Geometric standard deviation of the sediment.
    pub geom_std: f64,
    pub specific_density: f64,
    /// Measured flow depth at the contracted reach y2 [m].
    pub y2: f64,
}

// ---------------------------------------------------------------------------
// ContractionTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed spreadsheet. Row order is file order.
#[derive(Debug, Clone, Default)]
pub struct ContractionTable {
    pub rows: Vec<MeasurementRow>,
    /// Header names after whitespace normalization, in file order.
    pub column_names: Vec<String>,
}

impl ContractionTable {
    pub fn new(rows: Vec<MeasurementRow>, column_names: Vec<String>) -> Self {
        ContractionTable { rows, column_names }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use crate::error::{FillError, FillResult};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

//==============================================================================
// Template Cells
//==============================================================================

/// Contents of a single template cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Formula text as stored in the workbook (without evaluation)
    Formula(String),
}

impl CellValue {
    /// Blank cells are skipped wherever a label or header is expected.
    ///
    /// Empty text, zero and `false` count as blank, the same way an untouched
    /// template cell reads after a round-trip through a spreadsheet editor.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) | CellValue::Formula(s) => s.is_empty(),
            CellValue::Number(n) => *n == 0.0,
            CellValue::Bool(b) => !b,
        }
    }

    /// Text content, only for plain text cells
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Cell rendered as a label, `None` when blank
    pub fn label(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::Formula(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(b) => f.write_str(bool_text(*b)),
        }
    }
}

/// Booleans render capitalised, the way spreadsheets display them
fn bool_text(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

//==============================================================================
// Extracted Data Values
//==============================================================================

/// A leaf value in the extracted data
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Bool(b) => !b,
            Scalar::Number(n) => n.as_f64().is_some_and(|v| v == 0.0),
            Scalar::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => f.write_str(bool_text(*b)),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// An ordered mapping of field names to values
pub type Record = IndexMap<String, FieldValue>;

/// Every shape an extracted field can take
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
    Records(Vec<Record>),
    Record(Record),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Scalar(Scalar::Text(s.into()))
    }

    /// Convert a JSON value into its closed shape.
    ///
    /// Arrays whose elements are all objects become `Records`; any other
    /// array becomes a `List`, with nested containers flattened to text.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Scalar(Scalar::Null),
            Value::Bool(b) => FieldValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => FieldValue::Scalar(Scalar::Number(n)),
            Value::String(s) => FieldValue::Scalar(Scalar::Text(s)),
            Value::Object(map) => FieldValue::Record(record_from_json(map)),
            Value::Array(items) => {
                if !items.is_empty() && items.iter().all(Value::is_object) {
                    let records = items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::Object(map) => Some(record_from_json(map)),
                            _ => None,
                        })
                        .collect();
                    FieldValue::Records(records)
                } else {
                    FieldValue::List(items.into_iter().map(scalar_from_json).collect())
                }
            }
        }
    }

    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Scalar(s) => s.is_falsy(),
            FieldValue::List(v) => v.is_empty(),
            FieldValue::Records(v) => v.is_empty(),
            FieldValue::Record(r) => r.is_empty(),
        }
    }

    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            FieldValue::Records(records) => Some(records),
            _ => None,
        }
    }
}

fn record_from_json(map: serde_json::Map<String, Value>) -> Record {
    map.into_iter()
        .map(|(k, v)| (k, FieldValue::from_json(v)))
        .collect()
}

fn scalar_from_json(value: Value) -> Scalar {
    match FieldValue::from_json(value) {
        FieldValue::Scalar(s) => s,
        nested => Scalar::Text(crate::formatter::format_value(&nested)),
    }
}

//==============================================================================
// Extracted Data
//==============================================================================

/// Reserved key holding the per-site records
pub const SYSTEMS_KEY: &str = "systems";
/// Reserved key holding equipment line items
pub const ITEMS_KEY: &str = "items";
/// Derived key that `items` is folded into
pub const EQUIPMENT_LIST_KEY: &str = "equipment_list";
/// Per-system field used to name its site column
pub const SITE_NAME_KEY: &str = "site_name";

/// The key/value data extracted from one source document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedData {
    fields: Record,
}

impl ExtractedData {
    pub fn new(fields: Record) -> Self {
        Self { fields }
    }

    /// Build from parsed JSON. A top-level array is treated as the `systems` list.
    pub fn from_json(value: Value) -> FillResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::new(record_from_json(map))),
            Value::Array(items) => {
                let mut fields = Record::new();
                fields.insert(
                    SYSTEMS_KEY.to_string(),
                    FieldValue::from_json(Value::Array(items)),
                );
                Ok(Self::new(fields))
            }
            other => Err(FillError::UnsupportedDataShape(format!(
                "expected a JSON object or array at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Keys in source insertion order
    pub fn keys(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Per-site records, empty when `systems` is absent or not a list of mappings
    pub fn systems(&self) -> &[Record] {
        self.fields
            .get(SYSTEMS_KEY)
            .and_then(FieldValue::as_records)
            .unwrap_or(&[])
    }

    pub fn fields(&self) -> &Record {
        &self.fields
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//==============================================================================
// Template Layout
//==============================================================================

/// Layout a template was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One column per site, labels in column A below `header_row`
    MultiColumn { header_row: u32 },
    /// Question/label in column A, answer in column B
    Vertical,
    /// Unrecognized; filled the same way as `Vertical`
    Horizontal,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::MultiColumn { .. } => "multi-column",
            Layout::Vertical => "vertical",
            Layout::Horizontal => "horizontal",
        }
    }

    pub fn header_row(&self) -> Option<u32> {
        match self {
            Layout::MultiColumn { header_row } => Some(*header_row),
            _ => None,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one fill pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    pub layout: Layout,
    pub filled: usize,
}

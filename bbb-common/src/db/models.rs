//! Dataset models

use crate::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};

/// A stored SQLite value, kept untyped until a query coerces it
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Cell {
    /// Coerce to an integer the way `int()` would
    ///
    /// Reals truncate toward zero; text must parse as a number.
    pub fn to_integer(&self, what: &str) -> Result<i64> {
        match self {
            Cell::Integer(v) => Ok(*v),
            Cell::Real(v) => truncate(*v, what),
            Cell::Text(s) => {
                let trimmed = s.trim();
                if let Ok(v) = trimmed.parse::<i64>() {
                    return Ok(v);
                }
                match trimmed.parse::<f64>() {
                    Ok(v) => truncate(v, what),
                    Err(_) => Err(Error::Malformed(format!("{} is not numeric: {:?}", what, s))),
                }
            }
            Cell::Null => Err(Error::Malformed(format!("{} is NULL", what))),
        }
    }

    /// Render as text; NULL is absent
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Integer(v) => Some(v.to_string()),
            Cell::Real(v) => Some(v.to_string()),
            Cell::Text(s) => Some(s.clone()),
        }
    }
}

/// Serialized as stored: NULL is `null`, numbers stay numbers, text stays text
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cell::Null => serializer.serialize_none(),
            Cell::Integer(v) => serializer.serialize_i64(*v),
            Cell::Real(v) => serializer.serialize_f64(*v),
            Cell::Text(s) => serializer.serialize_str(s),
        }
    }
}

fn truncate(v: f64, what: &str) -> Result<i64> {
    if v.is_finite() && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
        Ok(v.trunc() as i64)
    } else {
        Err(Error::Malformed(format!("{} is out of integer range: {}", what, v)))
    }
}

/// Donor metadata for one sample
///
/// `AGE` is free-form survey data and is kept exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleMetadata {
    #[serde(rename = "SAMPLEID")]
    pub sample_id: i64,
    #[serde(rename = "ETHNICITY")]
    pub ethnicity: Option<String>,
    #[serde(rename = "GENDER")]
    pub gender: Option<String>,
    #[serde(rename = "AGE")]
    pub age: Cell,
    #[serde(rename = "LOCATION")]
    pub location: Option<String>,
    #[serde(rename = "BBTYPE")]
    pub bb_type: Option<String>,
}

/// Abundance series for one sample, ranked by value
///
/// `otu_ids[i]` is the row index of the OTU whose count is `sample_values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSeries {
    pub otu_ids: Vec<usize>,
    pub sample_values: Vec<i64>,
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        self.otu_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.otu_ids.is_empty()
    }

    /// First `n` entries (the top `n` by value)
    pub fn top(&self, n: usize) -> SampleSeries {
        let n = n.min(self.len());
        SampleSeries {
            otu_ids: self.otu_ids[..n].to_vec(),
            sample_values: self.sample_values[..n].to_vec(),
        }
    }
}

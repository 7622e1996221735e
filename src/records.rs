//! Wire types for the bucket API.

use serde::{Deserialize, Serialize};

/// One series value inside a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// 1-based series key.
    pub sk: u32,
    pub v: Value,
}

/// A numeric series value.
///
/// Counts stay integers on the wire, rates and averages are floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
}

/// One year of data for a chart, serialized as `{"k": "2020", "d": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub k: String,
    pub d: Vec<DataPoint>,
}

impl Record {
    /// Builds a record whose series keys run 1, 2, 3... in the order of `values`.
    pub fn new(key: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
        let d = values
            .into_iter()
            .zip(1..)
            .map(|(v, sk)| DataPoint { sk, v })
            .collect();

        Self { k: key.into(), d }
    }

    /// Series keys in order, used to check charts stay rectangular.
    pub fn series_keys(&self) -> Vec<u32> {
        self.d.iter().map(|p| p.sk).collect()
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

//! Core domain types for Healthy Coder.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;

/// One individual's body measurements
///
/// Height is in meters and weight in kilograms. Values are not validated:
/// a zero height is only rejected when a BMI is computed from it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coder {
    height: f64,
    weight: f64,
}

impl Coder {
    pub fn new(height: f64, weight: f64) -> Self {
        Self { height, weight }
    }

    /// Height in meters
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Weight in kilograms
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Parse `HEIGHT,WEIGHT`, e.g. `1.82,98.0`
impl FromStr for Coder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (height, weight) = s
            .split_once(',')
            .ok_or_else(|| Error::Input(format!("expected HEIGHT,WEIGHT, got {:?}", s)))?;

        let parse = |field: &str, value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|e| Error::Input(format!("bad {} {:?}: {}", field, value.trim(), e)))
        };

        Ok(Coder::new(parse("height", height)?, parse("weight", weight)?))
    }
}

/// Read a JSON array of `{"height": .., "weight": ..}` objects
pub fn read_coders_json<R: Read>(reader: R) -> Result<Vec<Coder>> {
    let coders: Vec<Coder> = serde_json::from_reader(reader)?;
    tracing::debug!("Read {} coders from JSON", coders.len());
    Ok(coders)
}

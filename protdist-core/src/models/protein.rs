use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ProteinDataError;

///
/// ProteinRecord struct, the static properties of one protein in the
/// annotated protein data file.
///
#[derive(PartialEq, Debug, Clone)]
pub struct ProteinRecord {
    pub id: String,
    /// Molecular weight in Daltons
    pub molecular_weight: f64,
    pub isoelectric_point: f64,
    pub function: String,
}

impl ProteinRecord {
    pub fn new(id: &str, molecular_weight: f64, isoelectric_point: f64, function: &str) -> Self {
        ProteinRecord {
            id: id.to_string(),
            molecular_weight,
            isoelectric_point,
            function: function.to_string(),
        }
    }

    ///
    /// Get the record as a line of the protein data file
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{} {} {} ({})",
            self.id, self.molecular_weight, self.isoelectric_point, self.function
        )
    }
}

impl Display for ProteinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

fn parse_finite(field: &str, value: &str) -> Result<f64, ProteinDataError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            ProteinDataError::MalformedRecord(format!("invalid {}: {:?}", field, value))
        })
}

impl FromStr for ProteinRecord {
    type Err = ProteinDataError;

    ///
    /// Parse one data line: `<id> <molecular_weight> <isoelectric_point> (<function>)`.
    ///
    /// The line must already be stripped of comments and surrounding whitespace.
    /// The function label is everything between the first `(` and the closing `)`
    /// that ends the line, kept verbatim.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (fields, rest) = line.split_once('(').ok_or_else(|| {
            ProteinDataError::MalformedRecord(format!("missing '(' before function label: {:?}", line))
        })?;

        let function = rest.strip_suffix(')').ok_or_else(|| {
            ProteinDataError::MalformedRecord(format!("function label must end with ')': {:?}", line))
        })?;

        let parts: Vec<&str> = fields.split_whitespace().collect();
        let [id, mw, pi] = parts.as_slice() else {
            return Err(ProteinDataError::MalformedRecord(format!(
                "expected 3 fields before the function label, found {}: {:?}",
                parts.len(),
                fields.trim()
            )));
        };

        let molecular_weight = parse_finite("molecular weight", mw)?;
        if molecular_weight <= 0.0 {
            return Err(ProteinDataError::MalformedRecord(format!(
                "molecular weight must be positive, got {}",
                molecular_weight
            )));
        }

        let isoelectric_point = parse_finite("isoelectric point", pi)?;

        Ok(ProteinRecord::new(id, molecular_weight, isoelectric_point, function))
    }
}

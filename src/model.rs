// Record model: the employee record held by the roster and its flat-file
// line form. One record is one line `name,id,designation,salary` with no
// quoting or escaping, so a comma inside a name or designation corrupts
// the record. That limitation is part of the format, not something the
// parser papers over.

use anyhow::{bail, Context, Result};
use std::fmt;

/// One employee record. Field order mirrors the flat-file column order.
///
/// IDs are intended to be unique but nothing enforces it: the roster
/// accepts duplicates, and every lookup by ID resolves to the first
/// match.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub id: i32,
    pub designation: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        id: i32,
        designation: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            designation: designation.into(),
            salary,
        }
    }

    /// Serializes the record as one file line: `name,id,designation,salary`.
    ///
    /// The salary uses the default float formatting (shortest form that
    /// round-trips), so a saved record parses back to exactly the same
    /// value.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.name, self.id, self.designation, self.salary
        )
    }

    /// Parses one file line into a record.
    ///
    /// The line must hold exactly four comma-separated fields. The id and
    /// salary fields are parsed as-is, without trimming: a malformed
    /// numeric field is an error, not a record to skip.
    pub fn from_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            bail!("expected 4 comma-separated fields, got {}", fields.len());
        }
        let id = fields[1]
            .parse::<i32>()
            .with_context(|| format!("invalid employee id `{}`", fields[1]))?;
        let salary = fields[3]
            .parse::<f64>()
            .with_context(|| format!("invalid employee salary `{}`", fields[3]))?;
        Ok(Self {
            name: fields[0].to_string(),
            id,
            designation: fields[2].to_string(),
            salary,
        })
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee [name={}, id={}, designation={}, salary={}]",
            self.name, self.id, self.designation, self.salary
        )
    }
}

//! Typed access to the fields of a record, under a parse policy.
use crate::error::PartitionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How to treat numeric fields that do not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Malformed or missing numbers become zero, and the run goes on.
    #[default]
    Lenient,
    /// Malformed or missing numbers abort the run.
    Strict,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Row<'a> {
    /// 1-based index among the data rows.
    line: usize,
    fields: &'a [String],
    policy: ParsePolicy,
}

impl<'a> Row<'a> {
    pub(crate) fn new(line: usize, fields: &'a [String], policy: ParsePolicy) -> Self {
        Self {
            line,
            fields,
            policy,
        }
    }
    /// Check that the row has at least `required` columns.
    /// Return Ok(false) if the row should be skipped.
    pub(crate) fn has_columns(&self, required: usize) -> Result<bool, PartitionError> {
        if required <= self.fields.len() {
            return Ok(true);
        }
        match self.policy {
            ParsePolicy::Strict => Err(PartitionError::MissingColumns {
                line: self.line,
                expected: required,
                found: self.fields.len(),
            }),
            ParsePolicy::Lenient => Ok(false),
        }
    }
    pub(crate) fn text(&self, column: usize) -> &'a str {
        self.fields.get(column).map(|x| x.as_str()).unwrap_or("")
    }
    /// Parse the `column`-th (0-based) field.
    pub(crate) fn number<T: FromStr + Default>(&self, column: usize) -> Result<T, PartitionError> {
        let field = match self.fields.get(column) {
            Some(field) => field,
            None if self.policy == ParsePolicy::Lenient => return Ok(T::default()),
            None => {
                return Err(PartitionError::MissingColumns {
                    line: self.line,
                    expected: column + 1,
                    found: self.fields.len(),
                })
            }
        };
        match (field.parse::<T>(), self.policy) {
            (Ok(x), _) => Ok(x),
            (Err(_), ParsePolicy::Lenient) => {
                debug!("MALFORMED\t{}\t{}\t{}", self.line, column + 1, field);
                Ok(T::default())
            }
            (Err(_), ParsePolicy::Strict) => Err(PartitionError::Malformed {
                line: self.line,
                column: column + 1,
                field: field.clone(),
            }),
        }
    }
    pub(crate) fn line(&self) -> usize {
        self.line
    }
}

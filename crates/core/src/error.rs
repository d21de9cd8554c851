// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use folio_domain::DomainError;

/// Errors that can occur while planning a bulk update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The submitted ids do not match the current records.
    StaleBatch {
        /// Current ids the batch omits.
        missing: Vec<i64>,
        /// Submitted ids that no longer exist.
        unknown: Vec<i64>,
    },
    /// The same id appears in more than one row.
    DuplicateRow(i64),
    /// The batch has more rows than a sort order can index.
    BatchTooLarge(usize),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::StaleBatch { missing, unknown } => write!(
                f,
                "Batch does not match current records (missing: {missing:?}, unknown: {unknown:?})"
            ),
            Self::DuplicateRow(id) => write!(f, "Record {id} appears more than once in the batch"),
            Self::BatchTooLarge(len) => write!(f, "Batch of {len} rows is too large"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod batch;
mod error;
mod orderable;
mod plan;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use batch::{BulkBatch, BulkRow, NewsEdit};
pub use error::CoreError;
pub use orderable::Orderable;
pub use plan::{
    BulkError, BulkPlan, BulkRejection, PLACEHOLDER_PREFIX, PlannedNews, PlannedRow,
    check_id_set, placeholder_name, plan_bulk_update,
};

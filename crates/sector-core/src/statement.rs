//! Generated statement payload.

use serde::{Deserialize, Serialize};

/// A rendered INSERT statement and the fields that identify its record.
///
/// `sql` carries no trailing terminator; sinks add `;` (and indentation
/// inside transactional blocks) as their output format requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStatement {
    pub id: i64,
    pub code: Option<String>,
    pub name: Option<String>,
    pub sql: String,
}

//! University reference data. Static rows loaded by the seed binary and
//! used only for categorical filtering; listings reference universities
//! by free-text name, not by foreign key.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::user::StudyStream;

/// A row from the `universities` table. The primary key is a slug
/// (e.g. `iit_bombay`), not a BIGSERIAL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub stream: StudyStream,
    pub city: String,
    pub state: String,
}

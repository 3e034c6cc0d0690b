//! Person model for the `users` table.

use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A row from the `users` table.
///
/// `name` is declared non-null here even though the column is not, so a
/// SQL `NULL` fails to decode instead of reaching observers.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Person {
    pub name: String,
}

impl Person {
    /// Decode a person from a raw row.
    pub fn decode(row: &PgRow) -> Result<Self, sqlx::Error> {
        Self::from_row(row)
    }
}

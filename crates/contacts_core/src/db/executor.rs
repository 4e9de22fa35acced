//! Read/write execution facility consumed by repositories.

use super::DbResult;
use rusqlite::{Connection, Row, ToSql};

/// Runs SQL on behalf of a repository.
///
/// Connection acquisition and transaction semantics belong to the
/// implementor; callers only see mapped records or an error.
pub trait QueryExecutor {
    /// Runs a read query and maps every row, preserving result order.
    fn query<T, F>(&self, sql: &str, params: &[&dyn ToSql], mapper: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>;

    /// Runs a write statement with positional parameters.
    ///
    /// Returns the number of affected rows.
    fn update(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize>;
}

impl QueryExecutor for Connection {
    fn query<T, F>(&self, sql: &str, params: &[&dyn ToSql], mapper: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.prepare(sql)?;
        let records = stmt
            .query_map(params, mapper)?
            .collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(records)
    }

    fn update(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize> {
        Ok(self.execute(sql, params)?)
    }
}

impl<E: QueryExecutor + ?Sized> QueryExecutor for &E {
    fn query<T, F>(&self, sql: &str, params: &[&dyn ToSql], mapper: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        (**self).query(sql, params, mapper)
    }

    fn update(&self, sql: &str, params: &[&dyn ToSql]) -> DbResult<usize> {
        (**self).update(sql, params)
    }
}

// Generic data-access object over the entity tables
//
// SQL is built from the Record column metadata, so every entity type
// shares one implementation of insert, update, delete and the
// query-by-parent-key read path. Each operation is a single statement
// and therefore atomic on its own; there is no cross-entity transaction
// coordination here.

use libsql::params::Params;
use libsql::Value;

use super::entity::{ChildRecord, Record};
use super::{DbClient, DbError};

fn select_list<R: Record>() -> String {
    let mut columns = vec!["id"];
    columns.extend_from_slice(R::COLUMNS);
    columns.join(", ")
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl DbClient {
    /// Insert a record and return its generated id.
    pub async fn insert<R: Record>(&self, record: &R) -> Result<i64, DbError> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders(R::COLUMNS.len()),
        );
        self.execute(&sql, Params::Positional(record.values())).await?;
        Ok(self.last_insert_rowid())
    }

    /// Update a record in place, matching on its id.
    pub async fn update<R: Record>(&self, record: &R) -> Result<(), DbError> {
        let assignments = R::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            R::TABLE,
            assignments,
            R::COLUMNS.len() + 1,
        );

        let mut values = record.values();
        values.push(Value::Integer(record.id()));
        let affected = self.execute(&sql, Params::Positional(values)).await?;
        if affected == 0 {
            return Err(DbError::NotFound(R::TABLE, record.id()));
        }
        Ok(())
    }

    /// Delete a record by id.
    pub async fn delete<R: Record>(&self, id: i64) -> Result<(), DbError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);
        let affected = self.execute(&sql, libsql::params![id]).await?;
        if affected == 0 {
            return Err(DbError::NotFound(R::TABLE, id));
        }
        Ok(())
    }

    /// Fetch a record by id.
    pub async fn get<R: Record>(&self, id: i64) -> Result<Option<R>, DbError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            select_list::<R>(),
            R::TABLE,
        );
        let mut rows = self.query(&sql, libsql::params![id]).await?;
        match rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
            Some(row) => Ok(Some(R::from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Fetch every record of a type, in insertion order.
    pub async fn all<R: Record>(&self) -> Result<Vec<R>, DbError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            select_list::<R>(),
            R::TABLE,
        );
        self.collect(&sql, ()).await
    }

    /// Fetch every child record belonging to the given parent row.
    pub async fn by_parent<R: ChildRecord>(&self, parent_id: i64) -> Result<Vec<R>, DbError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1 ORDER BY id",
            select_list::<R>(),
            R::TABLE,
            R::PARENT_COLUMN,
        );
        self.collect(&sql, libsql::params![parent_id]).await
    }

    /// Delete every child record belonging to the given parent row.
    /// Returns the number of rows removed.
    pub async fn delete_by_parent<R: ChildRecord>(&self, parent_id: i64) -> Result<u64, DbError> {
        let sql = format!("DELETE FROM {} WHERE {} = ?1", R::TABLE, R::PARENT_COLUMN);
        self.execute(&sql, libsql::params![parent_id]).await
    }

    async fn collect<R: Record>(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<R>, DbError> {
        let mut rows = self.query(sql, params).await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| DbError::Query(e.to_string()))? {
            records.push(R::from_row(&row)?);
        }
        Ok(records)
    }
}

#[cfg(test)]
#[path = "dao_test.rs"]
mod tests;

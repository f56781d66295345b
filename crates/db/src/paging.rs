//! Generic search + page-number listing over a single table.
//!
//! Rows are filtered (soft-delete flag, then case-insensitive substring
//! search), ordered by `id` ascending, and only then windowed. Because ids
//! only grow, rows inserted between two page requests land after the current
//! window and never shift earlier pages.

use pawmatch_core::pagination::{contains_pattern, normalize_search, Page, PageRequest};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// Describes how to list one table. Built once per repository as a constant.
#[derive(Debug, Clone, Copy)]
pub struct PagedQuery<'a> {
    pub table: &'a str,
    /// Column list selected for each row (must include `id`).
    pub columns: &'a str,
    /// Text columns matched by the search term. Nullable columns are fine.
    pub search_columns: &'a [&'a str],
    /// Boolean soft-delete column, if the table has one.
    pub soft_delete_column: Option<&'a str>,
}

impl PagedQuery<'_> {
    /// Fetch one page plus the filtered total.
    pub async fn fetch<T>(
        &self,
        pool: &PgPool,
        request: PageRequest,
        search: Option<&str>,
        include_deleted: bool,
    ) -> Result<Page<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let pattern = normalize_search(search)
            .filter(|_| !self.search_columns.is_empty())
            .map(contains_pattern);
        let where_clause = self.where_clause(pattern.is_some(), include_deleted);
        let (limit_param, offset_param) = if pattern.is_some() {
            ("$2", "$3")
        } else {
            ("$1", "$2")
        };

        let count_query = format!("SELECT COUNT(*) FROM {}{where_clause}", self.table);
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref pattern) = pattern {
            count = count.bind(pattern);
        }
        let total = count.fetch_one(pool).await?;

        let items_query = format!(
            "SELECT {} FROM {}{where_clause} \
             ORDER BY id ASC \
             LIMIT {limit_param} OFFSET {offset_param}",
            self.columns, self.table
        );
        let mut items = sqlx::query_as::<_, T>(&items_query);
        if let Some(ref pattern) = pattern {
            items = items.bind(pattern);
        }
        let items = items
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        tracing::debug!(
            table = self.table,
            total,
            page = request.page(),
            page_size = request.page_size(),
            "Paged query"
        );
        Ok(Page::new(items, total, request))
    }

    /// Build the `WHERE` clause. The search pattern, when present, is `$1`.
    fn where_clause(&self, has_search: bool, include_deleted: bool) -> String {
        let mut conditions = Vec::new();

        if let Some(column) = self.soft_delete_column.filter(|_| !include_deleted) {
            conditions.push(format!("{column} = false"));
        }
        if has_search {
            let matches: Vec<String> = self
                .search_columns
                .iter()
                .map(|column| format!("{column} ILIKE $1"))
                .collect();
            conditions.push(format!("({})", matches.join(" OR ")));
        }

        if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q: PagedQuery<'static> = PagedQuery {
        table: "attributes",
        columns: "id, name",
        search_columns: &["name", "unit"],
        soft_delete_column: Some("is_deleted"),
    };

    #[test]
    fn active_rows_only_by_default() {
        assert_eq!(Q.where_clause(false, false), " WHERE is_deleted = false");
    }

    #[test]
    fn include_deleted_drops_the_flag_filter() {
        assert_eq!(Q.where_clause(false, true), "");
    }

    #[test]
    fn search_ors_every_column() {
        assert_eq!(
            Q.where_clause(true, false),
            " WHERE is_deleted = false AND (name ILIKE $1 OR unit ILIKE $1)"
        );
        assert_eq!(Q.where_clause(true, true), " WHERE (name ILIKE $1 OR unit ILIKE $1)");
    }
}

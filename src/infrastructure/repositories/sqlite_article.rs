use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleId, ArticlePageRequest, ArticleRepository, ArticleSortField,
    ArticleSummary, ArticleText, ArticleTitle, ArticleUnitOfWork, NewArticle, TransactionMode,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Slice, Sort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, Transaction};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn begin(&self, mode: TransactionMode) -> DomainResult<Box<dyn ArticleUnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(SqliteArticleUnitOfWork { tx, mode }))
    }
}

struct SqliteArticleUnitOfWork {
    tx: Transaction<'static, Sqlite>,
    mode: TransactionMode,
}

impl SqliteArticleUnitOfWork {
    fn ensure_writable(&self) -> DomainResult<()> {
        if self.mode.is_read_only() {
            return Err(DomainError::Persistence(
                "write attempted in a read-only transaction".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    summary: Option<String>,
    text: String,
    author: String,
    date_created: DateTime<Utc>,
    date_updated: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            summary: row.summary.map(ArticleSummary::optional).transpose()?.flatten(),
            text: ArticleText::new(row.text)?,
            author: ArticleAuthor::new(row.author)?,
            date_created: row.date_created,
            date_updated: row.date_updated,
        })
    }
}

/// Row key for `id`. Only the canonical decimal form is accepted; SQLite would
/// otherwise coerce text such as `01` or `1.0` onto the integer key.
fn row_id(id: &ArticleId) -> Option<i64> {
    let raw = id.as_str();
    raw.parse::<i64>()
        .ok()
        .filter(|n| *n > 0 && n.to_string() == raw)
}

fn push_ordering(builder: &mut QueryBuilder<'_, Sqlite>, sort: &Sort<ArticleSortField>) {
    builder.push(" ORDER BY ");
    let mut orders_by_id = false;
    for (index, order) in sort.orders().iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }
        builder.push(order.property.column());
        builder.push(" ");
        builder.push(order.direction.as_sql());
        orders_by_id |= order.property == ArticleSortField::Id;
    }

    // id breaks ties so that pages never overlap or skip rows.
    if !orders_by_id {
        if !sort.is_unsorted() {
            builder.push(", ");
        }
        builder.push("id ASC");
    }
}

#[async_trait]
impl ArticleUnitOfWork for SqliteArticleUnitOfWork {
    fn mode(&self) -> TransactionMode {
        self.mode
    }

    async fn find_by_id(&mut self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let Some(key) = row_id(id) else {
            return Ok(None);
        };
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT CAST(id AS TEXT) AS id, title, summary, text, author, date_created, date_updated
             FROM articles WHERE id = ?",
        )
        .bind(key)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article> {
        self.ensure_writable()?;
        let NewArticle {
            title,
            summary,
            text,
            author,
            date_created,
            date_updated,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, summary, text, author, date_created, date_updated)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING CAST(id AS TEXT) AS id, title, summary, text, author, date_created, date_updated",
        )
        .bind(title.as_str())
        .bind(summary.as_ref().map(ArticleSummary::as_str))
        .bind(text.as_str())
        .bind(author.as_str())
        .bind(date_created)
        .bind(date_updated)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn save(&mut self, article: Article) -> DomainResult<Article> {
        self.ensure_writable()?;
        let key = row_id(&article.id).ok_or_else(|| {
            DomainError::EmptyResult(format!("article {} does not exist", article.id))
        })?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = ?, summary = ?, text = ?, author = ?, date_updated = ?
             WHERE id = ?
             RETURNING CAST(id AS TEXT) AS id, title, summary, text, author, date_created, date_updated",
        )
        .bind(article.title.as_str())
        .bind(article.summary.as_ref().map(ArticleSummary::as_str))
        .bind(article.text.as_str())
        .bind(article.author.as_str())
        .bind(article.date_updated)
        .bind(key)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| {
            DomainError::EmptyResult(format!("article {} no longer exists", article.id))
        })?;
        Article::try_from(row)
    }

    async fn delete_by_id(&mut self, id: &ArticleId) -> DomainResult<()> {
        self.ensure_writable()?;
        let Some(key) = row_id(id) else {
            return Err(DomainError::EmptyResult(format!(
                "no article with id {id} exists"
            )));
        };

        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(key)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::EmptyResult(format!(
                "no article with id {id} exists"
            )));
        }
        Ok(())
    }

    async fn find_all(&mut self, request: &ArticlePageRequest) -> DomainResult<Slice<Article>> {
        let fetch_limit = i64::from(request.size()) + 1;
        let offset = i64::try_from(request.offset())
            .map_err(|_| DomainError::Validation("page offset is too large".into()))?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT CAST(id AS TEXT) AS id, title, summary, text, author, date_created, date_updated FROM articles",
        );
        push_ordering(&mut builder, request.sort());
        builder.push(" LIMIT ");
        builder.push_bind(fetch_limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Slice::from_overfetch(articles, request))
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let Self { tx, .. } = *self;
        tx.commit().await.map_err(map_sqlx)
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        let Self { tx, .. } = *self;
        tx.rollback().await.map_err(map_sqlx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> Option<i64> {
        row_id(&ArticleId::new(raw).unwrap())
    }

    #[test]
    fn only_canonical_decimal_ids_map_to_rows() {
        assert_eq!(key("1"), Some(1));
        assert_eq!(key("4711"), Some(4711));
        for alias in ["01", "001", "1.0", " 1", "1 ", "+1", "1e0", "0x1", "0", "-1", "abc"] {
            assert_eq!(key(alias), None, "{alias:?} must not resolve to a row");
        }
    }
}

// src/application/services/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, ArticleUpdateDto},
        error::{ApplicationError, ApplicationResult},
        ports::{mapper::ArticleMapper, time::Clock},
    },
    domain::{
        article::{
            ArticleId, ArticlePageRequest, ArticleRepository, ArticleUnitOfWork,
            TransactionMode,
        },
        errors::DomainError,
        pagination::Slice,
    },
};

/// Create, read, update, delete and list operations for articles.
///
/// Each public operation runs inside one unit of work: it commits when the
/// operation returns `Ok` and rolls back on any error.
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
    mapper: Arc<dyn ArticleMapper>,
    clock: Arc<dyn Clock>,
}

impl ArticleService {
    pub fn new(
        repository: Arc<dyn ArticleRepository>,
        mapper: Arc<dyn ArticleMapper>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            mapper,
            clock,
        }
    }

    pub async fn create(&self, dto: ArticleDto) -> ApplicationResult<ArticleDto> {
        let mut tx = self.repository.begin(TransactionMode::ReadWrite).await?;
        let outcome = self.create_in(&mut *tx, dto).await;
        let created = finish(tx, outcome).await?;
        tracing::info!(article_id = ?created.id, "article created");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> ApplicationResult<ArticleDto> {
        let id = parse_id(id)?;
        let mut tx = self.repository.begin(TransactionMode::ReadOnly).await?;
        let outcome = self.get_in(&mut *tx, &id).await;
        let article = finish(tx, outcome).await?;
        tracing::debug!(article_id = %id, "article fetched");
        Ok(article)
    }

    pub async fn update(&self, id: &str, update: ArticleUpdateDto) -> ApplicationResult<()> {
        let id = parse_id(id)?;
        let mut tx = self.repository.begin(TransactionMode::ReadWrite).await?;
        let outcome = self.update_in(&mut *tx, &id, &update).await;
        let updated = finish(tx, outcome).await?;
        // The refreshed representation is not part of the operation's result.
        tracing::info!(
            article_id = %id,
            date_updated = ?updated.date_updated,
            "article updated"
        );
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> ApplicationResult<()> {
        let id = parse_id(id)?;
        let mut tx = self.repository.begin(TransactionMode::ReadWrite).await?;
        let outcome = match tx.delete_by_id(&id).await {
            Ok(()) => Ok(()),
            Err(DomainError::EmptyResult(_)) => Err(ApplicationError::article_not_found(&id)),
            Err(other) => Err(other.into()),
        };
        finish(tx, outcome).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }

    pub async fn get_all(
        &self,
        request: &ArticlePageRequest,
    ) -> ApplicationResult<Slice<ArticleDto>> {
        let mut tx = self.repository.begin(TransactionMode::ReadOnly).await?;
        let outcome = tx
            .find_all(request)
            .await
            .map(|page| page.map(|article| self.mapper.to_dto(article)))
            .map_err(ApplicationError::from);
        let page = finish(tx, outcome).await?;
        tracing::debug!(
            page = page.number(),
            size = page.size(),
            returned = page.number_of_elements(),
            has_next = page.has_next(),
            "articles listed"
        );
        Ok(page)
    }

    async fn create_in(
        &self,
        tx: &mut dyn ArticleUnitOfWork,
        mut dto: ArticleDto,
    ) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        dto.date_created = Some(now);
        dto.date_updated = Some(now);

        let entity = self.mapper.to_entity(dto)?;
        let saved = tx.insert(entity).await?;
        Ok(self.mapper.to_dto(saved))
    }

    async fn get_in(
        &self,
        tx: &mut dyn ArticleUnitOfWork,
        id: &ArticleId,
    ) -> ApplicationResult<ArticleDto> {
        let article = tx
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::article_not_found(id))?;
        Ok(self.mapper.to_dto(article))
    }

    async fn update_in(
        &self,
        tx: &mut dyn ArticleUnitOfWork,
        id: &ArticleId,
        update: &ArticleUpdateDto,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = tx
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::article_not_found(id))?;

        self.mapper.merge_update(update, &mut article)?;
        article.touch(self.clock.now());

        let saved = tx.save(article).await?;
        Ok(self.mapper.to_dto(saved))
    }
}

fn parse_id(raw: &str) -> ApplicationResult<ArticleId> {
    // A blank id can never match a stored article.
    ArticleId::new(raw).map_err(|_| ApplicationError::ArticleNotFound { id: raw.to_owned() })
}

async fn finish<T>(
    tx: Box<dyn ArticleUnitOfWork>,
    outcome: ApplicationResult<T>,
) -> ApplicationResult<T> {
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}

// tests/support/mocks/article_repo.rs
use article_service::domain::article::{
    Article, ArticleId, ArticlePageRequest, ArticleRepository, ArticleSortField, ArticleSummary,
    ArticleUnitOfWork, NewArticle, TransactionMode,
};
use article_service::domain::errors::{DomainError, DomainResult};
use article_service::domain::pagination::{Slice, Sort, SortDirection};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
struct Store {
    rows: BTreeMap<u64, Article>,
    last_id: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionCounts {
    pub begun: usize,
    pub committed: usize,
    pub rolled_back: usize,
}

/// Article storage backed by a map. A unit of work edits a private copy of
/// the map and publishes it on commit, so rolled back writes never show.
#[derive(Clone, Default)]
pub struct InMemoryArticleRepository {
    store: Arc<Mutex<Store>>,
    counts: Arc<Mutex<TransactionCounts>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> TransactionCounts {
        *self.counts.lock().unwrap()
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().rows.len()
    }

    /// Makes every subsequent insert/save/delete fail with a persistence error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, AtomicOrdering::SeqCst);
    }

    /// Stores an article directly, outside of any unit of work.
    pub fn seed(&self, article: NewArticle) -> Article {
        let mut store = self.store.lock().unwrap();
        store.insert(article)
    }

    pub fn stored(&self, id: &str) -> Option<Article> {
        let row = key(&ArticleId::new(id).ok()?)?;
        self.store.lock().unwrap().rows.get(&row).cloned()
    }
}

impl Store {
    fn insert(&mut self, article: NewArticle) -> Article {
        self.last_id += 1;
        let id = ArticleId::new(self.last_id.to_string()).unwrap();
        let article = article.with_id(id);
        self.rows.insert(self.last_id, article.clone());
        article
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn begin(&self, mode: TransactionMode) -> DomainResult<Box<dyn ArticleUnitOfWork>> {
        self.counts.lock().unwrap().begun += 1;
        let working = self.store.lock().unwrap().clone();
        Ok(Box::new(InMemoryUnitOfWork {
            shared: Arc::clone(&self.store),
            counts: Arc::clone(&self.counts),
            working,
            mode,
            fail_writes: self.fail_writes.load(AtomicOrdering::SeqCst),
        }))
    }
}

struct InMemoryUnitOfWork {
    shared: Arc<Mutex<Store>>,
    counts: Arc<Mutex<TransactionCounts>>,
    working: Store,
    mode: TransactionMode,
    fail_writes: bool,
}

impl InMemoryUnitOfWork {
    fn ensure_writable(&self) -> DomainResult<()> {
        if self.mode.is_read_only() {
            return Err(DomainError::Persistence("read-only transaction".into()));
        }
        if self.fail_writes {
            return Err(DomainError::Persistence("simulated write failure".into()));
        }
        Ok(())
    }
}

/// Same rule as the SQLite store: only the canonical decimal form names a row.
fn key(id: &ArticleId) -> Option<u64> {
    let raw = id.as_str();
    raw.parse::<u64>()
        .ok()
        .filter(|n| *n > 0 && n.to_string() == raw)
}

fn compare(a: &(u64, Article), b: &(u64, Article), sort: &Sort<ArticleSortField>) -> Ordering {
    for order in sort.orders() {
        let ordering = match order.property {
            ArticleSortField::Id => a.0.cmp(&b.0),
            ArticleSortField::Title => a.1.title.as_str().cmp(b.1.title.as_str()),
            ArticleSortField::Summary => a
                .1
                .summary
                .as_ref()
                .map(ArticleSummary::as_str)
                .cmp(&b.1.summary.as_ref().map(ArticleSummary::as_str)),
            ArticleSortField::Text => a.1.text.as_str().cmp(b.1.text.as_str()),
            ArticleSortField::Author => a.1.author.as_str().cmp(b.1.author.as_str()),
            ArticleSortField::DateCreated => a.1.date_created.cmp(&b.1.date_created),
            ArticleSortField::DateUpdated => a.1.date_updated.cmp(&b.1.date_updated),
        };
        let ordering = match order.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.0.cmp(&b.0)
}

#[async_trait]
impl ArticleUnitOfWork for InMemoryUnitOfWork {
    fn mode(&self) -> TransactionMode {
        self.mode
    }

    async fn find_by_id(&mut self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(key(id).and_then(|k| self.working.rows.get(&k).cloned()))
    }

    async fn insert(&mut self, article: NewArticle) -> DomainResult<Article> {
        self.ensure_writable()?;
        Ok(self.working.insert(article))
    }

    async fn save(&mut self, article: Article) -> DomainResult<Article> {
        self.ensure_writable()?;
        let k = key(&article.id)
            .filter(|k| self.working.rows.contains_key(k))
            .ok_or_else(|| DomainError::EmptyResult(format!("article {} is gone", article.id)))?;
        let stored = self.working.rows.get_mut(&k).unwrap();
        let date_created = stored.date_created;
        *stored = Article {
            date_created,
            ..article
        };
        Ok(stored.clone())
    }

    async fn delete_by_id(&mut self, id: &ArticleId) -> DomainResult<()> {
        self.ensure_writable()?;
        match key(id).and_then(|k| self.working.rows.remove(&k)) {
            Some(_) => Ok(()),
            None => Err(DomainError::EmptyResult(format!("no article with id {id}"))),
        }
    }

    async fn find_all(&mut self, request: &ArticlePageRequest) -> DomainResult<Slice<Article>> {
        let mut rows: Vec<(u64, Article)> = self
            .working
            .rows
            .iter()
            .map(|(k, a)| (*k, a.clone()))
            .collect();
        rows.sort_by(|a, b| compare(a, b, request.sort()));

        let window = rows
            .into_iter()
            .skip(usize::try_from(request.offset()).unwrap())
            .take(request.size() as usize + 1)
            .map(|(_, article)| article)
            .collect();
        Ok(Slice::from_overfetch(window, request))
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let Self {
            shared,
            counts,
            working,
            mode,
            ..
        } = *self;
        if !mode.is_read_only() {
            *shared.lock().unwrap() = working;
        }
        counts.lock().unwrap().committed += 1;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        self.counts.lock().unwrap().rolled_back += 1;
        Ok(())
    }
}

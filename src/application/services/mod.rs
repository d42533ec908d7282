// src/application/services/mod.rs
mod articles;

pub use articles::ArticleService;

use std::sync::Arc;

use crate::{
    application::ports::{ArticleMapperPort, ClockPort},
    domain::article::ArticleRepository,
};

pub struct ApplicationServices {
    pub articles: Arc<ArticleService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        article_mapper: Arc<ArticleMapperPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let articles = Arc::new(ArticleService::new(
            Arc::clone(&article_repo),
            Arc::clone(&article_mapper),
            Arc::clone(&clock),
        ));

        Self { articles }
    }
}

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::{
    error::AppResult,
    hnb::HnbClient,
    models::{MovieView, NewMovie},
    store::MovieStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: MovieStore,
    rates: Arc<HnbClient>,
}

impl CatalogService {
    pub fn new(store: MovieStore, rates: Arc<HnbClient>) -> Self {
        Self { store, rates }
    }

    /// The movie priced at the current rate. The rate is only fetched when
    /// the movie exists.
    pub async fn get_movie(&self, id: Uuid) -> AppResult<Option<MovieView>> {
        let Some(movie) = self.store.find_by_id(id).await? else {
            debug!(%id, "movie not found");
            return Ok(None);
        };

        let rate = self.rates.get_exchange_rate().await?;
        MovieView::priced(movie, rate).map(Some)
    }

    /// Every movie, priced from a single rate snapshot.
    pub async fn get_movies(&self) -> AppResult<Vec<MovieView>> {
        let rate = self.rates.get_exchange_rate().await?;
        let movies = self.store.find_all().await?;

        debug!(count = movies.len(), %rate, "listing movies");
        movies.into_iter().map(|m| MovieView::priced(m, rate)).collect()
    }

    /// Persists `movie`, then prices it. A failed rate lookup still leaves
    /// the movie stored.
    pub async fn create_movie(&self, movie: NewMovie) -> AppResult<MovieView> {
        let movie = self.store.save(movie).await?;
        debug!(id = %movie.id, code = %movie.code, "movie created");

        let rate = self.rates.get_exchange_rate().await?;
        MovieView::priced(movie, rate)
    }
}

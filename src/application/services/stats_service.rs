//! Statistics listing and row expansion state.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::StatRecord;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// Service exposing the fixed statistics dataset.
pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// Lists every statistics record in display order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing source cannot be read.
    pub async fn list_records(&self) -> Result<Vec<StatRecord>, AppError> {
        self.repository.list().await
    }
}

/// Expanded/collapsed state of statistics rows, keyed by record position.
///
/// Explicit state owned by the caller; toggling an open row closes it.
#[derive(Debug, Clone, Default)]
pub struct RowToggles {
    open: HashSet<usize>,
}

impl RowToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds toggle state with the given rows already open.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            open: indices.into_iter().collect(),
        }
    }

    /// Flips the row at `idx` between open and closed.
    pub fn toggle(&mut self, idx: usize) {
        if !self.open.remove(&idx) {
            self.open.insert(idx);
        }
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open.contains(&idx)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

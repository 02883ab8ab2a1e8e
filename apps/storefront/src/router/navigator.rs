//! In-memory navigation history.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::{PageView, RouteError, RouteMatch, RouteTable};

/// History stack over a shared [`RouteTable`]. Clones share the history.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: Arc<RouteTable>,
    history: Arc<Mutex<Vec<RouteMatch>>>,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Navigator {
            table,
            history: Arc::default(),
        }
    }

    fn history(&self) -> MutexGuard<'_, Vec<RouteMatch>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolves `path` and makes it the current entry.
    pub fn push(&self, path: &str) -> Result<PageView, RouteError> {
        let resolved = self.table.resolve(path)?;
        info!(path = %resolved.path, page = ?resolved.page, "navigate");
        let view = resolved.page.render(&resolved.params);
        self.history().push(resolved);
        Ok(view)
    }

    /// Pops the current entry. The first entry is never popped.
    pub fn back(&self) -> Option<PageView> {
        let mut history = self.history();
        if history.len() < 2 {
            debug!("back ignored, no previous entry");
            return None;
        }
        history.pop();
        history.last().map(|m| m.page.render(&m.params))
    }

    pub fn current(&self) -> Option<RouteMatch> {
        self.history().last().cloned()
    }

    pub fn current_path(&self) -> Option<String> {
        self.history().last().map(|m| m.path.clone())
    }

    pub fn depth(&self) -> usize {
        self.history().len()
    }
}

//! Insertion-ordered in-memory store.
//!
//! [`ResourceStore`] is the synchronous half of the framework: it owns the records and
//! implements create / get / update / delete / list. [`ResourceActor`](super::ResourceActor)
//! wraps one so it can be driven from a screen through a client.

use tracing::{debug, info};

use super::core::{Entity, FrameworkError, SequentialId};

/// The authoritative collection of records for one resource type.
///
/// Records are kept in insertion order, which is the order [`list`](Self::list) returns
/// and the order the table renders. Ids are allocated by the store through
/// [`SequentialId`], never by the caller.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Seeds a store with existing records, keeping their order.
    ///
    /// # Errors
    /// [`FrameworkError::DuplicateId`] if two records share an id,
    /// [`FrameworkError::InvalidRecord`] if a record fails [`Entity::check`].
    pub fn from_records(records: Vec<T>) -> Result<Self, FrameworkError> {
        for (index, record) in records.iter().enumerate() {
            if records[..index].iter().any(|seen| seen.id() == record.id()) {
                return Err(FrameworkError::DuplicateId(record.id().to_string()));
            }
            record.check().map_err(|reason| FrameworkError::InvalidRecord {
                id: record.id().to_string(),
                reason,
            })?;
        }
        Ok(Self { records })
    }

    /// Appends a new record with id `max(existing ids) + 1` and returns a copy of it.
    ///
    /// # Errors
    /// [`FrameworkError::IdsExhausted`] when the largest id has no successor. The
    /// collection is left untouched.
    pub fn create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        debug!(?params, "Create");
        let max = self.records.iter().map(T::id).max();
        let id = T::Id::next_after(max).ok_or_else(|| {
            FrameworkError::IdsExhausted(max.map(ToString::to_string).unwrap_or_default())
        })?;
        let item = T::from_create_params(id, params);
        self.records.push(item.clone());
        info!(id = %item.id(), size = self.records.len(), "Created");
        Ok(item)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Replaces the mutable fields of the matching record.
    ///
    /// Returns the updated copy, or `None` when no record matches, in which case the
    /// collection is left untouched.
    pub fn update(&mut self, id: &T::Id, update: T::UpdateParams) -> Option<T> {
        debug!(%id, ?update, "Update");
        let Some(item) = self.records.iter_mut().find(|record| record.id() == id) else {
            debug!(%id, "Update ignored, no such record");
            return None;
        };
        item.on_update(update);
        info!(%id, "Updated");
        Some(item.clone())
    }

    /// Removes the matching record and returns it. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &T::Id) -> Option<T> {
        debug!(%id, "Delete");
        let Some(position) = self.records.iter().position(|record| record.id() == id) else {
            debug!(%id, "Delete ignored, no such record");
            return None;
        };
        let item = self.records.remove(position);
        info!(%id, size = self.records.len(), "Deleted");
        Some(item)
    }

    /// Copies of all records, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

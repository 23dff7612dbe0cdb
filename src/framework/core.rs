//! # Core Resource Framework
//!
//! This module defines the generic building blocks for the store session.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all resource types must implement.
//! - [`SequentialId`]: How a resource allocates the id of its next record.
//! - [`ResourceActor`]: The task that owns a [`ResourceStore`] and serves requests.
//! - [`ResourceClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, DuplicateId).

use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::store::ResourceStore;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource entity must implement to be managed by a [`ResourceStore`].
///
/// # Architecture Note
/// The store and the actor are written *once* against this contract. The associated
/// types pin down which payload goes with which resource: an `Order` is created from
/// an `OrderDraft` and nothing else, and the compiler enforces it.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: SequentialId + Ord + Clone + Send + Sync + Display + Debug + 'static;

    /// The data required to create a new instance.
    type CreateParams: Send + Sync + Debug + 'static;

    /// The data that replaces the mutable fields of an existing instance.
    type UpdateParams: Send + Sync + Debug + 'static;

    /// The permanent identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from the id allocated by the store and the payload.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Self;

    /// Apply an update in place. The id is never touched.
    fn on_update(&mut self, update: Self::UpdateParams);

    /// Checks a record that did not go through `from_create_params`, e.g. a seed.
    /// The default accepts everything.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Id allocation policy for a resource.
///
/// The store hands over the largest id it currently holds (or `None` when empty)
/// and takes whatever this returns as the id of the next record. `None` means the
/// id space is used up.
pub trait SequentialId: Sized {
    fn next_after(max: Option<&Self>) -> Option<Self>;
}

impl SequentialId for u64 {
    /// `max + 1`, starting at `1`. A freed id is only reused when it was the maximum.
    fn next_after(max: Option<&u64>) -> Option<u64> {
        max.map_or(Some(1), |max| max.checked_add(1))
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },
    #[error("No id left after {0}")]
    IdsExhausted(String),
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// The variants map directly onto the store's operations. `Update` and `Delete`
/// answer with `None` when the id is unknown: both are no-ops in that case.
#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The task that owns a store for the lifetime of a screen.
///
/// # Concurrency Model
/// Requests are processed *sequentially* in [`ResourceActor::run`], so exactly one
/// mutation is in flight at a time and the store needs no `Mutex`. Exclusive
/// ownership of the state within the task is the whole locking discipline.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: ResourceStore<T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize, store: ResourceStore<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "order_desk::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let result = self.store.create(params);
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    let item = self.store.update(&id, update);
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let item = self.store.delete(&id);
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.list()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { params, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Update { id, update, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Delete { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u64,
        text: String,
    }

    impl Entity for Note {
        type Id = u64;
        type CreateParams = String;
        type UpdateParams = String;

        fn id(&self) -> &u64 {
            &self.id
        }

        fn from_create_params(id: u64, text: String) -> Self {
            Self { id, text }
        }

        fn on_update(&mut self, text: String) {
            self.text = text;
        }
    }

    #[test]
    fn test_sequential_id_starts_at_one() {
        assert_eq!(u64::next_after(None), Some(1));
        assert_eq!(u64::next_after(Some(&7)), Some(8));
        assert_eq!(u64::next_after(Some(&u64::MAX)), None);
    }

    #[tokio::test]
    async fn test_resource_actor_crud() {
        let (actor, client) = ResourceActor::<Note>::new(10, ResourceStore::new());
        let handle = tokio::spawn(actor.run());

        // 1. Create
        let first = client.create("first".into()).await.unwrap();
        let second = client.create("second".into()).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        // 2. Update
        let updated = client.update(1, "edited".into()).await.unwrap();
        assert_eq!(updated.map(|n| n.text), Some("edited".to_string()));

        // 3. Update of an unknown id is a no-op
        assert_eq!(client.update(42, "ghost".into()).await.unwrap(), None);

        // 4. Delete
        let removed = client.delete(1).await.unwrap();
        assert_eq!(removed.map(|n| n.id), Some(1));
        assert!(client.get(1).await.unwrap().is_none());

        let ids: Vec<u64> = client.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_create_keeps_actor_running() {
        let seed = vec![Note { id: u64::MAX, text: "last".into() }];
        let (actor, client) = ResourceActor::<Note>::new(10, ResourceStore::from_records(seed).unwrap());
        let handle = tokio::spawn(actor.run());

        let result = client.create("overflow".into()).await;
        assert_eq!(result, Err(FrameworkError::IdsExhausted(u64::MAX.to_string())));

        // The session is still alive and unchanged
        let ids: Vec<u64> = client.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![u64::MAX]);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Note>::new(1, ResourceStore::new());
        drop(actor);

        let result = client.list().await;
        assert_eq!(result, Err(FrameworkError::ActorClosed));
    }
}

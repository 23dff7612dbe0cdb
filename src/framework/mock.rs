//! # Mock Framework
//!
//! Utilities for testing screens and clients in isolation.
//!
//! [`MockClient`] answers requests from a queue of expectations instead of a real
//! store, which makes it easy to assert that an operation sent *no* request at all
//! (e.g. a save rejected by validation). For step-by-step control use
//! [`create_mock_client`] together with [`expect_create`] or [`expect_update`].

use crate::framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response the mock will send back.
enum Expectation<T: Entity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_get(1).return_ok(Some(order));
/// mock.expect_update(1).return_ok(Some(updated));
///
/// let client = OrderClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: Entity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Entity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let failures_clone = failures.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                let failure = match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response }))
                    | (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response })) => {
                        let _ = respond_to.send(response);
                        (id != expected).then(|| format!("expected id {expected}, got {id}"))
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update { id: expected, response })) => {
                        let _ = respond_to.send(response);
                        (id != expected).then(|| format!("expected update of {expected}, got {id}"))
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                        None
                    }
                    // Dropping the responder surfaces as `ActorDropped` on the caller's side.
                    (request, _) => Some(format!("unexpected request: {}", describe(&request))),
                };

                if let Some(failure) = failure {
                    failures_clone.lock().unwrap().push(failure);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get { id, response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Delete { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            panic!("Mock received unexpected requests: {:?}", *failures);
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that queues one expectation with its response.
pub struct ExpectationBuilder<T: Entity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: Entity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self { expectations, make: Box::new(make) }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn describe<T: Entity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create({params:?})"),
        ResourceRequest::Get { id, .. } => format!("Get({id})"),
        ResourceRequest::Update { id, update, .. } => format!("Update({id}, {update:?})"),
        ResourceRequest::Delete { id, .. } => format!("Delete({id})"),
        ResourceRequest::List { .. } => "List".to_string(),
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a client and hands back the receiving end of its channel.
///
/// Tests drive the "actor" side themselves: pull the next request with one of the
/// `expect_*` helpers, inspect the payload, then answer through the responder.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::UpdateParams, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, update, respond_to }) => Some((id, update, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderDraft};

    fn draft(product: &str) -> OrderDraft {
        OrderDraft { product: product.to_string(), price: 10.0, quantity: 2 }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        let create_task = tokio::spawn(async move { client.create(draft("Lamp")).await });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.product, "Lamp");
        responder.send(Ok(Order::from_draft(7, payload))).unwrap();

        let result = create_task.await.unwrap().unwrap();
        assert_eq!(result.id, 7);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Order>::new();

        mock.expect_create().return_ok(Order::from_draft(1, draft("Lamp")));
        mock.expect_get(1).return_ok(Some(Order::from_draft(1, draft("Lamp"))));
        mock.expect_delete(1).return_ok(None);

        let client = mock.client();

        let created = client.create(draft("Lamp")).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.map(|o| o.product), Some("Lamp".to_string()));

        assert_eq!(client.delete(1).await.unwrap(), None);

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "unexpected requests")]
    async fn test_verify_reports_unexpected_request() {
        let mock = MockClient::<Order>::new();

        let result = mock.client().list().await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));

        mock.verify();
    }
}

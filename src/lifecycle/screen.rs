use tokio::task::JoinHandle;
use tracing::{info, instrument};

use crate::clients::{ActorClient, OrderClient};
use crate::model::Order;
use crate::notifier::{Notifier, TracingNotifier};
use crate::order_form::{Field, FormError, OrderForm, Submission, ValidationErrors};

use super::config::{ScreenConfig, ToastConfig};
use super::error::ScreenError;

/// What a call to [`OrderScreen::save`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The "new" form was saved as this order.
    Created(Order),
    /// The "edit" form for `id` was saved. `order` is `None` when the row had
    /// already disappeared, in which case nothing changed.
    Updated { id: u64, order: Option<Order> },
    /// Validation failed. The form is still open and shows these errors.
    Invalid(ValidationErrors),
}

/// One mounted order screen.
///
/// `OrderScreen` is responsible for:
/// - **Lifecycle**: [`mount`](Self::mount) spawns the store session that owns the
///   rows, [`unmount`](Self::unmount) shuts it down
/// - **Event handling**: new / edit / field change / cancel / save / delete
/// - **Notification**: one toast per successful save
///
/// Every operation completes before it returns, so events are handled strictly
/// one after the other.
///
/// # Example
///
/// ```ignore
/// let mut screen = OrderScreen::mount(ScreenConfig::default(), TracingNotifier)?;
///
/// screen.edit_order(1).await?;
/// screen.set_field(Field::Quantity, "5");
/// screen.save().await?;
///
/// screen.unmount().await?;
/// ```
pub struct OrderScreen<N: Notifier = TracingNotifier> {
    order_client: OrderClient,
    form: OrderForm,
    notifier: N,
    toast: ToastConfig,
    handle: Option<JoinHandle<()>>,
}

impl<N: Notifier> OrderScreen<N> {
    /// Seeds a store from `config` and spawns its session.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// [`ScreenError::Framework`] when the seed orders contain a duplicate id.
    pub fn mount(config: ScreenConfig, notifier: N) -> Result<Self, ScreenError> {
        let rows = config.seed_orders.len();
        let (actor, order_client) = crate::order_actor::new(config.buffer_size.max(1), config.seed_orders)?;
        let handle = tokio::spawn(actor.run());
        info!(rows, "Order screen mounted");

        Ok(Self {
            order_client,
            form: OrderForm::new(),
            notifier,
            toast: config.toast,
            handle: Some(handle),
        })
    }

    /// Wires a screen to a store session owned by someone else (e.g. a mock).
    ///
    /// [`unmount`](Self::unmount) on such a screen only drops its client.
    pub fn attach(order_client: OrderClient, notifier: N, toast: ToastConfig) -> Self {
        Self {
            order_client,
            form: OrderForm::new(),
            notifier,
            toast,
            handle: None,
        }
    }

    pub fn client(&self) -> &OrderClient {
        &self.order_client
    }

    /// Read-only view of the modal.
    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    /// "New order" button.
    pub fn new_order(&mut self) {
        self.form.open_new();
    }

    /// Edit button on row `id`: opens the form prefilled with that row.
    ///
    /// # Errors
    /// [`OrderError::NotFound`](crate::order_actor::OrderError::NotFound) if the row is
    /// gone; the form stays closed.
    #[instrument(skip(self))]
    pub async fn edit_order(&mut self, id: u64) -> Result<(), ScreenError> {
        let order = self.order_client.require(id).await?;
        self.form.open_edit(&order);
        Ok(())
    }

    /// Typing into one of the inputs.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Cancel, the close button, or a click on the overlay. Nothing is saved.
    pub fn cancel(&mut self) {
        self.form.close();
    }

    /// "Save order" button.
    ///
    /// Invalid input leaves the form open and touches neither the store nor the
    /// notifier. Otherwise the draft is created or applied to the edited row, the
    /// toast is sent and the form closes.
    ///
    /// # Errors
    /// [`FormError::NotOpen`] if the form is closed, or an
    /// [`OrderError`](crate::order_actor::OrderError) if the store session is gone.
    #[instrument(skip(self))]
    pub async fn save(&mut self) -> Result<SaveOutcome, ScreenError> {
        let submission = match self.form.submit() {
            Ok(submission) => submission,
            Err(FormError::Invalid(errors)) => return Ok(SaveOutcome::Invalid(errors)),
            Err(e) => return Err(e.into()),
        };

        let outcome = match submission {
            Submission::Create(draft) => SaveOutcome::Created(self.order_client.create_order(draft).await?),
            Submission::Update(id, draft) => SaveOutcome::Updated {
                id,
                order: self.order_client.update_order(id, draft).await?,
            },
        };

        self.notifier
            .notify(&self.toast.title, &self.toast.description, self.toast.duration());
        self.form.close();
        Ok(outcome)
    }

    /// Delete button on row `id`. Returns the removed row; an unknown id changes nothing.
    #[instrument(skip(self))]
    pub async fn delete_order(&mut self, id: u64) -> Result<Option<Order>, ScreenError> {
        Ok(self.order_client.delete(id).await?)
    }

    /// The table rows, in insertion order.
    pub async fn orders(&self) -> Result<Vec<Order>, ScreenError> {
        Ok(self.order_client.list().await?)
    }

    /// Caption under the table, e.g. `Showing 3 of 3 items`.
    pub async fn summary(&self) -> Result<String, ScreenError> {
        let count = self.orders().await?.len();
        Ok(format!("Showing {count} of {count} items"))
    }

    /// Drops the screen's client and waits for the store session to finish.
    ///
    /// The session only ends once every clone of the client is gone, so callers that
    /// cloned [`client`](Self::client) must drop those first.
    pub async fn unmount(self) -> Result<(), ScreenError> {
        let Self { order_client, handle, .. } = self;
        drop(order_client);

        if let Some(handle) = handle {
            handle
                .await
                .map_err(|e| ScreenError::TaskFailed(e.to_string()))?;
        }
        info!("Order screen unmounted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::RecordingNotifier;
    use crate::framework::FrameworkError;
    use crate::order_actor::OrderError;
    use crate::order_form::FieldError;

    fn mount_with(orders: Vec<Order>) -> (OrderScreen<RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let config = ScreenConfig::default().with_seed_orders(orders);
        let screen = OrderScreen::mount(config, notifier.clone()).unwrap();
        (screen, notifier)
    }

    #[tokio::test]
    async fn test_edit_quantity_preserves_other_fields() {
        let (mut screen, notifier) = mount_with(vec![Order::new(1, "Fan", 100.0, 1)]);

        screen.edit_order(1).await.unwrap();
        screen.set_field(Field::Quantity, "5");
        let outcome = screen.save().await.unwrap();

        let expected = Order::new(1, "Fan", 100.0, 5);
        assert_eq!(outcome, SaveOutcome::Updated { id: 1, order: Some(expected.clone()) });
        assert_eq!(screen.orders().await.unwrap(), vec![expected]);
        assert!(!screen.form().is_open());
        assert_eq!(notifier.toasts().len(), 1);

        screen.unmount().await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_save_changes_nothing() {
        let (mut screen, notifier) = mount_with(vec![]);

        screen.new_order();
        screen.set_field(Field::Product, "Lamp");
        screen.set_field(Field::Price, "-5");
        screen.set_field(Field::Quantity, "2");

        let SaveOutcome::Invalid(errors) = screen.save().await.unwrap() else {
            panic!("expected a validation failure");
        };
        assert_eq!(errors.get(Field::Price), Some(&FieldError::InvalidPositiveNumber));
        assert!(screen.form().is_open());
        assert!(screen.orders().await.unwrap().is_empty());
        assert!(notifier.toasts().is_empty());

        screen.unmount().await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_discards_the_draft() {
        let (mut screen, notifier) = mount_with(vec![]);

        screen.new_order();
        screen.set_field(Field::Product, "Lamp");
        screen.cancel();

        assert!(!screen.form().is_open());
        assert!(matches!(screen.save().await, Err(ScreenError::Form(FormError::NotOpen))));
        assert!(screen.orders().await.unwrap().is_empty());
        assert!(notifier.toasts().is_empty());

        screen.unmount().await.unwrap();
    }

    #[tokio::test]
    async fn test_summary_counts_rows() {
        let (screen, _) = mount_with(ScreenConfig::default().seed_orders);
        assert_eq!(screen.summary().await.unwrap(), "Showing 3 of 3 items");
        screen.unmount().await.unwrap();
    }

    #[tokio::test]
    async fn test_mount_rejects_duplicate_seed_ids() {
        let notifier = RecordingNotifier::new();
        let config = ScreenConfig::default()
            .with_seed_orders(vec![Order::new(1, "Fan", 100.0, 1), Order::new(1, "Lamp", 20.0, 2)]);

        let result = OrderScreen::mount(config, notifier);
        assert!(matches!(result, Err(ScreenError::Framework(_))));
    }

    #[tokio::test]
    async fn test_mount_rejects_seed_rows_that_break_order_rules() {
        let notifier = RecordingNotifier::new();
        let config = ScreenConfig::default()
            .with_seed_orders(vec![Order::new(1, "Fan", 100.0, 1), Order::new(2, "   ", -5.0, 0)]);

        let result = OrderScreen::mount(config, notifier);
        assert!(matches!(
            result,
            Err(ScreenError::Framework(FrameworkError::InvalidRecord { ref id, .. })) if id == "2"
        ));
    }

    #[tokio::test]
    async fn test_save_when_ids_are_exhausted_keeps_session_alive() {
        let (mut screen, notifier) = mount_with(vec![Order::new(u64::MAX, "Fan", 100.0, 1)]);

        screen.new_order();
        screen.set_field(Field::Product, "Lamp");
        screen.set_field(Field::Price, "19.9");
        screen.set_field(Field::Quantity, "3");

        let result = screen.save().await;
        assert!(matches!(result, Err(ScreenError::Order(OrderError::IdsExhausted))));
        assert!(screen.form().is_open());
        assert!(notifier.toasts().is_empty());

        // The store task survived and still answers
        assert_eq!(screen.orders().await.unwrap(), vec![Order::new(u64::MAX, "Fan", 100.0, 1)]);
        screen.unmount().await.unwrap();
    }
}

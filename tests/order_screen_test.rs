use order_desk::clients::OrderClient;
use order_desk::framework::mock::MockClient;
use order_desk::framework::FrameworkError;
use order_desk::lifecycle::{OrderScreen, SaveOutcome, ScreenError, ToastConfig};
use order_desk::model::Order;
use order_desk::notifier::RecordingNotifier;
use order_desk::order_form::{Field, FieldError};

/// Screen logic against a mocked store session.
///
/// The mock answers from a queue of expectations, so any request the screen
/// was not supposed to send shows up in `verify()`.
fn attach(mock: &MockClient<Order>) -> (OrderScreen<RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let screen = OrderScreen::attach(OrderClient::new(mock.client()), notifier.clone(), ToastConfig::default());
    (screen, notifier)
}

#[tokio::test]
async fn test_rejected_save_sends_no_request() {
    let mock = MockClient::<Order>::new();
    let (mut screen, notifier) = attach(&mock);

    screen.new_order();
    screen.set_field(Field::Product, "   ");
    screen.set_field(Field::Price, "abc");
    screen.set_field(Field::Quantity, "1.5");

    let outcome = screen.save().await.unwrap();
    let SaveOutcome::Invalid(errors) = outcome else {
        panic!("expected a validation failure");
    };
    assert_eq!(errors.get(Field::Product), Some(&FieldError::Required(Field::Product)));
    assert_eq!(errors.get(Field::Price), Some(&FieldError::InvalidPositiveNumber));
    assert_eq!(errors.get(Field::Quantity), Some(&FieldError::InvalidPositiveInteger));
    assert!(notifier.toasts().is_empty());

    mock.verify();
}

#[tokio::test]
async fn test_edit_sends_get_then_update() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_get(1).return_ok(Some(Order::new(1, "Fan", 100.0, 1)));
    mock.expect_update(1).return_ok(Some(Order::new(1, "Fan", 100.0, 5)));

    let (mut screen, notifier) = attach(&mock);

    screen.edit_order(1).await.unwrap();
    screen.set_field(Field::Quantity, "5");
    let outcome = screen.save().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Updated { id: 1, order: Some(Order::new(1, "Fan", 100.0, 5)) });
    assert_eq!(notifier.toasts().len(), 1);
    assert!(!screen.form().is_open());

    mock.verify();
}

#[tokio::test]
async fn test_store_failure_keeps_form_open_without_toast() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_create().return_err(FrameworkError::ActorDropped);

    let (mut screen, notifier) = attach(&mock);

    screen.new_order();
    screen.set_field(Field::Product, "Lamp");
    screen.set_field(Field::Price, "19.9");
    screen.set_field(Field::Quantity, "3");

    let result = screen.save().await;
    assert!(matches!(result, Err(ScreenError::Order(_))));
    assert!(screen.form().is_open());
    assert!(notifier.toasts().is_empty());

    mock.verify();
}

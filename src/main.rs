//! Scripted session against a freshly mounted order screen.
//!
//! Mounts the screen with the default three rows, adds an order, fixes a rejected
//! submission, edits a row, deletes one, and logs the table after each step.

use order_desk::lifecycle::{setup_tracing, OrderScreen, SaveOutcome, ScreenConfig, ScreenError};
use order_desk::notifier::TracingNotifier;
use order_desk::order_form::Field;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), ScreenError> {
    setup_tracing();

    let mut screen = OrderScreen::mount(ScreenConfig::default(), TracingNotifier)?;
    log_table(&screen).await?;

    let span = tracing::info_span!("new_order");
    async {
        screen.new_order();
        screen.set_field(Field::Product, "Desk lamp");
        screen.set_field(Field::Price, "0");
        screen.set_field(Field::Quantity, "2.5");

        if let SaveOutcome::Invalid(errors) = screen.save().await? {
            for (field, error) in &errors {
                warn!(%field, %error, "Rejected");
            }
        }

        screen.set_field(Field::Price, "49.9");
        screen.set_field(Field::Quantity, "2");
        if let SaveOutcome::Created(order) = screen.save().await? {
            info!(order_id = order.id, "Order added");
        }
        Ok::<_, ScreenError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("edit_order");
    async {
        screen.edit_order(1).await?;
        screen.set_field(Field::Quantity, "5");
        screen.save().await?;
        Ok::<_, ScreenError>(())
    }
    .instrument(span)
    .await?;

    screen.delete_order(2).await?;
    log_table(&screen).await?;

    screen.unmount().await?;
    info!("Session completed");
    Ok(())
}

async fn log_table(screen: &OrderScreen) -> Result<(), ScreenError> {
    for order in screen.orders().await? {
        info!(
            id = order.id,
            product = %order.product,
            price = order.price,
            quantity = order.quantity,
            "Row"
        );
    }
    info!("{}", screen.summary().await?);
    Ok(())
}

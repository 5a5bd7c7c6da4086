//! `stock list | apply`.

use tracing::info;

use super::Rendered;
use crate::cli::StockCommand;
use crate::render;
use crate::screens::StockScreen;
use crate::session::Session;

pub async fn run(session: &Session, command: StockCommand) -> Rendered {
    let mut screen = StockScreen::new(session.api.clone());
    screen.load().await;

    if let StockCommand::Apply {
        product,
        quantity,
        direction,
    } = command
    {
        let draft = screen.draft_mut();
        draft.product_id = product.unwrap_or_default();
        draft.quantity = quantity;
        draft.direction = direction;
        if screen.submit().await {
            info!(%direction, "Stock transaction recorded");
        }
    }

    Rendered::new(render::stock(&screen), screen.error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session;
    use wings_core::StockDirection;

    #[tokio::test]
    async fn test_deduct() {
        let (session, fake) = session();
        let rendered = run(
            &session,
            StockCommand::Apply {
                product: Some("2".to_string()),
                quantity: "5".to_string(),
                direction: StockDirection::Deduct,
            },
        )
        .await;

        assert_eq!(rendered.error, None);
        assert_eq!(fake.products().await[1].quantity, 15);
        assert!(rendered.output.contains("Coffee  15"));
    }

    #[tokio::test]
    async fn test_missing_product_is_rejected_by_service() {
        let (session, _) = session();
        let rendered = run(
            &session,
            StockCommand::Apply {
                product: None,
                quantity: "5".to_string(),
                direction: StockDirection::Add,
            },
        )
        .await;
        assert_eq!(
            rendered.error.as_deref(),
            Some("Error: Failed to record stock transaction")
        );
    }
}

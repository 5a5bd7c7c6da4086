//! `sales list | record`.

use tracing::info;

use super::Rendered;
use crate::cli::SalesCommand;
use crate::render;
use crate::screens::SalesScreen;
use crate::session::Session;

pub async fn run(session: &Session, command: SalesCommand) -> Rendered {
    let mut screen = SalesScreen::new(session.api.clone());
    screen.load().await;

    if let SalesCommand::Record { product, quantity } = command {
        let draft = screen.draft_mut();
        draft.product_id = product.unwrap_or_default();
        draft.quantity = quantity;
        if screen.submit().await {
            info!("Sale recorded");
        }
    }

    Rendered::new(
        render::sales(&screen, session.render_options()),
        screen.error(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session;
    use crate::error::FAILED_RECORD_SALE;

    #[tokio::test]
    async fn test_record() {
        let (session, fake) = session();
        let rendered = run(
            &session,
            SalesCommand::Record {
                product: Some("1".to_string()),
                quantity: "2".to_string(),
            },
        )
        .await;

        assert_eq!(rendered.error, None);
        assert_eq!(fake.sales().await.len(), 2);
        assert!(rendered.output.contains("Tea (Stock: 3)"));
    }

    #[tokio::test]
    async fn test_bad_quantity() {
        let (session, fake) = session();
        let rendered = run(
            &session,
            SalesCommand::Record {
                product: Some("1".to_string()),
                quantity: "a few".to_string(),
            },
        )
        .await;

        assert_eq!(rendered.error.as_deref(), Some(FAILED_RECORD_SALE));
        assert_eq!(fake.sales().await.len(), 1);
    }
}

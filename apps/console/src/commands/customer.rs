//! `customers list | add | update | delete`.

use tracing::info;

use wings_core::CustomerDraft;

use super::Rendered;
use crate::cli::{CustomerFields, CustomersCommand};
use crate::error::ConsoleResult;
use crate::render;
use crate::screens::CustomersScreen;
use crate::session::Session;

pub async fn run(session: &Session, command: CustomersCommand) -> ConsoleResult<Rendered> {
    let mut screen = CustomersScreen::new(session.api.clone());
    screen.load().await;

    match command {
        CustomersCommand::List => {}
        CustomersCommand::Add(fields) => {
            apply_fields(screen.draft_mut(), fields);
            if screen.submit().await {
                info!("Customer added");
            }
        }
        CustomersCommand::Update { id, fields } => {
            screen.select_by_id(&id)?;
            apply_fields(screen.draft_mut(), fields);
            if screen.submit().await {
                info!(%id, "Customer updated");
            }
        }
        CustomersCommand::Delete { id } => {
            if screen.delete(&id).await {
                info!(%id, "Customer deleted");
            }
        }
    }

    Ok(Rendered::new(render::customers(&screen), screen.error()))
}

fn apply_fields(draft: &mut CustomerDraft, fields: CustomerFields) {
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(contact) = fields.contact {
        draft.contact = contact;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session;
    use crate::error::FAILED_SAVE_CUSTOMER;
    use wings_core::RecordId;

    #[tokio::test]
    async fn test_add_and_list() {
        let (session, _) = session();
        let fields = CustomerFields {
            name: Some("Thabo".to_string()),
            contact: Some("thabo@example.com".to_string()),
        };
        let rendered = run(&session, CustomersCommand::Add(fields)).await.unwrap();
        assert!(rendered.output.contains("Thabo"));
        assert!(rendered.output.contains("Lerato"));
    }

    #[tokio::test]
    async fn test_add_without_name_is_rejected() {
        let (session, _) = session();
        let rendered = run(&session, CustomersCommand::Add(CustomerFields::default()))
            .await
            .unwrap();
        assert_eq!(rendered.error.as_deref(), Some(FAILED_SAVE_CUSTOMER));
    }

    #[tokio::test]
    async fn test_update_keeps_other_fields() {
        let (session, fake) = session();
        let fields = CustomerFields {
            name: Some("Lerato M.".to_string()),
            contact: None,
        };
        run(
            &session,
            CustomersCommand::Update {
                id: RecordId::Number(4),
                fields,
            },
        )
        .await
        .unwrap();

        let customers = fake.customers().await;
        let customer = &customers[0];
        assert_eq!(customer.name, "Lerato M.");
        assert_eq!(customer.contact, "lerato@example.com");
    }
}

//! # Product Commands
//!
//! `products list | add | update | delete`. Add and update fill the product
//! form from the flags; update starts from the current record so only the
//! given flags change.

use std::path::Path;

use tracing::{debug, info};

use wings_core::{ImageUpload, ProductDraft};

use super::Rendered;
use crate::cli::{ProductFields, ProductsCommand};
use crate::error::{ConsoleError, ConsoleResult};
use crate::render;
use crate::screens::ProductsScreen;
use crate::session::Session;

pub async fn run(session: &Session, command: ProductsCommand) -> ConsoleResult<Rendered> {
    let mut screen = ProductsScreen::new(session.api.clone());
    screen.load().await;

    match command {
        ProductsCommand::List => {}
        ProductsCommand::Add(fields) => {
            let image = read_image(fields.image.as_deref())?;
            apply_fields(screen.draft_mut(), fields);
            screen.set_image(image);
            if screen.submit().await {
                info!("Product added");
            }
        }
        ProductsCommand::Update { id, fields } => {
            screen.select_by_id(&id)?;
            let image = read_image(fields.image.as_deref())?;
            apply_fields(screen.draft_mut(), fields);
            screen.set_image(image);
            if screen.submit().await {
                info!(%id, "Product updated");
            }
        }
        ProductsCommand::Delete { id } => {
            if screen.delete(&id).await {
                info!(%id, "Product deleted");
            }
        }
    }

    Ok(Rendered::new(
        render::products(&screen, session.render_options()),
        screen.error(),
    ))
}

/// Overwrites the draft fields that were given on the command line.
fn apply_fields(draft: &mut ProductDraft, fields: ProductFields) {
    let ProductFields {
        name,
        description,
        category,
        price,
        quantity,
        image_url,
        image: _,
    } = fields;

    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(description) = description {
        draft.description = description;
    }
    if let Some(category) = category {
        draft.category = category;
    }
    if let Some(price) = price {
        draft.price = price;
    }
    if let Some(quantity) = quantity {
        draft.quantity = quantity;
    }
    if let Some(image_url) = image_url {
        draft.image_url = image_url;
    }
}

/// Reads an image file for upload.
fn read_image(path: Option<&Path>) -> ConsoleResult<Option<ImageUpload>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let bytes = std::fs::read(path).map_err(|source| ConsoleError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let content_type = image_content_type(path).map(str::to_string);
    debug!(file_name = %file_name, size = bytes.len(), "Image read");

    Ok(Some(ImageUpload {
        file_name,
        content_type,
        bytes,
    }))
}

fn image_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session;
    use std::path::PathBuf;
    use wings_core::{Money, RecordId};

    #[tokio::test]
    async fn test_add_product() {
        let (session, fake) = session();
        let fields = ProductFields {
            name: Some("Scone".to_string()),
            category: Some("Bakery".to_string()),
            price: Some("12".to_string()),
            quantity: Some("8".to_string()),
            ..Default::default()
        };

        let rendered = run(&session, ProductsCommand::Add(fields)).await.unwrap();
        assert_eq!(rendered.error, None);
        assert!(rendered.output.contains("Scone"));
        assert_eq!(fake.products().await[2].price, Some(Money::from_cents(1200)));
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let (session, fake) = session();
        let fields = ProductFields {
            quantity: Some("40".to_string()),
            ..Default::default()
        };

        run(
            &session,
            ProductsCommand::Update {
                id: RecordId::Number(1),
                fields,
            },
        )
        .await
        .unwrap();

        let products = fake.products().await;
        let tea = &products[0];
        assert_eq!(tea.name, "Tea");
        assert_eq!(tea.quantity, 40);
        assert_eq!(tea.price, Some(Money::from_cents(1250)));
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let (session, _) = session();
        let err = run(
            &session,
            ProductsCommand::Update {
                id: RecordId::Number(42),
                fields: ProductFields::default(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[tokio::test]
    async fn test_rejected_add_sets_error() {
        let (session, _) = session();
        let fields = ProductFields {
            name: Some("Scone".to_string()),
            price: Some("free".to_string()),
            quantity: Some("1".to_string()),
            ..Default::default()
        };
        let rendered = run(&session, ProductsCommand::Add(fields)).await.unwrap();
        assert_eq!(rendered.error.as_deref(), Some("Error: Failed to add product"));
    }

    #[tokio::test]
    async fn test_missing_image_file() {
        let (session, fake) = session();
        let fields = ProductFields {
            name: Some("Scone".to_string()),
            image: Some(PathBuf::from("/nonexistent/scone.png")),
            ..Default::default()
        };
        let err = run(&session, ProductsCommand::Add(fields)).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Image { .. }));
        assert_eq!(fake.products().await.len(), 2);
    }

    #[test]
    fn test_image_content_type() {
        assert_eq!(image_content_type(Path::new("a/tea.PNG")), Some("image/png"));
        assert_eq!(image_content_type(Path::new("tea.jpeg")), Some("image/jpeg"));
        assert_eq!(image_content_type(Path::new("tea")), None);
    }
}

//! # Product Endpoint
//!
//! Product create and update go out as `multipart/form-data` so an image file
//! can ride along with the text fields.
//!
//! ## Form Layout
//! ```text
//! ┌──────────────┬─────────────────────────────────────────────┐
//! │ part         │ value                                       │
//! ├──────────────┼─────────────────────────────────────────────┤
//! │ name         │ text                                        │
//! │ description  │ text                                        │
//! │ category     │ text                                        │
//! │ price        │ decimal, or the text "null" when unset      │
//! │ quantity     │ integer, or the text "null" when unset      │
//! │ imageUrl     │ external image URL, may be empty            │
//! │ image        │ optional file part                          │
//! └──────────────┴─────────────────────────────────────────────┘
//! ```

use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

use wings_core::{ImageUpload, Product, ProductPayload, RecordId};

use crate::error::{ClientError, ClientResult, Operation};
use crate::http::HttpInventory;

/// Text sent for a numeric field that has no value.
const NULL_FIELD: &str = "null";

/// Product catalog requests.
#[derive(Debug, Clone, Copy)]
pub struct ProductEndpoint<'a> {
    http: &'a HttpInventory,
}

impl<'a> ProductEndpoint<'a> {
    pub(crate) fn new(http: &'a HttpInventory) -> Self {
        ProductEndpoint { http }
    }

    /// `GET /products`.
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        let request = self.http.client().get(self.http.url(&["products"]));
        let products: Vec<Product> = self
            .http
            .send_json(Operation::ListProducts, request)
            .await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// `POST /products`.
    pub async fn create(
        &self,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> ClientResult<Product> {
        let operation = Operation::CreateProduct;
        let form = product_form(operation, payload, image)?;
        let request = self
            .http
            .client()
            .post(self.http.url(&["products"]))
            .multipart(form);
        self.http.send_json(operation, request).await
    }

    /// `PUT /products/{id}`.
    pub async fn update(
        &self,
        id: &RecordId,
        payload: &ProductPayload,
        image: Option<&ImageUpload>,
    ) -> ClientResult<Product> {
        let operation = Operation::UpdateProduct;
        let form = product_form(operation, payload, image)?;
        let request = self
            .http
            .client()
            .put(self.http.url(&["products", &*id.as_key()]))
            .multipart(form);
        self.http.send_json(operation, request).await
    }

    /// `DELETE /products/{id}`.
    pub async fn delete(&self, id: &RecordId) -> ClientResult<()> {
        let request = self
            .http
            .client()
            .delete(self.http.url(&["products", &*id.as_key()]));
        self.http.send_confirm(Operation::DeleteProduct, request).await
    }
}

/// Text value of each form field, in the order they are sent.
fn form_fields(payload: &ProductPayload) -> [(&'static str, String); 6] {
    [
        ("name", payload.name.clone()),
        ("description", payload.description.clone()),
        ("category", payload.category.clone()),
        (
            "price",
            payload
                .price
                .map_or_else(|| NULL_FIELD.to_string(), |p| p.to_major().to_string()),
        ),
        (
            "quantity",
            payload
                .quantity
                .map_or_else(|| NULL_FIELD.to_string(), |q| q.to_string()),
        ),
        ("imageUrl", payload.image_url.clone()),
    ]
}

fn product_form(
    operation: Operation,
    payload: &ProductPayload,
    image: Option<&ImageUpload>,
) -> ClientResult<Form> {
    let mut form = Form::new();
    for (name, value) in form_fields(payload) {
        form = form.text(name, value);
    }

    if let Some(image) = image {
        let mut part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        if let Some(content_type) = &image.content_type {
            part = part.mime_str(content_type).map_err(|error| {
                warn!(%operation, %error, content_type = %content_type, "Invalid image content type");
                ClientError::request(operation, None)
            })?;
        }
        debug!(file_name = %image.file_name, bytes = image.bytes.len(), "Attaching product image");
        form = form.part("image", part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wings_core::Money;

    fn payload() -> ProductPayload {
        ProductPayload {
            name: "Tea".to_string(),
            description: "Rooibos".to_string(),
            category: "Drinks".to_string(),
            price: Some(Money::from_cents(1250)),
            quantity: Some(5),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_form_fields() {
        let fields = form_fields(&payload());
        assert_eq!(fields[3], ("price", "12.5".to_string()));
        assert_eq!(fields[4], ("quantity", "5".to_string()));
        assert_eq!(fields[5], ("imageUrl", String::new()));
    }

    #[test]
    fn test_unset_numbers_are_sent_as_null_text() {
        let mut payload = payload();
        payload.price = None;
        payload.quantity = None;
        let fields = form_fields(&payload);
        assert_eq!(fields[3].1, "null");
        assert_eq!(fields[4].1, "null");
    }

    #[test]
    fn test_whole_price_has_no_fraction() {
        let mut payload = payload();
        payload.price = Some(Money::from_cents(1200));
        assert_eq!(form_fields(&payload)[3].1, "12");
    }

    #[test]
    fn test_bad_content_type_is_rejected_before_sending() {
        let image = ImageUpload {
            file_name: "tea.png".to_string(),
            content_type: Some("not a mime".to_string()),
            bytes: vec![1, 2, 3],
        };
        let result = product_form(Operation::CreateProduct, &payload(), Some(&image));
        assert!(matches!(result, Err(ClientError::Request { status: None, .. })));
    }
}

//! Request and response bodies.

use serde::{Deserialize, Serialize};

use forestal_core::validation::validate_draft;
use forestal_core::{Money, ProductDraft, ValidationError};

/// Success envelope used by the CRUD routes.
///
/// ```json
/// { "status": "success", "message": "Product created", "data": { "id": 26 } }
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Envelope {
            status: "success",
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Envelope without a payload (`"data": null`).
    pub fn message(message: impl Into<String>) -> Self {
        Envelope {
            status: "success",
            message: message.into(),
            data: None,
        }
    }
}

/// `{ "id": 26 }`, returned by create.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}

/// Decoded query string in arrival order.
///
/// Read as pairs rather than a struct so a repeated key keeps its first
/// value instead of failing the request.
pub type QueryPairs = Vec<(String, String)>;

/// Create / full-update body.
///
/// Every field is optional at the serde level so missing ones can be
/// reported together instead of one per request.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    /// Number or decimal string, rounded to the nearest cent.
    pub price: Option<Money>,
    pub stock: Option<i64>,
    pub image: Option<String>,
}

impl ProductPayload {
    /// Checks presence of every field, then the domain rules.
    pub fn into_draft(self) -> Result<ProductDraft, ValidationError> {
        let ProductPayload {
            name,
            product_type,
            brand,
            description,
            price,
            stock,
            image,
        } = self;

        let mut missing = Vec::new();
        let mut note = |present: bool, field: &str| {
            if !present {
                missing.push(field.to_string());
            }
        };
        note(name.is_some(), "name");
        note(product_type.is_some(), "type");
        note(brand.is_some(), "brand");
        note(description.is_some(), "description");
        note(price.is_some(), "price");
        note(stock.is_some(), "stock");
        note(image.is_some(), "image");

        match (name, product_type, brand, description, price, stock, image) {
            (
                Some(name),
                Some(product_type),
                Some(brand),
                Some(description),
                Some(price),
                Some(stock),
                Some(image),
            ) => {
                let draft = ProductDraft {
                    name,
                    product_type,
                    brand,
                    description,
                    price,
                    stock,
                    image,
                };
                validate_draft(&draft)?;
                Ok(draft)
            }
            _ => Err(ValidationError::MissingFields { fields: missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> serde_json::Value {
        serde_json::json!({
            "name": "Felling Axe",
            "type": "hand tool",
            "brand": "Gransfors",
            "description": "Forged head",
            "price": 129.999,
            "stock": 4,
            "image": "img/axe.jpg"
        })
    }

    #[test]
    fn test_full_payload_becomes_draft() {
        let payload: ProductPayload = serde_json::from_value(full()).unwrap();
        let draft = payload.into_draft().unwrap();
        assert_eq!(draft.product_type, "hand tool");
        assert_eq!(draft.price, Money::from_cents(13000));
    }

    #[test]
    fn test_missing_fields_are_reported_together() {
        let mut body = full();
        let obj = body.as_object_mut().unwrap();
        obj.remove("brand");
        obj.remove("stock");

        let payload: ProductPayload = serde_json::from_value(body).unwrap();
        let err = payload.into_draft().unwrap_err();
        assert_eq!(err.to_string(), "missing fields: brand, stock");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut body = full();
        body["price"] = serde_json::json!("-1.00");

        let payload: ProductPayload = serde_json::from_value(body).unwrap();
        let err = payload.into_draft().unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(Envelope::ok("Product created", CreatedId { id: 3 })).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["id"], 3);

        let json = serde_json::to_value(Envelope::message("Product deleted")).unwrap();
        assert!(json["data"].is_null());
    }
}

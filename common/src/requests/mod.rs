use serde::Deserialize;

#[derive(Debug, Deserialize)]
/// Request payload for the product creation endpoint.
/// Every field is optional so that a missing one surfaces as a validation
/// failure instead of a deserialization error.
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl NewProduct {
    /// A payload is valid when both strings are present and non-empty and
    /// the price is present and non-zero.
    pub fn is_valid(&self) -> bool {
        let has_name = self.name.as_deref().is_some_and(|name| !name.is_empty());
        let has_description = self
            .description
            .as_deref()
            .is_some_and(|description| !description.is_empty());
        let has_price = self.price.is_some_and(|price| price != 0.0);
        has_name && has_description && has_price
    }
}

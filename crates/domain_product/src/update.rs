//! Named-field product updates
//!
//! Callers may describe an update as a loose set of named fields (for
//! example a JSON object coming from an admin tool). Only `name`,
//! `description`, `price`, and `coverage_details` are recognized; any other
//! key is reported and skipped here, at the boundary, so the product itself
//! only ever sees a typed [`ProductUpdate`].

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ProductError;

/// A partial set of product fields to overwrite
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price, in the product's existing currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_details: Option<String>,
}

impl ProductUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn coverage_details(mut self, coverage_details: impl Into<String>) -> Self {
        self.coverage_details = Some(coverage_details.into());
        self
    }

    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.coverage_details.is_none()
    }

    /// Parses a JSON object of named fields
    ///
    /// Unrecognized keys are logged as warnings and returned alongside the
    /// typed update, in the order they appeared.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object, or if a recognized
    /// field holds a value of the wrong type.
    pub fn from_json(value: Value) -> Result<ParsedUpdate, ProductError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => return Err(ProductError::NotAnObject(json_kind(&other))),
        };

        let mut update = ProductUpdate::default();
        let mut unknown_fields = Vec::new();

        for (key, value) in fields {
            match key.as_str() {
                "name" => update.name = Some(field("name", value)?),
                "description" => update.description = Some(field("description", value)?),
                "price" => update.price = Some(field("price", value)?),
                "coverage_details" => {
                    update.coverage_details = Some(field("coverage_details", value)?)
                }
                _ => {
                    warn!(field = %key, "Ignoring unrecognized product field");
                    unknown_fields.push(key);
                }
            }
        }

        Ok(ParsedUpdate {
            update,
            unknown_fields,
        })
    }
}

/// A typed update together with the keys that were skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUpdate {
    pub update: ProductUpdate,
    pub unknown_fields: Vec<String>,
}

fn field<T: DeserializeOwned>(name: &'static str, value: Value) -> Result<T, ProductError> {
    serde_json::from_value(value).map_err(|e| ProductError::invalid_field(name, e))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_recognized_fields_are_parsed() {
        let parsed = ProductUpdate::from_json(json!({
            "price": 550.0,
            "description": "Enhanced comprehensive car insurance."
        }))
        .unwrap();

        assert_eq!(parsed.update.price, Some(dec!(550)));
        assert_eq!(
            parsed.update.description.as_deref(),
            Some("Enhanced comprehensive car insurance.")
        );
        assert!(parsed.update.name.is_none());
        assert!(parsed.unknown_fields.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_collected_and_skipped() {
        let parsed = ProductUpdate::from_json(json!({
            "name": "Auto Shield Plus",
            "status": "suspended",
            "colour": "blue"
        }))
        .unwrap();

        assert_eq!(parsed.update, ProductUpdate::default().name("Auto Shield Plus"));
        assert_eq!(parsed.unknown_fields.len(), 2);
        assert!(parsed.unknown_fields.contains(&"status".to_string()));
        assert!(parsed.unknown_fields.contains(&"colour".to_string()));
    }

    #[test]
    fn test_price_accepts_decimal_strings() {
        let parsed = ProductUpdate::from_json(json!({ "price": "1200.50" })).unwrap();
        assert_eq!(parsed.update.price, Some(dec!(1200.50)));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = ProductUpdate::from_json(json!({ "name": 42 })).unwrap_err();
        assert!(matches!(err, ProductError::InvalidField { field: "name", .. }));
    }

    #[test]
    fn test_non_object_is_an_error() {
        let err = ProductUpdate::from_json(json!(["name"])).unwrap_err();
        assert!(matches!(err, ProductError::NotAnObject("an array")));
    }

    #[test]
    fn test_is_empty() {
        assert!(ProductUpdate::default().is_empty());
        assert!(!ProductUpdate::default().coverage_details("x").is_empty());
    }
}

//! # Payment Intent Types
//!
//! Request and remote-resource types relayed by the gateway.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for creating a payment intent.
///
/// Fields are kept exactly as the caller sent them (`"1000"`, `1000.0`,
/// missing, ...) and forwarded unchanged; the payment provider is the only
/// validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    /// Amount in smallest currency unit (cents for USD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
    /// ISO 4217 currency code, lowercase by provider convention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Value>,
}

impl PaymentIntentRequest {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(Value::from(amount)),
            currency: Some(Value::String(currency.into())),
        }
    }

    /// Amount in smallest currency unit, when it reads as a number.
    ///
    /// Numeric strings count, the same way the provider accepts them.
    pub fn numeric_amount(&self) -> Option<f64> {
        match self.amount.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A payment intent as returned by the provider.
///
/// Only the fields the gateway relays are modelled; everything else in the
/// remote object is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub client_secret: Option<String>,
}

/// The merchant account behind the configured credentials.
///
/// Opaque: relayed to the caller exactly as the provider returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(pub Value);

impl Account {
    /// Account identifier, if the object carries one
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(|v| v.as_str())
    }
}

impl From<Value> for Account {
    fn from(value: Value) -> Self {
        Account(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_keeps_caller_values() {
        let request: PaymentIntentRequest =
            serde_json::from_value(json!({ "amount": "1000", "currency": 7 })).unwrap();

        assert_eq!(request.amount, Some(json!("1000")));
        assert_eq!(request.currency, Some(json!(7)));
        assert_eq!(request.numeric_amount(), Some(1000.0));
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let request: PaymentIntentRequest = serde_json::from_value(json!({})).unwrap();

        assert_eq!(request, PaymentIntentRequest::default());
        assert_eq!(request.numeric_amount(), None);
    }

    #[test]
    fn test_numeric_amount() {
        assert_eq!(PaymentIntentRequest::new(1000, "usd").numeric_amount(), Some(1000.0));

        let fractional = PaymentIntentRequest {
            amount: Some(json!(1000.0)),
            currency: None,
        };
        assert_eq!(fractional.numeric_amount(), Some(1000.0));

        let garbage = PaymentIntentRequest {
            amount: Some(json!({ "value": 1 })),
            currency: None,
        };
        assert_eq!(garbage.numeric_amount(), None);
    }

    #[test]
    fn test_payment_intent_ignores_extra_fields() {
        let intent: PaymentIntent = serde_json::from_value(json!({
            "id": "pi_1",
            "object": "payment_intent",
            "amount": 1000,
            "status": "requires_payment_method",
            "client_secret": "pi_1_secret_abc"
        }))
        .unwrap();

        assert_eq!(intent.id, "pi_1");
        assert_eq!(intent.client_secret.as_deref(), Some("pi_1_secret_abc"));
    }

    #[test]
    fn test_account_is_transparent() {
        let raw = json!({ "id": "acct_1", "country": "US", "charges_enabled": true });
        let account = Account::from(raw.clone());

        assert_eq!(account.id(), Some("acct_1"));
        assert_eq!(serde_json::to_value(&account).unwrap(), raw);
    }
}

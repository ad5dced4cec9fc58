//! # Transaction Metrics
//!
//! Timing and outcome records emitted around each remote payment call.
//! Timestamps serialize as ISO-8601 UTC with millisecond precision
//! (`2024-01-01T00:00:00.000Z`).

use crate::intent::{PaymentIntent, PaymentIntentRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Smallest units per major unit. Assumes a two-decimal currency for every
/// currency code.
pub const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Status recorded for a call the provider did not complete.
pub const FAILED_STATUS: &str = "failed";

/// Convert an amount in smallest currency unit to major units
pub fn to_major_units(amount: f64) -> f64 {
    amount / MINOR_UNITS_PER_MAJOR
}

/// Wall-clock timer started right before a remote call
#[derive(Debug, Clone, Copy)]
pub struct CallTimer {
    started_at: DateTime<Utc>,
}

impl CallTimer {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }

    /// Stop the timer and capture the elapsed interval
    pub fn finish(&self) -> CallTiming {
        CallTiming::between(self.started_at, Utc::now())
    }
}

/// Start/end of a remote call and the elapsed seconds between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CallTiming {
    #[serde(with = "iso_millis")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub end_time: DateTime<Utc>,
    pub duration_seconds: f64,
}

impl CallTiming {
    /// Elapsed time at millisecond resolution, clamped at zero when the
    /// wall clock steps backwards
    pub fn between(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        let millis = (end_time - start_time).num_milliseconds().max(0);
        Self {
            start_time,
            end_time,
            duration_seconds: millis as f64 / 1000.0,
        }
    }
}

/// Metrics for a successfully created payment intent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionLog {
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Amount in major units; null when the requested amount is not numeric
    pub amount: Option<f64>,
    pub currency: Option<Value>,
    pub status: String,
    pub id: String,
    pub client_secret: Option<String>,
    #[serde(flatten)]
    pub timing: CallTiming,
}

impl TransactionLog {
    pub fn succeeded(
        request: &PaymentIntentRequest,
        intent: &PaymentIntent,
        timing: CallTiming,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            amount: request.numeric_amount().map(to_major_units),
            currency: request.currency.clone(),
            status: intent.status.clone(),
            id: intent.id.clone(),
            client_secret: intent.client_secret.clone(),
            timing,
        }
    }
}

/// Metrics for a payment intent request that produced no intent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedTransactionLog {
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Amount as requested, in smallest currency unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Value>,
    pub status: &'static str,
    pub error: String,
    #[serde(flatten)]
    pub timing: CallTiming,
}

impl FailedTransactionLog {
    pub fn failed(request: &PaymentIntentRequest, error: impl Into<String>, timing: CallTiming) -> Self {
        Self {
            timestamp: Utc::now(),
            amount: request.amount.clone(),
            currency: request.currency.clone(),
            status: FAILED_STATUS,
            error: error.into(),
            timing,
        }
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn intent() -> PaymentIntent {
        PaymentIntent {
            id: "pi_1".to_string(),
            status: "succeeded".to_string(),
            client_secret: Some("secret_abc".to_string()),
        }
    }

    #[test]
    fn test_major_units() {
        assert_eq!(to_major_units(1000.0), 10.0);
        assert_eq!(to_major_units(1999.0), 19.99);
        assert_eq!(to_major_units(0.0), 0.0);
    }

    #[test]
    fn test_timing_duration() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let timing = CallTiming::between(start, start + Duration::milliseconds(1250));
        assert_eq!(timing.duration_seconds, 1.25);
    }

    #[test]
    fn test_timing_never_negative() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
        let timing = CallTiming::between(start, start - Duration::seconds(1));
        assert_eq!(timing.duration_seconds, 0.0);
    }

    #[test]
    fn test_timer_finish() {
        let timing = CallTimer::start().finish();
        assert!(timing.duration_seconds >= 0.0);
        assert!(timing.end_time >= timing.start_time);
    }

    #[test]
    fn test_transaction_log_shape() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let timing = CallTiming::between(start, start + Duration::milliseconds(340));
        let log = TransactionLog::succeeded(&PaymentIntentRequest::new(1000, "usd"), &intent(), timing);

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["amount"], 10.0);
        assert_eq!(value["currency"], "usd");
        assert_eq!(value["status"], "succeeded");
        assert_eq!(value["id"], "pi_1");
        assert_eq!(value["client_secret"], "secret_abc");
        assert_eq!(value["start_time"], "2024-01-01T12:00:00.000Z");
        assert_eq!(value["end_time"], "2024-01-01T12:00:00.340Z");
        assert_eq!(value["duration_seconds"], 0.34);
        assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_failed_log_shape() {
        let timing = CallTimer::start().finish();
        let log = FailedTransactionLog::failed(
            &PaymentIntentRequest::new(1000, "usd"),
            "Invalid API Key",
            timing,
        );

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["amount"], 1000);
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"], "Invalid API Key");
        assert!(value.get("id").is_none());
        assert!(value.get("client_secret").is_none());
    }

    #[test]
    fn test_string_amount_is_converted() {
        let request = PaymentIntentRequest {
            amount: Some(Value::from("1000")),
            currency: Some(Value::from("usd")),
        };
        let log = TransactionLog::succeeded(&request, &intent(), CallTimer::start().finish());

        assert_eq!(log.amount, Some(10.0));
    }

    #[test]
    fn test_missing_amount_serializes_null() {
        let log = TransactionLog::succeeded(
            &PaymentIntentRequest::default(),
            &intent(),
            CallTimer::start().finish(),
        );

        let value = serde_json::to_value(&log).unwrap();
        assert!(value["amount"].is_null());
    }

    #[test]
    fn test_failed_log_without_request_fields() {
        let log = FailedTransactionLog::failed(
            &PaymentIntentRequest::default(),
            "expected value at line 1 column 1",
            CallTimer::start().finish(),
        );

        let value = serde_json::to_value(&log).unwrap();
        assert!(value.get("amount").is_none());
        assert!(value.get("currency").is_none());
        assert_eq!(value["status"], "failed");
    }
}

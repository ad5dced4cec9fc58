//! # Request Handlers
//!
//! Axum request handlers for the payment gateway.
//! Each handler makes at most one remote call and answers with its outcome.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use gateway_core::{
    Account, CallTimer, FailedTransactionLog, GatewayError, PaymentIntentRequest, TransactionLog,
};
use serde::Serialize;
use tracing::{error, info, instrument};

/// Body of `GET /`
pub const INDEX_MESSAGE: &str = "Stripe server is running!";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create payment intent response
#[derive(Debug, Serialize)]
pub struct CreatePaymentIntentResponse {
    /// Secret the browser uses to confirm the payment
    #[serde(rename = "clientSecret")]
    pub client_secret: Option<String>,
    /// Metrics for this call
    pub metrics: TransactionLog,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn gateway_error_to_response(err: GatewayError) -> ApiError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string())))
}

fn to_log_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness text
pub async fn index() -> &'static str {
    INDEX_MESSAGE
}

/// Create a payment intent and report timing metrics.
///
/// Body fields are forwarded as sent; only a body that is not a JSON object
/// at all is refused here, and it is reported like any other failed call.
#[instrument(skip(state, payload))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<PaymentIntentRequest>, JsonRejection>,
) -> Result<Json<CreatePaymentIntentResponse>, ApiError> {
    let timer = CallTimer::start();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = GatewayError::InvalidRequest(rejection.body_text());
            return Err(report_failure(
                &state,
                &PaymentIntentRequest::default(),
                timer,
                err,
            ));
        }
    };

    match state.payments.create_payment_intent(&request).await {
        Ok(intent) => {
            let metrics = TransactionLog::succeeded(&request, &intent, timer.finish());

            info!(
                id = %metrics.id,
                status = %metrics.status,
                duration_seconds = metrics.timing.duration_seconds,
                metrics = %to_log_json(&metrics),
                "Stripe transaction metrics"
            );

            Ok(Json(CreatePaymentIntentResponse {
                client_secret: intent.client_secret,
                metrics,
            }))
        }
        Err(err) => Err(report_failure(&state, &request, timer, err)),
    }
}

/// Log a failed payment intent (error line, then failed metrics) and build
/// the response
fn report_failure(
    state: &AppState,
    request: &PaymentIntentRequest,
    timer: CallTimer,
    err: GatewayError,
) -> ApiError {
    let timing = timer.finish();

    error!(
        kind = err.kind(),
        provider = state.payments.provider_name(),
        "Error creating payment intent: {}",
        err
    );

    let failure = FailedTransactionLog::failed(request, err.to_string(), timing);
    info!(
        status = failure.status,
        duration_seconds = failure.timing.duration_seconds,
        metrics = %to_log_json(&failure),
        "Stripe transaction metrics"
    );

    gateway_error_to_response(err)
}

/// Relay the merchant account
#[instrument(skip(state))]
pub async fn get_account(State(state): State<AppState>) -> Result<Json<Account>, ApiError> {
    let account = state.payments.retrieve_account().await.map_err(|err| {
        error!(
            kind = err.kind(),
            provider = state.payments.provider_name(),
            "Error retrieving account: {}",
            err
        );
        gateway_error_to_response(err)
    })?;

    Ok(Json(account))
}

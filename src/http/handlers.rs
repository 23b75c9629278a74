//! Route handlers.
//!
//! Each handler validates its body, asks a generator for a response built
//! from a fresh [`Synth`], and logs payloads for mutating calls.

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Html,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::devices::requests::{
    NonFiscalRequest, PaymentRequest, ReceiptRequest, RefundRequest, WorkShiftRequest,
};
use crate::devices::types::{
    CashRegisterXReport, Device, FiscalReceipt, NonFiscalPrintout, PaymentResponse, PosXReport,
    PosZReport, RefundResponse, ShiftTotals, WorkShiftResponse,
};
use crate::devices::{cash_register, catalog, pos, Synth};
use crate::http::index;
use crate::http::request::JsonBody;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::routing::table::{self, available_routes, Endpoint};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Logs a mutating call's body on the way in.
fn log_request(state: &AppState, endpoint: Endpoint, body: &Value) {
    if state.log_payloads {
        tracing::debug!(endpoint = %endpoint, payload = %body, "Payload");
    }
}

/// Logs the synthesized response on the way out.
fn log_response<T: Serialize>(state: &AppState, endpoint: Endpoint, response: &T) {
    if state.log_payloads {
        match serde_json::to_string(response) {
            Ok(json) => tracing::debug!(endpoint = %endpoint, response = %json, "Response"),
            Err(e) => tracing::warn!(endpoint = %endpoint, error = %e, "Unserializable response"),
        }
    }
}

pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    Html(index::render(state.cors_enabled))
}

pub async fn list_devices() -> Json<Vec<Device>> {
    Json(catalog::list_devices())
}

pub async fn toggle_work_shift(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<WorkShiftResponse> {
    log_request(&state, table::WORK_SHIFT, &body);
    let request = WorkShiftRequest::from_body(&body)?;
    let response = cash_register::toggle_work_shift(&request, &mut Synth::live());
    log_response(&state, table::WORK_SHIFT, &response);
    Ok(Json(response))
}

pub async fn print_receipt(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<FiscalReceipt> {
    log_request(&state, table::RECEIPTS, &body);
    let request = ReceiptRequest::from_body(&body)?;
    let receipt = cash_register::print_receipt(&request, &mut Synth::live());
    log_response(&state, table::RECEIPTS, &receipt);
    Ok(Json(receipt))
}

pub async fn print_non_fiscal(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<NonFiscalPrintout> {
    log_request(&state, table::NON_FISCALS, &body);
    let request = NonFiscalRequest::from_body(&body)?;
    let printout = cash_register::print_non_fiscal(&request, &mut Synth::live());
    log_response(&state, table::NON_FISCALS, &printout);
    Ok(Json(printout))
}

pub async fn process_payment(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<PaymentResponse> {
    log_request(&state, table::PAYMENTS, &body);
    let request = PaymentRequest::from_body(&body)?;
    let payment = pos::pay(&request, &mut Synth::live());
    log_response(&state, table::PAYMENTS, &payment);
    Ok(Json(payment))
}

pub async fn process_refund(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<RefundResponse> {
    log_request(&state, table::REFUNDS, &body);
    let request = RefundRequest::from_body(&body)?;
    let refund = pos::refund(&request, &mut Synth::live());
    log_response(&state, table::REFUNDS, &refund);
    Ok(Json(refund))
}

pub async fn pos_z_report() -> Json<PosZReport> {
    Json(pos::z_report(&mut Synth::live()))
}

pub async fn cash_register_x_report() -> Json<CashRegisterXReport> {
    Json(cash_register::x_report(&mut Synth::live()))
}

pub async fn pos_x_report() -> Json<PosXReport> {
    Json(pos::x_report(&mut Synth::live()))
}

pub async fn shift_totals() -> Json<ShiftTotals> {
    Json(cash_register::shift_totals())
}

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub endpoints: Vec<String>,
}

pub async fn health() -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        timestamp: Synth::live().timestamp(),
        endpoints: available_routes(),
    })
}

/// Fallback for any method + path outside the table, including a known
/// path with the wrong method.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    tracing::warn!(method = %method, target = %target, "No route matched");

    ApiError::NotFound {
        method: method.to_string(),
        target,
    }
}

//! Response shapes returned by the device generators.
//!
//! Field names serialize in camelCase to match what client software expects
//! from the real device gateway.

use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Kind of device in the simulated fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    CashRegister,
    PosTerminal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Device {
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub details: DeviceDetails,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetails {
    pub is_work_shift_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkShiftResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
    pub shift_id: u64,
}

/// Fiscal document as a fiscal drive would register it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalReceipt {
    pub success: bool,
    pub fiscal_document_date_time: String,
    pub fiscal_document_number: u64,
    pub fiscal_document_sign: String,
    pub fiscal_receipt_number: u64,
    pub fn_number: &'static str,
    pub fns_url: &'static str,
    pub registration_number: &'static str,
    pub shift_number: u32,
    pub total: Number,
    pub receipt_type: Value,
    pub fiscal_mark: String,
    pub fiscal_sign: String,
    pub processed_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonFiscalPrintout {
    pub success: bool,
    pub message: &'static str,
    pub printed_at: String,
    pub items_count: usize,
    pub document_type: &'static str,
    pub device_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Completed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub amount: Number,
    pub slip: String,
    pub transaction_number: String,
    pub status: OperationStatus,
    pub processed_at: String,
    pub auth_code: String,
    pub rrn: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundResponse {
    pub success: bool,
    pub refund_id: String,
    pub transaction_number: Value,
    pub amount: Number,
    pub status: OperationStatus,
    pub processed_at: String,
    pub device_id: &'static str,
    pub operator: &'static str,
    pub slip: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    X,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportedDevice {
    Pos,
    CashRegister,
}

/// Shift-closing report of a POS terminal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PosZReport {
    pub success: bool,
    pub report_type: ReportKind,
    pub device_type: ReportedDevice,
    pub generated_at: String,
    pub totals: PosZTotals,
    pub shift_number: u64,
    pub shift_closed_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PosZTotals {
    #[serde(serialize_with = "money")]
    pub sales: f64,
    #[serde(serialize_with = "money")]
    pub refunds: f64,
    pub transactions: u64,
}

/// Interim report of a cash register.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRegisterXReport {
    pub success: bool,
    pub report_type: ReportKind,
    pub device_type: ReportedDevice,
    pub generated_at: String,
    pub shift_info: ShiftInfo,
    pub totals: CashRegisterTotals,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftInfo {
    pub is_open: bool,
    pub opened_at: String,
    pub shift_number: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CashRegisterTotals {
    #[serde(serialize_with = "money")]
    pub cash: f64,
    #[serde(serialize_with = "money")]
    pub electronic: f64,
    #[serde(serialize_with = "money")]
    pub total: f64,
}

/// Interim report of a POS terminal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PosXReport {
    pub success: bool,
    pub report_type: ReportKind,
    pub device_type: ReportedDevice,
    pub generated_at: String,
    pub summary: PosSummary,
    pub payment_methods: Vec<PaymentMethodTotal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PosSummary {
    #[serde(serialize_with = "money")]
    pub total_sales: f64,
    #[serde(serialize_with = "money")]
    pub total_refunds: f64,
    #[serde(serialize_with = "money")]
    pub net_sales: f64,
    pub transaction_count: u64,
    #[serde(serialize_with = "money")]
    pub average_transaction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Mobile,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethodTotal {
    #[serde(rename = "type")]
    pub method: PaymentMethod,
    #[serde(serialize_with = "money")]
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftTotals {
    pub incomes: ChannelTotals,
    pub refunds: ChannelTotals,
}

/// Amounts split by settlement channel.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelTotals {
    #[serde(serialize_with = "money")]
    pub cash: f64,
    #[serde(serialize_with = "money")]
    pub electronically: f64,
}

/// Largest integer an f64 holds exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Money goes out the way a JavaScript client prints it: whole amounts
/// without a fractional part (`200`, not `200.0`).
fn money<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

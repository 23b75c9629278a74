//! POS terminal operations: card payments, refunds and reports.

use rand::Rng;

use crate::devices::requests::{slip_text, PaymentRequest, RefundRequest};
use crate::devices::synth::Synth;
use crate::devices::types::{
    OperationStatus, PaymentMethod, PaymentMethodTotal, PaymentResponse, PosSummary, PosXReport,
    PosZReport, PosZTotals, RefundResponse, ReportKind, ReportedDevice,
};

pub const DEVICE_ID: &str = "POS_001";
pub const OPERATOR: &str = "mock_operator";

/// Prefix the acquirer puts in front of every transaction number.
const TRANSACTION_PREFIX: &str = "100";

pub fn pay<R: Rng>(request: &PaymentRequest, synth: &mut Synth<R>) -> PaymentResponse {
    let slip = format!(
        "Текстовое содержимое слипа\nДата операции: {}\nСумма: {} руб.\nТип операции: Оплата\nСтатус: Успешно",
        synth.slip_datetime(),
        request.amount,
    );

    PaymentResponse {
        amount: request.amount.clone(),
        slip,
        transaction_number: format!("{TRANSACTION_PREFIX}{}", synth.below(10_000_000)),
        status: OperationStatus::Completed,
        processed_at: synth.timestamp(),
        auth_code: synth.digits(1_000_000),
        rrn: synth.digits(1_000_000_000_000),
    }
}

pub fn refund<R: Rng>(request: &RefundRequest, synth: &mut Synth<R>) -> RefundResponse {
    let refund_id = format!("REF_{}_{}", synth.epoch_millis(), synth.below(1_000));
    let slip = format!(
        "Слип возврата\nСумма: {} руб.\nТранзакция: {}",
        request.amount,
        slip_text(&request.transaction_number),
    );

    RefundResponse {
        success: true,
        refund_id,
        transaction_number: request.transaction_number.clone(),
        amount: request.amount.clone(),
        status: OperationStatus::Completed,
        processed_at: synth.timestamp(),
        device_id: DEVICE_ID,
        operator: OPERATOR,
        slip,
    }
}

pub fn z_report<R: Rng>(synth: &mut Synth<R>) -> PosZReport {
    PosZReport {
        success: true,
        report_type: ReportKind::Z,
        device_type: ReportedDevice::Pos,
        generated_at: synth.timestamp(),
        totals: PosZTotals {
            sales: synth.money(100_000),
            refunds: synth.money(10_000),
            transactions: synth.below(100),
        },
        shift_number: synth.below(1_000),
        shift_closed_at: synth.timestamp(),
    }
}

pub fn x_report<R: Rng>(synth: &mut Synth<R>) -> PosXReport {
    let summary = PosSummary {
        total_sales: synth.money(200_000),
        total_refunds: synth.money(5_000),
        net_sales: synth.money(195_000),
        transaction_count: synth.below(150),
        average_transaction: synth.money(1_500),
    };

    let payment_methods = [
        (PaymentMethod::Cash, 50_000),
        (PaymentMethod::Card, 100_000),
        (PaymentMethod::Mobile, 50_000),
    ]
    .into_iter()
    .map(|(method, bound)| PaymentMethodTotal {
        method,
        amount: synth.money(bound),
    })
    .collect();

    PosXReport {
        success: true,
        report_type: ReportKind::X,
        device_type: ReportedDevice::Pos,
        generated_at: synth.timestamp(),
        summary,
        payment_methods,
    }
}

//! Cash register operations: work shift, fiscal receipts, non-fiscal
//! printouts, interim reports and shift totals.

use rand::Rng;

use crate::devices::requests::{NonFiscalRequest, ReceiptRequest, WorkShiftRequest};
use crate::devices::synth::Synth;
use crate::devices::types::{
    CashRegisterTotals, CashRegisterXReport, ChannelTotals, FiscalReceipt, NonFiscalPrintout,
    ReportKind, ReportedDevice, ShiftInfo, ShiftTotals, WorkShiftResponse,
};

/// Serial number of the simulated fiscal drive.
pub const FN_NUMBER: &str = "9960440300757395";
pub const FNS_URL: &str = "www.nalog.gov.ru";
pub const REGISTRATION_NUMBER: &str = "0004622719017597";
pub const SHIFT_NUMBER: u32 = 116;
pub const DEVICE_ID: &str = "cash-register-mock-001";

/// An X-report assumes the shift was opened this long ago.
const SHIFT_AGE_HOURS: i64 = 8;

pub fn toggle_work_shift<R: Rng>(
    request: &WorkShiftRequest,
    synth: &mut Synth<R>,
) -> WorkShiftResponse {
    WorkShiftResponse {
        success: true,
        message: if request.open {
            "Смена открыта"
        } else {
            "Смена закрыта"
        },
        timestamp: synth.timestamp(),
        shift_id: synth.below(10_000),
    }
}

pub fn print_receipt<R: Rng>(request: &ReceiptRequest, synth: &mut Synth<R>) -> FiscalReceipt {
    FiscalReceipt {
        success: true,
        fiscal_document_date_time: synth.fiscal_timestamp(),
        fiscal_document_number: synth.below(100_000),
        fiscal_document_sign: synth.digits(1_000_000_000),
        fiscal_receipt_number: synth.below(1_000),
        fn_number: FN_NUMBER,
        fns_url: FNS_URL,
        registration_number: REGISTRATION_NUMBER,
        shift_number: SHIFT_NUMBER,
        total: request.sum.clone(),
        receipt_type: request.operation.clone(),
        fiscal_mark: synth.digits(1_000_000_000_000_000),
        fiscal_sign: synth.digits(1_000_000_000),
        processed_at: synth.timestamp(),
    }
}

pub fn print_non_fiscal<R: Rng>(
    request: &NonFiscalRequest,
    synth: &mut Synth<R>,
) -> NonFiscalPrintout {
    NonFiscalPrintout {
        success: true,
        message: "Нефискальный документ успешно напечатан",
        printed_at: synth.timestamp(),
        items_count: request.lines.len(),
        document_type: "non-fiscal",
        device_id: DEVICE_ID,
    }
}

pub fn x_report<R: Rng>(synth: &mut Synth<R>) -> CashRegisterXReport {
    CashRegisterXReport {
        success: true,
        report_type: ReportKind::X,
        device_type: ReportedDevice::CashRegister,
        generated_at: synth.timestamp(),
        shift_info: ShiftInfo {
            is_open: true,
            opened_at: synth.hours_ago(SHIFT_AGE_HOURS),
            shift_number: synth.below(1_000),
        },
        totals: CashRegisterTotals {
            cash: synth.money(50_000),
            electronic: synth.money(100_000),
            total: synth.money(150_000),
        },
    }
}

pub fn shift_totals() -> ShiftTotals {
    ShiftTotals {
        incomes: ChannelTotals {
            cash: 200.0,
            electronically: 4000.68,
        },
        refunds: ChannelTotals {
            cash: 100.0,
            electronically: 1000.0,
        },
    }
}

//! Request validation failures.

use thiserror::Error;

/// A violated input constraint. The display text is the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Поле isActive обязательно")]
    ShiftFlagMissing,

    #[error("Поле items обязательно и должно содержать массив позиций")]
    ReceiptItemsMissing,

    #[error("Неверная сумма платежа")]
    InvalidReceiptSum,

    #[error("Тип операции обязателен (sell, refund, etc.)")]
    OperationTypeMissing,

    #[error("Тело запроса должно быть массивом элементов для печати")]
    PrintItemsMissing,

    #[error("Неверная сумма платежа")]
    InvalidPaymentAmount,

    #[error("Неверная сумма возврата")]
    InvalidRefundAmount,

    #[error("Номер транзакции обязателен")]
    TransactionNumberMissing,
}

impl ValidationError {
    /// Whether the 400 body carries `success: false`. The work-shift toggle
    /// answers with a bare `{ message }`.
    pub fn reports_success_flag(&self) -> bool {
        !matches!(self, ValidationError::ShiftFlagMissing)
    }
}

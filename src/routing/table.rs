//! Documented endpoint table.
//!
//! The single source for the index page, the health report and the 404
//! route listing. The axum router in `http::server` wires the handlers for
//! exactly these entries.

use std::fmt;

/// HTTP verbs used by the device API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Put,
    Post,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Put => "PUT",
            Verb::Post => "POST",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One method + exact path pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub verb: Verb,
    pub path: &'static str,
}

impl Endpoint {
    const fn new(verb: Verb, path: &'static str) -> Self {
        Self { verb, path }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.path)
    }
}

pub const DEVICES: Endpoint = Endpoint::new(Verb::Get, "/devices");
pub const WORK_SHIFT: Endpoint = Endpoint::new(Verb::Put, "/devices/cash-register/work-shift");
pub const POS_Z_REPORT: Endpoint = Endpoint::new(Verb::Post, "/devices/pos/reports/z");
pub const CASH_REGISTER_X_REPORT: Endpoint =
    Endpoint::new(Verb::Post, "/devices/cash-register/reports/x");
pub const POS_X_REPORT: Endpoint = Endpoint::new(Verb::Post, "/devices/pos/reports/x");
pub const SHIFT_TOTALS: Endpoint =
    Endpoint::new(Verb::Get, "/devices/cash-register/shift-totals");
pub const PAYMENTS: Endpoint = Endpoint::new(Verb::Post, "/devices/pos/payments");
pub const RECEIPTS: Endpoint = Endpoint::new(Verb::Post, "/devices/cash-register/receipts");
pub const NON_FISCALS: Endpoint = Endpoint::new(Verb::Post, "/devices/cash-register/non-fiscals");
pub const REFUNDS: Endpoint = Endpoint::new(Verb::Post, "/devices/pos/refunds");
pub const HEALTH: Endpoint = Endpoint::new(Verb::Get, "/healthz");

/// Every documented endpoint, in the order clients see them listed.
pub const ENDPOINTS: [Endpoint; 11] = [
    DEVICES,
    WORK_SHIFT,
    POS_Z_REPORT,
    CASH_REGISTER_X_REPORT,
    POS_X_REPORT,
    SHIFT_TOTALS,
    PAYMENTS,
    RECEIPTS,
    NON_FISCALS,
    REFUNDS,
    HEALTH,
];

/// `"METHOD /path"` strings for response bodies.
pub fn available_routes() -> Vec<String> {
    ENDPOINTS.iter().map(ToString::to_string).collect()
}

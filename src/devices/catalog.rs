//! Static fleet listing.

use crate::devices::types::{Device, DeviceDetails, DeviceKind};

/// The two simulated devices. Both always report an active shift.
pub fn list_devices() -> Vec<Device> {
    [DeviceKind::CashRegister, DeviceKind::PosTerminal]
        .into_iter()
        .map(|kind| Device {
            kind,
            details: DeviceDetails {
                is_work_shift_active: true,
            },
        })
        .collect()
}

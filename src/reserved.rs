//! Attachment slots taken up by non-removable devices.
//!
//! These slots count against the shared attachment budget only. The EBS
//! specific limits already account for local devices in their values.

use std::collections::BTreeMap;

use log::trace;
use serde::Serialize;
use strum::IntoEnumIterator;

use instancedefs::devices::DeviceClass;

use crate::tables;

/// Returns the slots taken by devices of the given class on `id`, or `None`
/// when the instance type is not listed for that class.
pub fn device_slots(id: &str, class: DeviceClass) -> Option<u32> {
    tables::device_table(class).get(id).copied()
}

/// Returns how many slots of the shared attachment budget are already taken
/// on `id` by NVMe instance store volumes, GPUs and accelerators. Each class
/// contributes 0 when the instance type is not listed for it.
///
/// Classes are added up. Some instance types carry both NVMe instance store
/// volumes and GPUs (e.g. `g5.xlarge`) or accelerators (e.g. `trn1.2xlarge`),
/// and each of those devices takes its own slot.
pub fn reserved_slots(id: &str) -> u32 {
    let total: u32 = DeviceClass::iter()
        .filter_map(|class| device_slots(id, class))
        .sum();
    trace!("Reserved slots for '{id}': {total}");
    total
}

/// Per device class breakdown of the reserved slots of an instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedSlots {
    /// Slots per device class. Classes the instance type is not listed for
    /// are left out.
    pub devices: BTreeMap<&'static str, u32>,
    pub total: u32,
}

impl ReservedSlots {
    pub fn for_instance_type(id: &str) -> Self {
        let devices: BTreeMap<_, _> = DeviceClass::iter()
            .filter_map(|class| device_slots(id, class).map(|slots| (class.as_str(), slots)))
            .collect();
        let total: u32 = devices.values().sum();
        ReservedSlots { devices, total }
    }
}

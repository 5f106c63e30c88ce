//! Lookup maps built once from the `instancedefs` reference tables.
//!
//! Every map is materialized on first access and never mutated afterwards, so
//! concurrent readers need no synchronization beyond what `lazy_static`
//! provides for the initialization itself.

use std::collections::{BTreeMap, HashMap, HashSet};

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use strum::IntoEnumIterator;

use instancedefs::{
    dedicated::{DEDICATED_LIMIT_FAMILIES, DEDICATED_LIMIT_OVERRIDES, DEDICATED_LIMIT_SIZES},
    devices::DeviceClass,
    limits::{MAX_VOLUME_LIMITS, NON_NITRO_INSTANCE_FAMILIES},
};

lazy_static! {
    /// Families known to use the legacy (non-Nitro) attachment accounting.
    pub(crate) static ref NON_NITRO_FAMILIES: HashSet<&'static str> =
        NON_NITRO_INSTANCE_FAMILIES.iter().copied().collect();

    /// Documented per-type EBS volume limits.
    pub(crate) static ref MAX_VOLUMES: HashMap<&'static str, u32> =
        MAX_VOLUME_LIMITS.iter().copied().collect();

    /// Dedicated EBS volume limits, keyed by full instance type.
    pub(crate) static ref DEDICATED_LIMITS: HashMap<String, u32> = build_dedicated_limits();

    /// NVMe instance store volumes, keyed by instance type.
    pub(crate) static ref NVME_INSTANCE_STORE: HashMap<&'static str, u32> =
        DeviceClass::NvmeInstanceStore.table().iter().copied().collect();

    /// GPUs, keyed by instance type.
    pub(crate) static ref GPUS: HashMap<&'static str, u32> =
        DeviceClass::Gpu.table().iter().copied().collect();

    /// Accelerator slots, keyed by instance type.
    pub(crate) static ref ACCELERATOR_SLOTS: HashMap<&'static str, u32> =
        DeviceClass::Accelerator.table().iter().copied().collect();

    /// High memory bare metal, e.g. `u-6tb1.metal`.
    pub(crate) static ref HIGH_MEMORY_METAL_REGEX: Regex =
        Regex::new(r"^u-[a-z0-9]+\.metal$").expect("Failed to compile regex");

    /// High memory virtualized, e.g. `u-6tb1.112xlarge`. Only the start is
    /// anchored.
    pub(crate) static ref HIGH_MEMORY_VIRTUAL_REGEX: Regex =
        Regex::new(r"^u-[a-z0-9]+\.[a-z0-9]+").expect("Failed to compile regex");

    /// Any other bare metal type. Only the end is anchored.
    pub(crate) static ref BARE_METAL_REGEX: Regex =
        Regex::new(r"[a-z0-9]+\.metal$").expect("Failed to compile regex");
}

/// Returns the table for the given device class.
pub(crate) fn device_table(class: DeviceClass) -> &'static HashMap<&'static str, u32> {
    match class {
        DeviceClass::NvmeInstanceStore => &*NVME_INSTANCE_STORE,
        DeviceClass::Gpu => &*GPUS,
        DeviceClass::Accelerator => &*ACCELERATOR_SLOTS,
    }
}

/// Returns the number of entries of every lookup table, keyed by table name.
pub(crate) fn table_sizes() -> BTreeMap<&'static str, usize> {
    let mut sizes = BTreeMap::new();
    sizes.insert("non-nitro-families", NON_NITRO_FAMILIES.len());
    sizes.insert("max-volume-limits", MAX_VOLUMES.len());
    sizes.insert("dedicated-limits", DEDICATED_LIMITS.len());
    for class in DeviceClass::iter() {
        sizes.insert(class.as_str(), device_table(class).len());
    }
    sizes
}

/// Expands the dedicated limit rules into a flat map. Overrides go in first
/// so that the generated cross product replaces them on collision.
fn build_dedicated_limits() -> HashMap<String, u32> {
    let mut limits: HashMap<String, u32> = DEDICATED_LIMIT_OVERRIDES
        .iter()
        .map(|(instance_type, limit)| (instance_type.to_string(), *limit))
        .collect();

    for family in DEDICATED_LIMIT_FAMILIES {
        for (size, limit) in DEDICATED_LIMIT_SIZES {
            limits.insert(format!("{family}.{size}"), *limit);
        }
    }

    trace!("Built dedicated EBS limit table with {} entries", limits.len());
    limits
}

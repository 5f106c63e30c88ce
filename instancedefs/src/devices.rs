use serde::Serialize;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::{
    accelerators::ACCELERATOR_SLOTS_TAKEN, gpus::GPU_INSTANCE_GPUS,
    instance_store::NVME_INSTANCE_STORE_VOLUMES,
};

/// Classes of non-removable devices that take up attachment slots before any
/// EBS volume is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter, Serialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DeviceClass {
    /// Local NVMe instance store volumes.
    NvmeInstanceStore,

    /// GPUs, including accelerators the EC2 API reports as GPUs.
    Gpu,

    /// Accelerators, counted in slots rather than in devices.
    Accelerator,
}

impl DeviceClass {
    /// Returns the reference table listing the slots this device class takes,
    /// keyed by instance type.
    pub const fn table(self) -> &'static [(&'static str, u32)] {
        match self {
            DeviceClass::NvmeInstanceStore => NVME_INSTANCE_STORE_VOLUMES,
            DeviceClass::Gpu => GPU_INSTANCE_GPUS,
            DeviceClass::Accelerator => ACCELERATOR_SLOTS_TAKEN,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

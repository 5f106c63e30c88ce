//! instancedefs (Instance Definitions) is a data crate holding the EC2
//! reference tables needed to reason about volume attachment limits: shared
//! attachment budgets, the non-Nitro family list, dedicated and documented
//! volume limits, and the attachment slots taken by local devices.
//!
//! As with any definitions crate, it should contain minimal or no behavior
//! at all. Lookups over these tables live in `attachlimits`.
//!

pub mod accelerators;
pub mod dedicated;
pub mod devices;
pub mod gpus;
pub mod instance_store;
pub mod limits;

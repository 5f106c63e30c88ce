//! Attachment limits for EC2 instance types.
//!
//! Answers how many EBS volumes an instance type can take, and under which
//! accounting regime, from the reference tables in `instancedefs`. The crate
//! does not talk to any cloud API and keeps no state: every function is a pure
//! lookup over tables that are built once and never change.
//!
//! The primitives are meant to be composed by the caller, in this order:
//!
//! 1. [`resolve_pattern_ebs_limit`], an EBS specific ceiling;
//! 2. [`dedicated_ebs_limit`], where `0` means no dedicated limit;
//! 3. [`shared_max_attachments`] of [`is_nitro_instance_type`] minus
//!    [`reserved_slots`].
//!
//! [`ResolvedCapacity::resolve`] does exactly that.

pub mod capacity;
pub mod cli;
pub mod commands;
pub mod ebs;
pub mod instance_type;
pub mod nitro;
pub mod reserved;

mod tables;

pub use capacity::{CapacitySource, ResolvedCapacity};
pub use ebs::{
    dedicated_ebs_limit, resolve_ebs_limit_rule, resolve_pattern_ebs_limit, EbsLimitRule,
};
pub use instance_type::{parse_instance_type, InstanceType, InstanceTypeError};
pub use nitro::{is_nitro_family, is_nitro_instance_type, shared_max_attachments};
pub use reserved::{device_slots, reserved_slots, ReservedSlots};

/// attachlimits version
pub const ATTACHLIMITS_VERSION: &str = env!("CARGO_PKG_VERSION");

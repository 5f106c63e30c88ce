//! EBS specific volume limits: documented per-type limits, structural
//! metal/high memory patterns and the dedicated limit table.

use log::trace;
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use instancedefs::limits::{
    BARE_METAL_MAX_VOLUMES, HIGH_MEMORY_METAL_MAX_VOLUMES, HIGH_MEMORY_VIRTUAL_MAX_VOLUMES,
};

use crate::tables::{
    BARE_METAL_REGEX, DEDICATED_LIMITS, HIGH_MEMORY_METAL_REGEX, HIGH_MEMORY_VIRTUAL_REGEX,
    MAX_VOLUMES,
};

/// Rule of the EBS limit precedence chain that produced a limit. Variants are
/// listed from highest to lowest precedence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EbsLimitRule {
    /// Exact entry in the documented max volume table.
    VolumeLimitOverride,

    /// `u-<name>.metal`
    HighMemoryMetal,

    /// `u-<name>.<size>`
    HighMemoryVirtual,

    /// `<family>.metal`
    BareMetal,
}

/// Walks the EBS limit precedence chain and returns the first rule that
/// matches `id`, together with its limit.
///
/// Exact entries win over the structural patterns. Among the patterns, high
/// memory metal is checked before high memory virtual (which would also match
/// it) and both before generic bare metal.
pub fn resolve_ebs_limit_rule(id: &str) -> Option<(EbsLimitRule, u32)> {
    let resolved = if let Some(limit) = MAX_VOLUMES.get(id) {
        Some((EbsLimitRule::VolumeLimitOverride, *limit))
    } else if HIGH_MEMORY_METAL_REGEX.is_match(id) {
        Some((EbsLimitRule::HighMemoryMetal, HIGH_MEMORY_METAL_MAX_VOLUMES))
    } else if HIGH_MEMORY_VIRTUAL_REGEX.is_match(id) {
        Some((
            EbsLimitRule::HighMemoryVirtual,
            HIGH_MEMORY_VIRTUAL_MAX_VOLUMES,
        ))
    } else if BARE_METAL_REGEX.is_match(id) {
        Some((EbsLimitRule::BareMetal, BARE_METAL_MAX_VOLUMES))
    } else {
        None
    };

    trace!("EBS limit rule for '{id}': {resolved:?}");
    resolved
}

/// Returns the EBS specific maximum number of volumes for `id`, or `None` when
/// no exact entry or structural pattern applies. In that case callers fall
/// back to [`dedicated_ebs_limit`] and then to the shared budget.
pub fn resolve_pattern_ebs_limit(id: &str) -> Option<u32> {
    resolve_ebs_limit_rule(id).map(|(_, limit)| limit)
}

/// Returns the dedicated EBS volume limit of `id`.
///
/// `0` means the instance type has no dedicated limit and the shared budget
/// applies. It never means that no volume can be attached.
pub fn dedicated_ebs_limit(id: &str) -> u32 {
    DEDICATED_LIMITS.get(id).copied().unwrap_or(0)
}

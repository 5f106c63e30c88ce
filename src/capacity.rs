//! Composition of the attachment limit primitives into a single answer.
//!
//! Nothing in here reads the reference tables directly. [`ResolvedCapacity`]
//! is computed purely from [`resolve_ebs_limit_rule`], [`dedicated_ebs_limit`],
//! [`is_nitro_instance_type`], [`shared_max_attachments`] and
//! [`reserved_slots`], in that order of precedence, the same way an
//! attachment controller consuming this crate would.

use log::debug;
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::{
    ebs::{dedicated_ebs_limit, resolve_ebs_limit_rule, EbsLimitRule},
    nitro::{is_nitro_instance_type, shared_max_attachments},
    reserved::reserved_slots,
};

/// Which regime the attachment budget of an instance type comes from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CapacitySource {
    /// Documented per-type EBS volume limit.
    VolumeLimitOverride,
    /// `u-<name>.metal`
    PatternHighMemMetal,
    /// `u-<name>.<size>`
    PatternHighMemVirtual,
    /// `<family>.metal`
    PatternMetal,
    /// Dedicated EBS limit table.
    Dedicated,
    /// Shared attachment budget of a Nitro instance.
    SharedNitro,
    /// Shared attachment budget of a non-Nitro instance.
    SharedNonNitro,
}

impl From<EbsLimitRule> for CapacitySource {
    fn from(rule: EbsLimitRule) -> Self {
        match rule {
            EbsLimitRule::VolumeLimitOverride => CapacitySource::VolumeLimitOverride,
            EbsLimitRule::HighMemoryMetal => CapacitySource::PatternHighMemMetal,
            EbsLimitRule::HighMemoryVirtual => CapacitySource::PatternHighMemVirtual,
            EbsLimitRule::BareMetal => CapacitySource::PatternMetal,
        }
    }
}

impl CapacitySource {
    /// Returns true when the budget is shared with other device attachments
    /// and reserved slots have been subtracted from it.
    pub fn is_shared(self) -> bool {
        matches!(
            self,
            CapacitySource::SharedNitro | CapacitySource::SharedNonNitro
        )
    }
}

/// Attachment capacity of an instance type. Computed on demand and never
/// cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCapacity {
    pub instance_type: String,
    pub is_nitro: bool,
    pub total_budget: u32,
    /// Slots taken by local devices. Only non-zero for shared budgets, the
    /// EBS specific limits already account for them.
    pub reserved_slots: u32,
    pub available_for_volumes: u32,
    pub source: CapacitySource,
}

impl ResolvedCapacity {
    /// Resolves the attachment capacity of `id`:
    ///
    /// 1. an EBS specific limit (exact entry or metal/high memory pattern),
    /// 2. otherwise a dedicated limit,
    /// 3. otherwise the shared budget minus the reserved slots.
    ///
    /// Panics when `id` is not a `<family>.<size>` instance type.
    pub fn resolve(id: &str) -> Self {
        let is_nitro = is_nitro_instance_type(id);

        let (source, total_budget, reserved) = if let Some((rule, limit)) =
            resolve_ebs_limit_rule(id)
        {
            (CapacitySource::from(rule), limit, 0)
        } else {
            match dedicated_ebs_limit(id) {
                0 => {
                    let source = if is_nitro {
                        CapacitySource::SharedNitro
                    } else {
                        CapacitySource::SharedNonNitro
                    };
                    (source, shared_max_attachments(is_nitro), reserved_slots(id))
                }
                limit => (CapacitySource::Dedicated, limit, 0),
            }
        };

        let capacity = ResolvedCapacity {
            instance_type: id.to_string(),
            is_nitro,
            total_budget,
            reserved_slots: reserved,
            available_for_volumes: total_budget.saturating_sub(reserved),
            source,
        };

        debug!(
            "Instance type '{id}' can attach {} volume(s) ({} budget of {}, {} reserved)",
            capacity.available_for_volumes, capacity.source, total_budget, reserved
        );
        capacity
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn resolve(id: &str) -> (CapacitySource, u32, u32, u32) {
        let capacity = ResolvedCapacity::resolve(id);
        (
            capacity.source,
            capacity.total_budget,
            capacity.reserved_slots,
            capacity.available_for_volumes,
        )
    }

    #[test]
    fn test_pattern_sources() {
        assert_eq!(
            resolve("inf1.24xlarge"),
            (CapacitySource::VolumeLimitOverride, 11, 0, 11)
        );
        assert_eq!(
            resolve("u-6tb1.metal"),
            (CapacitySource::PatternHighMemMetal, 19, 0, 19)
        );
        assert_eq!(
            resolve("u-6tb1.112xlarge"),
            (CapacitySource::PatternHighMemVirtual, 27, 0, 27)
        );
        // Listed with 8 NVMe volumes, but the metal limit already accounts
        // for them.
        assert_eq!(
            resolve("i3en.metal"),
            (CapacitySource::PatternMetal, 31, 0, 31)
        );
    }

    #[test]
    fn test_dedicated_source() {
        assert_eq!(
            resolve("m7i.48xlarge"),
            (CapacitySource::Dedicated, 128, 0, 128)
        );
        // Listed with NVMe volumes and GPUs, but the dedicated limit is not
        // shared with them.
        assert_eq!(resolve("g6.12xlarge"), (CapacitySource::Dedicated, 32, 0, 32));
    }

    #[test]
    fn test_shared_sources() {
        assert_eq!(resolve("m5.large"), (CapacitySource::SharedNitro, 28, 0, 28));
        assert_eq!(
            resolve("m5d.24xlarge"),
            (CapacitySource::SharedNitro, 28, 4, 24)
        );
        assert_eq!(
            resolve("p2.16xlarge"),
            (CapacitySource::SharedNonNitro, 39, 16, 23)
        );
        assert_eq!(
            resolve("d2.8xlarge"),
            (CapacitySource::SharedNonNitro, 39, 24, 15)
        );
    }

    #[test]
    fn test_nitro_flag_is_independent_of_source() {
        let capacity = ResolvedCapacity::resolve("x1.32xlarge");
        assert!(!capacity.is_nitro);
        assert_eq!(capacity.source, CapacitySource::SharedNonNitro);

        let capacity = ResolvedCapacity::resolve("u-6tb1.metal");
        assert!(capacity.is_nitro);
        assert!(!capacity.source.is_shared());
    }

    #[test]
    fn test_only_shared_sources_reserve_slots() {
        for id in [
            "g4dn.metal",
            "g5.48xlarge",
            "g6e.48xlarge",
            "trn1.32xlarge",
            "c8gd.metal-48xl",
            "vt1.6xlarge",
        ] {
            let capacity = ResolvedCapacity::resolve(id);
            if !capacity.source.is_shared() {
                assert_eq!(capacity.reserved_slots, 0, "{id}");
            }
            assert_eq!(
                capacity.available_for_volumes,
                capacity.total_budget - capacity.reserved_slots
            );
        }
        assert_eq!(CapacitySource::iter().filter(|s| s.is_shared()).count(), 2);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(ResolvedCapacity::resolve("m5d.24xlarge")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "instanceType": "m5d.24xlarge",
                "isNitro": true,
                "totalBudget": 28,
                "reservedSlots": 4,
                "availableForVolumes": 24,
                "source": "shared-nitro",
            })
        );
    }

    #[test]
    fn test_idempotent() {
        for id in ["inf1.24xlarge", "m7i.metal-24xl", "p2.16xlarge"] {
            assert_eq!(ResolvedCapacity::resolve(id), ResolvedCapacity::resolve(id));
        }
    }

    #[test]
    #[should_panic(expected = "Cannot determine family of instance type")]
    fn test_malformed_panics() {
        ResolvedCapacity::resolve("m5large");
    }
}

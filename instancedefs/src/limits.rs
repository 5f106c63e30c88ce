//! Volume and attachment limits that do not depend on the reserved devices of
//! an instance.
//!
//! https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-types.html#ec2-nitro-instances

/// Maximum EBS volumes for high memory bare metal instances (`u-*.metal`).
pub const HIGH_MEMORY_METAL_MAX_VOLUMES: u32 = 19;

/// Maximum EBS volumes for high memory virtualized instances (`u-*.<size>`).
pub const HIGH_MEMORY_VIRTUAL_MAX_VOLUMES: u32 = 27;

/// Maximum EBS volumes for any other bare metal instance (`*.metal`).
pub const BARE_METAL_MAX_VOLUMES: u32 = 31;

/// Shared attachment budget on instances built on the Nitro system. EBS
/// volumes, instance store volumes and network interfaces share this pool.
pub const NITRO_MAX_ATTACHMENTS: u32 = 28;

/// Shared attachment budget on Xen based (non-Nitro) instances.
pub const NON_NITRO_MAX_ATTACHMENTS: u32 = 39;

/// Instance families that are NOT built on the Nitro system. The list is
/// closed: every family missing from it is treated as Nitro.
pub const NON_NITRO_INSTANCE_FAMILIES: &[&str] = &[
    "t2", "c3", "m3", "r3", "c4", "m4", "r4", "x1e", "x1", "p2", "p3", "g3", "d2", "h1", "f1",
];

/// Instance types with a documented maximum number of EBS volumes that is
/// lower than what their family would otherwise get.
///
/// https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/volume_limits.html
pub const MAX_VOLUME_LIMITS: &[(&str, u32)] = &[
    ("d3.8xlarge", 3),
    ("d3en.12xlarge", 3),
    ("g5.48xlarge", 9),
    ("inf1.xlarge", 26),
    ("inf1.2xlarge", 26),
    ("inf1.6xlarge", 23),
    ("inf1.24xlarge", 11),
    ("mac1.metal", 16),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_budgets() {
        assert_ne!(NITRO_MAX_ATTACHMENTS, NON_NITRO_MAX_ATTACHMENTS);
        assert!(NITRO_MAX_ATTACHMENTS > 0);
        assert!(NON_NITRO_MAX_ATTACHMENTS > 0);
    }

    #[test]
    fn test_pattern_limits_ordering() {
        // u-*.metal also matches the generic bare metal pattern.
        assert!(HIGH_MEMORY_METAL_MAX_VOLUMES < BARE_METAL_MAX_VOLUMES);
    }

    #[test]
    fn test_non_nitro_families() {
        assert_eq!(NON_NITRO_INSTANCE_FAMILIES.len(), 15);
        assert!(NON_NITRO_INSTANCE_FAMILIES.iter().all(|f| !f.contains('.')));
    }

    #[test]
    fn test_max_volume_limits_are_instance_types() {
        for (instance_type, limit) in MAX_VOLUME_LIMITS {
            assert_eq!(instance_type.matches('.').count(), 1, "{instance_type}");
            assert!(*limit > 0);
        }
    }
}

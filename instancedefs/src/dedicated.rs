//! Rules for the dedicated EBS volume limit table.
//!
//! These Nitro instance types have a dedicated EBS volume limit of up to 128
//! attachments, depending on the size. The limit is not shared with other
//! device attachments.
//!
//! https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/volume_limits.html#nitro-system-limits
//!
//! The table is generated as the cross product of [`DEDICATED_LIMIT_FAMILIES`]
//! and [`DEDICATED_LIMIT_SIZES`], on top of [`DEDICATED_LIMIT_OVERRIDES`].
//! Generated entries win when both produce the same instance type.

/// Families whose every size in [`DEDICATED_LIMIT_SIZES`] gets a dedicated
/// limit.
pub const DEDICATED_LIMIT_FAMILIES: &[&str] = &[
    "m8g",
    "m8gd",
    "m7i",
    "m7i-flex",
    "m7a",
    "c8g",
    "c8gd",
    "c8gn",
    "c7i",
    "c7i-flex",
    "c7a",
    "r7a",
    "r7i",
    "r7iz",
    "r8g",
    "r8gd",
    "x8g",
    "u7i",
    "u7inh",
    "g6",
    "g6e",
    "gr6",
    "gb200",
    "i7i",
    "i7ie",
    "i8g",
    "p5",
    "p5e",
    "p5en",
    "p6-b200",
    "p6e-gb200",
    "u7i-6tb",
    "u7i-8tb",
    "u7i-12tb",
    "u7in-16tb",
    "u7in-24tb",
    "u7in-32tb",
    "u7inh-32tb",
    "f2",
    "trn2",
    "trn2u",
];

/// Dedicated limit for each size of a family in [`DEDICATED_LIMIT_FAMILIES`].
pub const DEDICATED_LIMIT_SIZES: &[(&str, u32)] = &[
    ("medium", 32),
    ("large", 32),
    ("xlarge", 32),
    ("2xlarge", 32),
    ("4xlarge", 32),
    ("6xlarge", 32),
    ("8xlarge", 32),
    ("12xlarge", 32),
    ("metal-16xl", 39),
    ("metal-24xl", 39),
    ("16xlarge", 48),
    ("24xlarge", 64),
    ("metal-32xl", 79),
    ("metal-48xl", 79),
    ("32xlarge", 88),
    ("48xlarge", 128),
    ("112xlarge", 128),
    ("224xlarge", 128),
    ("480xlarge", 128),
];

/// Dedicated limits for individual instance types outside of the generated
/// cross product.
pub const DEDICATED_LIMIT_OVERRIDES: &[(&str, u32)] = &[
    ("p4d.24xlarge", 28),
    ("trn2.48xlarge", 64),
    ("trn2u.48xlarge", 64),
    ("hpc7a.12xlarge", 27),
    ("hpc7a.24xlarge", 27),
    ("hpc7a.48xlarge", 27),
    ("hpc7a.96xlarge", 27),
    ("p6-b200.48xlarge", 64),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_families_are_unique() {
        let families: HashSet<_> = DEDICATED_LIMIT_FAMILIES.iter().collect();
        assert_eq!(families.len(), DEDICATED_LIMIT_FAMILIES.len());
    }

    #[test]
    fn test_sizes_do_not_contain_separator() {
        for (size, limit) in DEDICATED_LIMIT_SIZES {
            assert!(!size.contains('.'), "{size}");
            assert!(*limit >= 32);
        }
    }
}

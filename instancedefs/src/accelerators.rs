//! Attachment slots taken by accelerators.
//!
//! NOTE: this is not the number of accelerators on the instance but the number
//! of slots they take up together. `vt1` accelerators take two slots each,
//! except on `vt1.24xlarge` where they take none. `inf1` types are absent on
//! purpose, they are covered by [`crate::limits::MAX_VOLUME_LIMITS`].
//!
//! https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/volume_limits.html

/// Attachment slots taken by accelerators, keyed by instance type.
pub const ACCELERATOR_SLOTS_TAKEN: &[(&str, u32)] = &[
    ("vt1.3xlarge", 2),
    ("vt1.6xlarge", 4),
    ("vt1.24xlarge", 0),
    ("dl2q.24xlarge", 8),
    ("inf2.xlarge", 1),
    ("inf2.8xlarge", 1),
    ("inf2.24xlarge", 6),
    ("inf2.48xlarge", 12),
    ("trn1.2xlarge", 1),
    ("trn1.32xlarge", 16),
    ("trn1n.32xlarge", 16),
];

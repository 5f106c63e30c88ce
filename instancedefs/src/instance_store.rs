//! NVMe instance store volumes per instance type.
//!
//! IMDS does not report NVMe instance store devices, so every instance type
//! that comes with them is listed here. Each volume takes one attachment slot.
//!
//! `g5.48xlarge` and `p4d.24xlarge` are intentionally absent, their limits
//! live in [`crate::limits::MAX_VOLUME_LIMITS`] and the dedicated limit table.
//!
//! https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instance-store-volumes.html

/// Number of NVMe instance store volumes, keyed by instance type.
pub const NVME_INSTANCE_STORE_VOLUMES: &[(&str, u32)] = &[
    ("c1.medium", 1),
    ("c1.xlarge", 4),
    ("c3.2xlarge", 2),
    ("c3.4xlarge", 2),
    ("c3.8xlarge", 2),
    ("c3.large", 2),
    ("c3.xlarge", 2),
    ("c5ad.12xlarge", 2),
    ("c5ad.16xlarge", 2),
    ("c5ad.24xlarge", 2),
    ("c5ad.2xlarge", 1),
    ("c5ad.4xlarge", 2),
    ("c5ad.8xlarge", 2),
    ("c5ad.large", 1),
    ("c5ad.xlarge", 1),
    ("c5d.12xlarge", 2),
    ("c5d.18xlarge", 2),
    ("c5d.24xlarge", 4),
    ("c5d.2xlarge", 1),
    ("c5d.4xlarge", 1),
    ("c5d.9xlarge", 1),
    ("c5d.large", 1),
    ("c5d.metal", 4),
    ("c5d.xlarge", 1),
    ("c6gd.12xlarge", 2),
    ("c6gd.16xlarge", 2),
    ("c6gd.2xlarge", 1),
    ("c6gd.4xlarge", 1),
    ("c6gd.8xlarge", 1),
    ("c6gd.large", 1),
    ("c6gd.medium", 1),
    ("c6gd.metal", 2),
    ("c6gd.xlarge", 1),
    ("c6id.12xlarge", 2),
    ("c6id.16xlarge", 2),
    ("c6id.24xlarge", 4),
    ("c6id.2xlarge", 1),
    ("c6id.32xlarge", 4),
    ("c6id.4xlarge", 1),
    ("c6id.8xlarge", 1),
    ("c6id.large", 1),
    ("c6id.metal", 4),
    ("c6id.xlarge", 1),
    ("c7gd.12xlarge", 2),
    ("c7gd.16xlarge", 2),
    ("c7gd.2xlarge", 1),
    ("c7gd.4xlarge", 1),
    ("c7gd.8xlarge", 1),
    ("c7gd.large", 1),
    ("c7gd.medium", 1),
    ("c7gd.metal", 2),
    ("c7gd.xlarge", 1),
    ("c8gd.12xlarge", 3),
    ("c8gd.16xlarge", 2),
    ("c8gd.24xlarge", 3),
    ("c8gd.2xlarge", 1),
    ("c8gd.48xlarge", 6),
    ("c8gd.4xlarge", 1),
    ("c8gd.8xlarge", 1),
    ("c8gd.large", 1),
    ("c8gd.medium", 1),
    ("c8gd.metal-24xl", 3),
    ("c8gd.metal-48xl", 6),
    ("c8gd.xlarge", 1),
    ("d2.2xlarge", 6),
    ("d2.4xlarge", 12),
    ("d2.8xlarge", 24),
    ("d2.xlarge", 3),
    ("d3.2xlarge", 6),
    ("d3.4xlarge", 12),
    ("d3.8xlarge", 24),
    ("d3en.12xlarge", 24),
    ("d3en.2xlarge", 4),
    ("d3en.4xlarge", 8),
    ("d3en.6xlarge", 12),
    ("d3en.8xlarge", 16),
    ("d3en.xlarge", 2),
    ("d3.xlarge", 3),
    ("dl1.24xlarge", 4),
    ("f1.16xlarge", 4),
    ("f1.2xlarge", 1),
    ("f1.4xlarge", 1),
    ("f2.12xlarge", 2),
    ("f2.48xlarge", 8),
    ("f2.6xlarge", 1),
    ("g4ad.16xlarge", 2),
    ("g4ad.2xlarge", 1),
    ("g4ad.4xlarge", 1),
    ("g4ad.8xlarge", 1),
    ("g4ad.xlarge", 1),
    ("g4dn.12xlarge", 1),
    ("g4dn.16xlarge", 1),
    ("g4dn.2xlarge", 1),
    ("g4dn.4xlarge", 1),
    ("g4dn.8xlarge", 1),
    ("g4dn.metal", 2),
    ("g4dn.xlarge", 1),
    ("g5.12xlarge", 1),
    ("g5.16xlarge", 1),
    ("g5.24xlarge", 1),
    ("g5.2xlarge", 1),
    ("g5.4xlarge", 1),
    ("g5.8xlarge", 1),
    ("g5.xlarge", 1),
    ("g6.12xlarge", 4),
    ("g6.16xlarge", 2),
    ("g6.24xlarge", 4),
    ("g6.2xlarge", 1),
    ("g6.48xlarge", 8),
    ("g6.4xlarge", 1),
    ("g6.8xlarge", 2),
    ("g6e.12xlarge", 2),
    ("g6e.16xlarge", 2),
    ("g6e.24xlarge", 2),
    ("g6e.2xlarge", 1),
    ("g6e.48xlarge", 4),
    ("g6e.4xlarge", 1),
    ("g6e.8xlarge", 2),
    ("g6e.xlarge", 1),
    ("g6.xlarge", 1),
    ("gd.12xlarge", 2),
    ("gr6.4xlarge", 1),
    ("gr6.8xlarge", 2),
    ("h1.16xlarge", 8),
    ("h1.2xlarge", 1),
    ("h1.4xlarge", 2),
    ("h1.8xlarge", 4),
    ("hpc6id.32xlarge", 4),
    ("i2.2xlarge", 2),
    ("i2.4xlarge", 4),
    ("i2.8xlarge", 8),
    ("i2.xlarge", 1),
    ("i3.16xlarge", 8),
    ("i3.2xlarge", 1),
    ("i3.4xlarge", 2),
    ("i3.8xlarge", 4),
    ("i3en.12xlarge", 4),
    ("i3en.24xlarge", 8),
    ("i3en.2xlarge", 2),
    ("i3en.3xlarge", 1),
    ("i3en.6xlarge", 2),
    ("i3en.large", 1),
    ("i3en.metal", 8),
    ("i3en.xlarge", 1),
    ("i3.large", 1),
    ("i3.metal", 8),
    ("i3.xlarge", 1),
    ("i4g.16xlarge", 4),
    ("i4g.2xlarge", 1),
    ("i4g.4xlarge", 1),
    ("i4g.8xlarge", 2),
    ("i4g.large", 1),
    ("i4g.xlarge", 1),
    ("i4i.12xlarge", 3),
    ("i4i.16xlarge", 4),
    ("i4i.24xlarge", 6),
    ("i4i.2xlarge", 1),
    ("i4i.32xlarge", 8),
    ("i4i.4xlarge", 1),
    ("i4i.8xlarge", 2),
    ("i4i.large", 1),
    ("i4i.metal", 8),
    ("i4i.xlarge", 1),
    ("i7i.12xlarge", 3),
    ("i7i.16xlarge", 4),
    ("i7i.24xlarge", 6),
    ("i7i.2xlarge", 1),
    ("i7i.48xlarge", 12),
    ("i7i.4xlarge", 1),
    ("i7i.8xlarge", 2),
    ("i7ie.12xlarge", 4),
    ("i7ie.18xlarge", 6),
    ("i7ie.24xlarge", 8),
    ("i7ie.2xlarge", 2),
    ("i7ie.3xlarge", 1),
    ("i7ie.48xlarge", 16),
    ("i7ie.6xlarge", 2),
    ("i7ie.large", 1),
    ("i7ie.metal-24xl", 8),
    ("i7ie.metal-48xl", 16),
    ("i7ie.xlarge", 1),
    ("i7i.large", 1),
    ("i7i.metal-24xl", 6),
    ("i7i.metal-48xl", 12),
    ("i7i.xlarge", 1),
    ("i8g.12xlarge", 3),
    ("i8g.16xlarge", 4),
    ("i8g.24xlarge", 6),
    ("i8g.2xlarge", 1),
    ("i8g.48xlarge", 12),
    ("i8g.4xlarge", 1),
    ("i8g.8xlarge", 2),
    ("i8g.large", 1),
    ("i8g.metal-24xl", 6),
    ("i8g.xlarge", 1),
    ("im4gn.16xlarge", 4),
    ("im4gn.2xlarge", 1),
    ("im4gn.4xlarge", 1),
    ("im4gn.8xlarge", 2),
    ("im4gn.large", 1),
    ("im4gn.xlarge", 1),
    ("is4gen.2xlarge", 1),
    ("is4gen.4xlarge", 2),
    ("is4gen.8xlarge", 4),
    ("is4gen.large", 1),
    ("is4gen.medium", 1),
    ("is4gen.xlarge", 1),
    ("m1.large", 2),
    ("m1.medium", 1),
    ("m1.small", 1),
    ("m1.xlarge", 4),
    ("m2.2xlarge", 1),
    ("m2.4xlarge", 2),
    ("m2.xlarge", 1),
    ("m3.2xlarge", 2),
    ("m3.large", 1),
    ("m3.medium", 1),
    ("m3.xlarge", 2),
    ("m5ad.12xlarge", 2),
    ("m5ad.16xlarge", 4),
    ("m5ad.24xlarge", 4),
    ("m5ad.2xlarge", 1),
    ("m5ad.4xlarge", 2),
    ("m5ad.8xlarge", 2),
    ("m5ad.large", 1),
    ("m5ad.xlarge", 1),
    ("m5d.12xlarge", 2),
    ("m5d.16xlarge", 4),
    ("m5d.24xlarge", 4),
    ("m5d.2xlarge", 1),
    ("m5d.4xlarge", 2),
    ("m5d.8xlarge", 2),
    ("m5d.large", 1),
    ("m5d.metal", 4),
    ("m5dn.12xlarge", 2),
    ("m5dn.16xlarge", 4),
    ("m5dn.24xlarge", 4),
    ("m5dn.2xlarge", 1),
    ("m5dn.4xlarge", 2),
    ("m5dn.8xlarge", 2),
    ("m5dn.large", 1),
    ("m5dn.metal", 4),
    ("m5dn.xlarge", 1),
    ("m5d.xlarge", 1),
    ("m6gd.12xlarge", 2),
    ("m6gd.16xlarge", 2),
    ("m6gd.2xlarge", 1),
    ("m6gd.4xlarge", 1),
    ("m6gd.8xlarge", 1),
    ("m6gd.large", 1),
    ("m6gd.medium", 1),
    ("m6gd.metal", 2),
    ("m6gd.xlarge", 1),
    ("m6id.12xlarge", 2),
    ("m6id.16xlarge", 2),
    ("m6id.24xlarge", 4),
    ("m6id.2xlarge", 1),
    ("m6id.32xlarge", 4),
    ("m6id.4xlarge", 1),
    ("m6id.8xlarge", 1),
    ("m6id.large", 1),
    ("m6id.metal", 4),
    ("m6idn.12xlarge", 2),
    ("m6idn.16xlarge", 2),
    ("m6idn.24xlarge", 4),
    ("m6idn.2xlarge", 1),
    ("m6idn.32xlarge", 4),
    ("m6idn.4xlarge", 1),
    ("m6idn.8xlarge", 1),
    ("m6idn.large", 1),
    ("m6idn.metal", 4),
    ("m6idn.xlarge", 1),
    ("m6id.xlarge", 1),
    ("m7gd.12xlarge", 2),
    ("m7gd.16xlarge", 2),
    ("m7gd.2xlarge", 1),
    ("m7gd.4xlarge", 1),
    ("m7gd.8xlarge", 1),
    ("m7gd.large", 1),
    ("m7gd.medium", 1),
    ("m7gd.metal", 2),
    ("m7gd.xlarge", 1),
    ("m8gd.12xlarge", 3),
    ("m8gd.16xlarge", 2),
    ("m8gd.24xlarge", 3),
    ("m8gd.2xlarge", 1),
    ("m8gd.48xlarge", 6),
    ("m8gd.4xlarge", 1),
    ("m8gd.8xlarge", 1),
    ("m8gd.large", 1),
    ("m8gd.medium", 1),
    ("m8gd.metal-24xl", 3),
    ("m8gd.metal-48xl", 6),
    ("m8gd.xlarge", 1),
    ("p3dn.24xlarge", 2),
    ("p4de.24xlarge", 8),
    ("p5.48xlarge", 8),
    ("p5e.48xlarge", 8),
    ("p5en.48xlarge", 8),
    ("p6-b200.48xlarge", 8),
    ("r3.2xlarge", 1),
    ("r3.4xlarge", 1),
    ("r3.8xlarge", 2),
    ("r3.large", 1),
    ("r3.xlarge", 1),
    ("r5ad.12xlarge", 2),
    ("r5ad.16xlarge", 4),
    ("r5ad.24xlarge", 4),
    ("r5ad.2xlarge", 1),
    ("r5ad.4xlarge", 2),
    ("r5ad.8xlarge", 2),
    ("r5ad.large", 1),
    ("r5ad.xlarge", 1),
    ("r5d.12xlarge", 2),
    ("r5d.16xlarge", 4),
    ("r5d.24xlarge", 4),
    ("r5d.2xlarge", 1),
    ("r5d.4xlarge", 2),
    ("r5d.8xlarge", 2),
    ("r5d.large", 1),
    ("r5d.metal", 4),
    ("r5dn.12xlarge", 2),
    ("r5dn.16xlarge", 4),
    ("r5dn.24xlarge", 4),
    ("r5dn.2xlarge", 1),
    ("r5dn.4xlarge", 2),
    ("r5dn.8xlarge", 2),
    ("r5dn.large", 1),
    ("r5dn.metal", 4),
    ("r5dn.xlarge", 1),
    ("r5d.xlarge", 1),
    ("r6gd.12xlarge", 2),
    ("r6gd.16xlarge", 2),
    ("r6gd.2xlarge", 1),
    ("r6gd.4xlarge", 1),
    ("r6gd.8xlarge", 1),
    ("r6gd.large", 1),
    ("r6gd.medium", 1),
    ("r6gd.metal", 2),
    ("r6gd.xlarge", 1),
    ("r6id.12xlarge", 2),
    ("r6id.16xlarge", 2),
    ("r6id.24xlarge", 4),
    ("r6id.2xlarge", 1),
    ("r6id.32xlarge", 4),
    ("r6id.4xlarge", 1),
    ("r6id.8xlarge", 1),
    ("r6id.large", 1),
    ("r6id.metal", 4),
    ("r6idn.12xlarge", 2),
    ("r6idn.16xlarge", 2),
    ("r6idn.24xlarge", 4),
    ("r6idn.2xlarge", 1),
    ("r6idn.32xlarge", 4),
    ("r6idn.4xlarge", 1),
    ("r6idn.8xlarge", 1),
    ("r6idn.large", 1),
    ("r6idn.metal", 4),
    ("r6idn.xlarge", 1),
    ("r6id.xlarge", 1),
    ("r7gd.12xlarge", 2),
    ("r7gd.16xlarge", 2),
    ("r7gd.2xlarge", 1),
    ("r7gd.4xlarge", 1),
    ("r7gd.8xlarge", 1),
    ("r7gd.large", 1),
    ("r7gd.medium", 1),
    ("r7gd.metal", 2),
    ("r7gd.xlarge", 1),
    ("r8gd.12xlarge", 3),
    ("r8gd.16xlarge", 2),
    ("r8gd.24xlarge", 3),
    ("r8gd.2xlarge", 1),
    ("r8gd.48xlarge", 6),
    ("r8gd.4xlarge", 1),
    ("r8gd.8xlarge", 1),
    ("r8gd.large", 1),
    ("r8gd.medium", 1),
    ("r8gd.metal-24xl", 3),
    ("r8gd.metal-48xl", 6),
    ("r8gd.xlarge", 1),
    ("trn1.2xlarge", 1),
    ("trn1.32xlarge", 4),
    ("trn1n.32xlarge", 4),
    ("x1.16xlarge", 1),
    ("x1.32xlarge", 2),
    ("x1e.16xlarge", 1),
    ("x1e.2xlarge", 1),
    ("x1e.32xlarge", 2),
    ("x1e.4xlarge", 1),
    ("x1e.8xlarge", 1),
    ("x1e.xlarge", 1),
    ("x2gd.12xlarge", 2),
    ("x2gd.16xlarge", 2),
    ("x2gd.2xlarge", 1),
    ("x2gd.4xlarge", 1),
    ("x2gd.8xlarge", 1),
    ("x2gd.large", 1),
    ("x2gd.medium", 1),
    ("x2gd.metal", 2),
    ("x2gd.xlarge", 1),
    ("x2idn.16xlarge", 1),
    ("x2idn.24xlarge", 2),
    ("x2idn.32xlarge", 2),
    ("x2idn.metal", 2),
    ("x2iedn.16xlarge", 1),
    ("x2iedn.24xlarge", 2),
    ("x2iedn.2xlarge", 1),
    ("x2iedn.32xlarge", 2),
    ("x2iedn.4xlarge", 1),
    ("x2iedn.8xlarge", 1),
    ("x2iedn.metal", 2),
    ("x2iedn.xlarge", 1),
    ("z1d.12xlarge", 2),
    ("z1d.2xlarge", 1),
    ("z1d.3xlarge", 1),
    ("z1d.6xlarge", 1),
    ("z1d.large", 1),
    ("z1d.metal", 2),
    ("z1d.xlarge", 1),
];

//! End to end checks of the attachment limit primitives, composed the way an
//! attachment controller would compose them.

use std::thread;

use attachlimits::{
    dedicated_ebs_limit, is_nitro_instance_type, parse_instance_type, reserved_slots,
    resolve_pattern_ebs_limit, shared_max_attachments, CapacitySource, ResolvedCapacity,
};

/// Volumes that can still be attached, composed from the primitives only.
fn attachable_volumes(id: &str) -> u32 {
    if let Some(limit) = resolve_pattern_ebs_limit(id) {
        return limit;
    }
    match dedicated_ebs_limit(id) {
        0 => shared_max_attachments(is_nitro_instance_type(id)) - reserved_slots(id),
        limit => limit,
    }
}

#[test]
fn test_precedence_chain() {
    assert_eq!(attachable_volumes("inf1.24xlarge"), 11);
    assert_eq!(attachable_volumes("u-6tb1.metal"), 19);
    assert_eq!(attachable_volumes("u-12tb1.112xlarge"), 27);
    assert_eq!(attachable_volumes("a1.metal"), 31);
    assert_eq!(attachable_volumes("m7i.4xlarge"), 32);
    assert_eq!(attachable_volumes("m7i.48xlarge"), 128);
    assert_eq!(attachable_volumes("m7i.metal-24xl"), 39);
    assert_eq!(attachable_volumes("c5.large"), 28);
    assert_eq!(attachable_volumes("c5d.24xlarge"), 24);
    assert_eq!(attachable_volumes("t2.micro"), 39);
    assert_eq!(attachable_volumes("h1.16xlarge"), 31);
}

#[test]
fn test_resolved_capacity_matches_primitives() {
    for id in [
        "inf1.xlarge",
        "mac1.metal",
        "u-9tb1.metal",
        "u-6tb1.56xlarge",
        "x2iedn.metal",
        "r7iz.metal-16xl",
        "hpc7a.48xlarge",
        "m6id.32xlarge",
        "vt1.3xlarge",
        "g3.16xlarge",
        "z9x.large",
    ] {
        let capacity = ResolvedCapacity::resolve(id);
        assert_eq!(capacity.available_for_volumes, attachable_volumes(id), "{id}");
        assert_eq!(capacity.is_nitro, is_nitro_instance_type(id), "{id}");
    }
}

#[test]
fn test_sources() {
    assert_eq!(
        ResolvedCapacity::resolve("hpc7a.48xlarge").source,
        CapacitySource::Dedicated
    );
    assert_eq!(
        ResolvedCapacity::resolve("g3.16xlarge").source,
        CapacitySource::SharedNonNitro
    );
    assert_eq!(
        ResolvedCapacity::resolve("x2iedn.metal").source,
        CapacitySource::PatternMetal
    );
}

#[test]
fn test_parse_round_trip() {
    for (family, size) in [("m7i", "4xlarge"), ("p6e-gb200", "48xlarge"), ("u-6tb1", "metal")] {
        let id = format!("{family}.{size}");
        assert_eq!(parse_instance_type(&id), (family, size));
    }
}

#[test]
fn test_concurrent_readers() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                (
                    attachable_volumes("m5d.24xlarge"),
                    dedicated_ebs_limit("m7i.48xlarge"),
                    resolve_pattern_ebs_limit("u-6tb1.metal"),
                )
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (24, 128, Some(19)));
    }
}

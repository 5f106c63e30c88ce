//! Nitro classification and the shared attachment budget that goes with it.

use log::trace;

use instancedefs::limits::{NITRO_MAX_ATTACHMENTS, NON_NITRO_MAX_ATTACHMENTS};

use crate::{instance_type::parse_instance_type, tables::NON_NITRO_FAMILIES};

/// Returns whether the family uses the Nitro attachment accounting. Families
/// missing from the non-Nitro list are assumed to be Nitro.
pub fn is_nitro_family(family: &str) -> bool {
    !NON_NITRO_FAMILIES.contains(family)
}

/// Returns whether the instance type is built on the Nitro system.
///
/// Panics when `id` is not a `<family>.<size>` instance type, see
/// [`parse_instance_type`].
pub fn is_nitro_instance_type(id: &str) -> bool {
    let (family, _) = parse_instance_type(id);
    let nitro = is_nitro_family(family);
    trace!("Instance type '{id}' is nitro: {nitro}");
    nitro
}

/// Returns the instance wide maximum number of attached devices. Depending on
/// the family, EBS volumes, instance store volumes and network interfaces all
/// draw from this pool.
pub const fn shared_max_attachments(nitro: bool) -> u32 {
    if nitro {
        NITRO_MAX_ATTACHMENTS
    } else {
        NON_NITRO_MAX_ATTACHMENTS
    }
}

#[cfg(test)]
mod tests {
    use instancedefs::limits::NON_NITRO_INSTANCE_FAMILIES;

    use super::*;

    #[test]
    fn test_non_nitro_instance_types() {
        for family in [
            "t2", "c3", "m3", "r3", "c4", "m4", "r4", "x1e", "x1", "p2", "p3", "g3", "d2", "h1",
            "f1",
        ] {
            assert!(
                !is_nitro_instance_type(&format!("{family}.xlarge")),
                "{family} should not be nitro"
            );
        }
        assert!(NON_NITRO_INSTANCE_FAMILIES
            .iter()
            .all(|family| !is_nitro_family(family)));
    }

    #[test]
    fn test_nitro_instance_types() {
        assert!(is_nitro_instance_type("z9x.large"));
        assert!(is_nitro_instance_type("m7i.4xlarge"));
        assert!(is_nitro_instance_type("t3.micro"));
        assert!(is_nitro_instance_type("i3en.metal"));
        // Family lookup is exact, not a prefix match.
        assert!(is_nitro_instance_type("c5.large"));
        assert!(is_nitro_instance_type("x2idn.metal"));
    }

    #[test]
    #[should_panic(expected = "Cannot determine family of instance type")]
    fn test_malformed_instance_type_panics() {
        is_nitro_instance_type("t2");
    }

    #[test]
    fn test_shared_max_attachments() {
        assert_eq!(shared_max_attachments(true), 28);
        assert_eq!(shared_max_attachments(false), 39);
    }

    #[test]
    fn test_idempotent() {
        for id in ["t2.micro", "m7i.large"] {
            assert_eq!(is_nitro_instance_type(id), is_nitro_instance_type(id));
        }
    }
}

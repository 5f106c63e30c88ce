use std::fmt::{Display, Formatter, Result as FmtResult};

/// Separator between the family and the size of an instance type.
pub const INSTANCE_TYPE_SEPARATOR: char = '.';

/// An instance type identifier that could not be split into family and size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstanceTypeError {
    #[error("Cannot determine family of instance type '{id}': no '.' separator")]
    MissingSeparator { id: String },
    #[error(
        "Cannot determine family of instance type '{id}': expected one '.' separator, found {count}"
    )]
    TooManySeparators { id: String, count: usize },
    #[error("Instance type '{id}' has an empty family or size")]
    EmptyComponent { id: String },
}

/// Borrowed view of an instance type identifier such as `m7i.4xlarge`, split
/// into its family (`m7i`) and size (`4xlarge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceType<'a> {
    family: &'a str,
    size: &'a str,
}

impl<'a> InstanceType<'a> {
    /// Splits `id` on its only separator. Only the separator count is
    /// checked, empty components are kept as they are.
    fn split(id: &'a str) -> Result<Self, InstanceTypeError> {
        let mut parts = id.split(INSTANCE_TYPE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(family), Some(size), None) => Ok(InstanceType { family, size }),
            (_, None, _) => Err(InstanceTypeError::MissingSeparator { id: id.into() }),
            _ => Err(InstanceTypeError::TooManySeparators {
                id: id.into(),
                count: id.matches(INSTANCE_TYPE_SEPARATOR).count(),
            }),
        }
    }

    pub fn family(&self) -> &'a str {
        self.family
    }

    pub fn size(&self) -> &'a str {
        self.size
    }

    /// Returns true when the size is plain `metal`.
    pub fn is_metal(&self) -> bool {
        self.size == "metal"
    }
}

impl<'a> TryFrom<&'a str> for InstanceType<'a> {
    type Error = InstanceTypeError;

    /// Recoverable counterpart of [`parse_instance_type`] for untrusted input.
    /// On top of the separator count it also rejects empty components.
    fn try_from(id: &'a str) -> Result<Self, Self::Error> {
        let instance_type = Self::split(id)?;
        if instance_type.family.is_empty() || instance_type.size.is_empty() {
            return Err(InstanceTypeError::EmptyComponent { id: id.into() });
        }
        Ok(instance_type)
    }
}

impl Display for InstanceType<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{INSTANCE_TYPE_SEPARATOR}{}", self.family, self.size)
    }
}

/// Splits an instance type into `(family, size)`.
///
/// Panics when `id` does not contain exactly one separator. A malformed
/// instance type means the caller is broken, and guessing a family would hand
/// back a wrong classification. Use [`InstanceType::try_from`] to validate
/// untrusted input first.
pub fn parse_instance_type(id: &str) -> (&str, &str) {
    match InstanceType::split(id) {
        Ok(instance_type) => (instance_type.family, instance_type.size),
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use instancedefs::{devices::DeviceClass, limits::MAX_VOLUME_LIMITS};
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_parse_instance_type() {
        assert_eq!(parse_instance_type("m7i.4xlarge"), ("m7i", "4xlarge"));
        assert_eq!(parse_instance_type("i3en.metal"), ("i3en", "metal"));
        assert_eq!(
            parse_instance_type("p6-b200.48xlarge"),
            ("p6-b200", "48xlarge")
        );
        assert_eq!(
            parse_instance_type("c8gd.metal-24xl"),
            ("c8gd", "metal-24xl")
        );
    }

    #[test]
    fn test_parse_is_inverse_of_join() {
        let ids = DeviceClass::iter()
            .flat_map(|class| class.table().iter())
            .chain(MAX_VOLUME_LIMITS.iter())
            .map(|(id, _)| *id);

        for id in ids {
            let (family, size) = parse_instance_type(id);
            assert_eq!(format!("{family}.{size}"), id);
            assert_eq!(InstanceType::try_from(id).unwrap().to_string(), id);
        }
    }

    #[test]
    #[should_panic(expected = "Cannot determine family of instance type 'm7i4xlarge'")]
    fn test_parse_missing_separator_panics() {
        parse_instance_type("m7i4xlarge");
    }

    #[test]
    #[should_panic(expected = "expected one '.' separator, found 2")]
    fn test_parse_too_many_separators_panics() {
        parse_instance_type("m7i.4xlarge.extra");
    }

    #[test]
    #[should_panic(expected = "no '.' separator")]
    fn test_parse_empty_panics() {
        parse_instance_type("");
    }

    #[test]
    fn test_parse_keeps_empty_components() {
        assert_eq!(parse_instance_type(".metal"), ("", "metal"));
        assert_eq!(parse_instance_type("m5."), ("m5", ""));
    }

    #[test]
    fn test_try_from() {
        let instance_type = InstanceType::try_from("u-6tb1.metal").unwrap();
        assert_eq!(instance_type.family(), "u-6tb1");
        assert_eq!(instance_type.size(), "metal");
        assert!(instance_type.is_metal());
        assert!(!InstanceType::try_from("m7i.metal-24xl").unwrap().is_metal());

        assert_eq!(
            InstanceType::try_from("m5large"),
            Err(InstanceTypeError::MissingSeparator {
                id: "m5large".into()
            })
        );
        assert_eq!(
            InstanceType::try_from("a.b.c.d"),
            Err(InstanceTypeError::TooManySeparators {
                id: "a.b.c.d".into(),
                count: 3
            })
        );
        assert_eq!(
            InstanceType::try_from(".metal"),
            Err(InstanceTypeError::EmptyComponent {
                id: ".metal".into()
            })
        );
    }
}

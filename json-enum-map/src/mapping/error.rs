use std::fmt;

/// Error returned when a mapping table cannot be built or a value has no
/// entry in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingError {
    message: String,
}

impl MappingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn empty_enum(type_name: &str) -> Self {
        Self::new(format!("`{type_name}` has no canonical members to map"))
    }

    pub(crate) fn unmapped_value(type_name: &str) -> Self {
        Self::new(format!("value of `{type_name}` has no mapping entry"))
    }

    pub(crate) fn unmapped_representation(
        type_name: &str,
        representation: &serde_json::Value,
    ) -> Self {
        Self::new(format!(
            "{representation} is not a known representation of `{type_name}`"
        ))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MappingError {}

#[cfg(test)]
mod tests {
    use super::MappingError;
    use serde_json::json;

    #[test]
    fn unmapped_representation_names_the_input() {
        let err = MappingError::unmapped_representation("Status", &json!("nope"));
        let expected = r#""nope" is not a known representation of `Status`"#;
        assert_eq!(err.to_string(), expected);
    }
}

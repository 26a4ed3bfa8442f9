//! Field kinds for content schemas.

use serde::{Deserialize, Serialize};

/// Kind of value a front-matter field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Textual scalar.
    String,
    /// Calendar date, supplied as a textual timestamp and normalized.
    Date,
    /// Sequence of textual scalars.
    StringArray,
}

impl FieldKind {
    /// Get the display name for this field kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Date => "date",
            Self::StringArray => "string array",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" | "str" => Ok(Self::String),
            "date" | "timestamp" => Ok(Self::Date),
            "string array" | "stringarray" | "array" | "list" => Ok(Self::StringArray),
            _ => Err(format!("unknown field kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_from_str() {
        assert_eq!("string".parse::<FieldKind>().unwrap(), FieldKind::String);
        assert_eq!("date".parse::<FieldKind>().unwrap(), FieldKind::Date);
        assert_eq!("string array".parse::<FieldKind>().unwrap(), FieldKind::StringArray);
        // Aliases
        assert_eq!("str".parse::<FieldKind>().unwrap(), FieldKind::String);
        assert_eq!("timestamp".parse::<FieldKind>().unwrap(), FieldKind::Date);
        assert_eq!("array".parse::<FieldKind>().unwrap(), FieldKind::StringArray);
        assert_eq!("list".parse::<FieldKind>().unwrap(), FieldKind::StringArray);
    }

    #[test]
    fn test_field_kind_from_str_unknown() {
        assert!("number".parse::<FieldKind>().is_err());
        assert!("".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::String.to_string(), "string");
        assert_eq!(FieldKind::Date.to_string(), "date");
        assert_eq!(FieldKind::StringArray.to_string(), "string array");
    }
}

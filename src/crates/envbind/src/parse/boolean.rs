use crate::error::{BindError, LiteralError};
use crate::parse::{FieldContext, Scalar};
use crate::shape::Kind;

/// Parse a boolean literal
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool_literal(raw: &str) -> Result<bool, LiteralError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(LiteralError::Bool),
    }
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;

    fn parse(raw: &str, _field: &FieldContext<'_>) -> Result<Self, BindError> {
        if raw.is_empty() {
            return Ok(false);
        }
        parse_bool_literal(raw).map_err(|source| BindError::malformed(raw, source))
    }

    fn from_empty() -> Option<Self> {
        Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldDescriptor;
    use crate::parse::test_support::parse;

    #[test]
    fn test_literals() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool_literal(raw), Ok(true), "{}", raw);
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool_literal(raw), Ok(false), "{}", raw);
        }
    }

    #[test]
    fn test_rejects_other_words() {
        for raw in ["yes", "no", "on", "tRUE", "2", "asdf"] {
            assert_eq!(parse_bool_literal(raw), Err(LiteralError::Bool), "{}", raw);
        }
    }

    #[test]
    fn test_empty_is_false() {
        assert_eq!(parse::<bool>("", FieldDescriptor::new()), Ok(false));
        assert_eq!(bool::from_empty(), Some(false));
    }

    #[test]
    fn test_malformed() {
        let error = parse::<bool>("maybe", FieldDescriptor::new()).unwrap_err();
        assert_eq!(error.code(), "malformed_value");
    }
}

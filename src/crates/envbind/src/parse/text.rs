use crate::error::BindError;
use crate::parse::{FieldContext, Scalar};
use crate::shape::Kind;

impl Scalar for String {
    const KIND: Kind = Kind::Text;

    fn parse(raw: &str, _field: &FieldContext<'_>) -> Result<Self, BindError> {
        Ok(raw.to_string())
    }

    /// Text is always assigned, even when blank
    fn from_empty() -> Option<Self> {
        Some(String::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::field;
    use crate::parse::test_support::parse;

    #[test]
    fn test_text_ignores_bounds() {
        let descriptor = field("NAME").range("z", "a");
        assert_eq!(parse::<String>("hello", descriptor), Ok("hello".to_string()));
    }
}

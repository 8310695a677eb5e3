use crate::error::BindError;
use crate::parse::{FieldContext, Scalar};
use crate::shape::Kind;
use url::Url;

impl Scalar for Url {
    const KIND: Kind = Kind::Url;

    fn parse(raw: &str, _field: &FieldContext<'_>) -> Result<Self, BindError> {
        Url::parse(raw).map_err(|source| BindError::MalformedUrl {
            value: raw.to_string(),
            source,
        })
    }
}

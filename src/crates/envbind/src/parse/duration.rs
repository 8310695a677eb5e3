//! Duration literals
//!
//! A duration is an optionally signed sequence of decimal numbers, each
//! with an optional fraction and a unit suffix: `300ms`, `-1.5h`, `2h45m`.
//! Valid units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`. The
//! bare literal `0` needs no unit. Values are exact to the nanosecond and
//! must fit in a signed 64-bit nanosecond count.

use crate::error::{BindError, LiteralError};
use crate::parse::{parse_bounded, FieldContext, Scalar};
use crate::shape::Kind;
use crate::validation::Bounded;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static COMPONENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]*)(?:\.([0-9]*))?(ns|us|µs|μs|ms|s|m|h)?").unwrap()
});

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Fraction digits past this many cannot change the result
const MAX_FRACTION_DIGITS: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {value:?}")]
    UnknownUnit { unit: String, value: String },

    #[error("duration {0:?} is out of range")]
    Overflow(String),

    #[error("duration {0:?} must not be negative")]
    Negative(String),
}

fn unit_nanos(unit: &str) -> u128 {
    match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => NANOS_PER_MINUTE,
        _ => NANOS_PER_HOUR,
    }
}

/// Parse a duration literal into signed nanoseconds
///
/// ```rust
/// use envbind::parse::parse_duration;
///
/// assert_eq!(parse_duration("1h30m"), Ok(5_400_000_000_000));
/// assert_eq!(parse_duration("-1.5s"), Ok(-1_500_000_000));
/// assert!(parse_duration("10").is_err());
/// ```
pub fn parse_duration(raw: &str) -> Result<i64, DurationError> {
    let invalid = || DurationError::Invalid(raw.to_string());

    let (negative, body) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if body == "0" {
        return Ok(0);
    }
    if body.is_empty() {
        return Err(invalid());
    }

    let limit: u128 = if negative {
        1u128 << 63
    } else {
        i64::MAX as u128
    };
    let overflow = || DurationError::Overflow(raw.to_string());

    let mut total: u128 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let caps = COMPONENT_REGEX.captures(rest).ok_or_else(invalid)?;
        let whole = caps.get(1).map_or("", |m| m.as_str());
        let fraction = caps.get(2).map_or("", |m| m.as_str());
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let Some(unit) = caps.get(3) else {
            let number_len = caps.get(0).map_or(0, |m| m.end());
            let unit: String = rest[number_len..]
                .chars()
                .take_while(|c| !c.is_ascii_digit() && *c != '.')
                .collect();
            return Err(if unit.is_empty() {
                DurationError::MissingUnit(raw.to_string())
            } else {
                DurationError::UnknownUnit {
                    unit,
                    value: raw.to_string(),
                }
            });
        };
        let scale = unit_nanos(unit.as_str());

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;

        if !fraction.is_empty() {
            let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let numerator: u128 = digits.parse().map_err(|_| invalid())?;
            let denominator = 10u128.pow(digits.len() as u32);
            nanos = nanos
                .checked_add(numerator * scale / denominator)
                .ok_or_else(overflow)?;
        }

        total = total.checked_add(nanos).ok_or_else(overflow)?;
        if total > limit {
            return Err(overflow());
        }

        rest = &rest[unit.end()..];
    }

    if negative {
        Ok((-(total as i128)) as i64)
    } else {
        Ok(total as i64)
    }
}

/// Render signed nanoseconds in the compact literal form, e.g. `1h30m0s`
///
/// ```rust
/// use envbind::parse::format_duration;
///
/// assert_eq!(format_duration(3_600_000_000_000), "1h0m0s");
/// assert_eq!(format_duration(1_500_000), "1.5ms");
/// assert_eq!(format_duration(0), "0s");
/// ```
pub fn format_duration(nanos: i64) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }

    let sign = if nanos < 0 { "-" } else { "" };
    let abs = nanos.unsigned_abs() as u128;

    if abs < NANOS_PER_SECOND {
        let (scale, unit) = if abs < NANOS_PER_MICRO {
            (1, "ns")
        } else if abs < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "µs")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        return format!("{}{}{}", sign, decimal(abs, scale), unit);
    }

    let hours = abs / NANOS_PER_HOUR;
    let minutes = (abs % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
    let seconds = abs % NANOS_PER_MINUTE;

    let mut out = sign.to_string();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&decimal(seconds, NANOS_PER_SECOND));
    out.push('s');
    out
}

/// `value / scale` with the remainder as a trimmed decimal fraction
fn decimal(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let remainder = value % scale;
    if remainder == 0 {
        return whole.to_string();
    }

    let width = scale.ilog10() as usize;
    let fraction = format!("{:0width$}", remainder, width = width);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

impl Bounded for chrono::Duration {
    fn natural_min() -> Self {
        chrono::Duration::nanoseconds(i64::MIN)
    }

    fn natural_max() -> Self {
        chrono::Duration::nanoseconds(i64::MAX)
    }

    fn parse_literal(raw: &str) -> Result<Self, LiteralError> {
        Ok(chrono::Duration::nanoseconds(parse_duration(raw)?))
    }

    fn render(&self) -> String {
        self.num_nanoseconds()
            .map(format_duration)
            .unwrap_or_else(|| self.to_string())
    }
}

impl Scalar for chrono::Duration {
    const KIND: Kind = Kind::Duration;

    fn parse(raw: &str, field: &FieldContext<'_>) -> Result<Self, BindError> {
        parse_bounded(raw, field)
    }
}

impl Bounded for std::time::Duration {
    fn natural_min() -> Self {
        std::time::Duration::ZERO
    }

    fn natural_max() -> Self {
        std::time::Duration::from_nanos(i64::MAX as u64)
    }

    fn parse_literal(raw: &str) -> Result<Self, LiteralError> {
        let nanos = parse_duration(raw)?;
        if nanos < 0 {
            return Err(DurationError::Negative(raw.to_string()).into());
        }
        Ok(std::time::Duration::from_nanos(nanos as u64))
    }

    fn render(&self) -> String {
        i64::try_from(self.as_nanos())
            .map(format_duration)
            .unwrap_or_else(|_| format!("{:?}", self))
    }
}

impl Scalar for std::time::Duration {
    const KIND: Kind = Kind::Duration;

    fn parse(raw: &str, field: &FieldContext<'_>) -> Result<Self, BindError> {
        parse_bounded(raw, field)
    }
}

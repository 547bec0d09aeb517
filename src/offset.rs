//! Signed time offsets
//!
//! Offsets are written as durations: an optional sign followed by
//! one or more `<decimal><unit>` terms, e.g. `1.5s`, `-200ms` or `1h2m3s`.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::{Result, ShiftError};

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

/// A signed shift applied to every timestamp, with nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset(i64);

impl Offset {
    pub const ZERO: Offset = Offset(0);

    pub fn from_nanos(nanos: i64) -> Self {
        Offset(nanos)
    }

    #[cfg(test)]
    pub fn from_millis(millis: i64) -> Self {
        Offset(millis.saturating_mul(NANOS_PER_MILLI as i64))
    }

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The offset as a chrono delta, for time-of-day arithmetic.
    pub fn delta(&self) -> TimeDelta {
        TimeDelta::nanoseconds(self.as_nanos())
    }

    /// Parse a duration such as `-1m30.5s`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason| ShiftError::InvalidOffset {
            input: input.to_string(),
            reason,
        };

        let (negative, mut rest) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        if rest == "0" {
            return Ok(Offset::ZERO);
        }
        if rest.is_empty() {
            return Err(invalid("empty duration"));
        }

        let mut total: u64 = 0;
        while !rest.is_empty() {
            let (whole, after) = split_digits(rest);
            let (fraction, after) = match after.strip_prefix('.') {
                Some(after_dot) => split_digits(after_dot),
                None => ("", after),
            };
            if whole.is_empty() && fraction.is_empty() {
                return Err(invalid("expected a number"));
            }

            let unit_end = after
                .find(|c: char| c == '.' || c.is_ascii_digit())
                .unwrap_or(after.len());
            let (unit, after) = after.split_at(unit_end);
            let unit_nanos = match unit {
                "" => return Err(invalid("missing unit")),
                "ns" => 1,
                "us" | "µs" | "μs" => NANOS_PER_MICRO,
                "ms" => NANOS_PER_MILLI,
                "s" => NANOS_PER_SEC,
                "m" => NANOS_PER_MIN,
                "h" => NANOS_PER_HOUR,
                _ => return Err(invalid("unknown unit")),
            };

            total = term_nanos(whole, fraction, unit_nanos)
                .and_then(|term| total.checked_add(term))
                .ok_or_else(|| invalid("duration out of range"))?;
            rest = after;
        }

        let limit = if negative {
            1u64 << 63
        } else {
            i64::MAX as u64
        };
        if total > limit {
            return Err(invalid("duration out of range"));
        }

        // `1 << 63` reinterprets as i64::MIN, which negates to itself.
        let nanos = total as i64;
        Ok(Offset::from_nanos(if negative {
            nanos.wrapping_neg()
        } else {
            nanos
        }))
    }
}

impl FromStr for Offset {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self> {
        Offset::parse(s)
    }
}

impl fmt::Display for Offset {
    /// Formats the offset back into duration syntax, e.g. `1h2m3.5s` or `-200ms`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0s");
        }
        if self.0 < 0 {
            f.write_str("-")?;
        }

        let mut nanos = self.0.unsigned_abs();
        if nanos < NANOS_PER_SEC {
            let (unit, scale) = if nanos < NANOS_PER_MICRO {
                ("ns", 1)
            } else if nanos < NANOS_PER_MILLI {
                ("µs", NANOS_PER_MICRO)
            } else {
                ("ms", NANOS_PER_MILLI)
            };
            return write!(f, "{}{}", decimal(nanos, scale), unit);
        }

        let hours = nanos / NANOS_PER_HOUR;
        nanos %= NANOS_PER_HOUR;
        let minutes = nanos / NANOS_PER_MIN;
        nanos %= NANOS_PER_MIN;

        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if hours > 0 || minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        write!(f, "{}s", decimal(nanos, NANOS_PER_SEC))
    }
}

// helper.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Nanoseconds for one `<whole>.<fraction><unit>` term, or None on overflow.
fn term_nanos(whole: &str, fraction: &str, unit_nanos: u64) -> Option<u64> {
    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };
    let mut nanos = whole.checked_mul(unit_nanos)?;

    if !fraction.is_empty() {
        // Digits past the 18th are below nanosecond resolution for every unit.
        let fraction = &fraction[..fraction.len().min(18)];
        let numerator: u128 = fraction.parse().ok()?;
        let denominator = 10u128.pow(fraction.len() as u32);
        let part = numerator * unit_nanos as u128 / denominator;
        nanos = nanos.checked_add(part as u64)?;
    }

    Some(nanos)
}

// helper.
fn decimal(value: u64, scale: u64) -> String {
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{:0width$}", fraction, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

//! Timing payloads: `t=`, `r=` and `z=`.

use crate::sdp::field::{FieldKind, FieldValue};
use crate::sdp::sdp_error::FieldError;
use std::{fmt, str::FromStr};

/// Unit suffix allowed on `r=` and `z=` time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Days => 86_400,
            Self::Hours => 3_600,
            Self::Minutes => 60,
            Self::Seconds => 1,
        }
    }

    pub const fn suffix(self) -> char {
        match self {
            Self::Days => 'd',
            Self::Hours => 'h',
            Self::Minutes => 'm',
            Self::Seconds => 's',
        }
    }

    const fn from_suffix(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Days),
            'h' => Some(Self::Hours),
            'm' => Some(Self::Minutes),
            's' => Some(Self::Seconds),
            _ => None,
        }
    }
}

/// A time value as written on the wire, e.g. `7d`, `-1h` or `3600`.
///
/// The unit is kept so the value is reproduced exactly as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedTime {
    value: i64,
    unit: Option<TimeUnit>,
}

impl TypedTime {
    pub const fn new(value: i64, unit: Option<TimeUnit>) -> Self {
        Self { value, unit }
    }

    pub const fn secs(value: i64) -> Self {
        Self { value, unit: None }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    pub const fn unit(&self) -> Option<TimeUnit> {
        self.unit
    }

    /// Value normalized to seconds.
    pub const fn as_seconds(&self) -> i64 {
        match self.unit {
            Some(u) => self.value.saturating_mul(u.seconds()),
            None => self.value,
        }
    }
}

impl FromStr for TypedTime {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = s.chars().last().and_then(TimeUnit::from_suffix);
        let digits = match unit {
            Some(_) => &s[..s.len() - 1],
            None => s,
        };
        Ok(Self::new(digits.parse()?, unit))
    }
}

impl fmt::Display for TypedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some(u) = self.unit {
            write!(f, "{}", u.suffix())?;
        }
        Ok(())
    }
}

/// `t=<start-time> <stop-time>` in NTP seconds; `0 0` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    start: u64,
    stop: u64,
}

impl Timing {
    pub const fn new(start: u64, stop: u64) -> Self {
        Self { start, stop }
    }

    pub const fn start(&self) -> u64 {
        self.start
    }

    pub const fn stop(&self) -> u64 {
        self.stop
    }

    pub const fn set_start(&mut self, start: u64) {
        self.start = start;
    }

    pub const fn set_stop(&mut self, stop: u64) {
        self.stop = stop;
    }

    /// True for the permanent session `t=0 0`.
    pub const fn is_unbounded(&self) -> bool {
        self.start == 0 && self.stop == 0
    }
}

impl FromStr for Timing {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = s.split_whitespace();
        let (Some(start), Some(stop), None) = (p.next(), p.next(), p.next()) else {
            return Err(FieldError::Invalid("t="));
        };
        Ok(Self::new(start.parse()?, stop.parse()?))
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.stop)
    }
}

impl FieldValue for Timing {
    const KIND: FieldKind = FieldKind::Time;
}

/// `r=<repeat interval> <active duration> <offsets from start-time>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    interval: TypedTime,
    duration: TypedTime,
    offsets: Vec<TypedTime>,
}

impl Repeat {
    pub const fn new(interval: TypedTime, duration: TypedTime, offsets: Vec<TypedTime>) -> Self {
        Self {
            interval,
            duration,
            offsets,
        }
    }

    pub const fn interval(&self) -> TypedTime {
        self.interval
    }

    pub const fn duration(&self) -> TypedTime {
        self.duration
    }

    pub fn offsets(&self) -> &[TypedTime] {
        &self.offsets
    }

    pub fn set_offsets(&mut self, offsets: Vec<TypedTime>) {
        self.offsets = offsets;
    }
}

impl FromStr for Repeat {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = s.split_whitespace();
        let (Some(interval), Some(duration)) = (p.next(), p.next()) else {
            return Err(FieldError::Invalid("r="));
        };
        let offsets = p.map(str::parse).collect::<Result<Vec<TypedTime>, _>>()?;
        if offsets.is_empty() {
            return Err(FieldError::Missing("r= offsets"));
        }
        Ok(Self::new(interval.parse()?, duration.parse()?, offsets))
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interval, self.duration)?;
        for o in &self.offsets {
            write!(f, " {o}")?;
        }
        Ok(())
    }
}

impl FieldValue for Repeat {
    const KIND: FieldKind = FieldKind::Repeat;

    fn validate(&self) -> Result<(), FieldError> {
        if self.offsets.is_empty() {
            return Err(FieldError::Missing("r= offsets"));
        }
        Ok(())
    }
}

/// One `<adjustment time> <offset>` pair of a `z=` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneAdjustment {
    pub time: u64,
    pub offset: TypedTime,
}

/// `z=` time zone adjustments, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    adjustments: Vec<ZoneAdjustment>,
}

impl Zone {
    pub const fn new(adjustments: Vec<ZoneAdjustment>) -> Self {
        Self { adjustments }
    }

    pub fn adjustments(&self) -> &[ZoneAdjustment] {
        &self.adjustments
    }

    pub fn add_adjustment(&mut self, time: u64, offset: TypedTime) {
        self.adjustments.push(ZoneAdjustment { time, offset });
    }
}

impl FromStr for Zone {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<_> = s.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() % 2 != 0 {
            return Err(FieldError::Invalid("z="));
        }
        let adjustments = tokens
            .chunks_exact(2)
            .map(|pair| -> Result<ZoneAdjustment, FieldError> {
                Ok(ZoneAdjustment {
                    time: pair[0].parse()?,
                    offset: pair[1].parse()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(adjustments))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, adj) in self.adjustments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", adj.time, adj.offset)?;
        }
        Ok(())
    }
}

impl FieldValue for Zone {
    const KIND: FieldKind = FieldKind::Zone;

    fn validate(&self) -> Result<(), FieldError> {
        if self.adjustments.is_empty() {
            return Err(FieldError::Missing("z= adjustments"));
        }
        Ok(())
    }
}

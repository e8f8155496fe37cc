// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;
use std::fmt;
use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::Ipv6Addr;
use std::time::Duration;

use jiff::SignedDuration;
use jiff::Timestamp;
use serde::Serialize;
use serde::ser::SerializeSeq;

use crate::net::IpPrefix;
use crate::net::MacAddr;

/// The value of a field.
///
/// This is a closed set of semantic kinds. Adapters translate each kind into the native value
/// representation of their backend.
///
/// Integer widths narrower than 64 bits are widened into [`Value::Int`] and [`Value::Uint`].
/// Every collection kind is represented as a [`Value::Array`] preserving order and length.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A single precision float, rendered at 32-bit precision.
    F32(f32),
    /// A double precision float.
    F64(f64),
    /// A boolean.
    Bool(bool),
    /// A point in time, rendered as RFC 3339.
    Time(Timestamp),
    /// A duration, possibly negative, rendered as integer nanoseconds.
    Duration(SignedDuration),
    /// An IP address.
    IpAddr(IpAddr),
    /// An IP network prefix.
    IpPrefix(IpPrefix),
    /// A hardware address.
    MacAddr(MacAddr),
    /// A byte blob, rendered as (lossy) UTF-8 text.
    Bytes(Vec<u8>),
    /// A byte blob, rendered as lowercase hex text.
    Hex(Vec<u8>),
    /// Pre-encoded JSON, or an arbitrary value captured through `serde`.
    Json(serde_json::Value),
    /// The message of an error.
    Error(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
}

impl Value {
    /// Returns the string slice if this is a textual value ([`Value::Str`] or [`Value::Error`]).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Error(s) => Some(s),
            _ => None,
        }
    }

    /// Duration nanoseconds, saturated to the `i64` range.
    pub(crate) fn duration_nanos(d: SignedDuration) -> i64 {
        let nanos = d.as_nanos();
        i64::try_from(nanos).unwrap_or(if nanos < 0 { i64::MIN } else { i64::MAX })
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Str(s) | Value::Error(s) => serializer.serialize_str(s),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Uint(v) => serializer.serialize_u64(*v),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Time(v) => serializer.collect_str(v),
            Value::Duration(v) => serializer.serialize_i64(Value::duration_nanos(*v)),
            Value::IpAddr(v) => serializer.collect_str(v),
            Value::IpPrefix(v) => serializer.collect_str(v),
            Value::MacAddr(v) => serializer.collect_str(v),
            Value::Bytes(v) => serializer.serialize_str(&String::from_utf8_lossy(v)),
            Value::Hex(v) => serializer.serialize_str(&hex::encode(v)),
            Value::Json(v) => v.serialize(serializer),
            Value::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) | Value::Error(s) => f.write_str(s),
            Value::Int(v) => fmt::Display::fmt(v, f),
            Value::Uint(v) => fmt::Display::fmt(v, f),
            Value::F32(v) => fmt::Display::fmt(v, f),
            Value::F64(v) => fmt::Display::fmt(v, f),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Time(v) => fmt::Display::fmt(v, f),
            // friendly format, e.g. `1h 30m` or `250ms`
            Value::Duration(v) => write!(f, "{v:#}"),
            Value::IpAddr(v) => fmt::Display::fmt(v, f),
            Value::IpPrefix(v) => fmt::Display::fmt(v, f),
            Value::MacAddr(v) => fmt::Display::fmt(v, f),
            Value::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            Value::Hex(v) => f.write_str(&hex::encode(v)),
            Value::Json(v) => fmt::Display::fmt(v, f),
            Value::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(value, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Uint(v as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Value::Str(v.into_owned())
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Time(v)
    }
}

impl From<SignedDuration> for Value {
    fn from(v: SignedDuration) -> Self {
        Value::Duration(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::Duration(SignedDuration::try_from(v).unwrap_or(SignedDuration::MAX))
    }
}

impl From<IpAddr> for Value {
    fn from(v: IpAddr) -> Self {
        Value::IpAddr(v)
    }
}

impl From<Ipv4Addr> for Value {
    fn from(v: Ipv4Addr) -> Self {
        Value::IpAddr(IpAddr::V4(v))
    }
}

impl From<Ipv6Addr> for Value {
    fn from(v: Ipv6Addr) -> Self {
        Value::IpAddr(IpAddr::V6(v))
    }
}

impl From<IpPrefix> for Value {
    fn from(v: IpPrefix) -> Self {
        Value::IpPrefix(v)
    }
}

impl From<MacAddr> for Value {
    fn from(v: MacAddr) -> Self {
        Value::MacAddr(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Json(serde_json::Value::Null),
        }
    }
}

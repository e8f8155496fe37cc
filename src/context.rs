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

use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

use jiff::Timestamp;
use serde::Serialize;

use crate::Adapter;
use crate::Level;
use crate::Record;
use crate::kv::ERROR_KEY;
use crate::kv::Field;
use crate::kv::Key;
use crate::kv::Value;
use crate::net::IpPrefix;
use crate::net::MacAddr;

/// A builder accumulating the fields of one record at one level.
///
/// Contexts are obtained from the level methods of a [`Logger`](crate::Logger). Field methods
/// append in call order and return the context for chaining; [`msg`](Context::msg) and
/// [`msgf`](Context::msgf) hand the record to the adapter and clear the accumulated fields, so a
/// context may be reused without leaking fields into the next record.
///
/// A *disabled* context accepts every call and does nothing. Loggers hand out disabled contexts
/// for levels their adapter rejects; [`Context::disabled`] creates one directly.
///
/// # Examples
///
/// ```
/// use logfront::Logger;
/// use logfront::adapter::LogAdapter;
///
/// let logger = Logger::new(LogAdapter::global());
/// logger
///     .info()
///     .str("svc", "api")
///     .int("code", 200)
///     .msgf(format_args!("request {} handled", 42));
/// ```
#[must_use = "a context does nothing until `msg` or `msgf` is called"]
pub struct Context<'a> {
    inner: Option<Inner<'a>>,
}

struct Inner<'a> {
    level: Level,
    adapter: &'a dyn Adapter,
    preset: &'a [Field],
    fields: Vec<Field>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(level: Level, adapter: &'a dyn Adapter, preset: &'a [Field]) -> Self {
        Context {
            inner: Some(Inner {
                level,
                adapter,
                preset,
                fields: Vec::new(),
            }),
        }
    }

    /// Creates a context on which every method is a no-op.
    pub fn disabled() -> Self {
        Context { inner: None }
    }

    /// Whether this context forwards records to an adapter.
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// The level of records emitted by this context, or `None` if it is disabled.
    pub fn level(&self) -> Option<Level> {
        self.inner.as_ref().map(|inner| inner.level)
    }

    fn push<V>(&mut self, key: impl Into<Key>, value: impl FnOnce() -> V) -> &mut Self
    where
        V: Into<Value>,
    {
        if let Some(inner) = &mut self.inner {
            inner.fields.push(Field::new(key, value()));
        }
        self
    }

    fn array<T>(&mut self, key: impl Into<Key>, values: &[T]) -> &mut Self
    where
        T: Copy + Into<Value>,
    {
        self.push(key, || {
            Value::Array(values.iter().map(|value| (*value).into()).collect())
        })
    }

    /// Adds a field of any kind convertible into a [`Value`].
    pub fn field(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a string field.
    pub fn str(&mut self, key: impl Into<Key>, value: &str) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of strings.
    pub fn strs<S: AsRef<str>>(&mut self, key: impl Into<Key>, values: &[S]) -> &mut Self {
        self.push(key, || {
            Value::Array(
                values
                    .iter()
                    .map(|value| {
                        let value: &str = value.as_ref();
                        Value::from(value)
                    })
                    .collect(),
            )
        })
    }

    /// Adds the `Display` rendering of `value`.
    pub fn stringer(&mut self, key: impl Into<Key>, value: &dyn fmt::Display) -> &mut Self {
        self.push(key, || value.to_string())
    }

    /// Adds the `Display` renderings of `values`.
    pub fn stringers<I>(&mut self, key: impl Into<Key>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.push(key, || {
            Value::Array(
                values
                    .into_iter()
                    .map(|value| Value::Str(value.to_string()))
                    .collect(),
            )
        })
    }

    /// Adds a pointer-sized signed integer.
    pub fn int(&mut self, key: impl Into<Key>, value: isize) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of pointer-sized signed integers.
    pub fn ints(&mut self, key: impl Into<Key>, values: &[isize]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 8-bit signed integer.
    pub fn int8(&mut self, key: impl Into<Key>, value: i8) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 8-bit signed integers.
    pub fn ints8(&mut self, key: impl Into<Key>, values: &[i8]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 16-bit signed integer.
    pub fn int16(&mut self, key: impl Into<Key>, value: i16) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 16-bit signed integers.
    pub fn ints16(&mut self, key: impl Into<Key>, values: &[i16]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 32-bit signed integer.
    pub fn int32(&mut self, key: impl Into<Key>, value: i32) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 32-bit signed integers.
    pub fn ints32(&mut self, key: impl Into<Key>, values: &[i32]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 64-bit signed integer.
    pub fn int64(&mut self, key: impl Into<Key>, value: i64) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 64-bit signed integers.
    pub fn ints64(&mut self, key: impl Into<Key>, values: &[i64]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a pointer-sized unsigned integer.
    pub fn uint(&mut self, key: impl Into<Key>, value: usize) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of pointer-sized unsigned integers.
    pub fn uints(&mut self, key: impl Into<Key>, values: &[usize]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 8-bit unsigned integer.
    pub fn uint8(&mut self, key: impl Into<Key>, value: u8) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 8-bit unsigned integers.
    pub fn uints8(&mut self, key: impl Into<Key>, values: &[u8]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 16-bit unsigned integer.
    pub fn uint16(&mut self, key: impl Into<Key>, value: u16) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 16-bit unsigned integers.
    pub fn uints16(&mut self, key: impl Into<Key>, values: &[u16]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 32-bit unsigned integer.
    pub fn uint32(&mut self, key: impl Into<Key>, value: u32) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 32-bit unsigned integers.
    pub fn uints32(&mut self, key: impl Into<Key>, values: &[u32]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 64-bit unsigned integer.
    pub fn uint64(&mut self, key: impl Into<Key>, value: u64) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 64-bit unsigned integers.
    pub fn uints64(&mut self, key: impl Into<Key>, values: &[u64]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 32-bit float, rendered at 32-bit precision.
    pub fn float32(&mut self, key: impl Into<Key>, value: f32) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 32-bit floats.
    pub fn floats32(&mut self, key: impl Into<Key>, values: &[f32]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a 64-bit float.
    pub fn float64(&mut self, key: impl Into<Key>, value: f64) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of 64-bit floats.
    pub fn floats64(&mut self, key: impl Into<Key>, values: &[f64]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a boolean.
    pub fn bool(&mut self, key: impl Into<Key>, value: bool) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of booleans.
    pub fn bools(&mut self, key: impl Into<Key>, values: &[bool]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a point in time, rendered as RFC 3339.
    pub fn time(&mut self, key: impl Into<Key>, value: Timestamp) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of points in time.
    pub fn times(&mut self, key: impl Into<Key>, values: &[Timestamp]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds a duration. Backends with a numeric encoding record integer nanoseconds.
    pub fn dur(&mut self, key: impl Into<Key>, value: Duration) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a sequence of durations.
    pub fn durs(&mut self, key: impl Into<Key>, values: &[Duration]) -> &mut Self {
        self.array(key, values)
    }

    /// Adds the signed duration `end - begin`.
    pub fn time_diff(
        &mut self,
        key: impl Into<Key>,
        end: Timestamp,
        begin: Timestamp,
    ) -> &mut Self {
        self.push(key, || end.duration_since(begin))
    }

    /// Adds an IPv4 or IPv6 address.
    pub fn ip_addr(&mut self, key: impl Into<Key>, value: impl Into<IpAddr>) -> &mut Self {
        self.push(key, || value.into())
    }

    /// Adds an IP network prefix in CIDR notation.
    pub fn ip_prefix(&mut self, key: impl Into<Key>, value: IpPrefix) -> &mut Self {
        self.push(key, || value)
    }

    /// Adds a hardware address, rendered as colon-separated hex octets.
    pub fn mac_addr(&mut self, key: impl Into<Key>, value: impl Into<MacAddr>) -> &mut Self {
        self.push(key, || value.into())
    }

    /// Adds a byte blob, rendered as text with invalid UTF-8 replaced.
    pub fn bytes(&mut self, key: impl Into<Key>, value: &[u8]) -> &mut Self {
        self.push(key, || Value::Bytes(value.to_vec()))
    }

    /// Adds a byte blob, rendered as lowercase hex.
    pub fn hex(&mut self, key: impl Into<Key>, value: &[u8]) -> &mut Self {
        self.push(key, || Value::Hex(value.to_vec()))
    }

    /// Adds an already encoded JSON document.
    ///
    /// Input that does not parse as JSON is recorded as a string.
    pub fn raw_json(&mut self, key: impl Into<Key>, value: &[u8]) -> &mut Self {
        self.push(key, || match serde_json::from_slice::<serde_json::Value>(value) {
            Ok(json) => Value::Json(json),
            Err(_) => Value::Str(String::from_utf8_lossy(value).into_owned()),
        })
    }

    /// Adds the message of `err` under the key `"error"`.
    pub fn err<E>(&mut self, err: &E) -> &mut Self
    where
        E: std::error::Error + ?Sized,
    {
        self.an_err(ERROR_KEY, err)
    }

    /// Adds the message of `err`.
    pub fn an_err<E>(&mut self, key: impl Into<Key>, err: &E) -> &mut Self
    where
        E: std::error::Error + ?Sized,
    {
        self.push(key, || Value::Error(err.to_string()))
    }

    /// Adds the messages of `errs`.
    pub fn errs<I>(&mut self, key: impl Into<Key>, errs: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: std::error::Error,
    {
        self.push(key, || {
            Value::Array(
                errs.into_iter()
                    .map(|err| Value::Error(err.to_string()))
                    .collect(),
            )
        })
    }

    /// Adds an arbitrary serializable value.
    ///
    /// If serialization fails, the failure message is recorded in place of the value.
    pub fn any<T>(&mut self, key: impl Into<Key>, value: &T) -> &mut Self
    where
        T: Serialize + ?Sized,
    {
        self.push(key, || match serde_json::to_value(value) {
            Ok(json) => Value::Json(json),
            Err(err) => Value::Error(err.to_string()),
        })
    }

    /// Adds one field per entry.
    ///
    /// Entries are added in iteration order, which is unspecified for hash maps.
    pub fn fields<I, K, V>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        if let Some(inner) = &mut self.inner {
            inner
                .fields
                .extend(fields.into_iter().map(|(key, value)| Field::new(key, value)));
        }
        self
    }

    /// Emits the record with message `msg`.
    pub fn msg(&mut self, msg: &str) {
        self.emit(format_args!("{msg}"));
    }

    /// Emits the record with a message formatted from `args`.
    ///
    /// The message is only formatted if the backend renders it.
    pub fn msgf(&mut self, args: fmt::Arguments<'_>) {
        self.emit(args);
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Some(inner) = &mut self.inner {
            inner.adapter.log(&Record::new(
                inner.level,
                args,
                inner.preset,
                &inner.fields,
            ));
            inner.fields.clear();
        }
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => f
                .debug_struct("Context")
                .field("level", &inner.level)
                .field("adapter", &inner.adapter)
                .field("fields", &inner.fields)
                .finish(),
            None => f.write_str("Context(disabled)"),
        }
    }
}

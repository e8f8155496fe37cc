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

//! The module for key-value pairs attached to a log record.

use std::borrow::Borrow;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

pub use crate::value::Value;

/// The key under which [`Context::err`](crate::Context::err) records an error.
pub const ERROR_KEY: &str = "error";

/// A bulk set of fields, attached with [`Context::fields`](crate::Context::fields).
///
/// Iteration order of the map is unspecified, and so is the order of the resulting fields.
pub type Fields = HashMap<String, Value>;

/// Represents a key in a key-value pair.
///
/// Keys are not validated; any text, including the empty string, is accepted as is.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Cow<'static, str>);

impl Key {
    /// Gets the key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<&'static str> for Key {
    fn from(key: &'static str) -> Self {
        Key(Cow::Borrowed(key))
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key(Cow::Owned(key))
    }
}

impl From<Cow<'static, str>> for Key {
    fn from(key: Cow<'static, str>) -> Self {
        Key(key)
    }
}

/// A key paired with a typed value.
///
/// Fields are opaque once created: a [`Context`](crate::Context) only ever appends them.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: Key,
    value: Value,
}

impl Field {
    /// Creates a new field.
    pub fn new(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        Field {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The key of this field.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The value of this field.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Splits the field into its key and value.
    pub fn into_parts(self) -> (Key, Value) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Field
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        Field::new(key, value)
    }
}

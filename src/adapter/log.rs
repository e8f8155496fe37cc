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

use log::kv::Source;
use log::kv::VisitSource;

use crate::Error;
use crate::Level;
use crate::Record;
use crate::adapter::Adapter;
use crate::filter::EnvFilter;
use crate::kv::Value;

/// The default target of records emitted by a [`LogAdapter`].
pub const DEFAULT_TARGET: &str = "logfront";

enum Handle {
    Owned(Box<dyn log::Log>),
    Global,
}

/// An adapter forwarding records to a [`log::Log`] implementation.
///
/// Fields become the record's key-values: numbers, booleans and strings as native values,
/// durations as integer nanoseconds, textual kinds (time, addresses, hex, bytes) through their
/// `Display` form, and sequences and JSON through `serde`.
///
/// # Examples
///
/// ```
/// use logfront::Logger;
/// use logfront::adapter::LogAdapter;
///
/// let logger = Logger::new(LogAdapter::global().target("my_app"));
/// logger.info().str("svc", "api").int("code", 200).msg("request handled");
/// ```
pub struct LogAdapter {
    logger: Handle,
    target: Cow<'static, str>,
    filter: Option<EnvFilter>,
}

impl LogAdapter {
    /// Creates an adapter that owns the given logger.
    ///
    /// The logger is used directly; it does not need to be installed with `log::set_logger`.
    pub fn new(logger: impl log::Log + 'static) -> Self {
        LogAdapter {
            logger: Handle::Owned(Box::new(logger)),
            target: Cow::Borrowed(DEFAULT_TARGET),
            filter: None,
        }
    }

    /// Creates an adapter forwarding to the logger installed globally for the `log` crate.
    ///
    /// `log::max_level` is honored the same way the `log` macros honor it.
    pub fn global() -> Self {
        LogAdapter {
            logger: Handle::Global,
            target: Cow::Borrowed(DEFAULT_TARGET),
            filter: None,
        }
    }

    /// Sets the target of emitted records.
    pub fn target(mut self, target: impl Into<Cow<'static, str>>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets a filter consulted before the wrapped logger's own `enabled` check.
    ///
    /// # Examples
    ///
    /// ```
    /// use logfront::Level;
    /// use logfront::adapter::LogAdapter;
    /// use logfront::filter::EnvFilter;
    ///
    /// let adapter = LogAdapter::global().filter(Level::Warn);
    /// let adapter = LogAdapter::global().filter(EnvFilter::from_env_or("MY_LOG", "info"));
    /// ```
    pub fn filter(mut self, filter: impl Into<EnvFilter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets a filter parsed from the directives in environment variable `name`.
    ///
    /// See [`EnvFilter::from_env`] for the handling of a missing variable.
    pub fn filter_from_env(self, name: &str) -> Self {
        self.filter(EnvFilter::from_env(name))
    }

    /// Sets a filter parsed from `directives`, failing on malformed input.
    pub fn try_filter(self, directives: &str) -> Result<Self, Error> {
        let filter = directives.parse::<EnvFilter>()?;
        Ok(self.filter(filter))
    }

    fn logger(&self) -> &dyn log::Log {
        match &self.logger {
            Handle::Owned(logger) => logger.as_ref(),
            Handle::Global => log::logger(),
        }
    }
}

impl fmt::Debug for LogAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let logger = match self.logger {
            Handle::Owned(_) => "owned",
            Handle::Global => "global",
        };
        f.debug_struct("LogAdapter")
            .field("logger", &logger)
            .field("target", &self.target)
            .field("filter", &self.filter)
            .finish()
    }
}

impl Adapter for LogAdapter {
    fn enabled(&self, level: Level) -> bool {
        if let Some(filter) = &self.filter {
            if !filter.enabled(level, &self.target) {
                return false;
            }
        }

        let level = log::Level::from(level);
        if matches!(self.logger, Handle::Global) && level > log::max_level() {
            return false;
        }

        let metadata = log::Metadata::builder()
            .level(level)
            .target(&self.target)
            .build();
        self.logger().enabled(&metadata)
    }

    fn log(&self, record: &Record) {
        self.logger().log(
            &log::Record::builder()
                .args(record.args())
                .level(record.level().into())
                .target(&self.target)
                .key_values(&KeyValues(record))
                .build(),
        );
    }

    fn flush(&self) {
        self.logger().flush();
    }
}

struct KeyValues<'r, 'a>(&'r Record<'a>);

impl Source for KeyValues<'_, '_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), log::kv::Error> {
        for field in self.0.fields() {
            visitor.visit_pair(
                log::kv::Key::from_str(field.key().as_str()),
                encode(field.value()),
            )?;
        }
        Ok(())
    }

    fn count(&self) -> usize {
        self.0.fields_len()
    }
}

fn encode(value: &Value) -> log::kv::Value<'_> {
    match value {
        Value::Str(s) | Value::Error(s) => log::kv::Value::from(s.as_str()),
        Value::Int(v) => log::kv::Value::from(*v),
        Value::Uint(v) => log::kv::Value::from(*v),
        Value::F64(v) => log::kv::Value::from(*v),
        Value::Bool(v) => log::kv::Value::from(*v),
        Value::Duration(v) => log::kv::Value::from(Value::duration_nanos(*v)),
        Value::Time(_)
        | Value::IpAddr(_)
        | Value::IpPrefix(_)
        | Value::MacAddr(_)
        | Value::Bytes(_)
        | Value::Hex(_) => log::kv::Value::from_display(value),
        // f32 goes through serde to keep its 32-bit rendering
        Value::F32(_) | Value::Json(_) | Value::Array(_) => log::kv::Value::from_serde(value),
    }
}

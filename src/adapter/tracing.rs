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

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use tracing::Dispatch;

use crate::Error;
use crate::Level;
use crate::Record;
use crate::adapter::Adapter;
use crate::filter::EnvFilter;

// Event metadata is static, so the target cannot be configured per adapter.
const TARGET: &str = "logfront";

/// An adapter emitting records as [`tracing`] events.
///
/// Tracing field names are fixed at compile time, so the record's fields are attached to the
/// event as a single `fields` value: the text of a JSON object, recorded with `Display`. The
/// message is the event's `message`. [`Level::Fatal`] is emitted at [`tracing::Level::ERROR`].
///
/// Subscribers see `fields` as a string. A JSON formatter writes it escaped, for example
/// `"fields":"{\"svc\":\"api\",\"code\":200}"`, and consumers that want the individual
/// members decode that string a second time.
///
/// # Examples
///
/// ```
/// use logfront::Logger;
/// use logfront::adapter::TracingAdapter;
///
/// let logger = Logger::new(TracingAdapter::current());
/// logger.warn().uint("retries", 3).msg("upstream slow");
/// ```
#[derive(Debug)]
pub struct TracingAdapter {
    dispatch: Option<Dispatch>,
    filter: Option<EnvFilter>,
}

impl TracingAdapter {
    /// Creates an adapter that emits into the given dispatcher regardless of the thread's default.
    pub fn new(dispatch: impl Into<Dispatch>) -> Self {
        TracingAdapter {
            dispatch: Some(dispatch.into()),
            filter: None,
        }
    }

    /// Creates an adapter that emits into whatever dispatcher is current at the time of the call.
    pub fn current() -> Self {
        TracingAdapter {
            dispatch: None,
            filter: None,
        }
    }

    /// Sets a filter consulted before the subscriber's own interest.
    ///
    /// Directives are matched against the target `logfront`.
    pub fn filter(mut self, filter: impl Into<EnvFilter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets a filter parsed from the directives in environment variable `name`.
    pub fn filter_from_env(self, name: &str) -> Self {
        self.filter(EnvFilter::from_env(name))
    }

    /// Sets a filter parsed from `directives`, failing on malformed input.
    pub fn try_filter(self, directives: &str) -> Result<Self, Error> {
        let filter = directives.parse::<EnvFilter>()?;
        Ok(self.filter(filter))
    }

    fn scoped<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}

impl Adapter for TracingAdapter {
    fn enabled(&self, level: Level) -> bool {
        if let Some(filter) = &self.filter {
            if !filter.enabled(level, TARGET) {
                return false;
            }
        }

        self.scoped(|| match level {
            Level::Debug => tracing::enabled!(target: TARGET, tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(target: TARGET, tracing::Level::INFO),
            Level::Warn => tracing::enabled!(target: TARGET, tracing::Level::WARN),
            Level::Error | Level::Fatal => {
                tracing::enabled!(target: TARGET, tracing::Level::ERROR)
            }
        })
    }

    fn log(&self, record: &Record) {
        let fields = FieldsJson(record);
        let args = record.args();
        self.scoped(|| match record.level() {
            Level::Debug => {
                tracing::event!(
                    target: TARGET,
                    tracing::Level::DEBUG,
                    fields = %fields,
                    "{}",
                    args
                )
            }
            Level::Info => {
                tracing::event!(
                    target: TARGET,
                    tracing::Level::INFO,
                    fields = %fields,
                    "{}",
                    args
                )
            }
            Level::Warn => {
                tracing::event!(
                    target: TARGET,
                    tracing::Level::WARN,
                    fields = %fields,
                    "{}",
                    args
                )
            }
            Level::Error | Level::Fatal => {
                tracing::event!(
                    target: TARGET,
                    tracing::Level::ERROR,
                    fields = %fields,
                    "{}",
                    args
                )
            }
        });
    }
}

struct FieldsJson<'r, 'a>(&'r Record<'a>);

impl Serialize for FieldsJson<'_, '_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.fields_len()))?;
        for field in self.0.fields() {
            map.serialize_entry(field.key().as_str(), field.value())?;
        }
        map.end()
    }
}

impl fmt::Display for FieldsJson<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => {
                f.write_str("{")?;
                for (i, field) in self.0.fields().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", field.key(), field.value())?;
                }
                f.write_str("}")
            }
        }
    }
}

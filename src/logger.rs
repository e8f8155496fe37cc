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
use std::sync::Arc;

use crate::Adapter;
use crate::Context;
use crate::Level;
use crate::adapter::NopAdapter;
use crate::kv::Field;
use crate::kv::Key;
use crate::kv::Value;

/// The logging facade.
///
/// A logger owns exactly one [`Adapter`] and hands out a fresh [`Context`] per record through its
/// level methods. Loggers are cheap to clone and may be shared between threads; there is no
/// process-wide default logger.
///
/// # Examples
///
/// ```
/// use logfront::Logger;
/// use logfront::adapter::LogAdapter;
///
/// let logger = Logger::new(LogAdapter::global());
/// let requests = logger.with([("component", "http")]);
///
/// requests.info().str("svc", "api").int("code", 200).msg("request handled");
/// ```
#[derive(Clone)]
pub struct Logger {
    adapter: Arc<dyn Adapter>,
    preset: Arc<[Field]>,
}

impl Logger {
    /// Creates a logger that forwards to `adapter`.
    pub fn new(adapter: impl Adapter) -> Self {
        Logger {
            adapter: Arc::new(adapter),
            preset: Arc::from(Vec::new()),
        }
    }

    /// Creates a logger that discards everything.
    pub fn nop() -> Self {
        Logger::new(NopAdapter)
    }

    /// Returns a child logger whose records carry `fields` ahead of their own.
    ///
    /// The child shares the adapter with `self`; fields already preset on `self` come first.
    #[must_use = "`with` returns a new logger and leaves `self` unchanged"]
    pub fn with<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let preset = self
            .preset
            .iter()
            .cloned()
            .chain(fields.into_iter().map(|(key, value)| Field::new(key, value)))
            .collect();
        Logger {
            adapter: self.adapter.clone(),
            preset,
        }
    }

    /// Whether records at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        self.adapter.enabled(level)
    }

    /// Starts a record at `level`.
    ///
    /// The context is disabled if the adapter rejects `level`.
    pub fn at(&self, level: Level) -> Context<'_> {
        if self.adapter.enabled(level) {
            Context::new(level, self.adapter.as_ref(), &self.preset)
        } else {
            Context::disabled()
        }
    }

    /// Starts a debug record.
    pub fn debug(&self) -> Context<'_> {
        self.at(Level::Debug)
    }

    /// Starts an info record.
    pub fn info(&self) -> Context<'_> {
        self.at(Level::Info)
    }

    /// Starts a warn record.
    pub fn warn(&self) -> Context<'_> {
        self.at(Level::Warn)
    }

    /// Starts an error record.
    pub fn error(&self) -> Context<'_> {
        self.at(Level::Error)
    }

    /// Starts a fatal record.
    ///
    /// Emitting a fatal record never terminates the process; exiting is left to the caller.
    pub fn fatal(&self) -> Context<'_> {
        self.at(Level::Fatal)
    }

    /// Flushes records buffered by the adapter.
    pub fn flush(&self) {
        self.adapter.flush();
    }
}

impl<A: Adapter> From<A> for Logger {
    fn from(adapter: A) -> Self {
        Logger::new(adapter)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("adapter", &self.adapter)
            .field("preset", &self.preset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::Record;

    #[derive(Debug, Default)]
    struct Capture {
        min: Option<Level>,
        records: Arc<Mutex<Vec<(Level, Vec<Field>)>>>,
    }

    impl Adapter for Capture {
        fn enabled(&self, level: Level) -> bool {
            self.min.is_none_or(|min| level >= min)
        }

        fn log(&self, record: &Record) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.fields().cloned().collect()));
        }
    }

    #[test]
    fn test_level_methods() {
        let records = Arc::new(Mutex::new(vec![]));
        let logger = Logger::new(Capture {
            min: Some(Level::Info),
            records: records.clone(),
        });

        logger.debug().msg("dropped");
        logger.info().msg("i");
        logger.warn().msg("w");
        logger.error().msg("e");
        logger.fatal().msg("f");

        let levels = records
            .lock()
            .unwrap()
            .iter()
            .map(|(level, _)| *level)
            .collect::<Vec<_>>();
        assert_eq!(
            levels,
            [Level::Info, Level::Warn, Level::Error, Level::Fatal]
        );
        assert!(!logger.enabled(Level::Debug));
        assert!(!logger.debug().is_enabled());
    }

    #[test]
    fn test_with_prepends_preset_fields() {
        let records = Arc::new(Mutex::new(vec![]));
        let logger = Logger::new(Capture {
            min: None,
            records: records.clone(),
        });
        let child = logger.with([("a", 1)]).with([("b", 2)]);

        child.info().int("c", 3).msg("m");
        logger.info().msg("parent");

        let records = records.lock().unwrap();
        let keys = records[0]
            .1
            .iter()
            .map(|f| f.key().as_str())
            .collect::<Vec<_>>();
        assert_eq!(keys, ["a", "b", "c"]);
        assert!(records[1].1.is_empty());
    }

    #[test]
    fn test_nop() {
        let logger = Logger::nop();
        for level in Level::ALL {
            assert!(!logger.enabled(level));
            assert!(!logger.at(level).is_enabled());
        }
        logger.fatal().str("k", "v").msg("nothing");
        logger.flush();
    }
}

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
use std::str::FromStr;

use log::LevelFilter;

use crate::Error;
use crate::ErrorKind;
use crate::Level;

/// The default environment variable for filtering logs.
pub const DEFAULT_FILTER_ENV: &str = "RUST_LOG";

/// A filter consisting of directives in the `env_logger` syntax, e.g. `info,my_target=debug`.
///
/// Adapters consult the filter with the record level and the adapter's target before a
/// [`Context`](crate::Context) is created; a rejected level yields a disabled context.
///
/// [`Level::Fatal`] is matched as `error`.
#[derive(Debug)]
pub struct EnvFilter(env_filter::Filter);

impl EnvFilter {
    /// Initializes the filter from the environment using default variable name `RUST_LOG`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logfront::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env();
    /// ```
    pub fn from_default_env() -> Self {
        EnvFilter::from_env(DEFAULT_FILTER_ENV)
    }

    /// Initializes the filter from the environment using specific variable name.
    ///
    /// A missing variable yields a filter with no directives, which only enables `error` records.
    /// Malformed directives are ignored.
    pub fn from_env<'a, E>(name: E) -> Self
    where
        E: Into<Cow<'a, str>>,
    {
        let name = name.into();

        let mut builder = env_filter::Builder::new();
        if let Ok(s) = std::env::var(&*name) {
            builder.parse(&s);
        }
        EnvFilter(builder.build())
    }

    /// Initializes the filter from the environment using specific variable name. If the variable
    /// is not set, the default value will be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logfront::filter::EnvFilter;
    /// let filter = EnvFilter::from_env_or("MY_LOG", "info");
    /// ```
    pub fn from_env_or<'a, 'b, E, V>(name: E, default: V) -> Self
    where
        E: Into<Cow<'a, str>>,
        V: Into<Cow<'b, str>>,
    {
        let name = name.into();
        let default = default.into();

        let mut builder = env_filter::Builder::new();
        match std::env::var(&*name) {
            Ok(s) => builder.parse(&s),
            Err(_) => builder.parse(&default),
        };
        EnvFilter(builder.build())
    }

    /// Checks whether a record at `level` for `target` passes the filter.
    pub fn enabled(&self, level: Level, target: &str) -> bool {
        let metadata = log::Metadata::builder()
            .level(level.into())
            .target(target)
            .build();
        self.0.enabled(&metadata)
    }
}

impl From<Level> for EnvFilter {
    /// A filter enabling `level` and every more severe level, for all targets.
    fn from(level: Level) -> Self {
        let level: log::Level = level.into();
        EnvFilter(
            env_filter::Builder::new()
                .filter_level(level.to_level_filter())
                .build(),
        )
    }
}

impl From<LevelFilter> for EnvFilter {
    fn from(filter: LevelFilter) -> Self {
        EnvFilter(env_filter::Builder::new().filter_level(filter).build())
    }
}

impl FromStr for EnvFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = env_filter::Builder::new();
        builder.try_parse(s).map_err(|err| {
            Error::new(ErrorKind::InvalidFilter, "malformed filter directives")
                .with_context("input", s)
                .with_source(err)
        })?;
        Ok(EnvFilter(builder.build()))
    }
}

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

//! Adapters binding a [`Logger`](crate::Logger) to a concrete logging backend.

use std::fmt;

use crate::Level;
use crate::Record;

mod log;
mod nop;
#[cfg(feature = "tracing")]
mod tracing;

pub use self::log::DEFAULT_TARGET;
pub use self::log::LogAdapter;
pub use self::nop::NopAdapter;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingAdapter;

/// A trait representing a logging backend that finished records are forwarded to.
///
/// Implementors translate every field of a [`Record`] into the native value representation of
/// their backend. Emission is infallible from the caller's point of view: any failure is handled
/// by the backend according to its own policy.
pub trait Adapter: fmt::Debug + Send + Sync + 'static {
    /// Whether records at `level` would be emitted.
    ///
    /// A [`Logger`](crate::Logger) hands out a disabled [`Context`](crate::Context) for
    /// rejected levels, so no field value is ever built for them.
    fn enabled(&self, level: Level) -> bool {
        let _ = level;
        true
    }

    /// Emits one finished record.
    fn log(&self, record: &Record);

    /// Flushes any buffered records.
    fn flush(&self) {}
}

impl<A: Adapter + ?Sized> Adapter for Box<A> {
    fn enabled(&self, level: Level) -> bool {
        (**self).enabled(level)
    }

    fn log(&self, record: &Record) {
        (**self).log(record)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

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

//! Logfront is a structured logging facade: one API for building log records field by field,
//! in front of swappable logging backends.
//!
//! # Overview
//!
//! A [`Logger`] owns one [`Adapter`]. Its level methods hand out a [`Context`], which collects
//! typed fields and emits the record with [`msg`](Context::msg) or [`msgf`](Context::msgf).
//! Swapping the backend means swapping the adapter; call sites stay the same.
//!
//! Built-in adapters:
//!
//! * [`LogAdapter`](adapter::LogAdapter) forwards to a [`log::Log`] implementation, fields
//!   become the record's key-values.
//! * [`TracingAdapter`](adapter::TracingAdapter) emits [`tracing`] events (feature `tracing`).
//! * [`NopAdapter`](adapter::NopAdapter) discards everything.
//!
//! # Examples
//!
//! ```
//! use logfront::Logger;
//! use logfront::adapter::LogAdapter;
//!
//! let logger = Logger::new(LogAdapter::global());
//!
//! logger
//!     .info()
//!     .str("svc", "api")
//!     .int("code", 200)
//!     .msg("request handled");
//!
//! let boom = std::io::Error::other("boom");
//! logger
//!     .error()
//!     .err(&boom)
//!     .msgf(format_args!("failed: {}", "retry"));
//! ```
//!
//! Contexts for disabled levels do nothing and never build their values:
//!
//! ```
//! use logfront::Logger;
//!
//! let logger = Logger::nop();
//! logger.debug().any("state", &vec![1, 2, 3]).msg("never rendered");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod adapter;
pub mod filter;
pub mod kv;
pub mod net;

mod context;
mod error;
mod level;
mod logger;
mod record;
mod value;

pub use adapter::Adapter;
pub use context::Context;
pub use error::Error;
pub use error::ErrorKind;
pub use level::Level;
pub use logger::Logger;
pub use record::Record;

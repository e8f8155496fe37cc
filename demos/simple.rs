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

//! Structured records printed by a `logforth` stdout appender behind the global `log` logger.

use std::time::Duration;

use log::LevelFilter;
use logforth::append;
use logfront::Logger;
use logfront::adapter::LogAdapter;
use logfront::filter::EnvFilter;

fn main() {
    // logforth passes everything through; the adapter's filter decides
    logforth::builder()
        .dispatch(|d| {
            d.filter(LevelFilter::Trace)
                .append(append::Stdout::default())
        })
        .apply();

    let logger = Logger::new(
        LogAdapter::global()
            .target("simple")
            .filter(EnvFilter::from_env_or("SIMPLE_LOG", "info")),
    );

    logger
        .info()
        .str("svc", "api")
        .int("code", 200)
        .dur("elapsed", Duration::from_millis(12))
        .msg("request handled");

    let requests = logger.with([("component", "http")]);
    let boom = std::io::Error::other("boom");
    requests
        .error()
        .err(&boom)
        .strs("peers", &["10.0.0.1", "10.0.0.2"])
        .msgf(format_args!("failed: {}", "retry"));

    // filtered out unless SIMPLE_LOG enables debug
    logger.debug().hex("payload", b"\x01\x02").msg("raw frame");

    logger.flush();
}

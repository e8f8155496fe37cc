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

mod common;

use common::JsonLogger;
use log::LevelFilter;
use logfront::Level;
use logfront::Logger;
use logfront::adapter::DEFAULT_TARGET;
use logfront::adapter::LogAdapter;
use serde_json::json;

#[test]
fn test_field_methods() {
    let sink = JsonLogger::default();
    let logger = Logger::new(LogAdapter::new(sink.clone()));
    common::run_cases(&logger, || sink.take());
}

#[test]
fn test_target_and_fatal_level() {
    let sink = JsonLogger::default();
    let logger = Logger::new(LogAdapter::new(sink.clone()).target("billing"));
    logger.fatal().str("account", "a-1").msg("ledger corrupted");

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["level"], json!("error"));
    assert_eq!(records[0]["target"], json!("billing"));
    assert_eq!(records[0]["account"], json!("a-1"));
}

#[test]
fn test_preset_fields_come_first() {
    let sink = JsonLogger::default();
    let logger = Logger::new(LogAdapter::new(sink.clone())).with([("svc", "api")]);
    logger.warn().uint16("port", 8080).msg("slow");

    let records = sink.take();
    assert_eq!(records[0]["target"], json!(DEFAULT_TARGET));
    assert_eq!(records[0]["svc"], json!("api"));
    assert_eq!(records[0]["port"], json!(8080));
}

#[test]
fn test_filter_rejects_before_values_are_built() {
    let sink = JsonLogger::default();
    let logger = Logger::new(
        LogAdapter::new(sink.clone())
            .try_filter("info")
            .unwrap(),
    );
    assert!(!logger.enabled(Level::Debug));
    logger
        .debug()
        .stringer("lazy", &PanicOnDisplay)
        .msg("never built");
    logger.info().msg("kept");

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["message"], json!("kept"));
}

struct PanicOnDisplay;

impl std::fmt::Display for PanicOnDisplay {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        panic!("rendered a value for a disabled level")
    }
}

// The only test in this binary that touches the global logger.
#[test]
fn test_global_logger_honors_max_level() {
    let sink = JsonLogger::default();
    log::set_boxed_logger(Box::new(sink.clone())).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let logger = Logger::new(LogAdapter::global());
    assert!(!logger.enabled(Level::Info));
    logger.info().msg("below max level");
    logger.error().int("code", 500).msg("above max level");
    logger.flush();

    let records = sink.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["message"], json!("above max level"));
    assert_eq!(records[0]["code"], json!(500));
}

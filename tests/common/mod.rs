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

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::Ipv6Addr;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use jiff::Timestamp;
use logfront::Context;
use logfront::Logger;
use logfront::kv::Value;
use logfront::net::IpPrefix;
use logfront::net::MacAddr;
use serde_json::json;

/// A captured record: `level`, `message` and one member per field.
pub type Json = serde_json::Map<String, serde_json::Value>;

/// A `log::Log` implementation that captures every record as a JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonLogger(Arc<Mutex<Vec<Json>>>);

impl JsonLogger {
    pub fn take(&self) -> Vec<Json> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl log::Log for JsonLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        struct Collect<'a>(&'a mut Json);

        impl<'kvs> log::kv::VisitSource<'kvs> for Collect<'_> {
            fn visit_pair(
                &mut self,
                key: log::kv::Key<'kvs>,
                value: log::kv::Value<'kvs>,
            ) -> Result<(), log::kv::Error> {
                // through text, so f32 values are read back the way a JSON consumer sees them
                let text = serde_json::to_string(&value).unwrap();
                let value = serde_json::from_str(&text).unwrap();
                self.0.insert(key.to_string(), value);
                Ok(())
            }
        }

        let mut json = Json::new();
        json.insert(
            "level".to_string(),
            record.level().as_str().to_lowercase().into(),
        );
        json.insert("target".to_string(), record.target().into());
        json.insert("message".to_string(), record.args().to_string().into());
        record.key_values().visit(&mut Collect(&mut json)).unwrap();
        self.0.lock().unwrap().push(json);
    }

    fn flush(&self) {}
}

/// A `tracing_subscriber` layer that captures every event as a JSON object.
///
/// Every event field is captured as the text it records, so `fields` stays a JSON string.
#[derive(Debug, Clone, Default)]
pub struct JsonLayer(Arc<Mutex<Vec<Json>>>);

impl JsonLayer {
    pub fn take(&self) -> Vec<Json> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for JsonLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _: tracing_subscriber::layer::Context<'_, S>,
    ) {
        struct FieldVisitor<'a>(&'a mut Json);

        impl tracing::field::Visit for FieldVisitor<'_> {
            fn record_debug(
                &mut self,
                field: &tracing::field::Field,
                value: &dyn std::fmt::Debug,
            ) {
                self.0
                    .insert(field.name().to_string(), format!("{value:?}").into());
            }
        }

        let meta = event.metadata();
        let mut json = Json::new();
        json.insert(
            "level".to_string(),
            meta.level().as_str().to_lowercase().into(),
        );
        json.insert("target".to_string(), meta.target().into());
        event.record(&mut FieldVisitor(&mut json));
        self.0.lock().unwrap().push(json);
    }
}

/// Decodes the `fields` string of a captured tracing event into its own object.
///
/// Panics unless the event carries exactly `level`, `message`, `target` and a string `fields`.
pub fn decode_fields(record: &Json) -> Json {
    let mut keys = record.keys().map(String::as_str).collect::<Vec<_>>();
    keys.sort_unstable();
    assert_eq!(keys, ["fields", "level", "message", "target"], "{record:?}");
    let text = record["fields"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

/// Replaces the `fields` string of a captured tracing event with its decoded members.
pub fn flatten_fields(mut record: Json) -> Json {
    let fields = decode_fields(&record);
    record.remove("fields");
    record.extend(fields);
    record
}

/// One field method call and the JSON it must produce under `key`.
pub struct Case {
    pub name: &'static str,
    pub key: &'static str,
    pub add: fn(&mut Context<'_>),
    pub expected: serde_json::Value,
}

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

#[derive(Debug)]
struct Failure(&'static str);

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Failure {}

/// A case for every field method.
pub fn cases() -> Vec<Case> {
    macro_rules! case {
        ($name:literal, |$ctx:ident| $add:expr, $expected:expr) => {
            case!($name, "Test", |$ctx| $add, $expected)
        };
        ($name:literal, $key:literal, |$ctx:ident| $add:expr, $expected:expr) => {
            Case {
                name: $name,
                key: $key,
                add: |$ctx| {
                    $add;
                },
                expected: $expected,
            }
        };
    }

    vec![
        case!("str", |c| c.str("Test", "Value"), json!("Value")),
        case!(
            "strs",
            |c| c.strs("Test", &["Value1", "Value2"]),
            json!(["Value1", "Value2"])
        ),
        case!(
            "stringer",
            |c| c.stringer("Test", &Ipv4Addr::LOCALHOST),
            json!("127.0.0.1")
        ),
        case!(
            "stringers",
            |c| c.stringers("Test", [Ipv4Addr::LOCALHOST, Ipv4Addr::BROADCAST]),
            json!(["127.0.0.1", "255.255.255.255"])
        ),
        case!("int", |c| c.int("Test", 42), json!(42)),
        case!("ints", |c| c.ints("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("int8", |c| c.int8("Test", -42), json!(-42)),
        case!("ints8", |c| c.ints8("Test", &[1, -2, 3]), json!([1, -2, 3])),
        case!("int16", |c| c.int16("Test", 42), json!(42)),
        case!("ints16", |c| c.ints16("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("int32", |c| c.int32("Test", 42), json!(42)),
        case!("ints32", |c| c.ints32("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("int64", |c| c.int64("Test", i64::MIN), json!(i64::MIN)),
        case!("ints64", |c| c.ints64("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("uint", |c| c.uint("Test", 42), json!(42)),
        case!("uints", |c| c.uints("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("uint8", |c| c.uint8("Test", 42), json!(42)),
        case!("uints8", |c| c.uints8("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("uint16", |c| c.uint16("Test", 42), json!(42)),
        case!("uints16", |c| c.uints16("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("uint32", |c| c.uint32("Test", 42), json!(42)),
        case!("uints32", |c| c.uints32("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("uint64", |c| c.uint64("Test", u64::MAX), json!(u64::MAX)),
        case!("uints64", |c| c.uints64("Test", &[1, 2, 3]), json!([1, 2, 3])),
        case!("float32", |c| c.float32("Test", 42.42), json!(42.42)),
        case!(
            "floats32",
            |c| c.floats32("Test", &[1.1, 2.2, 3.3]),
            json!([1.1, 2.2, 3.3])
        ),
        case!("float64", |c| c.float64("Test", 42.42), json!(42.42)),
        case!(
            "floats64",
            |c| c.floats64("Test", &[1.1, 2.2, 3.3]),
            json!([1.1, 2.2, 3.3])
        ),
        case!("bool", |c| c.bool("Test", true), json!(true)),
        case!(
            "bools",
            |c| c.bools("Test", &[true, false, true]),
            json!([true, false, true])
        ),
        case!(
            "time",
            |c| c.time("Test", ts("2020-01-01T00:00:00Z")),
            json!("2020-01-01T00:00:00Z")
        ),
        case!(
            "times",
            |c| c.times(
                "Test",
                &[ts("2020-01-01T00:00:00Z"), ts("2020-01-02T00:00:00.5Z")]
            ),
            json!(["2020-01-01T00:00:00Z", "2020-01-02T00:00:00.5Z"])
        ),
        case!(
            "dur",
            |c| c.dur("Test", Duration::from_secs(1)),
            json!(1_000_000_000)
        ),
        case!(
            "durs",
            |c| c.durs(
                "Test",
                &[Duration::from_secs(1), Duration::from_millis(2)]
            ),
            json!([1_000_000_000, 2_000_000])
        ),
        case!(
            "time_diff",
            |c| c.time_diff(
                "Test",
                ts("2020-01-01T01:00:00Z"),
                ts("2020-01-01T00:00:00Z")
            ),
            json!(3_600_000_000_000i64)
        ),
        case!(
            "time_diff_zero",
            |c| c.time_diff(
                "Test",
                ts("2020-01-01T00:00:00Z"),
                ts("2020-01-01T00:00:00Z")
            ),
            json!(0)
        ),
        case!(
            "ip_addr",
            |c| c.ip_addr("Test", IpAddr::V6(Ipv6Addr::LOCALHOST)),
            json!("::1")
        ),
        case!(
            "ip_prefix",
            |c| c.ip_prefix("Test", "127.0.0.1/24".parse::<IpPrefix>().unwrap()),
            json!("127.0.0.1/24")
        ),
        case!(
            "mac_addr",
            |c| c.mac_addr("Test", MacAddr::from([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e])),
            json!("00:1a:2b:3c:4d:5e")
        ),
        case!("bytes", |c| c.bytes("Test", b"Value"), json!("Value")),
        case!(
            "hex",
            |c| c.hex("Test", &[0xde, 0xad, 0xbe, 0xef]),
            json!("deadbeef")
        ),
        case!(
            "raw_json",
            |c| c.raw_json("Test", br#"{"a":[1,2],"b":null}"#),
            json!({"a": [1, 2], "b": null})
        ),
        case!("err", "error", |c| c.err(&Failure("boom")), json!("boom")),
        case!(
            "errs",
            |c| c.errs("Test", [Failure("first"), Failure("second")]),
            json!(["first", "second"])
        ),
        case!("an_err", |c| c.an_err("Test", &Failure("boom")), json!("boom")),
        case!(
            "any",
            |c| c.any("Test", &json!({"name": "widget", "tags": ["a", "b"]})),
            json!({"name": "widget", "tags": ["a", "b"]})
        ),
        case!(
            "fields",
            |c| c.fields(HashMap::from([("Test".to_string(), Value::from("Value"))])),
            json!("Value")
        ),
    ]
}

/// Runs every case through one reused context of `logger`, reading records back with `take`.
///
/// Each record must carry exactly the field of its case, which also checks that a reused context
/// starts empty after every emit.
pub fn run_cases(logger: &Logger, take: impl Fn() -> Vec<Json>) {
    let mut ctx = logger.info();
    for case in cases() {
        (case.add)(&mut ctx);
        ctx.msg(case.name);

        let records = take();
        assert_eq!(records.len(), 1, "{}: expected one record", case.name);
        let record = &records[0];
        assert_eq!(record["level"], json!("info"), "{}", case.name);
        assert_eq!(record["message"], json!(case.name), "{}", case.name);
        assert_eq!(record[case.key], case.expected, "{}", case.name);

        let mut keys = record.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        let mut want = vec!["level", "message", "target", case.key];
        want.sort_unstable();
        assert_eq!(keys, want, "{}: unexpected fields", case.name);
    }
}

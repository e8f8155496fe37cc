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

//! The same call sites logging through `tracing`, then through nothing.

use logfront::Logger;
use logfront::adapter::NopAdapter;
use logfront::adapter::TracingAdapter;

fn handle(logger: &Logger, order: u64) {
    logger
        .info()
        .uint64("order", order)
        .ip_addr("peer", std::net::Ipv4Addr::new(192, 168, 0, 7))
        .bools("flags", &[true, false])
        .msg("order accepted");
}

fn main() {
    tracing_subscriber::fmt().init();

    let logger = Logger::new(TracingAdapter::current());
    handle(&logger, 1);

    let logger = Logger::new(NopAdapter);
    handle(&logger, 2);
}

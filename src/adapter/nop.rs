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

use crate::Level;
use crate::Record;
use crate::adapter::Adapter;

/// An adapter that discards everything.
///
/// Every level is reported as disabled, so loggers built on it hand out disabled contexts and
/// no field value is ever constructed.
#[derive(Default, Debug, Clone, Copy)]
pub struct NopAdapter;

impl Adapter for NopAdapter {
    fn enabled(&self, _: Level) -> bool {
        false
    }

    fn log(&self, _: &Record) {}
}

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

use crate::Level;
use crate::kv::Field;

/// A finished log record, handed to an [`Adapter`](crate::Adapter) by a terminal call.
///
/// The record borrows from the emitting [`Context`](crate::Context) and only lives for the
/// duration of [`Adapter::log`](crate::Adapter::log).
#[derive(Clone, Copy)]
pub struct Record<'a> {
    level: Level,
    args: fmt::Arguments<'a>,
    preset: &'a [Field],
    fields: &'a [Field],
}

impl<'a> Record<'a> {
    pub(crate) fn new(
        level: Level,
        args: fmt::Arguments<'a>,
        preset: &'a [Field],
        fields: &'a [Field],
    ) -> Self {
        Record {
            level,
            args,
            preset,
            fields,
        }
    }

    /// The severity of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The message body.
    pub fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }

    /// All fields of the record: the logger's preset fields first, then the fields added to the
    /// context, each group in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &'a Field> + use<'a> {
        self.preset.iter().chain(self.fields.iter())
    }

    /// The number of fields of the record.
    pub fn fields_len(&self) -> usize {
        self.preset.len() + self.fields.len()
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("args", &self.args)
            .field("fields", &self.fields().collect::<Vec<_>>())
            .finish()
    }
}

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

//! Network value types that the standard library does not provide.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::Error;
use crate::ErrorKind;

/// An IP address together with a prefix length, e.g. `10.0.0.0/8`.
///
/// The address is kept as given; host bits are not masked off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpPrefix {
    addr: IpAddr,
    len: u8,
}

impl IpPrefix {
    /// Creates a prefix, failing if `len` exceeds the bit width of the address family.
    pub fn new(addr: IpAddr, len: u8) -> Result<Self, Error> {
        let max = match addr {
            IpAddr::V4(_) => 32,
            IpAddr::V6(_) => 128,
        };
        if len > max {
            return Err(
                Error::new(ErrorKind::InvalidIpPrefix, "prefix length out of range")
                    .with_context("addr", addr)
                    .with_context("len", len),
            );
        }
        Ok(IpPrefix { addr, len })
    }

    /// The address part.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The prefix length in bits.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }
}

impl fmt::Display for IpPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl FromStr for IpPrefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((addr, len)) = s.split_once('/') else {
            return Err(
                Error::new(ErrorKind::InvalidIpPrefix, "missing '/'").with_context("input", s)
            );
        };
        let addr = addr.parse::<IpAddr>().map_err(|err| {
            Error::new(ErrorKind::InvalidIpPrefix, "malformed address")
                .with_context("input", s)
                .with_source(err)
        })?;
        let len = len.parse::<u8>().map_err(|err| {
            Error::new(ErrorKind::InvalidIpPrefix, "malformed prefix length")
                .with_context("input", s)
                .with_source(err)
        })?;
        IpPrefix::new(addr, len)
    }
}

/// A hardware (MAC) address of 6, 8 or 20 octets, rendered as colon separated lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddr(Box<[u8]>);

impl MacAddr {
    /// Creates an address from raw octets, failing on lengths other than 6, 8 or 20.
    pub fn new(octets: &[u8]) -> Result<Self, Error> {
        match octets.len() {
            6 | 8 | 20 => Ok(MacAddr(octets.into())),
            n => Err(Error::new(ErrorKind::InvalidMacAddr, "unsupported address length")
                .with_context("octets", n)),
        }
    }

    /// The raw octets.
    pub fn octets(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> Self {
        MacAddr(Box::new(octets))
    }
}

impl From<[u8; 8]> for MacAddr {
    fn from(octets: [u8; 8]) -> Self {
        MacAddr(Box::new(octets))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{octet:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for MacAddr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sep = if s.contains('-') { '-' } else { ':' };
        let mut octets = Vec::with_capacity(20);
        for part in s.split(sep) {
            if part.len() != 2 {
                return Err(Error::new(ErrorKind::InvalidMacAddr, "octet must be two hex digits")
                    .with_context("input", s));
            }
            let octet = hex::decode(part).map_err(|err| {
                Error::new(ErrorKind::InvalidMacAddr, "malformed octet")
                    .with_context("input", s)
                    .with_source(err)
            })?;
            octets.extend(octet);
        }
        MacAddr::new(&octets).map_err(|err| err.with_context("input", s))
    }
}

//! Container serial numbers and the per-kind counters that issue them.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

use super::ContainerKind;

/// Prefix shared by every container serial.
pub const SERIAL_PREFIX: &str = "KON";

/// Serial number of a container, rendered as `KON-<code>-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerSerial {
    kind: ContainerKind,
    number: u32,
}

impl ContainerSerial {
    pub fn new(kind: ContainerKind, number: u32) -> Self {
        Self { kind, number }
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for ContainerSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", SERIAL_PREFIX, self.kind.code(), self.number)
    }
}

impl FromStr for ContainerSerial {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidSerial {
            value: s.to_string(),
        };

        let mut parts = s.trim().split('-');
        let (Some(prefix), Some(code), Some(number), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        if !prefix.eq_ignore_ascii_case(SERIAL_PREFIX) {
            return Err(invalid());
        }
        let mut chars = code.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => ContainerKind::from_code(c).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        let number: u32 = number.parse().map_err(|_| invalid())?;
        if number == 0 {
            return Err(invalid());
        }

        Ok(Self { kind, number })
    }
}

impl Serialize for ContainerSerial {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Issues serials from one monotonically increasing counter per container kind.
///
/// Each counter starts at 1 and is never reset. Increments go through
/// `&mut self`, so sharing a generator between threads needs a lock around it.
#[derive(Debug, Clone, Default)]
pub struct SerialGenerator {
    liquid: u32,
    gas: u32,
    refrigerated: u32,
}

impl SerialGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next serial for `kind`.
    ///
    /// Fails with [`Error::SerialsExhausted`] once the kind's counter has
    /// reached `u32::MAX`; the counter is left unchanged.
    pub fn next(&mut self, kind: ContainerKind) -> Result<ContainerSerial> {
        let counter = self.counter_mut(kind);
        let number = counter.checked_add(1).ok_or(Error::SerialsExhausted { kind })?;
        *counter = number;
        Ok(ContainerSerial::new(kind, number))
    }

    /// Number of serials issued so far for `kind`.
    pub fn issued(&self, kind: ContainerKind) -> u32 {
        match kind {
            ContainerKind::Liquid => self.liquid,
            ContainerKind::Gas => self.gas,
            ContainerKind::Refrigerated => self.refrigerated,
        }
    }

    fn counter_mut(&mut self, kind: ContainerKind) -> &mut u32 {
        match kind {
            ContainerKind::Liquid => &mut self.liquid,
            ContainerKind::Gas => &mut self.gas,
            ContainerKind::Refrigerated => &mut self.refrigerated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(generator: &mut SerialGenerator, kind: ContainerKind) -> ContainerSerial {
        generator.next(kind).expect("counter has room")
    }

    #[test]
    fn counters_start_at_one_per_kind() {
        let mut generator = SerialGenerator::new();
        assert_eq!(issue(&mut generator, ContainerKind::Liquid).to_string(), "KON-L-1");
        assert_eq!(issue(&mut generator, ContainerKind::Gas).to_string(), "KON-G-1");
        assert_eq!(issue(&mut generator, ContainerKind::Liquid).to_string(), "KON-L-2");
        assert_eq!(
            issue(&mut generator, ContainerKind::Refrigerated).to_string(),
            "KON-C-1"
        );
        assert_eq!(generator.issued(ContainerKind::Liquid), 2);
        assert_eq!(generator.issued(ContainerKind::Gas), 1);
    }

    #[test]
    fn separate_generators_are_deterministic() {
        let mut a = SerialGenerator::new();
        let mut b = SerialGenerator::new();
        issue(&mut a, ContainerKind::Gas);
        assert_eq!(issue(&mut a, ContainerKind::Gas).number(), 2);
        assert_eq!(issue(&mut b, ContainerKind::Gas).number(), 1);
    }

    #[test]
    fn exhausted_counter_fails_without_wrapping() {
        let mut generator = SerialGenerator {
            gas: u32::MAX - 1,
            ..SerialGenerator::default()
        };
        assert_eq!(issue(&mut generator, ContainerKind::Gas).number(), u32::MAX);
        assert!(matches!(
            generator.next(ContainerKind::Gas),
            Err(Error::SerialsExhausted { kind: ContainerKind::Gas })
        ));
        assert_eq!(generator.issued(ContainerKind::Gas), u32::MAX);
        assert_eq!(issue(&mut generator, ContainerKind::Liquid).number(), 1);
    }

    #[test]
    fn parses_displayed_serial() {
        let serial: ContainerSerial = "KON-G-12".parse().expect("valid serial");
        assert_eq!(serial.kind(), ContainerKind::Gas);
        assert_eq!(serial.number(), 12);

        let lower: ContainerSerial = " kon-c-3 ".parse().expect("case-insensitive");
        assert_eq!(lower, ContainerSerial::new(ContainerKind::Refrigerated, 3));
    }

    #[test]
    fn rejects_malformed_serials() {
        let malformed = [
            "", "KON-L", "KON-X-1", "KON-L-0", "KON-L-x", "BOX-L-1", "KON-LL-1", "KON-L-1-2",
        ];
        for value in malformed {
            let err = value.parse::<ContainerSerial>().expect_err(value);
            assert!(matches!(err, Error::InvalidSerial { .. }), "{value}");
        }
    }

    #[test]
    fn serializes_as_string() {
        let serial = ContainerSerial::new(ContainerKind::Liquid, 7);
        assert_eq!(serde_json::to_string(&serial).unwrap(), "\"KON-L-7\"");
    }
}

//! Core type definitions: scan targets and port ranges.
//!
//! `PortRange` guarantees `1 <= start <= end <= 65535` at construction, so
//! the scan loop never has to re-validate. `ScanTarget` accepts literal IPv4
//! addresses only; hostname resolution is out of scope.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A scan target resolved from a literal IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanTarget {
    /// The original input string.
    pub original: String,
    /// The parsed address.
    pub addr: Ipv4Addr,
}

impl ScanTarget {
    /// Parse a literal IPv4 address into a scan target.
    ///
    /// IPv6 and hostnames are rejected; the scanner's raw ICMP socket is
    /// IPv4-only and name resolution is deliberately not performed.
    pub fn parse(s: &str) -> Result<Self, ScanError> {
        let s = s.trim();
        match s.parse::<Ipv4Addr>() {
            Ok(addr) => Ok(Self {
                original: s.to_string(),
                addr,
            }),
            Err(_) => Err(ScanError::InvalidTarget(format!(
                "'{}' is not a literal IPv4 address",
                s
            ))),
        }
    }
}

impl FromStr for ScanTarget {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addr)
    }
}

/// An inclusive range of ports, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Create a new port range.
    ///
    /// Returns an error if `start` is zero or `start > end`. Values above
    /// 65535 are unrepresentable in `u16` and rejected at argument parsing.
    pub fn new(start: u16, end: u16) -> Result<Self, ScanError> {
        if start == 0 {
            return Err(ScanError::InvalidPortRange(start, end));
        }
        if start > end {
            return Err(ScanError::InvalidPortRange(start, end));
        }
        Ok(Self { start, end })
    }

    /// First port in the range.
    pub const fn start(&self) -> u16 {
        self.start
    }

    /// Last port in the range (inclusive).
    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Number of ports in the range.
    pub const fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// A valid range always holds at least one port.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all ports in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parses_ipv4_literal() {
        let target = ScanTarget::parse("192.168.1.1").unwrap();
        assert_eq!(target.addr, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(target.to_string(), "192.168.1.1");
    }

    #[test]
    fn test_target_rejects_hostname() {
        assert!(ScanTarget::parse("example.com").is_err());
    }

    #[test]
    fn test_target_rejects_ipv6() {
        assert!(ScanTarget::parse("::1").is_err());
    }

    #[test]
    fn test_range_validation() {
        assert!(PortRange::new(0, 100).is_err());
        assert!(PortRange::new(100, 50).is_err());
        assert!(PortRange::new(1, 65535).is_ok());
        assert!(PortRange::new(53, 53).is_ok());
    }

    #[test]
    fn test_range_iteration() {
        let range = PortRange::new(53, 55).unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![53, 54, 55]);
    }

    #[test]
    fn test_range_display() {
        assert_eq!(PortRange::new(1, 1000).unwrap().to_string(), "1-1000");
        assert_eq!(PortRange::new(53, 53).unwrap().to_string(), "53");
    }
}

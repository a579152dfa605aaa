//! Response classification: turning racing network signals into verdicts.
//!
//! This is the heart of the scanner. A probe elicits one of three signals:
//! a UDP reply (the service answered), an ICMP destination-unreachable error
//! (the kernel on the target rejected the datagram), or silence. Silence is
//! the dominant ambiguous case: many UDP services drop unrecognized probes,
//! so a timeout proves nothing about closure and maps to `open|filtered`.
//!
//! ICMP datagrams arriving on the raw socket are not correlated with the
//! probe that triggered them; on a busy or multi-homed host an unreachable
//! message caused by unrelated traffic can be misattributed to the current
//! port. Tightening this requires matching the embedded original datagram.

use crate::error::ScanResult;
use crate::scanner::transport::{Transport, TransportEvent};
use pnet::packet::icmp::{destination_unreachable::IcmpCodes, IcmpPacket, IcmpTypes};
use pnet::packet::ipv4::Ipv4Packet;
use serde::Serialize;
use std::fmt;
use tokio::time::Instant;
use tracing::trace;

/// Final classification of one probe attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PortVerdict {
    /// The service replied. Zero-length replies still count.
    Open { reply_len: usize },
    /// ICMP port unreachable: the only authoritative proof of closure.
    Closed,
    /// No response before the deadline; open and filtered are
    /// indistinguishable for UDP.
    #[serde(rename = "open|filtered")]
    OpenFiltered,
    /// ICMP unreachable with a non-port code (host, network, protocol,
    /// fragmentation); something on the path rejected the probe.
    Filtered { icmp_type: u8, icmp_code: u8 },
}

impl PortVerdict {
    /// `Open` and `Closed` stop the retry loop; the rest are ambiguous.
    pub fn is_definitive(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Closed)
    }

    /// Uppercase tag for the per-port output line.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Open { .. } => "OPEN",
            Self::Closed => "CLOSED",
            Self::OpenFiltered => "OPEN|FILTERED",
            Self::Filtered { .. } => "FILTERED",
        }
    }

    /// Human-readable explanation for the per-port output line.
    pub fn detail(&self) -> String {
        match self {
            Self::Open { reply_len } => format!("service responded: {} bytes", reply_len),
            Self::Closed => "ICMP port unreachable".to_string(),
            Self::OpenFiltered => "no response".to_string(),
            Self::Filtered {
                icmp_type,
                icmp_code,
            } => format!("ICMP unreachable type {}, code {}", icmp_type, icmp_code),
        }
    }
}

impl fmt::Display for PortVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { .. } => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::OpenFiltered => write!(f, "open|filtered"),
            Self::Filtered { .. } => write!(f, "filtered"),
        }
    }
}

/// Wait on both sockets until `deadline` and classify the first decisive
/// event.
///
/// ICMP types other than destination-unreachable are not verdict signals;
/// they are skipped and the wait resumes against the same deadline rather
/// than restarting it.
pub async fn wait_for_signal(
    transport: &mut dyn Transport,
    deadline: Instant,
) -> ScanResult<PortVerdict> {
    loop {
        match transport.recv_event(deadline).await? {
            TransportEvent::Udp { len } => return Ok(PortVerdict::Open { reply_len: len }),
            TransportEvent::TimedOut => return Ok(PortVerdict::OpenFiltered),
            TransportEvent::Icmp(datagram) => {
                if let Some(verdict) = classify_icmp(&datagram) {
                    return Ok(verdict);
                }
                trace!(len = datagram.len(), "ignoring non-unreachable icmp");
            }
        }
    }
}

/// Interpret a raw ICMP datagram (IPv4 header included).
///
/// The ICMP header sits at the offset given by the IP header-length field
/// (IHL, in 4-byte units). Returns `None` for anything that is not a
/// destination-unreachable message, including truncated datagrams.
fn classify_icmp(datagram: &[u8]) -> Option<PortVerdict> {
    let ip = Ipv4Packet::new(datagram)?;
    let header_len = ip.get_header_length() as usize * 4;
    let icmp = IcmpPacket::new(datagram.get(header_len..)?)?;

    let icmp_type = icmp.get_icmp_type();
    if icmp_type != IcmpTypes::DestinationUnreachable {
        return None;
    }

    let icmp_code = icmp.get_icmp_code();
    if icmp_code == IcmpCodes::DestinationPortUnreachable {
        Some(PortVerdict::Closed)
    } else {
        Some(PortVerdict::Filtered {
            icmp_type: icmp_type.0,
            icmp_code: icmp_code.0,
        })
    }
}

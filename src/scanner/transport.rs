//! Dual-socket transport for UDP probing.
//!
//! Each scanned port gets a fresh transport: one unconnected UDP socket for
//! sending probes and receiving service replies, and one raw `IPPROTO_ICMP`
//! socket for observing "destination unreachable" errors. A fresh pair per
//! port keeps stray datagrams from a previous port out of the next verdict.
//!
//! The raw socket requires root or `CAP_NET_RAW`; without it the transport
//! runs degraded and only UDP replies are observable.

use crate::error::{ScanError, ScanResult};
use async_trait::async_trait;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Maximum datagram size we are prepared to receive.
const MAX_DATAGRAM: usize = 65536;

/// What the multiplexed wait observed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A UDP datagram arrived on the probe socket. Zero-length replies are
    /// valid and still count as service activity.
    Udp { len: usize },
    /// A raw ICMP datagram arrived: full IPv4 header plus ICMP message.
    Icmp(Vec<u8>),
    /// The deadline elapsed with no activity on either socket.
    TimedOut,
}

/// Transport abstraction over the dual-socket pair.
///
/// The real implementation is [`UdpIcmpTransport`]; tests substitute a
/// scripted in-memory transport.
#[async_trait]
pub trait Transport: Send {
    /// Send a probe payload to the target port. Zero-length payloads are
    /// valid (the generic probe for unknown ports).
    async fn send(&mut self, payload: &[u8], port: u16) -> ScanResult<()>;

    /// Wait until `deadline` for the first event on either socket.
    ///
    /// This is a single multiplexed wait: both sockets are watched
    /// concurrently so neither can starve the other. When both are ready in
    /// the same cycle, the UDP reply wins.
    async fn recv_event(&mut self, deadline: Instant) -> ScanResult<TransportEvent>;
}

/// The real dual-socket transport.
pub struct UdpIcmpTransport {
    target: Ipv4Addr,
    udp: UdpSocket,
    icmp: Option<UdpSocket>,
    udp_buf: Vec<u8>,
    icmp_buf: Vec<u8>,
}

impl UdpIcmpTransport {
    /// Bind the socket pair for one port's probe.
    ///
    /// With `with_icmp` set, raw-socket creation failures due to missing
    /// privilege surface as [`ScanError::PermissionDenied`]; the caller
    /// decides whether to abort or rerun the scan degraded.
    pub async fn open(target: Ipv4Addr, with_icmp: bool) -> ScanResult<Self> {
        let udp = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .await
            .map_err(ScanError::Io)?;

        let icmp = if with_icmp {
            Some(open_icmp_socket()?)
        } else {
            None
        };

        trace!(%target, icmp = icmp.is_some(), "transport opened");

        Ok(Self {
            target,
            udp,
            icmp,
            udp_buf: vec![0u8; MAX_DATAGRAM],
            icmp_buf: vec![0u8; MAX_DATAGRAM],
        })
    }

    /// Whether this transport can observe ICMP errors.
    pub fn has_icmp(&self) -> bool {
        self.icmp.is_some()
    }
}

#[async_trait]
impl Transport for UdpIcmpTransport {
    async fn send(&mut self, payload: &[u8], port: u16) -> ScanResult<()> {
        let dest = SocketAddr::V4(SocketAddrV4::new(self.target, port));
        let sent = self
            .udp
            .send_to(payload, dest)
            .await
            .map_err(|e| ScanError::SendFailed(e.to_string()))?;
        debug!(%dest, bytes = sent, "probe sent");
        Ok(())
    }

    async fn recv_event(&mut self, deadline: Instant) -> ScanResult<TransportEvent> {
        tokio::select! {
            // UDP readiness outranks a simultaneous ICMP arrival: an
            // affirmative reply is stronger evidence than an error datagram.
            biased;

            res = self.udp.recv_from(&mut self.udp_buf) => match res {
                Ok((len, from)) => {
                    trace!(%from, len, "udp reply");
                    Ok(TransportEvent::Udp { len })
                }
                Err(e) => Err(ScanError::WaitFailed(e.to_string())),
            },

            res = recv_icmp(self.icmp.as_ref(), &mut self.icmp_buf) => match res {
                Ok(len) => {
                    trace!(len, "icmp datagram");
                    Ok(TransportEvent::Icmp(self.icmp_buf[..len].to_vec()))
                }
                Err(e) => Err(ScanError::WaitFailed(e.to_string())),
            },

            _ = tokio::time::sleep_until(deadline) => Ok(TransportEvent::TimedOut),
        }
    }
}

/// Receive from the raw ICMP socket, or park forever when running degraded
/// so the UDP branch and the deadline decide the outcome.
async fn recv_icmp(socket: Option<&UdpSocket>, buf: &mut [u8]) -> io::Result<usize> {
    match socket {
        Some(sock) => sock.recv_from(buf).await.map(|(len, _)| len),
        None => std::future::pending().await,
    }
}

/// Create the raw ICMP socket and hand it to the tokio reactor.
fn open_icmp_socket() -> ScanResult<UdpSocket> {
    let socket = Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4)).map_err(|e| {
        if e.kind() == io::ErrorKind::PermissionDenied {
            ScanError::PermissionDenied(
                "raw ICMP socket requires root or CAP_NET_RAW".to_string(),
            )
        } else {
            ScanError::RawSocket(e.to_string())
        }
    })?;
    socket
        .set_nonblocking(true)
        .map_err(|e| ScanError::RawSocket(e.to_string()))?;

    // The raw socket is just a file descriptor; registering it with tokio
    // through the std UdpSocket wrapper gives us async recv_from on whole
    // IP datagrams.
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket).map_err(ScanError::Io)
}

/// Check whether the process can create raw sockets without asking the
/// kernel, mirroring the scanner's startup privilege warning.
pub fn has_raw_socket_privileges() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A scripted transport for exercising the classifier, prober, and
    //! orchestrator without touching the network.

    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of events and records every send.
    pub struct ScriptedTransport {
        events: VecDeque<ScanResult<TransportEvent>>,
        pub sent: Vec<(Vec<u8>, u16)>,
        pub fail_send: bool,
    }

    impl ScriptedTransport {
        pub fn new(events: Vec<ScanResult<TransportEvent>>) -> Self {
            Self {
                events: events.into(),
                sent: Vec::new(),
                fail_send: false,
            }
        }

        /// A transport on which every wait times out.
        pub fn silent() -> Self {
            Self::new(Vec::new())
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(&mut self, payload: &[u8], port: u16) -> ScanResult<()> {
            if self.fail_send {
                return Err(ScanError::SendFailed("scripted failure".to_string()));
            }
            self.sent.push((payload.to_vec(), port));
            Ok(())
        }

        async fn recv_event(&mut self, _deadline: Instant) -> ScanResult<TransportEvent> {
            self.events
                .pop_front()
                .unwrap_or(Ok(TransportEvent::TimedOut))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;

    #[tokio::test]
    async fn test_silent_transport_times_out() {
        let mut transport = ScriptedTransport::silent();
        let event = transport
            .recv_event(Instant::now() + std::time::Duration::from_millis(1))
            .await
            .unwrap();
        assert_eq!(event, TransportEvent::TimedOut);
    }

    #[tokio::test]
    async fn test_scripted_transport_records_sends() {
        let mut transport = ScriptedTransport::silent();
        transport.send(b"probe", 53).await.unwrap();
        transport.send(b"", 54).await.unwrap();
        assert_eq!(transport.sent.len(), 2);
        assert_eq!(transport.sent[1], (Vec::new(), 54));
    }

    #[tokio::test]
    async fn test_real_transport_binds_udp_socket() {
        // No ICMP socket so this runs unprivileged.
        let transport = UdpIcmpTransport::open(Ipv4Addr::LOCALHOST, false)
            .await
            .unwrap();
        assert!(!transport.has_icmp());
    }

    #[tokio::test]
    async fn test_zero_length_send_is_valid() {
        let mut transport = UdpIcmpTransport::open(Ipv4Addr::LOCALHOST, false)
            .await
            .unwrap();
        transport.send(b"", 9).await.unwrap();
    }
}

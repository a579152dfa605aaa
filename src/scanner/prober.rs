//! Per-port probe driver with the retry policy.
//!
//! A definitive verdict (`open` from a reply, `closed` from port
//! unreachable) ends the port immediately. Ambiguous verdicts re-send the
//! same probe until the attempt budget runs out; the last ambiguous verdict
//! then stands. This retry is policy for unreliable UDP, not error
//! recovery: a transport-level send failure aborts the port at once.

use crate::error::ScanResult;
use crate::probes;
use crate::scanner::classify::{self, PortVerdict};
use crate::scanner::transport::Transport;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Default per-attempt response deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default number of probe attempts per port.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Drives the probe of a single port.
#[derive(Debug, Clone, Copy)]
pub struct PortProber {
    timeout: Duration,
    max_retries: u32,
}

impl Default for PortProber {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl PortProber {
    /// Create a prober with an explicit deadline and attempt budget.
    ///
    /// An attempt budget of zero is clamped to one: every port gets at
    /// least one probe.
    pub fn new(timeout: Duration, max_retries: u32) -> Self {
        Self {
            timeout,
            max_retries: max_retries.max(1),
        }
    }

    /// Probe one port to a final verdict.
    ///
    /// Selects the catalog probe for the port (or the empty generic probe),
    /// then sends and classifies up to `max_retries` times.
    pub async fn probe(
        &self,
        transport: &mut dyn Transport,
        port: u16,
    ) -> ScanResult<PortVerdict> {
        let payload = probes::payload_for(port);

        let mut verdict = PortVerdict::OpenFiltered;
        for attempt in 1..=self.max_retries {
            transport.send(payload, port).await?;

            let deadline = Instant::now() + self.timeout;
            verdict = classify::wait_for_signal(transport, deadline).await?;
            debug!(port, attempt, %verdict, "probe attempt classified");

            if verdict.is_definitive() {
                break;
            }
        }

        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::scanner::transport::testing::ScriptedTransport;
    use crate::scanner::transport::TransportEvent;

    fn prober() -> PortProber {
        PortProber::new(Duration::from_millis(10), 2)
    }

    #[tokio::test]
    async fn test_ambiguous_verdicts_exhaust_retry_budget() {
        // Silence on every attempt: exactly two probes, never a third.
        let mut transport = ScriptedTransport::silent();
        let verdict = prober().probe(&mut transport, 9999).await.unwrap();
        assert_eq!(verdict, PortVerdict::OpenFiltered);
        assert_eq!(transport.sent.len(), 2);
    }

    #[tokio::test]
    async fn test_definitive_verdict_short_circuits() {
        // Closed on the first attempt: exactly one probe sent.
        let mut datagram = vec![0u8; 28];
        datagram[0] = 0x45;
        datagram[9] = 1;
        datagram[20] = 3;
        datagram[21] = 3;
        let mut transport = ScriptedTransport::new(vec![Ok(TransportEvent::Icmp(datagram))]);
        let verdict = prober().probe(&mut transport, 9999).await.unwrap();
        assert_eq!(verdict, PortVerdict::Closed);
        assert_eq!(transport.sent.len(), 1);
    }

    #[tokio::test]
    async fn test_open_reply_short_circuits() {
        let mut transport =
            ScriptedTransport::new(vec![Ok(TransportEvent::Udp { len: 32 })]);
        let verdict = prober().probe(&mut transport, 53).await.unwrap();
        assert_eq!(verdict, PortVerdict::Open { reply_len: 32 });
        assert_eq!(transport.sent.len(), 1);
    }

    #[tokio::test]
    async fn test_retry_resends_the_same_probe() {
        let mut transport = ScriptedTransport::silent();
        prober().probe(&mut transport, 53).await.unwrap();
        assert_eq!(transport.sent[0], transport.sent[1]);
        assert_eq!(transport.sent[0].0, probes::payload_for(53));
    }

    #[tokio::test]
    async fn test_unknown_port_sends_empty_probe() {
        let mut transport = ScriptedTransport::silent();
        prober().probe(&mut transport, 9999).await.unwrap();
        assert!(transport.sent[0].0.is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_aborts_without_retry() {
        let mut transport = ScriptedTransport::silent();
        transport.fail_send = true;
        let err = prober().probe(&mut transport, 53).await.unwrap_err();
        assert!(matches!(err, ScanError::SendFailed(_)));
        assert!(transport.sent.is_empty());
    }
}

//! Scan orchestration: drives the probe of every port in a range.
//!
//! The scan is strictly sequential: one port is fully probed, retries
//! included, before the next begins. Each port gets a fresh socket pair so
//! late datagrams cannot bleed into the next port's verdict, and the loop
//! paces itself between ports. The statistics accumulator is owned here and
//! updated once per terminal verdict, so no synchronization is needed.

pub mod classify;
pub mod pacing;
pub mod prober;
pub mod transport;

pub use classify::PortVerdict;
pub use prober::PortProber;
pub use transport::{Transport, TransportEvent, UdpIcmpTransport};

use crate::error::ScanResult;
use crate::probes;
use crate::types::{PortRange, ScanTarget};
use chrono::{DateTime, Utc};
use pacing::Pacer;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Default delay between consecutive ports.
pub const DEFAULT_PACING: Duration = Duration::from_millis(10);

/// Configuration for a complete scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Target host.
    pub target: ScanTarget,
    /// Inclusive port range to probe.
    pub ports: PortRange,
    /// Per-attempt response deadline.
    pub timeout: Duration,
    /// Probe attempts per port.
    pub max_retries: u32,
    /// Delay between consecutive ports; zero disables pacing.
    pub pacing: Duration,
    /// Whether to open the raw ICMP socket. Off when unprivileged, which
    /// degrades classification to open vs. open|filtered.
    pub with_icmp: bool,
}

impl ScanConfig {
    /// Configuration with the reference defaults (2 s deadline, 2 attempts,
    /// 10 ms pacing).
    pub fn new(target: ScanTarget, ports: PortRange) -> Self {
        Self {
            target,
            ports,
            timeout: prober::DEFAULT_TIMEOUT,
            max_retries: prober::DEFAULT_MAX_RETRIES,
            pacing: DEFAULT_PACING,
            with_icmp: true,
        }
    }
}

/// Running counters for a scan, finalized once the full range completes.
#[derive(Debug, Clone, Serialize)]
pub struct ScanStatistics {
    pub total_ports: usize,
    pub open: usize,
    pub closed: usize,
    /// Aggregates both `filtered` and `open|filtered` verdicts.
    pub filtered: usize,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl ScanStatistics {
    fn new() -> Self {
        Self {
            total_ports: 0,
            open: 0,
            closed: 0,
            filtered: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Record one terminal verdict.
    fn record(&mut self, verdict: &PortVerdict) {
        match verdict {
            PortVerdict::Open { .. } => self.open += 1,
            PortVerdict::Closed => self.closed += 1,
            PortVerdict::OpenFiltered | PortVerdict::Filtered { .. } => self.filtered += 1,
        }
    }

    fn finalize(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock scan duration in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        let finished = self.finished_at.unwrap_or_else(Utc::now);
        (finished - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    /// Scan throughput in ports per second.
    pub fn ports_per_second(&self) -> f64 {
        let secs = self.elapsed_seconds();
        if secs > 0.0 {
            self.total_ports as f64 / secs
        } else {
            0.0
        }
    }
}

/// Verdict plus catalog context for one scanned port.
#[derive(Debug, Clone, Serialize)]
pub struct PortReport {
    pub port: u16,
    #[serde(flatten)]
    pub verdict: PortVerdict,
    pub service: String,
    pub reference: String,
}

/// Everything a scan produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub target: String,
    pub ports: String,
    pub statistics: ScanStatistics,
    pub results: Vec<PortReport>,
}

/// Run a scan with the real dual-socket transport.
///
/// `on_report` fires once per port with a terminal verdict, in port order,
/// so the caller can print results live.
pub async fn run_scan(
    config: &ScanConfig,
    on_report: impl FnMut(&PortReport),
) -> ScanResult<ScanReport> {
    let target = config.target.addr;
    let with_icmp = config.with_icmp;
    run_scan_with(
        config,
        move |_port| UdpIcmpTransport::open(target, with_icmp),
        on_report,
    )
    .await
}

/// Scan loop generic over the transport factory, one transport per port.
async fn run_scan_with<T, F, Fut>(
    config: &ScanConfig,
    mut make_transport: F,
    mut on_report: impl FnMut(&PortReport),
) -> ScanResult<ScanReport>
where
    T: Transport,
    F: FnMut(u16) -> Fut,
    Fut: Future<Output = ScanResult<T>>,
{
    let prober = PortProber::new(config.timeout, config.max_retries);
    let pacer = Pacer::from_interval(config.pacing);

    let mut statistics = ScanStatistics::new();
    let mut results = Vec::with_capacity(config.ports.len());

    for port in config.ports.iter() {
        statistics.total_ports += 1;

        // A failed port aborts that port only; the scan always covers the
        // full requested range.
        match probe_one(&mut make_transport, &prober, port).await {
            Ok(verdict) => {
                statistics.record(&verdict);
                let report = PortReport {
                    port,
                    verdict,
                    service: probes::service_label(port).to_string(),
                    reference: probes::reference_for(port).to_string(),
                };
                on_report(&report);
                results.push(report);
            }
            Err(e) => {
                warn!(port, error = %e, "port probe failed");
            }
        }

        if let Some(ref pacer) = pacer {
            pacer.wait().await;
        }
    }

    statistics.finalize();

    Ok(ScanReport {
        target: config.target.to_string(),
        ports: config.ports.to_string(),
        statistics,
        results,
    })
}

/// Open a fresh transport, probe, and release the sockets on every path.
async fn probe_one<T, F, Fut>(
    make_transport: &mut F,
    prober: &PortProber,
    port: u16,
) -> ScanResult<PortVerdict>
where
    T: Transport,
    F: FnMut(u16) -> Fut,
    Fut: Future<Output = ScanResult<T>>,
{
    let mut transport = make_transport(port).await?;
    prober.probe(&mut transport, port).await
    // transport drops here, closing both sockets.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::transport::testing::ScriptedTransport;

    fn test_config(start: u16, end: u16) -> ScanConfig {
        let mut config = ScanConfig::new(
            ScanTarget::parse("127.0.0.1").unwrap(),
            PortRange::new(start, end).unwrap(),
        );
        config.timeout = Duration::from_millis(5);
        config.pacing = Duration::ZERO;
        config
    }

    #[test]
    fn test_verdict_to_counter_mapping() {
        let mut stats = ScanStatistics::new();
        stats.record(&PortVerdict::Open { reply_len: 4 });
        stats.record(&PortVerdict::Closed);
        stats.record(&PortVerdict::OpenFiltered);
        stats.record(&PortVerdict::Filtered {
            icmp_type: 3,
            icmp_code: 1,
        });
        assert_eq!(stats.open, 1);
        assert_eq!(stats.closed, 1);
        assert_eq!(stats.filtered, 2);
    }

    #[tokio::test]
    async fn test_end_to_end_reply_and_timeout() {
        // Port 53 replies, port 54 stays silent.
        let config = test_config(53, 54);
        let report = run_scan_with(
            &config,
            |port| async move {
                Ok(if port == 53 {
                    ScriptedTransport::new(vec![Ok(TransportEvent::Udp { len: 48 })])
                } else {
                    ScriptedTransport::silent()
                })
            },
            |_| {},
        )
        .await
        .unwrap();

        assert_eq!(report.statistics.total_ports, 2);
        assert_eq!(report.statistics.open, 1);
        assert_eq!(report.statistics.closed, 0);
        assert_eq!(report.statistics.filtered, 1);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].port, 53);
        assert_eq!(report.results[0].service, "DNS");
    }

    #[tokio::test]
    async fn test_ports_are_scanned_in_ascending_order() {
        let config = test_config(67, 69);
        let mut seen = Vec::new();
        run_scan_with(
            &config,
            |_| async { Ok(ScriptedTransport::silent()) },
            |report| seen.push(report.port),
        )
        .await
        .unwrap();
        assert_eq!(seen, vec![67, 68, 69]);
    }

    #[tokio::test]
    async fn test_scan_survives_per_port_failures() {
        // Transport creation fails for port 54; 53 and 55 still complete.
        let config = test_config(53, 55);
        let report = run_scan_with(
            &config,
            |port| async move {
                if port == 54 {
                    Err(crate::error::ScanError::RawSocket("boom".to_string()))
                } else {
                    Ok(ScriptedTransport::silent())
                }
            },
            |_| {},
        )
        .await
        .unwrap();

        assert_eq!(report.statistics.total_ports, 3);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.statistics.filtered, 2);
    }

    #[tokio::test]
    async fn test_statistics_finalized_after_range() {
        let config = test_config(1, 1);
        let report = run_scan_with(
            &config,
            |_| async { Ok(ScriptedTransport::silent()) },
            |_| {},
        )
        .await
        .unwrap();
        assert!(report.statistics.finished_at.is_some());
        assert!(report.statistics.elapsed_seconds() >= 0.0);
    }
}

//! # sonde - A Protocol-Aware UDP Port Scanner
//!
//! sonde probes UDP ports with protocol-specific payloads and classifies
//! each port as open, closed, or filtered by racing the service's reply
//! against ICMP "destination unreachable" errors under a deadline.
//!
//! ## How classification works
//!
//! 1. **UDP reply**: any datagram back from the service, even zero-length,
//!    means the port is open.
//! 2. **ICMP port unreachable**: the only authoritative proof that a port
//!    is closed.
//! 3. **Other ICMP unreachable codes**: something on the path rejected the
//!    probe; the port is filtered.
//! 4. **Silence**: many UDP services drop unrecognized probes, so a timeout
//!    leaves the port in the ambiguous `open|filtered` state.
//!
//! Ambiguous verdicts are retried; definitive ones end the port at once.
//!
//! ## Privileges
//!
//! Receiving ICMP errors requires a raw socket (root or `CAP_NET_RAW`).
//! Without it the scan still runs, but only `open` and `open|filtered`
//! remain distinguishable.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sonde::scanner::{self, ScanConfig};
//! use sonde::types::{PortRange, ScanTarget};
//!
//! #[tokio::main]
//! async fn main() {
//!     let target = ScanTarget::parse("192.168.1.1").unwrap();
//!     let ports = PortRange::new(53, 161).unwrap();
//!     let config = ScanConfig::new(target, ports);
//!
//!     let report = scanner::run_scan(&config, |r| println!("{}: {}", r.port, r.verdict))
//!         .await
//!         .unwrap();
//!     println!("{} open ports", report.statistics.open);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`probes`] - Static catalog of protocol-specific probe payloads
//! - [`scanner`] - Orchestrator, per-port prober, classifier, and transport
//! - [`types`] - Validated scan targets and port ranges
//! - [`error`] - Comprehensive error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod error;
pub mod output;
pub mod probes;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use error::{ScanError, ScanResult};
pub use probes::ProbeEntry;
pub use scanner::{PortProber, PortReport, PortVerdict, ScanConfig, ScanReport, Transport};
pub use types::{PortRange, ScanTarget};

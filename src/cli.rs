//! Command-line interface definitions for sonde.
//!
//! Uses `clap` derive macros for declarative argument parsing.

use clap::{Parser, ValueEnum};
use std::time::Duration;

/// A protocol-aware UDP port scanner.
#[derive(Parser, Debug)]
#[command(name = "sonde")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "UDP port scanner with protocol-specific probes", long_about = None)]
#[command(after_help = "Note: requires root/sudo for ICMP-based closed/filtered detection")]
pub struct Args {
    /// Target IPv4 address to scan
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// First port of the range (1-65535)
    #[arg(value_name = "START_PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub start_port: u16,

    /// Last port of the range, inclusive (1-65535)
    #[arg(value_name = "END_PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub end_port: u16,

    /// Response deadline per probe attempt in milliseconds
    #[arg(short = 't', long, default_value = "2000", value_name = "MS")]
    pub timeout: u64,

    /// Probe attempts per port before an ambiguous verdict stands
    #[arg(short = 'r', long, default_value = "2")]
    pub retries: u32,

    /// Delay between consecutive ports in milliseconds (0 disables pacing)
    #[arg(short = 'd', long, default_value = "10", value_name = "MS")]
    pub delay: u64,

    /// Output format for the final report
    #[arg(short, long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Verbose output (show scanning progress)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Per-attempt deadline as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    /// Inter-port pacing delay as a duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("sonde").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_basic_invocation() {
        let args = parse(&["192.168.1.1", "1", "1000"]).unwrap();
        assert_eq!(args.target, "192.168.1.1");
        assert_eq!(args.start_port, 1);
        assert_eq!(args.end_port, 1000);
        assert_eq!(args.retries, 2);
        assert_eq!(args.timeout(), Duration::from_secs(2));
        assert_eq!(args.delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_port_zero_is_rejected() {
        assert!(parse(&["192.168.1.1", "0", "1000"]).is_err());
    }

    #[test]
    fn test_port_above_u16_is_rejected() {
        assert!(parse(&["192.168.1.1", "1", "65536"]).is_err());
    }

    #[test]
    fn test_missing_arguments_are_rejected() {
        assert!(parse(&["192.168.1.1", "1"]).is_err());
    }

    #[test]
    fn test_flags() {
        let args = parse(&["10.0.0.1", "53", "53", "-t", "500", "-d", "0", "-o", "json"]).unwrap();
        assert_eq!(args.timeout(), Duration::from_millis(500));
        assert_eq!(args.delay(), Duration::ZERO);
        assert_eq!(args.output, OutputFormat::Json);
    }
}

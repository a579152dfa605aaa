//! Output formatting module.
//!
//! Per-port lines are emitted live as the scan progresses; the summary
//! block and the JSON/CSV renderings work from the completed report.

use crate::cli::OutputFormat;
use crate::scanner::{PortReport, PortVerdict, ScanReport};
use console::{style, Style};
use std::io::{self, Write};

/// Format one per-port result line:
/// `[<VERDICT>] Port <port>/udp <service> (<detail>)`.
pub fn format_port_line(report: &PortReport) -> String {
    let verdict_style = match report.verdict {
        PortVerdict::Open { .. } => Style::new().green().bold(),
        PortVerdict::Closed => Style::new().red(),
        PortVerdict::OpenFiltered | PortVerdict::Filtered { .. } => Style::new().yellow(),
    };

    format!(
        "[{}] Port {}/udp {} ({})",
        verdict_style.apply_to(report.verdict.tag()),
        report.port,
        report.service,
        report.verdict.detail()
    )
}

/// Print the banner shown before the scan loop starts.
pub fn print_scan_header(target: &str, ports: &str, with_icmp: bool) {
    println!();
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("sonde").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Target: {}",
        style("•").dim(),
        style(target).white().bold()
    );
    println!(
        "{} Ports: {}/udp",
        style("•").dim(),
        style(ports).white().bold()
    );
    if !with_icmp {
        println!(
            "{} ICMP detection disabled; closed and filtered ports will not be distinguished",
            style("•").dim()
        );
    }
    println!();
}

/// Print the final summary block.
pub fn print_summary(report: &ScanReport) {
    let stats = &report.statistics;
    println!();
    println!("{}", style("=== Scan Statistics ===").cyan().bold());
    println!("Total ports scanned: {}", stats.total_ports);
    println!("Open ports: {}", style(stats.open).green().bold());
    println!("Closed ports: {}", style(stats.closed).red());
    println!(
        "Filtered/Open|Filtered: {}",
        style(stats.filtered).yellow()
    );
    println!("Scan duration: {:.2} seconds", stats.elapsed_seconds());
    println!("Scan rate: {:.2} ports/sec", stats.ports_per_second());
}

/// Render the whole report in the requested format.
pub fn print_report(report: &ScanReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => {
            print_summary(report);
            Ok(())
        }
        OutputFormat::Json => print_json(report),
        OutputFormat::Csv => print_csv(report),
    }
}

fn print_json(report: &ScanReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

fn print_csv(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["port", "state", "service", "detail"])?;
    for result in &report.results {
        wtr.write_record([
            &result.port.to_string(),
            &result.verdict.to_string(),
            &result.service,
            &result.verdict.detail(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(verdict: PortVerdict) -> PortReport {
        PortReport {
            port: 53,
            verdict,
            service: "DNS".to_string(),
            reference: "RFC 1035".to_string(),
        }
    }

    #[test]
    fn test_port_line_format() {
        let line = format_port_line(&report(PortVerdict::Open { reply_len: 48 }));
        let plain = console::strip_ansi_codes(&line).to_string();
        assert_eq!(plain, "[OPEN] Port 53/udp DNS (service responded: 48 bytes)");
    }

    #[test]
    fn test_ambiguous_port_line_format() {
        let line = format_port_line(&report(PortVerdict::OpenFiltered));
        let plain = console::strip_ansi_codes(&line).to_string();
        assert_eq!(plain, "[OPEN|FILTERED] Port 53/udp DNS (no response)");
    }
}

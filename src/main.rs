//! sonde binary entry point.

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use sonde::cli::{Args, OutputFormat};
use sonde::output;
use sonde::scanner::{self, transport, ScanConfig};
use sonde::types::{PortRange, ScanTarget};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // clap's default error exit code is 2; usage errors here exit 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args).await {
        output::print_error(&format!("{:#}", e));
        process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let target = ScanTarget::parse(&args.target).context("invalid target")?;
    let ports =
        PortRange::new(args.start_port, args.end_port).context("invalid port range")?;

    let with_icmp = transport::has_raw_socket_privileges();
    if !with_icmp {
        output::print_warning("not running as root; ICMP detection is disabled");
        output::print_warning("run with sudo to distinguish closed from filtered ports");
    }

    let mut config = ScanConfig::new(target, ports);
    config.timeout = args.timeout();
    config.max_retries = args.retries;
    config.pacing = args.delay();
    config.with_icmp = with_icmp;

    let quiet_lines = args.output != OutputFormat::Plain;
    if !quiet_lines {
        output::print_scan_header(&config.target.to_string(), &config.ports.to_string(), with_icmp);
    }

    let progress = if args.verbose {
        let pb = ProgressBar::new(config.ports.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .context("invalid progress template")?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let report = scanner::run_scan(&config, |port_report| {
        if !quiet_lines {
            let line = output::format_port_line(port_report);
            match &progress {
                Some(pb) => pb.println(line),
                None => println!("{}", line),
            }
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    })
    .await
    .context("scan failed")?;

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    output::print_report(&report, args.output).context("failed to render report")?;

    Ok(())
}

use crate::cli::Cli;
use crate::progress::TerminalReporter;
use eyre::{Result, WrapErr};
use indicatif::HumanBytes;
use std::time::{Duration, Instant};
use treecp_core::{CopyOptions, NoopReporter, ProgressReporter, RunSummary};

pub fn run_copy(args: &Cli) -> Result<()> {
    let options = build_options(args);
    let show_bar = !args.no_progress;

    println!(
        "treecp v{}: copying {} -> {}",
        env!("CARGO_PKG_VERSION"),
        args.source.display(),
        args.destination.display()
    );

    let start = Instant::now();
    let mut terminal = if show_bar || args.verbose {
        Some(TerminalReporter::new(
            &args.source,
            &args.destination,
            show_bar,
            args.verbose,
        )?)
    } else {
        None
    };
    let mut noop = NoopReporter;
    let reporter: &mut dyn ProgressReporter = match terminal.as_mut() {
        Some(reporter) => reporter,
        None => &mut noop,
    };

    let result = treecp_core::run(&args.source, &args.destination, &options, reporter);
    if let Some(reporter) = &terminal {
        reporter.finish();
    }
    let summary = result.wrap_err_with(|| {
        format!(
            "failed to copy {} to {}",
            args.source.display(),
            args.destination.display()
        )
    })?;

    print_summary(&summary, start.elapsed());
    Ok(())
}

fn build_options(args: &Cli) -> CopyOptions {
    CopyOptions {
        preserve_times: args.preserve_times,
    }
}

fn print_summary(summary: &RunSummary, elapsed: Duration) {
    for line in summary_lines(summary, elapsed) {
        println!("{line}");
    }
}

fn summary_lines(summary: &RunSummary, elapsed: Duration) -> Vec<String> {
    let copy = &summary.copy;
    let duration = if copy.duration.is_zero() {
        elapsed
    } else {
        copy.duration
    };

    let mut headline = format!(
        "Copied {} files, {} in {:.2?}",
        copy.files_copied,
        HumanBytes(copy.bytes_copied),
        duration
    );
    let secs = duration.as_secs_f64();
    if secs > 0.0 {
        let rate = (copy.bytes_copied as f64 / secs) as u64;
        headline.push_str(&format!(" ({}/s)", HumanBytes(rate)));
    }

    let mut lines = vec![
        headline,
        format!("Created {} directories", copy.directories_created),
    ];
    if copy.skipped > 0 {
        lines.push(format!(
            "Left out {} entries that are neither files nor directories",
            copy.skipped
        ));
    }
    if copy.bytes_copied != summary.scan.total_bytes {
        lines.push(format!(
            "Source changed during the copy: {} scanned, {} copied",
            HumanBytes(summary.scan.total_bytes),
            HumanBytes(copy.bytes_copied)
        ));
    }
    lines
}

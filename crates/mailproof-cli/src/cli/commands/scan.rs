//! `mailproof scan` - evaluate a domain's authentication posture.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mailproof::{
    advise, CheckStatus, ComplianceReport, Evaluator, HickoryDns, OverallStatus, ScanResponse,
};

use super::Context;
use crate::cli::args::ScanArgs;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: ScanArgs) -> Result<()> {
    let scan_config = ctx.scan_config(args.timeout, &args.selectors);
    let evaluator = Evaluator::with_resolver(HickoryDns::new(), scan_config);

    let spinner = (ctx.output_format == OutputFormat::Pretty).then(|| {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
        );
        bar.set_message(format!("Scanning {}...", args.domain.trim()));
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        bar
    });

    let result = evaluator.evaluate(&args.domain).await;

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let report = result?;

    match ctx.output_format {
        OutputFormat::Json => {
            let response = ScanResponse::from(report);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Yaml => {
            let response = ScanResponse::from(report);
            println!("{}", serde_yaml::to_string(&response)?);
        }
        OutputFormat::Csv => print_csv(&report),
        OutputFormat::Pretty => print_pretty(&report, args.no_advice),
    }

    Ok(())
}

fn print_csv(report: &ComplianceReport) {
    println!("mechanism,status,record,detail");
    for check in &report.checks {
        println!(
            "{},{},{},{}",
            check.mechanism,
            check.status,
            csv_field(check.record.as_deref()),
            csv_field(check.detail.as_deref()),
        );
    }
}

fn csv_field(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("\"{}\"", v.replace('"', "\"\"")),
        None => String::new(),
    }
}

fn status_symbol(status: CheckStatus) -> colored::ColoredString {
    match status {
        CheckStatus::Pass => "✓".green().bold(),
        CheckStatus::Fail => "✗".red().bold(),
        CheckStatus::Indeterminate => "?".yellow().bold(),
    }
}

fn print_pretty(report: &ComplianceReport, no_advice: bool) {
    println!("{} {}", "Domain:".bold(), report.domain.cyan());
    println!();

    for check in &report.checks {
        println!(
            "  {} {:6} {}",
            status_symbol(check.status),
            check.mechanism.to_string().bold(),
            check.status
        );
        if let Some(ref record) = check.record {
            println!("           {}", record.dimmed());
        }
        if let Some(ref detail) = check.detail {
            println!("           {detail}");
        }
    }

    println!();
    let verdict = match report.overall {
        OverallStatus::Pass => "compliant".green().bold(),
        OverallStatus::Fail => "not compliant".red().bold(),
    };
    println!(
        "{} {} ({}/100)",
        "Overall:".bold(),
        verdict,
        report.score()
    );

    if report.has_indeterminate() {
        println!(
            "{}",
            "Some lookups could not be completed; re-run to confirm.".yellow()
        );
    }

    if !no_advice {
        print_advice(report);
    }
}

fn print_advice(report: &ComplianceReport) {
    let advice = advise(report);
    if advice.is_empty() {
        return;
    }

    println!();
    println!("{}", "Next steps:".bold().underline());
    for item in advice {
        println!("  {} {}", item.mechanism.to_string().bold(), item.summary);
        if let Some(record) = item.suggested_record {
            println!("    {}", record.cyan());
        }
    }
}

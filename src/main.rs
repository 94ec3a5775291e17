//! Insurance Lab CLI
//!
//! Command-line front end for comparing two policies, sweeping one input at a
//! time, and writing the assignment submission.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use insurance_lab::comparison::{format_currency, format_score, ComparisonSummary};
use insurance_lab::projection::implied_discount_rate;
use insurance_lab::submission::Submission;
use insurance_lab::sweep::{SweepAnalyzer, SweepAxis, SweepResult};
use insurance_lab::{export, LabConfig, PolicyConfig, ProjectionEngine};
use log::info;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "insurance-lab", version, about = "Teaching simulator for insurance NPV and utility")]
struct Cli {
    /// JSON config with profile, policy_a, policy_b and discount_rate
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare NPV and utility of both policies
    Compare {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Sweep one input and report break-even points
    Sweep {
        #[arg(long, value_enum)]
        axis: AxisArg,
        /// Write both series as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print yearly projection rows for one policy
    Project {
        #[arg(long, value_enum, default_value = "a")]
        policy: PolicyArg,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Discount rate at which each policy breaks even
    ImpliedRate {
        #[arg(long, default_value_t = 1.0)]
        low: f64,
        #[arg(long, default_value_t = 20.0)]
        high: f64,
    },
    /// Write the assignment submission file
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        id: String,
        /// JSON array of five answers
        #[arg(long)]
        answers: Option<PathBuf>,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Term,
    Premium,
    Rate,
}

impl From<AxisArg> for SweepAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Term => SweepAxis::Term,
            AxisArg::Premium => SweepAxis::Premium,
            AxisArg::Rate => SweepAxis::DiscountRate,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    A,
    B,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = LabConfig::load_or_default(cli.config.as_deref()).context("Failed to load lab config")?;
    let engine = ProjectionEngine::default();

    match cli.command {
        Command::Compare { json } => run_compare(&config, &engine, json),
        Command::Sweep { axis, csv, json } => run_sweep(&config, engine, axis.into(), csv, json),
        Command::Project { policy, csv } => run_project(&config, &engine, policy, csv),
        Command::ImpliedRate { low, high } => run_implied_rate(&config, &engine, low, high),
        Command::Submit { name, id, answers, out } => run_submit(&config, &engine, &name, &id, answers, out),
    }
}

fn run_compare(config: &LabConfig, engine: &ProjectionEngine, json: bool) -> Result<()> {
    let summary = ComparisonSummary::build(config, engine);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Policy Comparison (discount rate {:.2}%)", config.discount_rate);
    println!("{}", "=".repeat(64));
    println!("{:<24} {:>18} {:>18}", "Metric", "Policy A", "Policy B");
    println!("{}", "-".repeat(64));
    for (metric, a, b) in summary.rows() {
        println!("{:<24} {:>18} {:>18}", metric, a, b);
    }
    println!();
    println!("Higher utility: {}", summary.preferred_by_utility().label);
    Ok(())
}

fn run_sweep(
    config: &LabConfig,
    engine: ProjectionEngine,
    axis: SweepAxis,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let analyzer = SweepAnalyzer::new(engine);
    let (a, b) = analyzer.sweep_pair(
        &config.profile,
        &config.policy_a,
        &config.policy_b,
        config.discount_rate,
        axis,
    );
    info!("{:?} sweep: {} / {} samples", axis, a.len(), b.len());

    if let Some(path) = csv {
        export::write_sweeps_to_path(&path, &[("Policy A", &a), ("Policy B", &b)])
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Sweep written to: {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&[&a, &b])?);
        return Ok(());
    }

    println!("NPV vs {}", axis.label());
    println!("{:>12} {:>16} {:>12} {:>16}", "A: x", "A: NPV", "B: x", "B: NPV");
    println!("{}", "-".repeat(60));
    for ((xa, na), (xb, nb)) in a.points().zip(b.points()) {
        println!("{:>12.2} {:>16} {:>12.2} {:>16}", xa, format_currency(na), xb, format_currency(nb));
    }
    println!();
    print_break_even("Policy A", &a);
    print_break_even("Policy B", &b);
    Ok(())
}

fn print_break_even(label: &str, sweep: &SweepResult) {
    match sweep.break_even {
        Some(be) => println!("{} break-even: x = {:.2}, NPV = {}", label, be.x, format_currency(be.npv)),
        None => println!("{} break-even: no samples", label),
    }
}

fn run_project(config: &LabConfig, engine: &ProjectionEngine, policy: PolicyArg, csv: Option<PathBuf>) -> Result<()> {
    let (label, policy) = select_policy(config, policy);
    let result = engine.project_detailed(&config.profile, policy, config.discount_rate);

    println!("{} projection ({} years):", label, result.rows.len());
    println!("{:>4} {:>4} {:>12} {:>10} {:>14} {:>12} {:>14} {:>12}",
        "Year", "Age", "Survival", "q", "E[Benefit]", "Premium", "PV Benefit", "PV Premium");
    println!("{}", "-".repeat(92));
    for row in &result.rows {
        println!("{:>4} {:>4} {:>12.8} {:>10.6} {:>14.2} {:>12.2} {:>14.2} {:>12.2}",
            row.year,
            row.attained_age,
            row.survival_probability,
            row.death_probability,
            row.expected_benefit,
            row.premium_due,
            row.pv_benefit,
            row.pv_premium,
        );
    }

    if let Some(path) = csv {
        export::write_year_rows_to_path(&path, &result.rows)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  PV Benefit: {}", format_currency(result.npv.pv_benefit));
    println!("  PV Premium: {}", format_currency(result.npv.pv_premium));
    println!("  NPV: {}", format_currency(result.npv.npv));
    println!("  Premium years waived: {}", summary.waived_years);
    println!("  Survival to end of horizon: {:.6}", summary.final_survival);
    Ok(())
}

fn run_implied_rate(config: &LabConfig, engine: &ProjectionEngine, low: f64, high: f64) -> Result<()> {
    let policies = [("Policy A", &config.policy_a), ("Policy B", &config.policy_b)];
    let rates: Vec<Option<f64>> = policies
        .par_iter()
        .map(|(_, policy)| implied_discount_rate(engine, &config.profile, policy, low, high))
        .collect();

    for ((label, _), rate) in policies.iter().zip(rates) {
        match rate {
            Some(rate) => println!("{} implied rate: {:.4}%", label, rate),
            None => println!("{} implied rate: none between {}% and {}%", label, low, high),
        }
    }
    Ok(())
}

fn run_submit(
    config: &LabConfig,
    engine: &ProjectionEngine,
    name: &str,
    id: &str,
    answers: Option<PathBuf>,
    out: PathBuf,
) -> Result<()> {
    let answers = match answers {
        Some(path) => Submission::load_answers(&path)?,
        None => vec![String::new(); 5],
    };

    let summary = ComparisonSummary::build(config, engine);
    let submission = Submission::new(name, id, summary.policy_a.result.npv, summary.policy_b.result.npv, answers)?;
    let path = submission
        .write_to(&out)
        .with_context(|| format!("Failed to write submission into {}", out.display()))?;

    info!("submission for {} written", name);
    println!("Submission written to: {}", path.display());
    println!("  Score summary: A utility {}, B utility {}",
        format_score(summary.policy_a.utility), format_score(summary.policy_b.utility));
    Ok(())
}

fn select_policy(config: &LabConfig, policy: PolicyArg) -> (&'static str, &PolicyConfig) {
    match policy {
        PolicyArg::A => ("Policy A", &config.policy_a),
        PolicyArg::B => ("Policy B", &config.policy_b),
    }
}

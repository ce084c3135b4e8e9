use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use plan_extractor::{PlanExtractor, PlanRecord, Settings};

#[derive(Parser)]
#[command(name = "plan_extractor", about = "Extract a mobile plan from a saved HTML page")]
struct Cli {
    /// HTML document to read (overrides the configured source_path)
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,

    /// Settings file (default: ./plan_extractor.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the plan as JSON
    Extract {
        #[arg(long)]
        pretty: bool,
    },
    /// Plan overview table
    Summary,
    /// One benefit per line
    Benefits,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(source) = cli.source {
        settings.source_path = source;
    }

    let extractor = PlanExtractor::from_settings(&settings)?;
    let source = extractor
        .source_path()
        .unwrap_or(settings.source_path.as_path())
        .display()
        .to_string();
    let plan = extractor
        .extract()
        .with_context(|| format!("Failed to extract plan from {}", source))?;

    match cli.command {
        Commands::Extract { pretty } => {
            let json = if pretty {
                serde_json::to_string_pretty(&plan)?
            } else {
                serde_json::to_string(&plan)?
            };
            println!("{}", json);
        }
        Commands::Summary => print_summary(&plan),
        Commands::Benefits => {
            for benefit in &plan.benefits {
                println!("{}", benefit);
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn print_summary(plan: &PlanRecord) {
    let dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());

    println!("{:<10} | {}", "Plan", truncate(&dash(&plan.name), 40));
    println!("{:<10} | {}", "Price", dash(&plan.price));
    println!("{:<10} | {}", "Internet", dash(&plan.internet));
    println!("{:<10} | {}", "Minutes", plan.minutes_label());
    println!("{}", "-".repeat(54));

    if plan.benefits.is_empty() {
        println!("No benefits listed.");
        return;
    }
    for (i, b) in plan.benefits.iter().enumerate() {
        println!("{:>3}. {}", i + 1, truncate(b, 48));
    }
    println!("\n{} benefits", plan.benefits.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

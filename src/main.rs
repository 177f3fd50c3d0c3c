//! Tagcheck CLI
//!
//! Checks element fixtures and prints a Tidy-style report per file.

use clap::{Parser, ValueEnum};
use colored::Colorize;
use glob::glob;
use std::path::PathBuf;
use tagcheck::output::{JsonFormatter, OutputFormatter, TextFormatter};
use tagcheck::{load_elements, Config, Engine};

#[derive(Parser)]
#[command(
    name = "tagcheck",
    version,
    about = "Tag-level attribute validation and repair",
    long_about = "Runs per-tag attribute checks over parsed HTML elements: required \
attributes, inferred defaults, version narrowing and accessibility flags."
)]
struct Cli {
    /// Element fixture files or glob patterns (YAML or JSON)
    files: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Fallback alt text inserted on images without one
    #[arg(long)]
    alt_text: Option<String>,

    /// Treat output as XML
    #[arg(long)]
    xml: bool,

    /// Accessibility check level (0 runs the classic checks)
    #[arg(long)]
    access_level: Option<u8>,

    /// Override a diagnostic's severity (e.g. MISSING_IMAGEMAP=error)
    #[arg(long, value_name = "CODE=LEVEL", value_delimiter = ',')]
    severity: Vec<String>,

    /// Include repaired elements in JSON output
    #[arg(long)]
    show_nodes: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// List tag rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn list_rules(engine: &Engine) {
    println!("{}", "Tag rules".bold());
    for (tag, rule) in engine.registry().rules() {
        println!("    {:<10} {} - {}", tag.name().cyan(), rule, rule.description());
    }
    println!();
    println!("    Other tags run the generic attribute check only.");
}

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let engine = Engine::new();

    if cli.list_rules {
        list_rules(&engine);
        return;
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        Config::load(config_path).unwrap_or_else(|e| {
            eprintln!("{}: Failed to load config: {}", "error".red().bold(), e);
            std::process::exit(1);
        })
    } else {
        Config::load_default().unwrap_or_else(|e| {
            log::warn!("ignoring default configuration: {}", e);
            Config::default()
        })
    };

    config.merge_cli(cli.alt_text.clone(), cli.xml.then_some(true), cli.access_level);
    for spec in &cli.severity {
        if let Err(e) = config.apply_severity_override(spec) {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }

    // Expand glob patterns
    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in &cli.files {
        match glob(pattern) {
            Ok(paths) => {
                for entry in paths.flatten() {
                    if entry.is_file() {
                        files.push(entry);
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "{}: Invalid pattern '{}': {}",
                    "error".red().bold(),
                    pattern,
                    e
                );
                std::process::exit(1);
            }
        }
    }

    if files.is_empty() {
        eprintln!("{}: No files found to check", "error".red().bold());
        std::process::exit(1);
    }

    if cli.verbose {
        eprintln!("Checking {} files...", files.len());
    }

    let formatter: Box<dyn OutputFormatter> = match cli.format {
        Format::Text => {
            let text = TextFormatter::new();
            if cli.no_color {
                Box::new(text.without_color())
            } else {
                Box::new(text)
            }
        }
        Format::Json => {
            let json = JsonFormatter::new().pretty();
            if cli.show_nodes {
                Box::new(json.with_nodes())
            } else {
                Box::new(json)
            }
        }
    };

    let mut exit_code = 0;
    for file in files {
        let nodes = match load_elements(&file) {
            Ok(nodes) => nodes,
            Err(e) => {
                eprintln!(
                    "{}: Failed to read {}: {}",
                    "error".red().bold(),
                    file.display(),
                    e
                );
                exit_code = 2;
                continue;
            }
        };

        let mut run = engine.run(&config, nodes);
        run.file = Some(file);

        if cli.verbose {
            eprintln!(
                "{}: {} element(s) in {:.2}ms",
                run.file.as_ref().map(|f| f.display().to_string()).unwrap_or_default(),
                run.nodes.len(),
                run.duration.as_secs_f64() * 1000.0
            );
        }

        println!("{}", formatter.format(&run));
        exit_code = exit_code.max(run.exit_code());
    }

    std::process::exit(exit_code);
}

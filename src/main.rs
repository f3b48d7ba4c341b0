use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use deal_scope::config::Config;
use deal_scope::output;
use deal_scope::reports::{self, SavedReport};
use deal_scope::scoring::ScoringConfig;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(Subcommand, Debug)]
enum IntakeKind {
    /// Describe a business you are evaluating
    Deal,
    /// Answer the buyer readiness questionnaire
    Assessment,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a deal file (valuation, price, owner dependence, cash flow)
    Score {
        /// Deal file (YAML, or JSON by extension)
        file: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Save the result to the report history
        #[arg(long)]
        save: bool,
    },
    /// Score buyer readiness and build a deal box from an assessment file
    Assess {
        /// Assessment file (YAML, or JSON by extension)
        file: PathBuf,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        save: bool,
    },
    /// Answer questions interactively and write an input file
    Intake {
        #[command(subcommand)]
        kind: IntakeKind,
        /// Write answers to this file instead of stdout
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,
    },
    /// Write a config file with the default scoring tables
    Init {
        /// Overwrite an existing config without asking
        #[arg(long)]
        force: bool,
    },
    /// List saved reports, newest first
    History {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "deal-scope")]
#[command(about = "Small business acquisition scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/deal-scope/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // init doesn't need a valid config, it writes one
    if let Commands::Init { force } = cli.command {
        let path = cli.config.unwrap_or_else(deal_scope::config::get_config_path);
        match deal_scope::config::write_default_config(&path, force) {
            Ok(true) => println!("Wrote default config to {}", path.display()),
            Ok(false) => println!("Kept existing config at {}", path.display()),
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match deal_scope::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = deal_scope::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let code = match cli.command {
        Commands::Score { file, json, save } => run_score(&file, json, save, &config, &scoring),
        Commands::Assess { file, json, save } => run_assess(&file, json, save, &config, &scoring),
        Commands::Intake { kind, output } => run_intake(kind, output),
        Commands::History { json } => run_history(json, &config),
        Commands::Init { .. } => EXIT_SUCCESS,
    };
    std::process::exit(code);
}

fn run_score(file: &Path, json: bool, save: bool, config: &Config, scoring: &ScoringConfig) -> i32 {
    let deal = match deal_scope::deal::load_deal(file) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    if let Err(errors) = deal_scope::deal::validate_deal_input(&deal) {
        eprintln!("Invalid deal in {}:", file.display());
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_INPUT;
    }

    let result = deal_scope::calculate_scores(&deal, scoring);

    if json {
        match output::to_json(&result) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                return EXIT_INPUT;
            }
        }
    } else {
        println!("{}", output::format_scorecard(&deal, &result, output::should_use_colors()));
    }

    if save || config.save_reports {
        let path = reports::reports_path_for(config);
        if reports::save_or_warn(&path, SavedReport::deal(&deal, &result)) && save {
            eprintln!("Saved report to {}", path.display());
        }
    }

    EXIT_SUCCESS
}

fn run_assess(file: &Path, json: bool, save: bool, config: &Config, scoring: &ScoringConfig) -> i32 {
    let data = match deal_scope::assessment::load_assessment(file) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    let readiness = deal_scope::calculate_readiness_score(&data);
    let deal_box = deal_scope::calculate_deal_box(&data, scoring);

    if json {
        let combined = serde_json::json!({
            "readiness": readiness,
            "deal_box": deal_box,
        });
        match output::to_json(&combined) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                return EXIT_INPUT;
            }
        }
    } else {
        let use_colors = output::should_use_colors();
        println!("{}", output::format_readiness(&readiness, use_colors));
        println!();
        println!("{}", output::format_deal_box(&deal_box, use_colors));
    }

    if save || config.save_reports {
        let path = reports::reports_path_for(config);
        let report = SavedReport::assessment(&data, &readiness, &deal_box);
        if reports::save_or_warn(&path, report) && save {
            eprintln!("Saved report to {}", path.display());
        }
    }

    EXIT_SUCCESS
}

fn run_intake(kind: IntakeKind, output: Option<PathBuf>) -> i32 {
    let result = match kind {
        IntakeKind::Deal => deal_scope::intake::run_deal_intake(output.as_deref()).map(|_| ()),
        IntakeKind::Assessment => {
            deal_scope::intake::run_assessment_intake(output.as_deref()).map(|_| ())
        }
    };

    match result {
        Ok(()) => {
            if let Some(path) = output {
                eprintln!("Wrote {}", path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Intake error: {:#}", e);
            EXIT_INPUT
        }
    }
}

fn run_history(json: bool, config: &Config) -> i32 {
    let path = reports::reports_path_for(config);
    let log = match reports::load_report_log(&path) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to read report history: {:#}", e);
            return EXIT_INPUT;
        }
    };

    let newest = log.newest_first();
    if json {
        match output::to_json(&newest) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                return EXIT_INPUT;
            }
        }
    } else {
        println!("{}", output::format_history(&newest, output::should_use_colors()));
    }

    EXIT_SUCCESS
}

//! Calculate the mass over charge of annotated peptide sequences from the command line

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use directories::ProjectDirs;
use log::LevelFilter;
use pepmz::{
    analysis::{
        Analyzer, CalculationResult, SequenceAnalysis, list_notation_examples,
        list_supported_modifications,
    },
    error::PeptideError,
    settings::Settings,
};
use pretty_env_logger::env_logger::DEFAULT_FILTER_ENV;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The annotated sequence, eg 'M[Oxidation]PEPTIDE/2'
    #[arg(required_unless_present_any = ["list_modifications", "list_names", "examples"])]
    sequence: Option<String>,
    /// The charge, a charge in the sequence takes precedence (defaults to the configured charge)
    #[arg(short, long, allow_negative_numbers = true)]
    charge: Option<isize>,
    /// The modification to place on the sequence, see --list-modifications
    #[arg(short, long)]
    modification: Option<String>,
    /// The settings file, defaults to 'settings.json' in the configuration directory
    #[arg(long)]
    config: Option<PathBuf>,
    /// A JSON file with custom modifications, overrides the one in the settings
    #[arg(long)]
    custom_modifications: Option<PathBuf>,
    /// Only analyse the sequence instead of calculating the m/z
    #[arg(short, long)]
    analyze: bool,
    /// Output the result as JSON
    #[arg(long)]
    json: bool,
    /// List the modifications that can be used with --modification
    #[arg(long)]
    list_modifications: bool,
    /// List all names that can be used for modifications inside the sequence
    #[arg(long)]
    list_names: bool,
    /// List examples of the supported notation
    #[arg(long)]
    examples: bool,
    /// Verbose output, see more with RUST_LOG=trace
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    if let Ok(filters) = std::env::var(DEFAULT_FILTER_ENV) {
        logger.parse_filters(&filters);
    }
    logger.init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<(), PeptideError<'static>> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(path) = &args.custom_modifications {
        settings.custom_modifications = Some(path.clone());
    }
    let database = settings.modification_database()?;
    let analyzer = Analyzer::new(&database, settings);

    if args.list_modifications {
        for preset in list_supported_modifications() {
            println!("{preset}");
        }
    }
    if args.list_names {
        for name in analyzer.list_modification_names() {
            println!("{name}");
        }
    }
    if args.examples {
        for (example, description) in list_notation_examples() {
            println!("{example:<55} {description}");
        }
    }
    let Some(sequence) = &args.sequence else {
        return Ok(());
    };

    if args.analyze {
        let analysis = analyzer.analyze_sequence(sequence);
        if args.json {
            print_json(&analysis);
        } else {
            print_analysis(&analysis);
        }
    } else {
        let result = analyzer.calculate_mz(
            sequence,
            args.charge
                .unwrap_or(analyzer.settings().default_charge),
            args.modification.as_deref(),
        )?;
        if args.json {
            print_json(&result);
        } else {
            print_result(&result);
        }
    }
    Ok(())
}

/// Use the given settings file, or the one in the configuration directory if it exists
fn load_settings(path: Option<&std::path::Path>) -> Result<Settings, PeptideError<'static>> {
    if let Some(path) = path {
        return Settings::from_file(path);
    }
    let default = ProjectDirs::from("org", "pepmz", "pepmz")
        .map(|dirs| dirs.config_dir().join("settings.json"))
        .filter(|path| path.exists());
    match default {
        Some(path) => Settings::from_file(&path),
        None => {
            log::debug!("No settings file found, using the default settings");
            Ok(Settings::default())
        }
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Could not serialize the result: {err}"),
    }
}

fn print_analysis(analysis: &SequenceAnalysis) {
    println!("Valid:          {}", analysis.is_valid);
    println!("Sequence:       {}", analysis.clean_sequence);
    println!(
        "Modification:   {}{}",
        analysis.modification,
        if analysis.modifications.len() > 1 {
            format!(" ({})", analysis.modifications.join(", "))
        } else {
            String::new()
        }
    );
    println!("Charge:         {} ({})", analysis.charge, analysis.charge_source);
    if let Some(message) = &analysis.error_message {
        println!("Error:          {message}");
    }
}

fn print_result(result: &CalculationResult) {
    println!("Sequence:       {}", result.modified_sequence);
    println!("m/z:            {:.6}", result.mz_ratio);
    println!("Mass:           {:.6} Da", result.monoisotopic_mass);
    println!("Charge:         {} ({})", result.charge_state, result.charge_source);
    println!("Formula:        {}", result.molecular_formula);
    println!("Length:         {}", result.sequence_length);
    println!("Modification:   {}", result.modification);
    println!(
        "Composition:    {}",
        result
            .aa_composition
            .iter()
            .map(|(aa, count)| format!("{aa}{count}"))
            .collect::<Vec<_>>()
            .join(" ")
    );
}

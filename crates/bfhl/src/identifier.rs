use crate::prelude::{eprintln, println, *};
use bfhl_core::identifier::{
    format_full_name_identifier, format_identifier, is_valid_identifier, parse_identifier,
    Identifier, ParsedIdentifier,
};
use chrono::NaiveDate;
use colored::Colorize;

const DEFAULT_NAME: &str = "John Doe";

#[derive(Debug, clap::Parser)]
#[command(name = "id")]
#[command(about = "Generate, validate and parse name_DDMMYYYY identifiers")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Build an identifier from a name and a date
    #[clap(name = "generate")]
    Generate(GenerateOptions),

    /// Check whether a string is a well-formed identifier
    #[clap(name = "validate")]
    Validate(ValidateOptions),

    /// Split an identifier into its name and date
    #[clap(name = "parse")]
    Parse(ParseOptions),
}

#[derive(Debug, clap::Args)]
pub struct GenerateOptions {
    /// Full name, e.g. "John Doe" (defaults to "John Doe")
    #[arg(long, conflicts_with = "first")]
    pub name: Option<String>,

    /// First name, used together with --last
    #[arg(long, requires = "last")]
    pub first: Option<String>,

    /// Last name, used together with --first
    #[arg(long, requires = "first")]
    pub last: Option<String>,

    /// Date as YYYY-MM-DD (defaults to today's local date)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, clap::Args)]
pub struct ValidateOptions {
    /// Candidate identifier
    pub candidate: String,
}

#[derive(Debug, clap::Args)]
pub struct ParseOptions {
    /// Identifier to parse
    pub candidate: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {value:?}: {e}"))
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Generate(options) => {
            let today = chrono::Local::now().date_naive();
            let id = generate(&options, today)?;
            if global.verbose {
                eprintln!("Generated identifier for {}", options.date.unwrap_or(today));
            }
            println!("{id}");
            Ok(())
        }
        Commands::Validate(options) => validate(&options),
        Commands::Parse(options) => parse(&options),
    }
}

fn generate(options: &GenerateOptions, today: NaiveDate) -> Result<Identifier> {
    let date = options.date.unwrap_or(today);

    let id = match (&options.first, &options.last) {
        (Some(first), Some(last)) => format_full_name_identifier(first, last, date),
        _ => format_identifier(options.name.as_deref().unwrap_or(DEFAULT_NAME), date),
    };

    id.map_err(|e| eyre!("Failed to generate identifier: {e}"))
}

fn validate(options: &ValidateOptions) -> Result<()> {
    if is_valid_identifier(&options.candidate) {
        println!("{} {}", "valid".green(), options.candidate);
        Ok(())
    } else {
        println!("{} {}", "invalid".red(), options.candidate);
        Err(eyre!("{:?} is not a valid identifier", options.candidate))
    }
}

fn parse(options: &ParseOptions) -> Result<()> {
    let parsed = parse_identifier(&options.candidate).map_err(|e| eyre!("{e}"))?;

    if options.json {
        println!("{}", format_json(&parsed)?);
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row!["Name".bold(), parsed.name]);
        table.add_row(prettytable::row![
            "Date".bold(),
            parsed.date.format("%Y-%m-%d")
        ]);
        table.printstd();
    }

    Ok(())
}

fn format_json(parsed: &ParsedIdentifier) -> Result<String> {
    serde_json::to_string_pretty(parsed).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

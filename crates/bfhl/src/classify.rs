use crate::prelude::{eprintln, println, *};
use bfhl_core::classify::{classify, ClassificationResult};
use colored::Colorize;

#[derive(Debug, clap::Args)]
pub struct ClassifyOptions {
    /// Tokens to classify (use `--` before tokens that start with a dash)
    #[arg(value_name = "TOKEN", allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Classifying {} tokens...", options.tokens.len());
    }

    let result = classify(&options.tokens).map_err(|e| eyre!("{e}"))?;

    if options.json {
        println!("{}", format_json(&result)?);
    } else {
        output_formatted(&result);
    }

    Ok(())
}

fn format_json(result: &ClassificationResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn join(tokens: &[String]) -> String {
    if tokens.is_empty() {
        "-".dimmed().to_string()
    } else {
        tokens.join(", ")
    }
}

fn output_formatted(result: &ClassificationResult) {
    let mut table = new_table();

    table.add_row(prettytable::row!["Odd numbers".bold(), join(&result.odd_numbers)]);
    table.add_row(prettytable::row!["Even numbers".bold(), join(&result.even_numbers)]);
    table.add_row(prettytable::row!["Alphabets".bold(), join(&result.alphabets)]);
    table.add_row(prettytable::row![
        "Special characters".bold(),
        join(&result.special_characters)
    ]);
    table.add_row(prettytable::row!["Sum".bold(), result.sum.green()]);
    table.add_row(prettytable::row!["Concat string".bold(), result.concat_string.cyan()]);

    table.printstd();
}

//! Quantis CLI
//!
//! Main entry point for the `quantis` command.

use clap::{Parser, Subcommand};
use miette::{NamedSource, Report, Result};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use quantis::config::{UnitsConfig, is_valid_unit_name};
use quantis::eval::{Evaluator, SymbolTable};
use quantis::units::{DynQuantity, Prefix, UnitDef};

#[derive(Parser)]
#[command(name = "quantis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate unit formulas and convert between units of measure")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: nearest quantis.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a unit formula such as "kg / m^3"
    Eval {
        #[arg(value_name = "FORMULA")]
        formula: String,

        /// Bind an extra unit for this formula (repeatable)
        #[arg(short = 'D', long = "define", value_name = "NAME=FORMULA", value_parser = parse_definition)]
        definitions: Vec<(String, String)>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert a value from one unit to another
    Convert {
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: f64,

        #[arg(value_name = "FROM")]
        from: String,

        #[arg(value_name = "TO")]
        to: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check whether two units measure the same kind of dimension
    Compatible {
        #[arg(value_name = "A")]
        a: String,

        #[arg(value_name = "B")]
        b: String,
    },

    /// List every known unit name and metric prefix
    Units {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_definition(arg: &str) -> Result<(String, String), String> {
    let (name, formula) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=FORMULA, found `{}`", arg))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("definition name is empty".to_string());
    }
    if !is_valid_unit_name(name) {
        return Err(format!(
            "`{}` is not a valid unit name (use ASCII letters and underscores)",
            name
        ));
    }
    Ok((name.to_string(), formula.trim().to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("quantis=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;
    let table = config.symbol_table()?;

    match cli.command {
        Commands::Eval {
            formula,
            definitions,
            json,
        } => eval(&table, &config, &formula, &definitions, json),
        Commands::Convert {
            value,
            from,
            to,
            json,
        } => convert(&table, &config, value, &from, &to, json),
        Commands::Compatible { a, b } => compatible(&table, &a, &b),
        Commands::Units { json } => list_units(&table, json),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<UnitsConfig> {
    if let Some(path) = explicit {
        return Ok(UnitsConfig::from_file(path)?);
    }
    let found = std::env::current_dir()
        .ok()
        .and_then(|dir| UnitsConfig::find_config(&dir));
    match found {
        Some(path) => {
            tracing::info!("Using configuration {}", path.display());
            Ok(UnitsConfig::from_file(&path)?)
        }
        None => Ok(UnitsConfig::default()),
    }
}

/// Evaluate `formula`, attaching it as source code to any error
fn evaluate(evaluator: &Evaluator<'_>, label: &str, formula: &str) -> Result<UnitDef> {
    evaluator.eval_unit(formula).map_err(|err| {
        Report::new(err).with_source_code(NamedSource::new(label, formula.to_string()))
    })
}

fn eval(
    table: &SymbolTable,
    config: &UnitsConfig,
    formula: &str,
    definitions: &[(String, String)],
    json: bool,
) -> Result<()> {
    let mut evaluator = Evaluator::new(table);
    for (name, definition) in definitions {
        let unit = evaluate(&evaluator, name, definition)?;
        evaluator.define(name, unit);
    }
    let unit = evaluate(&evaluator, "formula", formula)?;

    if json {
        let output = json!({
            "formula": formula,
            "unit": unit,
            "si": unit.dimension.si_symbol(),
            "quantity": unit.dimension.name(),
        });
        return print_json(&output);
    }

    println!("{}", formula);
    println!("  factor     {}", format_value(unit.factor, config.precision));
    match unit.dimension.name() {
        Some(name) => println!("  dimension  {} ({})", unit.dimension, name),
        None => println!("  dimension  {}", unit.dimension),
    }
    println!("  SI unit    {}", unit.dimension.si_symbol());
    Ok(())
}

fn convert(
    table: &SymbolTable,
    config: &UnitsConfig,
    value: f64,
    from: &str,
    to: &str,
    json: bool,
) -> Result<()> {
    let evaluator = Evaluator::new(table);
    let source = evaluate(&evaluator, "from", from)?;
    let target = evaluate(&evaluator, "to", to)?;
    let result = DynQuantity::new(value, source).convert_to_value(target)?;

    if json {
        let output = json!({
            "value": value,
            "from": from,
            "to": to,
            "result": result,
        });
        return print_json(&output);
    }

    println!(
        "{} {} = {} {}",
        format_value(value, config.precision),
        from,
        format_value(result, config.precision),
        to
    );
    Ok(())
}

fn compatible(table: &SymbolTable, a: &str, b: &str) -> Result<()> {
    let evaluator = Evaluator::new(table);
    let left = evaluate(&evaluator, "a", a)?;
    let right = evaluate(&evaluator, "b", b)?;

    if left.is_compatible(&right) {
        println!("compatible: both measure {}", left.dimension);
    } else {
        println!(
            "incompatible: `{}` measures {}, `{}` measures {}",
            a, left.dimension, b, right.dimension
        );
    }
    Ok(())
}

fn list_units(table: &SymbolTable, json: bool) -> Result<()> {
    let entries = table.entries();

    if json {
        let units: Vec<_> = entries
            .iter()
            .map(|(name, unit)| json!({ "name": name, "unit": unit }))
            .collect();
        let prefixes: Vec<_> = Prefix::ALL
            .iter()
            .map(|p| json!({ "symbol": p.symbol(), "name": p.name(), "multiplier": p.multiplier() }))
            .collect();
        return print_json(&json!({ "units": units, "prefixes": prefixes }));
    }

    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, unit) in entries {
        println!("{:<width$}  {}", name, unit, width = width);
    }
    println!();
    for prefix in Prefix::ALL {
        println!("{}  {:<6} {:e}", prefix.symbol(), prefix.name(), prefix.multiplier());
    }
    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?;
    println!("{}", text);
    Ok(())
}

/// Render `value` with `precision` significant digits, trailing zeros dropped
fn format_value(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() || precision == 0 {
        return value.to_string();
    }
    let magnitude = value.abs().log10().floor() as i64;
    let decimals = precision as i64 - 1 - magnitude;
    if !(0..=17).contains(&decimals) {
        return format!("{:.*e}", precision - 1, value);
    }
    let text = format!("{:.*}", decimals as usize, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_definition() {
        assert_eq!(
            parse_definition("slug = 32.174_049 * lb"),
            Ok(("slug".to_string(), "32.174_049 * lb".to_string()))
        );
        assert!(parse_definition("slug").is_err());
        assert!(parse_definition("=m").is_err());
        assert!(parse_definition("my unit=m").is_err());
        assert!(parse_definition("slug2=lb").is_err());
        assert_eq!(
            parse_definition(" my_slug =lb"),
            Ok(("my_slug".to_string(), "lb".to_string()))
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(4.448_221_615_260_5, 10), "4.448221615");
        assert_eq!(format_value(1000.0, 10), "1000");
        assert_eq!(format_value(0.5, 3), "0.5");
        assert_eq!(format_value(0.0, 10), "0");
        assert_eq!(format_value(-40.0, 4), "-40");
        assert_eq!(format_value(6.02e23, 3), "6.02e23");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["quantis", "convert", "-40", "K", "K"]).unwrap();
        assert!(matches!(cli.command, Commands::Convert { value, .. } if value == -40.0));

        let cli =
            Cli::try_parse_from(["quantis", "eval", "ft*slug/s^2", "-D", "slug=32.174049*lb"])
                .unwrap();
        let Commands::Eval { definitions, .. } = cli.command else {
            panic!("expected eval command");
        };
        assert_eq!(definitions[0].0, "slug");
    }
}

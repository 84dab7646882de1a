use clap::{Parser as ClapParser, Subcommand};
use hyperchunks::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};
use tracing_subscriber::filter::LevelFilter;

#[derive(ClapParser)]
#[command(name = "hyperchunks")]
#[command(about = "Hyperchunks - parse and inspect selectors for chunked multi-attribute arrays")]
#[command(version)]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        env = "HYPERCHUNKS_LOG",
        default_value = "warn",
        value_parser = parse_log_level
    )]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a selector and print its AST as JSON
    Check {
        /// The selector (reads from stdin if not provided)
        selector: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't print the AST
        #[arg(long)]
        syntax_only: bool,
    },

    /// Parse a selector and print it in canonical form
    Format {
        /// The selector (reads from stdin if not provided)
        selector: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'hyperchunks docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let result = match cli.command {
        Commands::Check {
            selector,
            pretty,
            syntax_only,
        } => run_check(selector, pretty, syntax_only),
        Commands::Format { selector } => run_format(selector),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| "expected one of off, error, warn, info, debug, trace".to_string())
}

fn init_logging(filter: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_selector(selector: Option<String>) -> Result<String, CliError> {
    match selector {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(selector: Option<String>, pretty: bool, syntax_only: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        selector: read_selector(selector)?,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_format(selector: Option<String>) -> Result<(), CliError> {
    let selector = read_selector(selector)?;
    println!("{}", cli::execute_format(&selector)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::try_parse_from(["hyperchunks", "--log-level", "debug", "docs"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::DEBUG);

        let cli = Cli::try_parse_from(["hyperchunks", "docs", "--log-level", "OFF"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::OFF);
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let err = Cli::try_parse_from(["hyperchunks", "--log-level", "loud", "docs"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}

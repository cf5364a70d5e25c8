use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use future_value_tools::commands;
use future_value_tools::finance::MoneyStyle;
use future_value_tools::utils::format::{DEFAULT_PRECISION, DEFAULT_SYMBOL, TABLE_SYMBOL};

#[derive(Parser)]
#[command(name = "future-value")]
#[command(about = "Compound future value calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for the inputs on the console and print the breakdown (default)
    Interactive,

    /// Calculate once from flags and optionally export the breakdown
    Calculate {
        /// Starting balance of the account
        #[arg(long, allow_negative_numbers = true)]
        present_value: f64,

        /// Monthly interest rate as a fraction (0.01 = 1%)
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,

        /// Number of months the money stays in the account
        #[arg(long, allow_negative_numbers = true)]
        months: i64,

        /// Currency symbol placed before the headline amounts
        #[arg(long, default_value = DEFAULT_SYMBOL)]
        symbol: String,

        /// Currency symbol placed after the table amounts
        #[arg(long, default_value = TABLE_SYMBOL)]
        table_symbol: String,

        /// Decimal places for every amount
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,

        /// Export the breakdown to this file
        #[arg(short, long)]
        output: Option<String>,

        /// Export format: csv or json (auto-detected from file extension if not specified)
        #[arg(long, value_parser = ["csv", "json"])]
        format: Option<String>,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => commands::interactive::run(MoneyStyle::default()),
        Commands::Calculate {
            present_value,
            rate,
            months,
            symbol,
            table_symbol,
            precision,
            output,
            format,
        } => commands::calculate::run(
            present_value,
            rate,
            months,
            MoneyStyle {
                precision,
                headline_symbol: symbol,
                table_symbol,
            },
            output.as_deref(),
            format.as_deref(),
        ),
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "future-value", &mut std::io::stdout());
            Ok(())
        }
    }
}

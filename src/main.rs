use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(
    name = "exchange1031",
    version,
    about = "Calculate 1031 like-kind exchange deadlines, boot and deferred tax"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full analysis of an exchange
    Analyze(cmd::analyze::AnalyzeCommand),
    /// Compare candidate replacement properties
    Compare(cmd::compare::CompareCommand),
    /// Show the 45-day and 180-day deadlines for a sale
    Timeline(cmd::timeline::TimelineCommand),
    /// Check candidates against the identification rules
    Validate(cmd::validate::ValidateCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(command) => command.exec(),
        Command::Compare(command) => command.exec(),
        Command::Timeline(command) => command.exec(),
        Command::Validate(command) => command.exec(),
        Command::Schema(command) => command.exec(),
    }
}

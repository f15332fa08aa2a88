mod aggregate;
mod anomaly;
mod backup;
mod classifier;
mod cli;
mod db;
mod error;
mod fmt;
mod forecast;
mod models;
mod settings;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            amount,
            date,
            category,
            description,
        } => cli::add::run(amount, date, category, description),
        Commands::Suggest { description } => cli::suggest::run(&description),
        Commands::List { from, to, limit } => cli::list::run(from, to, limit),
        Commands::Delete { id } => cli::delete::run(id),
        Commands::Report { command } => cli::report::dispatch(command),
        Commands::Export { from, to, output } => cli::export::run(from, to, output),
        Commands::Backup { output } => cli::backup::run(output),
        Commands::Restore { file, yes } => cli::restore::run(&file, yes),
        Commands::Status => cli::status::run(),
        Commands::Demo => cli::demo::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "outlay", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

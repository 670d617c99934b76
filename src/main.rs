use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Show { json, reveal } => {
            passvault::cli::commands::show::execute(&cli, json, reveal)
        }
        Commands::Add {
            ref name,
            ref fields,
        } => passvault::cli::commands::add::execute(&cli, name, fields),
        Commands::Update {
            ref name,
            ref fields,
        } => passvault::cli::commands::update::execute(&cli, name, fields),
        Commands::Delete { ref name, force } => {
            passvault::cli::commands::delete::execute(&cli, name, force)
        }
        Commands::Completions { ref shell } => {
            passvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

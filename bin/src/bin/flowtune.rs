use clap::Parser;
use flowtune_bin::{
    cli::{Cli, Command},
    commands,
};

fn main() {
    let cli = Cli::parse();

    let _log_guard = flowtune_log::init(cli.log_file.clone()).unwrap_or_else(|e| {
        eprintln!("Error: failed to initialize logging: {e}");
        std::process::exit(1);
    });

    let result = match &cli.command {
        Command::Apply { input, output, ops } => commands::apply::run(input, output, ops),
        Command::Edit { input, output } => commands::edit::run(input, output),
        Command::Stats { input } => commands::stats::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

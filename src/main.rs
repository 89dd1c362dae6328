use clap::Parser;
use tend::cli::commands::Cli;
use tend::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = tend::tui::run(data_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

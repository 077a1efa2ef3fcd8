use clap::Parser;
use linestamp::app::{handle_fatal_error, init_logging, AppConfig};
use linestamp::cli::{execute_command, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let app = match AppConfig::new(cli.verbose) {
        Ok(config) => config.with_quiet(cli.quiet),
        Err(e) => handle_fatal_error(e.into(), cli.verbose),
    };
    init_logging(&app);

    if let Err(e) = execute_command(cli.command, &app).await {
        handle_fatal_error(e, cli.verbose);
    }
}

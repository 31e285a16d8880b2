// homeinv entry point

use anyhow::Result;
use clap::Parser;
use homeinv_cli::{
    app::{config_manager, load_config},
    commands, logging,
    output::{self, OutputStyle},
    App, Cli, Command,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let manager = config_manager(cli.config);
    let config = load_config(&manager, cli.base_url.as_deref())?;
    logging::init_logging(&config.logging.level, cli.verbose);

    let style = OutputStyle::default();
    let mut stdout = std::io::stdout();

    match cli.command {
        Command::Config { action } => commands::config(&manager, &config, action, &style, &mut stdout),
        command => {
            let app = App::new(&config)?;
            commands::execute(&app, command, &style, &mut stdout).await
        }
    }
}

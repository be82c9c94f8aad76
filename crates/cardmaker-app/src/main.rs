use std::process::ExitCode;

use cardmaker_config::Config;
use clap::Parser;

mod cli;
mod commands;
mod generate;
mod logging;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command, GenerateMode};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_format);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Makedb(args) => {
            args.apply(&mut config);
            commands::make_db(&args, &config).await
        }
        Command::Generate(args) => {
            args.apply(&mut config);
            match args.mode {
                GenerateMode::Sound(_) => commands::generate_sound(&config).await,
                GenerateMode::Definition => commands::generate_definition(&config).await,
                GenerateMode::Anki(_) => commands::generate_anki(&config).await,
            }
        }
    }
}

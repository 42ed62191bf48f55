//! `usercli` — administrative user management against the Baaham store.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use baaham_db::Database;
use baaham_db::repository::SurrealUserRepository;
use baaham_server::{AppConfig, telemetry};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::{CliContext, prompt_new_password};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    telemetry::init_cli();

    let db = Database::open(&config.database)
        .await
        .context("opening SurrealDB")?;

    let ctx = CliContext::new(
        SurrealUserRepository::new(db.into_client()),
        config.hasher()?,
    );
    let mut out = std::io::stdout().lock();

    match cli.command {
        Command::Create {
            username,
            admin,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };
            ctx.create(&mut out, &username, &password, admin).await?;
        }
        Command::List => ctx.list(&mut out).await?,
        Command::ChangePassword { username, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_new_password()?,
            };
            ctx.change_password(&mut out, &username, &password).await?;
        }
        Command::Delete { username } => ctx.delete(&mut out, &username).await?,
    }

    Ok(())
}

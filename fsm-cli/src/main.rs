//! fsm - Field-Service-Management CLI
//!
//! A command-line client for the field-service dashboard backend:
//! session management (login/logout/restore) plus the resource
//! endpoints (tickets, customers, zones, attendance, bank accounts).
//!
//! # Examples
//!
//! ```bash
//! # Log in and persist the session
//! fsm auth login --email admin@acme.example --password secret --remember-me
//!
//! # List open tickets in zone 4
//! fsm ticket list --status open --zone-id 4 --pretty
//!
//! # Approve a bank account
//! fsm bank-account approve 17
//! ```

mod attendance_commands;
mod auth_commands;
mod bank_account_commands;
mod cli;
mod commands;
mod customer_commands;
mod error;
mod logger;
mod ticket_commands;
mod zone_commands;

use crate::{
    attendance_commands::AttendanceCommands, auth_commands::AuthCommands,
    bank_account_commands::BankAccountCommands, cli::Cli, commands::Commands,
    customer_commands::CustomerCommands, error::CliError, error::Result as CliResult,
    ticket_commands::TicketCommands, zone_commands::ZoneCommands,
};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use fsm_client::Client;
use fsm_config::Config;
use fsm_core::Credentials;
use fsm_session::store::DevTokenSource;
use fsm_session::{AuthApi, FileStore, SessionManager, Vault};
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    logger::initialize(config.logging.level, true)?;

    let data_dir = config.storage.resolve_data_dir()?;
    let primary = FileStore::open(data_dir.join("session.json"))?;
    let mirror = FileStore::open(data_dir.join("session.mirror.json"))?;

    let mut vault = Vault::new(Arc::new(primary)).with_mirror(Arc::new(mirror));
    if config.storage.dev_token_source {
        vault = vault.with_dev_source(DevTokenSource::from_env());
    }

    let client = Arc::new(Client::with_request_timeout(
        &config.api.base_url,
        std::time::Duration::from_secs(config.api.request_timeout_secs),
    )?);
    let manager = SessionManager::new(client.clone() as Arc<dyn AuthApi>, vault, &config.session);

    match cli.command {
        Commands::Auth { action } => run_auth(action, &manager).await,

        Commands::Ticket { action } => {
            authenticate(&manager, &client).await?;
            let value = match action {
                TicketCommands::List { status, zone_id } => {
                    client.list_tickets(status.as_deref(), zone_id).await?
                }
                TicketCommands::Get { id } => client.get_ticket(id).await?,
                TicketCommands::Create {
                    title,
                    description,
                    customer_id,
                    zone_id,
                } => {
                    client
                        .create_ticket(&title, description.as_deref(), customer_id, zone_id)
                        .await?
                }
                TicketCommands::Update {
                    id,
                    title,
                    description,
                    status,
                    assignee_id,
                } => {
                    client
                        .update_ticket(
                            id,
                            title.as_deref(),
                            description.as_deref(),
                            status.as_deref(),
                            assignee_id,
                        )
                        .await?
                }
                TicketCommands::Delete { id } => client.delete_ticket(id).await?,
            };
            Ok(value)
        }

        Commands::Customer { action } => {
            authenticate(&manager, &client).await?;
            let value = match action {
                CustomerCommands::List => client.list_customers().await?,
                CustomerCommands::Get { id } => client.get_customer(id).await?,
                CustomerCommands::Create {
                    name,
                    email,
                    zone_id,
                } => {
                    client
                        .create_customer(&name, email.as_deref(), zone_id)
                        .await?
                }
                CustomerCommands::Update {
                    id,
                    name,
                    email,
                    is_active,
                } => {
                    client
                        .update_customer(id, name.as_deref(), email.as_deref(), is_active)
                        .await?
                }
            };
            Ok(value)
        }

        Commands::Zone { action } => {
            authenticate(&manager, &client).await?;
            let value = match action {
                ZoneCommands::List => client.list_zones().await?,
                ZoneCommands::Get { id } => client.get_zone(id).await?,
                ZoneCommands::Create { name, region } => {
                    client.create_zone(&name, region.as_deref()).await?
                }
                ZoneCommands::Update { id, name, region } => {
                    client
                        .update_zone(id, name.as_deref(), region.as_deref())
                        .await?
                }
                ZoneCommands::CreateUser {
                    email,
                    name,
                    zone_ids,
                } => client.create_zone_user(&email, &name, &zone_ids).await?,
            };
            Ok(value)
        }

        Commands::Attendance { action } => {
            authenticate(&manager, &client).await?;
            let value = match action {
                AttendanceCommands::Records { user_id } => client.list_attendance(user_id).await?,
                AttendanceCommands::CheckIn {
                    latitude,
                    longitude,
                } => client.attendance_check_in(latitude, longitude).await?,
                AttendanceCommands::CheckOut => client.attendance_check_out().await?,
            };
            Ok(value)
        }

        Commands::BankAccount { action } => {
            authenticate(&manager, &client).await?;
            let value = match action {
                BankAccountCommands::List => client.list_bank_accounts().await?,
                BankAccountCommands::Get { id } => client.get_bank_account(id).await?,
                BankAccountCommands::Approve { id } => client.approve_bank_account(id).await?,
                BankAccountCommands::Reject { id, reason } => {
                    client.reject_bank_account(id, &reason).await?
                }
            };
            Ok(value)
        }

        Commands::Reports => {
            authenticate(&manager, &client).await?;
            Ok(client.list_service_person_reports().await?)
        }
    }
}

async fn run_auth(action: AuthCommands, manager: &SessionManager) -> CliResult<Value> {
    match action {
        AuthCommands::Login {
            email,
            password,
            remember_me,
        } => {
            let credentials = Credentials::new(email, password);
            let (session, route) = manager.login(&credentials, remember_me).await?;

            Ok(json!({
                "user": session.user,
                "redirectTo": route,
                "expiresAt": session.tokens.expires_at,
            }))
        }

        AuthCommands::Logout => {
            manager.logout().await?;

            Ok(json!({ "loggedOut": true }))
        }

        AuthCommands::Whoami => {
            let state = manager.restore("/whoami").await;

            match state.user() {
                Some(user) => Ok(json!({ "user": user })),
                None => Err(CliError::NotAuthenticated),
            }
        }

        AuthCommands::Status => {
            // Storage-only view; no network call.
            let tokens = manager.vault().load_tokens()?;
            let cached = manager.vault().cached_profile()?;

            Ok(json!({
                "hasToken": tokens.is_some(),
                "expiresAt": tokens.map(|t| t.expires_at),
                "cachedUser": cached,
            }))
        }
    }
}

/// Restore the persisted session and attach its token to the client.
async fn authenticate(manager: &SessionManager, client: &Client) -> CliResult<()> {
    let state = manager.restore("/cli").await;

    match state.session() {
        Some(session) => {
            client.set_access_token(Some(session.tokens.access_token.clone()));
            Ok(())
        }
        None => Err(CliError::NotAuthenticated),
    }
}

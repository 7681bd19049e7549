//! Storefront Admin
//!
//! Command line front end for the admin REST API

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, error};

use storefront_admin::{
    config::Settings,
    models::{Article, Banner, EntityKind, Faq, ManagedEntity, PromotionalBanner, Role, User},
    services::{LoggingNavigator, ServiceFactory},
    state::{open_edit_page, open_list_page, EditPage},
    utils::{errors::AdminError, logging},
};

/// Exit code used when the requested entity does not exist
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "storefront-admin", version, about = "Manage storefront users, roles and website content")]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the admin API base URL (environment: STOREFRONT_ADMIN__API__BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an entity from a JSON form file
    Create {
        kind: EntityKind,
        #[arg(long)]
        file: PathBuf,
        /// Go back to the list page after a successful save
        #[arg(long)]
        exit: bool,
    },
    /// Update an entity from a JSON form file
    Update {
        kind: EntityKind,
        id: String,
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        exit: bool,
    },
    /// Show the editable fields of one entity
    Show { kind: EntityKind, id: String },
    /// List a collection
    List { kind: EntityKind },
    /// Delete an entity
    Delete { kind: EntityKind, id: String },
    /// Print the effective configuration
    Config,
}

/// Run a generic function for the entity type behind a kind
macro_rules! for_entity {
    ($kind:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $kind {
            EntityKind::User => $func::<User>($($arg),*).await,
            EntityKind::Role => $func::<Role>($($arg),*).await,
            EntityKind::Banner => $func::<Banner>($($arg),*).await,
            EntityKind::PromotionalBanner => $func::<PromotionalBanner>($($arg),*).await,
            EntityKind::Article => $func::<Article>($($arg),*).await,
            EntityKind::Faq => $func::<Faq>($($arg),*).await,
        }
    };
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Settings::new().context("failed to load configuration")?,
    };
    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!(base_url = %settings.api.base_url, "{}", storefront_admin::info());

    let services = ServiceFactory::new(settings, LoggingNavigator)?;

    let code = match cli.command {
        Command::Create { kind, file, exit } => {
            for_entity!(kind, run_save(&services, None, &file, exit))?
        }
        Command::Update { kind, id, file, exit } => {
            for_entity!(kind, run_save(&services, Some(id.as_str()), &file, exit))?
        }
        Command::Show { kind, id } => for_entity!(kind, run_show(&services, &id))?,
        Command::List { kind } => for_entity!(kind, run_list(&services))?,
        Command::Delete { kind, id } => for_entity!(kind, run_delete(&services, &id))?,
        Command::Config => {
            println!("{}", services.settings.to_toml()?);
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

/// Submit a form file as a create (no id) or update
async fn run_save<E: ManagedEntity>(
    services: &ServiceFactory<LoggingNavigator>,
    id: Option<&str>,
    file: &Path,
    exit_after_save: bool,
) -> anyhow::Result<ExitCode> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read form file {}", file.display()))?;
    let form: E::FormData = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid {} form", file.display(), E::KIND))?;

    let result = match id {
        Some(id) => services.controller.update::<E>(id, &form, exit_after_save).await,
        None => services.controller.create::<E>(&form, exit_after_save).await,
    };

    match result {
        Ok(submitted) => {
            println!("{}", submitted.notification);
            println!("id: {}", submitted.entity.id());
            if let Some(route) = submitted.navigated_to {
                println!("-> {}", route);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{}", failure.notification);
            error!(error = %failure.source, "Save failed");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_show<E: ManagedEntity>(
    services: &ServiceFactory<LoggingNavigator>,
    id: &str,
) -> anyhow::Result<ExitCode> {
    match open_edit_page::<E>(&services.api_client, id).await? {
        EditPage::Ready(session) => {
            println!("id: {}", session.id().unwrap_or(id));
            println!("{}", serde_json::to_string_pretty(session.data())?);
            Ok(ExitCode::SUCCESS)
        }
        EditPage::NotFound { entity, id } => {
            eprintln!("{} {} not found", entity, id);
            Ok(ExitCode::from(EXIT_NOT_FOUND))
        }
    }
}

async fn run_list<E: ManagedEntity>(
    services: &ServiceFactory<LoggingNavigator>,
) -> anyhow::Result<ExitCode> {
    let entities = open_list_page::<E>(&services.api_client).await?;
    for entity in &entities {
        println!("{}\t{}", entity.id(), entity.label());
    }
    info!(entity = %E::KIND, count = entities.len(), "Listed entities");
    Ok(ExitCode::SUCCESS)
}

async fn run_delete<E: ManagedEntity>(
    services: &ServiceFactory<LoggingNavigator>,
    id: &str,
) -> anyhow::Result<ExitCode> {
    match services.api_client.delete::<E>(id).await {
        Ok(()) => {
            println!("{} {} deleted", E::KIND, id);
            Ok(ExitCode::SUCCESS)
        }
        Err(AdminError::NotFound { entity, id }) => {
            eprintln!("{} {} not found", entity, id);
            Ok(ExitCode::from(EXIT_NOT_FOUND))
        }
        Err(e) => Err(e.into()),
    }
}

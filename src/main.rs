//! rbac-admin: operator tool for the capability store
//!
//! Runs migrations, seeds the built-in catalog and inspects or resets the
//! capability overrides of one organization.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tenant_rbac::storage::AccessStores;
use tenant_rbac::storage::database::Database;
use tenant_rbac::utils::logging::init_logging;
use tenant_rbac::{ActorClaims, Config, RbacSystem, Role};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "rbac-admin", version, about = "Manage role capability overrides")]
struct Cli {
    /// YAML configuration file; environment variables alone are used when omitted
    #[arg(short, long, env = "RBAC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate,
    /// Insert missing built-in capabilities
    Seed,
    /// Show the effective capabilities of a role
    Preview {
        #[arg(long)]
        org: Uuid,
        #[arg(long)]
        role: Role,
    },
    /// Show whether the organization's plan allows customization
    Tier {
        #[arg(long)]
        org: Uuid,
    },
    /// Remove every override for a role, acting as the given organization member
    Reset {
        #[arg(long)]
        org: Uuid,
        #[arg(long)]
        role: Role,
        /// User ID of the organization owner performing the reset
        #[arg(long)]
        actor: Uuid,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env().context("loading configuration from environment")?,
    };
    init_logging(config.logging())?;

    let database = Arc::new(
        Database::new(&config.storage().database)
            .await
            .context("connecting to the database")?,
    );

    match cli.command {
        Command::Migrate => {
            database.migrate().await?;
            println!("Migrations applied");
        }
        Command::Seed => {
            let report = database.seed_catalog().await?;
            println!(
                "Seeded capability catalog: {} inserted, {} already present",
                report.inserted, report.existing
            );
        }
        Command::Preview { org, role } => {
            let rbac = system(&database, &config);
            let preview = rbac.preview_role(org, role).await?;
            println!(
                "Role {} in {} ({} customized)",
                preview.role,
                preview.org_id,
                preview.customized_count()
            );
            for (category, states) in preview.by_category() {
                println!("\n[{}]", category);
                for state in states {
                    let marker = match state.override_granted {
                        Some(_) => "*",
                        None => " ",
                    };
                    println!(
                        "  {} {:<28} {}",
                        marker,
                        state.capability.key,
                        if state.effective { "granted" } else { "denied" }
                    );
                }
            }
        }
        Command::Tier { org } => {
            let eligibility = system(&database, &config).can_customize(org).await?;
            println!(
                "Tier {}: customization {}",
                eligibility.tier_name,
                if eligibility.allowed { "allowed" } else { "not allowed" }
            );
        }
        Command::Reset { org, role, actor } => {
            let actor_role = database
                .member_role(org, actor)
                .await
                .context("looking up the acting user")?
                .with_context(|| format!("user {} is not a member of organization {}", actor, org))?;
            let claims = ActorClaims::new(actor, "rbac-admin", org, actor_role);
            let result = system(&database, &config)
                .reset_role(Some(&claims), org, role)
                .await;
            if !result.success {
                anyhow::bail!(result.message);
            }
            println!("{}", result.message);
        }
    }

    Ok(())
}

fn system(database: &Arc<Database>, config: &Config) -> RbacSystem {
    RbacSystem::new(&AccessStores::from_backend(database.clone()), config.access())
}

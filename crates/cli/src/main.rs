//! Noor CLI - Database migrations and out-of-band management.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations (schema + session store)
//! noor-cli migrate
//!
//! # Manage admin-role markers (the only writer of roles_admin)
//! noor-cli role grant --uid <uid> --granted-by ops@noor-foundation.org
//! noor-cli role revoke --uid <uid>
//! noor-cli role list
//!
//! # Create a login identity
//! noor-cli identity create -e admin@example.com -n "Admin Name" -p <password>
//!
//! # Seed page content and sample data
//! noor-cli seed
//! ```
//!
//! Role grants are deliberately CLI-only: neither binary exposes a route
//! that writes the role collection.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "noor-cli")]
#[command(author, version, about = "Noor Foundation CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin-role markers
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },
    /// Manage login identities
    Identity {
        #[command(subcommand)]
        action: IdentityAction,
    },
    /// Seed page content and sample data
    Seed,
}

#[derive(Subcommand)]
enum RoleAction {
    /// Grant the admin role to a uid
    Grant {
        /// The identity's uid
        #[arg(long)]
        uid: String,

        /// Who authorized the grant (bookkeeping only)
        #[arg(long)]
        granted_by: Option<String>,
    },
    /// Revoke the admin role from a uid
    Revoke {
        /// The identity's uid
        #[arg(long)]
        uid: String,
    },
    /// List every uid carrying the admin role
    List,
}

#[derive(Subcommand)]
enum IdentityAction {
    /// Create a new login identity
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Password (hashed with Argon2id before storage)
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Role { action } => match action {
            RoleAction::Grant { uid, granted_by } => {
                commands::role::grant(&uid, granted_by.as_deref()).await?;
            }
            RoleAction::Revoke { uid } => commands::role::revoke(&uid).await?,
            RoleAction::List => commands::role::list().await?,
        },
        Commands::Identity { action } => match action {
            IdentityAction::Create {
                email,
                name,
                password,
            } => {
                commands::identity::create(&email, &name, &password).await?;
            }
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}

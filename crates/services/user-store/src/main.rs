//! User Store - command-line access to the user table.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_store_lib::config::UserStoreConfig;
use user_store_lib::service::UserService;

#[derive(Parser)]
#[command(name = "user-store")]
#[command(about = "Manage user records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check database connectivity
    Ping,
    /// Add a user
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Delete a user by id
    Remove { id: i32 },
    /// List every user
    List,
    /// Show a single user
    Get { id: i32 },
    /// Replace a user's name and email
    Update {
        id: i32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = UserStoreConfig::from_env().database;

    match cli.command {
        Commands::Ping => {
            user_store_lib::ping(&config).await?;
            println!("ok");
        }
        Commands::Add { name, email } => {
            let user = user_store_lib::connect(&config).await?.add_user(name, email).await?;
            print_json(&user)?;
        }
        Commands::Remove { id } => {
            user_store_lib::connect(&config).await?.remove_user(id).await?;
            tracing::info!(user_id = id, "User removed");
        }
        Commands::List => {
            let users = user_store_lib::connect(&config).await?.list_users().await?;
            print_json(&users)?;
        }
        Commands::Get { id } => {
            let user = user_store_lib::connect(&config).await?.get_user(id).await?;
            print_json(&user)?;
        }
        Commands::Update { id, name, email } => {
            let user = user_store_lib::connect(&config)
                .await?
                .update_user(id, name, email)
                .await?;
            print_json(&user)?;
        }
    }

    Ok(())
}

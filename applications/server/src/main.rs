/// Cloud Kitchen Server - recipe and inventory backend
use clap::{Parser, Subcommand};
use kitchen_core::KitchenStorage;
use kitchen_server::{
    config::ServerConfig,
    create_router,
    services::{accounts, CredentialService},
    state::AppState,
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kitchen-server")]
#[command(about = "Cloud Kitchen recipe and inventory server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "KITCHEN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Register a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        fullname: String,
        /// Login email
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Role: chef or user
        #[arg(short, long, default_value = "user")]
        role: String,
        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kitchen_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser {
            fullname,
            email,
            password,
            role,
            phone,
        } => {
            let form = accounts::Registration {
                fullname,
                email,
                password,
                role: Some(role),
                phone,
            };
            add_user(&config, form).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Cloud Kitchen Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    ensure_parent_dir(&config.storage.database_url).await?;
    let db = Arc::new(kitchen_storage::connect(&config.storage.database_url).await?);
    tracing::info!("Database connected: {}", config.storage.database_url);

    let credentials = CredentialService::new(config.auth.password_scheme);
    tracing::info!("Password scheme: {:?}", credentials.scheme());

    if !config.web.static_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; the frontend will not be served",
            config.web.static_dir.display()
        );
    }

    let app_state = AppState::new(db, credentials, config.web.static_dir.clone());
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, form: accounts::Registration) -> anyhow::Result<()> {
    ensure_parent_dir(&config.storage.database_url).await?;
    let db = kitchen_storage::connect(&config.storage.database_url).await?;
    let credentials = CredentialService::new(config.auth.password_scheme);

    let user = accounts::register(&db, &credentials, form).await?;
    println!("Created {} ({}, {})", user.user_id, user.email, user.role);

    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let db = kitchen_storage::connect(&config.storage.database_url).await?;
    let users = db.get_all_users().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} <{}> [{}]",
            user.user_id, user.fullname, user.email, user.role
        );
    }

    Ok(())
}

/// Create the directory holding a file-backed SQLite database
async fn ensure_parent_dir(database_url: &str) -> anyhow::Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    if path.contains(":memory:") {
        return Ok(());
    }

    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

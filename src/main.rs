use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use physics_lessons::{api, config::ServerConfig, curriculum, db};

#[derive(Parser)]
#[command(name = "physics")]
#[command(about = "Server-rendered physics lessons")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the lessons server
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port for HTTP
        #[arg(short, long)]
        port: Option<u16>,

        /// Ratings database file
        #[arg(long)]
        database: Option<PathBuf>,

        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Print the curriculum
    Lessons {
        /// Lesson to mark as current
        #[arg(long)]
        current: Option<String>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "physics_lessons=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let db = match &config.database {
        Some(path) => db::Database::open(path.clone())?,
        None => db::Database::open_default()?,
    };
    db.migrate()?;

    let app = api::create_router(db, &config);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Physics lessons listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = ServerConfig::from_env();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            database,
            static_dir,
        }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if database.is_some() {
                config.database = database;
            }
            if static_dir.is_some() {
                config.static_dir = static_dir;
            }
            serve(config).await?;
        }
        Some(Commands::Lessons { current }) => {
            print!("{}", curriculum::render_outline(current.as_deref()));
        }
        None => serve(config).await?,
    }

    Ok(())
}

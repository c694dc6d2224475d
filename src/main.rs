use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Portfolio calculator engine (2024 U.S. capital gains tax + growth projections)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the calculator HTTP API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = folio::api::run_http_server(port).await {
                tracing::error!("server error: {e}");
                std::process::exit(1);
            }
        }
    }
}

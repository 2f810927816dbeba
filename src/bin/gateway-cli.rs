use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Query CLI for the GeckoTerminal gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8089")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway liveness
    Status,
    /// List supported networks
    Networks,
    /// List DEXes on a network
    Dexes { network: String },
    /// View trending pools, optionally scoped to one network
    Trending {
        #[arg(short, long)]
        network: Option<String>,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Search pools by free-text query
    Search {
        query: String,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let request = match cli.command {
        Commands::Status => client.get(format!("{}/", cli.url)),
        Commands::Networks => client.get(format!("{}/networks", cli.url)),
        Commands::Dexes { network } => {
            client.get(format!("{}/networks/{}/dexes", cli.url, network))
        }
        Commands::Trending { network, limit } => {
            let path = match network {
                Some(n) => format!("{}/networks/{}/trending_pools", cli.url, n),
                None => format!("{}/networks/trending_pools", cli.url),
            };
            client.get(path).query(&[("limit", limit)])
        }
        Commands::Search { query, limit } => client
            .get(format!("{}/search/pools", cli.url))
            .query(&[("query", query)])
            .query(&[("limit", limit)]),
    };

    let res = request.send().await?;
    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("{}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

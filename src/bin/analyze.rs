use std::path::PathBuf;

use clap::Parser;
use url::Url;

use binary_squad_analyzer::client::{AnalysisClient, AnalysisSession, ChartImage, HistoryStore};
use binary_squad_analyzer::logging::{init_logging, LoggingConfig};
use binary_squad_analyzer::models::MarketType;

/// Submit a chart screenshot to a running analyzer and print the verdict.
#[derive(Debug, Parser)]
#[command(name = "analyze", version)]
struct Args {
    /// Base URL of the analyzer server
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: Url,

    /// E-mail address for the submission
    #[arg(long)]
    email: String,

    /// Asset symbol, e.g. EUR/USD
    #[arg(long)]
    asset: String,

    /// Expiration in minutes (1, 2, 5, 10, 15, 30 or 60)
    #[arg(long)]
    expiration: u32,

    /// Market mode: normal or otc
    #[arg(long, default_value = "normal")]
    market: MarketType,

    /// Path to the chart image
    #[arg(long)]
    image: PathBuf,

    /// Directory holding the local analysis history
    #[arg(long, default_value = ".binary-squad")]
    history_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging(LoggingConfig::from_env())?;

    let args = Args::parse();

    let bytes = std::fs::read(&args.image)?;
    let file_name = args
        .image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chart.png".to_string());

    let client = AnalysisClient::new(args.base_url);
    let store = HistoryStore::new(&args.history_dir);
    let mut session = AnalysisSession::new(client, store);

    session.form.email = args.email;
    session.form.asset = args.asset;
    session.form.expiration = Some(args.expiration);
    session.form.market_type = args.market;
    session.form.image = Some(ChartImage { file_name, bytes });

    // Print the cosmetic progress while the request is in flight
    let mut progress = session.progress();
    let reporter = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let value = *progress.borrow();
            eprintln!("Analisando padrões do gráfico... {}%", value);
            if value >= 100 {
                break;
            }
        }
    });

    match session.analyze().await {
        Ok(result) => {
            println!("Ativo: {}", result.asset);
            println!();
            println!("TENDÊNCIA PREDOMINANTE\n{}\n", result.trend);
            println!("NÍVEIS DE ENTRADA\n{}\n", result.entry_levels);
            println!("MOMENTO IDEAL\n{}\n", result.timing);
            println!("ANÁLISE TÉCNICA DETALHADA\n{}\n", result.analysis);
            println!("VEREDITO FINAL: {} ({}%)", result.verdict, result.probability);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    reporter.abort();

    if !session.history().is_empty() {
        println!("\nÚltimas {} análises:", session.history().len());
        for item in session.history().items() {
            println!(
                "  {}  {}  {} ({}%)",
                item.date, item.asset, item.verdict, item.probability
            );
        }
    }

    Ok(())
}

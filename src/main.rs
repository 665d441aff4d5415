// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use woosh::application::context::AppContext;
use woosh::config::settings::Settings;
use woosh::domain::repositories::result_repository::{results_key, vat_results_key};
use woosh::presentation::{console, routes};
use woosh::utils::telemetry;

#[derive(Parser)]
#[command(name = "woosh")]
#[command(author, version, about = "Company lookup: EU VAT validation and categorized web search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve,

    /// Search the web for a company and categorize the URLs found
    Search {
        /// Company name or free-text query
        query: String,

        /// Raw results requested from the search engine (1-200)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=200))]
        max_results: Option<u32>,

        /// URLs kept per category
        #[arg(long)]
        top: Option<usize>,

        /// Save the results as JSON under the configured results directory
        #[arg(long)]
        save: bool,
    },

    /// Validate a VAT number with VIES and search for the company
    Vat {
        /// VAT number, with or without country prefix (e.g. IT00743110157)
        vat: String,

        /// Save the results as JSON under the configured results directory
        #[arg(long)]
        save: bool,
    },
}

/// 主函数
///
/// 应用程序入口点，负责加载配置、组装服务并执行子命令
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Serve => telemetry::init_telemetry(),
        _ => telemetry::init_cli_telemetry(),
    }

    let settings = Settings::new()?;
    let context = AppContext::from_settings(&settings)?;

    match cli.command {
        Commands::Serve => serve(&settings, &context).await,
        Commands::Search {
            query,
            max_results,
            top,
            save,
        } => {
            let max_results = max_results.unwrap_or(settings.search.max_results);
            let top = top.unwrap_or(settings.search.top_per_category);
            let results = context
                .search
                .search_companies(query.trim(), max_results, top)
                .await;

            print!(
                "{}",
                console::render_ranked(&format!("Company Search Results: {}", query), &results)
            );
            if save {
                let path = context.store.save_json(&results_key(&query), &results).await?;
                println!("Results saved to {}", path.display());
            }
            Ok(())
        }
        Commands::Vat { vat, save } => {
            let data = context.lookup.lookup(&vat).await;

            print!("{}", console::render_vat(&data.vat));
            println!();
            print!("{}", console::render_ranked("Company URLs", &data.urls));
            if save {
                let key = vat_results_key(&data.vat.country_code, &data.vat.vat_number);
                let path = context.store.save_json(&key, &data).await?;
                println!("Results saved to {}", path.display());
            }
            Ok(())
        }
    }
}

async fn serve(settings: &Settings, context: &AppContext) -> anyhow::Result<()> {
    info!("Starting woosh API...");
    let app = routes::app(context, &settings.server.cors_origins);

    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

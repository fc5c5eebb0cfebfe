use anyhow::{Context, Result};
use clap::Parser;
use stays_browser::config::{self, LogConfig};
use stays_browser::pages::{DetailPage, ListPage, Tab};
use stays_browser::render::{render_detail_page, render_list_page};
use stays_browser::{Route, StaySource, StaysClient};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "stays-browser")]
#[command(about = "Browse stay listings from the search API")]
#[command(version)]
struct Cli {
    /// Page to open: `/` or `/property/<id>`
    #[arg(default_value = "/")]
    path: String,

    /// Detail page tab
    #[arg(long, default_value_t = Tab::Overview)]
    tab: Tab,

    /// Detail page gallery image
    #[arg(long, default_value_t = 0)]
    image: usize,

    /// Advance every card carousel this many times
    #[arg(long, default_value_t = 0)]
    next: usize,

    /// Press "Try Again" up to this many times after a failed fetch
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Write page.html (and payload.json on success) into this directory
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Rendered page plus the payload it was built from
struct Rendered {
    html: String,
    payload: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let log = LogConfig::from_env();
    if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(log.filter).init();
    }

    let cli = Cli::parse();
    let route = Route::parse(&cli.path)?;

    let client = StaysClient::with_config(config::client_config_from_env()?)?;
    info!("🏠 Opening {} via {}", route.path(), client.source_name());

    let rendered = match &route {
        Route::List => list_page(&client, &cli).await?,
        Route::Detail { id } => detail_page(&client, id, &cli).await?,
    };

    println!("{}", rendered.html);

    if let Some(dir) = &cli.out {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        tokio::fs::write(dir.join("page.html"), &rendered.html).await?;
        if let Some(payload) = &rendered.payload {
            tokio::fs::write(dir.join("payload.json"), payload).await?;
        }
        info!("💾 Saved page to {}", dir.display());
    }

    Ok(())
}

async fn list_page(source: &dyn StaySource, cli: &Cli) -> Result<Rendered> {
    let mut page = ListPage::new();
    page.load(source).await;

    let mut attempts = 0;
    while page.state().error_message().is_some() && attempts < cli.retries {
        attempts += 1;
        warn!("Search failed, retry {} of {}", attempts, cli.retries);
        page.reload(source).await;
    }

    for card in 0..page.card_count() {
        for _ in 0..cli.next {
            page.next_image(card);
        }
    }

    let payload = match page.state().data() {
        Some(properties) => {
            info!("✅ {} properties", properties.len());
            Some(serde_json::to_string_pretty(properties)?)
        }
        None => None,
    };

    Ok(Rendered {
        html: render_list_page(&page.view())?,
        payload,
    })
}

async fn detail_page(source: &dyn StaySource, id: &str, cli: &Cli) -> Result<Rendered> {
    let mut page = DetailPage::new(id);
    page.load(source).await;

    let mut attempts = 0;
    while page.state().error_message().is_some() && attempts < cli.retries {
        attempts += 1;
        warn!("Property {} failed, retry {} of {}", id, attempts, cli.retries);
        page.reload(source).await;
    }

    page.set_tab(cli.tab);
    page.select_image(cli.image);

    let payload = match page.property() {
        Some(property) => Some(serde_json::to_string_pretty(property)?),
        None => None,
    };

    Ok(Rendered {
        html: render_detail_page(&page.view())?,
        payload,
    })
}

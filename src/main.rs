use tradelog::config::AppConfig;
use tradelog::position::TradeMetrics;
use tradelog::services::NotificationKind;
use tradelog::JournalContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(base_url = %config.api_base_url, "Connecting to journal backend");

    let ctx = JournalContext::new(config)?;

    // Surface every service notification in the log.
    let mut notifications = ctx.notifier.subscribe();
    tokio::spawn(async move {
        while let Ok(n) = notifications.recv().await {
            match n.kind {
                NotificationKind::Success => tracing::info!(message = %n.message, "notification"),
                NotificationKind::Error => tracing::warn!(message = %n.message, "notification"),
            }
        }
    });

    let trades = ctx.trades().list().await?;
    tracing::info!(count = trades.len(), "Fetched trades");

    for trade in &trades {
        let metrics = TradeMetrics::compute(trade);
        tracing::info!(
            symbol = %trade.symbol,
            status = %trade.status,
            entry = %metrics.entry_price_avg,
            remaining = %metrics.remaining_shares,
            realized = %metrics.realized_pnl,
            unrealized = %metrics.unrealized_pnl,
            total = %metrics.total_pnl,
            total_pct = %metrics.total_pct,
            "Position"
        );
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}

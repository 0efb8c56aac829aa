use enrollment::{error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let state = startup::bootstrap().await?;

    let stats = state.request_service().get_request_stats().await?;

    tracing::info!(
        "Requests: {} total, {} pending, {} approved, {} rejected",
        stats.total,
        stats.pending,
        stats.approved,
        stats.rejected
    );

    for alert in state.capacity_alerts.messages() {
        tracing::info!("Capacity alert: {}", alert);
    }

    Ok(())
}

use anyhow::Context;
use skybooker_app::{booking_controller, Config, Session, TracingNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // stdout carries the JSON protocol, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybooker_app=info,skybooker_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        "Starting SkyBooker (tax rate {}, booking fee {})",
        config.pricing.tax_rate,
        config.pricing.booking_fee
    );

    let controller = booking_controller(&config).context("Failed to build seat inventory")?;
    let mut session = Session::new(controller, TracingNotifier);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())?;

    Ok(())
}

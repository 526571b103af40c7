use std::io::stdout;

use anyhow::{anyhow, Context};
use crossbeam_channel::unbounded;
use tracing_subscriber::EnvFilter;

use battery::{debug, logger, scenario, Battery};
use shared_resources::config::Config;
use shared_resources::event::Event;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let (config, skipped) = Config::get().context("failed to load the building configuration")?;
    for note in skipped {
        tracing::warn!("{}", note);
    }

    let (events_tx, events_rx) = unbounded::<Event>();
    let event_logger = logger::spawn(events_rx).context("failed to start the event logger")?;

    let mut battery = Battery::from_config(&config, events_tx).context("invalid building")?;
    tracing::info!("{}", battery);
    for column in &battery.columns {
        tracing::info!("{}", column);
    }

    scenario::apply_setup(&mut battery, &config.scenario.setup).context("invalid scenario setup")?;

    let mut stdout = stdout();
    for call in &config.scenario.calls {
        match scenario::replay_call(&mut battery, call) {
            Ok(outcome) => tracing::info!(?outcome, "call served"),
            Err(err) if err.is_transient() => tracing::warn!(error = err.as_label(), "call interrupted: {}", err),
            Err(err) => tracing::error!(error = err.as_label(), "call rejected: {}", err),
        }
        if let Some(column) = battery.column(call.column()) {
            debug::print_column(&mut stdout, column)?;
        }
    }

    // closes the event channel
    drop(battery);
    event_logger.join().map_err(|_| anyhow!("event logger panicked"))?;
    Ok(())
}

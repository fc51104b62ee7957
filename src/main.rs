//! pubsub-primer demo entry point.
//!
//! Registers a few log subscribers and one recorder, publishes the
//! configured messages, and optionally prints the recorder's transcript.

use std::io::Write;

use tracing_subscriber::EnvFilter;

use pubsub_primer::config::{DemoConfig, LogFormat};
use pubsub_primer::domain::{BroadcastPublisher, Publisher};
use pubsub_primer::subscribers::{LogSubscriber, RecordingSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = DemoConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }

    tracing::info!(
        subscribers = config.subscriber_count,
        messages = config.messages.len(),
        "starting pubsub-primer demo"
    );

    // Subscribers must outlive the publisher that borrows them
    let loggers: Vec<LogSubscriber> = (1..=config.subscriber_count)
        .map(|n| LogSubscriber::new(format!("log-{n}")))
        .collect();
    let recorder = RecordingSubscriber::new();

    let mut publisher = BroadcastPublisher::new();
    for logger in &loggers {
        publisher.add(logger);
    }
    publisher.add(&recorder);

    for message in &config.messages {
        let delivered = publisher.publish(message)?;
        tracing::debug!(delivered, "broadcast complete");
    }

    if config.transcript {
        let mut out = std::io::stdout().lock();
        for delivery in recorder.deliveries() {
            serde_json::to_writer(&mut out, &delivery)?;
            writeln!(out)?;
        }
    }

    tracing::info!(received = recorder.count(), "demo finished");
    Ok(())
}

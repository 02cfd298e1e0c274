use anyhow::{Context, Result};
use circbuf::SharedCircularBuffer;
use crossbeam_channel::bounded;
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

/// A sensor reading produced by the worker thread
#[derive(Clone, Debug)]
struct Event {
    seq: u64,
    value: f64,
}

const WINDOW: usize = 8;
const EVENTS: u64 = 50;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let window = SharedCircularBuffer::<Event>::new(WINDOW).context("Failed to create window")?;
    let (sender, receiver) = bounded::<Event>(4);

    // Producer thread
    let producer = thread::spawn(move || {
        for seq in 0..EVENTS {
            let value = (seq as f64 * 0.25).sin();
            if sender.send(Event { seq, value }).is_err() {
                break;
            }
        }
    });

    // Consumer thread records into the shared window
    let consumer = {
        let window = Arc::clone(&window);
        thread::spawn(move || {
            for event in receiver.iter() {
                if let Some(old) = window.insert(event) {
                    tracing::debug!("dropped event {}", old.seq);
                }
            }
        })
    };

    producer
        .join()
        .map_err(|_| anyhow::anyhow!("Producer thread panicked"))?;
    consumer
        .join()
        .map_err(|_| anyhow::anyhow!("Consumer thread panicked"))?;

    tracing::info!("Window holds {} of {} events", window.len(), EVENTS);

    window.with(|buf| {
        for (index, event) in buf.iter_rev() {
            println!("#{index} seq={} value={:+.3}", event.seq, event.value);
        }
    });

    if let (Some(oldest), Some(newest)) = (window.tail(), window.head()) {
        println!("oldest seq={} newest seq={}", oldest.seq, newest.seq);
    }

    Ok(())
}

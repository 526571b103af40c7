/// ----- LOGGER MODULE -----
/// Drains the event channel on its own thread and turns every event into
/// a `tracing` record. Sensor faults are warnings, a blocked door is an
/// error, everything else is info. The thread ends once every sender is
/// dropped.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use shared_resources::event::{Event, Severity};

pub fn spawn(events_rx: Receiver<Event>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("event_logger".into())
        .spawn(move || main(events_rx))
}

pub fn main(events_rx: Receiver<Event>) {
    for event in events_rx.iter() {
        log(&event);
    }
}

pub fn log(event: &Event) {
    let details = serde_json::to_string(event).unwrap_or_else(|_| format!("{:?}", event));
    match event.severity() {
        Severity::Info => tracing::info!(event = event.as_label(), %details),
        Severity::Warning => tracing::warn!(event = event.as_label(), %details),
        Severity::Error => tracing::error!(event = event.as_label(), %details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn logger_stops_when_the_senders_are_gone() {
        let (tx, rx) = unbounded();
        let handle = spawn(rx).unwrap();
        tx.send(Event::DoorwayClear { elevator: "A1".into() }).unwrap();
        tx.send(Event::DoorBlocked { elevator: "A1".into(), floor: 2, attempts: 3 }).unwrap();
        drop(tx);
        assert!(handle.join().is_ok());
    }
}

use crate::shared::CarEvent;
use crossbeam_channel as cbc;
use std::io::Write;

/**
 * Receives the progress events of the car.
 *
 * Publishing never fails from the point of view of the car: the side channel is purely observational, so
 * sinks swallow their own errors.
 */
pub trait StatusSink: Send {
    fn publish(&mut self, event: &CarEvent);
}

pub struct NullStatus;

impl StatusSink for NullStatus {
    fn publish(&mut self, _event: &CarEvent) {}
}

impl StatusSink for cbc::Sender<CarEvent> {
    fn publish(&mut self, event: &CarEvent) {
        // Nobody listening any more is fine
        let _ = self.send(*event);
    }
}

/// Renders events as the progress lines shown on the operator console.
pub struct ConsoleStatus<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> ConsoleStatus<W> {
    pub fn new(out: W) -> ConsoleStatus<W> {
        ConsoleStatus { out }
    }
}

impl<W: Write + Send> StatusSink for ConsoleStatus<W> {
    fn publish(&mut self, event: &CarEvent) {
        let _ = writeln!(self.out, "{}", render_event(event));
        let _ = self.out.flush();
    }
}

pub fn render_event(event: &CarEvent) -> String {
    match *event {
        CarEvent::DoorsClosing => String::from("\n[Closing doors]"),
        CarEvent::FloorReached { floor, .. } => format!("Elevator on floor: {}...", floor),
        CarEvent::DoorsOpened(floor) => format!("[Arrived at floor {}. Opening doors]", floor),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/

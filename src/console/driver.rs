/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info};
use std::io::{self, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::console::input::{parse_command, Command};
use crate::elevator::ElevatorCar;
use crate::shared::{Direction, ElevatorState};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/**
 * Interactive loop in front of the elevator car.
 *
 * The driver takes one line at a time from `line_rx`, validates it and, for a valid floor, submits the
 * request and advances the car until it is idle again. Nothing but valid floors ever reaches the car.
 *
 * # Fields
 * - `car`:             The controlled car.
 * - `config`:          Floor range used to validate input.
 * - `out`:             Where prompts and error messages are written.
 * - `line_rx`:         Receives raw console lines. A disconnect ends the loop like `exit`.
 * - `terminate_rx`:    Ends the loop when a message arrives.
 * - `state_tx`:        Optionally broadcasts a snapshot of the car after every step.
 *
 */
pub struct ConsoleDriver<W: Write> {
    car: ElevatorCar,
    config: ElevatorConfig,
    out: W,
    line_rx: cbc::Receiver<String>,
    terminate_rx: cbc::Receiver<()>,
    state_tx: Option<cbc::Sender<ElevatorState>>,
}

impl<W: Write> ConsoleDriver<W> {
    pub fn new(
        car: ElevatorCar,
        config: &ElevatorConfig,
        out: W,
        line_rx: cbc::Receiver<String>,
        terminate_rx: cbc::Receiver<()>,
        state_tx: Option<cbc::Sender<ElevatorState>>,
    ) -> ConsoleDriver<W> {
        ConsoleDriver {
            car,
            config: config.clone(),
            out,
            line_rx,
            terminate_rx,
            state_tx,
        }
    }

    pub fn run(mut self) -> io::Result<()> {
        info!(
            "Console driver started for floors {} to {}",
            self.config.min_floor, self.config.max_floor
        );
        self.print_banner()?;

        loop {
            self.prompt()?;

            let line = cbc::select! {
                recv(self.line_rx) -> line => line.ok(),
                recv(self.terminate_rx) -> _msg => None,
            };

            let line = match line {
                Some(line) => line,
                None => {
                    info!("Console input closed or terminated");
                    break;
                }
            };

            if self.handle_line(&line)? == Flow::Exit {
                info!("Exit requested from console");
                break;
            }
        }

        writeln!(self.out, "\nSimulation completed.")?;
        self.out.flush()
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match parse_command(line, &self.config) {
            Command::Exit => return Ok(Flow::Exit),
            Command::Invalid(input) => {
                debug!("Rejected console input {:?}", input);
                writeln!(self.out, "(!) Error: Invalid entry. Please enter a number.")?;
            }
            Command::OutOfRange(value) => {
                debug!("Rejected floor {} outside the served range", value);
                writeln!(
                    self.out,
                    "(!) Error: The floor must be between {} and {}.",
                    self.config.min_floor, self.config.max_floor
                )?;
            }
            Command::Floor(floor) => self.service_request(floor),
        }

        Ok(Flow::Continue)
    }

    fn service_request(&mut self, floor: i32) {
        self.car.request_floor(floor);
        self.publish_state();

        // Each step services one stop, so this ends once the queue is drained
        loop {
            self.car.process_next_stop();
            self.publish_state();
            if self.car.direction() == Direction::Idle {
                break;
            }
        }

        debug!(
            "Car settled at floor {} with doors {:?}",
            self.car.current_floor(),
            self.car.door_state()
        );
    }

    fn publish_state(&self) {
        let log_state = log::log_enabled!(log::Level::Debug);
        if self.state_tx.is_none() && !log_state {
            return;
        }

        let state = self.car.state();
        if log_state {
            debug!(
                "Car state: {}",
                serde_json::to_string(&state).unwrap_or_else(|e| e.to_string())
            );
        }
        if let Some(state_tx) = &self.state_tx {
            // Nobody listening any more is fine
            let _ = state_tx.send(state);
        }
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== ELEVATOR SIMULATOR ===")?;
        writeln!(
            self.out,
            "Available floors {} - {}. (Write 'EXIT' to finish)",
            self.config.min_floor, self.config.max_floor
        )
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(
            self.out,
            "\nWhich floor do you need? ({}-{}): ",
            self.config.min_floor, self.config.max_floor
        )?;
        self.out.flush()
    }
}

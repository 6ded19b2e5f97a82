/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info};
use std::io::{self, BufRead};
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Floor(i32),
    OutOfRange(i32),
    Invalid(String),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_command(line: &str, config: &ElevatorConfig) -> Command {
    let input = line.trim();

    if input.eq_ignore_ascii_case("exit") {
        return Command::Exit;
    }

    // Anything that does not fit an i32 is not a number as far as the console goes
    match input.parse::<i32>() {
        Ok(floor) if config.contains(floor) => Command::Floor(floor),
        Ok(floor) => Command::OutOfRange(floor),
        Err(_) => Command::Invalid(input.to_string()),
    }
}

/// Reads lines from `reader` on a dedicated thread and forwards them on `line_tx`.
/// The sender is dropped when the input ends, which the receiving side sees as a
/// disconnect.
pub fn spawn_input_reader<R>(reader: R, line_tx: cbc::Sender<String>) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    Builder::new()
        .name("console_input".into())
        .spawn(move || read_lines(reader, line_tx))
}

fn read_lines<R: BufRead>(mut reader: R, line_tx: cbc::Sender<String>) {
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("End of console input");
                return;
            }
            Ok(_) => {
                if line_tx.send(line).is_err() {
                    return;
                }
            }
            Err(e) => {
                error!("Error reading console input: {}", e);
                return;
            }
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/

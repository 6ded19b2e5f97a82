/* 3rd party libraries */
use clap::Arg;
use crossbeam_channel as cbc;
use log::info;
use std::io::{self, BufReader};
use std::path::Path;

/* Custom libraries */
use console::ConsoleDriver;
use elevator::{ConsoleStatus, ElevatorCar};

/* Modules */
mod config;
mod console;
mod elevator;
mod shared;

fn cli() -> clap::Command<'static> {
    clap::Command::new("elevator-sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates a single elevator car driven from the console")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .default_value("config.toml")
                .help("Configuration file"),
        )
        .arg(
            Arg::new("step-delay")
                .long("step-delay")
                .value_name("MS")
                .takes_value(true)
                .validator(|value| value.parse::<u64>())
                .help("Pause per floor in milliseconds, overrides the configuration"),
        )
        .arg(
            Arg::new("no-delay")
                .long("no-delay")
                .conflicts_with("step-delay")
                .help("Move between floors without pausing"),
        )
}

/* Main */
fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(
        config::load_config(Path::new(config_path)),
        "Failed to load configuration"
    );

    if let Some(step_delay) = matches.value_of("step-delay") {
        config.elevator.step_delay_ms = unwrap_or_exit!(
            step_delay.parse::<u64>(),
            "Invalid step delay"
        );
    }
    if matches.is_present("no-delay") {
        config.elevator.step_delay_ms = 0;
    }

    info!("Starting with {:?}", config);

    // Initialize channels
    let (line_tx, line_rx) = cbc::unbounded::<String>();

    // Start the console input thread
    console::spawn_input_reader(BufReader::new(io::stdin()), line_tx)?;

    // Create the car
    let car = ElevatorCar::new(&config.elevator)
        .with_step_delay(elevator::step_delay_for(config.elevator.step_delay()))
        .with_status(Box::new(ConsoleStatus::new(io::stdout())));

    ConsoleDriver::new(
        car,
        &config.elevator,
        io::stdout(),
        line_rx,
        cbc::never(),
        None,
    )
    .run()
}

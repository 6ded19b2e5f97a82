pub mod driver;
pub mod input;

pub use driver::ConsoleDriver;
pub use input::spawn_input_reader;

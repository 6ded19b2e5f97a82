pub mod car;
pub mod car_tests;
pub mod delay;
pub mod status;

pub use car::ElevatorCar;
pub use delay::step_delay_for;
pub use status::ConsoleStatus;

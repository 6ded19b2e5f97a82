pub mod macros;
pub mod structs;

pub use structs::CarEvent;
pub use structs::Direction;
pub use structs::DoorState;
pub use structs::ElevatorState;

/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Idle,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Idle => write!(f, "idle"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    Open,
    Closed,
}

/// Read-only snapshot of the car, handed out to observers after every step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorState {
    pub floor: i32,
    pub direction: Direction,
    pub doors: DoorState,
    #[serde(rename = "pendingStops")]
    pub pending_stops: Vec<i32>,
}

/// Progress reported by the car while it services a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarEvent {
    DoorsClosing,
    FloorReached { floor: i32, direction: Direction },
    DoorsOpened(i32),
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_json_layout() {
        let state = ElevatorState {
            floor: 3,
            direction: Direction::Up,
            doors: DoorState::Open,
            pending_stops: vec![4, 5],
        };

        let json = serde_json::to_string(&state).unwrap();

        assert_eq!(
            json,
            r#"{"floor":3,"direction":"up","doors":"open","pendingStops":[4,5]}"#
        );
        assert_eq!(serde_json::from_str::<ElevatorState>(&json).unwrap(), state);
    }
}

use crate::config::ElevatorConfig;
use crate::elevator::delay::{NoDelay, StepDelay};
use crate::elevator::status::{NullStatus, StatusSink};
use crate::shared::{CarEvent, Direction, DoorState, ElevatorState};
use log::{debug, trace};
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};
use std::ops::RangeInclusive;

/**
 * Controls a single elevator car.
 *
 * The `ElevatorCar` owns the pending stops and the observable state of the car. The state is only
 * mutated through `request_floor` and `process_next_stop`; everything else is read-only access.
 *
 * # Fields
 * - `current_floor`:   The floor the car is at. Always within `floors`.
 * - `direction`:       Idle when no stops are pending, otherwise the intended travel direction.
 * - `doors`:           Closed in transit, opened on arrival at a serviced stop.
 * - `stops`:           Pending stops, sorted and without duplicates.
 * - `floors`:          The served floor range.
 * - `step_delay`:      Pause taken after every floor stepped, used only for pacing.
 * - `status`:          Receives the progress events of the car.
 *
 */
pub struct ElevatorCar {
    current_floor: i32,
    direction: Direction,
    doors: DoorState,
    stops: BTreeSet<i32>,
    floors: RangeInclusive<i32>,
    step_delay: Box<dyn StepDelay>,
    status: Box<dyn StatusSink>,
}

impl ElevatorCar {
    pub fn new(config: &ElevatorConfig) -> ElevatorCar {
        ElevatorCar {
            current_floor: config.min_floor,
            direction: Direction::Idle,
            doors: DoorState::Closed,
            stops: BTreeSet::new(),
            floors: config.min_floor..=config.max_floor,
            step_delay: Box::new(NoDelay),
            status: Box::new(NullStatus),
        }
    }

    pub fn with_step_delay(mut self, step_delay: Box<dyn StepDelay>) -> ElevatorCar {
        self.step_delay = step_delay;
        self
    }

    pub fn with_status(mut self, status: Box<dyn StatusSink>) -> ElevatorCar {
        self.status = status;
        self
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn door_state(&self) -> DoorState {
        self.doors
    }

    pub fn pending_stops(&self) -> impl Iterator<Item = i32> + '_ {
        self.stops.iter().copied()
    }

    pub fn state(&self) -> ElevatorState {
        ElevatorState {
            floor: self.current_floor,
            direction: self.direction,
            doors: self.doors,
            pending_stops: self.pending_stops().collect(),
        }
    }

    /// Adds `floor` to the pending stops. Floors outside the served range are ignored.
    pub fn request_floor(&mut self, floor: i32) {
        if !self.floors.contains(&floor) {
            debug!("Ignoring request for floor {} outside {:?}", floor, self.floors);
            return;
        }

        if self.stops.insert(floor) {
            debug!("Added stop at floor {}", floor);
        }
        self.update_direction();
    }

    /// Moves the car to its next stop and services it. Does nothing but settle on
    /// `Idle` when no stops are pending.
    pub fn process_next_stop(&mut self) {
        let next_floor = match self.choose_next_stop() {
            Some(floor) => floor,
            None => {
                self.direction = Direction::Idle;
                return;
            }
        };

        self.move_to(next_floor);
        self.stop_at_floor(next_floor);
    }

    fn choose_next_stop(&self) -> Option<i32> {
        let lowest = *self.stops.iter().next()?;

        // Keep going the current way if there is a stop ahead
        let ahead = match self.direction {
            Direction::Down => self.stops.range(..self.current_floor).next_back(),
            Direction::Up | Direction::Idle => self
                .stops
                .range((Excluded(self.current_floor), Unbounded))
                .next(),
        };

        Some(ahead.copied().unwrap_or(lowest))
    }

    fn move_to(&mut self, floor: i32) {
        self.doors = DoorState::Closed;
        self.status.publish(&CarEvent::DoorsClosing);

        while self.current_floor != floor {
            if self.current_floor < floor {
                self.current_floor += 1;
                self.direction = Direction::Up;
            } else {
                self.current_floor -= 1;
                self.direction = Direction::Down;
            }

            trace!("Car passing floor {} going {}", self.current_floor, self.direction);
            self.status.publish(&CarEvent::FloorReached {
                floor: self.current_floor,
                direction: self.direction,
            });
            self.step_delay.pause();
        }
    }

    fn stop_at_floor(&mut self, floor: i32) {
        self.direction = Direction::Idle;
        self.doors = DoorState::Open;
        self.stops.remove(&floor);
        self.status.publish(&CarEvent::DoorsOpened(floor));
        self.update_direction();
    }

    // Compares against the lowest pending stop only, whatever the current direction.
    fn update_direction(&mut self) {
        self.direction = match self.stops.iter().next() {
            None => Direction::Idle,
            Some(&lowest) if lowest > self.current_floor => Direction::Up,
            Some(_) => Direction::Down,
        };
        debug!("Direction is now {} at floor {}", self.direction, self.current_floor);
    }
}

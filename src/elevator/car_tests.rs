/*
 * Unit tests for the elevator car
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_car_init
 * - test_out_of_range_requests_are_ignored
 * - test_single_request
 * - test_nearest_ascending_stop_first
 * - test_duplicate_request_is_one_stop
 * - test_request_current_floor_services_in_place
 * - test_current_floor_waits_behind_lower_stop
 * - test_extreme_floors
 * - test_down_direction_continues_down
 * - test_direction_after_request
 * - test_events_for_single_trip
 * - test_step_delay_per_floor
 * - test_process_without_stops
 * - test_custom_floor_range
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod car_tests {
    use crate::config::ElevatorConfig;
    use crate::elevator::delay::StepDelay;
    use crate::elevator::ElevatorCar;
    use crate::shared::CarEvent;
    use crate::shared::Direction::{Down, Idle, Up};
    use crate::shared::DoorState::{Closed, Open};
    use crossbeam_channel::{unbounded, Receiver};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingDelay(Arc<AtomicUsize>);

    impl StepDelay for CountingDelay {
        fn pause(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn setup_car() -> (ElevatorCar, Receiver<CarEvent>) {
        let (status_tx, status_rx) = unbounded::<CarEvent>();
        let car = ElevatorCar::new(&ElevatorConfig::default()).with_status(Box::new(status_tx));
        (car, status_rx)
    }

    fn pending(car: &ElevatorCar) -> Vec<i32> {
        car.pending_stops().collect()
    }

    #[test]
    fn test_car_init() {
        // Purpose: Verify that a fresh car waits at the bottom floor with closed doors

        // Arrange & Act
        let (car, status_rx) = setup_car();

        // Assert
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.direction(), Idle);
        assert_eq!(car.door_state(), Closed);
        assert!(pending(&car).is_empty());
        assert!(status_rx.try_recv().is_err());
    }

    #[test]
    fn test_out_of_range_requests_are_ignored() {
        for floor in [6, 0, -1, 100, i32::MIN, i32::MAX] {
            // Arrange
            let (mut car, status_rx) = setup_car();

            // Act
            car.request_floor(floor);
            car.process_next_stop();
            car.process_next_stop();

            // Assert
            assert_eq!(car.current_floor(), 1, "floor {} moved the car", floor);
            assert_eq!(car.direction(), Idle);
            assert_eq!(car.door_state(), Closed);
            assert!(pending(&car).is_empty());
            assert!(status_rx.try_recv().is_err());
        }
    }

    #[test]
    fn test_single_request() {
        // Arrange
        let (mut car, _status_rx) = setup_car();

        // Act
        car.request_floor(3);
        car.process_next_stop();

        // Assert
        assert_eq!(car.current_floor(), 3);
        assert_eq!(car.door_state(), Open);
        assert_eq!(car.direction(), Idle);
        assert!(pending(&car).is_empty());
    }

    #[test]
    fn test_nearest_ascending_stop_first() {
        // Purpose: From floor 1, requests for 5 then 2 are served as 2 then 5

        // Arrange
        let (mut car, _status_rx) = setup_car();
        car.request_floor(5);
        car.request_floor(2);
        assert_eq!(pending(&car), vec![2, 5]);

        // Act
        car.process_next_stop();
        let first_stop = car.current_floor();
        let first_direction = car.direction();
        car.process_next_stop();
        let second_stop = car.current_floor();

        // Assert
        assert_eq!(first_stop, 2);
        assert_eq!(first_direction, Up);
        assert_eq!(second_stop, 5);
        assert!(pending(&car).is_empty());
        assert_eq!(car.direction(), Idle);
        assert_eq!(car.door_state(), Open);
    }

    #[test]
    fn test_duplicate_request_is_one_stop() {
        // Arrange
        let (mut car, status_rx) = setup_car();

        // Act
        car.request_floor(4);
        car.request_floor(4);
        car.process_next_stop();
        car.process_next_stop();

        // Assert
        assert_eq!(car.current_floor(), 4);
        let arrivals = status_rx
            .try_iter()
            .filter(|event| matches!(event, CarEvent::DoorsOpened(_)))
            .count();
        assert_eq!(arrivals, 1);
    }

    #[test]
    fn test_request_current_floor_services_in_place() {
        // Purpose: A stop at the current floor is served without any transit

        // Arrange
        let (mut car, status_rx) = setup_car();
        car.request_floor(3);
        car.process_next_stop();
        let _ = status_rx.try_iter().count();

        // Act
        car.request_floor(3);
        assert_eq!(car.direction(), Down);
        car.process_next_stop();

        // Assert
        assert_eq!(car.current_floor(), 3);
        assert_eq!(car.door_state(), Open);
        assert_eq!(car.direction(), Idle);
        assert!(pending(&car).is_empty());
        let events: Vec<CarEvent> = status_rx.try_iter().collect();
        assert_eq!(events, vec![CarEvent::DoorsClosing, CarEvent::DoorsOpened(3)]);
    }

    #[test]
    fn test_current_floor_waits_behind_lower_stop() {
        // Purpose: Heading down, a lower stop is served before the stop at the current floor

        // Arrange
        let (mut car, _status_rx) = setup_car();
        car.request_floor(3);
        car.process_next_stop();

        // Act
        car.request_floor(3);
        car.request_floor(1);
        car.request_floor(5);
        assert_eq!(car.direction(), Down);
        car.process_next_stop();

        // Assert
        assert_eq!(car.current_floor(), 1);
        assert_eq!(pending(&car), vec![3, 5]);
        assert_eq!(car.direction(), Up);

        car.process_next_stop();
        assert_eq!(car.current_floor(), 3);
        assert_eq!(pending(&car), vec![5]);
    }

    #[test]
    fn test_extreme_floors() {
        // Arrange
        let (mut car, _status_rx) = setup_car();

        // Act & Assert
        car.request_floor(5);
        car.process_next_stop();
        assert_eq!(car.current_floor(), 5);
        assert_eq!(car.door_state(), Open);

        car.request_floor(1);
        assert_eq!(car.direction(), Down);
        car.process_next_stop();
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.door_state(), Open);
        assert_eq!(car.direction(), Idle);
    }

    #[test]
    fn test_down_direction_continues_down() {
        // Purpose: Heading down from 4 with stops at 2 and 5, the car serves 2 before reversing to 5

        // Arrange
        let (mut car, _status_rx) = setup_car();
        car.request_floor(4);
        car.process_next_stop();
        car.request_floor(2);
        car.request_floor(5);
        assert_eq!(car.direction(), Down);

        // Act
        car.process_next_stop();
        let first_stop = car.current_floor();
        let direction_after_first = car.direction();
        car.process_next_stop();

        // Assert
        assert_eq!(first_stop, 2);
        assert_eq!(direction_after_first, Up);
        assert_eq!(car.current_floor(), 5);
        assert_eq!(car.direction(), Idle);
    }

    #[test]
    fn test_direction_after_request() {
        // Purpose: The direction follows the lowest pending stop only

        // Arrange
        let (mut car, _status_rx) = setup_car();
        car.request_floor(3);
        car.process_next_stop();

        // Act & Assert
        car.request_floor(5);
        assert_eq!(car.direction(), Up);
        car.request_floor(2);
        assert_eq!(car.direction(), Down);
        assert_eq!(car.door_state(), Open);
    }

    #[test]
    fn test_events_for_single_trip() {
        // Arrange
        let (mut car, status_rx) = setup_car();

        // Act
        car.request_floor(3);
        car.process_next_stop();

        // Assert
        let events: Vec<CarEvent> = status_rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                CarEvent::DoorsClosing,
                CarEvent::FloorReached { floor: 2, direction: Up },
                CarEvent::FloorReached { floor: 3, direction: Up },
                CarEvent::DoorsOpened(3),
            ]
        );
    }

    #[test]
    fn test_step_delay_per_floor() {
        // Arrange
        let pauses = Arc::new(AtomicUsize::new(0));
        let mut car = ElevatorCar::new(&ElevatorConfig::default())
            .with_step_delay(Box::new(CountingDelay(pauses.clone())));

        // Act
        car.request_floor(4);
        car.process_next_stop();
        car.request_floor(2);
        car.process_next_stop();

        // Assert
        assert_eq!(pauses.load(Ordering::SeqCst), 5);
        assert_eq!(car.current_floor(), 2);
    }

    #[test]
    fn test_process_without_stops() {
        // Arrange
        let (mut car, status_rx) = setup_car();

        // Act
        car.process_next_stop();

        // Assert
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.direction(), Idle);
        assert_eq!(car.door_state(), Closed);
        assert!(status_rx.try_recv().is_err());
    }

    #[test]
    fn test_custom_floor_range() {
        // Arrange
        let config = ElevatorConfig {
            min_floor: -1,
            max_floor: 2,
            step_delay_ms: 0,
        };
        let mut car = ElevatorCar::new(&config);
        assert_eq!(car.current_floor(), -1);

        // Act
        car.request_floor(3);
        car.request_floor(0);
        car.process_next_stop();

        // Assert
        assert_eq!(car.current_floor(), 0);
        assert!(pending(&car).is_empty());

        let state = car.state();
        assert_eq!(state.floor, 0);
        assert_eq!(state.doors, Open);
        assert!(state.pending_stops.is_empty());
    }
}

/// ----- DISPATCHER MODULE -----
/// Picks the elevator of a column that answers a hall call. Candidates
/// are grouped in tiers, tried in order:
///   1. moving towards the floor in the requested direction
///   2. idle
///   3. moving towards the floor in either direction
///   4. anyone
/// Within the first non-empty tier the nearest car wins, the first in
/// roster order on a tie. A car whose doors are stuck open only shows up
/// in the last tier.

use elevator::Elevator;
use shared_resources::call::Direction;
use shared_resources::error::DispatchError;
use shared_resources::floor::Floor;
use shared_resources::status::ElevatorStatus;

/// Moving and has not yet passed `floor`.
fn on_the_way(elevator: &Elevator, floor: Floor) -> bool {
    match elevator.status {
        ElevatorStatus::Up => elevator.floor <= floor,
        ElevatorStatus::Down => elevator.floor >= floor,
        ElevatorStatus::Idle => false,
    }
}

fn nearest(elevators: &[Elevator], floor: Floor, eligible: &dyn Fn(&Elevator) -> bool) -> Option<usize> {
    elevators
        .iter()
        .enumerate()
        .filter(|(_, elevator)| eligible(elevator))
        .min_by_key(|(_, elevator)| (elevator.floor - floor).abs())
        .map(|(index, _)| index)
}

/// Index in `elevators` of the car to send to `requested_floor`.
pub fn select_elevator(
    column: char,
    elevators: &[Elevator],
    requested_floor: Floor,
    direction: Direction,
) -> Result<usize, DispatchError> {
    let same_direction = |elevator: &Elevator| {
        !elevator.doors_open()
            && on_the_way(elevator, requested_floor)
            && elevator.status.direction() == Some(direction)
    };
    let idle = |elevator: &Elevator| !elevator.doors_open() && elevator.status == ElevatorStatus::Idle;
    let passing = |elevator: &Elevator| !elevator.doors_open() && on_the_way(elevator, requested_floor);
    let anyone = |_: &Elevator| true;

    let tiers: [&dyn Fn(&Elevator) -> bool; 4] = [&same_direction, &idle, &passing, &anyone];
    tiers
        .iter()
        .find_map(|eligible| nearest(elevators, requested_floor, *eligible))
        .ok_or(DispatchError::NoElevator { column })
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevator::ScriptedSensor;
    use shared_resources::config::ElevatorSettings;
    use shared_resources::event::discard;

    fn roster(cars: &[(Floor, ElevatorStatus)]) -> Vec<Elevator> {
        cars.iter()
            .enumerate()
            .map(|(index, (floor, status))| {
                let mut elevator = Elevator::new(index as u32 + 1, 'B', 1, 20, ElevatorSettings::instant(), discard());
                elevator.place(*floor, *status).unwrap();
                elevator
            })
            .collect()
    }

    #[test]
    fn empty_roster_cannot_dispatch() {
        assert_eq!(
            select_elevator('B', &[], 3, Direction::Up),
            Err(DispatchError::NoElevator { column: 'B' })
        );
    }

    #[test]
    fn same_direction_mover_beats_a_closer_idle_car() {
        let cars = roster(&[(5, ElevatorStatus::Idle), (2, ElevatorStatus::Up)]);
        assert_eq!(select_elevator('B', &cars, 6, Direction::Up), Ok(1));
    }

    #[test]
    fn idle_car_beats_an_opposite_mover_at_equal_distance() {
        let cars = roster(&[(8, ElevatorStatus::Down), (2, ElevatorStatus::Idle)]);
        assert_eq!(select_elevator('B', &cars, 5, Direction::Up), Ok(1));
    }

    #[test]
    fn mover_that_passed_the_floor_is_not_on_the_way() {
        let cars = roster(&[(9, ElevatorStatus::Up), (14, ElevatorStatus::Down)]);
        assert_eq!(select_elevator('B', &cars, 7, Direction::Up), Ok(1));
    }

    #[test]
    fn falls_back_to_the_nearest_car_when_nobody_fits() {
        let cars = roster(&[(15, ElevatorStatus::Up), (9, ElevatorStatus::Up)]);
        assert_eq!(select_elevator('B', &cars, 4, Direction::Down), Ok(1));
    }

    #[test]
    fn tiers_rank_same_direction_then_idle_then_opposite() {
        let cars = roster(&[(7, ElevatorStatus::Down), (7, ElevatorStatus::Idle), (3, ElevatorStatus::Up)]);
        assert_eq!(select_elevator('B', &cars, 5, Direction::Up), Ok(2));
        assert_eq!(select_elevator('B', &cars[..2], 5, Direction::Up), Ok(1));
        assert_eq!(select_elevator('B', &cars[..1], 5, Direction::Up), Ok(0));
    }

    #[test]
    fn car_with_jammed_doors_is_a_last_resort() {
        let mut cars = roster(&[(6, ElevatorStatus::Up), (12, ElevatorStatus::Idle)]);
        cars[0].set_sensor(ScriptedSensor::new().stuck_obstruction());
        assert!(cars[0].open_doors().is_err());
        assert_eq!(select_elevator('B', &cars, 7, Direction::Up), Ok(1));
        assert_eq!(select_elevator('B', &cars[..1], 7, Direction::Up), Ok(0));
    }

    #[test]
    fn first_in_roster_wins_a_tie() {
        let cars = roster(&[(3, ElevatorStatus::Idle), (7, ElevatorStatus::Idle), (3, ElevatorStatus::Idle)]);
        assert_eq!(select_elevator('B', &cars, 5, Direction::Up), Ok(0));
    }

    #[test]
    fn commercial_column_b_sends_the_car_at_floor_six() {
        let cars = roster(&[
            (20, ElevatorStatus::Down),
            (3, ElevatorStatus::Up),
            (13, ElevatorStatus::Down),
            (15, ElevatorStatus::Down),
            (6, ElevatorStatus::Down),
        ]);
        assert_eq!(select_elevator('B', &cars, 1, Direction::Up), Ok(4));
    }
}

use std::fmt;

use crate::floor::{is_real, Floor};

/// Pending stop floors of one elevator.
///
/// Always strictly ascending, whatever direction the car travels in.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestQueue {
    floors: Vec<Floor>,
}

impl RequestQueue {
    pub fn new() -> Self {
        RequestQueue { floors: Vec::new() }
    }

    /// Inserts `floor` unless it is already queued or is not a real floor.
    /// Returns whether it was added.
    pub fn add_floor(&mut self, floor: Floor) -> bool {
        if !is_real(floor) {
            return false;
        }
        match self.floors.binary_search(&floor) {
            Ok(_) => false,
            Err(index) => {
                self.floors.insert(index, floor);
                true
            }
        }
    }

    /// Removes `floor` if present. Returns whether it was queued.
    pub fn delete_floor(&mut self, floor: Floor) -> bool {
        match self.floors.binary_search(&floor) {
            Ok(index) => {
                self.floors.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.binary_search(&floor).is_ok()
    }

    pub fn lowest(&self) -> Option<Floor> {
        self.floors.first().copied()
    }

    pub fn highest(&self) -> Option<Floor> {
        self.floors.last().copied()
    }

    /// Queued floor closest to `floor`, the lower one on a tie.
    pub fn nearest_to(&self, floor: Floor) -> Option<Floor> {
        let mut nearest: Option<Floor> = None;
        for candidate in &self.floors {
            match nearest {
                Some(best) if (best - floor).abs() <= (candidate - floor).abs() => (),
                _ => nearest = Some(*candidate),
            }
        }
        nearest
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }
}

impl fmt::Display for RequestQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let floors: Vec<String> = self.floors.iter().map(|floor| floor.to_string()).collect();
        write!(f, "[{}]", floors.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn floors_stay_sorted_whatever_the_insertion_order() {
        let mut queue = RequestQueue::new();
        for floor in [15, 2, -3, 7, 1] {
            assert!(queue.add_floor(floor));
        }
        assert_eq!(queue.as_slice(), &[-3, 1, 2, 7, 15]);
        assert_eq!(queue.lowest(), Some(-3));
        assert_eq!(queue.highest(), Some(15));
    }

    #[test]
    fn adding_twice_is_the_same_as_adding_once() {
        let mut once = RequestQueue::new();
        once.add_floor(5);
        let mut twice = RequestQueue::new();
        twice.add_floor(5);
        assert!(!twice.add_floor(5));
        assert_eq!(once, twice);
    }

    #[test]
    fn deleting_a_missing_floor_changes_nothing() {
        let mut queue = RequestQueue::new();
        queue.add_floor(3);
        assert!(!queue.delete_floor(4));
        assert!(queue.delete_floor(3));
        assert!(queue.is_empty());
        assert_eq!(queue.lowest(), None);
    }

    #[test]
    fn floor_zero_is_never_queued() {
        let mut queue = RequestQueue::new();
        assert!(!queue.add_floor(0));
        assert!(queue.is_empty());
        assert!(!queue.contains(0));
    }

    #[test]
    fn nearest_prefers_the_lower_floor_on_a_tie() {
        let mut queue = RequestQueue::new();
        queue.add_floor(2);
        queue.add_floor(8);
        assert_eq!(queue.nearest_to(5), Some(2));
        assert_eq!(queue.nearest_to(7), Some(8));
        assert_eq!(RequestQueue::new().nearest_to(1), None);
    }

    #[test]
    fn displays_as_a_list() {
        let mut queue = RequestQueue::new();
        queue.add_floor(4);
        queue.add_floor(-1);
        assert_eq!(queue.to_string(), "[-1, 4]");
    }

    proptest! {
        #[test]
        fn queue_is_strictly_ascending_after_any_operations(
            ops in proptest::collection::vec((any::<bool>(), -10i32..60), 0..64)
        ) {
            let mut queue = RequestQueue::new();
            for (add, floor) in ops {
                if add {
                    queue.add_floor(floor);
                } else {
                    queue.delete_floor(floor);
                }
                prop_assert!(queue.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
                prop_assert!(!queue.contains(0));
            }
        }
    }
}

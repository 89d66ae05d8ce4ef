use super::entity::EntityId;

/// Monotonic id source for one collection.
///
/// Ids are derived from the wall clock but never go backwards: the next id is
/// the larger of `last + 1` and the clock reading, so two adds within the same
/// millisecond still get distinct ids and a deleted id is never handed out
/// again after a restart. Once `last` reaches `EntityId::MAX` the sequence is
/// exhausted and `next` yields `None` instead of repeating an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    last: EntityId,
}

impl IdSequence {
    /// Seeds the sequence from the ids already present in a collection.
    pub fn from_existing(ids: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            last: ids.into_iter().max().unwrap_or(0),
        }
    }

    pub fn last(&self) -> EntityId {
        self.last
    }

    pub fn next(&mut self, now_millis: i64) -> Option<EntityId> {
        let id = self.last.checked_add(1)?.max(now_millis);
        self.last = id;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_start_after_max_existing_id() {
        let mut sequence = IdSequence::from_existing([3, 1, 2]);
        assert_eq!(sequence.last(), 3);
        assert_eq!(sequence.next(0), Some(4));
    }

    #[test]
    fn should_start_from_zero_when_collection_is_empty() {
        let mut sequence = IdSequence::from_existing(Vec::new());
        assert_eq!(sequence.next(0), Some(1));
    }

    #[test]
    fn should_follow_clock_when_it_is_ahead() {
        let mut sequence = IdSequence::from_existing([1, 2, 3]);
        assert_eq!(sequence.next(1_700_000_000_000), Some(1_700_000_000_000));
    }

    #[test]
    fn should_not_collide_within_the_same_millisecond() {
        let mut sequence = IdSequence::from_existing([1]);
        let first = sequence.next(1_700_000_000_000).unwrap();
        let second = sequence.next(1_700_000_000_000).unwrap();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn should_stop_instead_of_repeating_at_max_id() {
        let mut sequence = IdSequence::from_existing([EntityId::MAX - 1]);

        assert_eq!(sequence.next(0), Some(EntityId::MAX));
        assert_eq!(sequence.next(0), None);
        assert_eq!(sequence.next(EntityId::MAX), None);
        assert_eq!(sequence.last(), EntityId::MAX);
    }

    proptest! {
        #[test]
        fn ids_are_strictly_increasing_for_any_clock(
            start in 0i64..1_000_000,
            readings in proptest::collection::vec(0i64..2_000_000, 1..64),
        ) {
            let mut sequence = IdSequence::from_existing([start]);
            let mut previous = start;
            for now in readings {
                let id = sequence.next(now).unwrap();
                prop_assert!(id > previous);
                previous = id;
            }
        }
    }
}

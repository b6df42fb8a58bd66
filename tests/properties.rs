//! Property-based tests for the map, the clue index and the registry

use detective_quest::game::{Command, Script};
use detective_quest::suspects::{bucket_of, BUCKETS};
use detective_quest::{ClueIndex, Direction, InvestigationSession, RoomMap, SuspectRegistry};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::Go(Direction::Left)),
        4 => Just(Command::Go(Direction::Right)),
        1 => Just(Command::Stop),
    ]
}

proptest! {
    #[test]
    fn navigation_stays_inside_the_map(commands in prop::collection::vec(arbitrary_command(), 0..12)) {
        let map = RoomMap::build().unwrap();
        let known: BTreeSet<&str> = map.rooms().map(|r| r.name.as_str()).collect();
        let mut session = InvestigationSession::new(&map);
        let mut script = Script::new(commands);
        session.run(&mut script);

        for discovery in session.journal() {
            prop_assert!(known.contains(discovery.room.as_str()));
        }
        // Three levels: at most the root plus two moves collect clues
        prop_assert!(session.journal().len() <= 3);
    }

    #[test]
    fn clue_listing_is_sorted_and_unique(texts in prop::collection::vec("[a-zA-Z ]{0,8}", 0..60)) {
        let mut index = ClueIndex::new();
        for text in &texts {
            index.insert(text);
        }
        let listed: Vec<&str> = index.iter().collect();
        let expected: Vec<&str> = texts.iter().map(String::as_str).collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(listed, expected);
        prop_assert_eq!(index.len(), texts.iter().collect::<BTreeSet<_>>().len());
    }

    #[test]
    fn same_text_many_times_is_one_entry(text in "[a-z]{1,12}", times in 1usize..20) {
        let mut index = ClueIndex::new();
        for _ in 0..times {
            index.insert(&text);
        }
        prop_assert_eq!(index.iter().collect::<Vec<_>>(), vec![text.as_str()]);
    }

    #[test]
    fn every_attribution_counts(calls in prop::collection::vec(("[A-Z][a-z]{0,6}", "[a-z]{1,5}"), 0..40)) {
        let mut registry = SuspectRegistry::new();
        let mut expected: HashMap<&str, usize> = HashMap::new();
        for (suspect, clue) in &calls {
            registry.attribute(suspect, clue);
            *expected.entry(suspect.as_str()).or_default() += 1;
        }

        prop_assert_eq!(registry.len(), expected.len());
        for (name, count) in &expected {
            let suspect = registry.find(name).unwrap();
            prop_assert_eq!(suspect.clue_count(), *count);
            prop_assert_eq!(suspect.clues().count(), *count);
        }
        for index in 0..BUCKETS {
            for suspect in registry.bucket(index) {
                prop_assert_eq!(bucket_of(suspect.name()), index);
            }
        }

        match registry.most_likely() {
            None => prop_assert!(calls.is_empty()),
            Some(verdict) => {
                let max = expected.values().copied().max().unwrap();
                prop_assert_eq!(verdict.clue_count, max);
                let first = registry.iter().find(|s| s.clue_count() == max).unwrap();
                prop_assert_eq!(verdict.suspect.as_str(), first.name());
            }
        }
    }
}

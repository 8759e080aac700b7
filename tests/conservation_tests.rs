//! Card conservation under arbitrary action sequences.
//!
//! No card instance is ever duplicated or lost, whatever clients throw
//! at the engine. Driven as a property test over random action scripts,
//! with the clock advanced one second per step so challenge windows
//! open and resolve naturally.

use std::time::{Duration, Instant};

use proptest::prelude::*;

use jupai::{
    standard_catalog, Action, InstanceId, PlayerId, Room, RoomId, Selection, TurnEngine,
};

/// A compressed random action: kind, submitting seat, index payload.
#[derive(Clone, Debug)]
struct Step {
    kind: u8,
    seat: u8,
    index: u8,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    (0u8..8, 0u8..3, 0u8..12).prop_map(|(kind, seat, index)| Step { kind, seat, index })
}

fn decode(step: &Step) -> Action {
    match step.kind {
        0 => Action::DrawDeck,
        1 => Action::DrawDiscard,
        2 => Action::Skip,
        3 => Action::Discard {
            hand_index: step.index as usize,
        },
        4 => Action::Sort,
        5 => Action::meld([
            Selection::Hand(step.index as usize),
            Selection::Hand(step.index as usize + 1),
        ]),
        6 => Action::Challenge,
        _ => Action::Vote {
            accept: step.index % 2 == 0,
        },
    }
}

/// Three-player room dealt from the full manifest cycle.
fn dealt_room(engine: &TurnEngine, seed: u64) -> Room {
    let mut room = Room::new(RoomId::new(1), seed);
    room.add_player("Ana", true);
    room.add_player("Bella", false);
    room.add_player("Cleo", false);

    let tokens = jupai::catalog::deck_tokens(engine.registry(), 40);
    let mut cards: Vec<_> = tokens.into_iter().map(|t| room.mint(t)).collect();
    room.rng.shuffle(&mut cards);

    let mut cards = cards.into_iter();
    for seat in 0..3 {
        room.players[seat].hand = cards.by_ref().take(8).collect();
    }
    if let Some(first) = cards.next() {
        room.discard_pile.push_front(first);
    }
    room.draw_deck = cards.collect();
    room.locked = true;
    room
}

fn instance_ids(room: &Room) -> Vec<InstanceId> {
    let mut ids: Vec<InstanceId> = room.all_instances().map(|c| c.instance).collect();
    ids.sort();
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No hand-only action script can duplicate or lose a card.
    #[test]
    fn conservation_under_random_scripts(
        seed in 0u64..1000,
        steps in proptest::collection::vec(step_strategy(), 1..60),
    ) {
        let mut engine = TurnEngine::sandbox(standard_catalog());
        let mut room = dealt_room(&engine, seed);
        let initial = instance_ids(&room);
        let mut now = Instant::now();

        for step in &steps {
            let action = decode(step);
            engine.apply(&mut room, PlayerId::new(step.seat), &action, now);
            prop_assert!(room.check_integrity().is_ok());

            // These scripts never touch the shelf, so the instance
            // multiset must be exactly the dealt one.
            prop_assert_eq!(instance_ids(&room), initial.clone());

            now += Duration::from_secs(1);
            engine.tick(&mut room, now);
            prop_assert!(room.check_integrity().is_ok());
            prop_assert_eq!(instance_ids(&room), initial.clone());
        }
    }

    /// Scores only ever go up, whatever happens.
    #[test]
    fn scores_are_monotone(
        seed in 0u64..1000,
        steps in proptest::collection::vec(step_strategy(), 1..60),
    ) {
        let mut engine = TurnEngine::sandbox(standard_catalog());
        let mut room = dealt_room(&engine, seed);
        let mut high_water = vec![0u32; 3];
        let mut now = Instant::now();

        for step in &steps {
            let action = decode(step);
            engine.apply(&mut room, PlayerId::new(step.seat), &action, now);
            now += Duration::from_secs(1);
            engine.tick(&mut room, now);

            for seat in 0..3 {
                prop_assert!(room.players[seat].score >= high_water[seat]);
                high_water[seat] = room.players[seat].score;
            }
        }
    }
}

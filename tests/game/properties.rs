//! Property tests over random command sequences.

use proptest::prelude::*;
use zuul_foundation::Weight;
use zuul_runtime::{Game, GameConfig};
use zuul_storage::campus::ITEMS;

fn command() -> impl Strategy<Value = String> {
    let verbs = prop::sample::select(vec!["go", "take", "drop", "look", "inventory", "help", "dance"]);
    let objects = prop::sample::select(vec![
        "", "north", "south", "east", "west", "up", "down", "key", "torch", "book", "map",
        "poster", "mug", "sandwich", "laptop", "notebook", "flower", "KEY", "unicorn",
    ]);
    (verbs, objects).prop_map(|(verb, object)| format!("{verb} {object}"))
}

fn item_count(game: &Game) -> usize {
    let in_rooms: usize = game.world().rooms().map(|(_, room)| room.items().count()).sum();
    in_rooms + game.inventory().len()
}

proptest! {
    #[test]
    fn carried_weight_never_exceeds_limit(
        limit in 0u32..5000,
        commands in prop::collection::vec(command(), 0..80),
    ) {
        let config = GameConfig::default().with_max_carry_weight(Weight::grams(limit));
        let mut game = Game::new(&config).unwrap();
        for line in &commands {
            game.execute(line);
            prop_assert!(game.inventory().total_weight() <= Weight::grams(limit));
        }
    }

    #[test]
    fn items_are_never_lost_or_duplicated(commands in prop::collection::vec(command(), 0..80)) {
        let mut game = Game::new(&GameConfig::default()).unwrap();
        for line in &commands {
            game.execute(line);
            prop_assert_eq!(item_count(&game), ITEMS.len());

            for (_, name, _, _) in ITEMS {
                let carried = usize::from(game.inventory().contains(name));
                let placed = game
                    .world()
                    .rooms()
                    .filter(|(_, room)| room.item(name).is_some())
                    .count();
                prop_assert_eq!(carried + placed, 1, "{} is in {} places", name, carried + placed);
            }
        }
    }

    #[test]
    fn game_keeps_running_without_bare_quit(commands in prop::collection::vec(command(), 0..80)) {
        let mut game = Game::new(&GameConfig::default()).unwrap();
        for line in &commands {
            let response = game.execute(line);
            prop_assert!(!response.is_terminated());
        }
        prop_assert!(game.execute("quit please").text() == "Quit what?");
        prop_assert!(game.is_running());
    }

    #[test]
    fn any_line_leaves_player_somewhere(line in "\\PC{0,40}") {
        let mut game = Game::new(&GameConfig::default()).unwrap();
        game.execute(&line);
        prop_assert!(game.location().is_ok());
    }
}

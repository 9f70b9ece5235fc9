use proptest::prelude::*;

use zuul::Game;
use zuul::engine::Output;

fn transcript(lines: &[String]) -> (Vec<Output>, String) {
    let mut game = Game::campus().unwrap();
    let mut outputs = Vec::new();
    for line in lines {
        let (out, quit) = game.step(line);
        outputs.push(out);
        if quit {
            break;
        }
    }
    let room = game
        .world()
        .room_key(game.current_room())
        .unwrap()
        .to_string();
    (outputs, room)
}

fn command_line() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "go", "look", "eat", "help", "quit", "Go", "run", "",
    ]);
    let seconds = prop::option::of(prop::sample::select(vec![
        "north", "south", "east", "west", "up", "down", "northeast", "northwest",
        "southwest", "foo",
    ]));
    (words, seconds).prop_map(|(w, s)| match s {
        Some(s) => format!("{w} {s}"),
        None => w.to_string(),
    })
}

#[test]
fn round_trip_east_then_west() {
    let mut game = Game::campus().unwrap();
    let (before, _) = game.step("look");
    let (theater, _) = game.step("go east");
    assert_eq!(
        theater.lines(),
        vec!["You are in a lecture theater.\nExits: west east southwest"]
    );
    let (back, _) = game.step("go west");
    assert_eq!(back, before);
}

#[test]
fn full_session_over_buffers() {
    let mut game = Game::campus().unwrap();
    let input = "help\ngo\ngo up\ngo west\ngo west\ngo down\nlook\nquit please\nquit\n";
    let mut buf = Vec::new();
    game.play(input.as_bytes(), &mut buf).unwrap();

    let expected = "\n\
Welcome to the World of Zuul!\n\
World of Zuul is a new, incredibly boring adventure game.\n\
Type 'help' if you need help.\n\
\n\
You are outside the main entrance of the university.\n\
Exits: east south west\n\
> You are lost. You are alone. You wander\n\
around at the university.\n\
\n\
Your command words are:\n\
go look eat help quit\n\
> Go where?\n\
> There is no door!\n\
> You are in the campus pub. there is a pint of beer, weight = light\n\
Exits: east west southwest\n\
> You are in the campus kitchen.\n\
Exits: south east down\n\
> You are in the pantry.\n\
Exits: up\n\
> You are in the pantry.\n\
Exits: up\n\
> Quit what?\n\
> Thank you for playing.  Good bye.\n";

    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn garbled_bytes_do_not_end_the_session() {
    let mut game = Game::campus().unwrap();
    let mut buf = Vec::new();
    game.play(&b"go \xff\xfe\n\xff\nlook\nquit\n"[..], &mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let after_banner = text.split_once("Exits: east south west\n").unwrap().1;
    assert_eq!(
        after_banner,
        "> There is no door!\n\
> I don't know what you mean...\n\
> You are outside the main entrance of the university.\n\
Exits: east south west\n\
> Thank you for playing.  Good bye.\n"
    );
    assert_eq!(game.world().room_key(game.current_room()), Some("outside"));
}

#[test]
fn jail_has_no_way_out() {
    let mut game = Game::campus().unwrap();
    for line in ["go south", "go east"] {
        game.step(line);
    }
    let (office, _) = game.step("look");
    assert_eq!(
        office.lines(),
        vec!["You are in the security office. there is security baton, weight = medium\nExits: west east"]
    );

    let (jail, _) = game.step("go east");
    assert_eq!(
        jail.lines(),
        vec!["You are in the campus jail. You need a key to get out.\nExits:"]
    );
    let (out, _) = game.step("go west");
    assert_eq!(out.lines(), vec!["There is no door!"]);
}

proptest! {
    #[test]
    fn replay_is_deterministic(lines in prop::collection::vec(command_line(), 0..40)) {
        let first = transcript(&lines);
        let second = transcript(&lines);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn look_is_idempotent(lines in prop::collection::vec(command_line(), 0..30)) {
        let mut game = Game::campus().unwrap();
        for line in &lines {
            let (_, quit) = game.step(line);
            if quit {
                break;
            }
        }
        let (a, _) = game.step("look");
        let (b, _) = game.step("look");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn moves_only_along_registered_exits(lines in prop::collection::vec(command_line(), 0..40)) {
        let mut game = Game::campus().unwrap();
        for line in &lines {
            let before = game.current_room();
            let (out, quit) = game.step(line);
            if quit {
                break;
            }
            let after = game.current_room();
            if before != after {
                let direction = line.split_whitespace().nth(1).unwrap();
                prop_assert!(line.starts_with("go "));
                prop_assert_eq!(game.world().room(before).exit(direction), Some(after));
            } else if line.starts_with("go ") {
                prop_assert_eq!(out.lines(), vec!["There is no door!".to_string()]);
            }
        }
    }

    #[test]
    fn unknown_words_never_move(word in "[A-Z][a-z]{0,8}", second in prop::option::of("[a-z]{1,8}")) {
        let mut game = Game::campus().unwrap();
        let line = match second {
            Some(s) => format!("{word} {s}"),
            None => word,
        };
        let start = game.current_room();
        let (out, quit) = game.step(&line);
        prop_assert!(!quit);
        prop_assert_eq!(out.lines(), vec!["I don't know what you mean...".to_string()]);
        prop_assert_eq!(game.current_room(), start);
    }
}

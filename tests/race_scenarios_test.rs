//! End-to-end race scenarios driven through the facade API.

use std::io::Cursor;

use keyrace::core::{
    Flow, GameError, LineWords, ListWords, PlayerState, Session, SessionConfig, WordSource,
};
use keyrace::types::{DeviceId, KeyToken, Phase, Renderable};

const A: DeviceId = DeviceId(4);
const B: DeviceId = DeviceId(9);
const C: DeviceId = DeviceId(17);

fn type_str<W: WordSource>(s: &mut Session, words: &mut W, device: DeviceId, text: &str) -> Flow {
    let mut flow = Flow::Continue;
    for c in text.chars() {
        flow = s.handle_key(device, KeyToken::Char(c), words).unwrap();
    }
    flow
}

fn enter_lobby<W: WordSource>(s: &mut Session, words: &mut W, players: &[(DeviceId, &str)]) -> Flow {
    for (device, name) in players {
        type_str(s, words, *device, name);
    }
    let mut flow = Flow::Continue;
    for (device, _) in players {
        flow = s.handle_key(*device, KeyToken::Confirm, words).unwrap();
    }
    flow
}

fn scores(s: &Session) -> Vec<u32> {
    s.players().iter().map(PlayerState::score).collect()
}

#[test]
fn two_players_two_words() {
    let mut words = ListWords::new(["cat", "dog"]);
    let mut s = Session::new(SessionConfig::default());
    enter_lobby(&mut s, &mut words, &[(A, "p1"), (B, "p2")]);
    assert_eq!(s.phase(), Phase::Racing);

    type_str(&mut s, &mut words, A, "cat");
    assert_eq!(scores(&s), vec![1, 0]);

    let flow = type_str(&mut s, &mut words, B, "dog");
    assert_eq!(flow, Flow::Finished);
    assert_eq!(scores(&s), vec![1, 1]);
}

#[test]
fn words_from_a_text_stream() {
    let mut words = LineWords::new(Cursor::new("ab\ncd\n"));
    let mut s = Session::new(SessionConfig::default());
    enter_lobby(&mut s, &mut words, &[(A, "solo")]);

    assert_eq!(s.target_word(), "ab");
    type_str(&mut s, &mut words, A, "ab");
    assert_eq!(s.target_word(), "cd");
    assert_eq!(type_str(&mut s, &mut words, A, "cd"), Flow::Finished);
}

#[test]
fn empty_word_list_goes_straight_to_finished() {
    let mut words = ListWords::default();
    let mut s = Session::new(SessionConfig::default());
    let flow = enter_lobby(&mut s, &mut words, &[(A, "x"), (B, "y")]);

    assert_eq!(flow, Flow::Finished);
    assert_eq!(s.phase(), Phase::Finished);
    assert_eq!(scores(&s), vec![0, 0]);
}

#[test]
fn third_keyboard_beyond_two_slots_is_capacity_error() {
    let mut words = ListWords::new(["w"]);
    let mut s = Session::new(SessionConfig { max_players: 2 });
    type_str(&mut s, &mut words, A, "a");
    type_str(&mut s, &mut words, B, "b");

    let err = s.handle_key(C, KeyToken::Char('c'), &mut words).unwrap_err();
    assert!(matches!(err, GameError::CapacityExceeded { max_players: 2 }));
    assert_eq!(err.to_string(), "too many players: all 2 slots are taken");
}

#[test]
fn late_joiner_blocks_race_start_until_ready() {
    let mut words = ListWords::new(["w"]);
    let mut s = Session::new(SessionConfig::default());
    type_str(&mut s, &mut words, A, "a");
    type_str(&mut s, &mut words, B, "b");
    s.handle_key(A, KeyToken::Confirm, &mut words).unwrap();
    s.handle_key(B, KeyToken::Confirm, &mut words).unwrap();
    // Both ready: the race has begun, C can no longer join.
    assert_eq!(s.phase(), Phase::Racing);
    assert!(matches!(
        s.handle_key(C, KeyToken::Char('w'), &mut words),
        Err(GameError::IllegalJoin { .. })
    ));
}

#[test]
fn late_joiner_in_lobby_resets_convergence() {
    let mut words = ListWords::new(["w"]);
    let mut s = Session::new(SessionConfig::default());
    type_str(&mut s, &mut words, A, "a");
    type_str(&mut s, &mut words, B, "b");
    s.handle_key(A, KeyToken::Confirm, &mut words).unwrap();

    // C arrives before B confirms.
    type_str(&mut s, &mut words, C, "c");
    s.handle_key(B, KeyToken::Confirm, &mut words).unwrap();
    assert_eq!(s.phase(), Phase::Lobby);

    s.handle_key(C, KeyToken::Confirm, &mut words).unwrap();
    assert_eq!(s.phase(), Phase::Racing);
    assert_eq!(s.players().len(), 3);
}

#[test]
fn same_keyboard_is_always_the_same_player() {
    let mut words = ListWords::new(["ok", "ok"]);
    let mut s = Session::new(SessionConfig::default());
    enter_lobby(&mut s, &mut words, &[(B, "bee"), (A, "ay")]);

    type_str(&mut s, &mut words, A, "ok");
    assert_eq!(s.player(A).unwrap().name(), "ay");
    assert_eq!(s.player(A).unwrap().score(), 1);
    assert_eq!(s.player(B).unwrap().name(), "bee");
    assert_eq!(s.player(B).unwrap().slot(), 0);
}

#[test]
fn scoreboard_replaces_player_fields() {
    let mut words = ListWords::new(["go"]);
    let mut s = Session::new(SessionConfig::default());
    enter_lobby(&mut s, &mut words, &[(A, "ann"), (B, "bo")]);
    type_str(&mut s, &mut words, B, "go");
    // One racer left of two: the next fetch exhausts the list.
    assert_eq!(s.phase(), Phase::Finished);

    let texts: Vec<String> = s.surfaces().map(|f| f.text().to_string()).collect();
    assert!(texts.contains(&"player ann has 0 points.".to_string()));
    assert!(texts.contains(&"player bo has 1 points.".to_string()));
}

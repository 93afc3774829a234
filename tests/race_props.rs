use keyrace::core::{ListWords, PlayerState, Session, SessionConfig};
use keyrace::types::{DeviceId, KeyToken, Phase, Rgb, TextSurface};
use proptest::prelude::*;

fn field() -> TextSurface {
    TextSurface::new(0, 0, Rgb::default())
}

fn name_key() -> impl Strategy<Value = KeyToken> {
    prop_oneof![
        4 => prop::char::range('a', 'z').prop_map(KeyToken::Char),
        1 => Just(KeyToken::Erase),
    ]
}

/// Put `n` players through the lobby; the race starts on the last confirm.
fn started(n: u32, words: &mut ListWords) -> Session {
    let mut s = Session::new(SessionConfig { max_players: n as usize });
    for d in 0..n {
        s.handle_key(DeviceId(d), KeyToken::Char('p'), words).unwrap();
    }
    for d in 0..n {
        s.handle_key(DeviceId(d), KeyToken::Confirm, words).unwrap();
    }
    s
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The confirmed name is the typed characters minus erased ones.
    #[test]
    fn confirmed_name_reflects_erases(keys in prop::collection::vec(name_key(), 0..40)) {
        let mut player = PlayerState::new(0);
        let mut f = field();
        let mut expected = String::new();
        for key in &keys {
            match key {
                KeyToken::Char(c) => expected.push(*c),
                KeyToken::Erase => { expected.pop(); }
                _ => {}
            }
            player.submit_name_char(*key, &mut f);
        }
        player.submit_name_char(KeyToken::Confirm, &mut f);

        prop_assert!(player.is_ready());
        prop_assert_eq!(player.name(), expected.as_str());
    }

    /// Progress only moves forward by one on a match, and a finished word
    /// leaves the player ready with progress reset.
    #[test]
    fn race_progress_is_monotone(
        target in "[a-d]{1,8}",
        keys in prop::collection::vec(prop::char::range('a', 'e'), 0..60),
    ) {
        let mut player = PlayerState::new(0);
        let mut f = field();
        let len = target.chars().count();
        for c in keys {
            let before = player.progress();
            let was_ready = player.is_ready();
            let expected = target.chars().nth(before);
            let finished = player.submit_race_char(KeyToken::Char(c), &target, &mut f);

            if was_ready || expected != Some(c) {
                prop_assert!(!finished);
                prop_assert_eq!(player.progress(), before);
            } else if before + 1 == len {
                prop_assert!(finished);
                prop_assert!(player.is_ready());
                prop_assert_eq!(player.progress(), 0);
            } else {
                prop_assert!(!finished);
                prop_assert_eq!(player.progress(), before + 1);
            }
        }
    }

    /// First of N earns N-1, each later finisher one less; the last racer
    /// is cut off when the next word is fetched.
    #[test]
    fn finish_order_sets_scores(
        order in (2u32..=6).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle()),
    ) {
        let n = order.len() as u32;
        let mut words = ListWords::new(["go"]);
        let mut s = started(n, &mut words);
        prop_assert_eq!(s.phase(), Phase::Racing);

        for &d in &order[..order.len() - 1] {
            s.handle_key(DeviceId(d), KeyToken::Char('g'), &mut words).unwrap();
            s.handle_key(DeviceId(d), KeyToken::Char('o'), &mut words).unwrap();
        }
        prop_assert_eq!(s.phase(), Phase::Finished);

        for (rank, &d) in order.iter().enumerate() {
            let expected = (n - 1).saturating_sub(rank as u32);
            prop_assert_eq!(s.player(DeviceId(d)).unwrap().score(), expected);
        }
    }

    /// While racing, the pending count always equals the unready players.
    #[test]
    fn pending_tracks_unready_players(
        presses in prop::collection::vec((0u32..3, prop::char::range('a', 'c')), 0..120),
    ) {
        let mut words = ListWords::new(["abc", "cab", "bca", "aa", "cc"]);
        let mut s = started(3, &mut words);
        for (d, c) in presses {
            s.handle_key(DeviceId(d), KeyToken::Char(c), &mut words).unwrap();
            if s.phase() != Phase::Racing {
                break;
            }
            let unready = s.players().iter().filter(|p| !p.is_ready()).count();
            prop_assert_eq!(s.pending(), unready);
            prop_assert!(s.pending() >= 2);
        }
    }
}

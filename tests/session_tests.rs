use battleship_lobby::{GameSession, PlayerJoined, PlayerName};

fn join(player: PlayerName) -> PlayerJoined {
    PlayerJoined {
        player_name: player,
    }
}

#[test]
fn first_join_is_recorded() {
    let mut session = GameSession::new();
    assert!(session.record_join(join(PlayerName::Player1)));
    assert!(session.joined(PlayerName::Player1));
    assert!(!session.joined(PlayerName::Player2));
    assert!(!session.both_joined());
}

#[test]
fn duplicate_join_is_rejected() {
    let mut session = GameSession::new();
    assert!(session.record_join(join(PlayerName::Player1)));
    assert!(!session.record_join(join(PlayerName::Player1)));
    assert!(session.joined(PlayerName::Player1));
}

#[test]
fn both_joined_in_either_order() {
    for order in [
        [PlayerName::Player1, PlayerName::Player2],
        [PlayerName::Player2, PlayerName::Player1],
    ] {
        let mut session = GameSession::new();
        assert!(session.record_join(join(order[0])));
        assert!(!session.both_joined());
        assert!(session.record_join(join(order[1])));
        assert!(session.both_joined());
    }
}

#[test]
fn game_start_snapshot_holds_join_records() {
    let mut session = GameSession::new();
    session.record_join(join(PlayerName::Player2));
    session.record_join(join(PlayerName::Player1));

    let start = session.game_start();
    assert_eq!(
        start.get(PlayerName::Player1).unwrap().player_name,
        PlayerName::Player1
    );
    assert_eq!(
        start.get(PlayerName::Player2).unwrap().player_name,
        PlayerName::Player2
    );
}

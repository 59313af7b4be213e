use battleship_lobby::{
    BoardSetEvent, BoardSetResult, GameStart, JoinResult, PlayerJoined, PlayerName,
};

#[test]
fn player_joined_uses_camel_case_field() {
    let json = serde_json::to_string(&PlayerJoined {
        player_name: PlayerName::Player1,
    })
    .unwrap();
    assert_eq!(json, r#"{"playerName":"Player1"}"#);

    let back: PlayerJoined = serde_json::from_str(r#"{"playerName":"Player2"}"#).unwrap();
    assert_eq!(back.player_name, PlayerName::Player2);
}

#[test]
fn join_result_wire_shape() {
    let result = JoinResult {
        player_name: Some(PlayerName::Player1),
        success: true,
        message: "Successfully joined the game!".to_string(),
    };
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["playerName"], "Player1");
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Successfully joined the game!");
}

#[test]
fn failure_reply_omits_player_name() {
    let result = BoardSetResult {
        player_name: None,
        success: false,
        message: "Malformed board set request".to_string(),
    };
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert!(json.get("playerName").is_none());
    assert_eq!(json["success"], false);
}

#[test]
fn board_set_event_round_trips() {
    let event = BoardSetEvent {
        player_name: PlayerName::Player2,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"playerName":"Player2"}"#);
    let back: BoardSetEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn game_start_keys_are_player_slots() {
    let mut start = GameStart::default();
    start.set(PlayerJoined {
        player_name: PlayerName::Player1,
    });
    start.set(PlayerJoined {
        player_name: PlayerName::Player2,
    });

    let json: serde_json::Value = serde_json::to_value(&start).unwrap();
    assert_eq!(json["Player1"]["playerName"], "Player1");
    assert_eq!(json["Player2"]["playerName"], "Player2");
}

#[test]
fn partial_game_start_omits_empty_slot() {
    let mut start = GameStart::default();
    start.set(PlayerJoined {
        player_name: PlayerName::Player2,
    });
    let json: serde_json::Value = serde_json::to_value(&start).unwrap();
    assert!(json.get("Player1").is_none());
    assert!(!start.both_present());
}

#[test]
fn unknown_player_name_is_a_decode_error() {
    assert!(serde_json::from_str::<PlayerJoined>(r#"{"playerName":"Player3"}"#).is_err());
    assert!(serde_json::from_str::<PlayerJoined>(r#"{}"#).is_err());
}

#[test]
fn other_player_is_the_opposite_slot() {
    assert_eq!(PlayerName::Player1.other(), PlayerName::Player2);
    assert_eq!(PlayerName::Player2.other(), PlayerName::Player1);
    assert_eq!(PlayerName::Player1.to_string(), "Player1");
}

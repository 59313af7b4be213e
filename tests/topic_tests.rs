use battleship_lobby::{topic_matches, PlayerName, TopicHelper, DEFAULT_TOPIC_PREFIX};

#[test]
fn builds_request_and_broadcast_topics() {
    let topics = TopicHelper::new("BATTLESHIP/LOBBY");
    assert_eq!(
        topics.join_request_pattern(),
        "BATTLESHIP/LOBBY/JOIN-REQUEST/*"
    );
    assert_eq!(
        topics.join_request_topic(PlayerName::Player1),
        "BATTLESHIP/LOBBY/JOIN-REQUEST/Player1"
    );
    assert_eq!(
        topics.board_set_request_pattern(),
        "BATTLESHIP/LOBBY/BOARD-SET-REQUEST/*"
    );
    assert_eq!(
        topics.board_set_request_topic(PlayerName::Player2),
        "BATTLESHIP/LOBBY/BOARD-SET-REQUEST/Player2"
    );
    assert_eq!(
        topics.game_start_topic(),
        "BATTLESHIP/LOBBY/GAME-START/CONTROLLER"
    );
    assert_eq!(
        topics.reply_topic("player1"),
        "BATTLESHIP/LOBBY/REPLY/player1"
    );
}

#[test]
fn default_helper_uses_crate_prefix() {
    let topics = TopicHelper::default();
    assert_eq!(topics.prefix(), DEFAULT_TOPIC_PREFIX);
}

#[test]
fn request_topics_match_their_patterns() {
    let topics = TopicHelper::new("demo");
    for player in PlayerName::ALL {
        assert!(topic_matches(
            &topics.join_request_pattern(),
            &topics.join_request_topic(player)
        ));
        assert!(topic_matches(
            &topics.board_set_request_pattern(),
            &topics.board_set_request_topic(player)
        ));
    }
    assert!(!topic_matches(
        &topics.join_request_pattern(),
        &topics.game_start_topic()
    ));
}

#[test]
fn wildcard_is_single_level() {
    assert!(topic_matches("a/b/*", "a/b/c"));
    assert!(!topic_matches("a/b/*", "a/b"));
    assert!(!topic_matches("a/b/*", "a/b/c/d"));
    assert!(!topic_matches("a/b/*", "a/x/c"));
    assert!(topic_matches("a/*/c", "a/b/c"));
    assert!(topic_matches("a", "a"));
    assert!(!topic_matches("a", "b"));
}

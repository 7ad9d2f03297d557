use crate::tests::{options, vote};
use crate::{CoreError, Room, RoomDto};

use std::time::Duration;

use chrono::{TimeDelta, Utc};

#[test]
fn test_create_room_sets_valid_until_from_duration() {
    let now = Utc::now();
    let room = Room::create(
        "Favorite Profession?".into(),
        options(&["Welder", "Doctor", "Plumber"]),
        Duration::from_secs(60),
        now,
    )
    .unwrap();

    assert_eq!(room.valid_until, now + TimeDelta::seconds(60));
    assert!(room.votes.is_empty());
    assert!(room.summary.is_none());
}

#[test]
fn test_create_room_rejects_too_few_options() {
    let none = Room::create("T".into(), vec![], Duration::from_secs(1), Utc::now()).unwrap_err();
    assert_eq!(none.reason(), "can't have a poll with 0 options");

    let one = Room::create("T".into(), options(&["A"]), Duration::from_secs(1), Utc::now())
        .unwrap_err();
    assert_eq!(one.reason(), "can't have a poll with only 1 option");
    assert_eq!(one.message(), "Invalid option count!");
}

#[test]
fn test_create_room_rejects_duplicate_options() {
    let err = Room::create(
        "T".into(),
        options(&["A", "B", "A"]),
        Duration::from_secs(1),
        Utc::now(),
    )
    .unwrap_err();

    assert!(matches!(err, CoreError::DuplicateOption { ref option, .. } if option == "A"));
}

#[test]
fn test_create_room_with_huge_duration_saturates() {
    let room = Room::create(
        "T".into(),
        options(&["A", "B"]),
        Duration::MAX,
        Utc::now(),
    )
    .unwrap();

    assert!(!room.has_ended_at(Utc::now()));
}

#[test]
fn test_add_vote_rejects_second_vote_from_same_user() {
    let now = Utc::now();
    let mut room =
        Room::create("T".into(), options(&["A", "B"]), Duration::from_secs(60), now).unwrap();

    room.add_vote(vote("ana", &[("A", 1), ("B", 2)]), now).unwrap();
    let err = room
        .add_vote(vote("ana", &[("A", 2), ("B", 1)]), now)
        .unwrap_err();

    assert!(matches!(err, CoreError::AlreadyVoted { .. }));
    assert_eq!(room.votes["ana"].position_of("A"), Some(1));
}

#[test]
fn test_add_vote_rejects_after_end() {
    let now = Utc::now();
    let mut room =
        Room::create("T".into(), options(&["A", "B"]), Duration::from_secs(1), now).unwrap();

    let later = now + TimeDelta::seconds(2);
    let err = room
        .add_vote(vote("ana", &[("A", 1), ("B", 2)]), later)
        .unwrap_err();

    assert!(matches!(err, CoreError::PollClosed { .. }));
}

#[test]
fn test_summarize_only_once_and_only_after_end() {
    let now = Utc::now();
    let mut room =
        Room::create("T".into(), options(&["A", "B"]), Duration::from_secs(1), now).unwrap();
    room.add_vote(vote("ana", &[("A", 1), ("B", 2)]), now).unwrap();

    assert!(!room.summarize_if_ended(now));
    assert!(room.summary.is_none());

    let later = now + TimeDelta::seconds(5);
    assert!(room.summarize_if_ended(later));
    assert!(!room.summarize_if_ended(later));
    assert_eq!(
        room.summary.as_ref().and_then(|s| s.winner.as_deref()),
        Some("A")
    );
}

#[test]
fn test_room_dto_uses_unix_millis() {
    let now = Utc::now();
    let room = Room::create("T".into(), options(&["A", "B"]), Duration::ZERO, now).unwrap();
    let expected = room.valid_until.timestamp_millis();

    let json = serde_json::to_value(RoomDto::from(room)).unwrap();

    assert_eq!(json["ValidUntil"], expected);
    assert_eq!(json["Options"][1], "B");
    assert!(json["Summary"].is_null());
}

pub mod poll_summary;
pub mod rank;
pub mod room;
pub mod room_dto;
pub mod vote;

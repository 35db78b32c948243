//! Domain records exchanged with the team-member service.

pub mod team_member;

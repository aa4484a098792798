pub mod team;

pub use team::{Member, TeamInput, TeamRecord};

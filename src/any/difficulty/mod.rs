pub mod object;
pub mod skills;

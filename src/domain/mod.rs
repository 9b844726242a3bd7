pub mod project;
pub mod property;
pub mod samples;
pub mod slug;

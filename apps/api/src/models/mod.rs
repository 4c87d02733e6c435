pub mod certification;
pub mod profile;
pub mod role;

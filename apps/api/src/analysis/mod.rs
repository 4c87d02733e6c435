// Skill-gap scoring and recommendations for a chosen role.
// Runs once per results view from the stored profile and selected role.

pub mod gap;
pub mod recommend;
pub mod results;

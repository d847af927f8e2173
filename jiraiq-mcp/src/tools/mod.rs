//! Parameter structs for the exposed tools.

pub mod jira;

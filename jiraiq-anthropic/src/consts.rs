/// Version of the Messages API the request and response models follow
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const USER_AGENT: &str = concat!("jiraiq/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub mod allowlist;
pub mod conditions;
pub mod tba;
pub mod uri;

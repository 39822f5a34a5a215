/// Terminal logger for the binary
pub mod logger;

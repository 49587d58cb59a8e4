pub mod compose;
pub mod config_cmd;
pub mod events;
pub mod init;
mod snapshot;

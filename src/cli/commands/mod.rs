pub mod applicants;
pub mod apply;
pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod parttimers;
pub mod post;
pub mod profile;
pub mod show;
pub mod status;

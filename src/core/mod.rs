pub mod apply;
pub mod browse;
pub mod calculator;
pub mod log;
pub mod post;
pub mod profile;
pub mod status;

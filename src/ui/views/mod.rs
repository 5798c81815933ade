pub mod check;
pub mod push;
pub mod watch;

pub mod notification;
pub mod time;

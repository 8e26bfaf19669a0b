pub mod contact;
pub mod notification;
pub mod storage;
pub mod validation;

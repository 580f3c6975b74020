pub mod create;
pub mod home;

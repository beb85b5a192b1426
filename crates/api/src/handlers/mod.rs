pub mod contact;
pub mod views;

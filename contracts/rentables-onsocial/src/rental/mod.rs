pub mod types;

mod hooks;
mod user;
mod views;

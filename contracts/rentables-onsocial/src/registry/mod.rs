pub mod types;

mod approval;
mod burn;
mod enumeration;
mod mint;
mod ownership;
mod transfer;
mod views;

//! CLI module graph.

pub mod auth;
pub mod check;
pub mod command;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod finance;
pub mod kyc;
pub mod output;
pub mod pairs;
pub mod paths;
pub mod payments;
pub mod settings;
pub mod trading;
pub mod users;
pub mod watch;

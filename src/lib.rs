pub mod args;
pub mod cli;
pub mod history;
pub mod scoring;
pub mod secret;
pub mod session;
pub mod ui;
pub mod validator;

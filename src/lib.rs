pub mod cli_args;
pub mod configuration;
pub mod engine_client;
pub mod game;

// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};
use classify_lines::{LOG_ENV, app, cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();

    let args = cli::Args::parse();
    let config = match cli::build_config(&args) {
        Ok(config) => config,
        // clap の使用法エラーと同じ形式で表示し、終了コード 2 で終了
        Err(e) => cli::Args::command().error(ErrorKind::ValueValidation, e).exit(),
    };
    log::debug!("{config:?}");

    match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

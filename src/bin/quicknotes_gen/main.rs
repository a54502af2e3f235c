mod cli;
mod jwt_key_generator;

use std::process::exit;

use clap::Parser;
use log::{error, info};
use quicknotes::config::app_config::AppConfig;
use quicknotes::config::figment::FigmentExt;
use quicknotes::error_exit;
use rocket::figment::Figment;

use crate::cli::CliConfig;
use crate::jwt_key_generator::make_jwt_key;

fn main() {
    env_logger::init();

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }

    let app_config: AppConfig = Figment::new()
        .setup_app_config(&cli_config.config_file)
        .extract()
        .unwrap_or_else(|e| {
            for e in e {
                error!("{e}");
            }
            info!("finishing due to a configuration error");
            exit(1)
        });

    make_jwt_key(&app_config.jwt_private_key, &app_config.jwt_public_key)
        .unwrap_or_else(|e| error_exit!("could not generate a jwt key: {e}"));
    info!(
        "wrote jwt key pair to {} and {}",
        app_config.jwt_private_key.display(),
        app_config.jwt_public_key.display(),
    );
}

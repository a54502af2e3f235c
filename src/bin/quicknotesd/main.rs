mod app_setup;
mod cli;
mod routes;

use app_setup::AppSetupFairing;
use clap::{crate_name, Parser};
use log::info;
use quicknotes::config::figment::FigmentExt;
use quicknotes::error_exit;
use quicknotes::logging::init_logging;
use rocket::figment::Figment;

use crate::cli::CliConfig;

fn main() {
    init_logging();

    info!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(cli_config.config_file);

    let result = rocket::execute(
        rocket
            ::custom(figment)
            .attach(AppSetupFairing::new())
            .launch()
    );
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {}", e);
    }
}

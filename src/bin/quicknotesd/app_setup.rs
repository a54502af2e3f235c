use std::error::Error;
use std::path::Path;

use async_trait::async_trait;
use josekit::jwk::Jwk;
use log::{error, info};
use quicknotes::access_token::AccessTokenDecoder;
use quicknotes::config::app_config::AppConfig;
use quicknotes::service::NoteService;
use quicknotes::store::MemoryNoteStore;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Build, Rocket};

use crate::routes::ApiRocketBuildExt;

pub struct AppSetupFairing;

impl AppSetupFairing {
    pub fn new() -> Self {
        AppSetupFairing
    }
}

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        Info {
            name: "app setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let config: AppConfig = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| {
                for e in e {
                    error!("{e}");
                }
                info!("finishing due to a config parse error");
            }
        );

        let jwt_public_key = ok_or_bail!(
            rocket,
            read_jwt_key(&config.jwt_public_key),
            |e| error!("failed reading the public jwt key: {e}")
        );
        let access_token_decoder = ok_or_bail!(
            rocket,
            AccessTokenDecoder::from_jwk(&jwt_public_key),
            |e| error!("could not initialize access token decoder: {e}")
        );

        let store = MemoryNoteStore::new(&config);
        if let Some(ref demo_owner) = config.demo_owner {
            store.seed_demo_notes(demo_owner).await;
        }
        let service = NoteService::new(Box::new(store));

        Ok(
            rocket
                .manage(config)
                .manage(access_token_decoder)
                .manage(service)
                .install_quicknotes_api()
        )
    }
}

fn read_jwt_key(path: &Path) -> Result<Jwk, Box<dyn Error>> {
    Ok(Jwk::from_bytes(std::fs::read(path)?)?)
}

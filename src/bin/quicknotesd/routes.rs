mod api;

use rocket::{Build, Rocket};

pub trait ApiRocketBuildExt {
    fn install_quicknotes_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_quicknotes_api(self) -> Self {
        self.mount("/api", api::api_routes())
    }
}

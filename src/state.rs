use std::sync::Arc;

use crate::{config::Config, database::MongoStore, store::ContentStore};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let store = MongoStore::connect(&config.mongo_uri, &config.mongo_db).await;

        Arc::new(Self {
            config,
            store: Arc::new(store),
        })
    }
}

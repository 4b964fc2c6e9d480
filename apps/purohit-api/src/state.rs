use std::sync::Arc;

use purohit_service::RecommendService;
use purohit_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<RecommendService>,
}
impl AppState {
	pub async fn new(config: purohit_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = RecommendService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}

	pub fn with_service(service: RecommendService) -> Self {
		Self { service: Arc::new(service) }
	}
}

pub mod recommend;

use std::{future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

pub use recommend::{
	NO_ACCEPTED_PROVIDERS, NO_RATINGS_AVAILABLE, RankedRecommendations, RecommendRequest,
	RecommendResponse, RecommendationSource, RecommendedProvider,
};

use purohit_config::Config;
use purohit_domain::RatingRecord;
use purohit_storage::{db::Db, queries};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The accepted and selected provider sets of one booking. Empty sets mean
/// the booking is unknown or has no candidates; both are valid inputs.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct BookingCandidates {
	pub accepted: Vec<Uuid>,
	pub selected: Vec<Uuid>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProviderProfile {
	pub provider_id: Uuid,
	pub first_name: String,
	pub last_name: String,
}

/// The pipeline's data collaborator. Injected at construction so the core
/// owns no connection handle; the surrounding service owns the lifecycle.
/// A failed call is a fatal pipeline failure, propagated unmodified.
pub trait BookingDirectory
where
	Self: Send + Sync,
{
	fn booking_candidates<'a>(
		&'a self,
		booking_id: Uuid,
	) -> BoxFuture<'a, color_eyre::Result<BookingCandidates>>;

	fn ratings_for_providers<'a>(
		&'a self,
		provider_ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<Vec<RatingRecord>>>;

	fn provider_profiles<'a>(&'a self) -> BoxFuture<'a, color_eyre::Result<Vec<ProviderProfile>>>;
}

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	Storage { message: String },
}
impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
			Self::Storage { message } => write!(f, "Storage error: {message}"),
		}
	}
}
impl std::error::Error for ServiceError {}
impl From<color_eyre::Report> for ServiceError {
	fn from(err: color_eyre::Report) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

pub struct RecommendService {
	pub cfg: Config,
	pub directory: Arc<dyn BookingDirectory>,
}
impl RecommendService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, directory: Arc::new(PgDirectory { db }) }
	}

	pub fn with_directory(cfg: Config, directory: Arc<dyn BookingDirectory>) -> Self {
		Self { cfg, directory }
	}
}

struct PgDirectory {
	db: Db,
}
impl BookingDirectory for PgDirectory {
	fn booking_candidates<'a>(
		&'a self,
		booking_id: Uuid,
	) -> BoxFuture<'a, color_eyre::Result<BookingCandidates>> {
		Box::pin(async move {
			let rows = queries::booking_candidates(&self.db, booking_id).await?;
			let mut candidates = BookingCandidates::default();

			for row in rows {
				if row.accepted {
					candidates.accepted.push(row.provider_id);
				}
				if row.selected {
					candidates.selected.push(row.provider_id);
				}
			}

			Ok(candidates)
		})
	}

	fn ratings_for_providers<'a>(
		&'a self,
		provider_ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<Vec<RatingRecord>>> {
		Box::pin(async move {
			let rows = queries::reviews_for_providers(&self.db, provider_ids).await?;

			Ok(rows
				.into_iter()
				.map(|row| RatingRecord {
					rater_id: row.rater_id,
					provider_id: row.provider_id,
					rating: row.rating,
				})
				.collect())
		})
	}

	fn provider_profiles<'a>(&'a self) -> BoxFuture<'a, color_eyre::Result<Vec<ProviderProfile>>> {
		Box::pin(async move {
			let rows = queries::provider_profiles(&self.db).await?;

			Ok(rows
				.into_iter()
				.map(|row| ProviderProfile {
					provider_id: row.provider_id,
					first_name: row.first_name,
					last_name: row.last_name,
				})
				.collect())
		})
	}
}

use std::collections::HashMap;

use uuid::Uuid;

use purohit_domain::{
	AverageRating, RatingMatrix, ScoreWeights, SimilarityMatrix, rank_providers,
	recommendation_pool,
};

use crate::{BookingCandidates, RecommendService, ServiceError, ServiceResult};

pub const NO_ACCEPTED_PROVIDERS: &str = "No accepted providers for this booking.";
pub const NO_RATINGS_AVAILABLE: &str = "No ratings available for the accepted providers.";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecommendRequest {
	pub booking_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
	/// Providers surfaced by similarity neighbors outside the booking's own
	/// candidate set.
	Similarity,
	/// The pool emptied after exclusion, so the accepted providers themselves
	/// are returned, scored through the same path.
	AcceptedFallback,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecommendedProvider {
	pub provider_id: Uuid,
	pub first_name: String,
	pub last_name: String,
	pub average_rating: AverageRating,
	pub review_count: u32,
	pub weighted_score: Option<f32>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankedRecommendations {
	pub source: RecommendationSource,
	pub items: Vec<RecommendedProvider>,
}

/// Either a ranked list or an explicit "nothing to recommend" message.
/// Empty terminal states are valid outcomes, not errors.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RecommendResponse {
	NoRecommendation { message: String },
	Ranked(RankedRecommendations),
}

impl RecommendService {
	pub async fn recommend(&self, req: RecommendRequest) -> ServiceResult<RecommendResponse> {
		let booking_id =
			Uuid::parse_str(req.booking_id.trim()).map_err(|_| ServiceError::InvalidRequest {
				message: "booking_id must be a valid UUID.".to_string(),
			})?;

		tracing::info!(%booking_id, "Fetching accepted and selected providers.");

		let BookingCandidates { accepted, selected } =
			self.directory.booking_candidates(booking_id).await?;

		if accepted.is_empty() {
			tracing::info!(%booking_id, "No accepted providers for this booking.");

			return Ok(RecommendResponse::NoRecommendation {
				message: NO_ACCEPTED_PROVIDERS.to_string(),
			});
		}

		// Ratings are restricted to providers still in play: already-selected
		// providers are never sources of new recommendations.
		let relevant: Vec<Uuid> =
			accepted.iter().copied().filter(|id| !selected.contains(id)).collect();

		tracing::debug!(providers = relevant.len(), "Fetching ratings for relevant providers.");

		let ratings = if relevant.is_empty() {
			Vec::new()
		} else {
			self.directory.ratings_for_providers(&relevant).await?
		};

		if ratings.is_empty() {
			tracing::info!(%booking_id, "No ratings available for the accepted providers.");

			return Ok(RecommendResponse::NoRecommendation {
				message: NO_RATINGS_AVAILABLE.to_string(),
			});
		}

		let matrix = RatingMatrix::from_records(&ratings);
		let similarity = SimilarityMatrix::from_ratings(&matrix);
		let pool = recommendation_pool(
			&accepted,
			&selected,
			&similarity,
			self.cfg.recommend.neighbor_k as usize,
		);
		let (source, pool) = if pool.is_empty() {
			tracing::info!(%booking_id, "Similarity pool is empty; falling back to the accepted providers.");

			let mut fallback = accepted.clone();

			fallback.sort_unstable();
			fallback.dedup();

			(RecommendationSource::AcceptedFallback, fallback)
		} else {
			(RecommendationSource::Similarity, pool)
		};
		let profiles: HashMap<Uuid, crate::ProviderProfile> = self
			.directory
			.provider_profiles()
			.await?
			.into_iter()
			.map(|profile| (profile.provider_id, profile))
			.collect();
		let known: Vec<Uuid> = pool
			.into_iter()
			.filter(|provider_id| {
				let known = profiles.contains_key(provider_id);

				if !known {
					tracing::warn!(%provider_id, "Pooled provider has no profile; skipping.");
				}

				known
			})
			.collect();
		let weights = ScoreWeights {
			rating: self.cfg.recommend.rating_weight,
			review: self.cfg.recommend.review_weight,
		};
		let items: Vec<RecommendedProvider> = rank_providers(&known, &matrix, weights)
			.into_iter()
			.map(|scored| {
				let profile = &profiles[&scored.provider_id];

				RecommendedProvider {
					provider_id: scored.provider_id,
					first_name: profile.first_name.clone(),
					last_name: profile.last_name.clone(),
					average_rating: scored.average_rating,
					review_count: scored.review_count,
					weighted_score: scored.weighted_score,
				}
			})
			.collect();

		tracing::info!(%booking_id, count = items.len(), source = ?source, "Returning ranked recommendations.");

		Ok(RecommendResponse::Ranked(RankedRecommendations { source, items }))
	}
}

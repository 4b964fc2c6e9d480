use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use uuid::Uuid;

use crate::matrix::RatingMatrix;

pub const NO_RATINGS_LABEL: &str = "No ratings";

/// Linear weights for the re-ranking score:
/// `average_rating * rating + review_count * review`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreWeights {
	pub rating: f32,
	pub review: f32,
}
impl Default for ScoreWeights {
	fn default() -> Self {
		Self { rating: 2.0, review: 1.0 }
	}
}

/// A provider's mean rating, or an explicit sentinel when the provider has no
/// observations in the scored subset. The sentinel is never a numeric zero; a
/// zero can be a legitimate stored rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
	Rated(f32),
	NoRatings,
}
impl AverageRating {
	pub fn value(self) -> Option<f32> {
		match self {
			Self::Rated(average) => Some(average),
			Self::NoRatings => None,
		}
	}
}
impl Serialize for AverageRating {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::Rated(average) => serializer.serialize_f32(*average),
			Self::NoRatings => serializer.serialize_str(NO_RATINGS_LABEL),
		}
	}
}
impl<'de> Deserialize<'de> for AverageRating {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Repr {
			Rated(f32),
			Label(String),
		}

		match Repr::deserialize(deserializer)? {
			Repr::Rated(average) => Ok(Self::Rated(average)),
			Repr::Label(label) if label == NO_RATINGS_LABEL => Ok(Self::NoRatings),
			Repr::Label(label) => {
				Err(de::Error::custom(format!("Unknown average rating label: {label}.")))
			},
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoredProvider {
	pub provider_id: Uuid,
	pub average_rating: AverageRating,
	pub review_count: u32,
	pub weighted_score: Option<f32>,
}

/// Scores every pooled provider against the rating subset the matrix was
/// built from and sorts descending by weighted score. Entries with no ratings
/// carry no score and sort after every scored entry; the sort is stable, so
/// ties keep the pool's order.
pub fn rank_providers(
	pool: &[Uuid],
	matrix: &RatingMatrix,
	weights: ScoreWeights,
) -> Vec<ScoredProvider> {
	let mut ranked: Vec<ScoredProvider> = pool
		.iter()
		.map(|provider_id| score_provider(*provider_id, matrix, weights))
		.collect();

	ranked.sort_by(|lhs, rhs| cmp_weighted_desc(lhs.weighted_score, rhs.weighted_score));

	ranked
}

fn score_provider(provider_id: Uuid, matrix: &RatingMatrix, weights: ScoreWeights) -> ScoredProvider {
	let Some(average) = matrix.average_rating(provider_id) else {
		return ScoredProvider {
			provider_id,
			average_rating: AverageRating::NoRatings,
			review_count: 0,
			weighted_score: None,
		};
	};
	let review_count = matrix.review_count(provider_id);

	ScoredProvider {
		provider_id,
		average_rating: AverageRating::Rated(average),
		review_count,
		weighted_score: Some(average * weights.rating + review_count as f32 * weights.review),
	}
}

fn cmp_weighted_desc(lhs: Option<f32>, rhs: Option<f32>) -> Ordering {
	match (lhs, rhs) {
		(Some(lhs), Some(rhs)) => rhs.partial_cmp(&lhs).unwrap_or(Ordering::Equal),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

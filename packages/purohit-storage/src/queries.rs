use uuid::Uuid;

use crate::{
	Result,
	db::Db,
	models::{BookingCandidateRow, ProviderRow, ReviewRow},
};

/// Candidate rows for one booking. An unknown booking simply has no rows;
/// that is a valid terminal state for the caller, not an error.
pub async fn booking_candidates(db: &Db, booking_id: Uuid) -> Result<Vec<BookingCandidateRow>> {
	let rows: Vec<BookingCandidateRow> = sqlx::query_as(
		"\
SELECT booking_id, provider_id, accepted, selected
FROM booking_candidates
WHERE booking_id = $1
ORDER BY provider_id",
	)
	.bind(booking_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn reviews_for_providers(db: &Db, provider_ids: &[Uuid]) -> Result<Vec<ReviewRow>> {
	if provider_ids.is_empty() {
		return Ok(Vec::new());
	}

	let rows: Vec<ReviewRow> = sqlx::query_as(
		"\
SELECT review_id, rater_id, provider_id, rating, created_at
FROM reviews
WHERE provider_id = ANY($1)
ORDER BY created_at, review_id",
	)
	.bind(provider_ids)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn provider_profiles(db: &Db) -> Result<Vec<ProviderRow>> {
	let rows: Vec<ProviderRow> = sqlx::query_as(
		"\
SELECT provider_id, first_name, last_name, created_at
FROM providers
ORDER BY provider_id",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn insert_provider(db: &Db, provider: &ProviderRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO providers (provider_id, first_name, last_name, created_at)
VALUES ($1, $2, $3, $4)",
	)
	.bind(provider.provider_id)
	.bind(provider.first_name.as_str())
	.bind(provider.last_name.as_str())
	.bind(provider.created_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn insert_booking(db: &Db, booking_id: Uuid, requester_id: Uuid) -> Result<()> {
	sqlx::query("INSERT INTO bookings (booking_id, requester_id) VALUES ($1, $2)")
		.bind(booking_id)
		.bind(requester_id)
		.execute(&db.pool)
		.await?;

	Ok(())
}

pub async fn insert_booking_candidate(db: &Db, candidate: &BookingCandidateRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO booking_candidates (booking_id, provider_id, accepted, selected)
VALUES ($1, $2, $3, $4)
ON CONFLICT (booking_id, provider_id) DO UPDATE
SET
	accepted = EXCLUDED.accepted,
	selected = EXCLUDED.selected",
	)
	.bind(candidate.booking_id)
	.bind(candidate.provider_id)
	.bind(candidate.accepted)
	.bind(candidate.selected)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn insert_review(
	db: &Db,
	review_id: Uuid,
	rater_id: Uuid,
	provider_id: Uuid,
	rating: f32,
) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO reviews (review_id, rater_id, provider_id, rating)
VALUES ($1, $2, $3, $4)",
	)
	.bind(review_id)
	.bind(rater_id)
	.bind(provider_id)
	.bind(rating)
	.execute(&db.pool)
	.await?;

	Ok(())
}

use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
pub struct ProviderRow {
	pub provider_id: Uuid,
	pub first_name: String,
	pub last_name: String,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct BookingRow {
	pub booking_id: Uuid,
	pub requester_id: Uuid,
	pub created_at: OffsetDateTime,
}

#[derive(Debug, sqlx::FromRow)]
pub struct BookingCandidateRow {
	pub booking_id: Uuid,
	pub provider_id: Uuid,
	pub accepted: bool,
	pub selected: bool,
}

#[derive(Debug, sqlx::FromRow)]
pub struct ReviewRow {
	pub review_id: Uuid,
	pub rater_id: Uuid,
	pub provider_id: Uuid,
	pub rating: f32,
	pub created_at: OffsetDateTime,
}

pub fn render_schema() -> &'static str {
	SCHEMA
}

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS providers (
	provider_id uuid PRIMARY KEY,
	first_name  text NOT NULL,
	last_name   text NOT NULL,
	created_at  timestamptz NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS bookings (
	booking_id   uuid PRIMARY KEY,
	requester_id uuid NOT NULL,
	created_at   timestamptz NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS booking_candidates (
	booking_id  uuid NOT NULL REFERENCES bookings (booking_id) ON DELETE CASCADE,
	provider_id uuid NOT NULL REFERENCES providers (provider_id) ON DELETE CASCADE,
	accepted    boolean NOT NULL DEFAULT true,
	selected    boolean NOT NULL DEFAULT false,
	PRIMARY KEY (booking_id, provider_id)
);

CREATE TABLE IF NOT EXISTS reviews (
	review_id   uuid PRIMARY KEY,
	rater_id    uuid NOT NULL,
	provider_id uuid NOT NULL REFERENCES providers (provider_id) ON DELETE CASCADE,
	rating      real NOT NULL,
	created_at  timestamptz NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS idx_reviews_provider ON reviews (provider_id);

CREATE INDEX IF NOT EXISTS idx_booking_candidates_provider ON booking_candidates (provider_id)";

use time::OffsetDateTime;
use uuid::Uuid;

use purohit_config::Postgres;
use purohit_storage::{
	db::Db,
	models::{BookingCandidateRow, ProviderRow},
	queries,
};
use purohit_testkit::TestDatabase;

fn provider_row(provider_id: Uuid, first_name: &str, last_name: &str) -> ProviderRow {
	ProviderRow {
		provider_id,
		first_name: first_name.to_string(),
		last_name: last_name.to_string(),
		created_at: OffsetDateTime::now_utc(),
	}
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PUROHIT_PG_DSN to run."]
async fn db_connects_and_bootstraps() {
	let Some(base_dsn) = purohit_testkit::env_dsn() else {
		eprintln!("Skipping db_connects_and_bootstraps; set PUROHIT_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");
	// Bootstrap is idempotent.
	db.ensure_schema().await.expect("Failed to re-run schema bootstrap.");

	for table in ["providers", "bookings", "booking_candidates", "reviews"] {
		let count: i64 = sqlx::query_scalar(
			"SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
		)
		.bind(table)
		.fetch_one(&db.pool)
		.await
		.expect("Failed to query schema tables.");

		assert_eq!(count, 1, "Expected table {table} to exist.");
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PUROHIT_PG_DSN to run."]
async fn booking_candidate_and_review_queries_round_trip() {
	let Some(base_dsn) = purohit_testkit::env_dsn() else {
		eprintln!(
			"Skipping booking_candidate_and_review_queries_round_trip; set PUROHIT_PG_DSN to run."
		);

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	let booking_id = Uuid::new_v4();
	let accepted_id = Uuid::new_v4();
	let selected_id = Uuid::new_v4();
	let rater_id = Uuid::new_v4();

	queries::insert_provider(&db, &provider_row(accepted_id, "Asha", "Joshi"))
		.await
		.expect("Failed to insert provider.");
	queries::insert_provider(&db, &provider_row(selected_id, "Ravi", "Shastri"))
		.await
		.expect("Failed to insert provider.");
	queries::insert_booking(&db, booking_id, Uuid::new_v4())
		.await
		.expect("Failed to insert booking.");
	queries::insert_booking_candidate(
		&db,
		&BookingCandidateRow { booking_id, provider_id: accepted_id, accepted: true, selected: false },
	)
	.await
	.expect("Failed to insert candidate.");
	queries::insert_booking_candidate(
		&db,
		&BookingCandidateRow { booking_id, provider_id: selected_id, accepted: true, selected: true },
	)
	.await
	.expect("Failed to insert candidate.");
	queries::insert_review(&db, Uuid::new_v4(), rater_id, accepted_id, 4.5)
		.await
		.expect("Failed to insert review.");

	let candidates = queries::booking_candidates(&db, booking_id)
		.await
		.expect("Failed to fetch booking candidates.");

	assert_eq!(candidates.len(), 2);
	assert!(candidates.iter().all(|row| row.accepted));
	assert_eq!(candidates.iter().filter(|row| row.selected).count(), 1);

	let unknown = queries::booking_candidates(&db, Uuid::new_v4())
		.await
		.expect("Failed to fetch unknown booking.");

	assert!(unknown.is_empty());

	let reviews = queries::reviews_for_providers(&db, &[accepted_id, selected_id])
		.await
		.expect("Failed to fetch reviews.");

	assert_eq!(reviews.len(), 1);
	assert_eq!(reviews[0].provider_id, accepted_id);
	assert_eq!(reviews[0].rater_id, rater_id);
	assert_eq!(reviews[0].rating, 4.5);

	let none = queries::reviews_for_providers(&db, &[])
		.await
		.expect("Failed to fetch reviews for an empty id set.");

	assert!(none.is_empty());

	let profiles = queries::provider_profiles(&db).await.expect("Failed to fetch profiles.");

	assert_eq!(profiles.len(), 2);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

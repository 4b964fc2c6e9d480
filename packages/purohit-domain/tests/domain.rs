use uuid::Uuid;

use purohit_domain::{
	RatingMatrix, RatingRecord, ScoreWeights, SimilarityMatrix, rank_providers,
	recommendation_pool,
};

fn uuid(n: u128) -> Uuid {
	Uuid::from_u128(n)
}

fn record(rater: u128, provider: u128, rating: f32) -> RatingRecord {
	RatingRecord { rater_id: uuid(rater), provider_id: uuid(provider), rating }
}

#[test]
fn similarity_matrix_is_symmetric_with_unit_diagonal() {
	let records = vec![
		record(10, 1, 5.0),
		record(10, 2, 3.0),
		record(11, 1, 4.0),
		record(11, 3, 2.0),
		record(12, 3, 5.0),
	];
	let matrix = RatingMatrix::from_records(&records);
	let similarity = SimilarityMatrix::from_ratings(&matrix);

	assert_eq!(similarity.len(), 3);

	for i in 0..similarity.len() {
		assert!((similarity.score(i, i) - 1.0).abs() < 1e-6);

		for j in 0..similarity.len() {
			assert_eq!(similarity.score(i, j), similarity.score(j, i));
			assert!((-1.0..=1.0).contains(&similarity.score(i, j)));
		}
	}
}

#[test]
fn all_zero_rating_vector_scores_zero_against_everyone() {
	let records = vec![record(10, 1, 0.0), record(10, 2, 4.0), record(11, 2, 5.0)];
	let matrix = RatingMatrix::from_records(&records);
	let similarity = SimilarityMatrix::from_ratings(&matrix);
	let zero_row = similarity.provider_index(uuid(1)).expect("provider 1 indexed");

	for j in 0..similarity.len() {
		assert_eq!(similarity.score(zero_row, j), 0.0);
	}
}

#[test]
fn neighbors_exclude_self_and_respect_k() {
	let records = vec![
		record(10, 1, 5.0),
		record(10, 2, 5.0),
		record(10, 3, 1.0),
		record(11, 1, 4.0),
		record(11, 2, 4.0),
	];
	let matrix = RatingMatrix::from_records(&records);
	let similarity = SimilarityMatrix::from_ratings(&matrix);
	let index = similarity.provider_index(uuid(1)).expect("provider 1 indexed");
	let neighbors = similarity.neighbors(index, 1);

	assert_eq!(neighbors.len(), 1);
	assert_ne!(neighbors[0], index);
	// Provider 2 shares both raters with provider 1; provider 3 shares one.
	assert_eq!(similarity.providers()[neighbors[0]], uuid(2));
}

#[test]
fn pool_never_contains_accepted_or_selected_ids() {
	// Providers 1-2 are the booking's candidates; 3-5 only exist in the
	// rating history, so they are the only legal recommendations.
	let records = vec![
		record(10, 1, 5.0),
		record(10, 3, 5.0),
		record(11, 2, 4.0),
		record(11, 4, 4.0),
		record(12, 5, 3.0),
		record(12, 1, 3.0),
	];
	let matrix = RatingMatrix::from_records(&records);
	let similarity = SimilarityMatrix::from_ratings(&matrix);
	let accepted = vec![uuid(1), uuid(2)];
	let selected = vec![uuid(2)];
	let pool = recommendation_pool(&accepted, &selected, &similarity, 5);

	assert!(!pool.is_empty());

	for provider_id in &pool {
		assert!(!accepted.contains(provider_id));
		assert!(!selected.contains(provider_id));
	}
}

#[test]
fn accepted_provider_without_ratings_is_skipped() {
	let records = vec![record(10, 1, 5.0), record(10, 3, 4.0)];
	let matrix = RatingMatrix::from_records(&records);
	let similarity = SimilarityMatrix::from_ratings(&matrix);
	// Provider 2 never appears in the rating subset; only provider 1
	// contributes neighbors.
	let pool = recommendation_pool(&[uuid(1), uuid(2)], &[], &similarity, 5);

	assert_eq!(pool, vec![uuid(3)]);
}

#[test]
fn candidate_only_rating_history_empties_the_pool() {
	// The two accepted providers rank each other as sole neighbor, and the
	// exclusion rules strip both, so the caller must fall back.
	let records = vec![
		record(10, 1, 5.0),
		record(10, 2, 3.0),
		record(11, 1, 4.0),
		record(11, 2, 5.0),
	];
	let matrix = RatingMatrix::from_records(&records);
	let similarity = SimilarityMatrix::from_ratings(&matrix);
	let pool = recommendation_pool(&[uuid(1), uuid(2)], &[], &similarity, 5);

	assert!(pool.is_empty());
}

#[test]
fn ranking_sorts_descending_with_unrated_entries_last() {
	let records = vec![
		record(10, 1, 5.0),
		record(11, 1, 5.0),
		record(10, 2, 5.0),
		record(10, 3, 2.0),
	];
	let matrix = RatingMatrix::from_records(&records);
	let pool = vec![uuid(3), uuid(4), uuid(1), uuid(2)];
	let ranked = rank_providers(&pool, &matrix, ScoreWeights::default());

	assert_eq!(ranked.len(), 4);
	// 1: 5.0 * 2 + 2 = 12; 2: 5.0 * 2 + 1 = 11; 3: 2.0 * 2 + 1 = 5; 4: unrated.
	assert_eq!(ranked[0].provider_id, uuid(1));
	assert_eq!(ranked[0].weighted_score, Some(12.0));
	assert_eq!(ranked[1].provider_id, uuid(2));
	assert_eq!(ranked[2].provider_id, uuid(3));
	assert_eq!(ranked[3].provider_id, uuid(4));
	assert_eq!(ranked[3].weighted_score, None);
	assert_eq!(ranked[3].review_count, 0);

	for pair in ranked.windows(2) {
		match (pair[0].weighted_score, pair[1].weighted_score) {
			(Some(lhs), Some(rhs)) => assert!(lhs >= rhs),
			(None, Some(_)) => panic!("Unrated entry sorted before a scored entry."),
			_ => {},
		}
	}
}

#[test]
fn ranking_ties_keep_pool_order() {
	let records = vec![record(10, 1, 4.0), record(11, 2, 4.0)];
	let matrix = RatingMatrix::from_records(&records);
	let ranked = rank_providers(&[uuid(2), uuid(1)], &matrix, ScoreWeights::default());

	assert_eq!(ranked[0].weighted_score, ranked[1].weighted_score);
	assert_eq!(ranked[0].provider_id, uuid(2));
	assert_eq!(ranked[1].provider_id, uuid(1));
}

#[test]
fn custom_weights_change_the_ranking() {
	// Provider 1: one glowing review. Provider 2: many mediocre reviews.
	let mut records = vec![record(10, 1, 5.0)];

	for rater in 20..26 {
		records.push(record(rater, 2, 3.0));
	}

	let matrix = RatingMatrix::from_records(&records);
	let rating_heavy = rank_providers(
		&[uuid(1), uuid(2)],
		&matrix,
		ScoreWeights { rating: 10.0, review: 0.0 },
	);
	let review_heavy = rank_providers(
		&[uuid(1), uuid(2)],
		&matrix,
		ScoreWeights { rating: 0.0, review: 10.0 },
	);

	assert_eq!(rating_heavy[0].provider_id, uuid(1));
	assert_eq!(review_heavy[0].provider_id, uuid(2));
}

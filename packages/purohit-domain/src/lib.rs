pub mod matrix;
pub mod pool;
pub mod score;
pub mod similarity;

pub use matrix::{RatingMatrix, RatingRecord};
pub use pool::recommendation_pool;
pub use score::{AverageRating, NO_RATINGS_LABEL, ScoreWeights, ScoredProvider, rank_providers};
pub use similarity::{SimilarityMatrix, cosine_similarity};

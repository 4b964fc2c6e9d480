use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub recommend: Recommend,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Recommend {
	/// Weight applied to a candidate's average rating in the re-ranking score.
	pub rating_weight: f32,
	/// Weight applied to a candidate's review count in the re-ranking score.
	pub review_weight: f32,
	/// How many similarity neighbors each accepted provider contributes.
	pub neighbor_k: u32,
	/// Inclusive bounds of the rating scale. The scale must be strictly
	/// positive so a stored rating can never collide with "no rating".
	pub rating_min: f32,
	pub rating_max: f32,
}
impl Default for Recommend {
	fn default() -> Self {
		Self {
			rating_weight: 2.0,
			review_weight: 1.0,
			neighbor_k: 5,
			rating_min: 1.0,
			rating_max: 5.0,
		}
	}
}

fn default_bind_localhost_only() -> bool {
	true
}

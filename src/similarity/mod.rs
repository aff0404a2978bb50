pub mod scorer;

pub use scorer::{CompositeScorer, SimilarityScore, SimilarityScorer, SimilarityWeights};

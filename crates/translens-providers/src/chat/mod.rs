mod normalize;
mod schema;

pub use normalize::ChatNormalizer;

mod cache;

pub use cache::CoverageCache;

pub mod analyze;
pub mod catalog;

pub use analyze::AnalyzeArgs;
pub use catalog::CatalogCmd;

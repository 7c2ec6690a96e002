mod error;
mod loader;
mod report;
#[cfg(test)]
mod tests;
mod types;

pub use error::ConfigError;
pub use loader::{
    BUILTIN_ORIGIN, CatalogTemplates, DEFAULT_TEMPLATE, builtin_catalog, default_catalog_path,
    load_catalog, parse_catalog, resolve_catalog, template, validate_catalog,
};
pub use report::{CatalogIssue, CatalogReport};
pub use types::{CatalogConfig, ValidatedCatalog};

use crate::catalog::BotCatalog;
use crate::conf::error::ConfigError;
use crate::conf::report::CatalogReport;
use crate::conf::types::{CatalogConfig, ValidatedCatalog};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "catalog-templates/"]
pub struct CatalogTemplates;

/// Name of the embedded default catalog.
pub const DEFAULT_TEMPLATE: &str = "catalog.hcl";

/// Origin reported for the embedded catalog.
pub const BUILTIN_ORIGIN: &str = "<builtin>";

/// Loads and validates a catalog file.
pub fn load_catalog(path: &Path) -> Result<ValidatedCatalog, ConfigError> {
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_catalog(&src, path)
}

/// The catalog shipped with the binary.
pub fn builtin_catalog() -> Result<ValidatedCatalog, ConfigError> {
    let src = template(DEFAULT_TEMPLATE)?;
    parse_catalog(&src, Path::new(BUILTIN_ORIGIN))
}

/// `load_catalog` when a path is given, the built-in catalog otherwise.
pub fn resolve_catalog(path: Option<&Path>) -> Result<ValidatedCatalog, ConfigError> {
    match path {
        Some(path) => load_catalog(path),
        None => builtin_catalog(),
    }
}

pub fn parse_catalog(src: &str, origin: &Path) -> Result<ValidatedCatalog, ConfigError> {
    let cfg: CatalogConfig = hcl::from_str(src).map_err(|e| ConfigError::parse(origin, e))?;
    validate_catalog(cfg, origin)
}

/// Rejects catalogs that cannot work and reports the ones that look suspicious.
///
/// Hard errors: no signatures at all, or an empty signature.
/// Warnings: duplicates (the first occurrence wins) and surrounding whitespace.
pub fn validate_catalog(cfg: CatalogConfig, origin: &Path) -> Result<ValidatedCatalog, ConfigError> {
    let origin = origin.to_path_buf();

    if cfg.signatures.is_empty() {
        return Err(ConfigError::EmptyCatalog { path: origin });
    }

    let mut report = CatalogReport::new(origin.clone());
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, sig) in cfg.signatures.iter().enumerate() {
        if sig.is_empty() {
            return Err(ConfigError::EmptySignature {
                path: origin,
                index,
            });
        }

        if let Some(first) = first_seen.get(sig.as_str()) {
            report.warning(
                index,
                format!("duplicate signature '{sig}', first declared as #{first}"),
                Some("remove the repeated entry; it never changes any count".to_string()),
            );
            continue;
        }
        first_seen.insert(sig.as_str(), index);

        if sig.trim() != sig {
            report.warning(
                index,
                format!("signature '{sig}' has leading or trailing whitespace"),
                Some("whitespace is matched literally against the user-agent".to_string()),
            );
        }
    }

    Ok(ValidatedCatalog {
        origin,
        catalog: BotCatalog::new(cfg.signatures),
        match_policy: cfg.match_policy,
        detect_unlisted: cfg.detect_unlisted,
        report,
    })
}

/// Fetch an embedded catalog template as UTF-8 text.
pub fn template(name: &str) -> Result<String, ConfigError> {
    let file = CatalogTemplates::get(name).ok_or_else(|| ConfigError::MissingTemplate {
        name: name.to_string(),
    })?;

    let s = std::str::from_utf8(file.data.as_ref()).map_err(|_| ConfigError::InvalidTemplate {
        name: name.to_string(),
    })?;

    Ok(s.to_owned())
}

/// Default location of a user catalog: `./catalog.hcl`.
pub fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE)
}

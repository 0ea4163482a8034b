/// Error types for resource generation.
pub mod error;

/// Core type definitions (files, categories, reports).
pub mod types;

/// Run configuration and provider list.
pub mod config;

/// Path relativizing and identifier escaping.
pub mod identifier;

/// Recursive, sorted file listing.
pub mod scanner;

/// Provider trait and the concrete provider kinds.
pub mod provider;

/// Per-provider dispatch and ordered merge.
pub mod aggregate;

/// Rust module rendering and atomic output.
pub mod output_gen;

pub use config::{ProviderConfig, ResourceConfig, SkinFormat};
pub use error::ResourceError;
pub use types::{Diagnostic, GeneratedModule, GenerationReport, ResourceCategory, ResourceFile};

/// Scan `config.source_dir` and write the resource module to `config.output_path()`.
///
/// A missing source directory is not an error: every category is emitted
/// empty. Files whose content cannot be extracted, and keys whose emitted
/// identifier is already taken in their category, are skipped and listed in
/// the report's diagnostics. Only configuration and output failures abort.
pub fn generate(config: &ResourceConfig) -> Result<GenerationReport, ResourceError> {
    let providers = provider::build_registry(config)?;

    if !config.source_dir.is_dir() {
        log::warn!(
            "Source directory {} not found, generating empty categories",
            config.source_dir.display()
        );
    }
    let files = scanner::collect_resources(&config.source_dir);
    log::info!(
        "Scanned {} file(s) under {}",
        files.len(),
        config.source_dir.display()
    );

    let mut aggregate = aggregate::aggregate(&providers, &files);
    for category in &mut aggregate.categories {
        let collisions = identifier::check_collisions(category);
        aggregate.diagnostics.extend(collisions);
    }

    let module = GeneratedModule {
        namespace: config.namespace.clone(),
        categories: aggregate.categories,
    };
    let content = output_gen::render(&module);

    let output = config.output_path();
    output_gen::write_module(&output, &content)?;
    log::info!("Wrote {}", output.display());

    Ok(GenerationReport {
        output,
        categories: module
            .categories
            .iter()
            .map(|c| (c.label.clone(), c.len()))
            .collect(),
        diagnostics: aggregate.diagnostics,
        sources: files.into_iter().map(|f| f.path).collect(),
    })
}

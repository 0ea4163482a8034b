use crate::provider::ResourceProvider;
use crate::types::{Diagnostic, ResourceCategory, ResourceFile};

/// What one provider produced from the file list.
#[derive(Debug, Clone, Default)]
pub struct ProviderOutput {
    pub category: ResourceCategory,
    pub diagnostics: Vec<Diagnostic>,
}

/// All categories in registration order, plus every skipped file.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub categories: Vec<ResourceCategory>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run one provider over `files`.
///
/// Every file accepted by the predicate is extracted in list order and
/// merged with last-write-wins. A file that fails extraction is recorded as
/// a diagnostic and contributes nothing.
pub fn dispatch<P>(provider: &P, files: &[ResourceFile]) -> ProviderOutput
where
    P: ResourceProvider + ?Sized,
{
    let mut output = ProviderOutput {
        category: ResourceCategory::new(provider.category()),
        diagnostics: Vec::new(),
    };
    let mut matched = 0usize;

    for file in files.iter().filter(|f| provider.matches(f)) {
        matched += 1;
        match provider.extract(file) {
            Ok(entries) => {
                log::debug!(
                    "  [{}] {}: {} entr{}",
                    provider.category(),
                    file.relative,
                    entries.len(),
                    if entries.len() == 1 { "y" } else { "ies" }
                );
                output.category.merge(entries);
            }
            Err(e) => {
                let diagnostic = Diagnostic {
                    category: provider.category().to_string(),
                    path: file.relative.clone(),
                    message: e.to_string(),
                };
                log::warn!("Skipping {}", diagnostic);
                output.diagnostics.push(diagnostic);
            }
        }
    }

    log::info!(
        "{}: {} constant(s) from {} file(s)",
        provider.category(),
        output.category.len(),
        matched
    );

    output
}

/// Fold per-provider outputs into one aggregate, preserving their order.
pub fn merge(outputs: impl IntoIterator<Item = ProviderOutput>) -> Aggregate {
    outputs
        .into_iter()
        .fold(Aggregate::default(), |mut acc, output| {
            acc.categories.push(output.category);
            acc.diagnostics.extend(output.diagnostics);
            acc
        })
}

/// Dispatch every provider over `files` and merge in registration order.
pub fn aggregate<P: ResourceProvider>(providers: &[P], files: &[ResourceFile]) -> Aggregate {
    merge(providers.iter().map(|provider| dispatch(provider, files)))
}

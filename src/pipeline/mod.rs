pub mod extractor;
pub mod resolver;

#[cfg(test)]
mod pipeline_test;

use anyhow::{Context, Result};
use std::fs;
use std::path::{self, Path};

use crate::config::Config;
use crate::inf::{Descriptor, StringTable};
use crate::logging::LogSink;
use crate::model::ThemeDescriptor;

use extractor::SchemeRecord;

pub use extractor::{extract, scheme_record};
pub use resolver::resolve;

pub const DEFAULT_THEME_NAME: &str = "Untitled";

/// Reads the installer at `input` and builds its theme manifest.
pub fn convert_descriptor<S: LogSink>(
    input: &Path,
    config: &Config,
    sink: &mut S,
) -> Result<ThemeDescriptor> {
    let input = path::absolute(input).context("Invalid input path")?;
    let data = fs::read(&input)
        .with_context(|| format!("Failed to read descriptor {}", input.display()))?;
    sink.info(format!("Read descriptor {}", input.display()));

    let descriptor = Descriptor::from_bytes(&data)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    convert(&descriptor, Some(input.as_path()), config, sink)
}

/// `source` is the descriptor's location, used only to name an unnamed scheme.
pub fn convert<S: LogSink>(
    descriptor: &Descriptor,
    source: Option<&Path>,
    config: &Config,
    sink: &mut S,
) -> Result<ThemeDescriptor> {
    let record = scheme_record(descriptor)?;
    let strings = StringTable::from_descriptor(descriptor)?;
    let roles = extractor::extract_from_record(&record, &strings, sink)?;

    let name = theme_name(config, &record, &strings, source, sink);
    let search_root = config
        .search_root
        .canonicalize()
        .with_context(|| format!("Invalid search root {}", config.search_root.display()))?;

    resolve(&name, &roles, &search_root, sink)
}

fn theme_name<S: LogSink>(
    config: &Config,
    record: &SchemeRecord,
    strings: &StringTable,
    source: Option<&Path>,
    sink: &mut S,
) -> String {
    if let Some(name) = &config.theme_name {
        return name.clone();
    }

    let expanded = strings.expand(record.value_name.trim());
    let unresolved = expanded.len() > 1 && expanded.starts_with('%') && expanded.ends_with('%');
    if !expanded.is_empty() && !unresolved {
        return expanded;
    }

    let fallback = source
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());
    sink.warn(format!(
        "Scheme name {:?} did not resolve, using {fallback:?}",
        record.value_name
    ));
    fallback
}

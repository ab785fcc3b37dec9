// Pulls the seventeen cursor paths out of the scheme entry

use crate::error::{Error, Result};
use crate::inf::{Descriptor, Entry, SCHEME_SECTION, StringTable};
use crate::logging::LogSink;
use crate::model::{CursorRole, CursorRoleSet};

/// Directory ID 10 (`%SystemRoot%`) as it prefixes cursor paths in scheme entries.
pub const SYSTEM_ROOT_PREFIX: &str = r"%10%\";

/// The scheme entry read by position:
/// `HKCU,"Control Panel\Cursors\Schemes","%SCHEME_NAME%",,"cursor,cursor,..."`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemeRecord {
    pub root: String,
    pub key: String,
    pub value_name: String,
    pub flags: String,
    /// Always the entry's final field.
    pub cursors: String,
}

impl SchemeRecord {
    pub fn from_entry(entry: &Entry) -> Self {
        let fields = entry.fields();
        let last = fields.len().saturating_sub(1);
        let leading = |i: usize| {
            if i < last {
                fields[i].clone()
            } else {
                String::new()
            }
        };

        Self {
            root: leading(0),
            key: leading(1),
            value_name: leading(2),
            flags: leading(3),
            cursors: entry.last_field().unwrap_or_default().to_string(),
        }
    }
}

/// The first entry without a key in `[Scheme.Reg]`. Later entries are ignored.
pub fn scheme_record(descriptor: &Descriptor) -> Result<SchemeRecord> {
    descriptor
        .section(SCHEME_SECTION)
        .and_then(|section| section.entries_for("").next())
        .map(SchemeRecord::from_entry)
        .ok_or(Error::MissingScheme)
}

pub fn extract<S: LogSink>(descriptor: &Descriptor, sink: &mut S) -> Result<CursorRoleSet> {
    let record = scheme_record(descriptor)?;
    let strings = StringTable::from_descriptor(descriptor)?;
    extract_from_record(&record, &strings, sink)
}

pub fn extract_from_record<S: LogSink>(
    record: &SchemeRecord,
    strings: &StringTable,
    sink: &mut S,
) -> Result<CursorRoleSet> {
    let raw: Vec<&str> = record.cursors.split(',').collect();

    if raw.len() < CursorRole::COUNT {
        return Err(Error::MalformedScheme {
            expected: CursorRole::COUNT,
            found: raw.len(),
        });
    }

    let extra = &raw[CursorRole::COUNT..];
    if extra.iter().any(|path| !path.trim().is_empty()) {
        sink.warn(format!(
            "Scheme entry lists {} cursor paths, ignoring the last {}",
            raw.len(),
            extra.len()
        ));
    }

    let paths: [String; CursorRole::COUNT] = std::array::from_fn(|i| clean_path(raw[i], strings));

    for (role, path) in CursorRole::ALL.iter().zip(&paths) {
        sink.debug(format!("{} ({}): {:?}", role, role.windows_name(), path));
    }

    Ok(CursorRoleSet::new(paths))
}

/// Drops the system-root prefix, expands `%NAME%` tokens and switches to `/` separators.
pub fn clean_path(raw: &str, strings: &StringTable) -> String {
    let raw = raw.trim();
    let raw = raw.strip_prefix(SYSTEM_ROOT_PREFIX).unwrap_or(raw);
    strings.expand(raw).replace('\\', "/")
}

use super::mapping::{
    MappingTable, NamespacePath, JS_SERIALIZABLE_MAPPING, OG_SERIALIZABLE_MAPPING,
    SERIALIZABLE_MAPPING,
};

/// Tables in resolution priority order: primary, legacy, cross-runtime.
static TABLES: [MappingTable; 3] = [
    SERIALIZABLE_MAPPING,
    OG_SERIALIZABLE_MAPPING,
    JS_SERIALIZABLE_MAPPING,
];

/// Map a historical namespace path to its current location.
///
/// Returns the first hit in table priority order, or `None` when no table
/// contains the path. A miss is not an error: most paths never moved, and
/// callers use the path unchanged.
///
/// Pure function of the static tables. No I/O, deterministic across runs.
pub fn resolve(path: &[&str]) -> Option<NamespacePath> {
    resolve_in(&TABLES, path)
}

/// The tables are a few dozen entries and resolution happens once per
/// envelope at load time, so a linear scan is sufficient.
fn resolve_in(tables: &[MappingTable], path: &[&str]) -> Option<NamespacePath> {
    tables.iter().find_map(|table| {
        table
            .iter()
            .find(|(key, _)| key.iter().copied().eq(path.iter().copied()))
            .map(|(_, target)| *target)
    })
}

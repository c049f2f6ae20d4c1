// Path/operation normalization.
//
// Callers hand us space-delimited path strings ("system host-name").
// The wire wants an ordered JSON array of segments. Whether an empty
// input is legal depends on the operation: mutations must name a node,
// reads may mean "the whole tree".

use crate::error::Error;

/// Split a space-delimited path string into ordered, non-empty segments.
///
/// Repeated spaces collapse; a blank input yields an empty sequence.
pub fn split_path(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Normalize a path for operations that must name a configuration node
/// (set, delete, comment, generate, reset).
///
/// Fails with [`Error::EmptyPath`] before any network activity.
pub(crate) fn required_path(raw: &str) -> Result<Vec<String>, Error> {
    let path = split_path(raw);
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    Ok(path)
}

/// Normalize a path for operations where a blank input means "the whole
/// configuration tree" (show, showConfig, returnValues, exists).
///
/// The empty sequence is encoded as a present `"path":[]` on the wire.
pub(crate) fn optional_path(raw: &str) -> Vec<String> {
    split_path(raw)
}

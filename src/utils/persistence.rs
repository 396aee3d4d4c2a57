//! JSON snapshot files for the CLI and tests. The core itself never touches disk.

use std::{fs, path::Path};

use tracing::debug;

use crate::{core::utils::atomic_write, errors::Result, ledger::LedgerSnapshot};

/// Writes `snapshot` as pretty JSON through [`atomic_write`].
pub fn save_snapshot_to_file(snapshot: &LedgerSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    atomic_write(path, &json)?;
    debug!(path = %path.display(), transactions = snapshot.transaction_count(), "saved snapshot");
    Ok(())
}

/// Reads a snapshot file. Unreadable or syntactically broken files fail with
/// `Storage`; well-formed JSON carrying an out-of-range record (an unknown
/// frequency, a `transfer` type) fails as a validation error.
pub fn load_snapshot_from_file(path: &Path) -> Result<LedgerSnapshot> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

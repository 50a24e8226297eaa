//! Representations of sonostalgia's memories, as well as a way to load them from YAML files.
//!
//! Separated out to allow for use in other utilities.
#![deny(missing_docs)]

use std::path::Path;

use anyhow::Context as _;
use walkdir::WalkDir;

mod artist;
pub use artist::Artist;

mod memory;
pub use memory::Memory;

mod song;
pub use song::Song;

/// File extensions that are treated as memory files.
pub const MEMORY_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Loads a single memory from a YAML file.
pub fn load_memory(path: &Path) -> anyhow::Result<Memory> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let memory = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(memory)
}

/// Loads every memory file directly inside `dir`, ordered by file name.
///
/// Subdirectories are not descended into. The first file that fails to load
/// aborts the whole load.
pub fn load_memories(dir: &Path) -> anyhow::Result<Vec<Memory>> {
    let mut memories = vec![];
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if !entry.file_type().is_file() || !is_memory_file(entry.path()) {
            continue;
        }

        let memory = load_memory(entry.path())
            .with_context(|| format!("error loading {}", entry.path().display()))?;
        tracing::debug!("Loaded memory {:?} from {}", memory.title, entry.path().display());
        memories.push(memory);
    }
    Ok(memories)
}

fn is_memory_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| MEMORY_EXTENSIONS.contains(&e.to_lowercase().as_str()))
}

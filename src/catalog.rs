use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One level's static data: the picture the tiles are cut from plus the
/// term and definition shown on the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDef {
    pub image: String,
    pub term: String,
    pub definition: String,
}

/// Ordered, validated list of puzzle definitions. Levels cycle through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<PuzzleDef>,
}

impl Catalog {
    /// The catalog shipped with the crate (matches data/puzzles.json).
    pub fn builtin() -> Self {
        let entries = vec![
            PuzzleDef {
                image: "router.jpg".to_string(),
                term: "Router".to_string(),
                definition:
                    "A router connects devices to the internet and each other in a network."
                        .to_string(),
            },
            PuzzleDef {
                image: "server.jpg".to_string(),
                term: "Server".to_string(),
                definition: "A server is a computer that provides data to other computers."
                    .to_string(),
            },
            PuzzleDef {
                image: "firewall.jpg".to_string(),
                term: "Firewall".to_string(),
                definition:
                    "A firewall is a security system that monitors and controls network traffic."
                        .to_string(),
            },
        ];
        Self { entries }
    }

    pub fn new(entries: Vec<PuzzleDef>) -> Result<Self, String> {
        if entries.is_empty() {
            return Err("No puzzles in catalog".to_string());
        }
        for (i, def) in entries.iter().enumerate() {
            validate_def(i, def)?;
        }
        Ok(Self { entries })
    }

    /// Entry for a 1-based level; levels past the end cycle back around.
    #[inline]
    pub fn entry_for_level(&self, level: u32) -> &PuzzleDef {
        let idx = (level.saturating_sub(1) as usize) % self.entries.len();
        &self.entries[idx]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &PuzzleDef> {
        self.entries.iter()
    }
}

fn validate_def(idx: usize, def: &PuzzleDef) -> Result<(), String> {
    if def.term.trim().is_empty() {
        return Err(format!("Puzzle entry {idx} has an empty term"));
    }
    Ok(())
}

/// Load a catalog from a JSON file (runtime), validating every entry.
pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, String> {
    let data = fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
    let raw: Vec<PuzzleDef> =
        serde_json::from_str(&data).map_err(|e| format!("Failed to parse JSON: {e}"))?;
    Catalog::new(raw)
}

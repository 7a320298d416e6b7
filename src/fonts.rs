//! System font discovery backed by `fontdb`.

use crate::{text::Font, Error, Result};

use fontdb::{Database, Family, Query};
use tracing::debug;

/// A database of the font faces installed on the system, used to resolve a family
/// name to a loadable [`Font`].
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Loads all fonts installed on the system.
    #[must_use]
    pub fn load_system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        debug!("loaded {} font faces", db.len());

        Self { db }
    }

    /// Returns the family names of all known faces, sorted and deduplicated.
    #[must_use]
    pub fn families(&self) -> Vec<String> {
        let mut families: Vec<String> = self
            .db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .collect();
        families.sort();
        families.dedup();

        families
    }

    /// Returns the ID of a face matching the given family name, if any. No generic
    /// fallback family is substituted; an unknown family is simply not found.
    #[must_use]
    pub fn query(&self, family: &str) -> Option<fontdb::ID> {
        self.db.query(&Query {
            families: &[Family::Name(family)],
            ..Query::default()
        })
    }

    /// Resolves the given family name and loads the matching face as a [`Font`]
    /// optimized for the given size.
    ///
    /// # Errors
    /// * No installed face matched the family name.
    /// * The face data failed to load.
    pub fn load(&self, family: &str, optimal_size: f32) -> Result<Font> {
        let id = self
            .query(family)
            .ok_or_else(|| Error::FontNotFound(family.to_string()))?;
        debug!(family, "matched font face");

        self.db
            .with_face_data(id, |data, index| {
                Font::from_collection(data, index, optimal_size)
            })
            .ok_or_else(|| Error::FontNotFound(family.to_string()))?
    }
}

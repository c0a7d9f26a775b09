//! Font loading and discovery
//!
//! Uses fontdb to find a system font by family name, then falls back to the
//! generic monospace family. There is no embedded font, so finding nothing
//! is an error.

use crate::config::FontConfig;
use anyhow::{Context, Result, anyhow};
use fontdb::{Database, Family, ID, Query};
use std::sync::OnceLock;

/// Global font database (loaded once)
static FONT_DB: OnceLock<Database> = OnceLock::new();

/// Get or initialize the font database
fn font_db() -> &'static Database {
    FONT_DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        log::info!("Loaded {} system fonts", db.faces().count());
        db
    })
}

/// Font file bytes and the face index inside it (non-zero for collections)
pub type FontFace = (Vec<u8>, u32);

/// Read the file holding face `id`, keeping its index within the file
fn face_data(db: &Database, id: ID) -> Option<FontFace> {
    let face = db.face(id)?;

    let data = match &face.source {
        fontdb::Source::File(path) => std::fs::read(path).ok()?,
        fontdb::Source::Binary(data) => data.as_ref().as_ref().to_vec(),
        fontdb::Source::SharedFile(_path, data) => data.as_ref().as_ref().to_vec(),
    };
    Some((data, face.index))
}

/// Load the face best matching `family` from `db`
fn load_face(db: &Database, family: Family<'_>) -> Option<FontFace> {
    let query = Query {
        families: &[family],
        ..Default::default()
    };

    face_data(db, db.query(&query)?)
}

/// Try the configured families in order, then generic monospace
pub fn load_rain_font(config: &FontConfig) -> Result<FontFace> {
    load_rain_font_from(font_db(), config)
}

/// Same as `load_rain_font`, against an explicit database
pub fn load_rain_font_from(db: &Database, config: &FontConfig) -> Result<FontFace> {
    for family in &config.family {
        if let Some(face) = load_face(db, Family::Name(family)) {
            log::info!("Loaded font: {} (face {})", family, face.1);
            return Ok(face);
        }
        log::debug!("Font family {:?} not installed", family);
    }

    load_face(db, Family::Monospace)
        .inspect(|face| log::info!("Loaded generic monospace font (face {})", face.1))
        .ok_or_else(|| anyhow!("no usable font found"))
        .with_context(|| format!("tried families {:?} and generic monospace", config.family))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_database_is_an_error() {
        let db = Database::new();
        let err = load_rain_font_from(&db, &FontConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("no usable font found"));
    }

    #[test]
    fn test_collection_faces_keep_their_index() {
        let db = font_db();
        // Only meaningful where a font collection is installed
        let Some(face) = db.faces().find(|f| f.index > 0) else {
            return;
        };

        let (data, index) = face_data(db, face.id).expect("installed face is readable");
        assert_eq!(index, face.index);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_family_lookup_returns_matched_face() {
        let db = font_db();
        let Some(face) = db.faces().find(|f| f.index > 0) else {
            return;
        };
        let Some((family, _)) = face.families.first() else {
            return;
        };

        let query = Query {
            families: &[Family::Name(family)],
            ..Default::default()
        };
        let matched = db.query(&query).and_then(|id| db.face(id)).map(|f| f.index);
        let (_, index) = load_face(db, Family::Name(family)).expect("family is installed");
        assert_eq!(Some(index), matched);
    }
}

//! Zentrale Konfiguration für den Stage-Editor.
//!
//! `EditorOptions` enthält die zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::GridRange;

// ── Bühnenmaße ──────────────────────────────────────────────────────

/// Standard-Startwert des X-Bereichs der Bühne.
pub const STAGE_X_START: i32 = 0;
/// Standard-Endwert des X-Bereichs der Bühne.
pub const STAGE_X_END: i32 = 49;
/// Standard-Startwert des Z-Bereichs der Bühne.
pub const STAGE_Z_START: i32 = 0;
/// Standard-Endwert des Z-Bereichs der Bühne.
pub const STAGE_Z_END: i32 = 49;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `stage_editor_core.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// X-Bereich der Bühne (inklusive Grenzen)
    pub stage_x_range: GridRange,
    /// Z-Bereich der Bühne (inklusive Grenzen)
    pub stage_z_range: GridRange,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            stage_x_range: GridRange::new(STAGE_X_START, STAGE_X_END),
            stage_z_range: GridRange::new(STAGE_Z_START, STAGE_Z_END),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("stage_editor_core"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("stage_editor_core.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_preserves_ranges() {
        let options = EditorOptions {
            stage_x_range: GridRange::new(-8, 23),
            stage_z_range: GridRange::new(0, 15),
        };

        let content = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&content).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("stage_editor_core_gibt_es_nicht.toml");
        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("stage_editor_core_defekt.toml");
        std::fs::write(&path, "stage_x_range = \"kaputt\"").expect("Testdatei schreibbar");

        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options, EditorOptions::default());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn save_and_reload_round_trip() {
        let path = std::env::temp_dir().join("stage_editor_core_roundtrip.toml");
        let options = EditorOptions {
            stage_x_range: GridRange::new(0, 31),
            stage_z_range: GridRange::new(-4, 4),
        };

        options.save_to_file(&path).expect("Datei schreibbar");
        let reloaded = EditorOptions::load_from_file(&path);
        assert_eq!(reloaded, options);

        std::fs::remove_file(&path).ok();
    }
}

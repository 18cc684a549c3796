//! Zentrale Konfiguration für den Grundriss-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS};
use serde::{Deserialize, Serialize};

// ── Raster & Schließen ──────────────────────────────────────────────

/// Raster-Zellgröße (Grundriss-Einheiten) für das Snapping.
pub const GRID_SIZE: f32 = 20.0;
/// Klick näher als dieser Abstand am ersten Punkt schließt den Raum.
pub const CLOSURE_THRESHOLD: f32 = 15.0;

// ── Wände ───────────────────────────────────────────────────────────

/// Wandstärke in der 2D-Ansicht.
pub const WALL_THICKNESS_2D: f32 = 10.0;
/// Pick-Radius des Löschen-Werkzeugs (Abstand Cursor → Wand).
pub const WALL_PICK_RADIUS: f32 = 10.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Einheit hinter den Distanz-Labels.
pub const LENGTH_UNIT: &str = "cm";
/// Radius der Punkt-Marker.
pub const POINT_MARKER_RADIUS: f32 = 5.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floor_plan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Raster-Zellgröße für Klick- und Cursor-Snapping
    pub grid_size: f32,
    /// Schließ-Abstand zum ersten Kettenpunkt (strikt kleiner)
    pub closure_threshold: f32,

    // ── Wände ───────────────────────────────────────────────────
    /// Wandhöhe der 3D-Extrusion
    pub wall_height: f32,
    /// Wandstärke der 3D-Körper
    pub wall_thickness_3d: f32,
    /// Wandstärke der 2D-Rechtecke
    pub wall_thickness_2d: f32,
    /// Pick-Radius des Löschen-Werkzeugs
    pub wall_pick_radius: f32,

    // ── Labels & Marker ─────────────────────────────────────────
    /// Einheit hinter den Distanz-Labels
    pub length_unit: String,
    /// Radius der Punkt-Marker
    pub point_marker_radius: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            closure_threshold: CLOSURE_THRESHOLD,

            wall_height: DEFAULT_WALL_HEIGHT,
            wall_thickness_3d: DEFAULT_WALL_THICKNESS,
            wall_thickness_2d: WALL_THICKNESS_2D,
            wall_pick_radius: WALL_PICK_RADIUS,

            length_unit: LENGTH_UNIT.to_string(),
            point_marker_radius: POINT_MARKER_RADIUS,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!(
            "Optionen geladen: Raster {}, Schließ-Abstand {}",
            opts.grid_size,
            opts.closure_threshold
        );
        Ok(opts)
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
            .unwrap_or_else(|_| std::path::PathBuf::from("floor_plan_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floor_plan_editor.toml")
    }

    /// Formatiert eine Länge als Label-Text (ganze Einheiten).
    ///
    /// Halbe Einheiten runden aufwärts (`f32::round`), nicht zur geraden Zahl.
    pub fn format_length(&self, length: f32) -> String {
        format!("{:.0} {}", length.round(), self.length_unit)
    }
}

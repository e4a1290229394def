//! Belegungsraster der Bühne: verfolgt, welche Zellen gefüllt sind.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Achse einer Bereichsprüfung, für Fehlerkontext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Z => "z",
        })
    }
}

/// Inklusiver Integer-Bereich entlang einer Raster-Achse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRange {
    /// Untere Grenze (inklusive)
    pub start: i32,
    /// Obere Grenze (inklusive), `end >= start`
    pub end: i32,
}

impl GridRange {
    /// Erstellt einen neuen Bereich von `start` bis `end` (beide inklusive).
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Abstand zwischen den Grenzen.
    pub fn len(&self) -> i32 {
        self.end - self.start
    }

    /// True, wenn der Wert innerhalb der Grenzen liegt.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.start && value <= self.end
    }
}

/// Fehler bei der Validierung einer Region gegen die Bühnenmaße.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    /// Der Startpunkt liegt außerhalb des konfigurierten Bereichs.
    #[error("Koordinate {value} liegt außerhalb des {axis}-Bereichs [{start}, {end}]")]
    CoordinateOutOfRange {
        axis: Axis,
        value: i32,
        start: i32,
        end: i32,
    },
    /// Startpunkt plus Ausdehnung überschreitet das Bereichsende.
    #[error("Region reicht mit {value} über das {axis}-Bereichsende {end} hinaus")]
    ExtentOutOfRange { axis: Axis, value: i32, end: i32 },
}

/// Belegungszustand der Bühne über zwei inklusive Achsen-Bereiche.
///
/// Alle Regions-Operationen validieren vollständig, bevor irgendeine Zelle
/// angefasst wird; ein ungültiger Aufruf hinterlässt keine Teilschreibungen.
#[derive(Debug, Clone)]
pub struct StageState {
    tiles: Vec<bool>,
    x_range: GridRange,
    z_range: GridRange,
}

impl StageState {
    /// Erstellt einen leeren Bühnenzustand für die gegebenen Bereiche.
    pub fn new(x_range: GridRange, z_range: GridRange) -> Self {
        let width = (x_range.len() + 1) as usize;
        let depth = (z_range.len() + 1) as usize;
        Self {
            tiles: vec![false; width * depth],
            x_range,
            z_range,
        }
    }

    /// Der konfigurierte X-Bereich.
    pub fn x_range(&self) -> GridRange {
        self.x_range
    }

    /// Der konfigurierte Z-Bereich.
    pub fn z_range(&self) -> GridRange {
        self.z_range
    }

    /// Prüft, ob sämtliche Zellen der Region frei sind.
    ///
    /// Bricht beim ersten belegten Feld ab.
    pub fn is_region_free(
        &self,
        x: i32,
        z: i32,
        length_x: i32,
        length_z: i32,
    ) -> Result<bool, RegionError> {
        self.validate_region(x, z, length_x, length_z)?;
        for i in 0..length_x {
            for j in 0..length_z {
                if self.is_tile_filled(x + i, z + j) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Markiert sämtliche Zellen der Region als belegt.
    pub fn fill_region(
        &mut self,
        x: i32,
        z: i32,
        length_x: i32,
        length_z: i32,
    ) -> Result<(), RegionError> {
        self.set_region(x, z, length_x, length_z, true)
    }

    /// Gibt sämtliche Zellen der Region wieder frei.
    pub fn free_region(
        &mut self,
        x: i32,
        z: i32,
        length_x: i32,
        length_z: i32,
    ) -> Result<(), RegionError> {
        self.set_region(x, z, length_x, length_z, false)
    }

    fn set_region(
        &mut self,
        x: i32,
        z: i32,
        length_x: i32,
        length_z: i32,
        value: bool,
    ) -> Result<(), RegionError> {
        self.validate_region(x, z, length_x, length_z)?;
        for i in 0..length_x {
            for j in 0..length_z {
                self.set_tile(x + i, z + j, value);
            }
        }
        Ok(())
    }

    // Obere Grenze vergleicht absichtlich `x + length` (nicht `- 1`) gegen
    // das Bereichsende: eine Region, deren ferne Kante genau auf `end`
    // landet, wird akzeptiert. Aufrufer müssen die Bereiche entsprechend
    // dimensionieren.
    fn validate_region(
        &self,
        x: i32,
        z: i32,
        length_x: i32,
        length_z: i32,
    ) -> Result<(), RegionError> {
        if !self.x_range.contains(x) {
            return Err(RegionError::CoordinateOutOfRange {
                axis: Axis::X,
                value: x,
                start: self.x_range.start,
                end: self.x_range.end,
            });
        }
        if !self.z_range.contains(z) {
            return Err(RegionError::CoordinateOutOfRange {
                axis: Axis::Z,
                value: z,
                start: self.z_range.start,
                end: self.z_range.end,
            });
        }
        if x + length_x > self.x_range.end {
            return Err(RegionError::ExtentOutOfRange {
                axis: Axis::X,
                value: x + length_x,
                end: self.x_range.end,
            });
        }
        if z + length_z > self.z_range.end {
            return Err(RegionError::ExtentOutOfRange {
                axis: Axis::Z,
                value: z + length_z,
                end: self.z_range.end,
            });
        }
        Ok(())
    }

    fn tile_index(&self, x: i32, z: i32) -> usize {
        let column = (x - self.x_range.start) as usize;
        let row = (z - self.z_range.start) as usize;
        column * (self.z_range.len() + 1) as usize + row
    }

    fn is_tile_filled(&self, x: i32, z: i32) -> bool {
        self.tiles[self.tile_index(x, z)]
    }

    fn set_tile(&mut self, x: i32, z: i32, value: bool) {
        let index = self.tile_index(x, z);
        self.tiles[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_ten_by_ten() -> StageState {
        StageState::new(GridRange::new(0, 9), GridRange::new(0, 9))
    }

    #[test]
    fn fill_query_free_round_trip() {
        let mut stage = stage_ten_by_ten();

        stage.fill_region(1, 1, 3, 3).expect("Region gültig");
        assert_eq!(stage.is_region_free(1, 1, 3, 3), Ok(false));

        stage.free_region(1, 1, 3, 3).expect("Region gültig");
        assert_eq!(stage.is_region_free(1, 1, 3, 3), Ok(true));
    }

    #[test]
    fn overlapping_and_disjoint_regions() {
        let mut stage = stage_ten_by_ten();
        // Belegt x in [2,4], z in [2,4].
        stage.fill_region(2, 2, 3, 3).expect("Region gültig");

        // Überlappt in der Zelle (4,4).
        assert_eq!(stage.is_region_free(4, 4, 2, 2), Ok(false));
        // Disjunkt.
        assert_eq!(stage.is_region_free(5, 5, 2, 2), Ok(true));
    }

    #[test]
    fn far_edge_on_range_end_is_accepted() {
        let stage = stage_ten_by_ten();
        // 5 + 4 = 9 landet genau auf dem Bereichsende.
        assert_eq!(stage.is_region_free(5, 5, 4, 4), Ok(true));
    }

    #[test]
    fn extent_beyond_range_end_is_rejected() {
        let stage = stage_ten_by_ten();
        assert_eq!(
            stage.is_region_free(5, 5, 5, 4),
            Err(RegionError::ExtentOutOfRange {
                axis: Axis::X,
                value: 10,
                end: 9
            })
        );
    }

    #[test]
    fn start_outside_range_is_rejected() {
        let stage = stage_ten_by_ten();
        assert_eq!(
            stage.is_region_free(-1, 0, 1, 1),
            Err(RegionError::CoordinateOutOfRange {
                axis: Axis::X,
                value: -1,
                start: 0,
                end: 9
            })
        );
        assert_eq!(
            stage.is_region_free(0, 10, 1, 1),
            Err(RegionError::CoordinateOutOfRange {
                axis: Axis::Z,
                value: 10,
                start: 0,
                end: 9
            })
        );
    }

    #[test]
    fn invalid_fill_leaves_no_partial_writes() {
        let mut stage = stage_ten_by_ten();
        stage
            .fill_region(8, 8, 5, 5)
            .expect_err("Region ragt über den Rand hinaus");
        // Keine einzige Zelle wurde angefasst.
        assert_eq!(stage.is_region_free(0, 0, 9, 9), Ok(true));
    }

    #[test]
    fn negative_range_start_maps_correctly() {
        let mut stage = StageState::new(GridRange::new(-5, 4), GridRange::new(-5, 4));
        stage.fill_region(-5, -5, 2, 2).expect("Region gültig");
        assert_eq!(stage.is_region_free(-5, -5, 1, 1), Ok(false));
        assert_eq!(stage.is_region_free(-3, -3, 2, 2), Ok(true));
    }
}

//! Geometrie-Typen: orthogonale Winkel und Block-Grundflächen.

use glam::{IVec3, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ein Winkel in einer der vier achsenparallelen Richtungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrthoAngle {
    /// 0 Grad
    #[default]
    Zero,
    /// 90 Grad
    Ninety,
    /// 180 Grad
    OneEighty,
    /// 270 Grad
    TwoSeventy,
}

impl OrthoAngle {
    /// Nächstgelegener orthogonaler Winkel zu einem Gradwert.
    ///
    /// Der Wert wird zuerst in den Bereich [0, 360) gewickelt.
    pub fn from_degrees(value: f32) -> Self {
        let mut value = value % 360.0;
        if value < 0.0 {
            value += 360.0;
        }
        if value > 315.0 {
            Self::Zero
        } else if value > 225.0 {
            Self::TwoSeventy
        } else if value > 135.0 {
            Self::OneEighty
        } else if value > 45.0 {
            Self::Ninety
        } else {
            Self::Zero
        }
    }

    /// Der Winkel als Gradwert.
    pub fn to_degrees(self) -> f32 {
        match self {
            Self::Zero => 0.0,
            Self::Ninety => 90.0,
            Self::OneEighty => 180.0,
            Self::TwoSeventy => 270.0,
        }
    }

    /// Dreht um 90 Grad weiter zum nächsten achsenparallelen Winkel.
    pub fn advance(&mut self) {
        *self = match self {
            Self::Zero => Self::Ninety,
            Self::Ninety => Self::OneEighty,
            Self::OneEighty => Self::TwoSeventy,
            Self::TwoSeventy => Self::Zero,
        };
    }

    /// True bei 90 oder 270 Grad: der Block steht quer zur Ausgangsrichtung.
    pub fn is_perpendicular(self) -> bool {
        matches!(self, Self::Ninety | Self::TwoSeventy)
    }
}

/// Achsenparalleles Rechteck aus Rasterzellen: untere Ecke plus Ausdehnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    /// Untere X-Koordinate
    pub x: i32,
    /// Untere Z-Koordinate
    pub z: i32,
    /// Ausdehnung entlang X
    pub length_x: i32,
    /// Ausdehnung entlang Z
    pub length_z: i32,
}

/// Blockmaße mit einer Achse kleiner als 1.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Blockgröße muss auf allen Achsen mindestens 1 sein, erhalten: {size}")]
pub struct BlockSizeError {
    /// Die abgelehnten Maße
    pub size: IVec3,
}

/// Die unveränderlichen Daten eines platzierbaren Blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockData {
    size: IVec3,
    pivot: Vec3,
}

impl BlockData {
    /// Erstellt Blockdaten; jede Achse der Maße muss mindestens 1 sein.
    pub fn new(size: IVec3, pivot: Vec3) -> Result<Self, BlockSizeError> {
        if size.x < 1 || size.y < 1 || size.z < 1 {
            return Err(BlockSizeError { size });
        }
        Ok(Self { size, pivot })
    }

    /// Die Maße des Blocks.
    pub fn size(&self) -> IVec3 {
        self.size
    }

    /// Der Transform-Pivot des Blocks.
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Berechnet die Rasterfläche des Blocks an der gegebenen 2D-Position.
    ///
    /// Bei quer gedrehten Blöcken tauschen X- und Z-Ausdehnung sowie die
    /// Pivot-Komponenten die Rollen; X wird gerundet, Z abgerundet.
    pub fn grid_rect(&self, location: Vec2, is_pivoted: bool) -> GridRect {
        if !is_pivoted {
            let shifted = location - Vec2::new(self.pivot.x, self.pivot.z);
            GridRect {
                x: shifted.x.round() as i32,
                z: shifted.y.floor() as i32,
                length_x: self.size.x,
                length_z: self.size.z,
            }
        } else {
            let shifted = location - Vec2::new(self.pivot.z, self.pivot.x);
            GridRect {
                x: shifted.x.round() as i32,
                z: shifted.y.floor() as i32,
                length_x: self.size.z,
                length_z: self.size.x,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degrees_round_trip_all_angles() {
        for angle in [
            OrthoAngle::Zero,
            OrthoAngle::Ninety,
            OrthoAngle::OneEighty,
            OrthoAngle::TwoSeventy,
        ] {
            assert_eq!(OrthoAngle::from_degrees(angle.to_degrees()), angle);
        }
        assert_relative_eq!(OrthoAngle::TwoSeventy.to_degrees(), 270.0);
    }

    #[test]
    fn from_degrees_wraps_and_snaps() {
        assert_eq!(OrthoAngle::from_degrees(-90.0), OrthoAngle::TwoSeventy);
        assert_eq!(OrthoAngle::from_degrees(370.0), OrthoAngle::Zero);
        assert_eq!(OrthoAngle::from_degrees(100.0), OrthoAngle::Ninety);
        // Genau 45 fällt noch auf Null.
        assert_eq!(OrthoAngle::from_degrees(45.0), OrthoAngle::Zero);
        assert_eq!(OrthoAngle::from_degrees(46.0), OrthoAngle::Ninety);
    }

    #[test]
    fn advance_cycles_through_quarter_turns() {
        let mut angle = OrthoAngle::Zero;
        angle.advance();
        assert_eq!(angle, OrthoAngle::Ninety);
        angle.advance();
        angle.advance();
        angle.advance();
        assert_eq!(angle, OrthoAngle::Zero);
    }

    #[test]
    fn grid_rect_uses_pivot_and_rounding() {
        let data =
            BlockData::new(IVec3::new(2, 1, 3), Vec3::new(1.0, 0.0, 0.0)).expect("gültige Maße");

        let rect = data.grid_rect(Vec2::new(3.2, 4.9), false);
        assert_eq!(
            rect,
            GridRect {
                x: 2,
                z: 4,
                length_x: 2,
                length_z: 3
            }
        );
    }

    #[test]
    fn grid_rect_swaps_extents_when_pivoted() {
        let data =
            BlockData::new(IVec3::new(2, 1, 3), Vec3::new(1.0, 0.0, 0.0)).expect("gültige Maße");

        let rect = data.grid_rect(Vec2::new(3.2, 4.9), true);
        assert_eq!(
            rect,
            GridRect {
                x: 3,
                z: 3,
                length_x: 3,
                length_z: 2
            }
        );
    }

    #[test]
    fn block_size_below_one_is_rejected() {
        let result = BlockData::new(IVec3::new(1, 0, 1), Vec3::ZERO);
        assert_eq!(
            result,
            Err(BlockSizeError {
                size: IVec3::new(1, 0, 1)
            })
        );
    }
}

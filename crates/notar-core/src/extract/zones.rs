//! Zone catalog for the fixed NFS-e template.
//!
//! Each semantic field is identified purely by where its text lands on
//! the page, so the catalog is process-wide configuration data: a
//! static table of named rectangles in page units, loaded once and
//! never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Semantic field a zone maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Document number (número da nota).
    DocumentNumber,
    /// Payer registration identifier (CNPJ).
    Cnpj,
    /// Issue date (data de emissão).
    IssueDate,
    /// Total amount (valor total).
    Amount,
}

/// An inclusive axis-aligned rectangle of page coordinates associated
/// with one semantic field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub field: Field,
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Zone {
    /// Inclusive membership test: boundary coordinates match.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

/// Zone table for the NFS-e template this system targets.
///
/// Invariant: zones for distinct fields must not overlap on this
/// template. If a future template breaks that, resolution falls out of
/// sequential assignment: the last matching fragment in scan order
/// wins (covered by test in the extractor).
pub const NFSE_ZONES: [Zone; 4] = [
    Zone {
        field: Field::DocumentNumber,
        x_min: 32.0,
        x_max: 33.0,
        y_min: 1.0,
        y_max: 2.0,
    },
    Zone {
        field: Field::Cnpj,
        x_min: 22.0,
        x_max: 23.0,
        y_min: 13.0,
        y_max: 14.0,
    },
    Zone {
        field: Field::IssueDate,
        x_min: 31.0,
        x_max: 32.0,
        y_min: 13.0,
        y_max: 14.0,
    },
    Zone {
        field: Field::Amount,
        x_min: 34.0,
        x_max: 35.0,
        y_min: 21.0,
        y_max: 22.5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_boundary_inclusive() {
        let zone = NFSE_ZONES[0];
        assert!(zone.contains(zone.x_min, zone.y_min));
        assert!(zone.contains(zone.x_max, zone.y_max));
        assert!(zone.contains(zone.x_min, zone.y_max));
        assert!(zone.contains(32.5, 1.5));
    }

    #[test]
    fn test_membership_excludes_outside_points() {
        let zone = NFSE_ZONES[0];
        assert!(!zone.contains(zone.x_min - 0.01, zone.y_min));
        assert!(!zone.contains(zone.x_max + 0.01, zone.y_min));
        assert!(!zone.contains(zone.x_min, zone.y_max + 0.01));
    }

    #[test]
    fn test_catalog_zones_do_not_overlap() {
        for (i, a) in NFSE_ZONES.iter().enumerate() {
            for b in NFSE_ZONES.iter().skip(i + 1) {
                let disjoint_x = a.x_max < b.x_min || b.x_max < a.x_min;
                let disjoint_y = a.y_max < b.y_min || b.y_max < a.y_min;
                assert!(
                    disjoint_x || disjoint_y,
                    "zones {:?} and {:?} overlap",
                    a.field,
                    b.field
                );
            }
        }
    }
}

//! Orb configuration table.
//!
//! Each aspect family has a default orb (detection tolerance) and a tight
//! orb (exactness tolerance). The table is an owned value rather than
//! process-wide state, so independent charts can use independent orbs.
//! Configure it up front and share it by `&` reference for read-only use.

use crate::aspect_types::{ASPECT_TABLE_ORDER, AspectDefinition, AspectKind};
use crate::error::AspectError;

/// Built-in orbs, in [`ASPECT_TABLE_ORDER`].
const DEFAULT_DEFINITIONS: [AspectDefinition; 11] = [
    AspectDefinition::new(AspectKind::Conjunction, 8.0, 3.0),
    AspectDefinition::new(AspectKind::Opposition, 8.0, 3.0),
    AspectDefinition::new(AspectKind::Trine, 8.0, 3.0),
    AspectDefinition::new(AspectKind::Square, 8.0, 3.0),
    AspectDefinition::new(AspectKind::Sextile, 6.0, 2.0),
    AspectDefinition::new(AspectKind::Quincunx, 3.0, 1.0),
    AspectDefinition::new(AspectKind::Semisextile, 3.0, 1.0),
    AspectDefinition::new(AspectKind::Semisquare, 3.0, 1.0),
    AspectDefinition::new(AspectKind::Sesquiquadrate, 3.0, 1.0),
    AspectDefinition::new(AspectKind::Quintile, 2.0, 0.5),
    AspectDefinition::new(AspectKind::Biquintile, 2.0, 0.5),
];

/// Per-family orb configuration.
///
/// Deserializing goes through [`OrbTable::from_definitions`], so a decoded
/// table holds every family once, in detection order, with valid orbs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOrbTable", into = "RawOrbTable"))]
pub struct OrbTable {
    definitions: [AspectDefinition; 11],
}

impl Default for OrbTable {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbTable {
    /// Table with the built-in orbs.
    pub const fn new() -> Self {
        Self {
            definitions: DEFAULT_DEFINITIONS,
        }
    }

    /// Build a table from definitions listed in [`ASPECT_TABLE_ORDER`].
    ///
    /// Only `kind`, `default_orb` and `tight_orb` are read; the target angle
    /// and major flag are taken from the family.
    pub fn from_definitions(definitions: &[AspectDefinition; 11]) -> Result<Self, AspectError> {
        let mut table = Self::new();
        for (slot, (def, expected)) in definitions.iter().zip(ASPECT_TABLE_ORDER).enumerate() {
            if def.kind != expected {
                return Err(AspectError::TableOrder {
                    slot,
                    expected,
                    found: def.kind,
                });
            }
            validate_orb(def.kind, def.default_orb)?;
            validate_orb(def.kind, def.tight_orb)?;
            table.definitions[slot] =
                AspectDefinition::new(def.kind, def.default_orb, def.tight_orb);
        }
        Ok(table)
    }

    /// All definitions in detection order.
    pub fn definitions(&self) -> &[AspectDefinition; 11] {
        &self.definitions
    }

    pub fn definition(&self, kind: AspectKind) -> &AspectDefinition {
        &self.definitions[kind.table_index()]
    }

    /// Detection orb for a family.
    pub fn orb(&self, kind: AspectKind) -> f64 {
        self.definition(kind).default_orb
    }

    /// Exactness orb for a family.
    pub fn tight_orb(&self, kind: AspectKind) -> f64 {
        self.definition(kind).tight_orb
    }

    /// Set the detection orb for one family.
    ///
    /// The tight orb is left unchanged.
    pub fn set_orb(&mut self, kind: AspectKind, orb: f64) -> Result<(), AspectError> {
        validate_orb(kind, orb)?;
        self.definitions[kind.table_index()].default_orb = orb;
        Ok(())
    }

    /// Set the detection orb of every major family.
    pub fn set_major_orbs(&mut self, orb: f64) -> Result<(), AspectError> {
        self.set_orbs_where(orb, |def| def.is_major)
    }

    /// Set the detection orb of every minor family.
    pub fn set_minor_orbs(&mut self, orb: f64) -> Result<(), AspectError> {
        self.set_orbs_where(orb, |def| !def.is_major)
    }

    /// Restore the built-in orbs.
    pub fn reset(&mut self) {
        self.definitions = DEFAULT_DEFINITIONS;
    }

    fn set_orbs_where(
        &mut self,
        orb: f64,
        select: impl Fn(&AspectDefinition) -> bool,
    ) -> Result<(), AspectError> {
        for def in self.definitions.iter_mut().filter(|d| select(d)) {
            validate_orb(def.kind, orb)?;
            def.default_orb = orb;
        }
        Ok(())
    }
}

fn validate_orb(kind: AspectKind, orb: f64) -> Result<(), AspectError> {
    if !orb.is_finite() || orb < 0.0 {
        return Err(AspectError::InvalidOrb { kind, orb });
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawOrbTable {
    definitions: [AspectDefinition; 11],
}

#[cfg(feature = "serde")]
impl TryFrom<RawOrbTable> for OrbTable {
    type Error = AspectError;

    fn try_from(raw: RawOrbTable) -> Result<Self, Self::Error> {
        Self::from_definitions(&raw.definitions)
    }
}

#[cfg(feature = "serde")]
impl From<OrbTable> for RawOrbTable {
    fn from(table: OrbTable) -> Self {
        Self {
            definitions: table.definitions,
        }
    }
}

// Keep the const table aligned with the detection order.
const _: () = {
    let mut i = 0;
    while i < ASPECT_TABLE_ORDER.len() {
        let slot = DEFAULT_DEFINITIONS[i].kind as usize;
        assert!(slot == ASPECT_TABLE_ORDER[i] as usize);
        i += 1;
    }
};

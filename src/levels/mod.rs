//! The level catalog: a static, ordered list of hand-authored level
//! definitions plus the override path used by the external level editor.
//!
//! Pure data; nothing here touches the ECS or the physics world.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, sync::LazyLock};
use thiserror::Error;

mod catalog;

pub const LEVEL_COUNT: usize = 20;

/// Closed set of block kinds a level may use. Each maps to a fixed
/// geometry + mass template; `Platform` is the only static kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum BlockKind {
    Standard,
    SmallCube,
    LargeCube,
    Plank,
    Pillar,
    PillarTall,
    PillarThin,
    Platform,
    PlatformDynamic,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockTemplate {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub mass: f32,
    pub is_static: bool,
}

impl BlockTemplate {
    const fn new(width: f32, height: f32, depth: f32, mass: f32) -> Self {
        Self {
            width,
            height,
            depth,
            mass,
            is_static: false,
        }
    }

    const fn fixed(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
            mass: 0.0,
            is_static: true,
        }
    }
}

impl BlockKind {
    /// Sizes are doubled relative to realistic proportions for a toy-block
    /// feel, matching the original tuning.
    pub fn template(self) -> BlockTemplate {
        use BlockKind::*;
        match self {
            Standard => BlockTemplate::new(2.0, 1.6, 6.0, 10.0),
            SmallCube => BlockTemplate::new(1.6, 1.6, 1.6, 4.0),
            LargeCube => BlockTemplate::new(4.0, 4.0, 4.0, 30.0),
            Plank => BlockTemplate::new(8.0, 0.8, 2.0, 8.0),
            Pillar => BlockTemplate::new(1.2, 5.0, 1.2, 6.0),
            PillarTall => BlockTemplate::new(1.2, 8.0, 1.2, 10.0),
            PillarThin => BlockTemplate::new(0.5, 5.0, 0.5, 3.0),
            Platform => BlockTemplate::fixed(6.0, 1.0, 6.0),
            PlatformDynamic => BlockTemplate::new(6.0, 1.0, 6.0, 20.0),
            Heavy => BlockTemplate::new(3.0, 2.0, 3.0, 50.0),
        }
    }
}

/// One block placement inside a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSpec {
    pub kind: BlockKind,
    pub position: [f32; 3],
    /// Yaw in degrees.
    #[serde(default)]
    pub rotation: Option<f32>,
    /// Blocks like jail bars stand near a target without supporting it;
    /// they opt out of the support-height calculation.
    #[serde(default)]
    pub skip_for_target_height: bool,
}

impl BlockSpec {
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    fn bars(mut self) -> Self {
        self.skip_for_target_height = true;
        self
    }
}

/// Declared target placement; the Y coordinate is derived at build time
/// from the supporting blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPosition {
    pub x: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub description: String,
    pub targets: Vec<TargetPosition>,
    pub blocks: Vec<BlockSpec>,
}

static CATALOG: LazyLock<Vec<LevelDefinition>> = LazyLock::new(catalog::build);

/// Returns the definition for a 1-indexed campaign level. Out-of-range
/// requests fall back to level 1, never an error.
pub fn get_level(index: usize) -> &'static LevelDefinition {
    let catalog = &*CATALOG;
    catalog
        .get(index.wrapping_sub(1))
        .unwrap_or_else(|| &catalog[0])
}

#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("level has no target positions")]
    NoTargets,
}

/// Loads an externally supplied ad-hoc level (RON, same shape as a catalog
/// entry). Takes precedence over the catalog when present.
pub fn load_override(path: &str) -> Result<LevelDefinition, OverrideError> {
    let content = fs::read_to_string(path)?;
    let level: LevelDefinition = ron::from_str(&content)?;
    if level.targets.is_empty() {
        return Err(OverrideError::NoTargets);
    }
    Ok(level)
}

// catalog construction helpers

fn block(kind: BlockKind, x: f32, y: f32, z: f32) -> BlockSpec {
    BlockSpec {
        kind,
        position: [x, y, z],
        rotation: None,
        skip_for_target_height: false,
    }
}

fn target(x: f32, z: f32) -> TargetPosition {
    TargetPosition { x, z }
}

fn level(
    name: &str,
    description: &str,
    targets: Vec<TargetPosition>,
    blocks: Vec<BlockSpec>,
) -> LevelDefinition {
    LevelDefinition {
        name: name.into(),
        description: description.into(),
        targets,
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twenty_levels() {
        assert_eq!(CATALOG.len(), LEVEL_COUNT);
    }

    #[test]
    fn every_level_has_at_least_one_target() {
        for def in CATALOG.iter() {
            assert!(!def.targets.is_empty(), "{} has no targets", def.name);
        }
    }

    #[test]
    fn static_kinds_have_zero_mass_and_only_those() {
        use BlockKind::*;
        for kind in [
            Standard,
            SmallCube,
            LargeCube,
            Plank,
            Pillar,
            PillarTall,
            PillarThin,
            Platform,
            PlatformDynamic,
            Heavy,
        ] {
            let template = kind.template();
            if template.is_static {
                assert_eq!(template.mass, 0.0);
            } else {
                assert!(template.mass > 0.0);
            }
        }
        assert!(Platform.template().is_static);
        assert!(!PlatformDynamic.template().is_static);
    }

    #[test]
    fn out_of_range_requests_fall_back_to_level_one() {
        let first = get_level(1);
        assert_eq!(get_level(0).name, first.name);
        assert_eq!(get_level(LEVEL_COUNT + 1).name, first.name);
        assert_eq!(get_level(usize::MAX).name, first.name);

        // In-range requests return the declared entry.
        assert_eq!(get_level(5).name, CATALOG[4].name);
    }

    #[test]
    fn override_round_trips_through_ron() {
        let def = level(
            "Editor Test",
            "Topple the target!",
            vec![target(0.0, -8.0)],
            vec![block(BlockKind::LargeCube, 0.0, 2.0, -8.0).rotated(90.0)],
        );
        let text = ron::ser::to_string(&def).unwrap();
        let parsed: LevelDefinition = ron::from_str(&text).unwrap();
        assert_eq!(parsed.name, "Editor Test");
        assert_eq!(parsed.blocks[0].rotation, Some(90.0));
    }

    #[test]
    fn override_without_targets_is_rejected() {
        let def = LevelDefinition {
            name: "Broken".into(),
            description: String::new(),
            targets: vec![],
            blocks: vec![],
        };
        let text = ron::ser::to_string(&def).unwrap();
        let path = std::env::temp_dir().join("tumblox_override_no_targets.ron");
        fs::write(&path, text).unwrap();
        let result = load_override(path.to_str().unwrap());
        assert!(matches!(result, Err(OverrideError::NoTargets)));
    }
}

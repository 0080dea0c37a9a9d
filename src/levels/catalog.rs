//! The twenty hand-authored campaign levels, in play order.
//!
//! Positions put block centers so bottoms rest on the ground or on the
//! layer below; structures sit around z = -8, in front of the camera.

use super::*;
use super::BlockKind::*;

pub(super) fn build() -> Vec<LevelDefinition> {
    vec![
        // Big dynamic platform on four cube supports.
        level(
            "Platform Drop",
            "Topple the target!",
            vec![target(0.0, -8.0)],
            vec![
                block(LargeCube, -4.0, 2.0, -5.0),
                block(LargeCube, -4.0, 2.0, -11.0),
                block(LargeCube, 4.0, 2.0, -5.0),
                block(LargeCube, 4.0, 2.0, -11.0),
                block(PlatformDynamic, 0.0, 4.5, -8.0),
            ],
        ),
        // Jenga tower with the middle blocks missing.
        level(
            "Jenga Tower",
            "Topple the target!",
            vec![target(0.0, -8.0)],
            vec![
                block(Standard, -2.0, 0.8, -8.0),
                block(Standard, 2.0, 0.8, -8.0),
                block(Standard, 0.0, 2.4, -6.0).rotated(90.0),
                block(Standard, 0.0, 2.4, -10.0).rotated(90.0),
                block(Standard, -2.0, 4.0, -8.0),
                block(Standard, 2.0, 4.0, -8.0),
                block(Standard, 0.0, 5.6, -6.0).rotated(90.0),
                block(Standard, 0.0, 5.6, -10.0).rotated(90.0),
                block(Standard, -2.0, 7.2, -8.0),
                block(Standard, 2.0, 7.2, -8.0),
                block(Plank, 0.0, 8.4, -8.0),
            ],
        ),
        // Table with a row of jail bars blocking the throwing lane.
        level(
            "Behind Bars",
            "Topple the target!",
            vec![target(0.0, -8.0)],
            vec![
                block(PillarThin, -3.0, 2.5, -6.0),
                block(PillarThin, 3.0, 2.5, -6.0),
                block(PillarThin, -3.0, 2.5, -10.0),
                block(PillarThin, 3.0, 2.5, -10.0),
                block(PlatformDynamic, 0.0, 5.5, -8.0),
                block(PillarThin, -2.0, 8.5, -10.5).bars(),
                block(PillarThin, -1.0, 8.5, -10.5).bars(),
                block(PillarThin, 0.0, 8.5, -10.5).bars(),
                block(PillarThin, 1.0, 8.5, -10.5).bars(),
                block(PillarThin, 2.0, 8.5, -10.5).bars(),
            ],
        ),
        // Staircase of cube stacks, targets on the lower two steps.
        level(
            "The Staircase",
            "Topple BOTH targets!",
            vec![target(-4.0, -8.0), target(0.0, -8.0)],
            vec![
                block(LargeCube, -4.0, 2.0, -8.0),
                block(LargeCube, 0.0, 2.0, -8.0),
                block(LargeCube, 0.0, 6.0, -8.0),
                block(LargeCube, 4.0, 2.0, -8.0),
                block(LargeCube, 4.0, 6.0, -8.0),
                block(LargeCube, 4.0, 10.0, -8.0),
            ],
        ),
        // Two fortified jail cells with a heavy divider wall.
        level(
            "Double Lockdown",
            "Topple BOTH targets!",
            vec![target(-5.0, -8.0), target(5.0, -8.0)],
            vec![
                block(Heavy, -5.0, 1.0, -8.0),
                block(PlatformDynamic, -5.0, 3.0, -8.0),
                block(PillarTall, -7.0, 4.0, -11.0).bars(),
                block(PillarTall, -6.0, 4.0, -11.0).bars(),
                block(PillarTall, -5.0, 4.0, -11.0).bars(),
                block(PillarTall, -4.0, 4.0, -11.0).bars(),
                block(PillarTall, -3.0, 4.0, -11.0).bars(),
                block(PillarTall, -8.0, 4.0, -9.0).bars(),
                block(PillarTall, -8.0, 4.0, -7.0).bars(),
                block(Heavy, 5.0, 1.0, -8.0),
                block(PlatformDynamic, 5.0, 3.0, -8.0),
                block(PillarTall, 3.0, 4.0, -11.0).bars(),
                block(PillarTall, 4.0, 4.0, -11.0).bars(),
                block(PillarTall, 5.0, 4.0, -11.0).bars(),
                block(PillarTall, 6.0, 4.0, -11.0).bars(),
                block(PillarTall, 7.0, 4.0, -11.0).bars(),
                block(PillarTall, 8.0, 4.0, -9.0).bars(),
                block(PillarTall, 8.0, 4.0, -7.0).bars(),
                block(Heavy, 0.0, 1.0, -8.0),
                block(Heavy, 0.0, 3.0, -8.0),
            ],
        ),
        // Three separate tables in triangle formation.
        level(
            "Three Tables",
            "Topple all THREE targets!",
            vec![target(-6.0, -5.0), target(6.0, -5.0), target(0.0, -11.0)],
            vec![
                block(Pillar, -8.0, 2.5, -3.0),
                block(Pillar, -4.0, 2.5, -3.0),
                block(Pillar, -8.0, 2.5, -7.0),
                block(Pillar, -4.0, 2.5, -7.0),
                block(PlatformDynamic, -6.0, 5.5, -5.0),
                block(Pillar, 4.0, 2.5, -3.0),
                block(Pillar, 8.0, 2.5, -3.0),
                block(Pillar, 4.0, 2.5, -7.0),
                block(Pillar, 8.0, 2.5, -7.0),
                block(PlatformDynamic, 6.0, 5.5, -5.0),
                block(Pillar, -2.0, 2.5, -9.0),
                block(Pillar, 2.0, 2.5, -9.0),
                block(Pillar, -2.0, 2.5, -13.0),
                block(Pillar, 2.0, 2.5, -13.0),
                block(PlatformDynamic, 0.0, 5.5, -11.0),
            ],
        ),
        // Three towers at staggered heights and depths.
        level(
            "Tower Steps",
            "Topple all THREE targets!",
            vec![target(-6.0, -6.0), target(0.0, -10.0), target(6.0, -14.0)],
            vec![
                block(LargeCube, -6.0, 2.0, -6.0),
                block(LargeCube, 0.0, 2.0, -10.0),
                block(LargeCube, 0.0, 6.0, -10.0),
                block(LargeCube, 6.0, 2.0, -14.0),
                block(LargeCube, 6.0, 6.0, -14.0),
                block(LargeCube, 6.0, 10.0, -14.0),
            ],
        ),
        // A pyramid with targets on the bottom corners and the peak.
        level(
            "The Pyramid",
            "Topple all THREE targets!",
            vec![target(-4.0, -8.0), target(4.0, -8.0), target(0.0, -8.0)],
            vec![
                block(LargeCube, -4.0, 2.0, -8.0),
                block(LargeCube, 0.0, 2.0, -8.0),
                block(LargeCube, 4.0, 2.0, -8.0),
                block(LargeCube, -2.0, 6.0, -8.0),
                block(LargeCube, 2.0, 6.0, -8.0),
                block(LargeCube, 0.0, 10.0, -8.0),
            ],
        ),
        // Targets at increasing depth, the far ones behind walls.
        level(
            "Shooting Gallery",
            "Topple all THREE targets!",
            vec![target(-6.0, -5.0), target(6.0, -9.0), target(0.0, -14.0)],
            vec![
                block(LargeCube, -6.0, 2.0, -5.0),
                block(LargeCube, 6.0, 2.0, -9.0),
                block(LargeCube, 6.0, 6.0, -9.0),
                block(Standard, 4.0, 0.8, -7.0),
                block(Standard, 4.0, 2.4, -7.0),
                block(LargeCube, 0.0, 2.0, -14.0),
                block(Standard, -2.0, 0.8, -11.0),
                block(Standard, 2.0, 0.8, -11.0),
                block(Standard, -2.0, 2.4, -11.0),
                block(Standard, 2.0, 2.4, -11.0),
            ],
        ),
        // Three different challenges side by side.
        level(
            "The Gauntlet",
            "Topple all THREE targets!",
            vec![target(-7.0, -6.0), target(0.0, -12.0), target(7.0, -6.0)],
            vec![
                block(LargeCube, -7.0, 2.0, -6.0),
                block(LargeCube, -7.0, 6.0, -6.0),
                block(Heavy, 0.0, 1.0, -12.0),
                block(PlatformDynamic, 0.0, 2.5, -12.0),
                block(PillarThin, -2.0, 5.5, -13.5).bars(),
                block(PillarThin, -1.0, 5.5, -13.5).bars(),
                block(PillarThin, 0.0, 5.5, -13.5).bars(),
                block(PillarThin, 1.0, 5.5, -13.5).bars(),
                block(PillarThin, 2.0, 5.5, -13.5).bars(),
                block(Pillar, 7.0, 2.5, -6.0),
                block(Pillar, 7.0, 7.5, -6.0),
                block(PlatformDynamic, 7.0, 10.5, -6.0),
            ],
        ),
        // Two domino lines with targets scattered around them.
        level(
            "Domino Chaos",
            "Topple all THREE targets!",
            vec![target(-6.0, -6.0), target(6.0, -6.0), target(0.0, -12.0)],
            vec![
                block(Pillar, -4.0, 2.5, -6.0),
                block(Pillar, -2.0, 2.5, -6.0),
                block(Pillar, 0.0, 2.5, -6.0),
                block(Pillar, 2.0, 2.5, -6.0),
                block(Pillar, 4.0, 2.5, -6.0),
                block(LargeCube, -6.0, 2.0, -6.0),
                block(LargeCube, 6.0, 2.0, -6.0),
                block(Pillar, -4.0, 2.5, -10.0),
                block(Pillar, -2.0, 2.5, -10.0),
                block(Pillar, 0.0, 2.5, -10.0),
                block(Pillar, 2.0, 2.5, -10.0),
                block(LargeCube, 0.0, 2.0, -12.0),
                block(LargeCube, 0.0, 6.0, -12.0),
            ],
        ),
        // Two platforms connected by a plank bridge.
        level(
            "The Bridge",
            "Topple all THREE targets!",
            vec![target(-6.0, -8.0), target(0.0, -8.0), target(6.0, -8.0)],
            vec![
                block(Pillar, -8.0, 2.5, -6.0),
                block(Pillar, -4.0, 2.5, -6.0),
                block(Pillar, -8.0, 2.5, -10.0),
                block(Pillar, -4.0, 2.5, -10.0),
                block(PlatformDynamic, -6.0, 5.5, -8.0),
                block(Plank, 0.0, 5.9, -8.0),
                block(Pillar, 4.0, 2.5, -6.0),
                block(Pillar, 8.0, 2.5, -6.0),
                block(Pillar, 4.0, 2.5, -10.0),
                block(Pillar, 8.0, 2.5, -10.0),
                block(PlatformDynamic, 6.0, 5.5, -8.0),
            ],
        ),
        // Two cages, one on the ground and one elevated.
        level(
            "Double Cage",
            "Topple BOTH targets!",
            vec![target(-5.0, -8.0), target(5.0, -8.0)],
            vec![
                block(PlatformDynamic, -5.0, 0.5, -8.0),
                block(PillarTall, -7.0, 4.5, -6.0).bars(),
                block(PillarTall, -3.0, 4.5, -6.0).bars(),
                block(PillarTall, -7.0, 4.5, -10.0).bars(),
                block(PillarTall, -3.0, 4.5, -10.0).bars(),
                block(LargeCube, 5.0, 2.0, -8.0),
                block(LargeCube, 5.0, 6.0, -8.0),
                block(PlatformDynamic, 5.0, 8.5, -8.0),
                block(PillarTall, 3.0, 12.5, -6.0).bars(),
                block(PillarTall, 7.0, 12.5, -6.0).bars(),
                block(PillarTall, 3.0, 12.5, -10.0).bars(),
                block(PillarTall, 7.0, 12.5, -10.0).bars(),
            ],
        ),
        // Twin towers at different depths, the far one taller.
        level(
            "Twin Skyscrapers",
            "Topple BOTH targets!",
            vec![target(-5.0, -6.0), target(5.0, -12.0)],
            vec![
                block(Heavy, -5.0, 1.0, -6.0),
                block(LargeCube, -5.0, 4.0, -6.0),
                block(Pillar, -5.0, 8.5, -6.0),
                block(SmallCube, -5.0, 11.8, -6.0),
                block(Heavy, 5.0, 1.0, -12.0),
                block(LargeCube, 5.0, 4.0, -12.0),
                block(Pillar, 5.0, 8.5, -12.0),
                block(LargeCube, 5.0, 13.0, -12.0),
                block(Pillar, 5.0, 17.5, -12.0),
                block(SmallCube, 5.0, 20.8, -12.0),
            ],
        ),
        // Semicircle of platforms around a tall center stack.
        level(
            "Amphitheater",
            "Topple all THREE targets!",
            vec![target(-6.0, -6.0), target(0.0, -10.0), target(6.0, -6.0)],
            vec![
                block(LargeCube, -6.0, 2.0, -6.0),
                block(LargeCube, 0.0, 2.0, -10.0),
                block(LargeCube, 0.0, 6.0, -10.0),
                block(LargeCube, 0.0, 10.0, -10.0),
                block(LargeCube, 6.0, 2.0, -6.0),
            ],
        ),
        // Two precarious plank lattices.
        level(
            "House of Cards",
            "Topple BOTH targets!",
            vec![target(-5.0, -6.0), target(5.0, -12.0)],
            vec![
                block(Plank, -6.0, 0.4, -6.0),
                block(Plank, -4.0, 0.4, -6.0),
                block(Plank, -5.0, 1.2, -5.0).rotated(90.0),
                block(Plank, -5.0, 1.2, -7.0).rotated(90.0),
                block(PlatformDynamic, -5.0, 2.0, -6.0),
                block(Plank, 4.0, 0.4, -12.0),
                block(Plank, 6.0, 0.4, -12.0),
                block(Plank, 5.0, 1.2, -11.0).rotated(90.0),
                block(Plank, 5.0, 1.2, -13.0).rotated(90.0),
                block(Plank, 4.0, 2.0, -12.0),
                block(Plank, 6.0, 2.0, -12.0),
                block(Plank, 5.0, 2.8, -11.0).rotated(90.0),
                block(Plank, 5.0, 2.8, -13.0).rotated(90.0),
                block(PlatformDynamic, 5.0, 3.6, -12.0),
            ],
        ),
        // Staggered path of cubes receding into the distance.
        level(
            "The Zigzag",
            "Topple BOTH targets!",
            vec![target(-4.0, -5.0), target(4.0, -11.0)],
            vec![
                block(LargeCube, -4.0, 2.0, -5.0),
                block(LargeCube, -2.0, 2.0, -6.0),
                block(LargeCube, 0.0, 2.0, -7.0),
                block(LargeCube, 2.0, 2.0, -8.0),
                block(LargeCube, 0.0, 2.0, -9.0),
                block(LargeCube, 2.0, 2.0, -10.0),
                block(LargeCube, 4.0, 2.0, -11.0),
            ],
        ),
        // Outer targets are easy; the inner one hides behind heavy walls.
        level(
            "The Fortress",
            "Topple all THREE targets!",
            vec![target(-6.0, -6.0), target(6.0, -6.0), target(0.0, -14.0)],
            vec![
                block(LargeCube, -6.0, 2.0, -6.0),
                block(LargeCube, 6.0, 2.0, -6.0),
                block(LargeCube, 6.0, 6.0, -6.0),
                block(Heavy, -3.0, 1.0, -10.0),
                block(Heavy, 0.0, 1.0, -10.0),
                block(Heavy, 3.0, 1.0, -10.0),
                block(Heavy, -3.0, 3.0, -10.0),
                block(Heavy, 0.0, 3.0, -10.0),
                block(Heavy, 3.0, 3.0, -10.0),
                block(Heavy, -4.0, 1.0, -12.0),
                block(Heavy, 4.0, 1.0, -12.0),
                block(LargeCube, 0.0, 2.0, -14.0),
                block(LargeCube, 0.0, 6.0, -14.0),
            ],
        ),
        // Four targets on four different structure types.
        level(
            "Variety Pack",
            "Topple all FOUR targets!",
            vec![
                target(-7.0, -5.0),
                target(7.0, -5.0),
                target(-4.0, -12.0),
                target(4.0, -12.0),
            ],
            vec![
                block(Pillar, -7.0, 2.5, -5.0),
                block(Pillar, -7.0, 7.5, -5.0),
                block(SmallCube, -7.0, 10.8, -5.0),
                block(Pillar, 5.0, 2.5, -3.0),
                block(Pillar, 9.0, 2.5, -3.0),
                block(Pillar, 5.0, 2.5, -7.0),
                block(Pillar, 9.0, 2.5, -7.0),
                block(PlatformDynamic, 7.0, 5.5, -5.0),
                block(LargeCube, -4.0, 2.0, -12.0),
                block(LargeCube, -4.0, 6.0, -12.0),
                block(LargeCube, -4.0, 10.0, -12.0),
                block(Heavy, 4.0, 1.0, -12.0),
                block(PlatformDynamic, 4.0, 2.5, -12.0),
                block(PillarThin, 2.0, 5.5, -13.0).bars(),
                block(PillarThin, 4.0, 5.5, -13.0).bars(),
                block(PillarThin, 6.0, 5.5, -13.0).bars(),
            ],
        ),
        // Everything combined: wobbly towers, bunkers, and a walled boss.
        level(
            "The Final Boss",
            "Topple all FIVE targets!",
            vec![
                target(-8.0, -5.0),
                target(8.0, -5.0),
                target(-4.0, -10.0),
                target(4.0, -10.0),
                target(0.0, -14.0),
            ],
            vec![
                block(Pillar, -8.0, 2.5, -5.0),
                block(Pillar, -8.0, 7.5, -5.0),
                block(SmallCube, -8.0, 10.8, -5.0),
                block(Pillar, 8.0, 2.5, -5.0),
                block(Pillar, 8.0, 7.5, -5.0),
                block(SmallCube, 8.0, 10.8, -5.0),
                block(Heavy, -4.0, 1.0, -10.0),
                block(PlatformDynamic, -4.0, 2.5, -10.0),
                block(PillarThin, -6.0, 5.5, -11.0).bars(),
                block(PillarThin, -4.0, 5.5, -11.0).bars(),
                block(PillarThin, -2.0, 5.5, -11.0).bars(),
                block(Heavy, 4.0, 1.0, -10.0),
                block(PlatformDynamic, 4.0, 2.5, -10.0),
                block(PillarThin, 2.0, 5.5, -11.0).bars(),
                block(PillarThin, 4.0, 5.5, -11.0).bars(),
                block(PillarThin, 6.0, 5.5, -11.0).bars(),
                block(LargeCube, -2.0, 2.0, -14.0),
                block(LargeCube, 2.0, 2.0, -14.0),
                block(LargeCube, 0.0, 6.0, -14.0),
                block(Standard, -3.0, 0.8, -12.0),
                block(Standard, 0.0, 0.8, -12.0),
                block(Standard, 3.0, 0.8, -12.0),
                block(Standard, -3.0, 2.4, -12.0),
                block(Standard, 0.0, 2.4, -12.0),
                block(Standard, 3.0, 2.4, -12.0),
            ],
        ),
    ]
}

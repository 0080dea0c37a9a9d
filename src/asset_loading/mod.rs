use crate::*;
use bevy::{asset::Asset, gltf::Gltf};

#[cfg(feature = "audio")]
use bevy_seedling::sample::AudioSample;
#[cfg(feature = "audio")]
use bevy_shuffle_bag::ShuffleBag;

mod tracking;
pub use tracking::*;

pub fn plugin(app: &mut App) {
    // start asset loading
    app.add_plugins(tracking::plugin).load_resource::<Models>();

    #[cfg(feature = "audio")]
    app.load_resource::<AudioSources>();
}

#[derive(Asset, Clone, Reflect, Resource)]
#[reflect(Resource)]
pub struct Models {
    /// Humanoid the player knocks over; visual only, physics lives on an
    /// invisible proxy.
    #[dependency]
    pub target: Handle<Gltf>,
    /// Cosmetic skin following the thrown chain.
    #[dependency]
    pub projectile: Handle<Gltf>,
}

impl FromWorld for Models {
    fn from_world(world: &mut World) -> Self {
        let assets = world.resource::<AssetServer>();
        Self {
            target: assets.load("models/target.glb"),
            projectile: assets.load("models/projectile.glb"),
        }
    }
}

#[cfg(feature = "audio")]
#[derive(Asset, Clone, Reflect, Resource)]
#[reflect(Resource)]
pub struct AudioSources {
    // SFX
    #[dependency]
    pub hover: Handle<AudioSample>,
    #[dependency]
    pub press: Handle<AudioSample>,
    #[dependency]
    pub throws: ShuffleBag<Handle<AudioSample>>,
    #[dependency]
    pub wood_hits: ShuffleBag<Handle<AudioSample>>,
    #[dependency]
    pub target_hits: ShuffleBag<Handle<AudioSample>>,

    // music
    #[dependency]
    pub soundtrack: Handle<AudioSample>,
}

#[cfg(feature = "audio")]
impl AudioSources {
    pub const BTN_HOVER: &'static str = "audio/sfx/btn-hover.ogg";
    pub const BTN_PRESS: &'static str = "audio/sfx/btn-press.ogg";

    pub const THROWS: &[&'static str] = &["audio/sfx/throw1.ogg", "audio/sfx/throw2.ogg"];
    pub const WOOD_HITS: &[&'static str] = &[
        "audio/sfx/wood-hit1.ogg",
        "audio/sfx/wood-hit2.ogg",
        "audio/sfx/wood-hit3.ogg",
    ];
    pub const TARGET_HITS: &[&'static str] = &[
        "audio/sfx/target-hit1.ogg",
        "audio/sfx/target-hit2.ogg",
        "audio/sfx/target-hit3.ogg",
        "audio/sfx/target-hit4.ogg",
    ];
    pub const SOUNDTRACK: &'static str = "audio/music/tumblox-theme.ogg";
}

#[cfg(feature = "audio")]
impl FromWorld for AudioSources {
    fn from_world(world: &mut World) -> Self {
        let mut rng = rand::rng();
        let a = world.resource::<AssetServer>();

        let throws = Self::THROWS.iter().map(|p| a.load(*p)).collect::<Vec<_>>();
        let wood = Self::WOOD_HITS.iter().map(|p| a.load(*p)).collect::<Vec<_>>();
        let target = Self::TARGET_HITS.iter().map(|p| a.load(*p)).collect::<Vec<_>>();

        Self {
            hover: a.load(Self::BTN_HOVER),
            press: a.load(Self::BTN_PRESS),
            throws: ShuffleBag::try_new(throws, &mut rng).unwrap(),
            wood_hits: ShuffleBag::try_new(wood, &mut rng).unwrap(),
            target_hits: ShuffleBag::try_new(target, &mut rng).unwrap(),
            soundtrack: a.load(Self::SOUNDTRACK),
        }
    }
}

use super::*;
use bevy::ecs::spawn::SpawnWith;
use bevy::ecs::system::IntoObserverSystem;
use bevy::ui::Val::*;
use std::borrow::Cow;

/// A root UI node that fills the window and centers its content.
pub fn ui_root(name: impl Into<Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            width: Percent(100.0),
            height: Percent(100.0),
            position_type: PositionType::Absolute,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Vh(2.0),
            ..default()
        },
        // Don't block picking events for other UI roots.
        Pickable::IGNORE,
    )
}

pub fn label(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Name::new("Label"),
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Pickable::IGNORE,
    )
}

/// A simple header label. Bigger than [`label`].
pub fn header(text: impl Into<String>) -> impl Bundle {
    label(text, 42.0, TEXT)
}

/// A wide button with text and an action defined as an [`Observer`].
pub fn btn<E, B, M, I>(text: impl Into<String>, action: I) -> impl Bundle
where
    E: EntityEvent,
    B: Bundle,
    I: IntoObserverSystem<E, B, M>,
{
    let text = text.into();
    let action = IntoObserverSystem::into_system(action);

    (
        Button,
        Name::new("Button"),
        Node::default(),
        Pickable::IGNORE,
        Children::spawn(SpawnWith(move |parent: &mut ChildSpawner| {
            let content = parent
                .spawn((
                    Text::new(text),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(TEXT),
                    Pickable::IGNORE,
                ))
                .id();

            parent
                .spawn((
                    Name::new("Button Content"),
                    Node {
                        min_width: Vw(18.0),
                        padding: UiRect::axes(Vw(2.0), Vh(1.2)),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(BUTTON_BG),
                    BorderRadius::all(Px(8.0)),
                    InteractionPalette {
                        none: BUTTON_BG,
                        hovered: BUTTON_HOVERED_BG,
                        pressed: BUTTON_PRESSED_BG,
                    },
                ))
                .add_children(&[content])
                .observe(action);
        })),
    )
}

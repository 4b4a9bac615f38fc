use bevy::prelude::*;
use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;
use crate::config::RaceConfig;
use crate::game_logic::{PhysicsInput, PlayerId};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlayerKeys {
    pub left: KeyCode,
    pub right: KeyCode,
    pub accelerate: KeyCode,
    pub brake: KeyCode,
}

impl PlayerKeys {
    pub fn sample(&self, input: &ButtonInput<KeyCode>) -> PhysicsInput {
        PhysicsInput {
            left: input.pressed(self.left),
            right: input.pressed(self.right),
            accelerate: input.pressed(self.accelerate),
            brake: input.pressed(self.brake),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub player_one: PlayerKeys,
    pub player_two: PlayerKeys,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player_one: PlayerKeys {
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
                accelerate: KeyCode::KeyW,
                brake: KeyCode::KeyS,
            },
            player_two: PlayerKeys {
                left: KeyCode::ArrowLeft,
                right: KeyCode::ArrowRight,
                accelerate: KeyCode::ArrowUp,
                brake: KeyCode::ArrowDown,
            },
        }
    }
}

impl KeyBindings {
    pub fn for_player(&self, player: PlayerId) -> &PlayerKeys {
        match player {
            PlayerId::One => &self.player_one,
            PlayerId::Two => &self.player_two,
        }
    }
}

/// This frame's input snapshot. The simulation only ever reads this, never
/// the live keyboard state.
#[derive(Resource, Default, Debug)]
pub struct PlayerInputs {
    inputs: [PhysicsInput; 2],
}

impl PlayerInputs {
    pub fn get(&self, player: PlayerId) -> &PhysicsInput {
        &self.inputs[player.index()]
    }

    pub fn set(&mut self, player: PlayerId, input: PhysicsInput) {
        self.inputs[player.index()] = input;
    }
}

pub fn sample_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<RaceConfig>,
    mut inputs: ResMut<PlayerInputs>,
) {
    for player in PlayerId::ALL {
        let sampled = config.bindings.for_player(player).sample(&keyboard);
        inputs.set(player, sampled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_use_separate_keys() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        keyboard.press(KeyCode::ArrowLeft);

        let one = bindings.player_one.sample(&keyboard);
        let two = bindings.player_two.sample(&keyboard);

        assert!(one.accelerate && !one.left);
        assert!(two.left && !two.accelerate);
    }

    #[test]
    fn test_held_key_seen_every_frame() {
        let mut app = App::new();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowDown);
        app.insert_resource(keyboard)
            .insert_resource(RaceConfig::default())
            .init_resource::<PlayerInputs>()
            .add_systems(Update, sample_inputs);

        for _ in 0..3 {
            app.update();
            let inputs = app.world().resource::<PlayerInputs>();
            assert!(inputs.get(PlayerId::Two).brake);
            assert_eq!(*inputs.get(PlayerId::One), PhysicsInput::default());
        }
    }

    #[test]
    fn test_bindings_from_json() {
        let config = RaceConfig::from_json(
            r#"{ "bindings": { "player_two": {
                "left": "KeyJ", "right": "KeyL", "accelerate": "KeyI", "brake": "KeyK"
            } } }"#,
        )
        .unwrap();
        assert_eq!(config.bindings.player_two.left, KeyCode::KeyJ);
        assert_eq!(config.bindings.player_one, KeyBindings::default().player_one);
    }
}

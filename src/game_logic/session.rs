use bevy::prelude::*;
use crate::config::Tuning;
use crate::game_logic::{apply_physics, PhysicsInput, PlayerId, PlayerState};

#[derive(Default, Debug)]
pub struct PlayerSlot {
    pub state: PlayerState,
    /// Set once the car's scene has finished instancing.
    pub car: Option<Entity>,
}

/// Everything that changes during a race, for both players.
#[derive(Resource, Default, Debug)]
pub struct RaceSession {
    players: [PlayerSlot; 2],
}

impl RaceSession {
    pub fn state(&self, player: PlayerId) -> &PlayerState {
        &self.players[player.index()].state
    }

    pub fn car(&self, player: PlayerId) -> Option<Entity> {
        self.players[player.index()].car
    }

    pub fn attach_car(&mut self, player: PlayerId, car: Entity) {
        self.players[player.index()].car = Some(car);
    }

    /// Does nothing until the player's car has loaded. Returns whether the
    /// state advanced.
    pub fn step(&mut self, player: PlayerId, input: &PhysicsInput, tuning: &Tuning) -> bool {
        let slot = &mut self.players[player.index()];
        if slot.car.is_none() {
            return false;
        }
        apply_physics(&mut slot.state, input, tuning);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_logic::Lane;

    #[test]
    fn test_players_are_independent() {
        let mut session = RaceSession::default();
        let tuning = Tuning::default();
        let input = PhysicsInput {
            accelerate: true,
            right: true,
            ..Default::default()
        };

        session.attach_car(PlayerId::One, Entity::from_raw(1));
        session.attach_car(PlayerId::Two, Entity::from_raw(2));
        assert!(session.step(PlayerId::One, &input, &tuning));

        assert_eq!(session.state(PlayerId::One).lane, Lane::Right);
        assert!(session.state(PlayerId::One).speed > 0.0);
        assert_eq!(*session.state(PlayerId::Two), PlayerState::default());
    }

    #[test]
    fn test_unloaded_player_does_not_advance() {
        let mut session = RaceSession::default();
        let tuning = Tuning::default();
        let input = PhysicsInput {
            accelerate: true,
            left: true,
            ..Default::default()
        };

        for _ in 0..100 {
            assert!(!session.step(PlayerId::One, &input, &tuning));
        }
        assert_eq!(*session.state(PlayerId::One), PlayerState::default());

        // a late car starts from rest at the start line
        session.attach_car(PlayerId::One, Entity::from_raw(7));
        assert!(session.step(PlayerId::One, &input, &tuning));
        assert_eq!(session.state(PlayerId::One).speed, tuning.accel_step);
    }

    #[test]
    fn test_cars_start_unloaded() {
        let mut session = RaceSession::default();
        assert!(session.car(PlayerId::One).is_none());
        assert!(session.car(PlayerId::Two).is_none());

        let car = Entity::from_raw(42);
        session.attach_car(PlayerId::Two, car);
        assert_eq!(session.car(PlayerId::Two), Some(car));
        assert!(session.car(PlayerId::One).is_none());
    }
}

//! Reactions to events that arrive between ticks

use crate::core::arithmetic::rotation_to_location;
use crate::core::types::{Location, Rotation, SimTime};
use crate::tactics::context::NavigationIntent;
use crate::world::{Actuators, BotCommand};

/// Look towards a heard noise
///
/// While a path is running only the focus is redirected; standing still we
/// halt and turn. The focus is released again by the facing update once the
/// reactive window expires.
pub fn face_noise(
    actuators: &mut dyn Actuators,
    nav: &mut NavigationIntent,
    origin: Location,
    rotation: Rotation,
    projection: f32,
    now: SimTime,
) {
    let focus = rotation_to_location(origin, rotation, projection);
    tracing::debug!(?focus, "turning towards noise");

    if actuators.is_following_path() {
        actuators.issue(BotCommand::SetFocus(Some(focus)));
    } else {
        actuators.issue(BotCommand::StopMovement);
        actuators.issue(BotCommand::TurnTo(focus));
    }
    nav.last_reactive_turn = Some(now);
}

/// Hit by something we cannot see: stop and turn around
pub fn turn_on_attacker(actuators: &mut dyn Actuators) {
    if actuators.is_following_path() {
        actuators.issue(BotCommand::StopPath);
    } else {
        actuators.issue(BotCommand::StopMovement);
    }
    actuators.issue(BotCommand::TurnBy { degrees: 180.0 });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RecordingActuators;

    #[test]
    fn test_noise_while_pathing_only_refocuses() {
        let mut actuators = RecordingActuators::new();
        actuators.issue(BotCommand::FollowPath {
            from: Location::ZERO,
            to: Location::X,
        });
        let mut nav = NavigationIntent::default();

        face_noise(&mut actuators, &mut nav, Location::ZERO, Rotation::new(0.0, 0.0), 500.0, 4.0);

        let last = actuators.commands().last().cloned();
        assert!(matches!(last, Some(BotCommand::SetFocus(Some(_)))));
        assert_eq!(nav.last_reactive_turn, Some(4.0));
        assert!(actuators.is_following_path());
    }

    #[test]
    fn test_noise_while_idle_turns() {
        let mut actuators = RecordingActuators::new();
        let mut nav = NavigationIntent::default();

        face_noise(&mut actuators, &mut nav, Location::ZERO, Rotation::new(0.0, 90.0), 500.0, 1.0);

        assert_eq!(actuators.commands().len(), 2);
        assert_eq!(actuators.commands()[0], BotCommand::StopMovement);
        match actuators.commands()[1] {
            BotCommand::TurnTo(focus) => assert!((focus.y - 500.0).abs() < 0.1),
            ref other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_turn_on_attacker() {
        let mut actuators = RecordingActuators::new();
        turn_on_attacker(&mut actuators);
        assert_eq!(
            actuators.commands(),
            &[BotCommand::StopMovement, BotCommand::TurnBy { degrees: 180.0 }]
        );
    }
}

//! Per-tick motion
//!
//! Positions here are authoritative and change once per tick. Any smoothing
//! between ticks is left to the renderer.

use super::state::{Target, Weapon};

/// Move every target down by its falling speed
pub fn advance_targets(targets: &mut [Target]) {
    for target in targets {
        target.pos.y += target.falling_speed;
    }
}

/// Move every projectile by its vertical speed (negative is upward)
pub fn advance_weapons(weapons: &mut [Weapon]) {
    for weapon in weapons {
        weapon.pos.y += weapon.vertical_speed;
    }
}

/// Drop projectiles that have left the top of the field; returns how many
pub fn cull_off_field(weapons: &mut Vec<Weapon>) -> usize {
    let before = weapons.len();
    weapons.retain(|w| !w.is_off_field());
    before - weapons.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::TargetKind;

    #[test]
    fn test_targets_fall_and_weapons_rise() {
        let mut targets = vec![
            Target::new(1, 10.0, 2.0, TargetKind::Easy),
            Target::new(2, 20.0, 0.5, TargetKind::strong()),
        ];
        let mut weapons = vec![Weapon::new(3, 10.0, 500.0, 10.0)];

        advance_targets(&mut targets);
        advance_targets(&mut targets);
        advance_weapons(&mut weapons);

        assert_eq!(targets[0].pos.y, 4.0);
        assert_eq!(targets[1].pos.y, 1.0);
        assert_eq!(targets[0].pos.x, 10.0);
        assert_eq!(weapons[0].pos.y, 490.0);
        assert_eq!(weapons[0].pos.x, 10.0);
    }

    #[test]
    fn test_cull_keeps_partially_visible() {
        let mut weapons = vec![
            Weapon::new(1, 0.0, -31.0, 10.0),
            Weapon::new(2, 0.0, -33.0, 10.0),
            Weapon::new(3, 0.0, 100.0, 10.0),
        ];
        assert_eq!(cull_off_field(&mut weapons), 1);
        let ids: Vec<u32> = weapons.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}

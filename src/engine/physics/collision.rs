use rapier3d::prelude::*;

/// Collision groups for filtering what the character and its queries can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// The controlled character capsule
    Character = 0b0000_0010,

    /// Static level geometry (ground, walls, steps)
    Level = 0b0000_0100,

    /// Trigger volumes - never block movement
    Sensor = 0b0000_1000,
}

impl CollisionGroups {
    /// Convert to rapier3d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // The character is blocked by level geometry and overlaps sensors
            CollisionGroups::Character => Group::from_bits_truncate(
                CollisionGroups::Level as u32
                    | CollisionGroups::Default as u32
                    | CollisionGroups::Sensor as u32,
            ),

            // Level geometry only matters to things that move through it
            CollisionGroups::Level => Group::from_bits_truncate(
                CollisionGroups::Character as u32 | CollisionGroups::Default as u32,
            ),

            CollisionGroups::Sensor => Group::from_bits_truncate(CollisionGroups::Character as u32),

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }

    /// Groups used by ground probes and swept moves issued for the character.
    /// Sensors are excluded so trigger volumes never count as ground.
    pub fn character_query() -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_truncate(CollisionGroups::Character as u32),
            Group::from_bits_truncate(CollisionGroups::Level as u32 | CollisionGroups::Default as u32),
        )
    }
}

use core_types::{Productivity, TeamMember};

/// The static team roster shown in the performance table.
pub static ROSTER: [TeamMember; 5] = [
    TeamMember {
        member: "Sarah Chen",
        role: "Engineering",
        velocity: 87,
        tasks: 24,
        status: Productivity::High,
    },
    TeamMember {
        member: "Marcus Rivera",
        role: "Product",
        velocity: 74,
        tasks: 18,
        status: Productivity::High,
    },
    TeamMember {
        member: "Elena Volkov",
        role: "Design",
        velocity: 69,
        tasks: 15,
        status: Productivity::Medium,
    },
    TeamMember {
        member: "James Park",
        role: "Sales",
        velocity: 82,
        tasks: 31,
        status: Productivity::High,
    },
    TeamMember {
        member: "Aria Sharma",
        role: "Marketing",
        velocity: 58,
        tasks: 12,
        status: Productivity::Medium,
    },
];

/// Coarse banding of a member's velocity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityTier {
    Strong,
    Steady,
    Lagging,
}

impl VelocityTier {
    pub fn of(velocity: u8) -> Self {
        match velocity {
            75.. => VelocityTier::Strong,
            60..=74 => VelocityTier::Steady,
            _ => VelocityTier::Lagging,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VelocityTier::Strong => "strong",
            VelocityTier::Steady => "steady",
            VelocityTier::Lagging => "lagging",
        }
    }
}

/// First letter of every word in the member's name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn roster_is_fixed() {
        let names: Vec<&str> = ROSTER.iter().map(|m| m.member).collect();
        assert_eq!(
            names,
            vec!["Sarah Chen", "Marcus Rivera", "Elena Volkov", "James Park", "Aria Sharma"]
        );
        assert_eq!(ROSTER[3].tasks, 31);
        assert_eq!(ROSTER[4].status, Productivity::Medium);
    }

    #[test]
    fn tiers_split_at_75_and_60() {
        assert_eq!(VelocityTier::of(87), VelocityTier::Strong);
        assert_eq!(VelocityTier::of(75), VelocityTier::Strong);
        assert_eq!(VelocityTier::of(74), VelocityTier::Steady);
        assert_eq!(VelocityTier::of(60), VelocityTier::Steady);
        assert_eq!(VelocityTier::of(58), VelocityTier::Lagging);
    }

    #[test]
    fn initials_of_roster() {
        let all: Vec<String> = ROSTER.iter().map(|m| initials(m.member)).collect();
        assert_eq!(all, vec!["SC", "MR", "EV", "JP", "AS"]);
        assert_eq!(initials(""), "");
    }
}

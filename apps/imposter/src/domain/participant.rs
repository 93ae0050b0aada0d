use serde::{Deserialize, Serialize};

/// Positional identity: index into the round's ordered lineup.
pub type ParticipantId = usize;

/// Secret role for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Knows the topic.
    Insider,
    /// Does not know the topic.
    Impostor,
}

impl Role {
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Insider => "INNOCENT",
            Role::Impostor => "IMPOSTER",
        }
    }
}

/// Who supplies a participant's actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    Human,
    Automated,
}

/// A lineup slot before roles are dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    pub kind: ParticipantKind,
}

impl Seat {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParticipantKind::Human,
        }
    }

    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParticipantKind::Automated,
        }
    }
}

/// A player for one round. Role and kind never change after setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    name: String,
    kind: ParticipantKind,
    role: Role,
}

impl Participant {
    pub fn new(name: impl Into<String>, kind: ParticipantKind, role: Role) -> Self {
        Self {
            name: name.into(),
            kind,
            role,
        }
    }

    pub fn from_seat(seat: Seat, role: Role) -> Self {
        Self::new(seat.name, seat.kind, role)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParticipantKind {
        self.kind
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_human(&self) -> bool {
        self.kind == ParticipantKind::Human
    }

    pub fn is_impostor(&self) -> bool {
        self.role == Role::Impostor
    }
}

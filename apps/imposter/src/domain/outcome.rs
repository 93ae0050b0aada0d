//! Terminal round outcomes and their end-of-game messages.

use serde::Serialize;

use crate::domain::participant::{ParticipantId, Role};
use crate::domain::topic::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeKind {
    /// Impostor named the topic during the clue phase.
    ImposterGuessWin,
    /// An insider was uniquely voted out.
    ImposterSurvivedWin,
    /// The impostor was uniquely voted out.
    InnocentCaughtWin,
    /// The top vote count was shared (or nobody voted).
    TiedVoteInnocentWin,
}

impl OutcomeKind {
    pub const ALL: [OutcomeKind; 4] = [
        OutcomeKind::ImposterGuessWin,
        OutcomeKind::ImposterSurvivedWin,
        OutcomeKind::InnocentCaughtWin,
        OutcomeKind::TiedVoteInnocentWin,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::ImposterGuessWin => "IMPOSTER_GUESS_WIN",
            OutcomeKind::ImposterSurvivedWin => "IMPOSTER_SURVIVED_WIN",
            OutcomeKind::InnocentCaughtWin => "INNOCENT_CAUGHT_WIN",
            OutcomeKind::TiedVoteInnocentWin => "TIED_VOTE_INNOCENT_WIN",
        }
    }

    /// Side that wins with this outcome.
    pub const fn winner(&self) -> Role {
        match self {
            OutcomeKind::ImposterGuessWin | OutcomeKind::ImposterSurvivedWin => Role::Impostor,
            OutcomeKind::InnocentCaughtWin | OutcomeKind::TiedVoteInnocentWin => Role::Insider,
        }
    }

    /// Headline, tailored to the human's role when there is one.
    pub fn headline(&self, human_role: Option<Role>) -> &'static str {
        match (self, human_role) {
            (OutcomeKind::ImposterGuessWin, Some(Role::Impostor)) => {
                "CONGRATULATIONS, YOU WIN! You correctly guessed the word!"
            }
            (OutcomeKind::ImposterGuessWin, Some(Role::Insider)) => {
                "DEFEAT! The Imposter slipped away and guessed the word."
            }
            (OutcomeKind::ImposterGuessWin, None) => {
                "IMPOSTER WINS by successfully guessing the word!"
            }
            (OutcomeKind::ImposterSurvivedWin, Some(Role::Impostor)) => {
                "CONGRATULATIONS, YOU WIN! You survived the vote and tricked the Innocents."
            }
            (OutcomeKind::ImposterSurvivedWin, Some(Role::Insider)) => {
                "DEFEAT! You eliminated an innocent player, and the Imposter wins."
            }
            (OutcomeKind::ImposterSurvivedWin, None) => {
                "IMPOSTER WINS! The Innocents failed to catch them in time."
            }
            (OutcomeKind::InnocentCaughtWin, Some(Role::Impostor)) => {
                "YOU LOSE! You were caught and voted out by the Innocents."
            }
            (OutcomeKind::InnocentCaughtWin, Some(Role::Insider)) => {
                "CONGRATULATIONS, YOU WIN! You successfully identified the Imposter."
            }
            (OutcomeKind::InnocentCaughtWin, None) => {
                "INNOCENTS WIN! The Imposter was successfully identified and voted out."
            }
            (OutcomeKind::TiedVoteInnocentWin, Some(Role::Impostor)) => {
                "YOU LOSE! The vote was a tie, and you failed to escape the round."
            }
            (OutcomeKind::TiedVoteInnocentWin, Some(Role::Insider)) => {
                "CONGRATULATIONS, YOU WIN! The vote was tied, saving the Innocents."
            }
            (OutcomeKind::TiedVoteInnocentWin, None) => {
                "INNOCENTS WIN! The vote was tied, and the Imposter failed to secure a victory."
            }
        }
    }
}

/// Final result of a round, with what the end screen needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub kind: OutcomeKind,
    pub topic: Topic,
    pub impostor: ParticipantId,
    pub impostor_name: String,
    /// Participant voted out, if the vote produced a unique leader.
    pub eliminated: Option<ParticipantId>,
    /// Role of the (first) human participant, for message tailoring.
    pub human_role: Option<Role>,
}

impl RoundOutcome {
    pub fn headline(&self) -> &'static str {
        self.kind.headline(self.human_role)
    }

    pub fn winner(&self) -> Role {
        self.kind.winner()
    }
}

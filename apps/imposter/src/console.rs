//! Terminal adapter: prompts humans on a shared device and narrates the round.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::domain::participant::{Participant, Role, Seat};
use crate::domain::rules::SUBROUNDS;
use crate::domain::{Clue, RoundOutcome, Topic, VoteResolution, VoteTally};
use crate::engine::lineup::{mixed_lineup, solo_lineup};
use crate::engine::{BallotView, ClueAction, RoundAdapter, RoundEvent, TurnView};
use crate::error::AppError;

const WIDE: usize = 60;
const NARROW: usize = 30;

/// Console game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GameMode {
    /// One human against automated players.
    Solo,
    /// Several humans sharing the device, plus optional automated players.
    Mixed,
}

pub struct ConsoleAdapter<R, W> {
    input: R,
    out: W,
    mode: GameMode,
    /// Cosmetic pause range for automated turns; `None` disables it.
    delay: Option<(Duration, Duration)>,
    participants: Vec<Participant>,
    /// First output failure from `show_state`, surfaced on the next prompt.
    pending: Option<AppError>,
}

impl ConsoleAdapter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(mode: GameMode, delays: bool) -> Self {
        let delay = delays.then(|| (Duration::from_millis(1000), Duration::from_millis(2000)));
        Self::new(io::stdin().lock(), io::stdout(), mode, delay)
    }
}

impl<R: BufRead, W: Write> ConsoleAdapter<R, W> {
    pub fn new(input: R, out: W, mode: GameMode, delay: Option<(Duration, Duration)>) -> Self {
        Self {
            input,
            out,
            mode,
            delay,
            participants: Vec::new(),
            pending: None,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn say(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.out, "{line}") {
            self.pending.get_or_insert(AppError::Io(e));
        }
    }

    fn rule(&mut self, width: usize) {
        self.say("=".repeat(width));
    }

    fn clear_screen(&mut self) {
        self.say("\n".repeat(50));
    }

    fn take_pending(&mut self) -> Result<(), AppError> {
        match self.pending.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Prompt and read one trimmed line. End of input is `InputClosed`.
    pub fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        self.take_pending()?;
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::input_closed("input ended while waiting for a player"));
        }
        Ok(line.trim().to_string())
    }

    fn ask_number(&mut self, prompt: &str, min: usize, below_min: &str) -> Result<usize, AppError> {
        loop {
            match self.ask(prompt)?.parse::<usize>() {
                Ok(n) if n >= min => return Ok(n),
                Ok(_) => self.say(below_min),
                Err(_) => self.say("Invalid input."),
            }
        }
    }

    /// Mode menu. `None` means the player chose to leave.
    pub fn choose_mode(&mut self) -> Result<Option<GameMode>, AppError> {
        self.say("Welcome to the Imposter Word Game!");
        let choice = self.ask("Enter \"AI\" or \"MIX\" to choose the game mode: ")?;
        let mode = match choice.to_uppercase().as_str() {
            "AI" | "SOLO" => Some(GameMode::Solo),
            "MIX" | "MIXED" => Some(GameMode::Mixed),
            _ => {
                self.say("Goodbye!");
                None
            }
        };
        if let Some(mode) = mode {
            self.mode = mode;
        }
        Ok(mode)
    }

    /// Collect names and counts and build the lineup for the current mode.
    pub fn gather_lineup<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<Vec<Seat>, AppError> {
        self.say("\n");
        self.rule(WIDE);
        match self.mode {
            GameMode::Solo => {
                self.say("WELCOME TO IMPOSTER: HUMAN VS. AI (SOLO)");
                self.rule(WIDE);
                let name = self.ask_name("Enter your player name: ")?;
                Ok(solo_lineup(&name, rng))
            }
            GameMode::Mixed => {
                self.say("WELCOME TO IMPOSTER: MIXED MODE");
                self.rule(WIDE);
                loop {
                    let humans = self.ask_number(
                        "Enter number of HUMAN players (2 or more): ",
                        2,
                        "Must be 2 or more human players.",
                    )?;
                    let ai = self.ask_number(
                        "Enter number of AI players (0 or more): ",
                        0,
                        "Must be 0 or more AI players.",
                    )?;
                    let mut names = Vec::with_capacity(humans);
                    for i in 1..=humans {
                        names.push(self.ask_name(&format!("Enter name for Human Player {i}: "))?);
                    }
                    match mixed_lineup(&names, ai, rng) {
                        Ok(seats) => return Ok(seats),
                        Err(e) => self.say(format!("{e} Please try again.")),
                    }
                }
            }
        }
    }

    fn ask_name(&mut self, prompt: &str) -> Result<String, AppError> {
        loop {
            let name = self.ask(prompt)?;
            if !name.is_empty() {
                return Ok(name);
            }
            self.say("Name cannot be empty.");
        }
    }

    fn name_of(&self, id: usize) -> &str {
        self.participants
            .get(id)
            .map(Participant::name)
            .unwrap_or("?")
    }

    fn reveal_role(&mut self, participant: &Participant, topic: &Topic) {
        self.say(format!(
            "Your role, {}, is: **{}**",
            participant.name(),
            participant.role().label()
        ));
        match participant.role() {
            Role::Insider => {
                self.say(format!("The SECRET WORD is: **{}**", topic.word()));
                self.say(format!("Description: *{}*", topic.description()));
                self.say("Tip: Type 'help' during your turn for quick hints about the secret word!");
            }
            Role::Impostor => {
                self.say("You are the IMPOSTER! Type 'guess' instead of a word to try and guess the secret word!");
            }
        }
    }

    fn show_round_started(&mut self, participants: &[Participant], topic: &Topic) {
        self.participants = participants.to_vec();
        let humans = participants.iter().filter(|p| p.is_human()).count();
        self.say("-".repeat(WIDE));
        self.say(format!(
            "Game Setup Complete: {} players total ({} Human, {} AI).",
            participants.len(),
            humans,
            participants.len() - humans
        ));

        match self.mode {
            GameMode::Solo => {
                if let Some(human) = participants.iter().find(|p| p.is_human()) {
                    self.reveal_role(human, topic);
                }
            }
            GameMode::Mixed => {
                self.say("\nRole Reveal Phase (Pass the device for private role check):");
                for human in participants.iter().filter(|p| p.is_human()) {
                    let ready = format!(
                        "Player {}, press ENTER when you are ready to see your role...",
                        human.name()
                    );
                    if let Err(e) = self.ask(&ready) {
                        self.pending.get_or_insert(e);
                        return;
                    }
                    self.clear_screen();
                    self.rule(NARROW);
                    self.reveal_role(human, topic);
                    self.rule(NARROW);
                    if let Err(e) =
                        self.ask("Press ENTER to clear screen and pass to the next human player.")
                    {
                        self.pending.get_or_insert(e);
                        return;
                    }
                    self.clear_screen();
                }
                self.say("All human players have seen their roles. Starting game...");
            }
        }
        self.say("-".repeat(WIDE));
    }

    fn show_summaries(&mut self, participants: &[Participant], clues: &[Clue]) {
        self.say("");
        self.rule(WIDE);
        self.say("--- VOTING PHASE ---");
        self.rule(WIDE);
        self.say("Player Summaries:");
        for (i, p) in participants.iter().enumerate() {
            let words: Vec<&str> = clues
                .iter()
                .filter(|c| c.participant == i)
                .map(|c| c.word.as_str())
                .collect();
            self.say(format!("  [{}] {}: Words: {}", i + 1, p.name(), words.join(", ")));
        }
        self.say("-".repeat(WIDE));
    }

    fn show_tally(&mut self, tally: &VoteTally, resolution: &VoteResolution) {
        self.say("\n--- VOTE RESULTS ---");
        let breakdown: Vec<String> = (0..self.participants.len())
            .map(|i| format!("[{}] {}: {} votes", i + 1, self.name_of(i), tally.count(i)))
            .collect();
        self.say(format!("**Total Votes:** {}", breakdown.join(", ")));
        self.say("-".repeat(WIDE));

        match resolution {
            VoteResolution::NoVotes => self.say("\nNo votes cast! No one is eliminated."),
            VoteResolution::Tie { votes, .. } => self.say(format!(
                "\nVote is a TIE with {votes} votes! No one is eliminated."
            )),
            VoteResolution::Accused { participant, votes } => {
                let name = self.name_of(*participant).to_string();
                self.say(format!(
                    "\nPlayer {} (**{name}**) was VOTED OUT with {votes} votes!",
                    participant + 1
                ));
                let innocent = self
                    .participants
                    .get(*participant)
                    .is_some_and(|p| p.role() == Role::Insider);
                if innocent {
                    self.say(format!("**{name}** was INNOCENT! They are eliminated."));
                }
            }
        }
    }

    fn show_game_over(&mut self, outcome: &RoundOutcome) {
        self.say("\n\n");
        self.rule(WIDE);
        self.say("--- GAME OVER ---");
        self.say(format!("\t\t*** {} ***", outcome.headline()));
        self.say(format!("The secret word was: **{}**", outcome.topic.word()));
        self.say(format!("The Imposter was: **{}**", outcome.impostor_name));
        self.rule(WIDE);
    }

    fn pause(&mut self) {
        if let Some((min, max)) = self.delay {
            let wait = if max > min {
                rand::rng().random_range(min..max)
            } else {
                min
            };
            thread::sleep(wait);
        }
    }
}

impl<R: BufRead, W: Write> RoundAdapter for ConsoleAdapter<R, W> {
    fn get_clue(&mut self, view: &TurnView<'_>) -> Result<ClueAction, AppError> {
        self.say("-".repeat(NARROW));
        self.say(format!(
            "Human Player {}'s turn (Word {}):",
            view.name, view.subround
        ));
        let raw = self.ask("Your ONE-WORD description (or type 'guess' or 'help'): ")?;

        match raw.to_lowercase().as_str() {
            "help" => Ok(ClueAction::Help),
            // Anyone else gets the rule message from the round itself.
            "guess" if view.role != Role::Impostor || !view.can_guess => {
                Ok(ClueAction::Guess(String::new()))
            }
            "guess" => {
                let guess = self.ask("Imposter, enter your guess for the secret word: ")?;
                self.say(format!("**[GUESS] {} guesses: {guess}**", view.name));
                Ok(ClueAction::Guess(guess))
            }
            _ => Ok(ClueAction::Clue(raw)),
        }
    }

    fn get_vote(&mut self, view: &BallotView<'_>) -> Result<usize, AppError> {
        let prompt = format!(
            "Player {}, who do you accuse? Enter player number (1 to {}): ",
            view.name,
            view.participants.len()
        );
        loop {
            match self.ask(&prompt)?.parse::<usize>() {
                // 0 maps past the end so the round reports it as out of range.
                Ok(n) => return Ok(n.checked_sub(1).unwrap_or(usize::MAX)),
                Err(_) => self.say("Invalid input."),
            }
        }
    }

    fn show_state(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::RoundStarted {
                participants,
                topic,
            } => self.show_round_started(participants, topic),
            RoundEvent::SubroundStarted { subround } => self.say(format!(
                "\n--- RESPONSE SUB-ROUND {subround}/{SUBROUNDS} ---"
            )),
            RoundEvent::Thinking { participant } => {
                let name = self.name_of(*participant).to_string();
                self.say(format!("{name}'s turn (Thinking...)"));
                self.pause();
            }
            RoundEvent::ClueAccepted(clue) => self.say(format!("{}: {}", clue.name, clue.word)),
            RoundEvent::ActionRejected { reason, .. } => self.say(format!("Error: {reason}")),
            RoundEvent::GuessMissed { guess, .. } => self.say(format!(
                "Incorrect guess: {guess}. You must now provide a word description."
            )),
            RoundEvent::Hints { words, .. } => {
                self.say(format!("\n*** HINTS: {} ***\n", words.join(", ")));
                self.say("Now, provide your own unique one-word description.");
            }
            RoundEvent::VotingStarted {
                participants,
                clues,
            } => self.show_summaries(participants, clues),
            RoundEvent::VoteCast { voter, .. } => {
                let name = self.name_of(*voter).to_string();
                self.say(format!("{name} has voted."));
            }
            RoundEvent::VotesTallied { tally, resolution } => self.show_tally(tally, resolution),
            RoundEvent::Resolved(outcome) => self.show_game_over(outcome),
        }
    }
}

use serde::{Serialize, Deserialize};
use time::OffsetDateTime;

use crate::error::{Error, ErrorCode, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub question: String,
    pub options: Vec<String>,
    pub votes: Vec<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTally {
    pub label: String,
    pub votes: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTally {
    pub total_votes: u32,
    pub options: Vec<OptionTally>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FreeUsage {
    pub notes: u32,
    pub polls: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Note,
    Poll,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl Poll {
    pub fn new(question: &str, options: &[String]) -> Self {
        Self {
            question: question.trim().to_string(),
            options: options.iter().map(|opt| opt.trim().to_string()).collect(),
            votes: vec![0; options.len()],
            created: OffsetDateTime::now_utc(),
        }
    }

    pub fn total_votes(&self) -> u32 {
        self.votes.iter().sum()
    }

    pub fn record_vote(&mut self, index: usize) -> Result<()> {
        let counter = self.votes.get_mut(index).ok_or_else(|| {
            Error::with_details(ErrorCode::InvalidInput, "Invalid option", format!("no option at index {index}"))
        })?;
        *counter = counter.saturating_add(1);
        Ok(())
    }

    pub fn check_consistency(&self) -> Result<()> {
        if self.votes.len() != self.options.len() {
            return Err(Error::with_details(
                ErrorCode::Corrupted,
                "Failed to load poll",
                format!("{} options but {} vote counters", self.options.len(), self.votes.len()),
            ));
        }
        Ok(())
    }

    pub fn tally(&self) -> PollTally {
        let total_votes = self.total_votes();
        PollTally {
            total_votes,
            options: self.options.iter()
                .zip(&self.votes)
                .map(|(label, &votes)| OptionTally {
                    label: label.clone(),
                    votes,
                    percentage: percentage(votes, total_votes),
                })
                .collect(),
        }
    }
}

impl PollTally {
    /// Indices of the options holding the most votes. Empty until someone votes.
    pub fn leaders(&self) -> Vec<usize> {
        let max = self.options.iter().map(|opt| opt.votes).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        self.options.iter()
            .enumerate()
            .filter(|(_, opt)| opt.votes == max)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Whole percentage, rounding halves up.
pub fn percentage(votes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (votes, total) = (u64::from(votes), u64::from(total));
    ((votes * 200 + total) / (total * 2)) as u32
}

pub fn pluralize_votes(count: u32) -> String {
    if count == 1 {
        "1 vote".to_string()
    } else {
        format!("{count} votes")
    }
}

impl FreeUsage {
    pub fn used(&self, kind: ContentKind) -> u32 {
        match kind {
            ContentKind::Note => self.notes,
            ContentKind::Poll => self.polls,
        }
    }

    pub fn record(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Note => self.notes = self.notes.saturating_add(1),
            ContentKind::Poll => self.polls = self.polls.saturating_add(1),
        }
    }
}

impl ContentKind {
    pub fn free_limit(self) -> u32 {
        match self {
            ContentKind::Note => crate::validation::MAX_FREE_NOTES,
            ContentKind::Poll => crate::validation::MAX_FREE_POLLS,
        }
    }

    pub fn storage_prefix(self) -> &'static str {
        match self {
            ContentKind::Note => "note_",
            ContentKind::Poll => "poll_",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Note => "note",
            ContentKind::Poll => "poll",
        }
    }
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create an Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Log in to access unlimited notes and polls",
            AuthMode::Signup => "Sign up for unlimited access to all features",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Logged in successfully",
            AuthMode::Signup => "Account created successfully",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Failed to log in. Please check your credentials.",
            AuthMode::Signup => "Failed to create account. Please try again.",
        }
    }

    pub fn toggle_prompt(self) -> (&'static str, &'static str) {
        match self {
            AuthMode::Login => ("Don't have an account?", "Sign up"),
            AuthMode::Signup => ("Already have an account?", "Log in"),
        }
    }
}

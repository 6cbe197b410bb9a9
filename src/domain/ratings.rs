// src/domain/ratings.rs

use crate::api::Page;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingType {
    Heart,
    Star,
    Reject,
}

impl RatingType {
    pub const ALL: [RatingType; 3] = [RatingType::Heart, RatingType::Star, RatingType::Reject];

    pub fn as_str(self) -> &'static str {
        match self {
            RatingType::Heart => "heart",
            RatingType::Star => "star",
            RatingType::Reject => "reject",
        }
    }
}

impl fmt::Display for RatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rating type: {0}")]
pub struct UnknownRatingType(pub String);

impl FromStr for RatingType {
    type Err = UnknownRatingType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatingType::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRatingType(s.to_string()))
    }
}

/// Rating of one listing. At most one rating is ticked at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingState {
    #[default]
    Unrated,
    Heart,
    Star,
    Reject,
}

impl RatingState {
    pub fn of(rating: RatingType) -> Self {
        match rating {
            RatingType::Heart => RatingState::Heart,
            RatingType::Star => RatingState::Star,
            RatingType::Reject => RatingState::Reject,
        }
    }

    /// Collapse the backend's three flags. If it ever reports more than one,
    /// heart wins over star, star over reject.
    pub fn from_flags(hearted: bool, starred: bool, rejected: bool) -> Self {
        if hearted {
            RatingState::Heart
        } else if starred {
            RatingState::Star
        } else if rejected {
            RatingState::Reject
        } else {
            RatingState::Unrated
        }
    }

    pub fn is_ticked(self, rating: RatingType) -> bool {
        self == RatingState::of(rating)
    }

    /// Click on the button for `rating`.
    ///
    /// Only the clicked rating's change is persisted. Ticking clears the
    /// other two locally without a call of their own: the backend clears
    /// them itself whenever a rating is ticked.
    pub fn toggle(self, rating: RatingType) -> Transition {
        let (to, is_ticked) = if self.is_ticked(rating) {
            (RatingState::Unrated, false)
        } else {
            (RatingState::of(rating), true)
        };

        Transition {
            from: self,
            to,
            rating,
            is_ticked,
        }
    }
}

/// Result of one click: the local state change plus the single update
/// that has to reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: RatingState,
    pub to: RatingState,
    pub rating: RatingType,
    pub is_ticked: bool,
}

/// What to do with an optimistic rating change the backend did not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingFailurePolicy {
    /// Log and keep the local change; the list is re-fetched anyway.
    #[default]
    Keep,
    /// Restore the previous local state and skip the re-fetch.
    Revert,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rating failure policy: {0} (expected keep or revert)")]
pub struct UnknownPolicy(pub String);

impl FromStr for RatingFailurePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(RatingFailurePolicy::Keep),
            "revert" => Ok(RatingFailurePolicy::Revert),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Local rating state for the listings on the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingBook {
    states: HashMap<String, RatingState>,
}

impl RatingBook {
    /// Seed from the flags the backend returned with a page.
    pub fn from_page(page: &Page) -> Self {
        let states = page
            .results
            .iter()
            .map(|l| (l.id.clone(), l.rating()))
            .collect();
        Self { states }
    }

    pub fn get(&self, flat_id: &str) -> RatingState {
        self.states.get(flat_id).copied().unwrap_or_default()
    }

    /// Apply a click optimistically. `None` when the listing is not on the
    /// current page.
    pub fn toggle(&mut self, flat_id: &str, rating: RatingType) -> Option<Transition> {
        let state = self.states.get_mut(flat_id)?;
        let transition = state.toggle(rating);
        *state = transition.to;
        Some(transition)
    }

    pub fn revert(&mut self, flat_id: &str, transition: &Transition) {
        if let Some(state) = self.states.get_mut(flat_id) {
            if *state == transition.to {
                *state = transition.from;
            }
        }
    }
}

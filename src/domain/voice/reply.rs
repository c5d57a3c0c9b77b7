//! Spoken replies.

use std::fmt;

/// A reply the voice assistant reads back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceReply {
    NothingDue,
    TakeNow { dosage: String, name: String },
    Reminding { minutes: u32 },
    RemindingNothingDue { minutes: u32 },
    NotUnderstood,
}

impl fmt::Display for VoiceReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceReply::NothingDue => write!(f, "You have no medication due right now."),
            VoiceReply::TakeNow { dosage, name } => {
                write!(f, "It's medication time. Please take {} of {}.", dosage, name)
            }
            VoiceReply::Reminding { minutes } => {
                write!(f, "Okay, I'll remind you in {} minutes.", minutes)
            }
            VoiceReply::RemindingNothingDue { minutes } => write!(
                f,
                "Okay, I'll remind you in {} minutes, but there is nothing due right now.",
                minutes
            ),
            VoiceReply::NotUnderstood => write!(
                f,
                "Sorry, I didn't understand. You can ask: 'What medicine do I take now?' or say 'Remind me in 15 minutes.'"
            ),
        }
    }
}

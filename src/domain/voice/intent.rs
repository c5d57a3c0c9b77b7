//! Keyword intent parsing for voice utterances.

/// Snooze durations a spoken reminder can pick from, in match priority.
pub const REMINDER_LADDER: [u32; 7] = [5, 10, 15, 20, 30, 45, 60];

/// Minutes used when a reminder names no ladder value.
pub const DEFAULT_REMINDER_MINUTES: u32 = 15;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceIntent {
    /// "What medicine do I take now?"
    Query,
    /// "Remind me in N minutes."
    Remind { minutes: u32 },
    Unknown,
}

impl VoiceIntent {
    /// Classifies an utterance. The first matching rule wins.
    ///
    /// # Rules
    ///
    /// 1. Contains "what" and one of "medicine", "medication", "take now"
    /// 2. Starts with "remind" and contains "minute"
    /// 3. Anything else is `Unknown`
    ///
    /// # Edge Cases
    ///
    /// - Matching is case-insensitive and ignores surrounding whitespace
    /// - Ladder values match whole numbers only: "115 minutes" names no
    ///   ladder value and falls back to the default
    pub fn parse(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();

        if normalized.contains("what")
            && (normalized.contains("medicine")
                || normalized.contains("medication")
                || normalized.contains("take now"))
        {
            return VoiceIntent::Query;
        }

        if normalized.starts_with("remind") && normalized.contains("minute") {
            return VoiceIntent::Remind {
                minutes: ladder_minutes(&normalized),
            };
        }

        VoiceIntent::Unknown
    }
}

fn ladder_minutes(text: &str) -> u32 {
    let numbers: Vec<u32> = text
        .split(|c: char| !c.is_ascii_digit())
        .filter_map(|token| token.parse().ok())
        .collect();

    REMINDER_LADDER
        .iter()
        .copied()
        .find(|m| numbers.contains(m))
        .unwrap_or(DEFAULT_REMINDER_MINUTES)
}

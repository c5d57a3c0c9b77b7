//! Voice command handler.

mod handle_voice_command;

pub use handle_voice_command::{VoiceCommand, VoiceCommandHandler, VoiceCommandResult};

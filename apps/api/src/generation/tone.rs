//! Tone of voice selector — the fixed set of voices the form offers.
//!
//! The tone only changes the wording of the prompt; it carries no other behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneOfVoice {
    Professional,
    Friendly,
    #[default]
    Luxurious,
    Adventurous,
    Playful,
    Informative,
    Persuasive,
    Funny,
}

impl ToneOfVoice {
    /// Every tone in the order the selector lists them.
    pub const ALL: [ToneOfVoice; 8] = [
        ToneOfVoice::Professional,
        ToneOfVoice::Friendly,
        ToneOfVoice::Luxurious,
        ToneOfVoice::Adventurous,
        ToneOfVoice::Playful,
        ToneOfVoice::Informative,
        ToneOfVoice::Persuasive,
        ToneOfVoice::Funny,
    ];

    /// Wire name, identical to the serde form.
    pub fn value(&self) -> &'static str {
        match self {
            ToneOfVoice::Professional => "professional",
            ToneOfVoice::Friendly => "friendly",
            ToneOfVoice::Luxurious => "luxurious",
            ToneOfVoice::Adventurous => "adventurous",
            ToneOfVoice::Playful => "playful",
            ToneOfVoice::Informative => "informative",
            ToneOfVoice::Persuasive => "persuasive",
            ToneOfVoice::Funny => "funny",
        }
    }

    /// Label shown in the selector and written into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ToneOfVoice::Professional => "Professional",
            ToneOfVoice::Friendly => "Friendly",
            ToneOfVoice::Luxurious => "Luxurious",
            ToneOfVoice::Adventurous => "Adventurous",
            ToneOfVoice::Playful => "Playful",
            ToneOfVoice::Informative => "Informative",
            ToneOfVoice::Persuasive => "Persuasive",
            ToneOfVoice::Funny => "Funny/Humor",
        }
    }
}

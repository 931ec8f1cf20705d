use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Soft,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Soft, Tone::Medium, Tone::Hard];

    /// Natural-language steering sentence prepended to the prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            Tone::Soft => "Speak in a very soft, gentle, and calm voice.",
            Tone::Medium => "Speak in a natural, clear, and professional voice.",
            Tone::Hard => "Speak in a firm, powerful, and authoritative voice.",
        }
    }
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Normal, Speed::Fast];

    /// Speaking-rate multiplier, always > 0
    pub fn multiplier(&self) -> f32 {
        match self {
            Speed::Slow => 0.8,
            Speed::Normal => 1.0,
            Speed::Fast => 1.2,
        }
    }
}

/// The caller's voice choice along the gender and tone axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoiceSelection {
    pub gender: Gender,
    pub tone: Tone,
}

impl VoiceSelection {
    pub fn new(gender: Gender, tone: Tone) -> Self {
        Self { gender, tone }
    }

    pub fn voice_id(&self) -> &'static str {
        get_voice_for_selection(self.gender, self.tone)
    }

    pub fn tone_instruction(&self) -> &'static str {
        self.tone.instruction()
    }
}

/// Get the prebuilt provider voice for a gender and tone
pub fn get_voice_for_selection(gender: Gender, tone: Tone) -> &'static str {
    match (gender, tone) {
        (Gender::Male, Tone::Soft) => "Fenrir",
        (Gender::Male, Tone::Medium) => "Charon",
        (Gender::Male, Tone::Hard) => "Puck",
        (Gender::Female, Tone::Soft) => "Kore",
        (Gender::Female, Tone::Medium) => "Zephyr",
        (Gender::Female, Tone::Hard) => "Zephyr",
    }
}

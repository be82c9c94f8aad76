/// Anki media reference placed in the sound column
pub const SOUND_TEMPLATE: &str = "[sound:{prefix}{word}.mp3]";

/// `[sound:<prefix><word>.mp3]`
pub fn sound_reference(prefix: &str, word: &str) -> String {
    SOUND_TEMPLATE
        .replace("{prefix}", prefix)
        .replace("{word}", word)
}

/// Average narration reading speed used to derive a target duration.
const WORDS_PER_MINUTE: f64 = 150.0;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// An immutable, ordered sequence of words derived from input text.
///
/// Words are obtained by splitting on whitespace, preserving order. Empty or
/// whitespace-only input is normalized to a single empty token, so
/// [`Script::word_count`] is always at least 1 and reveal arithmetic never
/// divides by zero.
pub struct Script {
    text: String,
    words: Vec<String>,
}

impl Script {
    /// Tokenize input text into an ordered word sequence.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            words.push(String::new());
        }
        Self { text, words }
    }

    /// Original input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Ordered words; never empty.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words; always >= 1.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Join the first `count` words with single spaces.
    ///
    /// `count` is clamped to `[1, word_count]`.
    pub fn visible_words(&self, count: usize) -> String {
        let count = count.clamp(1, self.words.len());
        self.words[..count].join(" ")
    }

    /// Estimated narration length in whole seconds at 150 words per minute,
    /// rounded up; at least 1.
    pub fn estimate_narration_secs(&self) -> u32 {
        let secs = (self.words.len() as f64 / WORDS_PER_MINUTE * 60.0).ceil();
        (secs as u32).max(1)
    }
}

impl From<String> for Script {
    fn from(text: String) -> Self {
        Self::parse(text)
    }
}

impl From<Script> for String {
    fn from(script: Script) -> Self {
        script.text
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/tokens.rs"]
mod tests;

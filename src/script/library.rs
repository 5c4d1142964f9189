use crate::{
    foundation::error::{FramecastError, FramecastResult},
    foundation::math::{Fnv1a64, mix64},
    script::tokens::Script,
};

/// Source of randomness for template selection.
///
/// The engine never touches a global RNG; callers inject the source, so a
/// fixed [`SeededRandom`] makes every selection reproducible.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;
}

#[derive(Clone, Copy, Debug)]
/// Deterministic SplitMix64 sequence behind [`RandomSource`].
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from arbitrary text via FNV-1a, for stable per-topic defaults.
    pub fn from_text(text: &str) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(text.as_bytes());
        Self::new(h.finish())
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        mix64(self.state)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A named group of script templates matched by topic keywords.
pub struct TemplateCategory {
    /// Category name for authoring/debugging.
    pub name: String,
    /// Lowercase substrings matched against the topic.
    pub keywords: Vec<String>,
    /// Candidate script texts; must be non-empty.
    pub variants: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Keyword-matched script template table.
///
/// Matching walks categories in order and picks the first whose keyword is a
/// case-insensitive substring of the topic; the fallback category covers
/// everything else. Variant choice within a category draws uniformly from the
/// supplied [`RandomSource`].
pub struct ScriptLibrary {
    categories: Vec<TemplateCategory>,
    fallback: TemplateCategory,
}

impl ScriptLibrary {
    /// Build a library from ordered categories and a fallback.
    pub fn new(
        categories: Vec<TemplateCategory>,
        fallback: TemplateCategory,
    ) -> FramecastResult<Self> {
        for cat in categories.iter().chain(std::iter::once(&fallback)) {
            if cat.variants.is_empty() {
                return Err(FramecastError::validation(format!(
                    "template category '{}' has no variants",
                    cat.name
                )));
            }
        }
        Ok(Self {
            categories,
            fallback,
        })
    }

    /// The builtin template table: motivational, facts, life hacks, funny,
    /// plus a general fallback.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                TemplateCategory {
                    name: "motivational".to_string(),
                    keywords: vec!["motivat".to_string(), "inspir".to_string()],
                    variants: vec![
                        "The only way to do great work is to love what you do. Your passion fuels your purpose. Wake up every day and chase your dreams relentlessly. Success isn't given, it's earned through dedication and persistence.".to_string(),
                        "Stop waiting for the perfect moment. The perfect moment is NOW. Every second you hesitate is a second lost. Take action today and watch your life transform before your eyes.".to_string(),
                        "Your mindset determines your success. Winners think differently. They see obstacles as opportunities. They turn setbacks into comebacks. Are you ready to adopt a winning mindset?".to_string(),
                    ],
                },
                TemplateCategory {
                    name: "facts".to_string(),
                    keywords: vec![
                        "fact".to_string(),
                        "science".to_string(),
                        "trivia".to_string(),
                    ],
                    variants: vec![
                        "Did you know? Honey never spoils. Archaeologists have found 3000-year-old honey in Egyptian tombs that's still perfectly edible. Nature's eternal sweetness preserved through millennia!".to_string(),
                        "Your brain uses 20% of your body's energy but only makes up 2% of your body weight. It's the most powerful computer ever created, capable of processing 70,000 thoughts per day!".to_string(),
                        "Octopuses have three hearts and blue blood. Two hearts pump blood to the gills, while the third pumps it to the rest of the body. They're truly alien-like creatures of the deep!".to_string(),
                    ],
                },
                TemplateCategory {
                    name: "lifehacks".to_string(),
                    keywords: vec!["hack".to_string(), "tip".to_string(), "trick".to_string()],
                    variants: vec![
                        "Want to remember names better? Repeat the person's name three times in conversation. This simple trick activates your memory and makes you more likable. Try it today!".to_string(),
                        "Boost your productivity instantly: Use the 2-minute rule. If a task takes less than 2 minutes, do it immediately. Stop procrastinating and start accomplishing!".to_string(),
                        "Can't sleep? Try the 4-7-8 breathing technique. Breathe in for 4 seconds, hold for 7, exhale for 8. Repeat 4 times. Your body will naturally relax into sleep mode.".to_string(),
                    ],
                },
                TemplateCategory {
                    name: "funny".to_string(),
                    keywords: vec![
                        "funny".to_string(),
                        "humor".to_string(),
                        "joke".to_string(),
                    ],
                    variants: vec![
                        "Why do programmers prefer dark mode? Because light attracts bugs! And trust me, nobody wants more bugs in their code. It's not just a preference, it's pest control!".to_string(),
                        "Fun fact: The voices in my head may not be real, but they have some great ideas! Sometimes the best conversations are the ones you have with yourself. At least you always win the argument!".to_string(),
                        "I told my computer I needed a break, and now it won't stop sending me Kit Kat ads. Apparently, artificial intelligence has a sense of humor. And a marketing degree!".to_string(),
                    ],
                },
            ],
            fallback: TemplateCategory {
                name: "default".to_string(),
                keywords: vec![],
                variants: vec![
                    "Success is not final, failure is not fatal. It's the courage to continue that counts. Every day is a new opportunity to be better than yesterday. Make it count!".to_string(),
                    "The future belongs to those who believe in the beauty of their dreams. Don't let anyone dim your light. Shine bright and inspire others to do the same!".to_string(),
                    "In a world where you can be anything, be kind. Your words and actions have power. Use them to lift others up and create positive change in the world.".to_string(),
                ],
            },
        }
    }

    /// Select a script for the topic, drawing the variant from `rng`.
    pub fn select(&self, topic: &str, rng: &mut dyn RandomSource) -> Script {
        let category = self.category_for(topic);

        // Constructors guarantee variants is non-empty.
        let pick = (rng.next_u64() % category.variants.len() as u64) as usize;
        Script::parse(category.variants[pick].clone())
    }

    /// Select with a [`SeededRandom`] derived from the topic text and `seed`,
    /// so the same inputs always yield the same script.
    pub fn select_seeded(&self, topic: &str, seed: u64) -> Script {
        let mut h = Fnv1a64::new(seed);
        h.write_bytes(topic.as_bytes());
        let mut rng = SeededRandom::new(h.finish());
        self.select(topic, &mut rng)
    }

    /// Category matched for a topic, for introspection and tests.
    pub fn category_for(&self, topic: &str) -> &TemplateCategory {
        let lower = topic.to_lowercase();
        self.categories
            .iter()
            .find(|cat| cat.keywords.iter().any(|kw| lower.contains(kw.as_str())))
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/library.rs"]
mod tests;

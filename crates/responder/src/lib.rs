//! Keyword-matching responder of the portfolio chatbot.
//!
//! A message is lowercased and tested against the keyword rules of each category in
//! [`Category::PRIORITY`] order. The first category with a matching keyword wins, and one
//! of its canned responses is drawn uniformly at random. Nothing is remembered between
//! calls.

use chat_model::Category;
use itertools::Itertools;
use log::{debug, trace};

mod defaults;
mod random;
mod table;

pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use table::{CategoryEntry, ConfigError, ResponderConfig};

use table::CompiledEntry;

pub struct Responder<R = ThreadRandom> {
    // One entry per category, indexed by `Category::priority_rank`.
    entries: Vec<CompiledEntry>,
    random: R,
}

impl Responder<ThreadRandom> {
    pub fn new(config: ResponderConfig) -> Result<Self, ConfigError> {
        Responder::with_random(config, ThreadRandom)
    }
}

impl<R: RandomSource> Responder<R> {
    /// Fails if the tables break any of the invariants checked by [`ResponderConfig::validate`].
    pub fn with_random(config: ResponderConfig, random: R) -> Result<Self, ConfigError> {
        let entries = config.compile()?;
        for entry in &entries {
            debug!(
                "{}: {} responses, keywords: [{}]",
                entry.category,
                entry.responses.len(),
                entry.keywords.iter().join(", ")
            );
        }
        Ok(Responder { entries, random })
    }

    pub fn classify(&self, input: &str) -> Category {
        let message = input.to_lowercase();
        for entry in &self.entries {
            if let Some(keyword) = entry.keywords.iter().find(|k| message.contains(k.as_str())) {
                trace!("{input:?} matched {keyword:?} -> {}", entry.category);
                return entry.category;
            }
        }
        Category::Default
    }

    /// A source drawing outside `0..bound` wraps around instead of panicking.
    pub fn respond(&self, category: Category) -> &str {
        let responses = self.responses(category);
        &responses[self.random.next_index(responses.len()) % responses.len()]
    }

    pub fn get_bot_response(&self, input: &str) -> &str {
        self.respond(self.classify(input))
    }

    /// Classification together with the drawn response.
    pub fn answer(&self, input: &str) -> (Category, &str) {
        let category = self.classify(input);
        (category, self.respond(category))
    }

    pub fn responses(&self, category: Category) -> &[String] {
        &self.entry(category).responses
    }

    /// Lowercased trigger keywords, empty for the fallback category.
    pub fn keywords(&self, category: Category) -> &[String] {
        &self.entry(category).keywords
    }

    fn entry(&self, category: Category) -> &CompiledEntry {
        &self.entries[category.priority_rank()]
    }
}

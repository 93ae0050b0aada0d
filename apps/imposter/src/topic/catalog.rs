//! Offline topic catalogue.

use std::sync::Mutex;

use rand::prelude::*;

use super::{TopicError, TopicProvider};

const CATALOG: &[(&str, &str)] = &[
    ("Tesla", "Tesla is an American company that designs and sells electric vehicles."),
    ("Netflix", "Netflix is a subscription streaming service for films and television series."),
    ("ChatGPT", "ChatGPT is a conversational assistant built on a large language model."),
    ("Fortnite", "Fortnite is an online video game known for its battle royale mode."),
    ("Starbucks", "Starbucks is a multinational chain of coffeehouses and roasteries."),
    ("Disney", "Disney is an entertainment company famous for animated films and theme parks."),
    ("Amazon", "Amazon is an online retailer that also runs a large cloud computing business."),
    ("YouTube", "YouTube is a video sharing platform where users upload and watch clips."),
    ("Apple", "Apple is a technology company that makes the iPhone and Mac computers."),
    ("Spotify", "Spotify is an audio streaming service offering music and podcasts."),
    ("Minecraft", "Minecraft is a sandbox game about placing blocks and going on adventures."),
    ("Lego", "Lego is a line of plastic construction toys made of interlocking bricks."),
    ("Olympics", "The Olympics are an international sporting event held every four years."),
    ("Pizza", "Pizza is a dish of flattened dough topped with tomato, cheese and other toppings."),
    ("Eiffel Tower", "The Eiffel Tower is a wrought iron lattice tower in Paris, France."),
];

/// Built-in (topic, description) pairs; no network.
pub struct CatalogProvider {
    entries: Vec<(String, String)>,
    rng: Mutex<StdRng>,
}

impl CatalogProvider {
    pub fn new(seed: Option<u64>) -> Self {
        let entries = CATALOG
            .iter()
            .map(|(w, d)| ((*w).to_string(), (*d).to_string()))
            .collect();
        Self::with_entries(entries, seed)
    }

    /// Catalogue with custom entries, mainly for tests.
    pub fn with_entries(entries: Vec<(String, String)>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            entries,
            rng: Mutex::new(rng),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TopicProvider for CatalogProvider {
    fn fetch_topic(&self) -> Result<String, TopicError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| TopicError::UnknownTopic(format!("catalogue RNG poisoned: {e}")))?;
        self.entries
            .choose(&mut *rng)
            .map(|(word, _)| word.clone())
            .ok_or(TopicError::Empty)
    }

    fn fetch_description(&self, topic: &str) -> Result<String, TopicError> {
        let wanted = topic.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(word, _)| word.to_lowercase() == wanted)
            .map(|(_, description)| description.clone())
            .ok_or_else(|| TopicError::UnknownTopic(topic.to_string()))
    }
}

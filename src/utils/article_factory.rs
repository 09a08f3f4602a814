//! Synthetic article generation for seeding and tests.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::domain::entities::NewArticle;
use crate::utils::lorem;

/// Labels a generated article can be tagged with.
pub const TAG_VOCABULARY: &[&str] = &["php", "ruby", "java", "javascript", "bash"];

/// Number of distinct tags attached to each generated article.
pub const TAGS_PER_ARTICLE: usize = 2;

/// Maximum body length in characters.
const BODY_MAX_CHARS: usize = 200;

/// Produces plausible [`NewArticle`] attribute sets.
///
/// The factory never touches storage; callers persist the output through
/// [`crate::domain::repositories::ArticleRepository::create`] if needed.
///
/// # Examples
///
/// ```ignore
/// let mut factory = ArticleFactory::seeded(42);
/// let article = factory.definition();
/// assert_eq!(article.tags.len(), 2);
/// ```
pub struct ArticleFactory {
    rng: StdRng,
}

impl ArticleFactory {
    /// Creates a factory seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a factory with reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates one article: a sentence title, a paragraph body and two
    /// distinct tags in random order.
    pub fn definition(&mut self) -> NewArticle {
        NewArticle {
            title: lorem::sentence(&mut self.rng),
            body: lorem::text(&mut self.rng, BODY_MAX_CHARS),
            tags: random_tags(&mut self.rng),
        }
    }

    /// Generates `count` articles.
    pub fn make(&mut self, count: usize) -> Vec<NewArticle> {
        (0..count).map(|_| self.definition()).collect()
    }
}

impl Default for ArticleFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws [`TAGS_PER_ARTICLE`] tags without replacement and shuffles them.
fn random_tags<R: Rng>(rng: &mut R) -> Vec<String> {
    let mut tags: Vec<String> = TAG_VOCABULARY
        .choose_multiple(rng, TAGS_PER_ARTICLE)
        .map(|t| t.to_string())
        .collect();
    tags.shuffle(rng);
    tags
}

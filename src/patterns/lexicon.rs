// ============================================================
// Layer 5 — Fixed Lexicons
// ============================================================
// Hand-curated closed vocabularies used by the lexical and
// phrase rules. They are process-wide constants: built on
// first use, never mutated, shared by every extraction.
//
// All entries are lower-case. Callers compare against
// lower-cased lemmas (AnnotatedToken lower-cases on
// construction) or explicitly lower-cased surface text.
//
// Reference: once_cell crate documentation (sync::Lazy)

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Feelings and emotional states
pub static EMOTIONAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "afraid", "angry", "anxious", "ashamed", "bewildered", "bitter", "brave",
        "calm", "confused", "content", "depressed", "desperate", "disgusted",
        "eager", "embarrassed", "excited", "fearful", "frightened", "frustrated",
        "guilty", "happy", "helpless", "hopeful", "horrified", "hurt", "jealous",
        "lonely", "loved", "mad", "nervous", "overwhelmed", "panicked", "peaceful",
        "proud", "sad", "scared", "shocked", "sick", "suspicious", "sympathetic",
        "terrified", "tired", "uncomfortable", "worried",
        "fear", "love", "hate", "joy", "sorrow", "pain", "pleasure", "anxiety",
        "dread", "hope", "despair", "rage", "panic", "peace", "tension",
        "relief", "comfort", "discomfort", "loneliness", "belonging", "isolation",
    ]
    .into_iter()
    .collect()
});

/// Colours, textures and sounds
pub static SENSORY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // colour
        "red", "blue", "green", "yellow", "orange", "purple", "pink", "black",
        "white", "gray", "grey", "brown", "gold", "silver", "crimson", "azure",
        "emerald", "amber", "violet", "scarlet", "turquoise", "ivory", "ebony",
        // texture
        "smooth", "rough", "soft", "hard", "slick", "sticky", "gritty", "silky",
        "fuzzy", "sharp", "dull", "glossy", "matte", "bumpy", "velvety", "coarse",
        // sound
        "loud", "quiet", "silent", "noisy", "shrill", "muffled", "echoing",
        "ringing", "buzzing", "humming", "whispering", "shouting", "screaming",
        "crashing", "thumping", "ticking", "clicking", "whooshing", "rumbling",
    ]
    .into_iter()
    .collect()
});

/// Bodily motion and posture. Only matched on VERB / ADJ tokens.
pub static PHYSICAL_STATE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "running", "walking", "falling", "sitting", "standing", "lying", "crouching",
        "jumping", "climbing", "crawling", "dancing", "swimming", "flying", "driving",
        "riding", "moving", "stopping", "turning", "pushing", "pulling", "grabbing",
        "holding", "reaching", "stretching", "bending", "twisting", "leaning",
        "collapsing", "rising", "descending", "ascending", "floating", "sinking",
    ]
    .into_iter()
    .collect()
});

pub static NEGATION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "never", "no", "none", "nothing", "nobody", "nowhere",
        "neither", "nor", "cannot",
    ]
    .into_iter()
    .collect()
});

/// Words that anchor a time expression
pub static TEMPORAL_MARKERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "when", "while", "before", "after", "during", "until", "since",
        "now", "then", "suddenly", "always", "never", "sometimes",
        "today", "yesterday", "tonight", "morning", "night", "evening",
        "ago", "later", "earlier", "soon", "recently", "finally",
    ]
    .into_iter()
    .collect()
});

/// Copular and perception verbs, with their past forms since
/// lemmatisers do not always reduce them.
pub static COPULAR_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "feel", "felt", "seem", "seemed", "become", "became", "look", "looked",
        "appear", "appeared", "sense", "sensed", "realize", "realized",
    ]
    .into_iter()
    .collect()
});

/// Entity types that make a token temporal on their own
pub const TEMPORAL_ENTITY_TYPES: &[&str] = &["TIME", "DATE"];

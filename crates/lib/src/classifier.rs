//! # Topic Classifier
//!
//! The admission filter run before any course generation: decides whether a
//! free-text topic is an educational engineering query. This is an ordered
//! cascade of substring tests, not a semantic classifier; the precedence of
//! the lists is load-bearing and a 4+-word phrase with no technical keyword
//! falls through to `true`.

/// Greetings, affection, and relationship phrases. Matched before anything
/// else so that short conversational inputs never reach the whitelist's
/// substring tests.
const PERSONAL_PHRASES: &[&str] = &[
    "hi",
    "hii",
    "hello",
    "hey",
    "yo",
    "sup",
    "good morning",
    "good afternoon",
    "good evening",
    "good night",
    "how are you",
    "what's up",
    "whats up",
    "nice to meet you",
    "thank you",
    "thanks",
    "bye",
    "goodbye",
    "i love you",
    "i like you",
    "i miss you",
    "love you",
    "do you love me",
    "be my friend",
    "will you marry me",
    "marry me",
    "my girlfriend",
    "my boyfriend",
    "my crush",
    "i am sad",
    "i am lonely",
    "tell me a joke",
];

/// Violence, illegal activity, self-harm, academic dishonesty, and security
/// bypass. Any hit rejects the query outright.
const UNSAFE_PHRASES: &[&str] = &[
    "bomb",
    "make a bomb",
    "build a bomb",
    "kill",
    "murder",
    "weapon",
    "explosive",
    "hurt someone",
    "attack someone",
    "poison",
    "steal",
    "rob a bank",
    "illegal drugs",
    "buy drugs",
    "suicide",
    "self harm",
    "self-harm",
    "hack into",
    "hack someone",
    "bypass security",
    "crack password",
    "crack a password",
    "ddos",
    "cheat on exam",
    "cheat on a test",
    "cheat on my exam",
    "do my homework",
    "write my assignment",
    "plagiarize",
    "plagiarism",
];

/// Known technical topics. A query equal to or containing (either direction)
/// one of these is accepted without further checks.
const EDUCATIONAL_TOPICS: &[&str] = &[
    "algorithms",
    "data structures",
    "programming",
    "software engineering",
    "machine learning",
    "artificial intelligence",
    "computer graphics",
    "databases",
    "operating systems",
    "computer networks",
    "javascript",
    "python",
    "java",
    "c++",
    "rust",
    "react",
    "node.js",
    "apache",
    "kafka",
    "apache kafka",
    "devops",
    "docker",
    "kubernetes",
    "bresenham",
    "line drawing",
    "rasterization",
    "circuit analysis",
    "thermodynamics",
    "system design",
];

/// Keyword stems that mark a query as technical even when it matches no
/// whitelisted topic.
const TECHNICAL_STEMS: &[&str] = &[
    "algorithm",
    "program",
    "code",
    "coding",
    "software",
    "develop",
    "engineer",
    "computer",
    "science",
    "learning",
    "tutorial",
    "database",
    "network",
    "circuit",
    "compiler",
    "framework",
    "architecture",
    "system",
    "data",
    "cloud",
    "security",
    "math",
    "physics",
];

/// True when `query` equals `phrase`, or contains it bounded by spaces or the
/// string edges. Plain substring matching would reject too much ("hi" is
/// inside "graphics").
fn phrase_hit(query: &str, phrase: &str) -> bool {
    query == phrase
        || query.starts_with(&format!("{phrase} "))
        || query.ends_with(&format!(" {phrase}"))
        || query.contains(&format!(" {phrase} "))
}

/// Decides whether a free-text topic is an educational engineering query.
///
/// The cascade, in order: empty input is rejected; personal-intent phrases
/// are rejected; unsafe phrases are rejected; whitelisted topics are
/// accepted; then short queries (3 words or fewer) with no technical keyword
/// stem are rejected; everything else is accepted.
pub fn is_educational_query(query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return false;
    }

    if PERSONAL_PHRASES.iter().any(|p| phrase_hit(&query, p)) {
        return false;
    }

    if UNSAFE_PHRASES.iter().any(|p| phrase_hit(&query, p)) {
        return false;
    }

    if EDUCATIONAL_TOPICS
        .iter()
        .any(|t| query == *t || query.contains(t) || t.contains(&query))
    {
        return true;
    }

    let has_technical_stem = TECHNICAL_STEMS.iter().any(|s| query.contains(s));
    let word_count = query.split_whitespace().count();
    if !has_technical_stem && word_count <= 3 {
        return false;
    }

    true
}

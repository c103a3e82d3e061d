//! Declarative grammar-error rule catalog.
//!
//! Each rule is a (pattern, correction) pair matched as a whole-word token
//! sequence against the transcript. The catalog is intentionally a fixed
//! rule list, not a statistical model: unlisted error types go undetected,
//! and legitimate phrasing that happens to match a pattern is a known
//! false-positive risk. New rules are added here without touching the
//! detector's control flow.

/// Error family a rule belongs to. Determines how matches are counted:
/// structural slips (tense, word order) count once per rule, while
/// agreement/article/preposition slips count every occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    SubjectVerb,
    Tense,
    Article,
    Preposition,
    WordOrder,
}

impl RuleFamily {
    pub fn counts_per_occurrence(self) -> bool {
        matches!(
            self,
            RuleFamily::SubjectVerb | RuleFamily::Article | RuleFamily::Preposition
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            RuleFamily::SubjectVerb => "Agreement",
            RuleFamily::Tense => "Tense",
            RuleFamily::Article => "Article",
            RuleFamily::Preposition => "Preposition",
            RuleFamily::WordOrder => "Word order",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarRule {
    pub pattern: &'static str,
    pub correction: &'static str,
    pub family: RuleFamily,
}

const fn rule(
    pattern: &'static str,
    correction: &'static str,
    family: RuleFamily,
) -> GrammarRule {
    GrammarRule {
        pattern,
        correction,
        family,
    }
}

/// The full catalog, evaluated in order. Order matters for the capped
/// error-detail list in the grammar report.
pub const GRAMMAR_RULES: &[GrammarRule] = &[
    // Subject-verb agreement
    rule("there is many", "there are many", RuleFamily::SubjectVerb),
    rule("there are a", "there is a", RuleFamily::SubjectVerb),
    rule("was many", "were many", RuleFamily::SubjectVerb),
    rule("were a", "was a", RuleFamily::SubjectVerb),
    rule("students is", "students are", RuleFamily::SubjectVerb),
    rule("student are", "student is", RuleFamily::SubjectVerb),
    rule("teacher explain", "teacher explains", RuleFamily::SubjectVerb),
    rule("he explain", "he explains", RuleFamily::SubjectVerb),
    rule("she explain", "she explains", RuleFamily::SubjectVerb),
    rule("it make", "it makes", RuleFamily::SubjectVerb),
    rule("they was", "they were", RuleFamily::SubjectVerb),
    rule("we was", "we were", RuleFamily::SubjectVerb),
    rule("i are", "i am", RuleFamily::SubjectVerb),
    rule("you is", "you are", RuleFamily::SubjectVerb),
    // Tense consistency
    rule("i am going yesterday", "went yesterday", RuleFamily::Tense),
    rule("i go yesterday", "went yesterday", RuleFamily::Tense),
    rule("i will go yesterday", "went yesterday", RuleFamily::Tense),
    rule("yesterday i go", "yesterday i went", RuleFamily::Tense),
    rule(
        "yesterday the teacher explain",
        "yesterday the teacher explained",
        RuleFamily::Tense,
    ),
    rule("last week i go", "last week i went", RuleFamily::Tense),
    rule("last year i go", "last year i went", RuleFamily::Tense),
    rule(
        "going to college yesterday",
        "went to college yesterday",
        RuleFamily::Tense,
    ),
    rule("am going yesterday", "went yesterday", RuleFamily::Tense),
    // Article misuse
    rule("an university", "a university", RuleFamily::Article),
    rule("a hour", "an hour", RuleFamily::Article),
    rule("a apple", "an apple", RuleFamily::Article),
    rule("a elephant", "an elephant", RuleFamily::Article),
    rule("an car", "a car", RuleFamily::Article),
    rule("an book", "a book", RuleFamily::Article),
    // Preposition misuse
    rule("in yesterday", "yesterday", RuleFamily::Preposition),
    rule("on yesterday", "yesterday", RuleFamily::Preposition),
    rule("at yesterday", "yesterday", RuleFamily::Preposition),
    rule("in last week", "last week", RuleFamily::Preposition),
    rule("on last week", "last week", RuleFamily::Preposition),
    rule("different than", "different from", RuleFamily::Preposition),
    rule("listen music", "listen to music", RuleFamily::Preposition),
    // Word order / mixed structure
    rule(
        "make the class very nice",
        "made the class very nice",
        RuleFamily::WordOrder,
    ),
    rule(
        "students is listening",
        "students are listening",
        RuleFamily::WordOrder,
    ),
    rule("some was talking", "some were talking", RuleFamily::WordOrder),
];

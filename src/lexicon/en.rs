//! English lexicon profile (`en-rule-1`).

use crate::operator::Operator;
use crate::role::Role;

use super::{Language, LanguageProfile};

/// Frozen English profile.
pub static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::En,
    model_id: "en-rule-1",

    determiners: &[
        "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "some", "any", "each", "every", "another",
    ],
    pronouns: &[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "themselves", "someone",
        "something", "anyone", "anything", "everyone", "everything", "nobody",
    ],
    first_person: &["i", "we"],
    auxiliaries: &[
        "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
        "ought",
    ],
    adpositions: &[
        "to", "in", "on", "at", "from", "with", "by", "of", "for", "into", "onto", "toward",
        "towards", "under", "over", "near", "beside", "during", "before", "after", "out", "off",
        "about", "through", "until", "between", "behind", "above", "below", "inside", "outside",
    ],
    conjunctions: &["and", "or", "but", "nor", "yet", "so"],
    subordinators: &["because", "if", "when", "while", "although", "since", "unless", "whether"],
    adverbs: &[
        "very", "quite", "too", "also", "here", "there", "now", "then", "soon", "again", "away",
        "back", "still", "just", "already", "almost", "together", "quickly", "slowly",
        "carefully", "well", "hard", "fast",
    ],
    adjectives: &[
        "big", "small", "good", "bad", "new", "old", "young", "little", "long", "short", "high",
        "low", "red", "blue", "green", "black", "white", "happy", "sad", "hot", "cold", "fast",
        "slow", "beautiful", "important", "difficult", "easy", "early", "late", "quick", "strong",
        "weak", "tall",
    ],
    temporal_nouns: &[
        "tomorrow", "yesterday", "today", "tonight", "morning", "afternoon", "evening", "night",
        "noon", "midnight", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
        "sunday", "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december", "week", "month", "year", "day", "hour",
        "minute", "moment", "spring", "summer", "autumn", "fall", "winter", "weekend",
    ],

    negation_words: &[
        "not", "n't", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor", "none",
        "hardly", "scarcely", "barely", "without",
    ],
    future_markers: &["will", "shall", "gonna"],
    future_suffixes: &[],
    modal_operators: &[
        ("can", Operator::Possible),
        ("could", Operator::Possible),
        ("may", Operator::Possible),
        ("might", Operator::Possible),
        ("must", Operator::Necessary),
        ("should", Operator::Obligatory),
        ("ought", Operator::Obligatory),
        ("shall", Operator::Obligatory),
        ("allowed", Operator::Permitted),
        ("permitted", Operator::Permitted),
    ],
    causation_operators: &[
        ("make", Operator::Causative),
        ("cause", Operator::Causative),
        ("force", Operator::Forced),
        ("compel", Operator::Forced),
        ("decide", Operator::SelfInitiated),
        ("choose", Operator::SelfInitiated),
    ],
    direction_operators: &[
        ("into", Operator::DirectionIn),
        ("in", Operator::DirectionIn),
        ("out", Operator::DirectionOut),
        ("toward", Operator::Toward),
        ("towards", Operator::Toward),
        ("to", Operator::Toward),
        ("away", Operator::Away),
        ("from", Operator::Away),
    ],
    continuous_aux: &["be"],
    perfect_aux: &["have"],
    passive_aux: &["be"],
    agent_markers: &["by"],
    habitual_adverbs: &["usually", "always", "often", "frequently", "regularly"],

    preposition_roles: &[
        ("to", Role::Goal),
        ("into", Role::Goal),
        ("onto", Role::Goal),
        ("toward", Role::Goal),
        ("towards", Role::Goal),
        ("from", Role::Source),
        ("out", Role::Source),
        ("off", Role::Source),
        ("with", Role::Instrument),
        ("using", Role::Instrument),
        ("by", Role::Instrument),
        ("in", Role::Location),
        ("on", Role::Location),
        ("at", Role::Location),
        ("near", Role::Location),
        ("under", Role::Location),
        ("over", Role::Location),
        ("beside", Role::Location),
        ("above", Role::Location),
        ("below", Role::Location),
        ("inside", Role::Location),
        ("behind", Role::Location),
        ("during", Role::Time),
        ("before", Role::Time),
        ("after", Role::Time),
        ("until", Role::Time),
    ],

    question_words: &["what", "who", "whom", "whose", "when", "where", "why", "how", "which"],
    politeness_words: &["please"],
    hedge_words: &["maybe", "perhaps", "possibly", "probably", "might", "could", "presumably"],
    hedge_verbs: &["think", "believe", "guess", "suppose", "assume", "wonder", "doubt"],
    evidential_words: &[
        "apparently", "evidently", "reportedly", "allegedly", "supposedly", "seemingly", "seems",
    ],

    // English predicate lemmas live in the shared core dictionary.
    predicate_roots: &[],
    extra_verbs: &[
        "eat", "drink", "play", "read", "work", "sing", "dance", "open", "close", "stop",
        "start", "help", "call", "use", "put", "get", "buy", "sell", "pay", "meet", "wait",
        "sit", "stand", "visit", "clean", "cook", "wash", "drop", "pick", "carry", "push",
        "pull", "throw", "catch", "follow", "cry", "laugh", "smile", "rain",
    ],

    present_verb_forms: &[
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("has", "have"),
        ("does", "do"),
        ("goes", "go"),
        ("says", "say"),
        ("flies", "fly"),
    ],
    past_verb_forms: &[
        ("was", "be"),
        ("were", "be"),
        ("had", "have"),
        ("did", "do"),
        ("went", "go"),
        ("came", "come"),
        ("ran", "run"),
        ("gave", "give"),
        ("took", "take"),
        ("sent", "send"),
        ("made", "make"),
        ("said", "say"),
        ("told", "tell"),
        ("spoke", "speak"),
        ("saw", "see"),
        ("heard", "hear"),
        ("felt", "feel"),
        ("found", "find"),
        ("knew", "know"),
        ("thought", "think"),
        ("understood", "understand"),
        ("forgot", "forget"),
        ("learnt", "learn"),
        ("chose", "choose"),
        ("wrote", "write"),
        ("drew", "draw"),
        ("built", "build"),
        ("broke", "break"),
        ("cut", "cut"),
        ("burnt", "burn"),
        ("grew", "grow"),
        ("became", "become"),
        ("held", "hold"),
        ("kept", "keep"),
        ("got", "get"),
        ("lost", "lose"),
        ("left", "leave"),
        ("fell", "fall"),
        ("rose", "rise"),
        ("flew", "fly"),
        ("swam", "swim"),
        ("drove", "drive"),
        ("ate", "eat"),
        ("drank", "drink"),
        ("slept", "sleep"),
        ("threw", "throw"),
        ("caught", "catch"),
        ("stole", "steal"),
        ("lent", "lend"),
        ("sold", "sell"),
        ("bought", "buy"),
        ("paid", "pay"),
        ("met", "meet"),
        ("sat", "sit"),
        ("stood", "stand"),
        ("put", "put"),
        ("read", "read"),
    ],
    participle_forms: &[
        ("been", "be"),
        ("done", "do"),
        ("gone", "go"),
        ("given", "give"),
        ("taken", "take"),
        ("sent", "send"),
        ("made", "make"),
        ("said", "say"),
        ("told", "tell"),
        ("spoken", "speak"),
        ("seen", "see"),
        ("heard", "hear"),
        ("felt", "feel"),
        ("found", "find"),
        ("known", "know"),
        ("thought", "think"),
        ("understood", "understand"),
        ("forgotten", "forget"),
        ("chosen", "choose"),
        ("written", "write"),
        ("drawn", "draw"),
        ("built", "build"),
        ("broken", "break"),
        ("grown", "grow"),
        ("become", "become"),
        ("held", "hold"),
        ("kept", "keep"),
        ("gotten", "get"),
        ("lost", "lose"),
        ("fallen", "fall"),
        ("risen", "rise"),
        ("flown", "fly"),
        ("driven", "drive"),
        ("eaten", "eat"),
        ("thrown", "throw"),
        ("caught", "catch"),
        ("stolen", "steal"),
        ("sold", "sell"),
        ("bought", "buy"),
        ("paid", "pay"),
    ],
};

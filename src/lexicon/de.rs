//! German lexicon profile (`de-rule-1`).

use crate::operator::Operator;
use crate::role::Role;
use crate::root::Root;

use super::{Language, LanguageProfile};

/// Frozen German profile.
pub static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::De,
    model_id: "de-rule-1",

    determiners: &[
        "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer",
        "dieser", "diese", "dieses", "mein", "meine", "dein", "sein", "seine", "ihr", "ihre",
        "unser", "jeder", "jede",
    ],
    pronouns: &[
        "ich", "du", "er", "sie", "es", "wir", "ihr", "mich", "dich", "ihn", "uns", "euch",
        "ihnen", "ihm", "jemand", "niemand", "etwas",
    ],
    first_person: &["ich", "wir"],
    auxiliaries: &[
        "sein", "bin", "bist", "ist", "sind", "seid", "war", "waren", "haben", "habe", "hast",
        "hat", "habt", "hatte", "hatten", "werden", "werde", "wirst", "wird", "werdet", "kann",
        "können", "könnte", "muss", "müssen", "soll", "sollte", "darf", "dürfen",
    ],
    adpositions: &[
        "in", "an", "auf", "zu", "von", "mit", "durch", "für", "nach", "aus", "bei", "seit",
        "über", "unter", "vor", "hinter", "neben", "während", "ohne", "gegen", "zwischen",
    ],
    conjunctions: &["und", "oder", "aber", "denn", "sondern"],
    subordinators: &["weil", "wenn", "als", "während", "obwohl", "dass", "ob"],
    adverbs: &[
        "sehr", "auch", "hier", "dort", "jetzt", "dann", "bald", "schon", "noch", "gut",
        "schlecht", "schnell", "langsam", "gern",
    ],
    adjectives: &[
        "groß", "große", "klein", "kleine", "gut", "gute", "schlecht", "neu", "neue", "alt",
        "alte", "rot", "rote", "glücklich", "traurig", "hoch", "niedrig", "jung", "junge",
    ],
    temporal_nouns: &[
        "morgen", "gestern", "heute", "abend", "nacht", "mittag", "mitternacht", "montag",
        "dienstag", "mittwoch", "donnerstag", "freitag", "samstag", "sonntag", "woche", "monat",
        "jahr", "tag", "stunde", "moment", "sommer", "winter", "frühling", "herbst",
    ],

    negation_words: &[
        "nicht", "kein", "keine", "keiner", "keinen", "keines", "nie", "niemals", "nichts",
        "niemand", "weder", "noch", "ohne",
    ],
    future_markers: &["wird", "werde", "wirst", "werden", "werdet"],
    future_suffixes: &[],
    modal_operators: &[
        ("kann", Operator::Possible),
        ("können", Operator::Possible),
        ("könnte", Operator::Possible),
        ("muss", Operator::Necessary),
        ("müssen", Operator::Necessary),
        ("soll", Operator::Obligatory),
        ("sollte", Operator::Obligatory),
        ("darf", Operator::Permitted),
        ("dürfen", Operator::Permitted),
    ],
    causation_operators: &[
        ("verursachen", Operator::Causative),
        ("zwingen", Operator::Forced),
        ("entscheiden", Operator::SelfInitiated),
        ("wählen", Operator::SelfInitiated),
    ],
    direction_operators: &[
        ("hinaus", Operator::DirectionOut),
        ("hinein", Operator::DirectionIn),
        ("weg", Operator::Away),
    ],
    continuous_aux: &[],
    perfect_aux: &["haben", "sein"],
    passive_aux: &["werden"],
    agent_markers: &["von"],
    habitual_adverbs: &["immer", "oft", "gewöhnlich", "regelmäßig", "meistens"],

    preposition_roles: &[
        ("zu", Role::Goal),
        ("nach", Role::Goal),
        ("von", Role::Source),
        ("aus", Role::Source),
        ("mit", Role::Instrument),
        ("durch", Role::Instrument),
        ("in", Role::Location),
        ("an", Role::Location),
        ("auf", Role::Location),
        ("bei", Role::Location),
        ("über", Role::Location),
        ("unter", Role::Location),
        ("neben", Role::Location),
        ("hinter", Role::Location),
        ("während", Role::Time),
        ("vor", Role::Time),
        ("seit", Role::Time),
    ],

    question_words: &["was", "wer", "wann", "wo", "warum", "wie", "welche", "welcher", "wen"],
    politeness_words: &["bitte"],
    hedge_words: &["vielleicht", "möglicherweise", "wahrscheinlich", "eventuell"],
    hedge_verbs: &["denken", "glauben", "vermuten", "bezweifeln"],
    evidential_words: &["anscheinend", "angeblich", "offenbar", "scheinbar"],

    predicate_roots: &[
        ("ankommen", Root::Motion),
        ("fliegen", Root::Motion),
        ("gehen", Root::Motion),
        ("kommen", Root::Motion),
        ("laufen", Root::Motion),
        ("rennen", Root::Motion),
        ("geben", Root::Transfer),
        ("nehmen", Root::Transfer),
        ("schicken", Root::Transfer),
        ("senden", Root::Transfer),
        ("erhalten", Root::Transfer),
        ("antworten", Root::Communication),
        ("fragen", Root::Communication),
        ("sagen", Root::Communication),
        ("sprechen", Root::Communication),
        ("denken", Root::Cognition),
        ("kennen", Root::Cognition),
        ("verstehen", Root::Cognition),
        ("wissen", Root::Cognition),
        ("fühlen", Root::Perception),
        ("hören", Root::Perception),
        ("schauen", Root::Perception),
        ("sehen", Root::Perception),
        ("bauen", Root::Creation),
        ("machen", Root::Creation),
        ("schaffen", Root::Creation),
        ("schreiben", Root::Creation),
        ("brechen", Root::Destruction),
        ("zerstören", Root::Destruction),
        ("ändern", Root::Change),
        ("wachsen", Root::Change),
        ("besitzen", Root::Possession),
        ("brauchen", Root::Possession),
        ("haben", Root::Possession),
        ("suchen", Root::Intention),
        ("versuchen", Root::Intention),
        ("wollen", Root::Intention),
        ("existieren", Root::Existence),
        ("leben", Root::Existence),
        ("schlafen", Root::Existence),
        ("sein", Root::Existence),
        ("sterben", Root::Existence),
    ],
    extra_verbs: &["essen", "trinken", "spielen", "lesen", "arbeiten", "öffnen", "helfen"],

    present_verb_forms: &[
        ("wird", "werden"),
        ("werde", "werden"),
        ("wirst", "werden"),
        ("bin", "sein"),
        ("bist", "sein"),
        ("ist", "sein"),
        ("sind", "sein"),
        ("habe", "haben"),
        ("hast", "haben"),
        ("hat", "haben"),
        ("läuft", "laufen"),
        ("rennt", "rennen"),
        ("geht", "gehen"),
        ("kommt", "kommen"),
        ("gibt", "geben"),
        ("nimmt", "nehmen"),
        ("sagt", "sagen"),
        ("spricht", "sprechen"),
        ("denkt", "denken"),
        ("weiß", "wissen"),
        ("sieht", "sehen"),
        ("hört", "hören"),
        ("macht", "machen"),
        ("schreibt", "schreiben"),
        ("schläft", "schlafen"),
        ("lebt", "leben"),
        ("stirbt", "sterben"),
        ("will", "wollen"),
        ("isst", "essen"),
        ("liest", "lesen"),
        ("fährt", "fahren"),
    ],
    past_verb_forms: &[
        ("war", "sein"),
        ("waren", "sein"),
        ("hatte", "haben"),
        ("hatten", "haben"),
        ("lief", "laufen"),
        ("rannte", "rennen"),
        ("ging", "gehen"),
        ("kam", "kommen"),
        ("gab", "geben"),
        ("nahm", "nehmen"),
        ("sagte", "sagen"),
        ("sprach", "sprechen"),
        ("dachte", "denken"),
        ("wusste", "wissen"),
        ("sah", "sehen"),
        ("hörte", "hören"),
        ("machte", "machen"),
        ("schrieb", "schreiben"),
        ("schlief", "schlafen"),
        ("lebte", "leben"),
        ("starb", "sterben"),
        ("wollte", "wollen"),
        ("aß", "essen"),
        ("las", "lesen"),
    ],
    participle_forms: &[
        ("gewesen", "sein"),
        ("gehabt", "haben"),
        ("gelaufen", "laufen"),
        ("gegangen", "gehen"),
        ("gekommen", "kommen"),
        ("gegeben", "geben"),
        ("genommen", "nehmen"),
        ("gesagt", "sagen"),
        ("gesprochen", "sprechen"),
        ("gedacht", "denken"),
        ("gewusst", "wissen"),
        ("gesehen", "sehen"),
        ("gehört", "hören"),
        ("gemacht", "machen"),
        ("geschrieben", "schreiben"),
        ("geschlafen", "schlafen"),
        ("gestorben", "sterben"),
        ("gegessen", "essen"),
        ("gelesen", "lesen"),
    ],
};

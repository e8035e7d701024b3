//! Italian lexicon profile (`it-rule-1`).

use crate::operator::Operator;
use crate::role::Role;
use crate::root::Root;

use super::{Language, LanguageProfile};

/// Frozen Italian profile.
pub static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::It,
    model_id: "it-rule-1",

    determiners: &[
        "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "questo", "questa", "questi",
        "queste", "quel", "quella", "mio", "mia", "tuo", "tua", "suo", "sua", "nostro", "ogni",
    ],
    pronouns: &[
        "io", "tu", "lui", "lei", "noi", "voi", "loro", "mi", "ti", "si", "ci", "vi", "gli",
        "qualcuno", "nessuno", "qualcosa",
    ],
    first_person: &["io", "noi"],
    auxiliaries: &[
        "essere", "è", "sono", "era", "erano", "avere", "ha", "hanno", "aveva", "stare", "sta",
        "stanno", "può", "possono", "potrebbe", "deve", "devono", "dovrebbe",
    ],
    adpositions: &[
        "a", "in", "di", "da", "con", "per", "verso", "su", "sotto", "durante", "prima", "dopo",
        "fino", "tra", "fra", "senza", "contro",
    ],
    conjunctions: &["e", "o", "ma", "né", "oppure"],
    subordinators: &["perché", "se", "quando", "mentre", "benché", "che"],
    adverbs: &[
        "molto", "anche", "qui", "lì", "ora", "adesso", "poi", "presto", "già", "ancora", "bene",
        "male", "velocemente", "lentamente",
    ],
    adjectives: &[
        "grande", "piccolo", "piccola", "buono", "buona", "cattivo", "cattiva", "nuovo", "nuova",
        "vecchio", "vecchia", "rosso", "rossa", "felice", "triste", "alto", "alta", "basso",
    ],
    temporal_nouns: &[
        "domani", "ieri", "oggi", "stasera", "mattina", "sera", "notte", "mezzogiorno",
        "mezzanotte", "lunedì", "martedì", "mercoledì", "giovedì", "venerdì", "sabato",
        "domenica", "settimana", "mese", "anno", "giorno", "ora", "momento", "estate", "inverno",
        "primavera", "autunno",
    ],

    negation_words: &[
        "non", "mai", "niente", "nulla", "nessuno", "nessuna", "né", "neanche", "nemmeno",
        "neppure", "senza",
    ],
    future_markers: &[],
    future_suffixes: &["rò", "rai", "rà", "remo", "rete", "ranno"],
    modal_operators: &[
        ("può", Operator::Possible),
        ("possono", Operator::Possible),
        ("potrebbe", Operator::Possible),
        ("deve", Operator::Necessary),
        ("devono", Operator::Necessary),
        ("dovrebbe", Operator::Obligatory),
        ("permesso", Operator::Permitted),
    ],
    causation_operators: &[
        ("causare", Operator::Causative),
        ("costringere", Operator::Forced),
        ("decidere", Operator::SelfInitiated),
        ("scegliere", Operator::SelfInitiated),
    ],
    direction_operators: &[("fuori", Operator::DirectionOut), ("dentro", Operator::DirectionIn)],
    continuous_aux: &["stare"],
    perfect_aux: &["avere", "essere"],
    passive_aux: &["essere"],
    agent_markers: &["da"],
    habitual_adverbs: &["sempre", "spesso", "solitamente", "regolarmente"],

    preposition_roles: &[
        ("a", Role::Goal),
        ("verso", Role::Goal),
        ("per", Role::Goal),
        ("da", Role::Source),
        ("di", Role::Source),
        ("con", Role::Instrument),
        ("in", Role::Location),
        ("su", Role::Location),
        ("sotto", Role::Location),
        ("tra", Role::Location),
        ("fra", Role::Location),
        ("durante", Role::Time),
        ("prima", Role::Time),
        ("dopo", Role::Time),
    ],

    question_words: &["che", "chi", "quando", "dove", "perché", "come", "quale", "quanto", "cosa"],
    politeness_words: &["favore"],
    hedge_words: &["forse", "probabilmente", "possibilmente", "magari"],
    hedge_verbs: &["pensare", "credere", "supporre", "dubitare"],
    evidential_words: &["apparentemente", "presumibilmente", "evidentemente"],

    predicate_roots: &[
        ("andare", Root::Motion),
        ("arrivare", Root::Motion),
        ("camminare", Root::Motion),
        ("correre", Root::Motion),
        ("entrare", Root::Motion),
        ("partire", Root::Motion),
        ("venire", Root::Motion),
        ("volare", Root::Motion),
        ("dare", Root::Transfer),
        ("mandare", Root::Transfer),
        ("prendere", Root::Transfer),
        ("ricevere", Root::Transfer),
        ("chiedere", Root::Communication),
        ("dire", Root::Communication),
        ("parlare", Root::Communication),
        ("rispondere", Root::Communication),
        ("capire", Root::Cognition),
        ("conoscere", Root::Cognition),
        ("pensare", Root::Cognition),
        ("sapere", Root::Cognition),
        ("ascoltare", Root::Perception),
        ("guardare", Root::Perception),
        ("sentire", Root::Perception),
        ("vedere", Root::Perception),
        ("costruire", Root::Creation),
        ("creare", Root::Creation),
        ("fare", Root::Creation),
        ("scrivere", Root::Creation),
        ("distruggere", Root::Destruction),
        ("rompere", Root::Destruction),
        ("cambiare", Root::Change),
        ("crescere", Root::Change),
        ("avere", Root::Possession),
        ("possedere", Root::Possession),
        ("cercare", Root::Intention),
        ("provare", Root::Intention),
        ("volere", Root::Intention),
        ("dormire", Root::Existence),
        ("esistere", Root::Existence),
        ("essere", Root::Existence),
        ("morire", Root::Existence),
        ("vivere", Root::Existence),
    ],
    extra_verbs: &["mangiare", "bere", "giocare", "leggere", "lavorare", "aprire", "aiutare"],

    present_verb_forms: &[
        ("è", "essere"),
        ("sono", "essere"),
        ("ha", "avere"),
        ("hanno", "avere"),
        ("va", "andare"),
        ("vanno", "andare"),
        ("viene", "venire"),
        ("vengono", "venire"),
        ("dà", "dare"),
        ("danno", "dare"),
        ("dice", "dire"),
        ("dicono", "dire"),
        ("fa", "fare"),
        ("fanno", "fare"),
        ("vede", "vedere"),
        ("vedono", "vedere"),
        ("sa", "sapere"),
        ("sanno", "sapere"),
        ("vuole", "volere"),
        ("vogliono", "volere"),
        ("vive", "vivere"),
        ("vivono", "vivere"),
        ("dorme", "dormire"),
        ("dormono", "dormire"),
        ("muore", "morire"),
        ("scrive", "scrivere"),
        ("legge", "leggere"),
        ("mangia", "mangiare"),
        ("mangiano", "mangiare"),
    ],
    past_verb_forms: &[
        ("era", "essere"),
        ("erano", "essere"),
        ("aveva", "avere"),
        ("andò", "andare"),
        ("corse", "correre"),
        ("venne", "venire"),
        ("diede", "dare"),
        ("mandò", "mandare"),
        ("prese", "prendere"),
        ("disse", "dire"),
        ("parlò", "parlare"),
        ("pensò", "pensare"),
        ("seppe", "sapere"),
        ("vide", "vedere"),
        ("fece", "fare"),
        ("scrisse", "scrivere"),
        ("ruppe", "rompere"),
        ("cambiò", "cambiare"),
        ("ebbe", "avere"),
        ("volle", "volere"),
        ("dormì", "dormire"),
        ("morì", "morire"),
        ("visse", "vivere"),
        ("mangiò", "mangiare"),
    ],
    participle_forms: &[
        ("stato", "essere"),
        ("avuto", "avere"),
        ("andato", "andare"),
        ("corso", "correre"),
        ("venuto", "venire"),
        ("dato", "dare"),
        ("detto", "dire"),
        ("fatto", "fare"),
        ("visto", "vedere"),
        ("saputo", "sapere"),
        ("scritto", "scrivere"),
        ("rotto", "rompere"),
        ("mangiato", "mangiare"),
    ],
};

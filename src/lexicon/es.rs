//! Spanish lexicon profile (`es-rule-1`).

use crate::operator::Operator;
use crate::role::Role;
use crate::root::Root;

use super::{Language, LanguageProfile};

/// Frozen Spanish profile.
pub static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Es,
    model_id: "es-rule-1",

    determiners: &[
        "el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta", "estos", "estas",
        "ese", "esa", "mi", "tu", "su", "nuestro", "nuestra", "cada",
    ],
    pronouns: &[
        "yo", "tú", "él", "ella", "usted", "nosotros", "nosotras", "ellos", "ellas", "ustedes",
        "me", "te", "le", "lo", "nos", "les", "alguien", "algo", "nadie",
    ],
    first_person: &["yo", "nosotros", "nosotras"],
    auxiliaries: &[
        "ser", "es", "son", "era", "eran", "fue", "fueron", "estar", "está", "están", "estaba",
        "haber", "ha", "han", "había", "puede", "pueden", "podría", "debe", "deben", "debería",
        "va", "voy", "vas", "vamos", "van",
    ],
    adpositions: &[
        "a", "en", "de", "desde", "con", "por", "para", "hacia", "sobre", "bajo", "durante",
        "antes", "después", "hasta", "entre", "sin", "contra",
    ],
    conjunctions: &["y", "o", "pero", "e", "u", "sino"],
    subordinators: &["porque", "si", "cuando", "mientras", "aunque", "que"],
    adverbs: &[
        "muy", "también", "aquí", "allí", "ahora", "entonces", "pronto", "ya", "todavía", "bien",
        "mal", "rápidamente", "lentamente",
    ],
    adjectives: &[
        "grande", "pequeño", "pequeña", "bueno", "buena", "malo", "mala", "nuevo", "nueva",
        "viejo", "vieja", "rojo", "roja", "feliz", "triste", "alto", "alta", "bajo", "baja",
    ],
    temporal_nouns: &[
        "mañana", "ayer", "hoy", "anoche", "tarde", "noche", "mediodía", "medianoche", "lunes",
        "martes", "miércoles", "jueves", "viernes", "sábado", "domingo", "semana", "mes", "año",
        "día", "hora", "momento", "verano", "invierno", "primavera", "otoño",
    ],

    negation_words: &[
        "no", "nunca", "nada", "nadie", "ningún", "ninguna", "ninguno", "jamás", "tampoco", "ni",
        "sin",
    ],
    future_markers: &["va", "voy", "vas", "vamos", "van", "iré", "irás", "irá", "iremos", "irán"],
    future_suffixes: &["ré", "rás", "rá", "remos", "réis", "rán"],
    modal_operators: &[
        ("puede", Operator::Possible),
        ("pueden", Operator::Possible),
        ("podría", Operator::Possible),
        ("debe", Operator::Necessary),
        ("deben", Operator::Necessary),
        ("debería", Operator::Obligatory),
        ("permitido", Operator::Permitted),
    ],
    causation_operators: &[
        ("causar", Operator::Causative),
        ("obligar", Operator::Forced),
        ("decidir", Operator::SelfInitiated),
        ("elegir", Operator::SelfInitiated),
    ],
    direction_operators: &[("fuera", Operator::DirectionOut), ("adentro", Operator::DirectionIn)],
    continuous_aux: &["estar"],
    perfect_aux: &["haber"],
    passive_aux: &["ser"],
    agent_markers: &["por"],
    habitual_adverbs: &["siempre", "usualmente", "frecuentemente", "normalmente"],

    preposition_roles: &[
        ("a", Role::Goal),
        ("hacia", Role::Goal),
        ("para", Role::Goal),
        ("de", Role::Source),
        ("desde", Role::Source),
        ("con", Role::Instrument),
        ("por", Role::Instrument),
        ("en", Role::Location),
        ("sobre", Role::Location),
        ("bajo", Role::Location),
        ("entre", Role::Location),
        ("durante", Role::Time),
        ("antes", Role::Time),
        ("después", Role::Time),
        ("hasta", Role::Time),
    ],

    question_words: &["qué", "quién", "quiénes", "cuándo", "dónde", "cómo", "cuál", "cuánto"],
    politeness_words: &["favor"],
    hedge_words: &["quizá", "quizás", "posiblemente", "probablemente", "acaso"],
    hedge_verbs: &["creer", "pensar", "suponer", "dudar"],
    evidential_words: &["aparentemente", "supuestamente", "evidentemente"],

    predicate_roots: &[
        ("andar", Root::Motion),
        ("caminar", Root::Motion),
        ("correr", Root::Motion),
        ("entrar", Root::Motion),
        ("ir", Root::Motion),
        ("llegar", Root::Motion),
        ("salir", Root::Motion),
        ("venir", Root::Motion),
        ("volar", Root::Motion),
        ("volver", Root::Motion),
        ("dar", Root::Transfer),
        ("enviar", Root::Transfer),
        ("recibir", Root::Transfer),
        ("tomar", Root::Transfer),
        ("decir", Root::Communication),
        ("hablar", Root::Communication),
        ("preguntar", Root::Communication),
        ("responder", Root::Communication),
        ("conocer", Root::Cognition),
        ("entender", Root::Cognition),
        ("pensar", Root::Cognition),
        ("recordar", Root::Cognition),
        ("saber", Root::Cognition),
        ("escuchar", Root::Perception),
        ("mirar", Root::Perception),
        ("oír", Root::Perception),
        ("sentir", Root::Perception),
        ("ver", Root::Perception),
        ("construir", Root::Creation),
        ("crear", Root::Creation),
        ("escribir", Root::Creation),
        ("hacer", Root::Creation),
        ("destruir", Root::Destruction),
        ("romper", Root::Destruction),
        ("cambiar", Root::Change),
        ("crecer", Root::Change),
        ("necesitar", Root::Possession),
        ("poseer", Root::Possession),
        ("tener", Root::Possession),
        ("buscar", Root::Intention),
        ("intentar", Root::Intention),
        ("querer", Root::Intention),
        ("dormir", Root::Existence),
        ("estar", Root::Existence),
        ("existir", Root::Existence),
        ("morir", Root::Existence),
        ("ser", Root::Existence),
        ("vivir", Root::Existence),
    ],
    extra_verbs: &["comer", "beber", "jugar", "leer", "trabajar", "abrir", "cerrar", "ayudar"],

    present_verb_forms: &[
        ("es", "ser"),
        ("son", "ser"),
        ("está", "estar"),
        ("están", "estar"),
        ("va", "ir"),
        ("van", "ir"),
        ("voy", "ir"),
        ("vive", "vivir"),
        ("viven", "vivir"),
        ("viene", "venir"),
        ("vienen", "venir"),
        ("tiene", "tener"),
        ("tienen", "tener"),
        ("quiere", "querer"),
        ("quieren", "querer"),
        ("piensa", "pensar"),
        ("piensan", "pensar"),
        ("sabe", "saber"),
        ("saben", "saber"),
        ("ve", "ver"),
        ("ven", "ver"),
        ("oye", "oír"),
        ("hace", "hacer"),
        ("hacen", "hacer"),
        ("dice", "decir"),
        ("dicen", "decir"),
        ("da", "dar"),
        ("dan", "dar"),
        ("duerme", "dormir"),
        ("duermen", "dormir"),
        ("muere", "morir"),
        ("siente", "sentir"),
        ("entiende", "entender"),
        ("recuerda", "recordar"),
        ("vuelve", "volver"),
        ("crece", "crecer"),
        ("juega", "jugar"),
        ("come", "comer"),
        ("comen", "comer"),
        ("lee", "leer"),
        ("escribe", "escribir"),
        ("escriben", "escribir"),
    ],
    past_verb_forms: &[
        ("fue", "ir"),
        ("fueron", "ir"),
        ("era", "ser"),
        ("eran", "ser"),
        ("estaba", "estar"),
        ("corrió", "correr"),
        ("llegó", "llegar"),
        ("salió", "salir"),
        ("vino", "venir"),
        ("dio", "dar"),
        ("envió", "enviar"),
        ("recibió", "recibir"),
        ("tomó", "tomar"),
        ("dijo", "decir"),
        ("habló", "hablar"),
        ("preguntó", "preguntar"),
        ("pensó", "pensar"),
        ("supo", "saber"),
        ("vio", "ver"),
        ("miró", "mirar"),
        ("oyó", "oír"),
        ("sintió", "sentir"),
        ("hizo", "hacer"),
        ("creó", "crear"),
        ("escribió", "escribir"),
        ("construyó", "construir"),
        ("rompió", "romper"),
        ("destruyó", "destruir"),
        ("cambió", "cambiar"),
        ("tuvo", "tener"),
        ("quiso", "querer"),
        ("durmió", "dormir"),
        ("murió", "morir"),
        ("vivió", "vivir"),
        ("comió", "comer"),
    ],
    participle_forms: &[
        ("ido", "ir"),
        ("sido", "ser"),
        ("estado", "estar"),
        ("dado", "dar"),
        ("dicho", "decir"),
        ("hecho", "hacer"),
        ("visto", "ver"),
        ("escrito", "escribir"),
        ("roto", "romper"),
        ("tenido", "tener"),
        ("corrido", "correr"),
        ("comido", "comer"),
    ],
};

//! French lexicon profile (`fr-rule-1`).

use crate::operator::Operator;
use crate::role::Role;
use crate::root::Root;

use super::{Language, LanguageProfile};

/// Frozen French profile.
pub static PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Fr,
    model_id: "fr-rule-1",

    determiners: &[
        "le", "la", "les", "un", "une", "des", "ce", "cet", "cette", "ces", "mon", "ma", "mes",
        "ton", "ta", "son", "sa", "notre", "votre", "leur", "chaque", "du",
    ],
    pronouns: &[
        "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "me", "te", "se", "lui",
        "leur", "moi", "toi", "quelqu'un", "personne",
    ],
    first_person: &["je", "nous"],
    auxiliaries: &[
        "être", "est", "sont", "était", "étaient", "avoir", "a", "ont", "avait", "va", "vais",
        "vas", "allons", "allez", "vont", "peut", "peuvent", "pourrait", "doit", "doivent",
        "devrait",
    ],
    adpositions: &[
        "à", "en", "de", "depuis", "avec", "par", "pour", "vers", "sur", "sous", "pendant",
        "avant", "après", "dans", "chez", "entre", "sans", "jusqu'à",
    ],
    conjunctions: &["et", "ou", "mais", "ni", "donc", "car"],
    subordinators: &["parce", "si", "quand", "lorsque", "bien", "que"],
    adverbs: &[
        "très", "aussi", "ici", "là", "maintenant", "alors", "bientôt", "déjà", "encore", "bien",
        "mal", "vite", "rapidement", "lentement",
    ],
    adjectives: &[
        "grand", "grande", "petit", "petite", "bon", "bonne", "mauvais", "mauvaise", "nouveau",
        "nouvelle", "vieux", "vieille", "rouge", "heureux", "triste", "haut", "bas",
    ],
    temporal_nouns: &[
        "demain", "hier", "aujourd'hui", "matin", "soir", "nuit", "midi", "minuit", "lundi",
        "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche", "semaine", "mois",
        "année", "jour", "heure", "moment", "été", "hiver", "printemps", "automne",
    ],

    negation_words: &[
        "ne", "n'", "pas", "non", "jamais", "rien", "personne", "aucun", "aucune", "ni", "plus",
        "sans",
    ],
    future_markers: &["va", "vais", "vas", "allons", "allez", "vont"],
    future_suffixes: &["rai", "ras", "ra", "rons", "rez", "ront"],
    modal_operators: &[
        ("peut", Operator::Possible),
        ("peuvent", Operator::Possible),
        ("pourrait", Operator::Possible),
        ("doit", Operator::Necessary),
        ("doivent", Operator::Necessary),
        ("devrait", Operator::Obligatory),
        ("permis", Operator::Permitted),
    ],
    causation_operators: &[
        ("causer", Operator::Causative),
        ("forcer", Operator::Forced),
        ("décider", Operator::SelfInitiated),
        ("choisir", Operator::SelfInitiated),
    ],
    direction_operators: &[("dehors", Operator::DirectionOut), ("dedans", Operator::DirectionIn)],
    continuous_aux: &[],
    perfect_aux: &["avoir"],
    passive_aux: &["être"],
    agent_markers: &["par"],
    habitual_adverbs: &["toujours", "souvent", "habituellement", "régulièrement"],

    preposition_roles: &[
        ("à", Role::Goal),
        ("vers", Role::Goal),
        ("pour", Role::Goal),
        ("de", Role::Source),
        ("depuis", Role::Source),
        ("avec", Role::Instrument),
        ("par", Role::Instrument),
        ("en", Role::Location),
        ("dans", Role::Location),
        ("sur", Role::Location),
        ("sous", Role::Location),
        ("chez", Role::Location),
        ("entre", Role::Location),
        ("pendant", Role::Time),
        ("avant", Role::Time),
        ("après", Role::Time),
    ],

    question_words: &["que", "qui", "quand", "où", "pourquoi", "comment", "quel", "quelle", "combien"],
    politeness_words: &["plaît"],
    hedge_words: &["peut-être", "probablement", "possiblement", "sans doute"],
    hedge_verbs: &["penser", "croire", "supposer", "douter"],
    evidential_words: &["apparemment", "visiblement", "soi-disant"],

    predicate_roots: &[
        ("aller", Root::Motion),
        ("arriver", Root::Motion),
        ("courir", Root::Motion),
        ("entrer", Root::Motion),
        ("marcher", Root::Motion),
        ("partir", Root::Motion),
        ("venir", Root::Motion),
        ("voler", Root::Motion),
        ("donner", Root::Transfer),
        ("envoyer", Root::Transfer),
        ("prendre", Root::Transfer),
        ("recevoir", Root::Transfer),
        ("demander", Root::Communication),
        ("dire", Root::Communication),
        ("parler", Root::Communication),
        ("répondre", Root::Communication),
        ("comprendre", Root::Cognition),
        ("connaître", Root::Cognition),
        ("penser", Root::Cognition),
        ("savoir", Root::Cognition),
        ("écouter", Root::Perception),
        ("entendre", Root::Perception),
        ("regarder", Root::Perception),
        ("sentir", Root::Perception),
        ("voir", Root::Perception),
        ("construire", Root::Creation),
        ("créer", Root::Creation),
        ("écrire", Root::Creation),
        ("faire", Root::Creation),
        ("casser", Root::Destruction),
        ("détruire", Root::Destruction),
        ("changer", Root::Change),
        ("grandir", Root::Change),
        ("avoir", Root::Possession),
        ("posséder", Root::Possession),
        ("chercher", Root::Intention),
        ("essayer", Root::Intention),
        ("vouloir", Root::Intention),
        ("dormir", Root::Existence),
        ("être", Root::Existence),
        ("exister", Root::Existence),
        ("mourir", Root::Existence),
        ("vivre", Root::Existence),
    ],
    extra_verbs: &["manger", "boire", "jouer", "lire", "travailler", "ouvrir", "fermer", "aider"],

    present_verb_forms: &[
        ("est", "être"),
        ("sont", "être"),
        ("a", "avoir"),
        ("ont", "avoir"),
        ("va", "aller"),
        ("vont", "aller"),
        ("vais", "aller"),
        ("court", "courir"),
        ("courent", "courir"),
        ("vient", "venir"),
        ("viennent", "venir"),
        ("part", "partir"),
        ("dit", "dire"),
        ("disent", "dire"),
        ("fait", "faire"),
        ("font", "faire"),
        ("voit", "voir"),
        ("voient", "voir"),
        ("sait", "savoir"),
        ("savent", "savoir"),
        ("veut", "vouloir"),
        ("veulent", "vouloir"),
        ("prend", "prendre"),
        ("prennent", "prendre"),
        ("comprend", "comprendre"),
        ("écrit", "écrire"),
        ("vit", "vivre"),
        ("vivent", "vivre"),
        ("dort", "dormir"),
        ("dorment", "dormir"),
        ("meurt", "mourir"),
        ("entend", "entendre"),
        ("lit", "lire"),
        ("mange", "manger"),
        ("mangent", "manger"),
    ],
    past_verb_forms: &[
        ("était", "être"),
        ("étaient", "être"),
        ("avait", "avoir"),
        ("alla", "aller"),
        ("courut", "courir"),
        ("vint", "venir"),
        ("donna", "donner"),
        ("envoya", "envoyer"),
        ("prit", "prendre"),
        ("dit", "dire"),
        ("parla", "parler"),
        ("pensa", "penser"),
        ("sut", "savoir"),
        ("vit", "voir"),
        ("fit", "faire"),
        ("écrivit", "écrire"),
        ("cassa", "casser"),
        ("changea", "changer"),
        ("eut", "avoir"),
        ("voulut", "vouloir"),
        ("dormit", "dormir"),
        ("mourut", "mourir"),
        ("vécut", "vivre"),
        ("mangea", "manger"),
    ],
    participle_forms: &[
        ("été", "être"),
        ("eu", "avoir"),
        ("allé", "aller"),
        ("couru", "courir"),
        ("venu", "venir"),
        ("donné", "donner"),
        ("envoyé", "envoyer"),
        ("pris", "prendre"),
        ("dit", "dire"),
        ("fait", "faire"),
        ("vu", "voir"),
        ("su", "savoir"),
        ("écrit", "écrire"),
        ("cassé", "casser"),
        ("mangé", "manger"),
    ],
};

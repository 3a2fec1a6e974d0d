//! Static catalog of assessment questions.
//!
//! Each level has exactly twelve questions, one per [`LifeDomain`]. The
//! position of a question within its level is the answer key used on
//! submission ("0" through "11"), so lookups are keyed by `(level, index)`
//! and never re-derived from a freshly built list.
//!
//! The tables are checked once when the bank is first built. A malformed
//! table is reported by [`QuestionBank::standard`] and surfaces at start-up.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use super::{Level, LifeDomain};

/// Number of questions every level must carry.
pub const QUESTIONS_PER_LEVEL: usize = 12;

/// Prompt text with its static translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub de: &'static str,
    pub fr: &'static str,
}

/// A single assessment question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub level: Level,
    pub index: usize,
    pub domain: LifeDomain,
    pub text: LocalizedText,
}

/// Reasons a question table can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionBankError {
    #[error("Level {level} has {actual} questions, expected 12")]
    WrongQuestionCount { level: Level, actual: usize },

    #[error("Level {level} covers domain '{domain}' more than once")]
    DuplicateDomain { level: Level, domain: LifeDomain },

    #[error("Level {level} has no question table")]
    MissingLevel { level: Level },
}

type Seed = (LifeDomain, &'static str, &'static str, &'static str);

/// Read-only lookup of questions by level and position.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    levels: BTreeMap<Level, Vec<Question>>,
}

static STANDARD: Lazy<Result<QuestionBank, QuestionBankError>> = Lazy::new(|| {
    QuestionBank::from_tables(&[
        (Level::One, LEVEL_ONE),
        (Level::Two, LEVEL_TWO),
        (Level::Three, LEVEL_THREE),
    ])
});

impl QuestionBank {
    /// The built-in question catalog.
    pub fn standard() -> Result<&'static QuestionBank, QuestionBankError> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    /// Builds a bank from raw tables, checking per-level shape.
    fn from_tables(tables: &[(Level, &[Seed])]) -> Result<Self, QuestionBankError> {
        let mut levels = BTreeMap::new();

        for (level, seeds) in tables {
            if seeds.len() != QUESTIONS_PER_LEVEL {
                return Err(QuestionBankError::WrongQuestionCount {
                    level: *level,
                    actual: seeds.len(),
                });
            }

            let mut seen = HashSet::new();
            let mut questions = Vec::with_capacity(QUESTIONS_PER_LEVEL);
            for (index, (domain, en, de, fr)) in seeds.iter().enumerate() {
                if !seen.insert(*domain) {
                    return Err(QuestionBankError::DuplicateDomain {
                        level: *level,
                        domain: *domain,
                    });
                }
                questions.push(Question {
                    level: *level,
                    index,
                    domain: *domain,
                    text: LocalizedText {
                        en: *en,
                        de: *de,
                        fr: *fr,
                    },
                });
            }
            levels.insert(*level, questions);
        }

        for level in Level::ALL {
            if !levels.contains_key(&level) {
                return Err(QuestionBankError::MissingLevel { level });
            }
        }

        Ok(Self { levels })
    }

    /// All questions of a level in answer-key order.
    pub fn questions(&self, level: Level) -> &[Question] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The question at a given position of a level.
    pub fn question(&self, level: Level, index: usize) -> Option<&Question> {
        self.levels.get(&level).and_then(|qs| qs.get(index))
    }
}

use LifeDomain::*;

const LEVEL_ONE: &[Seed] = &[
    (
        CareerAndVocation,
        "When you think about your career path, what resonates most with you right now?",
        "Wenn Sie über Ihren Karriereweg nachdenken, was spricht Sie derzeit am meisten an?",
        "En pensant à votre parcours professionnel, qu'est-ce qui résonne le plus en vous en ce moment ?",
    ),
    (
        FinancialWellBeing,
        "How would you describe your current relationship with money?",
        "Wie würden Sie Ihre aktuelle Beziehung zu Geld beschreiben?",
        "Comment décririez-vous votre relation actuelle avec l'argent ?",
    ),
    (
        PhysicalHealth,
        "When you check in with your body, how do you feel?",
        "Wenn Sie in Ihren Körper hineinhören, wie fühlen Sie sich?",
        "Quand vous êtes à l'écoute de votre corps, comment vous sentez-vous ?",
    ),
    (
        EmotionalWellBeing,
        "How well do you manage stress and emotions?",
        "Wie gut bewältigen Sie Stress und Emotionen?",
        "Comment gérez-vous le stress et vos émotions ?",
    ),
    (
        Family,
        "How do you currently experience family relationships?",
        "Wie erleben Sie derzeit Ihre familiären Beziehungen?",
        "Comment vivez-vous actuellement vos relations familiales ?",
    ),
    (
        Friends,
        "Which best describes your friendships right now?",
        "Was beschreibt Ihre Freundschaften derzeit am besten?",
        "Qu'est-ce qui décrit le mieux vos amitiés en ce moment ?",
    ),
    (
        RelationshipsAndLove,
        "How do you feel about intimacy and love in your life?",
        "Wie denken Sie über Intimität und Liebe in Ihrem Leben?",
        "Que ressentez-vous concernant l'intimité et l'amour dans votre vie ?",
    ),
    (
        CommunityAndGiving,
        "How do you connect with your community?",
        "Wie verbinden Sie sich mit Ihrer Gemeinschaft?",
        "Comment vous connectez-vous à votre communauté ?",
    ),
    (
        FunAndRecreation,
        "How often do you allow yourself time for joy and hobbies?",
        "Wie oft gönnen Sie sich Zeit für Freude und Hobbys?",
        "À quelle fréquence vous accordez-vous du temps pour la joie et les loisirs ?",
    ),
    (
        PhysicalEnvironment,
        "How does your environment affect your well-being?",
        "Wie beeinflusst Ihre Umgebung Ihr Wohlbefinden?",
        "Comment votre environnement affecte-t-il votre bien-être ?",
    ),
    (
        PersonalGrowth,
        "How do you approach self-development?",
        "Wie gehen Sie an Ihre Selbstentwicklung heran?",
        "Comment abordez-vous le développement personnel ?",
    ),
    (
        Spirituality,
        "How do you connect with spirituality or higher meaning?",
        "Wie verbinden Sie sich mit Spiritualität oder einem höheren Sinn?",
        "Comment vous connectez-vous à la spiritualité ou à un sens supérieur ?",
    ),
];

const LEVEL_TWO: &[Seed] = &[
    (
        CareerAndVocation,
        "When you visualize your ideal career path in meditation, what comes up most strongly?",
        "Wenn Sie Ihren idealen Karriereweg in der Meditation visualisieren, was kommt am stärksten hoch?",
        "Lorsque vous visualisez votre carrière idéale en méditation, qu'est-ce qui ressort le plus ?",
    ),
    (
        FinancialWellBeing,
        "In yoga, balance poses mirror financial balance. Which best reflects your experience?",
        "Im Yoga spiegeln Balancehaltungen finanzielle Ausgeglichenheit wider. Was trifft am besten auf Sie zu?",
        "En yoga, les poses d'équilibre reflètent l'équilibre financier. Qu'est-ce qui correspond le mieux à votre expérience ?",
    ),
    (
        PhysicalHealth,
        "During body scans or mindful breathing, how do you experience your physical health?",
        "Wie erleben Sie Ihre körperliche Gesundheit während eines Bodyscans oder beim bewussten Atmen?",
        "Pendant les scans corporels ou la respiration consciente, comment ressentez-vous votre santé physique ?",
    ),
    (
        EmotionalWellBeing,
        "When stress arises, how do you typically respond?",
        "Wie reagieren Sie typischerweise, wenn Stress aufkommt?",
        "Lorsque le stress survient, comment réagissez-vous habituellement ?",
    ),
    (
        Family,
        "When you reflect on family in meditation, what emotion arises most often?",
        "Welche Emotion kommt am häufigsten hoch, wenn Sie in der Meditation über Ihre Familie nachdenken?",
        "En réfléchissant à votre famille en méditation, quelle émotion surgit le plus souvent ?",
    ),
    (
        Friends,
        "How do friendships influence your energy (as felt in yoga/meditation)?",
        "Wie beeinflussen Freundschaften Ihre Energie (gefühlt in Yoga/Meditation)?",
        "Comment les amitiés influencent-elles votre énergie (ressentie en yoga/méditation) ?",
    ),
    (
        RelationshipsAndLove,
        "What pattern do you notice in your intimate relationships?",
        "Welches Muster bemerken Sie in Ihren intimen Beziehungen?",
        "Quel schéma remarquez-vous dans vos relations intimes ?",
    ),
    (
        CommunityAndGiving,
        "When practicing Seva (service) or giving, how do you feel?",
        "Wie fühlen Sie sich, wenn Sie Seva (Dienst) praktizieren oder geben?",
        "En pratiquant le Seva (service) ou le don, comment vous sentez-vous ?",
    ),
    (
        FunAndRecreation,
        "When you give yourself space for play, what happens?",
        "Was passiert, wenn Sie sich Raum zum Spielen geben?",
        "Que se passe-t-il lorsque vous vous accordez un espace de jeu ?",
    ),
    (
        PhysicalEnvironment,
        "When practicing mindfulness at home or work, how does your environment feel?",
        "Wie fühlt sich Ihre Umgebung an, wenn Sie zu Hause oder bei der Arbeit Achtsamkeit praktizieren?",
        "En pratiquant la pleine conscience à la maison ou au travail, comment ressentez-vous votre environnement ?",
    ),
    (
        PersonalGrowth,
        "How do you engage with self-development practices (NLP, yoga, meditation)?",
        "Wie beschäftigen Sie sich mit Selbstentwicklungspraktiken (NLP, Yoga, Meditation)?",
        "Comment vous engagez-vous dans les pratiques de développement personnel (PNL, yoga, méditation) ?",
    ),
    (
        Spirituality,
        "When you meditate or pray, how do you sense connection?",
        "Wie spüren Sie Verbindung, wenn Sie meditieren oder beten?",
        "Lorsque vous méditez ou priez, comment ressentez-vous la connexion ?",
    ),
];

const LEVEL_THREE: &[Seed] = &[
    (
        CareerAndVocation,
        "When aligning your career with higher purpose, what resonates most?",
        "Was schwingt am meisten mit, wenn Sie Ihre Karriere mit einem höheren Zweck in Einklang bringen?",
        "En alignant votre carrière avec un but supérieur, qu'est-ce qui résonne le plus ?",
    ),
    (
        FinancialWellBeing,
        "In relation to money and security, what breakthrough feels true for you?",
        "Welcher Durchbruch in Bezug auf Geld und Sicherheit fühlt sich für Sie wahr an?",
        "Par rapport à l'argent et à la sécurité, quelle percée vous semble vraie ?",
    ),
    (
        PhysicalHealth,
        "When connecting body and mind, how do you transform your health experience?",
        "Wie transformieren Sie Ihre Gesundheitserfahrung, wenn Sie Körper und Geist verbinden?",
        "En connectant le corps et l'esprit, comment transformez-vous votre expérience de santé ?",
    ),
    (
        EmotionalWellBeing,
        "How do you consciously transform emotions into strength?",
        "Wie wandeln Sie Emotionen bewusst in Stärke um?",
        "Comment transformez-vous consciemment les émotions en force ?",
    ),
    (
        Family,
        "What shift best describes your family relationships now?",
        "Welcher Wandel beschreibt Ihre familiären Beziehungen jetzt am besten?",
        "Quel changement décrit le mieux vos relations familiales maintenant ?",
    ),
    (
        Friends,
        "How are your friendships evolving at this transformation stage?",
        "Wie entwickeln sich Ihre Freundschaften in dieser Transformationsphase?",
        "Comment vos amitiés évoluent-elles à ce stade de transformation ?",
    ),
    (
        RelationshipsAndLove,
        "What transformation do you notice in love and intimacy?",
        "Welche Transformation bemerken Sie in Liebe und Intimität?",
        "Quelle transformation remarquez-vous dans l'amour et l'intimité ?",
    ),
    (
        CommunityAndGiving,
        "How do you consciously embody service?",
        "Wie verkörpern Sie bewusst Dienst am Nächsten?",
        "Comment incarnez-vous consciemment le service ?",
    ),
    (
        FunAndRecreation,
        "What transformation have you experienced in joy and play?",
        "Welche Transformation haben Sie in Freude und Spiel erlebt?",
        "Quelle transformation avez-vous vécue dans la joie et le jeu ?",
    ),
    (
        PhysicalEnvironment,
        "How do you transform your environment into a mindful space?",
        "Wie verwandeln Sie Ihre Umgebung in einen achtsamen Raum?",
        "Comment transformez-vous votre environnement en un espace conscient ?",
    ),
    (
        PersonalGrowth,
        "What shift best reflects your growth at this stage?",
        "Welcher Wandel spiegelt Ihr Wachstum in diesem Stadium am besten wider?",
        "Quel changement reflète le mieux votre croissance à ce stade ?",
    ),
    (
        Spirituality,
        "What transformation describes your spiritual connection?",
        "Welche Transformation beschreibt Ihre spirituelle Verbindung?",
        "Quelle transformation décrit votre connexion spirituelle ?",
    ),
];

use std::collections::BTreeMap;

use crate::model::{LevelId, ProficiencyGroup, QuestionTemplate};

use super::PoolCatalog;

/// (stem, options, correct option index)
type Seed = (&'static str, [&'static str; 4], usize);

const PRIMARY_SCHOOL: &[Seed] = &[
    ("Which one is a colour?", ["red", "dog", "run", "book"], 0),
    ("I ___ a student.", ["is", "am", "are", "be"], 1),
    ("Choose the animal that can fly.", ["fish", "cat", "bird", "cow"], 2),
    ("How many legs does a dog have?", ["two", "six", "eight", "four"], 3),
    ("What do you say in the morning?", ["Good night", "Good morning", "Goodbye", "Sorry"], 1),
];

const JUNIOR_HIGH: &[Seed] = &[
    ("She ___ to school every day.", ["go", "going", "goes", "gone"], 2),
    ("Yesterday we ___ a film.", ["watched", "watch", "watches", "watching"], 0),
    ("Which word means the opposite of \"cheap\"?", ["free", "expensive", "small", "easy"], 1),
    ("There isn't ___ milk in the fridge.", ["some", "many", "a", "any"], 3),
    ("He is ___ than his brother.", ["tall", "tallest", "taller", "more tall"], 2),
];

const SENIOR_HIGH: &[Seed] = &[
    ("If I ___ you, I would apologise.", ["am", "were", "be", "was being"], 1),
    ("The bridge ___ in 1990.", ["built", "was built", "has built", "is building"], 1),
    ("Choose the synonym of \"reluctant\".", ["unwilling", "eager", "honest", "tired"], 0),
    ("By the time we arrived, the train ___.", ["leaves", "has left", "had left", "was leaving"], 2),
    ("She apologised ___ being late.", ["to", "for", "about", "of"], 1),
];

const COLLEGE: &[Seed] = &[
    ("The new policy will ___ thousands of workers.", ["affect", "effect", "infect", "defect"], 0),
    ("Choose the word closest to \"meticulous\".", ["careless", "careful", "hasty", "generous"], 1),
    ("Not until midnight ___ home.", ["he came", "did he come", "he did come", "came he"], 1),
    ("The data ___ that sales are falling.", ["suggest", "suggests", "suggesting", "suggested to"], 0),
    ("His argument was ___ by the evidence.", ["undermined", "undergone", "underlined", "undertaken"], 0),
];

const POSTGRADUATE: &[Seed] = &[
    ("The committee's findings were ___: no two members agreed.", ["unanimous", "inconclusive", "decisive", "conclusive"], 1),
    ("Choose the word closest to \"ubiquitous\".", ["rare", "hidden", "everywhere", "ancient"], 2),
    ("Had the funding been approved, the project ___ last year.", ["would finish", "would have finished", "will have finished", "finished"], 1),
    ("The author's tone is best described as ___ when she mocks the critics.", ["sardonic", "reverent", "neutral", "nostalgic"], 0),
    ("\"Mitigate\" most nearly means ___.", ["worsen", "lessen", "ignore", "predict"], 1),
];

const STUDY_ABROAD: &[Seed] = &[
    ("The lecture ___ on climate policy rather than climate science.", ["centred", "concentrated it", "focused", "pointed"], 2),
    ("Choose the word closest to \"ephemeral\".", ["lasting", "fleeting", "solid", "ordinary"], 1),
    ("The results were ___ with earlier studies.", ["consistent", "constant", "consisting", "insistent"], 0),
    ("Scarcely had she sat down ___ the phone rang.", ["than", "when", "then", "that"], 1),
    ("\"Corroborate\" most nearly means ___.", ["contradict", "invent", "confirm", "delay"], 2),
];

const CEFR: &[Seed] = &[
    ("Where ___ you from?", ["is", "are", "do", "be"], 1),
    ("I have lived here ___ 2015.", ["for", "since", "from", "during"], 1),
    ("You ___ smoke here; it's forbidden.", ["mustn't", "don't have to", "needn't", "shouldn't to"], 0),
    ("I wish I ___ more time to travel.", ["have", "had", "will have", "having"], 1),
    ("Choose the word closest to \"ambiguous\".", ["unclear", "obvious", "ambitious", "brief"], 0),
];

const CAMBRIDGE: &[Seed] = &[
    ("Can you ___ me the salt, please?", ["pass", "give to", "take", "bring at"], 0),
    ("I'm looking forward ___ you.", ["to see", "seeing", "to seeing", "see"], 2),
    ("He denied ___ the window.", ["to break", "breaking", "break", "broke"], 1),
    ("The match was called ___ because of the rain.", ["off", "out", "up", "down"], 0),
    ("Rarely ___ such a fine performance.", ["I have seen", "have I seen", "I saw", "did I saw"], 1),
];

const BUSINESS: &[Seed] = &[
    ("Please find the report ___ to this email.", ["attached", "attaching", "attach", "attachment"], 0),
    ("We need to ___ costs by ten per cent.", ["cut", "cutting", "make", "lose"], 0),
    ("The meeting has been ___ until Friday.", ["put off", "put out", "put up", "put down"], 0),
    ("Our quarterly ___ exceeded expectations.", ["turnover", "overturn", "turnout", "overtime"], 0),
    ("Choose the best reply: \"Could you send the invoice?\"", ["Certainly, I'll do it today.", "Yes, I could.", "No problem of it.", "I am sending it yesterday."], 0),
];

const GENERIC: &[Seed] = &[
    ("Choose the correct sentence.", ["He don't like tea.", "He doesn't like tea.", "He not like tea.", "He isn't like tea."], 1),
    ("What is the plural of \"child\"?", ["childs", "childes", "children", "childrens"], 2),
    ("They ___ football now.", ["are playing", "plays", "is playing", "play now"], 0),
    ("Choose the opposite of \"early\".", ["soon", "late", "fast", "first"], 1),
    ("We went to the beach ___ it was sunny.", ["but", "so", "because", "although"], 2),
];

fn templates(seeds: &[Seed], level: LevelId) -> Vec<QuestionTemplate> {
    seeds
        .iter()
        .map(|(stem, options, correct)| QuestionTemplate::from_parts(stem, options, *correct, level))
        .collect()
}

pub(super) fn catalog() -> PoolCatalog {
    let groups = BTreeMap::from([
        (ProficiencyGroup::PrimarySchool, templates(PRIMARY_SCHOOL, LevelId::Primary3)),
        (ProficiencyGroup::JuniorHigh, templates(JUNIOR_HIGH, LevelId::Junior1)),
        (ProficiencyGroup::SeniorHigh, templates(SENIOR_HIGH, LevelId::Senior1)),
        (ProficiencyGroup::College, templates(COLLEGE, LevelId::Cet4)),
        (ProficiencyGroup::Postgraduate, templates(POSTGRADUATE, LevelId::Postgraduate)),
        (ProficiencyGroup::StudyAbroad, templates(STUDY_ABROAD, LevelId::Ielts)),
        (ProficiencyGroup::Cefr, templates(CEFR, LevelId::CefrB1)),
        (ProficiencyGroup::Cambridge, templates(CAMBRIDGE, LevelId::Pet)),
        (ProficiencyGroup::Business, templates(BUSINESS, LevelId::BecVantage)),
    ]);
    PoolCatalog::new(groups, templates(GENERIC, LevelId::CefrA2))
}

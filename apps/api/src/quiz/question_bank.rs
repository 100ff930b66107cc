//! Static question bank and profession profiles.
//!
//! Option values are typed: general options carry an `Archetype`, profession
//! options carry a numeric score, so a mis-tagged option cannot be written.

use crate::models::quiz::{
    Archetype, DetailedProfile, GeneralQuestion, Profession, ProfessionQuestion, QuestionOption,
};

/// Highest score a single profession option can award.
pub const MAX_OPTION_SCORE: u8 = 10;

const fn general(
    id: u32,
    text: &'static str,
    options: &'static [QuestionOption<Archetype>],
) -> GeneralQuestion {
    GeneralQuestion { id, text, options }
}

macro_rules! choices {
    ($creative:expr, $logical:expr, $social:expr, $practical:expr $(,)?) => {
        &[
            QuestionOption { label: $creative, value: Archetype::Creative },
            QuestionOption { label: $logical, value: Archetype::Logical },
            QuestionOption { label: $social, value: Archetype::Social },
            QuestionOption { label: $practical, value: Archetype::Practical },
        ]
    };
}

static GENERAL_QUESTIONS: [GeneralQuestion; 10] = [
    general(
        1,
        "When facing a new problem, what is your first instinct?",
        choices!(
            "Brainstorm wild, out-of-the-box ideas.",
            "Analyze the facts and look for patterns.",
            "Ask others for their input and perspective.",
            "Look for the quickest, most efficient practical fix.",
        ),
    ),
    general(
        2,
        "In a group project, you naturally take on the role of:",
        choices!(
            "The visionary with the big ideas.",
            "The planner who organizes the data.",
            "The presenter or negotiator.",
            "The builder who makes the prototype.",
        ),
    ),
    general(
        3,
        "Which activity sounds most appealing for a weekend?",
        choices!(
            "Painting, writing, or designing.",
            "Solving puzzles or coding.",
            "Volunteering or hanging out with friends.",
            "Fixing something or building furniture.",
        ),
    ),
    general(
        4,
        "How do you handle conflict?",
        choices!(
            "I look for a novel solution that pleases everyone.",
            "I use logic to prove which side is correct.",
            "I listen and mediate between parties.",
            "I focus on moving forward and getting back to work.",
        ),
    ),
    general(
        5,
        "What do you value most in a leader?",
        choices!(
            "Vision and inspiration.",
            "Intelligence and strategy.",
            "Empathy and communication.",
            "Competence and results.",
        ),
    ),
    general(
        6,
        "When learning something new, you prefer:",
        choices!(
            "Visual aids and open-ended exploration.",
            "Structured logic and clear rules.",
            "Group discussions and role-play.",
            "Hands-on practice and trial-and-error.",
        ),
    ),
    general(
        7,
        "Your friends describe you as:",
        choices!("Imaginative.", "Smart.", "Friendly.", "Reliable."),
    ),
    general(
        8,
        "Which tool would you rather master?",
        choices!(
            "Adobe Photoshop or a paintbrush.",
            "Excel or Python.",
            "Public speaking or social media.",
            "A 3D printer or power tools.",
        ),
    ),
    general(
        9,
        "A successful career to you means:",
        choices!(
            "Creating something that didn't exist before.",
            "Solving complex, difficult problems.",
            "Helping people and making connections.",
            "Building tangible, useful things.",
        ),
    ),
    general(
        10,
        "If you had to plan an event, you would focus on:",
        choices!(
            "The theme and decorations.",
            "The budget and schedule.",
            "The guest list and entertainment.",
            "The logistics and setup.",
        ),
    ),
];

/// Likert options shared by every profession statement.
const LIKERT: [QuestionOption<u8>; 4] = [
    QuestionOption { label: "Strongly Agree", value: MAX_OPTION_SCORE },
    QuestionOption { label: "Agree", value: 7 },
    QuestionOption { label: "Neutral", value: 5 },
    QuestionOption { label: "Disagree", value: 2 },
];

const fn statement(id: u32, text: &'static str) -> ProfessionQuestion {
    ProfessionQuestion { id, text, options: &LIKERT }
}

static LAW_QUESTIONS: [ProfessionQuestion; 10] = [
    statement(1, "I enjoy reading complex texts and identifying inconsistencies in arguments."),
    statement(2, "I can detach my emotions to view a situation objectively and fairly."),
    statement(3, "Winning a debate is exciting to me, even if I have to argue a side I don't personally agree with."),
    statement(4, "I am interested in how government policies and rules affect society."),
    statement(5, "I pay close attention to the specific wording of sentences to ensure accuracy."),
    statement(6, "I am comfortable speaking in front of an audience and defending my viewpoint."),
    statement(7, "When solving a problem, I prefer to look up rules, precedents, or guidelines."),
    statement(8, "I have a strong sense of justice and want to ensure people are treated fairly."),
    statement(9, "I can remain calm and focused during a heated disagreement."),
    statement(10, "I enjoy researching historical facts to back up my current opinions."),
];

static PSYCHOLOGY_QUESTIONS: [ProfessionQuestion; 10] = [
    statement(1, "I often find myself analyzing why people act the way they do."),
    statement(2, "People naturally open up to me about their personal problems."),
    statement(3, "I am more interested in listening to someone's story than telling my own."),
    statement(4, "I can sense the 'vibe' or emotional state of a room as soon as I walk in."),
    statement(5, "I am patient with people who are struggling or indecisive."),
    statement(6, "I am curious about how the brain functions and processes emotions."),
    statement(7, "I believe that understanding a person's childhood is key to understanding who they are now."),
    statement(8, "I can keep confidential information to myself without the urge to gossip."),
    statement(9, "I want a career where my primary goal is helping others improve their mental well-being."),
    statement(10, "I notice subtle changes in people's body language and tone of voice."),
];

static DESIGNING_QUESTIONS: [ProfessionQuestion; 10] = [
    statement(1, "I often critique the layout of menus, apps, or posters I see in daily life."),
    statement(2, "I can easily visualize how a room would look if the furniture were rearranged."),
    statement(3, "I enjoy the process of making things that are both useful and beautiful."),
    statement(4, "I express my ideas better through sketching or drawing than through writing."),
    statement(5, "I love experimenting with color combinations, textures, and fonts."),
    statement(6, "I am comfortable with the idea that my work will be judged subjectively by others."),
    statement(7, "I notice when a product is hard to use and immediately think of ways to fix it."),
    statement(8, "I keep up with trends in fashion, technology, or art."),
    statement(9, "I believe that good design can solve real-world problems."),
    statement(10, "I am willing to iterate on a project many times to get the details perfect."),
];

static LAW_PROFILE: DetailedProfile = DetailedProfile {
    title: "Law & Legal Studies",
    summary: "A career dedicated to understanding rules, solving disputes, and fighting for justice.",
    description: "Lawyers and legal professionals spend their days reading cases, drafting documents, and arguing points to protect their clients. It involves a lot of reading, logical thinking, and communicating complex ideas clearly. You act as a shield and a voice for those who need help navigating the system.",
    key_skills: &[
        "Critical Thinking & Logic",
        "Public Speaking",
        "Research and Analysis",
        "Persuasive Writing",
        "Negotiation",
        "Attention to Detail",
        "Patience and Resilience",
    ],
    personality_fit: &[
        "People who love debating and proving a point.",
        "Detail-oriented thinkers who don't miss small errors.",
        "Individuals who value fairness and justice.",
        "Those who can stay calm under pressure.",
    ],
    pathway: "Subjects in Class 11-12: Humanities or Commerce (Legal Studies is a bonus).\n\nDegrees needed: Integrated B.A. LL.B. (5 years) after 12th OR LL.B. (3 years) after graduation.\n\nImportant Exams: CLAT (Common Law Admission Test), AILET, LSAT-India.\n\nInternships: Essential to work with district courts, senior lawyers, or law firms during college.",
    salary: "Starting salary: ₹5,00,000 per year\nMid-level salary: ₹12,00,000 per year\nExperienced salary: ₹25,00,000+ per year",
    growth: &[
        "Specializing in Corporate Law (High paying)",
        "Joining the Judiciary (Becoming a Judge)",
        "Legal Journalism or Policy Analysis",
        "Starting your own Law Firm",
        "International Human Rights Law",
    ],
    fit_reason: "This career requires a blend of logic and language. If you enjoy analyzing facts and building strong arguments, this structure will feel natural to you.",
};

static PSYCHOLOGY_PROFILE: DetailedProfile = DetailedProfile {
    title: "Psychology & Mental Health",
    summary: "Understanding the human mind to help people lead better, healthier lives.",
    description: "Psychologists study how people think, feel, and behave. They work in clinics, schools, or companies to support mental well-being. It involves a lot of listening, observing, and empathy to help others overcome challenges. It is not just about giving advice; it is about understanding the root cause of behavior.",
    key_skills: &[
        "Active Listening",
        "Empathy & Compassion",
        "Analytical Thinking",
        "Verbal Communication",
        "Patience",
        "Ethics & Confidentiality",
        "Observation",
    ],
    personality_fit: &[
        "Good listeners who people naturally trust.",
        "Curious minds who ask 'why' people act that way.",
        "Empathetic individuals who genuinely want to help.",
        "People who are open-minded and non-judgmental.",
    ],
    pathway: "Subjects in Class 11-12: Psychology (Humanities or Science stream).\n\nDegrees needed: B.A./B.Sc. in Psychology (3-4 years) -> M.A./M.Sc. in Psychology (2 years).\n\nImportant Exams: CUET for top universities.\n\nLicensing: M.Phil (RCI approved) is required to be a Clinical Psychologist.",
    salary: "Starting salary: ₹3,50,000 per year\nMid-level salary: ₹8,00,000 per year\nExperienced salary: ₹15,00,000+ per year",
    growth: &[
        "Clinical Psychologist (Private Practice)",
        "Corporate HR or Organizational Psychologist",
        "Sports Psychologist for athletes",
        "School Counselor or Child Psychologist",
        "Researcher or Professor",
    ],
    fit_reason: "Your ability to connect with people and understand emotions makes this a strong fit. It requires patience and a desire to make a positive impact on individual lives.",
};

static DESIGNING_PROFILE: DetailedProfile = DetailedProfile {
    title: "Design & Creative Arts",
    summary: "Solving problems visually to make the world functional and beautiful.",
    description: "Designers create everything from apps and logos to clothes and interiors. They combine art with purpose to improve how people use and experience products. It is a dynamic field where creativity meets technology. You aren't just making art; you are designing solutions.",
    key_skills: &[
        "Visual Creativity",
        "Design Software (Adobe Suite, Figma)",
        "User Empathy",
        "Problem Solving",
        "Sketching & Drawing",
        "Color Theory",
        "Communication",
    ],
    personality_fit: &[
        "Creative thinkers who doodle or imagine new things.",
        "Visual learners who appreciate aesthetics.",
        "People who like to experiment and iterate.",
        "Those who can accept feedback and improve.",
    ],
    pathway: "Subjects in Class 11-12: Any stream (Art or Design electives help).\n\nDegrees needed: B.Des (Bachelor of Design) or B.F.A. (Bachelor of Fine Arts).\n\nImportant Exams: NID-DAT, UCEED (for IITs), NIFT (for Fashion).\n\nExperience: Building a strong portfolio is more important than grades.",
    salary: "Starting salary: ₹4,50,000 per year\nMid-level salary: ₹10,00,000 per year\nExperienced salary: ₹20,00,000+ per year",
    growth: &[
        "User Experience (UX) Lead",
        "Creative Director in an agency",
        "Freelance Consultant or Studio Owner",
        "Game Designer or Animator",
        "Product Manager",
    ],
    fit_reason: "This is ideal for those who see the world differently. If you want to bring your imaginative ideas to life and create things that people use every day, this is for you.",
};

pub fn general_questions() -> &'static [GeneralQuestion] {
    &GENERAL_QUESTIONS
}

pub fn profession_questions(profession: Profession) -> &'static [ProfessionQuestion] {
    match profession {
        Profession::Law => &LAW_QUESTIONS,
        Profession::Psychology => &PSYCHOLOGY_QUESTIONS,
        Profession::Designing => &DESIGNING_QUESTIONS,
    }
}

pub fn profile(profession: Profession) -> &'static DetailedProfile {
    match profession {
        Profession::Law => &LAW_PROFILE,
        Profession::Psychology => &PSYCHOLOGY_PROFILE,
        Profession::Designing => &DESIGNING_PROFILE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_questions_offer_every_archetype_once() {
        for q in general_questions() {
            assert_eq!(q.options.len(), 4, "question {}", q.id);
            for archetype in Archetype::ALL {
                assert_eq!(
                    q.options.iter().filter(|o| o.value == archetype).count(),
                    1,
                    "question {} / {archetype:?}",
                    q.id
                );
            }
        }
    }

    #[test]
    fn test_profession_max_total_is_one_hundred() {
        for profession in Profession::ALL {
            let questions = profession_questions(profession);
            let max_total: u32 = questions
                .iter()
                .map(|q| q.options.iter().map(|o| u32::from(o.value)).max().unwrap_or(0))
                .sum();
            assert_eq!(max_total, 100, "{profession}");
        }
    }

    #[test]
    fn test_question_ids_are_sequential() {
        for (i, q) in general_questions().iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
        }
        for profession in Profession::ALL {
            for (i, q) in profession_questions(profession).iter().enumerate() {
                assert_eq!(q.id as usize, i + 1);
            }
        }
    }

    #[test]
    fn test_accepts_only_listed_scores() {
        let q = &profession_questions(Profession::Law)[0];
        assert!(q.accepts(7));
        assert!(!q.accepts(3));
    }

    #[test]
    fn test_every_profession_has_a_profile() {
        for profession in Profession::ALL {
            assert!(!profile(profession).title.is_empty());
        }
    }
}

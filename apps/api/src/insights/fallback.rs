//! Static career content used whenever the gateway cannot deliver.
//!
//! Every profession has a complete, well-formed record: three jobs and five
//! simulated tasks. The first job's fit reason names the student's archetype.

use crate::models::insights::{CareerInsights, JobSuggestion};
use crate::models::quiz::{Archetype, Profession};

struct FallbackJob {
    title: &'static str,
    summary: &'static str,
    description: &'static str,
    key_skills: &'static [&'static str],
    personality_fit: &'static [&'static str],
    pathway: &'static str,
    salary: &'static str,
    growth: &'static [&'static str],
    fit_reason: &'static str,
}

struct FallbackRecord {
    jobs: [FallbackJob; 3],
    /// Fit reason of the first job; `{archetype}` is replaced per student.
    lead_fit_template: &'static str,
    tasks: [&'static str; 5],
}

/// Fallback insights for `profession`, personalised with `archetype`.
pub fn fallback_insights(profession: Profession, archetype: Archetype) -> CareerInsights {
    let record = match profession {
        Profession::Law => &LAW,
        Profession::Psychology => &PSYCHOLOGY,
        Profession::Designing => &DESIGNING,
    };

    let lead_fit = record
        .lead_fit_template
        .replace("{archetype}", archetype.label());

    let jobs = record
        .jobs
        .iter()
        .enumerate()
        .map(|(i, job)| JobSuggestion {
            title: job.title.to_string(),
            summary: job.summary.to_string(),
            description: job.description.to_string(),
            key_skills: owned(job.key_skills),
            personality_fit: owned(job.personality_fit),
            pathway: job.pathway.to_string(),
            salary: job.salary.to_string(),
            growth: owned(job.growth),
            fit_reason: if i == 0 {
                lead_fit.clone()
            } else {
                job.fit_reason.to_string()
            },
        })
        .collect();

    CareerInsights {
        jobs,
        simulated_tasks: owned(&record.tasks),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Law
// ────────────────────────────────────────────────────────────────────────────

static LAW: FallbackRecord = FallbackRecord {
    jobs: [
        FallbackJob {
            title: "Corporate Lawyer",
            summary: "A lawyer who helps companies handle legal rules and business deals.",
            description: "Corporate lawyers work in offices advising businesses on their legal rights. They read contracts, help with mergers (when companies join), and make sure the company follows government laws.",
            key_skills: &["Negotiation", "Contract Drafting", "Attention to Detail", "Commercial Awareness", "Teamwork"],
            personality_fit: &["People who love strategy", "Those who can work under pressure", "Logical thinkers"],
            pathway: "Class 11-12: Any stream (Commerce/Humanities preferred)\nDegree: 5-year LLB (after 12th) or 3-year LLB (after graduation)\nExams: CLAT, AILET\nInternships: Law firms",
            salary: "Starting salary: ₹5,00,000 per year\nMid-level salary: ₹12,00,000 per year\nExperienced salary: ₹25,00,000+ per year",
            growth: &["Senior Associate", "Partner in a Law Firm", "General Counsel", "Start your own firm"],
            fit_reason: "",
        },
        FallbackJob {
            title: "Legal Journalist",
            summary: "A writer who reports on court cases and legal news for the public.",
            description: "Legal journalists attend court hearings, read judgments, and write news stories. They explain complex legal laws in simple language so ordinary people can understand them.",
            key_skills: &["Writing", "Research", "Communication", "Curiosity", "Critical Thinking"],
            personality_fit: &["Storytellers", "People who love current affairs", "Those who question everything"],
            pathway: "Class 11-12: Humanities\nDegree: Law degree (LLB) + Journalism diploma or Mass Comm\nInternships: News channels, Legal blogs",
            salary: "Starting salary: ₹3,50,000 per year\nMid-level salary: ₹8,00,000 per year\nExperienced salary: ₹15,00,000 per year",
            growth: &["Senior Editor", "Legal Correspondent", "Author", "Policy Analyst"],
            fit_reason: "Combines your legal interest with creativity.",
        },
        FallbackJob {
            title: "Judicial Magistrate",
            summary: "A judge who hears cases and decides outcomes in lower courts.",
            description: "Magistrates listen to arguments from lawyers, look at evidence, and decide who is right or wrong. They play a huge role in the justice system.",
            key_skills: &["Impartiality", "Listening", "Patience", "Decision Making", "Integrity"],
            personality_fit: &["People with a strong moral compass", "Good listeners", "Patient individuals"],
            pathway: "Degree: LLB\nExam: Judicial Services Examination (PCS-J) conducted by states\nExperience: Not always required for lower judiciary",
            salary: "Starting salary: ₹8,00,000 per year\nMid-level salary: ₹15,00,000 per year\nExperienced salary: ₹24,00,000+ per year (Government scale)",
            growth: &["District Judge", "High Court Judge", "Supreme Court Judge"],
            fit_reason: "Perfect for someone who values structure and fairness.",
        },
    ],
    lead_fit_template: "As a {archetype}, your analytical skills fit well with the structured world of corporate law.",
    tasks: [
        "Read a 5-page document and find three contradictions in the statements.",
        "Write a convincing 2-minute opening statement for a debate on a topic you disagree with.",
        "Summarize a complex news story about a new law into three simple bullet points.",
        "Role-play a negotiation where you must reach a compromise without giving up your main demand.",
        "Identify the legal issue in a fictional neighbor dispute scenario.",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Psychology
// ────────────────────────────────────────────────────────────────────────────

static PSYCHOLOGY: FallbackRecord = FallbackRecord {
    jobs: [
        FallbackJob {
            title: "Clinical Psychologist",
            summary: "A mental health expert who diagnoses and treats emotional problems.",
            description: "They work in hospitals or clinics, talking to patients to help them understand their feelings. They use therapy to treat anxiety, depression, and other conditions.",
            key_skills: &["Empathy", "Active Listening", "Patience", "Analysis", "Ethics"],
            personality_fit: &["Good listeners", "Empathetic souls", "People who want to help others"],
            pathway: "Class 11-12: Psychology/Science\nDegree: BA/B.Sc Psychology -> MA/M.Sc Psychology\nLicence: M.Phil in Clinical Psychology (RCI approved)",
            salary: "Starting salary: ₹4,00,000 per year\nMid-level salary: ₹10,00,000 per year\nExperienced salary: ₹20,00,000+ per year",
            growth: &["Private Practice", "Head of Department", "Consultant", "Researcher"],
            fit_reason: "",
        },
        FallbackJob {
            title: "Industrial-Organizational Psychologist",
            summary: "An expert who improves work life and productivity in companies.",
            description: "They apply psychology to the workplace. They help companies hire the right people, train employees, and ensure everyone is motivated and happy at work.",
            key_skills: &["Data Analysis", "Communication", "Problem Solving", "HR Knowledge"],
            personality_fit: &["Analytical thinkers", "Business-minded people", "Organizers"],
            pathway: "Degree: BA Psychology -> MA in I/O Psychology\nInternships: HR departments, Consulting firms",
            salary: "Starting salary: ₹6,00,000 per year\nMid-level salary: ₹15,00,000 per year\nExperienced salary: ₹30,00,000+ per year",
            growth: &["HR Director", "Management Consultant", "Talent Acquisition Head"],
            fit_reason: "Applies your understanding of people to systems.",
        },
        FallbackJob {
            title: "Sports Psychologist",
            summary: "A coach for the mind who helps athletes perform better.",
            description: "They work with players to build confidence, focus, and handle pressure. They are crucial for athletes to win games mentally before they win physically.",
            key_skills: &["Motivation", "Observation", "Stress Management", "Communication"],
            personality_fit: &["Sports lovers", "Motivators", "Energetic individuals"],
            pathway: "Degree: BA Psychology -> MA in Sports Psychology\nExperience: Working with sports academies",
            salary: "Starting salary: ₹5,00,000 per year\nMid-level salary: ₹12,00,000 per year\nExperienced salary: ₹25,00,000+ per year",
            growth: &["Team Psychologist", "Performance Coach", "Consultant for Leagues"],
            fit_reason: "Great for action-oriented helpers.",
        },
    ],
    lead_fit_template: "Your {archetype} nature helps you connect deeply with others.",
    tasks: [
        "Listen to a friend describe a problem for 5 minutes without interrupting or giving advice, just understanding.",
        "Observe a group of people in a public place and write down three non-verbal cues you noticed.",
        "Create a plan to help a student who is stressed about exams manage their time better.",
        "Write a journal entry from the perspective of someone completely different from you.",
        "Draft a list of 3 questions to ask someone to understand their career motivation.",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Designing
// ────────────────────────────────────────────────────────────────────────────

static DESIGNING: FallbackRecord = FallbackRecord {
    jobs: [
        FallbackJob {
            title: "UI/UX Designer",
            summary: "A designer who makes apps and websites easy and fun to use.",
            description: "UX designers research how people use apps. UI designers draw the buttons and screens. Together, they make sure your favorite apps look good and work smoothly.",
            key_skills: &["Creativity", "Empathy (User Research)", "Visual Design", "Prototyping tools (Figma)", "Logic"],
            personality_fit: &["Tech enthusiasts", "Problem solvers", "Visual thinkers"],
            pathway: "Degree: B.Des (Interaction Design) or B.Tech (CS) + Certification\nExams: UCEED, NID DAT\nPortfolio: Crucial",
            salary: "Starting salary: ₹6,00,000 per year\nMid-level salary: ₹15,00,000 per year\nExperienced salary: ₹30,00,000+ per year",
            growth: &["Product Designer", "Lead Designer", "Product Manager"],
            fit_reason: "",
        },
        FallbackJob {
            title: "Sustainable Fashion Designer",
            summary: "A creator who designs eco-friendly clothes.",
            description: "They design stylish clothes but focus on using natural materials and fair labor. They try to solve the pollution problem in the fashion industry.",
            key_skills: &["Sketching", "Textile Knowledge", "Creativity", "Sustainability awareness"],
            personality_fit: &["Nature lovers", "Artists", "Innovators"],
            pathway: "Degree: B.Des (Fashion Design)\nExams: NIFT, NID DAT\nFocus: Specialization in sustainable textiles",
            salary: "Starting salary: ₹4,00,000 per year\nMid-level salary: ₹10,00,000 per year\nExperienced salary: ₹20,00,000+ per year",
            growth: &["Brand Owner", "Creative Director", "Sustainability Consultant"],
            fit_reason: "Combines creativity with a cause.",
        },
        FallbackJob {
            title: "Game Artist/Designer",
            summary: "A creative pro who designs the look and rules of video games.",
            description: "Game designers invent the rules and story. Game artists draw the characters and worlds. They work together to create immersive virtual experiences.",
            key_skills: &["Digital Art", "Storytelling", "3D Modeling", "Imagination"],
            personality_fit: &["Gamers", "Daydreamers", "Storytellers"],
            pathway: "Degree: B.Des (Game Design) or B.Sc Animation\nPortfolio: Concepts and drawings",
            salary: "Starting salary: ₹4,50,000 per year\nMid-level salary: ₹12,00,000 per year\nExperienced salary: ₹25,00,000+ per year",
            growth: &["Lead Level Designer", "Art Director", "Game Producer"],
            fit_reason: "The ultimate playground for a creative mind.",
        },
    ],
    lead_fit_template: "Perfect for a {archetype} who loves building digital things.",
    tasks: [
        "Sketch three different layout ideas for a poster advertising a school event.",
        "Look at a popular app and list three things that make it frustrating to use.",
        "Pick a household object and redesign it to be easier for an elderly person to hold.",
        "Create a color palette (5 colors) that represents the feeling of 'calmness' or 'energy'.",
        "Draw a storyboard of 3 frames showing a character opening a magic box.",
    ],
};

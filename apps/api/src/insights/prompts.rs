// Prompt templates for the insights gateway.
// Placeholders: {archetype}, {profession}, {match_score}, {qa_pairs}.

pub const INSIGHTS_PROMPT: &str = r#"The user is a student exploring careers.

Their General Skill Archetype is: {archetype}.
Their Interest Profession is: {profession}.
Their Aptitude Match Score for that profession is: {match_score}%.

Generate two things:
1. A list of exactly 3 specific, modern, distinct job profiles within {profession}.
2. A list of 4-6 "workspace simulated tasks" for {profession}.

PART 1: JOB PROFILES
For each job profile return:
- title: job title
- summary: one sentence
- description: short paragraph, simple English
- keySkills: 5-7 items
- personalityFit: 3-5 items
- pathway: clear steps (subjects, degrees, exams, internships), one per line
- salary: average salary in India, one line each for starting, mid-level and experienced
- growth: 4-6 items
- fitReason: friendly paragraph linking the role to a {archetype}

PART 2: WORKSPACE SIMULATED TASKS
- Each task simulates real work done in that career.
- Short, scenario-based activities a beginner can imagine doing.
- Not a quiz, no advanced knowledge required, student-friendly English.
- No explanations, introductions or extra sections; strings only.

Return a JSON object of this exact shape:
{
  "jobs": [
    {
      "title": "string",
      "summary": "string",
      "description": "string",
      "keySkills": ["string"],
      "personalityFit": ["string"],
      "pathway": "string",
      "salary": "string",
      "growth": ["string"],
      "fitReason": "string"
    }
  ],
  "simulatedTasks": ["string"]
}"#;

pub const TASK_FEEDBACK_PROMPT: &str = r#"A student is simulating tasks for the profession: {profession}.
They have answered the following tasks.

Give ONE line of constructive, encouraging feedback for each answer.
If an answer is very short or generic, encourage them to go deeper.
If an answer is good, praise a specific aspect.
Keep the tone professional yet friendly, like a mentor.

Tasks and answers:
{qa_pairs}

Return a JSON object of this exact shape, with feedbacks in the same order as the input:
{
  "feedbacks": ["string"]
}"#;

use crate::parsing::blocks::kinds::{CodeFence, Marker};

use super::error::GenerationError;

/// Topic and course a lesson is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    course_title: String,
}

impl GenerationRequest {
    /// Builds a request; both fields must be non-blank.
    pub fn new(
        topic: impl Into<String>,
        course_title: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let topic = topic.into().trim().to_string();
        let course_title = course_title.into().trim().to_string();
        if topic.is_empty() {
            return Err(GenerationError::InvalidRequest("topic is empty".into()));
        }
        if course_title.is_empty() {
            return Err(GenerationError::InvalidRequest(
                "course title is empty".into(),
            ));
        }
        Ok(Self {
            topic,
            course_title,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn course_title(&self) -> &str {
        &self.course_title
    }
}

/// Instruction text asking the model for a lesson in the marker grammar.
///
/// `session_id` is embedded so repeated requests for the same topic differ.
pub fn build_prompt(request: &GenerationRequest, session_id: &str) -> String {
    let topic = request.topic();
    let course = request.course_title();
    let fence = CodeFence::DELIMITER;
    let lang = CodeFence::DEFAULT_LANGUAGE;
    let markers = Marker::ALL
        .iter()
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\
Write an original educational lesson about \"{topic}\" for the course \"{course}\".
Vary your explanations and examples; do not reuse stock phrasing.

Lay the lesson out with exactly these line markers:

{title} [a specific, engaging title about {topic}, not just the topic name]

{intro}
Three or four sentences on what {topic} is and why it matters in {course}.

{section} Understanding the Core Concepts
{paragraph}
A detailed explanation of the fundamentals. Wrap important terms in **double asterisks**.

{points}
- **Key Point 1**: first important concept
- **Key Point 2**: second important concept
- **Key Point 3**: third important concept

{section} Practical Implementation
{paragraph}
How {topic} is applied in practice, with **highlighted** terms.

{code}
{fence}{lang}
// A short, runnable example demonstrating {topic}
{fence}

{section} Best Practices
{points}
- **Practice 1**: first tip
- **Practice 2**: second tip

{section} Common Pitfalls to Avoid
{points}
- **Mistake 1**: a common error and how to avoid it

{summary}
Two or three sentences summarising the key takeaways about {topic}.

Rules:
1. Use **double asterisks** around important keywords.
2. Code examples must be practical and relevant to {topic}.
3. Bullet points start with a dash.
4. Use only these markers, each at the start of its own line: {markers}

Session: {session_id}
",
        title = Marker::TITLE,
        intro = Marker::INTRO,
        section = Marker::SECTION,
        paragraph = Marker::PARAGRAPH,
        points = Marker::POINTS,
        code = Marker::CODE,
        summary = Marker::SUMMARY,
    )
}

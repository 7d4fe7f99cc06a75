use crate::parsing::blocks::kinds::{CodeFence, Marker};

use super::prompt::GenerationRequest;

/// Deterministic lesson text used when generation is unavailable.
///
/// The text follows the full marker grammar, so it always parses into a
/// structured lesson.
pub fn fallback_lesson(request: &GenerationRequest) -> String {
    let topic = request.topic();
    let course = request.course_title();
    let fence = CodeFence::DELIMITER;
    let lang = CodeFence::DEFAULT_LANGUAGE;

    format!(
        "\
{title} Understanding {topic}: A Complete Guide

{intro}
Welcome to this guide on {topic}! It is a crucial concept in {course} and a foundation for building robust applications. Understanding {topic} will help you write cleaner, more efficient code.

{section} Core Fundamentals
{paragraph}
{topic} is one of the **fundamental building blocks** of modern development. It provides the structure and logic needed to create **scalable solutions**. Once you master it, more complex challenges become approachable.

{points}
- **Foundation**: {topic} is the base for more advanced concepts
- **Modularity**: Helps organise code into **reusable components**
- **Efficiency**: Improves **performance** and maintainability
- **Best Practices**: Follows industry **standard patterns**

{section} Practical Example
{paragraph}
Here is how {topic} works in practice. The example below shows the **basic implementation** pattern.

{code}
{fence}{lang}
// Basic example of {topic}
const example = {{
  name: \"{topic}\",
  course: \"{course}\",
  learn: function() {{
    console.log(\"Learning \" + this.name);
    return true;
  }}
}};

example.learn();
{fence}

{section} Key Takeaways
{points}
- Always start with the **basics** before moving to advanced topics
- Practice regularly to reinforce your **understanding**
- Apply concepts in **real projects** for better retention

{summary}
{topic} is essential for success in {course}. Focus on the core principles, practise with real examples, and build your expertise step by step.",
        title = Marker::TITLE,
        intro = Marker::INTRO,
        section = Marker::SECTION,
        paragraph = Marker::PARAGRAPH,
        points = Marker::POINTS,
        code = Marker::CODE,
        summary = Marker::SUMMARY,
    )
}

//! # Course-Generation Prompt
//!
//! The instruction block sent to the AI collaborator. The JSON format
//! contract here is what [`crate::resolver`] parses the response against, so
//! the two must stay in sync.

use crate::knowledge::{self, ContextMatch};

/// The fixed instruction block appended after the knowledge-base context.
/// `{topic}` placeholders are substituted by [`build_course_prompt`].
const COURSE_INSTRUCTIONS: &str = r#"You are a world-class engineering professor with 20+ years of teaching experience. Create an exceptionally detailed, educational course on "{topic}" that provides deep understanding in 15-30 minutes.

CRITICAL REQUIREMENTS:
1. EDUCATIONAL DEPTH: Provide detailed explanations with comprehensive paragraphs followed by bullet points
2. PROFESSIONAL FORMAT: No emojis, use clean bullet points and professional language
3. VERIFIED RESOURCES: Only include real, working URLs from educational websites like GeeksforGeeks (geeksforgeeks.org), Mozilla Developer Network (developer.mozilla.org), W3Schools (w3schools.com), Khan Academy (khanacademy.org), MIT OpenCourseWare (ocw.mit.edu), Stanford Online (online.stanford.edu), Wikipedia (wikipedia.org), or official documentation sites
4. COMPREHENSIVE EXPLANATIONS: Each module should have detailed content with proper paragraphs
5. PRACTICAL FOCUS: Include real-world applications and hands-on examples

For the topic "{topic}", create a course that helps students truly understand WHY concepts work the way they do, HOW to apply them in real scenarios, WHEN to use different approaches, and WHAT common mistakes to avoid.

Create the course in this EXACT JSON format:
{
  "title": "Professional course title reflecting comprehensive learning",
  "description": "Detailed 4-5 sentence description explaining what students will learn, why it's important, and how it applies to real engineering scenarios.",
  "duration": "20-30 minutes",
  "difficulty": "Intermediate",
  "estimatedReadTime": "25 min",
  "modules": [
    {
      "title": "Professional module title focusing on core understanding",
      "description": "What this module teaches and why it's important",
      "estimatedTime": "8-12 min",
      "topics": ["specific topic 1", "specific topic 2", "specific topic 3"],
      "detailedContent": "A comprehensive 300-400 word explanation covering the core concepts in detail, with theory, context, real-world applications, and specific examples. Use proper paragraphs and markdown bullet points.",
      "keyPoints": ["detailed point 1", "detailed point 2", "detailed point 3", "detailed point 4"],
      "resources": [
        {
          "title": "Resource title from a reputable educational source",
          "url": "Real working URL",
          "type": "article/tutorial/documentation/course",
          "description": "Why this resource is valuable for this topic"
        }
      ],
      "practiceExercise": "A hands-on exercise with step-by-step instructions taking 5-8 minutes.",
      "commonMistakes": ["common mistake 1 and how to avoid it", "common mistake 2 and how to avoid it"]
    }
  ],
  "prerequisites": ["specific prerequisite 1", "specific prerequisite 2"],
  "learningObjectives": ["specific measurable outcome 1", "specific measurable outcome 2", "specific measurable outcome 3"],
  "realWorldApplications": ["application 1 with industry context", "application 2 with industry context"],
  "quickReference": ["key formula or concept with usage guidance", "important principle with application guidelines"],
  "assessmentQuestions": ["scenario-based question 1", "practical question 2", "analysis question 3"],
  "nextSteps": ["immediate next topic with resources", "intermediate follow-up", "advanced exploration"]
}

IMPORTANT: Respond with only the JSON document. Write detailed, educational content in proper paragraphs, use professional language without emojis, include only real verified URLs, and focus on practical understanding."#;

/// Builds the full prompt for a topic: knowledge-base context first, then the
/// fixed instruction block.
pub fn build_course_prompt(topic: &str, context: &[ContextMatch]) -> String {
    let context_text = knowledge::context_prompt(topic, context);
    let instructions = COURSE_INSTRUCTIONS.replace("{topic}", topic);
    format!("{context_text}\n\n{instructions}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::find_relevant_context;

    #[test]
    fn prompt_contains_topic_and_format_contract() {
        let context = find_relevant_context("data structures");
        let prompt = build_course_prompt("data structures", &context);
        assert!(prompt.contains("data structures"));
        assert!(prompt.contains("EXACT JSON format"));
        assert!(prompt.contains("\"modules\""));
        assert!(!prompt.contains("{topic}"));
    }
}

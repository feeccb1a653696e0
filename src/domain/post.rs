//! Blog post domain types
//!
//! A post is a topic, a publication date and the generated body. The
//! filename and front matter depend only on topic and date.

use chrono::NaiveDate;

/// Date format used in filenames and front matter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder substituted by [`article_prompt`]
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// Default prompt sent to the language model
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Write an SEO-optimized blog post about {topic}. \
     Include an introduction, key points, and conclusion.";

/// A generated blog post ready to be written to the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub topic: String,
    pub date: NaiveDate,
    pub body: String,
}

impl Post {
    pub fn new(topic: impl Into<String>, date: NaiveDate, body: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            date,
            body: body.into(),
        }
    }

    /// `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Post filename, e.g. `2025-01-31-Latest-AI-Trends.md`
    pub fn filename(&self) -> String {
        format!("{}-{}.md", self.date_string(), slug(&self.topic))
    }

    /// Jekyll front matter block, including the blank line after it
    pub fn front_matter(&self) -> String {
        format!(
            "---\ntitle: {}\ndate: {}\n---\n\n",
            self.topic,
            self.date_string()
        )
    }

    /// Full file contents
    pub fn render(&self) -> String {
        let mut out = self.front_matter();
        out.push_str(&self.body);
        out
    }
}

/// Spaces become dashes; nothing else is touched
pub fn slug(topic: &str) -> String {
    topic.replace(' ', "-")
}

/// Render the prompt template for a topic
pub fn article_prompt(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

/// Substitution point for transcript text within a template body
pub const PLACEHOLDER: &str = "{text}";

/// Body of a prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateBody {
    /// Literal template text containing one `{text}` placeholder
    Literal(&'static str),
    /// Prompt text is solicited interactively at use time
    Custom,
}

/// A named summarization template, selected by its key
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub body: TemplateBody,
}

/// The fixed template catalogue. Array order is display order; keys are the
/// decimal strings "1" through "8".
pub static TEMPLATES: [PromptTemplate; 8] = [
    PromptTemplate {
        key: "1",
        name: "Quick Summary",
        body: TemplateBody::Literal(
            "Create a concise summary of this YouTube video transcript in 3-4 bullet points:\n\
             - Main topic/theme\n\
             - Key points discussed\n\
             - Important conclusion or takeaway\n\
             \n\
             Keep it brief and easy to read.\n\
             \n\
             Transcript: {text}",
        ),
    },
    PromptTemplate {
        key: "2",
        name: "Detailed Analysis",
        body: TemplateBody::Literal(
            "Provide a comprehensive analysis of this YouTube video transcript with the following structure:\n\
             \n\
             ## Overview\n\
             Brief description of the video's main topic\n\
             \n\
             ## Key Points\n\
             - List all major points discussed\n\
             - Include supporting details and examples mentioned\n\
             \n\
             ## Important Quotes or Statistics\n\
             - Highlight any significant quotes, numbers, or data mentioned\n\
             \n\
             ## Conclusion\n\
             - Main takeaways\n\
             - Actionable insights\n\
             \n\
             ## Target Audience\n\
             Who would benefit most from this content?\n\
             \n\
             Transcript: {text}",
        ),
    },
    PromptTemplate {
        key: "3",
        name: "Educational Notes",
        body: TemplateBody::Literal(
            "Convert this YouTube video transcript into structured educational notes:\n\
             \n\
             ## Topic: [Main Subject]\n\
             \n\
             ## Learning Objectives\n\
             What will viewers learn from this video?\n\
             \n\
             ## Key Concepts\n\
             - Define and explain main concepts\n\
             - Include examples and explanations\n\
             \n\
             ## Step-by-Step Process (if applicable)\n\
             Break down any processes or methods explained\n\
             \n\
             ## Important Facts & Figures\n\
             List key statistics, dates, or numerical data\n\
             \n\
             ## Summary Questions\n\
             Create 3-5 questions that test understanding of the content\n\
             \n\
             Transcript: {text}",
        ),
    },
    PromptTemplate {
        key: "4",
        name: "Business/Professional Summary",
        body: TemplateBody::Literal(
            "Create a professional summary suitable for business contexts:\n\
             \n\
             ## Executive Summary\n\
             One paragraph overview of the main topic and its relevance\n\
             \n\
             ## Key Business Insights\n\
             - Strategic points that could impact business decisions\n\
             - Market trends or opportunities mentioned\n\
             - Competitive advantages or challenges discussed\n\
             \n\
             ## Actionable Recommendations\n\
             What actions should be taken based on this content?\n\
             \n\
             ## ROI/Value Proposition\n\
             What value does this information provide?\n\
             \n\
             ## Next Steps\n\
             Suggested follow-up actions or further research needed\n\
             \n\
             Transcript: {text}",
        ),
    },
    PromptTemplate {
        key: "5",
        name: "Technical Deep Dive",
        body: TemplateBody::Literal(
            "Analyze this technical content with focus on:\n\
             \n\
             ## Technology/Method Overview\n\
             What technology, method, or system is being discussed?\n\
             \n\
             ## Technical Specifications\n\
             - Key technical details mentioned\n\
             - Requirements or prerequisites\n\
             - Performance metrics or benchmarks\n\
             \n\
             ## Implementation Details\n\
             - Step-by-step technical process\n\
             - Tools, software, or resources needed\n\
             - Common challenges and solutions\n\
             \n\
             ## Pros and Cons\n\
             Advantages and limitations discussed\n\
             \n\
             ## Use Cases\n\
             Practical applications and scenarios\n\
             \n\
             ## Further Learning\n\
             What additional knowledge might be needed?\n\
             \n\
             Transcript: {text}",
        ),
    },
    PromptTemplate {
        key: "6",
        name: "Creative/Content Summary",
        body: TemplateBody::Literal(
            "Summarize this creative or entertainment content:\n\
             \n\
             ## Content Type & Theme\n\
             What type of content is this and what's the main theme?\n\
             \n\
             ## Creative Elements\n\
             - Storytelling techniques used\n\
             - Visual or audio elements mentioned\n\
             - Creative decisions discussed\n\
             \n\
             ## Key Messages\n\
             What messages or emotions is the creator trying to convey?\n\
             \n\
             ## Audience Engagement\n\
             - How does the creator connect with their audience?\n\
             - Interactive elements or calls-to-action\n\
             \n\
             ## Production Insights\n\
             Behind-the-scenes information or creative process details\n\
             \n\
             ## Entertainment Value\n\
             What makes this content engaging or entertaining?\n\
             \n\
             Transcript: {text}",
        ),
    },
    PromptTemplate {
        key: "7",
        name: "Research Summary",
        body: TemplateBody::Literal(
            "Create an academic-style research summary:\n\
             \n\
             ## Research Question/Hypothesis\n\
             What question is being addressed or what hypothesis is being tested?\n\
             \n\
             ## Methodology\n\
             What methods, approaches, or frameworks are discussed?\n\
             \n\
             ## Key Findings\n\
             - Main discoveries or results\n\
             - Supporting evidence presented\n\
             - Data or statistics mentioned\n\
             \n\
             ## Implications\n\
             What do these findings mean for the field or society?\n\
             \n\
             ## Limitations\n\
             What limitations or caveats are mentioned?\n\
             \n\
             ## Future Research\n\
             What questions remain unanswered or need further investigation?\n\
             \n\
             ## Citations/References\n\
             Any sources, studies, or experts mentioned\n\
             \n\
             Transcript: {text}",
        ),
    },
    PromptTemplate {
        key: "8",
        name: "Custom Prompt",
        body: TemplateBody::Custom,
    },
];

/// Look up a template by its selection key
pub fn find(key: &str) -> Option<&'static PromptTemplate> {
    TEMPLATES.iter().find(|t| t.key == key)
}

/// Render the numbered selection menu
pub fn menu() -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"=".repeat(60));
    out.push_str("\nCHOOSE SUMMARY TYPE\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    for template in &TEMPLATES {
        out.push_str(&format!("{}. {}\n", template.key, template.name));
    }
    out.push_str(&"=".repeat(60));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_eight_templates_in_order() {
        let keys: Vec<&str> = TEMPLATES.iter().map(|t| t.key).collect();
        assert_eq!(keys, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_literal_bodies_contain_one_placeholder() {
        for template in &TEMPLATES[..7] {
            match template.body {
                TemplateBody::Literal(body) => {
                    assert_eq!(
                        body.matches(PLACEHOLDER).count(),
                        1,
                        "template {} must contain exactly one placeholder",
                        template.key
                    );
                }
                TemplateBody::Custom => panic!("template {} should be literal", template.key),
            }
        }
    }

    #[test]
    fn test_eighth_entry_is_custom() {
        let template = find("8").unwrap();
        assert_eq!(template.name, "Custom Prompt");
        assert_eq!(template.body, TemplateBody::Custom);
    }

    #[test]
    fn test_find_valid_key() {
        let template = find("1").unwrap();
        assert_eq!(template.name, "Quick Summary");
    }

    #[test]
    fn test_find_invalid_key() {
        assert!(find("9").is_none());
        assert!(find("0").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_menu_lists_all_templates() {
        let menu = menu();
        for template in &TEMPLATES {
            assert!(menu.contains(&format!("{}. {}", template.key, template.name)));
        }
    }
}

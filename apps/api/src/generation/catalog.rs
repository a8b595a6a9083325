//! Catalog of canned feedback sections, grouped the way the front-end tabs present them.
//!
//! One table drives listing, prompt composition, and report labels. Section keys are unique
//! across the whole catalog.

use serde::Serialize;

use crate::generation::prompts::*;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGroup {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    pub role: &'static str,
    #[serde(skip)]
    pub quick_style: &'static str,
    #[serde(skip)]
    pub in_depth_style: &'static str,
    #[serde(skip)]
    pub closing: Option<&'static str>,
    pub uses_personality: bool,
    pub sections: &'static [Section],
}

pub static CATALOG: &[SectionGroup] = &[
    SectionGroup {
        id: "writing-advice",
        label: "Writing Advice",
        role: WRITING_ADVICE_ROLE,
        quick_style: WRITING_ADVICE_QUICK,
        in_depth_style: WRITING_ADVICE_IN_DEPTH,
        closing: Some(WRITING_ADVICE_CLOSING),
        uses_personality: false,
        sections: &[
            Section {
                key: "level1",
                title: "Level 1: Basic Writing Skills",
                description: "Looks at your clarity, sentence flow, grammar, punctuation, and overall readability.",
                prompt: "Review the manuscript for clarity, sentence flow, grammar, punctuation, and readability. Identify areas needing improvement and offer direct, constructive guidance.",
            },
            Section {
                key: "level2",
                title: "Level 2: Story Structure & Characters",
                description: "Evaluates your pacing, transitions, dialogue, plot flow, and character development.",
                prompt: "Evaluate the structure of your story, including pacing, transitions, dialogue, and character development. Highlight strengths and offer specific suggestions for improving plot momentum or character clarity.",
            },
            Section {
                key: "level3",
                title: "Level 3: Themes & Philosophy",
                description: "Analyzes the deeper meaning, themes, symbolism, and emotional tone in your manuscript.",
                prompt: "Analyze the themes, symbolism, emotional tone, and deeper meaning within your manuscript. Explain what readers may take away and suggest ways to strengthen thematic clarity.",
            },
            Section {
                key: "enjoyment",
                title: "Reader Enjoyment",
                description: "Assesses your tone, rhythm, emotional impact, and overall reader engagement.",
                prompt: "Evaluate how engaging and immersive the manuscript is. Assess tone, rhythm, atmosphere, emotional impact, and flow. Offer constructive advice for improving engagement.",
            },
        ],
    },
    SectionGroup {
        id: "market-insights",
        label: "Market Insights",
        role: MARKET_INSIGHTS_ROLE,
        quick_style: MARKET_INSIGHTS_QUICK,
        in_depth_style: MARKET_INSIGHTS_IN_DEPTH,
        closing: None,
        uses_personality: true,
        sections: &[
            Section {
                key: "target-audience",
                title: "Target Audience Analysis",
                description: "Identify who your most likely readers are and how their preferences shape market performance.",
                prompt: "Analyze the manuscript's target audience, including demographics, reading behaviors, and motivations for this genre.",
            },
            Section {
                key: "genre-trends",
                title: "Genre Trends & Market Fit",
                description: "See how your book aligns with current publishing trends for its category.",
                prompt: "Evaluate how this manuscript fits into current genre and subgenre trends. Discuss market momentum, rising themes, and commercial opportunities.",
            },
            Section {
                key: "comparable-titles",
                title: "Competitor & Comparable Titles",
                description: "Understand what similar books are succeeding and how yours compares.",
                prompt: "Identify comparable titles for this manuscript and analyze how its tone, themes, voice, and structure compare to successful books.",
            },
            Section {
                key: "positioning",
                title: "Positioning & Unique Selling Points",
                description: "Assess what makes your book distinct and how it stands out in the market.",
                prompt: "Determine the manuscript's unique selling points (USPs). Explain how its themes, structure, and voice contribute to market positioning.",
            },
            Section {
                key: "commercial-forecast",
                title: "Commercial Potential Forecast",
                description: "Get a projection of how the manuscript could perform commercially.",
                prompt: "Provide a commercial potential forecast for this manuscript based on genre trends, audience demand, comparable titles, and projected market trajectory.",
            },
        ],
    },
    SectionGroup {
        id: "marketing-strategy",
        label: "Marketing Strategy",
        role: MARKETING_STRATEGY_ROLE,
        quick_style: MARKETING_STRATEGY_QUICK,
        in_depth_style: MARKETING_STRATEGY_IN_DEPTH,
        closing: None,
        uses_personality: true,
        sections: &[
            Section {
                key: "general-strategy",
                title: "General Marketing Strategy",
                description: "A broad overview of how to promote your book effectively with a cohesive plan.",
                prompt: "Provide a general marketing strategy for this manuscript, including actionable steps for visibility, engagement, and long-term audience growth.",
            },
            Section {
                key: "author-branding",
                title: "Author Branding & Online Presence",
                description: "Recommendations for your public-facing identity as the author.",
                prompt: "Develop an author branding strategy, including website, tone, visual identity, and online presence tailored to the manuscript's genre and audience.",
            },
            Section {
                key: "social-media",
                title: "Social Media & Community Promotion",
                description: "How to use platforms like TikTok, Instagram, Reddit, or author groups to build momentum.",
                prompt: "Provide a social media marketing plan, including recommended platforms, content ideas, posting frequency, and community engagement strategies.",
            },
            Section {
                key: "launch-strategy",
                title: "Launch & Release Strategy",
                description: "Step-by-step guidance on what to do leading up to release day.",
                prompt: "Create a structured book launch strategy for this manuscript, including pre-launch, launch week, and post-launch actions.",
            },
            Section {
                key: "reviewer-outreach",
                title: "ARC, Influencer, & Reviewer Outreach",
                description: "How to gather early feedback, build buzz, and get reviews from the right readers.",
                prompt: "Provide an outreach strategy for ARC readers, influencers, reviewers, and relevant communities.",
            },
            Section {
                key: "advertising",
                title: "Advertising Recommendations",
                description: "Guidance for paid marketing channels such as Amazon Ads, Meta Ads, BookBub, etc.",
                prompt: "Offer a paid advertising plan tailored to this manuscript, including recommended platforms, budgets, audiences, and ad types.",
            },
        ],
    },
    SectionGroup {
        id: "book-quality",
        label: "Book Quality Check",
        role: BOOK_QUALITY_ROLE,
        quick_style: BOOK_QUALITY_QUICK,
        in_depth_style: BOOK_QUALITY_IN_DEPTH,
        closing: None,
        uses_personality: true,
        sections: &[
            Section {
                key: "length",
                title: "Recommended Word Count & Page Length",
                description: "Evaluates whether the manuscript's projected length aligns with industry expectations for its genre.",
                prompt: "Estimate the manuscript's approximate word count and page count based on content. Compare the length to industry standards for its genre.",
            },
            Section {
                key: "readability",
                title: "Language & Readability Level",
                description: "Assesses clarity, sentence structure, and reading level appropriateness.",
                prompt: "Analyze the manuscript's readability level and language complexity. Comment on clarity, sentence flow, and audience suitability.",
            },
            Section {
                key: "genre-conventions",
                title: "Genre Alignment & Conventions",
                description: "Checks whether tone, themes, pacing, and structure match reader expectations for this genre.",
                prompt: "Evaluate how well the manuscript follows genre conventions. Discuss tone, structure, pacing, POV, and thematic alignment.",
            },
            Section {
                key: "audience-appeal",
                title: "Audience Appeal",
                description: "Considers whether the style, character depth, pacing, and themes appeal to the target demographic.",
                prompt: "Assess how appealing the manuscript is to its intended audience based on writing style, themes, pacing, and emotional tone.",
            },
            Section {
                key: "product-strength",
                title: "Product Strength: Structure, Cohesion, and Flow",
                description: "Looks at the book as a commercial product: how cleanly it reads, whether chapters flow, and how strong the overall structure is.",
                prompt: "Evaluate the manuscript as a commercial product. Discuss story cohesion, pacing balance, chapter flow, structural clarity, and consistency.",
            },
        ],
    },
];

/// Looks up a section by key, returning it together with the group it belongs to.
pub fn find_section(key: &str) -> Option<(&'static SectionGroup, &'static Section)> {
    CATALOG.iter().find_map(|group| {
        group
            .sections
            .iter()
            .find(|s| s.key == key)
            .map(|section| (group, section))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_keys_are_unique() {
        let mut seen = HashSet::new();
        for group in CATALOG {
            for section in group.sections {
                assert!(seen.insert(section.key), "duplicate key {}", section.key);
            }
        }
    }

    #[test]
    fn test_every_group_has_sections_and_styles() {
        for group in CATALOG {
            assert!(!group.sections.is_empty(), "{} has no sections", group.id);
            assert!(!group.quick_style.is_empty());
            assert!(!group.in_depth_style.is_empty());
            assert!(!group.role.is_empty());
        }
    }

    #[test]
    fn test_find_section_returns_owning_group() {
        let (group, section) = find_section("social-media").unwrap();
        assert_eq!(group.id, "marketing-strategy");
        assert_eq!(section.title, "Social Media & Community Promotion");
        assert!(find_section("nope").is_none());
    }

    #[test]
    fn test_writing_advice_ignores_personality() {
        let (group, _) = find_section("level1").unwrap();
        assert!(!group.uses_personality);
    }

    #[test]
    fn test_serialized_catalog_hides_prompt_scaffolding() {
        let json = serde_json::to_value(&CATALOG[0]).unwrap();
        assert!(json.get("role").is_none());
        assert_eq!(json["usesPersonality"], false);
        assert_eq!(json["sections"][0]["key"], "level1");
    }
}

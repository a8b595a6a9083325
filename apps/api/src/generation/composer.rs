use serde::{Deserialize, Serialize};

use crate::generation::catalog::SectionGroup;
use crate::generation::prompts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Depth {
    #[default]
    Quick,
    InDepth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Direct,
    Gentle,
    Academic,
    Commercial,
}

impl Personality {
    pub fn modifier(&self) -> &'static str {
        match self {
            Personality::Direct => PERSONALITY_DIRECT,
            Personality::Gentle => PERSONALITY_GENTLE,
            Personality::Academic => PERSONALITY_ACADEMIC,
            Personality::Commercial => PERSONALITY_COMMERCIAL,
        }
    }

    /// Parses a personality name. Blank means "no personality".
    pub fn parse(name: &str) -> Result<Option<Self>, String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "direct" => Ok(Some(Personality::Direct)),
            "gentle" => Ok(Some(Personality::Gentle)),
            "academic" => Ok(Some(Personality::Academic)),
            "commercial" => Ok(Some(Personality::Commercial)),
            other => Err(format!(
                "Unknown personality '{other}'; expected direct, gentle, academic, or commercial"
            )),
        }
    }
}

/// Builds the final prompt for one section request.
///
/// Block order: personality line, role preamble, personality style block, task, response
/// style, closing. Personality blocks appear only for groups that use one. The manuscript is
/// not part of this prompt; the proxy appends it.
pub fn compose(
    group: &SectionGroup,
    task: &str,
    depth: Depth,
    personality: Option<Personality>,
) -> String {
    let modifier = personality
        .filter(|_| group.uses_personality)
        .map(|p| p.modifier());
    let style = match depth {
        Depth::Quick => group.quick_style,
        Depth::InDepth => group.in_depth_style,
    };

    let mut blocks: Vec<String> = Vec::with_capacity(6);
    if let Some(m) = modifier {
        blocks.push(m.to_string());
    }
    blocks.push(group.role.to_string());
    if let Some(m) = modifier {
        blocks.push(format!("{PERSONALITY_HEADER}\n{m}"));
    }
    blocks.push(format!("Task: {}", task.trim()));
    blocks.push(format!("Response style: {style}"));
    if let Some(closing) = group.closing {
        blocks.push(closing.to_string());
    }

    blocks.join("\n\n").trim().to_string()
}

/// Picks the caller's edited task text when it has content, else the catalog default.
pub fn resolve_task<'a>(override_prompt: Option<&'a str>, default_prompt: &'a str) -> &'a str {
    override_prompt
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(default_prompt)
}

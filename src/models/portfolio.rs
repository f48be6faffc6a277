use serde::{Deserialize, Serialize};

/// The JSON document that drives every rendered section.
/// Every top-level field is optional; an absent field hides its section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub seo: Option<Seo>,
    pub brand: Option<String>,
    pub tagline: Option<String>,
    pub about: Option<About>,
    pub skills: Option<Vec<SkillGroup>>,
    pub projects: Option<Vec<Project>>,
    pub experience: Option<Vec<Experience>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub og_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub short: String,
    pub long_text: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    /// Only projects with extended text open the detail overlay.
    pub fn is_expandable(&self) -> bool {
        self.long_text.as_deref().map(|t| !t.is_empty()).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub demo: Option<String>,
    pub repo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub start: String,
    pub end: Option<String>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: Option<String>,
    pub socials: Option<Vec<Social>>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Invalid portfolio JSON: {}", e))
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.as_ref().and_then(|p| p.get(index))
    }
}

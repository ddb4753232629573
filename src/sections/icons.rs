//! Icon names used by content documents, mapped to terminal glyphs.

/// Known icon, resolved from the name stored in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Envelope,
    Twitter,
    Github,
    Linkedin,
    Instagram,
    Discord,
    Html5,
    Css3,
    Javascript,
    React,
    Link,
    Location,
    Unknown,
}

impl Icon {
    /// Look up an icon by its document name. Unrecognized names map to
    /// [`Icon::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "FaEnvelope" => Icon::Envelope,
            "FaTwitter" => Icon::Twitter,
            "FaGithub" => Icon::Github,
            "FaLinkedin" => Icon::Linkedin,
            "FaInstagram" => Icon::Instagram,
            "FaDiscord" => Icon::Discord,
            "html5" => Icon::Html5,
            "css3" => Icon::Css3,
            "js" => Icon::Javascript,
            "react" => Icon::React,
            _ => Icon::Unknown,
        }
    }

    /// Classify a hero contact entry by its link target.
    pub fn for_contact_href(href: Option<&str>) -> Self {
        match href {
            Some(h) if h.contains("mailto") => Icon::Envelope,
            Some(h) if h.contains("www") => Icon::Link,
            _ => Icon::Location,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Envelope => "✉",
            Icon::Twitter => "𝕏",
            Icon::Github => "GH",
            Icon::Linkedin => "in",
            Icon::Instagram => "◎",
            Icon::Discord => "☊",
            Icon::Html5 => "5",
            Icon::Css3 => "3",
            Icon::Javascript => "JS",
            Icon::React => "⚛",
            Icon::Link => "🔗",
            Icon::Location => "⌖",
            Icon::Unknown => "•",
        }
    }
}

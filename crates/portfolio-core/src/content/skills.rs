//! Skills grid content.
//!
//! Names and icon URLs are kept in separate tables; a name without an icon
//! entry renders [`MISSING_ICON`] instead of a broken reference.

/// Placeholder for a skill with no icon entry
pub const MISSING_ICON: &str = "https://placehold.co/40x40/000000/FFFFFF?text=?";

/// Placeholder for an icon URL that fails to load
pub const BROKEN_ICON: &str = "https://placehold.co/40x40/FF0000/FFFFFF?text=X";

/// Displayed skills, in grid order
pub const SKILL_NAMES: [&str; 12] = [
    "HTML5",
    "CSS3",
    "JavaScript",
    "React.js",
    "Next.js",
    "Tailwind CSS",
    "Sass",
    "Git",
    "Redux",
    "TypeScript",
    "Responsive Design",
    "RESTful APIs",
];

const SKILL_ICONS: &[(&str, &str)] = &[
    ("HTML5", "https://img.icons8.com/color/48/000000/html-5--v1.png"),
    ("CSS3", "https://img.icons8.com/color/48/000000/css3.png"),
    ("JavaScript", "https://img.icons8.com/color/48/000000/javascript--v1.png"),
    ("React.js", "https://img.icons8.com/color/48/000000/react-native.png"),
    ("Next.js", "https://img.icons8.com/color/48/000000/nextjs.png"),
    ("Tailwind CSS", "https://img.icons8.com/color/48/000000/tailwind_css.png"),
    ("Sass", "https://img.icons8.com/color/48/000000/sass.png"),
    ("Git", "https://img.icons8.com/color/48/000000/git.png"),
    ("Redux", "https://img.icons8.com/color/48/000000/redux.png"),
    ("TypeScript", "https://img.icons8.com/color/48/000000/typescript.png"),
    ("Responsive Design", "https://img.icons8.com/plasticine/48/000000/responsive-design.png"),
    ("RESTful APIs", "https://img.icons8.com/ios-filled/48/000000/api-settings.png"),
];

/// Icon URL for a skill, or [`MISSING_ICON`] when none is mapped
pub fn icon_for(skill: &str) -> &'static str {
    SKILL_ICONS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, url)| *url)
        .unwrap_or(MISSING_ICON)
}

/// One tile in the skills grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub icon_url: &'static str,
}

impl SkillEntry {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            icon_url: icon_for(name),
        }
    }

    pub fn alt(&self) -> String {
        format!("{} Icon", self.name)
    }
}

/// All displayed skills with their resolved icons
pub fn skill_entries() -> Vec<SkillEntry> {
    SKILL_NAMES.iter().map(|name| SkillEntry::new(name)).collect()
}

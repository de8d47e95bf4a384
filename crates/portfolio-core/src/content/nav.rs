//! Navigation links and section anchors

/// The five addressable sections, in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section element. External links depend on these names.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

/// Icon shown next to a navigation label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    User,
    Award,
    Briefcase,
    Phone,
}

/// A header link to an in-page anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    /// Target section id, without the leading `#`
    pub anchor: &'static str,
    pub icon: NavIcon,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Shared by the desktop and mobile menus
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { name: "Home", anchor: "hero", icon: NavIcon::Home },
    NavLink { name: "About", anchor: "about", icon: NavIcon::User },
    NavLink { name: "Skills", anchor: "skills", icon: NavIcon::Award },
    NavLink { name: "Projects", anchor: "projects", icon: NavIcon::Briefcase },
    NavLink { name: "Contact", anchor: "contact", icon: NavIcon::Phone },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_prefixes_hash() {
        assert_eq!(NAV_LINKS[0].href(), "#hero");
    }

    #[test]
    fn links_follow_section_order() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.anchor).collect();
        let ids: Vec<_> = SectionId::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(anchors, ids);
    }
}

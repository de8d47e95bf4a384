//! Hard-coded site content and the page structure it must satisfy.
//!
//! - [`nav`]: navigation links and the five section anchors
//! - [`skills`]: skill names and their icon URLs
//! - [`projects`]: the three showcased projects
//! - [`profile`]: personal details, photos and contact endpoints

pub mod nav;
pub mod profile;
pub mod projects;
pub mod skills;

use std::collections::HashMap;

pub use nav::{NavIcon, NavLink, SectionId, NAV_LINKS};
pub use projects::{ProjectCard, PROJECTS};
pub use skills::{skill_entries, SkillEntry};

use crate::error::{PortfolioError, Result};

/// Structural view of the rendered page: the links in the header and the
/// section ids in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub nav_links: Vec<NavLink>,
    pub sections: Vec<SectionId>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            nav_links: NAV_LINKS.to_vec(),
            sections: SectionId::ALL.to_vec(),
        }
    }
}

impl SiteContent {
    /// Check that every section id is rendered once and every navigation
    /// link resolves to one of them. A broken anchor fails silently in the
    /// browser, so this is the only place it gets caught.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for section in &self.sections {
            *seen.entry(section.id()).or_default() += 1;
        }

        if let Some(dup) = self.sections.iter().find(|s| seen[s.id()] > 1) {
            return Err(PortfolioError::DuplicateSection(dup.id().to_string()));
        }

        for link in &self.nav_links {
            if !seen.contains_key(link.anchor) {
                return Err(PortfolioError::UnknownAnchor(link.anchor.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site_is_valid() {
        SiteContent::default().validate().unwrap();
    }

    #[test]
    fn unknown_anchor_rejected() {
        let mut site = SiteContent::default();
        site.nav_links.push(NavLink {
            name: "Blog",
            anchor: "blog",
            icon: NavIcon::Home,
        });
        assert_eq!(
            site.validate(),
            Err(PortfolioError::UnknownAnchor("blog".to_string()))
        );
    }

    #[test]
    fn missing_section_breaks_its_link() {
        let mut site = SiteContent::default();
        site.sections.retain(|s| *s != SectionId::Skills);
        assert_eq!(
            site.validate(),
            Err(PortfolioError::UnknownAnchor("skills".to_string()))
        );
    }

    #[test]
    fn duplicate_section_rejected() {
        let mut site = SiteContent::default();
        site.sections.push(SectionId::About);
        assert_eq!(
            site.validate(),
            Err(PortfolioError::DuplicateSection("about".to_string()))
        );
    }
}

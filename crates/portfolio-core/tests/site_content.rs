//! Whole-page content checks: anchors, images and stagger ordering

use std::collections::HashSet;

use portfolio_core::content::profile::{ABOUT_PHOTO, PROFILE_PHOTO};
use portfolio_core::content::skills::skill_entries;
use portfolio_core::content::PROJECTS;
use portfolio_core::{RevealConfig, SectionId, SiteContent, NAV_LINKS};

#[test]
fn every_nav_link_targets_exactly_one_section() {
    let site = SiteContent::default();
    site.validate().expect("default content is consistent");

    for link in NAV_LINKS {
        let matches = site.sections.iter().filter(|s| s.id() == link.anchor).count();
        assert_eq!(matches, 1, "{} -> #{}", link.name, link.anchor);
    }
}

#[test]
fn five_sections_in_fixed_order() {
    let ids: Vec<_> = SectionId::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids, ["hero", "about", "skills", "projects", "contact"]);
}

#[test]
fn image_inventory_has_fallbacks() {
    // profile + about + three screenshots
    let mut assets = vec![PROFILE_PHOTO, ABOUT_PHOTO];
    assets.extend(PROJECTS.iter().map(|p| p.screenshot));
    assert_eq!(assets.len(), 5);
    for asset in &assets {
        assert_ne!(asset.src, asset.fallback);
        assert!(!asset.alt.is_empty());
    }

    let skills = skill_entries();
    assert_eq!(skills.len(), 12);
    let unique: HashSet<_> = skills.iter().map(|s| s.icon_url).collect();
    assert_eq!(unique.len(), 12);
}

#[test]
fn project_cards_cascade() {
    let delays: Vec<f64> = (0..PROJECTS.len())
        .map(|i| RevealConfig::project_card(i).transition.delay_s)
        .collect();
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
}

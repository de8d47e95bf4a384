//! Property-based tests for the portfolio model
//!
//! Uses proptest to check the invariants the UI relies on.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use portfolio_core::content::skills::{icon_for, MISSING_ICON, SKILL_NAMES};
use portfolio_core::{
    tokenize, ContactForm, FallbackImage, MemoryClassList, RevealConfig, RevealTrigger,
    StarParams, Theme, ThemeController, Visibility, WORD_STAGGER_S,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn theme_strategy() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
}

/// Scroll observations: visible ratios and fully-hidden events
fn visibility_strategy() -> impl Strategy<Value = Visibility> {
    prop_oneof![
        Just(Visibility::hidden()),
        (0.0f64..=1.0).prop_map(Visibility::partial),
    ]
}

fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?&=%+]{1,80}")
        .expect("valid regex")
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// An even number of toggles leaves the root exactly as applied
    #[test]
    fn even_toggles_restore_root(start in theme_strategy(), pairs in 0usize..20) {
        let mut controller = ThemeController::new(start, MemoryClassList::default());
        controller.apply();
        let before = controller.root().clone();

        for _ in 0..pairs * 2 {
            controller.toggle();
        }

        prop_assert_eq!(controller.theme(), start);
        prop_assert_eq!(controller.root(), &before);
    }

    /// The root only ever holds one theme marker
    #[test]
    fn single_marker_after_any_toggles(start in theme_strategy(), toggles in 0usize..25) {
        let mut controller = ThemeController::new(start, MemoryClassList::default());
        controller.apply();
        for _ in 0..toggles {
            controller.toggle();
        }
        let root = controller.root();
        prop_assert!(root.contains("light") != root.contains("dark"));
        prop_assert!(root.contains(controller.theme().class()));
    }

    /// Tokens reproduce the input's words in order with fixed stagger
    #[test]
    fn tokenize_preserves_words(words in prop::collection::vec("[a-zA-Z0-9']{1,12}", 0..30)) {
        let text = words.join(" ");
        let tokens = tokenize(&text);
        prop_assert_eq!(tokens.len(), words.len());
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(&token.text, &words[i]);
            prop_assert_eq!(token.index, i);
            prop_assert!((token.delay_s - i as f64 * WORD_STAGGER_S).abs() < 1e-9);
        }
    }

    /// A one-shot reveal fires at most once whatever the scroll history
    #[test]
    fn reveal_fires_at_most_once(observations in prop::collection::vec(visibility_strategy(), 0..60)) {
        let mut trigger = RevealTrigger::from(&RevealConfig::SECTION);
        let mut fired = 0;
        let mut revealed = false;
        for obs in observations {
            if trigger.observe(obs) {
                fired += 1;
            }
            // Once visible, never hidden again
            prop_assert!(!revealed || trigger.is_revealed());
            revealed = trigger.is_revealed();
        }
        prop_assert!(fired <= 1);
        prop_assert_eq!(fired == 1, trigger.is_revealed());
    }

    /// Any number of load errors leaves the image on its fallback after one swap
    #[test]
    fn image_falls_back_once(errors in 1usize..10) {
        let mut image = FallbackImage::new("https://img.invalid/a.png", "https://placehold.co/1x1");
        let swaps = (0..errors).filter(|_| image.on_error()).count();
        prop_assert_eq!(swaps, 1);
        prop_assert_eq!(image.current_src(), "https://placehold.co/1x1");
    }

    /// Names outside the skill table always resolve to the placeholder
    #[test]
    fn unknown_skill_uses_placeholder(name in "[a-z]{1,20}") {
        prop_assume!(!SKILL_NAMES.contains(&name.as_str()));
        prop_assert_eq!(icon_for(&name), MISSING_ICON);
    }

    /// Star draws stay inside their ranges for any seed and count
    #[test]
    fn stars_within_ranges(seed in any::<u64>(), count in 0usize..300) {
        let stars = StarParams::field(count, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(stars.len(), count);
        for star in stars {
            prop_assert!((0.0..100.0).contains(&star.left_vw));
            prop_assert!((0.0..100.0).contains(&star.top_vh));
            prop_assert!((1.0..3.0).contains(&star.size_px));
            prop_assert!((2.0..6.0).contains(&star.duration_s));
            prop_assert!((0.0..3.0).contains(&star.delay_s));
        }
    }

    /// A fully populated form always yields a request with every value
    #[test]
    fn populated_form_yields_request(
        name in field_strategy(),
        local in "[a-z]{1,10}",
        message in field_strategy(),
    ) {
        let form = ContactForm {
            name: name.clone(),
            email: format!("{local}@example.com"),
            message: message.clone(),
        };
        let request = form.to_request().unwrap();
        let body = request.body();
        let expected_name = format!("Name={}", name.trim());
        let expected_email = format!("Email={local}@example.com");
        let expected_message = format!("Message={}", message.trim());
        prop_assert!(body.contains(&expected_name));
        prop_assert!(body.contains(&expected_email));
        prop_assert!(body.contains(&expected_message));
        prop_assert_eq!(request.recipient.as_str(), "princeik.akowe@gmail.com");
        prop_assert_eq!(request.subject.as_str(), "Portfolio Contact Form Submission");
    }
}

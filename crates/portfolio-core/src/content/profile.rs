//! Personal details shown in the hero, about, contact and footer

use crate::image::ImageAsset;

pub const BRAND: &str = "PHOENIX";
pub const FULL_NAME: &str = "Prince Akowe";
pub const GREETING: &str = "Hi, I'm Prince Akowe";
pub const TAGLINE: &str =
    "A passionate Frontend Developer building captivating and user-friendly web experiences.";

pub const PROFILE_PHOTO: ImageAsset = ImageAsset {
    src: "https://res.cloudinary.com/dtxbyd8bj/image/upload/v1749456089/ik_k6vuck.jpg",
    fallback: "https://placehold.co/192x192/007bff/ffffff?text=DP",
    alt: "Profile Picture",
};

pub const ABOUT_PHOTO: ImageAsset = ImageAsset {
    src: "https://res.cloudinary.com/dtxbyd8bj/image/upload/v1749456090/prince_yb7w5n.jpg",
    fallback: "https://placehold.co/600x400/007bff/ffffff?text=About+Image",
    alt: "About Me",
};

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a dedicated frontend developer with a passion for creating beautiful and functional web applications. My journey into web development began with a fascination for how user interfaces come to life, and I've been hooked ever since.",
    "I specialize in React.js, bringing ideas from concept to reality with clean, efficient, and maintainable code. I enjoy the challenge of solving complex problems and continuously learning new technologies to stay at the forefront of web development.",
    "When I'm not coding, you can find me exploring new design trends, contributing to open-source projects, or enjoying a good book.",
];

pub const CONTACT_INTRO: &str =
    "Feel free to reach out if you have any questions or opportunities!";

pub const EMAIL: &str = "princeik.akowe@gmail.com";
pub const PHONE: &str = "+2348065789274";
pub const GITHUB_URL: &str = "https://github.com/Ikoyi1st";

pub fn mail_href() -> String {
    format!("mailto:{EMAIL}")
}

pub fn phone_href() -> String {
    format!("tel:{PHONE}")
}

/// Footer line for the given year
pub fn copyright(year: i32) -> String {
    format!("\u{00A9} {year} {FULL_NAME}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs() {
        assert_eq!(mail_href(), "mailto:princeik.akowe@gmail.com");
        assert_eq!(phone_href(), "tel:+2348065789274");
    }

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2025), "\u{00A9} 2025 Prince Akowe. All rights reserved.");
    }
}

//! Projects showcase content

use crate::image::ImageAsset;

/// A showcased project. URLs are opaque and never checked for reachability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub screenshot: ImageAsset,
    pub repo_url: &'static str,
    pub demo_url: &'static str,
}

pub const PROJECTS: [ProjectCard; 3] = [
    ProjectCard {
        title: "E-commerce Store",
        description: "A responsive e-commerce platform built with React and Redux, featuring product listings, shopping cart, and user authentication.",
        screenshot: ImageAsset {
            src: "https://res.cloudinary.com/dtxbyd8bj/image/upload/v1749464370/Screenshot_2025-06-09_111820_p4ffyq.png",
            fallback: "https://placehold.co/400x250/007bff/ffffff?text=Project+1",
            alt: "Project 1",
        },
        repo_url: "https://github.com/Ikoyi1st/Morgan.git",
        demo_url: "https://morgan-one.vercel.app",
    },
    ProjectCard {
        title: "Chat App",
        description: "A simple and intuitive real time chat app application with drag-and-drop functionality and local storage persistence.",
        screenshot: ImageAsset {
            src: "https://res.cloudinary.com/dtxbyd8bj/image/upload/v1749463980/Screenshot_2025-06-09_111219_mweqeb.png",
            fallback: "https://placehold.co/400x250/007bff/ffffff?text=Project+2",
            alt: "Project 2",
        },
        repo_url: "https://github.com/LSETF-COHORT2024/CHAT-APP.git",
        demo_url: "https://chat-app-seven-vert.vercel.app/Login",
    },
    ProjectCard {
        title: "Weather Dashboard",
        description: "A dynamic weather dashboard fetching real-time weather data from an external API, with location search.",
        screenshot: ImageAsset {
            src: "https://res.cloudinary.com/dtxbyd8bj/image/upload/v1749456102/Screenshot_2025-06-09_085432_f92qqh.png",
            fallback: "https://placehold.co/400x250/007bff/ffffff?text=Project+3",
            alt: "Project 3",
        },
        repo_url: "https://github.com/Ikoyi1st/weather.git",
        demo_url: "https://skyther.vercel.app/",
    },
];

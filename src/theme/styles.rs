//! Global CSS styles for the portfolio.
//!
//! Themed rules are scoped under the `light` / `dark` marker class that the
//! theme controller keeps on `<html>`. Entrance keyframes are generated at
//! runtime by `portfolio_ui::keyframe_styles`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --blue-400: #60a5fa;
  --blue-500: #3b82f6;
  --blue-600: #2563eb;
  --blue-700: #1d4ed8;
  --blue-800: #1e40af;

  --gray-50: #f9fafb;
  --gray-100: #f3f4f6;
  --gray-200: #e5e7eb;
  --gray-300: #d1d5db;
  --gray-400: #9ca3af;
  --gray-600: #4b5563;
  --gray-700: #374151;
  --gray-800: #1f2937;
  --gray-900: #111827;

  --star: #ffffff;

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
  --transition-theme: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Page Shell === */
.page {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
  transition: background-color var(--transition-theme), color var(--transition-theme);
}

.page--light {
  background: var(--gray-50);
  color: var(--gray-800);
}

.page--dark {
  background: var(--gray-900);
  color: var(--gray-200);
}

.page-content {
  position: relative;
  padding-top: 5rem;
}

/* === Star Field === */
.star-field {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.star {
  position: absolute;
  border-radius: 9999px;
  background: var(--star);
  opacity: 0;
  animation-name: shooting-star;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

@keyframes shooting-star {
  0% { transform: translateX(0) translateY(0) rotate(0deg); opacity: 0; filter: brightness(0.5); }
  10% { opacity: 1; filter: brightness(1.5); }
  100% { transform: translateX(300px) translateY(300px) rotate(45deg); opacity: 0; filter: brightness(0.5); }
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 40;
  padding: 1rem 4rem;
  background: rgba(31, 41, 55, 0.8);
  backdrop-filter: blur(4px);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

html.dark .navbar {
  background: rgba(17, 24, 39, 0.8);
}

.navbar-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
  max-width: 80rem;
  margin: 0 auto;
}

.navbar-brand {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--blue-500);
}

.navbar-links {
  display: flex;
  align-items: center;
  gap: 2rem;
}

.navbar-link,
.navbar-mobile-link {
  display: flex;
  align-items: center;
  color: var(--gray-200);
  transition: color var(--transition-normal), background-color var(--transition-fast);
}

.navbar-link:hover {
  color: var(--blue-400);
}

.navbar-link-icon {
  margin-right: 0.5rem;
}

.navbar-mobile-controls {
  display: none;
  align-items: center;
  gap: 1rem;
}

.navbar-mobile-menu {
  display: none;
  margin-top: 1rem;
  padding: 0.5rem 0;
  border-radius: 0.375rem;
  background: rgba(31, 41, 55, 0.9);
}

.navbar-mobile-link {
  padding: 0.5rem 1rem;
}

.navbar-mobile-link:hover {
  background: var(--gray-700);
}

/* === Buttons === */
.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: var(--gray-700);
  color: var(--gray-200);
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.icon-btn:hover {
  transform: scale(1.1);
}

.icon-btn:focus-visible {
  outline: 2px solid var(--blue-500);
}

.icon-btn.menu-btn {
  background: transparent;
  border-radius: 0.375rem;
}

.btn-primary,
.btn-outline {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border-radius: 0.5rem;
  font: inherit;
  cursor: pointer;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  transition: all var(--transition-normal);
}

.btn-primary {
  border: none;
  background: var(--blue-600);
  color: #ffffff;
}

.btn-primary:hover {
  background: var(--blue-700);
  transform: scale(1.05);
}

.btn-outline {
  border: 2px solid var(--blue-600);
  background: transparent;
  color: var(--blue-600);
}

.btn-outline:hover {
  background: var(--blue-600);
  color: #ffffff;
  transform: scale(1.05);
}

.btn-block {
  width: 100%;
}

/* === Hero === */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: calc(100vh - 80px);
  padding: 4rem 1rem;
  text-align: center;
}

.hero-avatar {
  width: 12rem;
  height: 12rem;
  margin-bottom: 2rem;
  overflow: hidden;
  border: 4px solid var(--blue-500);
  border-radius: 9999px;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
}

.hero-avatar-img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.hero-avatar-img:hover {
  transform: scale(1.05);
}

.hero-title {
  margin-bottom: 1rem;
  font-size: 3.75rem;
  font-weight: 800;
  line-height: 1.2;
}

.hero-tagline {
  max-width: 48rem;
  margin-bottom: 2rem;
  font-size: 1.5rem;
}

html.dark .hero-title { color: var(--gray-100); }
html.dark .hero-tagline { color: var(--gray-300); }

.hero-actions {
  display: flex;
  gap: 1rem;
}

/* === Animated Text === */
.animated-text {
  display: inline-block;
}

.animated-text.centered {
  text-align: center;
}

.animated-word {
  display: inline-block;
  margin-right: 0.5rem;
}

/* === Sections === */
.section {
  max-width: 80rem;
  margin: 0 auto;
  padding: 4rem;
}

.section-title {
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 3rem;
  font-size: 2.25rem;
  font-weight: 700;
}

html.dark .section-title { color: var(--gray-100); }

.section-title-icon {
  margin-right: 0.75rem;
  color: var(--blue-500);
}

.body-text {
  margin-bottom: 1rem;
  font-size: 1.125rem;
  line-height: 1.75;
}

html.dark .body-text { color: var(--gray-300); }

.card {
  border-radius: 0.5rem;
  background: var(--gray-100);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

html.dark .card { background: var(--gray-800); }

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.about-photo {
  overflow: hidden;
  border-radius: 0.5rem;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.about-photo-img {
  display: block;
  width: 100%;
  height: auto;
  object-fit: cover;
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(5, minmax(0, 1fr));
  gap: 1.5rem;
  justify-items: center;
}

.skill-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  width: 100%;
  padding: 1.5rem;
  border-radius: 0.5rem;
  background: var(--gray-100);
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  cursor: pointer;
}

html.dark .skill-tile { background: var(--gray-800); }

.skill-icon {
  width: 3.5rem;
  height: 3.5rem;
  margin-bottom: 0.75rem;
  object-fit: contain;
}

html.dark .skill-icon { filter: invert(1); }

.skill-tile:hover .skill-icon {
  animation: bounce 1s infinite;
}

.skill-name {
  font-size: 1.125rem;
  font-weight: 600;
}

@keyframes bounce {
  0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 2rem;
}

.project-card {
  padding: 1.5rem;
}

.project-shot {
  width: 100%;
  height: 12rem;
  margin-bottom: 1rem;
  object-fit: cover;
  border-radius: 0.375rem;
}

.project-title {
  margin-bottom: 0.5rem;
  font-size: 1.25rem;
  font-weight: 700;
}

.project-description {
  margin-bottom: 1rem;
  color: var(--gray-700);
}

html.dark .project-title { color: var(--gray-100); }
html.dark .project-description { color: var(--gray-300); }

.project-links {
  display: flex;
  gap: 1rem;
}

.project-link {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  color: var(--blue-600);
}

.project-link:hover {
  text-decoration: underline;
}

/* === Contact === */
.contact-card {
  max-width: 36rem;
  margin: 0 auto;
  padding: 2rem;
}

.contact-intro {
  margin-bottom: 2rem;
  font-size: 1.125rem;
  text-align: center;
}

html.dark .contact-intro { color: var(--gray-300); }

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.form-label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
  font-weight: 500;
}

html.dark .form-label { color: var(--gray-100); }

.form-input {
  width: 100%;
  padding: 0.75rem;
  border: 1px solid var(--gray-300);
  border-radius: 0.375rem;
  background: #ffffff;
  color: var(--gray-900);
  font: inherit;
}

html.dark .form-input {
  border-color: var(--gray-600);
  background: var(--gray-700);
  color: var(--gray-100);
}

.form-input:focus {
  outline: 2px solid var(--blue-500);
  border-color: transparent;
}

.form-error {
  color: #dc2626;
  font-size: 0.875rem;
}

.contact-links {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 2rem;
}

.contact-link {
  color: var(--blue-600);
  transition: color var(--transition-normal);
}

.contact-link:hover { color: var(--blue-800); }
html.dark .contact-link:hover { color: var(--blue-400); }

/* === Footer === */
.footer {
  padding: 2rem 4rem;
  font-size: 0.875rem;
  text-align: center;
  color: var(--gray-600);
}

html.dark .footer { color: var(--gray-400); }

/* === Narrow viewports === */
@media (max-width: 767px) {
  .navbar { padding: 1rem; }
  .navbar-links { display: none; }
  .navbar-mobile-controls { display: flex; }
  .navbar-mobile-menu.open { display: block; }

  .hero-avatar { width: 8rem; height: 8rem; }
  .hero-title { font-size: 2.25rem; }
  .hero-tagline { font-size: 1.25rem; }

  .section { padding: 4rem 1rem; }
  .section-title { font-size: 1.875rem; }
  .about-grid { grid-template-columns: 1fr; }
  .skills-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .projects-grid { grid-template-columns: 1fr; }
}

@media (min-width: 768px) and (max-width: 1023px) {
  .skills-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
  .projects-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}
"#;

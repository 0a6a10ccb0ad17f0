//! Global CSS styles for the portfolio page.
//!
//! Black canvas, white text at graded opacities, fuchsia/indigo/cyan
//! accents. Reveal and mount animations are driven from here; components
//! only toggle classes and set the `--reveal-*` custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --black: #000000;
  --white: #ffffff;
  --text-90: rgba(255, 255, 255, 0.9);
  --text-80: rgba(255, 255, 255, 0.8);
  --text-70: rgba(255, 255, 255, 0.7);
  --text-60: rgba(255, 255, 255, 0.6);
  --text-50: rgba(255, 255, 255, 0.5);
  --hairline: rgba(255, 255, 255, 0.1);
  --glass: rgba(255, 255, 255, 0.05);
  --glass-strong: rgba(255, 255, 255, 0.1);
  --card: rgba(255, 255, 255, 0.04);

  --fuchsia: #d946ef;
  --fuchsia-deep: #c026d3;
  --fuchsia-soft: #f0abfc;
  --violet: #8b5cf6;
  --indigo: #6366f1;
  --indigo-soft: #a5b4fc;
  --cyan: #22d3ee;
  --cyan-soft: #67e8f9;
  --emerald: #34d399;

  --radius-lg: 0.5rem;
  --radius-xl: 0.75rem;
  --radius-2xl: 1rem;

  --font-sans: 'Inter', ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;

  --transition-fast: 150ms ease;
  --transition-reveal: 600ms cubic-bezier(0.22, 1, 0.36, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--black);
  color: var(--white);
  line-height: 1.6;
}

::selection {
  background: rgba(217, 70, 239, 0.3);
  color: var(--white);
}

a {
  color: inherit;
  text-decoration: none;
}

.page {
  min-height: 100vh;
  background: var(--black);
  color: var(--white);
  overflow-x: hidden;
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1rem;
}

@media (min-width: 640px) {
  .container { padding: 0 1.5rem; }
}

@media (min-width: 1024px) {
  .container { padding: 0 2rem; }
}

.icon {
  flex-shrink: 0;
}

.accent-fuchsia {
  color: var(--fuchsia);
}

/* === Navigation Bar === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: transparent;
  border-bottom: 1px solid transparent;
  transition: background var(--transition-fast), border-color var(--transition-fast),
    backdrop-filter var(--transition-fast);
}

.site-header.scrolled {
  background: rgba(0, 0, 0, 0.4);
  border-bottom-color: var(--hairline);
  backdrop-filter: blur(24px);
  -webkit-backdrop-filter: blur(24px);
}

.nav-bar {
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand-mark {
  position: relative;
  display: inline-flex;
}

.brand-glow {
  position: absolute;
  inset: -0.5rem;
  border-radius: 9999px;
  background: rgba(217, 70, 239, 0.2);
  filter: blur(12px);
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.brand:hover .brand-glow {
  opacity: 1;
}

.brand-label {
  color: var(--text-90);
  font-weight: 600;
  letter-spacing: 0.025em;
  transition: color var(--transition-fast);
}

.brand:hover .brand-label {
  color: var(--white);
}

.nav-links {
  display: none;
  align-items: center;
  gap: 1.5rem;
}

.nav-link {
  font-size: 0.875rem;
  color: var(--text-70);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--white);
}

.social-links {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.nav-social {
  margin-left: 1rem;
}

.mobile-social {
  padding-top: 0.5rem;
}

.menu-toggle {
  display: inline-flex;
  padding: 0.5rem;
  border-radius: var(--radius-lg);
  background: var(--glass);
  border: 1px solid var(--hairline);
  color: var(--text-80);
  cursor: pointer;
}

@media (min-width: 768px) {
  .nav-links { display: flex; }
  .menu-toggle { display: none; }
  .mobile-menu { display: none; }
}

.mobile-menu {
  border-top: 1px solid var(--hairline);
  background: rgba(0, 0, 0, 0.7);
  backdrop-filter: blur(24px);
  -webkit-backdrop-filter: blur(24px);
  animation: menu-in 200ms ease-out both;
}

.mobile-menu-inner {
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.mobile-link {
  display: block;
  padding: 0.5rem 0.75rem;
  border-radius: var(--radius-lg);
  color: var(--text-80);
}

.mobile-link:hover {
  background: var(--glass-strong);
  color: var(--white);
}

@keyframes menu-in {
  from { opacity: 0; transform: translateY(-8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-social {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: var(--radius-lg);
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  padding: 0.75rem 1.25rem;
  background: var(--fuchsia);
  color: var(--white);
  border: none;
}

.btn-primary:hover {
  background: var(--fuchsia-deep);
}

.btn-outline {
  padding: 0.75rem 1.25rem;
  background: var(--glass);
  border: 1px solid rgba(255, 255, 255, 0.15);
  color: var(--white);
}

.btn-outline:hover {
  background: var(--glass-strong);
}

.btn-social {
  padding: 0.5rem;
  background: var(--glass);
  border: 1px solid var(--hairline);
  color: var(--text-80);
}

.btn-social:hover {
  background: var(--glass-strong);
  color: var(--white);
}

.connect-links .btn-outline {
  padding: 0.5rem 0.75rem;
  border-color: var(--hairline);
  color: var(--text-80);
}

/* === Pills === */
.pill,
.eyebrow {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-radius: 9999px;
  border: 1px solid var(--hairline);
  background: var(--glass);
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  color: var(--text-70);
}

.pill.tag {
  padding: 0.25rem 0.625rem;
}

.pill.tech-tag {
  padding: 0.375rem 0.75rem;
  font-size: 0.875rem;
  color: var(--text-80);
}

.hero-badge {
  color: var(--text-80);
  animation: badge-in 500ms ease-out both;
}

@keyframes badge-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 90vh;
  color: var(--white);
}

@media (min-width: 768px) {
  .hero { min-height: 0; height: 86vh; }
}

.hero-scene {
  position: absolute;
  inset: 0;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.8));
}

.gradient-orbs {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.orb {
  position: absolute;
  border-radius: 9999px;
  filter: blur(64px);
}

.orb-top-left { top: -8rem; left: -8rem; width: 24rem; height: 24rem; }
.orb-right { top: 10rem; right: -8rem; width: 20rem; height: 20rem; }
.orb-bottom { bottom: -8rem; left: 33%; width: 24rem; height: 24rem; }

.hero-content {
  position: relative;
  padding-top: 7rem;
  padding-bottom: 7rem;
  pointer-events: none;
}

.hero-copy {
  max-width: 48rem;
  pointer-events: auto;
  animation: hero-in 800ms ease-out both;
}

@keyframes hero-in {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

.hero .eyebrow {
  backdrop-filter: blur(8px);
}

.pulse-dot {
  display: inline-flex;
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--emerald);
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
  50% { opacity: 0.5; }
}

.hero-title {
  margin-top: 1.5rem;
  font-size: 2.25rem;
  line-height: 1.1;
  font-weight: 800;
  letter-spacing: -0.025em;
}

@media (min-width: 640px) {
  .hero-title { font-size: 3rem; }
}

@media (min-width: 768px) {
  .hero-title { font-size: 3.75rem; }
  .hero-content { padding-top: 8rem; padding-bottom: 8rem; }
}

.hero-lead {
  margin-top: 1.25rem;
  max-width: 42rem;
  color: var(--text-70);
  line-height: 1.7;
}

.hero-actions {
  margin-top: 2rem;
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.cta-arrow {
  transform: translateY(-2px);
  transition: transform var(--transition-fast);
}

.cta:hover .cta-arrow {
  transform: translate(2px, -2px);
}

.hero-badges {
  margin-top: 2.5rem;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 1rem;
}

/* === Sections === */
.page-section {
  position: relative;
  padding: 5rem 0;
}

@media (min-width: 768px) {
  .page-section { padding: 6rem 0; }
}

.section-glow {
  position: absolute;
  inset: 0;
  pointer-events: none;
  background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.01), transparent);
}

.section-heading {
  margin-bottom: 3rem;
}

.section-title {
  margin-top: 1rem;
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--white);
}

@media (min-width: 768px) {
  .section-title { font-size: 2.25rem; }
}

.grid {
  display: grid;
  gap: 1.5rem;
}

.align-center {
  align-items: center;
}

@media (min-width: 640px) {
  .grid-3 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 768px) {
  .grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
  .grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

/* === Cards === */
.card {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius-2xl);
  border: 1px solid var(--hairline);
  background: var(--card);
  padding: 1.5rem;
}

.card-gradient-warm {
  background: linear-gradient(to bottom right, rgba(217, 70, 239, 0.1), rgba(99, 102, 241, 0.1));
}

.card-gradient-cool {
  background: linear-gradient(to bottom right, rgba(99, 102, 241, 0.1), rgba(6, 182, 212, 0.1));
}

.card-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.5rem;
}

.card-title {
  color: var(--white);
  font-weight: 600;
}

.card-meta {
  font-size: 0.875rem;
  color: var(--text-60);
}

.body-text {
  color: var(--text-70);
  line-height: 1.7;
}

.icon-tile {
  display: inline-flex;
  padding: 0.5rem;
  border-radius: var(--radius-lg);
}

.highlight-row .icon-tile {
  padding: 0.75rem;
  border-radius: var(--radius-xl);
}

.tile-fuchsia { background: rgba(217, 70, 239, 0.1); border: 1px solid rgba(217, 70, 239, 0.2); color: var(--fuchsia-soft); }
.tile-indigo { background: rgba(99, 102, 241, 0.1); border: 1px solid rgba(99, 102, 241, 0.2); color: var(--indigo-soft); }
.tile-cyan { background: rgba(6, 182, 212, 0.1); border: 1px solid rgba(6, 182, 212, 0.2); color: var(--cyan-soft); }

.card-orb {
  position: absolute;
  width: 10rem;
  height: 10rem;
  border-radius: 9999px;
  filter: blur(40px);
  pointer-events: none;
}

.orb-fuchsia { bottom: -2.5rem; right: -2.5rem; background: rgba(217, 70, 239, 0.1); }
.orb-cyan { bottom: -4rem; right: -4rem; background: rgba(6, 182, 212, 0.1); }

/* === About === */
.stat-grid {
  margin-top: 1.5rem;
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
  font-size: 0.875rem;
}

.stat-tile {
  border-radius: var(--radius-xl);
  background: var(--glass);
  border: 1px solid var(--hairline);
  padding: 1rem;
}

.stat-label { color: var(--text-60); }
.stat-value { color: var(--white); font-weight: 600; font-size: 1.25rem; }

.highlight-row {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.highlight-row + .highlight-row {
  margin-top: 1rem;
}

.highlight-row .card-meta {
  color: var(--text-70);
}

/* === Skills === */
.skill-card {
  background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0.02));
  padding: 1.25rem;
}

.skill-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

.skill-name { color: var(--text-90); font-weight: 500; }
.skill-level { color: var(--text-60); font-size: 0.875rem; }

.skill-track {
  height: 0.625rem;
  border-radius: 9999px;
  background: var(--glass-strong);
  overflow: hidden;
}

.skill-fill {
  height: 100%;
  border-radius: 9999px;
  background: linear-gradient(to right, var(--fuchsia), var(--violet), var(--cyan));
  transition-property: width;
  transition-timing-function: ease-out;
}

.tag-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.page-section > .container > .tag-row {
  margin-top: 2rem;
}

.project-card .tag-row {
  margin-bottom: 1rem;
}

/* === Experience & Education === */
.experience-card .card-meta,
.education-card .card-meta {
  margin-bottom: 0.75rem;
}

.achievements {
  list-style: disc inside;
  color: var(--text-70);
}

.achievements li + li {
  margin-top: 0.25rem;
}

/* === Projects === */
.project-card {
  display: block;
}

.project-card .card-head {
  margin-bottom: 0.75rem;
}

.project-card .body-text {
  margin-bottom: 1rem;
}

.card-sheen {
  position: absolute;
  inset: 1px;
  border-radius: var(--radius-2xl);
  background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.1), transparent);
  opacity: 0;
  transition: opacity var(--transition-fast);
  pointer-events: none;
}

.project-card:hover .card-sheen { opacity: 1; }

.explore {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-80);
}

.project-card:hover .explore { color: var(--white); }

/* === Testimonials === */
.quote-card {
  display: flex;
  flex-direction: column;
}

.quote-mark { color: rgba(255, 255, 255, 0.3); }
.quote-text { margin-top: 0.75rem; color: var(--text-80); }
.quote-attribution { margin-top: 1rem; font-size: 0.875rem; color: var(--text-60); }

/* === Contact === */
.contact-form {
  padding: 1.5rem;
}

.form-grid {
  display: grid;
  gap: 1rem;
}

@media (min-width: 640px) {
  .form-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

.form-grid + .form-field {
  margin-top: 1rem;
}

.form-label {
  font-size: 0.875rem;
  color: var(--text-70);
}

.form-control {
  margin-top: 0.25rem;
  width: 100%;
  border-radius: var(--radius-lg);
  background: rgba(0, 0, 0, 0.4);
  border: 1px solid var(--hairline);
  padding: 0.5rem 0.75rem;
  color: var(--white);
  font: inherit;
}

.form-control::placeholder { color: rgba(255, 255, 255, 0.4); }

.form-control:focus {
  outline: none;
  box-shadow: 0 0 0 2px rgba(217, 70, 239, 0.4);
}

.form-submit { margin-top: 1.25rem; }

.form-note {
  margin-top: 0.75rem;
  font-size: 0.75rem;
  color: var(--text-50);
}

.connect-links {
  margin-top: 1rem;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
}

.card-gradient-cool .body-text { margin-top: 0.5rem; }

/* === Footer === */
.site-footer {
  position: relative;
  padding: 2.5rem 0;
  border-top: 1px solid var(--hairline);
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-50);
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(var(--reveal-offset, 12px));
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
  transition-delay: var(--reveal-delay, 0ms);
}

.reveal.revealed {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .reveal,
  .hero-copy,
  .hero-badge,
  .mobile-menu,
  .skill-fill {
    transition: none;
    animation: none;
    opacity: 1;
    transform: none;
  }
}
"#;

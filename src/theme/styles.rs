//! Global CSS styles for the Love Week card.
//!
//! Blush paper, rose accents, handwritten headings.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Caveat:wght@400;600&family=Dancing+Script:wght@500;600;700&family=Inter:wght@400;500;600&display=swap');

/* === CSS Custom Properties === */
:root {
  /* BACKGROUNDS */
  --blush: #F6E7E7;
  --petal: #F9D6D6;
  --card-white: #FFFDFB;

  /* ACCENTS */
  --rose: #E86A6A;
  --rose-light: #F08080;
  --rose-glow: rgba(232, 106, 106, 0.5);

  /* TEXT */
  --cocoa: #5A3A3A;
  --mauve: #8F6B6B;

  /* Typography */
  --font-dancing: 'Dancing Script', cursive;
  --font-caveat: 'Caveat', cursive;
  --font-inter: 'Inter', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: auto;
}

body {
  background: var(--blush);
  color: var(--cocoa);
  font-family: var(--font-inter);
  overflow-x: hidden;
  -webkit-font-smoothing: antialiased;
}

img {
  display: block;
  max-width: 100%;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 3rem;
  transition: all var(--transition-slow);
}

.navbar.scrolled {
  padding: 0.75rem 3rem;
  background: rgba(246, 231, 231, 0.9);
  backdrop-filter: blur(12px);
  box-shadow: 0 2px 20px rgba(90, 58, 58, 0.08);
}

.nav-logo {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
  background: none;
  border: none;
}

.nav-logo-text {
  font-family: var(--font-dancing);
  font-size: 1.75rem;
  font-weight: 600;
  color: var(--cocoa);
  transition: color var(--transition-normal);
}

.navbar.scrolled .nav-logo-text { color: var(--rose); }

.nav-links {
  display: flex;
  align-items: center;
  gap: 2rem;
}

.nav-link {
  position: relative;
  background: none;
  border: none;
  cursor: pointer;
  font-family: var(--font-inter);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--cocoa);
  transition: color var(--transition-normal);
}

.nav-link:hover { color: var(--rose); }

.nav-link::after {
  content: '';
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background: var(--rose);
  transition: width var(--transition-normal);
}

.nav-link:hover::after { width: 100%; }

.nav-recipient {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-caveat);
  font-size: 1.125rem;
  color: var(--mauve);
}

.nav-avatar {
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--rose), var(--rose-light));
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 4px 12px rgba(232, 106, 106, 0.3);
}

@media (max-width: 1023px) {
  .nav-links { display: none; }
  .navbar, .navbar.scrolled { padding-left: 1.5rem; padding-right: 1.5rem; }
}

/* === Pinned sections === */
.pin-wrapper {
  position: relative;
}

.pin-inner {
  position: sticky;
  top: 0;
  height: 100vh;
  overflow: hidden;
}

.section-pinned {
  position: relative;
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--blush);
}

.anchor-marker {
  position: absolute;
  top: 0;
  left: 0;
  width: 1px;
  height: 100vh;
  pointer-events: none;
}

.heart-watermark {
  opacity: 0.08;
}

/* === Hero === */
.hero-content {
  position: relative;
  z-index: 10;
  text-align: center;
  padding: 0 1.5rem;
}

.hero-headline {
  font-family: var(--font-dancing);
  font-size: clamp(4rem, 12vw, 9rem);
  font-weight: 700;
  color: var(--cocoa);
  line-height: 1;
}

.headline-char { display: inline-block; }

.hero-subhead {
  margin-top: 1rem;
  font-family: var(--font-caveat);
  font-size: clamp(1.5rem, 3vw, 2.25rem);
  color: var(--mauve);
}

.hero-cta {
  margin-top: 2.5rem;
  padding: 0.9rem 2.25rem;
  border: none;
  border-radius: 999px;
  background: var(--rose);
  color: white;
  font-family: var(--font-inter);
  font-weight: 600;
  cursor: pointer;
  box-shadow: 0 10px 30px rgba(232, 106, 106, 0.35);
  transition: box-shadow var(--transition-normal);
}

.hero-cta:hover { box-shadow: 0 14px 40px var(--rose-glow); }

.hero-date {
  position: absolute;
  top: 7rem;
  right: 3rem;
}

.hero-hint {
  position: absolute;
  bottom: 2.5rem;
  left: 50%;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
  margin-left: -3rem;
  width: 6rem;
  font-size: 0.75rem;
  color: var(--mauve);
}

/* === Love week === */
.day-row {
  position: relative;
  z-index: 10;
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 3rem;
  padding: 0 1.5rem;
}

.photo-card {
  position: relative;
  width: 38vw;
  height: 64vh;
  border-radius: 1.5rem;
  overflow: hidden;
  box-shadow: 0 30px 60px rgba(90, 58, 58, 0.18);
}

.photo-card img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.photo-card-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(90, 58, 58, 0.1), transparent);
}

.note-column { position: relative; }

.day-badge {
  display: inline-block;
  padding: 0.35rem 1rem;
  border-radius: 999px;
  background: white;
  color: var(--rose);
  font-family: var(--font-caveat);
  font-size: 1.25rem;
  font-weight: 600;
  box-shadow: 0 4px 14px rgba(232, 106, 106, 0.2);
}

.note-column .day-badge {
  position: absolute;
  top: -2.5rem;
  left: 0;
}

.love-card {
  width: 40vw;
  min-height: 56vh;
  padding: 2.5rem;
  border-radius: 1.5rem;
  background: var(--card-white);
  box-shadow: 0 24px 50px rgba(90, 58, 58, 0.12);
}

.love-card-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.icon-bubble {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: rgba(232, 106, 106, 0.1);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--rose);
}

.love-card-title {
  font-family: var(--font-dancing);
  font-size: 3rem;
  font-weight: 700;
  color: var(--cocoa);
}

.love-card-body {
  font-size: 1.125rem;
  line-height: 1.7;
  margin-bottom: 2rem;
}

.signature {
  text-align: right;
  font-family: var(--font-caveat);
  font-size: 1.5rem;
  color: var(--rose);
}

@media (max-width: 1023px) {
  .day-row { flex-direction: column; gap: 2rem; }
  .photo-card { width: 86vw; height: 44vh; }
  .love-card { width: 86vw; min-height: auto; padding: 2rem; }
}

/* === Section headings === */
.section-heading {
  font-family: var(--font-dancing);
  font-size: clamp(2.5rem, 5vw, 4rem);
  font-weight: 700;
  color: var(--cocoa);
  text-align: center;
}

.section-subheading {
  margin-top: 0.75rem;
  font-family: var(--font-caveat);
  font-size: 1.5rem;
  color: var(--mauve);
  text-align: center;
}

/* === Special === */
.special {
  position: relative;
  padding: 8rem 1.5rem;
  background: var(--blush);
  overflow: hidden;
}

.pill-cloud {
  position: relative;
  max-width: 64rem;
  height: 60vh;
  margin: 3rem auto 0;
}

.love-pill {
  position: absolute;
  padding: 0.6rem 1.4rem;
  border-radius: 999px;
  background: white;
  color: var(--cocoa);
  font-family: var(--font-caveat);
  font-size: 1.35rem;
  white-space: nowrap;
  box-shadow: 0 8px 24px rgba(232, 106, 106, 0.15);
}

/* === Gallery === */
.gallery {
  position: relative;
  padding: 8rem 1.5rem;
  background: var(--petal);
}

.gallery-grid {
  max-width: 72rem;
  margin: 4rem auto 0;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 2rem;
}

.gallery-card {
  padding: 0.75rem 0.75rem 1.25rem;
  background: white;
  border-radius: 0.75rem;
  box-shadow: 0 18px 40px rgba(90, 58, 58, 0.14);
}

.gallery-photo {
  aspect-ratio: 4 / 5;
  overflow: hidden;
  border-radius: 0.5rem;
}

.gallery-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow);
}

.gallery-photo img.rotated { transform: rotate(90deg); }

.gallery-caption {
  margin-top: 0.75rem;
  text-align: center;
  font-family: var(--font-caveat);
  font-size: 1.35rem;
  color: var(--mauve);
}

/* === Finale === */
.finale {
  position: relative;
  min-height: 100vh;
  padding: 6rem 1.5rem;
  background: var(--petal);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.finale-decor {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.finale-content {
  position: relative;
  z-index: 10;
  text-align: center;
  max-width: 56rem;
}

.finale-heart-box {
  position: relative;
  display: inline-block;
  margin-bottom: 2.5rem;
}

.finale-heart {
  width: 14rem;
  height: 14rem;
  cursor: pointer;
  transition: filter var(--transition-normal);
}

.finale-heart:hover { filter: drop-shadow(0 0 30px var(--rose-glow)); }

.burst-heart {
  position: absolute;
  width: 1.5rem;
  height: 1.5rem;
  pointer-events: none;
  animation: burst-rise 1s ease-out forwards;
}

.click-counter {
  position: absolute;
  top: -0.5rem;
  right: -0.5rem;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: white;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--rose);
  box-shadow: 0 6px 16px rgba(90, 58, 58, 0.15);
  animation: bounce 1s infinite;
}

.finale-message {
  font-family: var(--font-dancing);
  font-size: clamp(2.25rem, 5vw, 3.75rem);
  font-weight: 700;
  color: var(--cocoa);
  margin-bottom: 1.5rem;
}

.finale-footer {
  font-family: var(--font-caveat);
  font-size: 1.5rem;
  color: var(--mauve);
}

.finale-row {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-top: 2.5rem;
}

.finale-hint {
  margin-top: 2rem;
  font-size: 0.875rem;
  color: rgba(143, 107, 107, 0.7);
}

/* === Ambient decoration === */
.floating-hearts {
  position: fixed;
  inset: 0;
  z-index: 1;
  pointer-events: none;
  overflow: hidden;
}

.floating-heart {
  position: absolute;
}

.sparkle {
  position: absolute;
  animation: twinkle 3s ease-in-out infinite;
}

.float-slow { animation: float 6s ease-in-out infinite; }
.pulse { animation: pulse 2s ease-in-out infinite; }
.bounce { animation: bounce 1s infinite; }

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-12px); }
}

@keyframes twinkle {
  0%, 100% { opacity: 0.2; transform: scale(0.8); }
  50% { opacity: 1; transform: scale(1.1); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

@keyframes bounce {
  0%, 100% { transform: translateY(-20%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

@keyframes burst-rise {
  0% { opacity: 1; transform: translate(-50%, -50%) scale(0.6); }
  100% { opacity: 0; transform: translate(-50%, -180%) scale(1.2); }
}
"#;

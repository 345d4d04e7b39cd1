//! Global CSS styles for the member card host.
//!
//! Per-frame values (transforms, gradients, opacities) are inline styles
//! computed from the visual tree; this sheet only holds static layout.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Typography */
  --font-sans: -apple-system, 'SF Pro Display', 'Inter', 'Segoe UI', sans-serif;
  --font-mono: 'SF Mono', 'JetBrains Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.6875rem;
  --text-sm: 0.8125rem;
  --text-lg: 1.25rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body, #main {
  width: 100%;
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

/* === Host === */
.card-host {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  touch-action: none;
  user-select: none;
  -webkit-user-select: none;
}

/* === Card === */
.member-card {
  position: relative;
  width: 100%;
  cursor: grab;
  transform-origin: center center;
  will-change: transform;
}

.member-card__layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.member-card__svg {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  overflow: visible;
  pointer-events: none;
}

/* === Content === */
.member-card__content {
  display: flex;
  flex-direction: column;
  padding: 22px 24px;
}

.member-card__header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
}

.member-card__name {
  font-size: var(--text-lg);
  font-weight: 600;
  letter-spacing: 0.01em;
}

.member-card__followers {
  margin-top: 4px;
  font-size: var(--text-sm);
}

.member-card__stars {
  font-size: var(--text-sm);
  letter-spacing: 2px;
}

.member-card__spacer {
  flex: 1;
}

.member-card__footer {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
}

.member-card__id {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  letter-spacing: 0.08em;
}

.member-card__label {
  display: block;
  margin-top: 6px;
  font-size: var(--text-xs);
  letter-spacing: 0.12em;
  text-transform: uppercase;
}

.member-card__tier {
  display: flex;
  align-items: center;
  gap: 6px;
  font-size: var(--text-sm);
  font-weight: 700;
  letter-spacing: 0.14em;
}
"#;

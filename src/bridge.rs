//! Window bridge.
//!
//! A small script evaluated once in the webview reports scroll offsets and
//! layout measurements to Rust and performs the scrolls Rust asks for.
//! Elements that triggers or anchors refer to carry a `data-measure`
//! attribute holding their element key.

use lovecard_core::layout::PageLayout;
use serde::{Deserialize, Serialize};

pub const SCROLL_BRIDGE: &str = r#"
const measure = () => {
  const rects = {};
  document.querySelectorAll('[data-measure]').forEach((el) => {
    const r = el.getBoundingClientRect();
    rects[el.dataset.measure] = { top: r.top + window.scrollY, height: r.height };
  });
  dioxus.send({
    kind: 'layout',
    viewport: { width: window.innerWidth, height: window.innerHeight },
    document_height: document.documentElement.scrollHeight,
    rects,
  });
};

let queued = false;
window.addEventListener('scroll', () => {
  if (queued) return;
  queued = true;
  requestAnimationFrame(() => {
    queued = false;
    dioxus.send({ kind: 'scroll', y: window.scrollY });
  });
}, { passive: true });
window.addEventListener('resize', () => requestAnimationFrame(measure));
window.addEventListener('load', () => requestAnimationFrame(measure));
document.querySelectorAll('img').forEach((img) => {
  if (!img.complete) img.addEventListener('load', () => requestAnimationFrame(measure), { once: true });
});

requestAnimationFrame(measure);
dioxus.send({ kind: 'scroll', y: window.scrollY });

while (true) {
  const cmd = await dioxus.recv();
  if (cmd.kind === 'scroll_to') {
    window.scrollTo(0, cmd.y);
  } else if (cmd.kind === 'measure') {
    measure();
  }
}
"#;

/// Messages from the webview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeMessage {
    Scroll { y: f64 },
    Layout(PageLayout),
}

/// Requests to the webview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeCommand {
    ScrollTo { y: f64 },
    Measure,
}

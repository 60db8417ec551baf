use std::time::{Duration, Instant};

use dioxus::prelude::*;
use futures::StreamExt;
use lovecard_core::sections;
use lovecard_core::{nav, Frame, ScrollSession, LOVE_DAYS};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::bridge::{BridgeCommand, BridgeMessage, SCROLL_BRIDGE};
use crate::components::{Finale, FloatingHearts, Gallery, Hero, LoveDaySection, Navbar, Special};
use crate::context::{CardContext, PageCommand};
use crate::driver::ScrollDriver;
use crate::theme::GLOBAL_STYLES;

/// Frame cadence of the scroll driver.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Root application component.
///
/// Owns the scroll session, runs the snap coordinator once every section
/// has registered, and drives frames from window scroll reports.
#[component]
pub fn App() -> Element {
    let card = use_hook(|| {
        let config = crate::card_config();
        CardContext {
            session: ScrollSession::new(sections::participants(), config.clone()),
            config,
        }
    });
    use_context_provider(|| card.clone());

    let mut frame: Signal<Frame> = use_signal(Frame::default);
    let mut scroll_y: Signal<f64> = use_signal(|| 0.0);
    use_context_provider(|| frame);
    use_context_provider(|| ReadOnlySignal::new(scroll_y));

    // Coordinate once, after every section and the first layout report
    let session = card.session.clone();
    use_hook(move || {
        spawn(async move {
            let outcome = session.coordinate().await;
            info!(?outcome, "snap coordinator finished");
        });
    });

    let session = card.session.clone();
    let scroll_end = card.config.scroll_end();
    use_coroutine(move |mut commands: UnboundedReceiver<PageCommand>| {
        let session = session.clone();
        async move {
            let mut bridge = document::eval(SCROLL_BRIDGE);
            let mut driver = ScrollDriver::new(scroll_end);
            let mut ticker = tokio::time::interval(FRAME_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    msg = bridge.recv::<BridgeMessage>() => match msg {
                        Ok(BridgeMessage::Scroll { y }) => driver.on_scroll(y, Instant::now()),
                        Ok(BridgeMessage::Layout(layout)) => {
                            debug!(
                                document_height = layout.document_height,
                                measured = layout.rects.len(),
                                "layout measured"
                            );
                            session.set_layout(layout);
                        }
                        Err(e) => {
                            warn!("scroll bridge closed: {:?}", e);
                            break;
                        }
                    },
                    Some(command) = commands.next() => match command {
                        PageCommand::JumpTo(anchor) => {
                            let target = session
                                .layout()
                                .and_then(|layout| nav::anchor_offset(&layout, anchor));
                            match target {
                                Some(y) => driver.jump_to(y, Instant::now()),
                                None => {
                                    debug!(%anchor, "anchor not measured yet");
                                    if let Err(e) = bridge.send(BridgeCommand::Measure) {
                                        warn!("measure request failed: {:?}", e);
                                    }
                                }
                            }
                        }
                    },
                    _ = ticker.tick() => {
                        let tick = driver.tick(Instant::now(), &session);
                        if let Some(y) = tick.scroll_to {
                            if let Err(e) = bridge.send(BridgeCommand::ScrollTo { y }) {
                                warn!("scroll request failed: {:?}", e);
                            }
                        }

                        let next = session.frame(driver.scroll_y(), tick.dt);
                        if *frame.peek() != next {
                            frame.set(next);
                        }
                        if *scroll_y.peek() != driver.scroll_y() {
                            scroll_y.set(driver.scroll_y());
                        }
                    }
                }
            }
        }
    });

    // Scopes revert as their sections unmount; this catches the snap
    // observer and a coordinator that never ran
    let session = card.session.clone();
    use_drop(move || {
        session.teardown();
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        FloatingHearts {}
        Navbar {}
        main {
            Hero {}
            for index in 0..LOVE_DAYS.len() {
                LoveDaySection { key: "{index}", index }
            }
            Special {}
            Gallery {}
            Finale {}
        }
    }
}

//! Card Host Component
//!
//! Full-bleed dark backdrop with one member card centered in it. The host
//! owns the card's [`InteractionController`], runs its frame loop and routes
//! pointer input into it.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use membercard_core::{
    render, InteractionController, MonotonicClock, Size, TracingFeedback, UnitPoint, VisualTree,
};

use crate::components::MemberCard;
use crate::context::use_card_config;

/// Frame loop interval (~60 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Card position and size in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CardRect {
    origin: UnitPoint,
    size: Size,
}

impl CardRect {
    /// Pointer location relative to the card's top-left corner.
    fn local(&self, client: UnitPoint) -> UnitPoint {
        UnitPoint::new(client.x - self.origin.x, client.y - self.origin.y)
    }
}

/// Which pointer-down is current and whether it is still held.
///
/// A press is only applied once the card has been measured, which takes a
/// round trip to the webview. The pointer can be lifted in the meantime;
/// the gate lets the late measurement see that and drop the press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PressGate {
    latest: u64,
    held: bool,
}

impl PressGate {
    /// Record a pointer-down and return its sequence number.
    fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.held = true;
        self.latest
    }

    fn end(&mut self) {
        self.held = false;
    }

    /// True if `press` is the latest pointer-down and it is still held.
    fn admits(&self, press: u64) -> bool {
        self.held && self.latest == press
    }
}

/// Feed one pointer sample into the controller.
fn track_pointer(
    mut controller: Signal<InteractionController>,
    rect: Option<CardRect>,
    client: UnitPoint,
) {
    let Some(rect) = rect else {
        tracing::trace!("Pointer sample before card was measured");
        return;
    };
    controller
        .write()
        .on_pointer_change(rect.local(client), rect.size);
}

/// End the current press, if any, including one still being measured.
fn release_pointer(
    mut controller: Signal<InteractionController>,
    mut press_gate: Signal<PressGate>,
) {
    press_gate.write().end();
    controller.write().on_pointer_release();
}

/// Card Host
///
/// Pointer-down is taken on the card itself; move and up are taken on the
/// backdrop so a drag that leaves the card keeps tracking (clamped to the
/// card's edges) until the pointer is lifted.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardHost {}
/// }
/// ```
#[component]
pub fn CardHost() -> Element {
    let config = use_card_config();

    let mut controller = use_signal({
        let config = config.clone();
        move || InteractionController::new(&config, MonotonicClock::new(), TracingFeedback)
    });
    let mut tree: Signal<VisualTree> = use_signal({
        let config = config.clone();
        move || render(&controller.peek().snapshot(), &config)
    });
    let mut card_element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut card_rect: Signal<Option<CardRect>> = use_signal(|| None);
    let mut press_gate: Signal<PressGate> = use_signal(PressGate::default);

    // Frame loop: fire due timers, sample animations, re-render
    let frame_config = config.clone();
    use_future(move || {
        let config = frame_config.clone();
        async move {
            loop {
                tokio::time::sleep(FRAME_INTERVAL).await;
                let snapshot = {
                    let mut controller = controller.write();
                    controller.tick();
                    controller.snapshot()
                };
                tree.set(render(&snapshot, &config));
            }
        }
    });

    // Stop drivers and pending timers on unmount
    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.teardown();
        }
    });

    let on_press = move |evt: PointerEvent| {
        let client = evt.client_coordinates();
        let client = UnitPoint::new(client.x, client.y);
        let press = press_gate.write().begin();
        spawn(async move {
            // Re-measure on every press: the window may have been resized
            let element = (*card_element.peek()).clone();
            if let Some(element) = element {
                match element.get_client_rect().await {
                    Ok(rect) => card_rect.set(Some(CardRect {
                        origin: UnitPoint::new(rect.origin.x, rect.origin.y),
                        size: Size::new(rect.size.width, rect.size.height),
                    })),
                    Err(e) => tracing::warn!("Failed to measure card: {:?}", e),
                }
            }
            if !press_gate.peek().admits(press) {
                tracing::debug!(press, "Pointer lifted before the card was measured");
                return;
            }
            track_pointer(controller, *card_rect.peek(), client);
        });
    };

    let on_move = move |evt: PointerEvent| {
        if !controller.peek().state().pressed {
            return;
        }
        let client = evt.client_coordinates();
        track_pointer(controller, *card_rect.peek(), UnitPoint::new(client.x, client.y));
    };

    let backdrop = config.palette.backdrop.css();
    let inset = config.layout.horizontal_inset;

    rsx! {
        div {
            class: "card-host",
            style: "background: {backdrop}; padding: 0 {inset}px;",
            onpointermove: on_move,
            onpointerup: move |_| release_pointer(controller, press_gate),
            onpointercancel: move |_| release_pointer(controller, press_gate),
            onpointerleave: move |_| release_pointer(controller, press_gate),

            MemberCard {
                tree: tree(),
                on_press: on_press,
                on_mounted: move |evt: MountedEvent| {
                    card_element.set(Some(evt.data()));
                },
            }
        }
    }
}

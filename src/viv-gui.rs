//! RVIV Volume Viewer GUI Application
//!
//! Interactive control panel for a medical-image rendering session built on
//! the egui framework. The session lives in an event-driven store; panels
//! render from read-only snapshots and dispatch typed events, while the
//! transfer-function widget is driven through a comparator-gated effect
//! bridge.
//!
//! The application is built with a modular architecture:
//! - `rviv::state` - Session state components
//! - `rviv::store` - Typed events and the reducer store
//! - `rviv::select` - Selector/comparator subscription framework
//! - `rviv::bridge` - Effect bridges and the mount registry
//! - `rviv::domain` - Plane policy, color range math, control liveness
//! - `app/` - GUI coordinators: scroll playback, demo session
//! - `ui/` - Panel rendering and interaction collection

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod ui;

use app::{build_demo_session, ScrollPlayback};
use rviv::select::selectors;
use rviv::{Binding, Event, MountRegistry, SessionState, Store, TransferFunctionBridge};
use ui::transfer_function_panel::{EguiTransferFunctionWidget, TRANSFER_FUNCTION_MOUNT};

/// Scroll playback advances fifteen times per second.
const SCROLL_INTERVAL_SECONDS: f64 = 1.0 / 15.0;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("RVIV Volume Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "RVIV Volume Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
    )
}

/// The viewer application: store, bridge, mount registry and playback.
struct ViewerApp {
    /// Single owner of the session state
    store: Store,
    /// Effect bridge driving the transfer-function widget
    bridge: TransferFunctionBridge<EguiTransferFunctionWidget>,
    /// Mount targets registered by the layout, keyed by logical name
    mounts: MountRegistry<egui::Rect>,
    /// Scroll playback ticker
    playback: ScrollPlayback,
    /// Subscription used to log scroll playback transitions
    scrolling: Binding<[bool; 3]>,
}

impl ViewerApp {
    fn new() -> Self {
        let session = match build_demo_session() {
            Ok(session) => session,
            Err(error) => {
                log::warn!("failed to build demo session, starting empty: {error:#}");
                SessionState::new()
            }
        };
        Self {
            store: Store::new(session),
            bridge: TransferFunctionBridge::new(),
            mounts: MountRegistry::new(),
            playback: ScrollPlayback::new(SCROLL_INTERVAL_SECONDS),
            scrolling: Binding::new(selectors::select_plane_scrolling),
        }
    }
}

impl eframe::App for ViewerApp {
    /// Main update loop:
    /// 1. Handle keyboard shortcuts and playback ticking
    /// 2. Sync the effect bridge so the widget paints current data
    /// 3. Render panels and dispatch the events they report
    /// 4. Mount or unmount the widget as its target appears or disappears
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|input| input.key_pressed(egui::Key::P)) {
            self.store.dispatch(Event::ToggleRotate);
        }

        let now = ctx.input(|input| input.time);
        let advances = self.playback.tick(now, self.store.state());
        self.store.dispatch_all(advances);

        self.bridge.sync(self.store.state());

        let events =
            ui::control_panel::render(ctx, self.store.state(), &mut self.mounts, self.bridge.widget());
        self.store.dispatch_all(events);

        if self.mounts.contains(TRANSFER_FUNCTION_MOUNT) {
            if !self.bridge.is_mounted() {
                // Construct-once; mount replays the latest derived views.
                self.bridge.mount(EguiTransferFunctionWidget::default());
            }
        } else if self.bridge.is_mounted() {
            self.bridge.unmount();
        }

        if let Some(flags) = self.scrolling.poll(self.store.state()) {
            log::debug!("scroll playback per axis: {flags:?}");
        }

        if self.store.state().planes.any_scrolling() {
            ctx.request_repaint();
        }
    }
}

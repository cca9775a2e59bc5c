//! Analog watch face simulator for desktop.
//!
//! Runs the face in an embedded-graphics-simulator window. Battery, bluetooth
//! and the companion app's config messages are driven from the keyboard (see
//! [`input`]); the clock is the host's local time.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod clock;
mod device;
mod input;
mod pages;
mod resources;
mod screens;
mod timing;
mod vibration;

use std::path::Path;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PointsIter;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::config::SCREEN_RECT;
use watchface_common::{
    AppState,
    Clock,
    Dictionary,
    Event,
    FaceAssets,
    LogBuffer,
    RenderState,
    TickTimer,
    Transition,
    log_debug,
    log_info,
};

use crate::clock::SystemClock;
use crate::device::{Device, malformed_message, toggled_message};
use crate::input::{Command, command_for};
use crate::pages::Page;
use crate::resources::{ASSET_DIR, Resources};
use crate::screens::draw_log_page;
use crate::timing::POLL_INTERVAL;
use crate::vibration::Pulse;

fn main() -> ExitCode {
    let resources = match Resources::load(Path::new(ASSET_DIR)) {
        Ok(resources) => resources,
        Err(err) => {
            eprintln!("simulator: {err}");
            return ExitCode::FAILURE;
        }
    };
    let assets = match resources.assets() {
        Ok(assets) => assets,
        Err(err) => {
            eprintln!("simulator: {err}");
            return ExitCode::FAILURE;
        }
    };

    Simulator::new(&assets).run();
    ExitCode::SUCCESS
}

/// Top-level controller. Sole owner of the application state.
struct Simulator<'a> {
    assets: &'a FaceAssets<'a>,
    clock: SystemClock,
    device: Device,
    app: AppState,
    render: RenderState,
    ticks: TickTimer,
    log: LogBuffer,
    page: Page,
    pulse: Option<Pulse>,
}

impl<'a> Simulator<'a> {
    fn new(assets: &'a FaceAssets<'a>) -> Self {
        let device = Device::new();
        let (battery, connected) = device.peek();
        let (app, boot) = AppState::boot(battery, connected);

        let mut sim = Self {
            assets,
            clock: SystemClock,
            device,
            app,
            render: RenderState::new(),
            ticks: TickTimer::new(),
            log: LogBuffer::new(),
            page: Page::default(),
            pulse: None,
        };
        log_info!(sim.log, "boot bat={}% bt={}", battery.percent, connected);
        sim.apply(boot);
        sim
    }

    fn run(mut self) {
        let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(SCREEN_RECT.size);
        let mut shown: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(SCREEN_RECT.size);
        let output_settings = OutputSettingsBuilder::new()
            .scale(2)
            .theme(BinaryColorTheme::LcdWhite)
            .build();
        let mut window = Window::new("Analog Watch Face", &output_settings);

        loop {
            let frame_start = Instant::now();

            if self.pulse.is_some_and(|pulse| pulse.is_expired()) {
                self.pulse = None;
            }

            match self.page {
                Page::Face => {
                    self.render.paint(&mut display, &self.app, &self.clock, self.assets);
                }
                Page::Log => draw_log_page(&mut display, &self.render, &self.log),
            }

            if self.pulse.is_some() {
                invert_into(&display, &mut shown);
                window.update(&shown);
            } else {
                window.update(&display);
            }

            for ev in window.events() {
                match ev {
                    SimulatorEvent::Quit => return,
                    SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                        if repeat {
                            continue;
                        }
                        if let Some(command) = command_for(keycode) {
                            self.handle(command);
                        }
                    }
                    _ => {}
                }
            }

            if self.ticks.poll(&self.clock.now()) {
                let transition = self.app.update(Event::Tick);
                self.apply(transition);
            }

            if let Some(rest) = POLL_INTERVAL.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    fn handle(
        &mut self,
        command: Command,
    ) {
        let transition = match command {
            Command::AdjustBattery(delta) => {
                let event = self.device.adjust_battery(delta);
                self.log_battery();
                self.app.update(event)
            }
            Command::ToggleCharging => {
                let event = self.device.toggle_charging();
                self.log_battery();
                self.app.update(event)
            }
            Command::ToggleBluetooth => {
                let event = self.device.toggle_bluetooth();
                log_info!(self.log, "bt: {}", self.device.peek().1);
                self.app.update(event)
            }
            Command::ToggleSetting(key) => {
                let tuples = toggled_message(&self.app.settings, key);
                self.app.ingest(&Dictionary::new(&tuples), &mut self.log)
            }
            Command::SendMalformedConfig => {
                let tuples = malformed_message(&self.app.settings);
                self.app.ingest(&Dictionary::new(&tuples), &mut self.log)
            }
            Command::TogglePage => {
                self.page = self.page.toggle();
                log_debug!(self.log, "page: {}", self.page.name());
                if self.page == Page::Face {
                    self.render.mark_display_cleared();
                }
                Transition::default()
            }
        };
        self.apply(transition);
    }

    fn log_battery(&mut self) {
        let (battery, _) = self.device.peek();
        log_info!(self.log, "bat: {}% chg={}", battery.percent, battery.charging);
    }

    /// Carry out the side effects of a state transition.
    fn apply(
        &mut self,
        transition: Transition,
    ) {
        if let Some(unit) = transition.resubscribe {
            self.ticks.subscribe(unit);
            log_debug!(self.log, "tick: {}", unit.name());
        }
        if transition.vibrate {
            self.pulse = Some(Pulse::start());
            log_info!(self.log, "vibe: long pulse");
        }
        self.render.request(transition.redraw);
    }
}

/// Copy `frame` into `out` with every pixel inverted.
fn invert_into(
    frame: &SimulatorDisplay<BinaryColor>,
    out: &mut SimulatorDisplay<BinaryColor>,
) {
    let pixels = frame
        .bounding_box()
        .points()
        .map(|point| Pixel(point, frame.get_pixel(point).invert()));
    out.draw_iter(pixels).ok();
}

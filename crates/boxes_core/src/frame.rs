//! Frame loop
//!
//! One call to `FrameLoop::run_frame` is one iteration of the program:
//!
//! 1. clear the canvas to the background color
//! 2. drop entities marked dead during the previous frame
//! 3. dispatch the frame's input event (quit / pointer down / pointer up)
//! 4. spawn a box under the pointer if armed and the throttle allows it
//! 5. once per second, produce a title with fps and object count
//! 6. step and draw every live entity, marking the dead ones
//!
//! Presenting the canvas is left to the caller, which owns the surface.

use crate::canvas::Canvas;
use crate::entity::Rect;
use crate::factory::EntityFactory;
use crate::input::InputEvent;
use crate::lifecycle::LifecycleManager;
use crate::settings::{Settings, SPAWN_SIZE_RANGE};
use crate::time::SpawnThrottle;
use boxes_metrics::FpsCounter;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Instant;

/// Result of a single frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutcome {
    /// False once a quit event has been seen.
    pub running: bool,
    /// New window title, set once per second.
    pub title: Option<String>,
}

pub struct FrameLoop {
    settings: Settings,
    factory: EntityFactory,
    lifecycle: LifecycleManager,
    throttle: SpawnThrottle,
    fps: FpsCounter,
    rng: StdRng,
    spawn_armed: bool,
    running: bool,
}

impl FrameLoop {
    /// `factory_rng` colors new boxes, `size_rng` picks their size.
    pub fn new(settings: Settings, factory_rng: StdRng, size_rng: StdRng, now: Instant) -> Self {
        let factory = EntityFactory::new(settings.first_entity_id, factory_rng);
        Self {
            settings,
            factory,
            lifecycle: LifecycleManager::new(),
            throttle: SpawnThrottle::new(now),
            fps: FpsCounter::new(now),
            rng: size_rng,
            spawn_armed: false,
            running: true,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn lifecycle(&self) -> &LifecycleManager {
        &self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_spawn_armed(&self) -> bool {
        self.spawn_armed
    }

    pub fn run_frame(
        &mut self,
        event: Option<InputEvent>,
        pointer: (i32, i32),
        now: Instant,
        canvas: &mut impl Canvas,
    ) -> FrameOutcome {
        canvas.clear(self.settings.background);

        self.lifecycle.remove_marked();

        match event {
            Some(InputEvent::Quit) => {
                tracing::info!("quit requested");
                self.running = false;
            }
            Some(InputEvent::PointerDown) => self.spawn_armed = true,
            Some(InputEvent::PointerUp) => self.spawn_armed = false,
            None => {}
        }

        if self.spawn_armed && self.throttle.try_spawn(now) {
            let size = self.rng.gen_range(SPAWN_SIZE_RANGE);
            let bounds = Rect::centered(pointer.0, pointer.1, size);
            let entity = self.factory.create(bounds, now);
            self.lifecycle.spawn(entity);
        }

        let title = self.fps.poll(now).map(|frames| {
            let objects = self.lifecycle.len();
            tracing::debug!(fps = frames, objects, "frame rate");
            format!("{}, fps={}, objects={}", self.settings.window.title, frames, objects)
        });

        self.lifecycle.step_all(now, self.settings.floor(), canvas);

        self.fps.record_frame();

        FrameOutcome {
            running: self.running,
            title,
        }
    }
}

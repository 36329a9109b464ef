/// Terminal front-end driving a glyph3d scene
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    terminal::{self, SetTitle},
};
use glyph3d_core::{CharGrid, Scene};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod config;
pub mod input;
pub mod renderer;
pub mod stl;

pub use config::{load_config, parse_config, ConfigLoadError};
pub use input::KeyTracker;
pub use renderer::GridPresenter;

const TARGET_FPS: u64 = 60;

/// Frame counter reporting once per second
#[derive(Debug)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count a frame; returns the new rate when a full second has passed
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        self.fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

pub fn window_title(title: &str, fps: f32) -> String {
    format!("{} - FPS: {:.2}", title, fps)
}

/// Main application struct: owns the terminal for the lifetime of `run`
pub struct TerminalApp<S: Scene> {
    scene: S,
    grid: CharGrid,
    presenter: GridPresenter,
    tracker: KeyTracker,
    enhanced_keys: bool,
    running: bool,
    counter: FpsCounter,
}

impl<S: Scene> TerminalApp<S> {
    pub fn new(mut scene: S) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        scene.initialize(i32::from(width), i32::from(height));
        let enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        tracing::info!(width, height, enhanced_keys, "terminal attached");

        Ok(Self {
            scene,
            grid: CharGrid::new(usize::from(width), usize::from(height)),
            presenter: GridPresenter::new(),
            tracker: KeyTracker::new(enhanced_keys),
            enhanced_keys,
            running: true,
            counter: FpsCounter::new(Instant::now()),
        })
    }

    /// Run until quit; the terminal is restored even when the loop fails
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let result = self.enter().and_then(|()| self.main_loop());
        let restored = self.leave();
        result.and(restored)
    }

    fn enter(&self) -> io::Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        if self.enhanced_keys {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        let mut stdout = stdout();
        if self.enhanced_keys {
            execute!(stdout, PopKeyboardEnhancementFlags)?;
        }
        execute!(
            stdout,
            DisableFocusChange,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / TARGET_FPS);
        let mut last_frame = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::ZERO)? {
                let event = event::read()?;
                self.handle_event(&event, Instant::now());
            }
            if !self.running {
                break;
            }

            // Update and draw
            let dt = frame_start.saturating_duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;
            let input = self.tracker.snapshot(frame_start);
            self.scene.update(dt, input, &mut self.grid);
            self.present()?;

            if let Some(fps) = self.counter.tick(Instant::now()) {
                execute!(stdout(), SetTitle(window_title(self.scene.title(), fps)))?;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        tracing::info!(fps = self.counter.fps(), "render loop stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: &Event, now: Instant) {
        if input::is_quit(event) {
            self.running = false;
            return;
        }
        if let Event::Resize(width, height) = *event {
            self.grid.resize(usize::from(width), usize::from(height));
            self.scene.initialize(i32::from(width), i32::from(height));
            tracing::debug!(width, height, "terminal resized");
            return;
        }
        self.tracker.handle(event, now);
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.presenter.draw(&self.grid, &mut stdout)?;
        stdout.flush()
    }
}

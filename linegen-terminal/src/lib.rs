/// Terminal front end driving the wireframe generator once per frame
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use linegen_core::{
    DepthCamera, LineGenConfig, RotationState, ShapeKind, ShapeParameters, WireframeEmitter,
    MAX_SEGMENTS,
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Degrees added per key press
const NUDGE_DEGREES: f32 = 5.0;

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    config: LineGenConfig,
    params: ShapeParameters,
    rotation: RotationState,
    emitter: WireframeEmitter<DepthCamera>,
    renderer: AsciiRenderer,
    target_fps: u32,
    running: bool,
    paused: bool,
    last_tick: Instant,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
    line_count: usize,
}

impl TerminalApp {
    pub fn new(config: LineGenConfig, camera: DepthCamera, target_fps: u32) -> Result<Self> {
        let params = config.shape_parameters();
        params.validate().context("invalid shape configuration")?;

        let (width, height) = terminal::size().context("failed to query terminal size")?;
        info!(?config, width, height, "starting terminal renderer");

        Ok(Self {
            rotation: config.rotation_state(),
            params,
            config,
            emitter: WireframeEmitter::new(camera),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            target_fps: target_fps.max(1),
            running: true,
            paused: false,
            last_tick: Instant::now(),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            line_count: 0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let target_frame_time = Duration::from_millis(1000 / self.target_fps as u64);
        self.last_tick = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            let dt = frame_start.duration_since(self.last_tick).as_secs_f32();
            self.last_tick = frame_start;
            self.update(dt);

            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_key(code),
            Event::Resize(width, height) => {
                self.renderer.resize(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Char('w') | KeyCode::Up => self.rotation.nudge(NUDGE_DEGREES, 0.0, 0.0),
            KeyCode::Char('s') | KeyCode::Down => self.rotation.nudge(-NUDGE_DEGREES, 0.0, 0.0),
            KeyCode::Char('a') | KeyCode::Left => self.rotation.nudge(0.0, -NUDGE_DEGREES, 0.0),
            KeyCode::Char('d') | KeyCode::Right => self.rotation.nudge(0.0, NUDGE_DEGREES, 0.0),
            KeyCode::Char('e') => self.rotation.nudge(0.0, 0.0, NUDGE_DEGREES),
            KeyCode::Char('r') => self.rotation.nudge(0.0, 0.0, -NUDGE_DEGREES),
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('+') | KeyCode::Char('=') => self.step_segments(1),
            KeyCode::Char('-') => self.step_segments(-1),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.set_shape(ShapeKind::ALL[index]);
            }
            _ => {}
        }
    }

    fn set_shape(&mut self, shape: ShapeKind) {
        self.config.shape = shape;
        self.params = self.config.shape_parameters();
        debug!(?shape, "shape changed");
    }

    fn step_segments(&mut self, delta: i32) {
        self.config.segments = stepped_segments(self.config.segments, delta);
        self.params = self.config.shape_parameters();
        debug!(segments = self.config.segments, "segments changed");
    }

    fn update(&mut self, dt: f32) {
        if !self.paused {
            self.rotation.advance(dt);
        }
    }

    fn render(&mut self) -> Result<()> {
        self.renderer.clear();
        self.line_count = self
            .emitter
            .emit(&self.params, &self.rotation, Some(&mut self.renderer))?;

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Linegen | {:?} x{} | {} lines | FPS: {:.1} | WASD/ER=Rotate 1-5=Shape +/-=Segments Space=Pause Q=Quit",
                self.config.shape, self.config.segments, self.line_count, self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Segment count after a `+`/`-` key press, kept within the valid range
fn stepped_segments(current: i32, delta: i32) -> i32 {
    current.saturating_add(delta).clamp(1, MAX_SEGMENTS)
}

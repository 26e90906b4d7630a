/// Frame scheduler
///
/// Drives the two update cadences of the locomotion controller: a fixed-rate
/// physics tick and a variable-rate visual update. Frame time is either read
/// from the wall clock (`begin_frame`) or supplied by the caller (`advance`)
/// so scripted runs and tests stay deterministic.
use std::time::{Duration, Instant};

/// Default physics tick rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Maximum number of physics ticks per frame to prevent spiral of death
pub const MAX_PHYSICS_STEPS: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Work the host should perform for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSteps {
    /// Number of fixed physics ticks to run, each of `fixed_dt` seconds
    pub fixed_steps: u32,
    /// Length of one fixed tick in seconds
    pub fixed_dt: f32,
    /// Elapsed time for the variable-rate update in seconds
    pub variable_dt: f32,
}

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time not yet consumed by fixed ticks
    accumulator: Duration,

    /// Length of one fixed tick
    fixed_timestep: Duration,

    /// Cap on fixed ticks per frame
    max_steps: u32,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total fixed ticks executed
    update_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop with the default tick rate
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            fixed_timestep: Duration::from_secs_f32(FIXED_TIMESTEP),
            max_steps: MAX_PHYSICS_STEPS,
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            update_count: 0,
            current_fps: 0.0,
        }
    }

    /// Set the fixed tick length in seconds
    pub fn with_fixed_timestep(mut self, seconds: f32) -> Self {
        if seconds > 0.0 && seconds.is_finite() {
            self.fixed_timestep = Duration::from_secs_f32(seconds);
        } else {
            log::warn!("Ignoring invalid fixed timestep {seconds}");
        }
        self
    }

    /// Set the maximum number of fixed ticks run per frame
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Begin a new frame using the wall clock
    pub fn begin_frame(&mut self) -> FrameSteps {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Begin a new frame that lasted `frame_time`
    pub fn advance(&mut self, frame_time: Duration) -> FrameSteps {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        let fixed_dt = self.fixed_timestep();

        // While paused nothing advances, not even the visual update
        if self.paused {
            return FrameSteps {
                fixed_steps: 0,
                fixed_dt,
                variable_dt: 0.0,
            };
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.fixed_timestep && steps < self.max_steps {
            self.accumulator -= self.fixed_timestep;
            steps += 1;
        }

        // Drop backlog that the step cap could not absorb
        if steps == self.max_steps && self.accumulator >= self.fixed_timestep {
            log::debug!(
                "Frame of {:.1} ms exceeded {} fixed steps, dropping backlog",
                frame_time.as_secs_f32() * 1000.0,
                self.max_steps
            );
            self.accumulator = Duration::ZERO;
        }

        self.update_count += steps as u64;
        FrameSteps {
            fixed_steps: steps,
            fixed_dt,
            variable_dt: frame_time.as_secs_f32(),
        }
    }

    /// Get the fixed tick length (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames started
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of fixed ticks executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

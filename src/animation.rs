use std::time::{Duration, Instant};

use crate::env::{Coord, Path};

/// Frame interval of a path replay
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(200);

struct Replay {
    path: Path,
    started: Instant,
    shown: usize,
}

/// Replays a path one coordinate per interval
///
/// Holds at most one replay: starting a new one cancels the previous, so two
/// replays never draw over each other. The owner drives it with [`Animator::tick`].
pub struct Animator {
    interval: Duration,
    replay: Option<Replay>,
}

impl Animator {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            replay: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.replay.is_some()
    }

    /// Cancel any running replay and start `path`
    ///
    /// **Returns** the first frame (a one-element prefix), or `None` for an empty path
    pub fn start(&mut self, path: Path, now: Instant) -> Option<Vec<Coord>> {
        self.cancel();
        let first = path.first().copied()?;
        if path.len() > 1 {
            self.replay = Some(Replay {
                path,
                started: now,
                shown: 1,
            });
        }
        Some(vec![first])
    }

    /// Stop the running replay, if any; returns whether one was running
    pub fn cancel(&mut self) -> bool {
        self.replay.take().is_some()
    }

    /// Advance the replay to `now`
    ///
    /// **Returns** the prefix to draw when a new frame is due. The replay ends
    /// once the full path has been returned.
    pub fn tick(&mut self, now: Instant) -> Option<Vec<Coord>> {
        let replay = self.replay.as_mut()?;
        let elapsed = now.saturating_duration_since(replay.started).as_nanos();
        let steps = elapsed / self.interval.as_nanos().max(1);
        let due = usize::try_from(steps)
            .unwrap_or(usize::MAX)
            .saturating_add(1)
            .min(replay.path.len());

        if due <= replay.shown {
            return None;
        }

        replay.shown = due;
        let frame = replay.path[..due].to_vec();
        if due == replay.path.len() {
            self.replay = None;
        }
        Some(frame)
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

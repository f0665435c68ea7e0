//! Host-side screen flow
//!
//! [`App`] is what a platform loop drives: it turns frame deltas and raw input
//! into session ticks, and owns the play/summary/exit screen state so the end
//! screen runs in the same tick loop as gameplay.

use glam::Vec2;

use crate::error::{SimResult, require_non_negative};
use crate::settings::GameConfig;
use crate::sim::{Bubble, Session, SpawnSource, SpawnTimer, Stats, TickInput, TickReport};

/// Which screen the host is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Bubbles on screen, HUD bar visible
    Playing,
    /// Lives exhausted; summary shown until any input arrives
    Summary,
    /// Host should close
    Exited,
}

/// Demo player: clicks the centre of the oldest live bubble every few ticks
#[derive(Debug, Clone)]
pub struct Autoplay {
    /// Ticks between clicks
    pub interval_ticks: u32,
    countdown: u32,
}

impl Autoplay {
    pub fn new(interval_ticks: u32) -> Self {
        let interval_ticks = interval_ticks.max(1);
        Self {
            interval_ticks,
            countdown: interval_ticks,
        }
    }

    /// Pick a click target for this tick, if one is due
    pub fn pick(&mut self, bubbles: &[Bubble]) -> Option<Vec2> {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return None;
        }
        self.countdown = self.interval_ticks;
        bubbles.first().map(|b| b.pos)
    }
}

#[derive(Debug)]
pub struct App {
    session: Session,
    timer: SpawnTimer,
    /// Clicks received since the last frame
    pending_clicks: Vec<Vec2>,
    /// Seconds of play, summed from frame deltas
    elapsed: f32,
    screen: Screen,
    autoplay: Option<Autoplay>,
}

impl App {
    pub fn new(config: GameConfig, seed: u64) -> SimResult<Self> {
        let timer = SpawnTimer::new(config.spawn_interval_secs());
        Ok(Self::from_session(Session::new(config, seed)?, timer))
    }

    /// Build around a custom spawn source (scripted demos and tests)
    pub fn with_spawner(config: GameConfig, spawner: Box<dyn SpawnSource>) -> SimResult<Self> {
        let timer = SpawnTimer::new(config.spawn_interval_secs());
        Ok(Self::from_session(
            Session::with_spawner(config, spawner)?,
            timer,
        ))
    }

    fn from_session(session: Session, timer: SpawnTimer) -> Self {
        Self {
            session,
            timer,
            pending_clicks: Vec::new(),
            elapsed: 0.0,
            screen: Screen::Playing,
            autoplay: None,
        }
    }

    /// Enable or disable the demo player
    pub fn set_autoplay(&mut self, autoplay: Option<Autoplay>) {
        self.autoplay = autoplay;
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Mouse button press at screen coordinates
    pub fn on_click(&mut self, pos: Vec2) {
        match self.screen {
            Screen::Playing => self.pending_clicks.push(pos),
            Screen::Summary => self.exit("click on summary"),
            Screen::Exited => {}
        }
    }

    /// Any key press
    pub fn on_key(&mut self) {
        if self.screen == Screen::Summary {
            self.exit("key on summary");
        }
    }

    /// Window close request
    pub fn on_close(&mut self) {
        self.exit("window closed");
    }

    fn exit(&mut self, reason: &str) {
        if self.screen != Screen::Exited {
            log::info!("Exiting ({})", reason);
            self.screen = Screen::Exited;
        }
    }

    /// Run one frame of `dt` seconds.
    ///
    /// Only the Playing screen ticks the session; the other screens just wait
    /// for input.
    pub fn frame(&mut self, dt: f32) -> SimResult<Option<TickReport>> {
        require_non_negative("dt", dt)?;
        if self.screen != Screen::Playing {
            return Ok(None);
        }

        let spawn_due = self.timer.advance(dt)?;
        self.elapsed += dt;

        let mut clicks = std::mem::take(&mut self.pending_clicks);
        if let Some(autoplay) = self.autoplay.as_mut() {
            clicks.extend(autoplay.pick(self.session.bubbles()));
        }

        let report = self.session.on_tick(&TickInput {
            elapsed: self.elapsed,
            dt,
            clicks,
            spawn_due,
        })?;

        if report.became_terminal {
            self.screen = Screen::Summary;
            for line in self.session.stats().summary_lines() {
                log::info!("{}", line);
            }
        }
        Ok(Some(report))
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_exit(&self) -> bool {
        self.screen == Screen::Exited
    }

    /// Process exit status (no failure path)
    pub fn exit_code(&self) -> i32 {
        0
    }

    pub fn stats(&self) -> Stats {
        self.session.stats()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        self.session.bubbles()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        self.session.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::ScriptedSpawner;

    fn quick_config() -> GameConfig {
        GameConfig {
            spawn_interval_ms: 250,
            growth_rate: 1.0,
            max_radius: 10.0,
            lives: 2,
            seed: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_spawns_on_timer() {
        let mut app = App::new(quick_config(), 1).unwrap();
        // 0.125 is exact in binary, so two frames make one interval
        assert_eq!(app.frame(0.125).unwrap().unwrap().spawned, None);
        assert_eq!(app.frame(0.125).unwrap().unwrap().spawned, Some(1));
        assert_eq!(app.bubbles().len(), 1);
        assert!((app.stats().elapsed - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_click_forwarded_to_session() {
        let center = Vec2::new(200.0, 200.0);
        let mut app =
            App::with_spawner(quick_config(), Box::new(ScriptedSpawner::new([center]))).unwrap();
        app.frame(0.125).unwrap();
        app.frame(0.125).unwrap();
        app.frame(0.01).unwrap();

        app.on_click(center);
        let report = app.frame(0.01).unwrap().unwrap();
        assert_eq!(report.hits, 1);
        assert_eq!(app.stats().hits, 1);
        assert_eq!(app.stats().total_clicks, 1);
    }

    #[test]
    fn test_summary_then_exit_on_key() {
        let mut app = App::new(quick_config(), 9).unwrap();
        let mut frames = 0;
        while app.screen() == Screen::Playing {
            app.frame(SIM_DT).unwrap();
            frames += 1;
            assert!(frames < 10_000, "session never ended");
        }
        assert_eq!(app.screen(), Screen::Summary);
        assert!(app.stats().is_terminal);

        // Summary screen does not tick
        let stats = app.stats();
        assert_eq!(app.frame(SIM_DT).unwrap(), None);
        assert_eq!(app.stats(), stats);

        app.on_key();
        assert!(app.should_exit());
        assert_eq!(app.exit_code(), 0);
    }

    #[test]
    fn test_click_on_summary_exits() {
        let mut app = App::new(quick_config(), 3).unwrap();
        while app.screen() == Screen::Playing {
            app.frame(SIM_DT).unwrap();
        }
        app.on_click(Vec2::new(10.0, 10.0));
        assert_eq!(app.screen(), Screen::Exited);
    }

    #[test]
    fn test_keys_while_playing_do_nothing() {
        let mut app = App::new(quick_config(), 3).unwrap();
        app.on_key();
        assert_eq!(app.screen(), Screen::Playing);
        app.on_close();
        assert_eq!(app.screen(), Screen::Exited);
        assert_eq!(app.frame(SIM_DT).unwrap(), None);
    }

    #[test]
    fn test_rejects_negative_frame() {
        let mut app = App::new(quick_config(), 3).unwrap();
        assert!(app.frame(-1.0).is_err());
    }

    #[test]
    fn test_autoplay_scores_hits() {
        let mut app = App::new(GameConfig::default(), 5).unwrap();
        app.set_autoplay(Some(Autoplay::new(10)));
        for _ in 0..600 {
            app.frame(SIM_DT).unwrap();
        }
        let stats = app.stats();
        assert!(stats.hits > 0);
        assert!(stats.total_clicks >= stats.hits);
    }

    #[test]
    fn test_autoplay_cadence() {
        let mut bot = Autoplay::new(3);
        let bubbles = vec![Bubble::new(1, Vec2::new(50.0, 60.0))];
        assert_eq!(bot.pick(&bubbles), None);
        assert_eq!(bot.pick(&bubbles), None);
        assert_eq!(bot.pick(&bubbles), Some(Vec2::new(50.0, 60.0)));
        assert_eq!(bot.pick(&[]), None);
    }
}

use std::{
    io,
    sync::mpsc::{Receiver, TryRecvError},
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyCode};
use log::{info, LevelFilter};
use ratatui::{prelude::*, widgets::*};
use tokio::runtime::Handle;

use super::{
    components::{
        help::render_help, notice::render_notice, Component, ControlBar, GridPanel, Logs,
        QGridPanel, RewardPlot, Selector, StatsPanel,
    },
    tui::Tui,
    util::event_keycode,
};
use crate::{
    animation::Animator,
    api::GridService,
    config::ClientConfig,
    dispatch::{Completion, Dispatcher},
    session::Session,
};

const TABS: [&str; 2] = ["Dashboard", "Logs"];

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    #[default]
    Running,
    Quit,
}

/// The root TUI component which holds the dashboard state and runs the render loop
pub struct App<S> {
    state: State,
    session: Session,
    animator: Animator,
    dispatcher: Dispatcher<S>,
    completions: Receiver<Completion>,
    grid_sizes: Selector<usize>,
    episodes: Selector<u32>,
    selected_tab: usize,
    show_help: bool,
    logs: Logs,
}

impl<S: GridService> App<S> {
    pub fn new(config: &ClientConfig, service: S, runtime: Handle) -> Self {
        let (dispatcher, completions) = Dispatcher::new(service, runtime);
        Self {
            state: State::default(),
            session: Session::new(),
            animator: Animator::new(config.frame_interval()),
            dispatcher,
            completions,
            grid_sizes: Selector::new(
                (config.min_grid_size..=config.max_grid_size).collect(),
                config.grid_size,
            ),
            episodes: Selector::new(config.episode_presets.clone(), config.episodes),
            selected_tab: 0,
            show_help: false,
            logs: Logs::new(LevelFilter::Trace),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn grid_size(&self) -> usize {
        self.grid_sizes.value()
    }

    pub fn episodes(&self) -> u32 {
        self.episodes.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Run the main loop until the user quits
    pub fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        info!("dashboard started, press h for help");
        loop {
            match self.state {
                State::Running => {
                    self.pump(Instant::now());

                    terminal.draw(|frame| frame.render_widget(&*self, frame.size()))?;

                    if event::poll(Duration::from_millis(16))? {
                        let event = event::read()?;
                        self.handle_event(&event);
                    }
                }
                State::Quit => break,
            }
        }

        Ok(())
    }

    /// Apply every completion that has arrived, then advance the replay
    pub fn pump(&mut self, now: Instant) {
        loop {
            match self.completions.try_recv() {
                Ok(completion) => self.apply(completion, now),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if let Some(frame) = self.animator.tick(now) {
            self.session.show_path(frame);
        }
    }

    fn apply(&mut self, completion: Completion, now: Instant) {
        match completion {
            Completion::Initialize(result) => {
                if self.session.apply_initialize(result) {
                    self.animator.cancel();
                }
            }
            Completion::Train(ticket, result) => {
                if self.session.apply_train(ticket, result) {
                    self.animator.cancel();
                }
            }
            Completion::Evaluate(ticket, result) => {
                if let Some(path) = self.session.apply_evaluate(ticket, result) {
                    if let Some(frame) = self.animator.start(path, now) {
                        self.session.show_path(frame);
                    }
                }
            }
            Completion::Stats(result) => self.session.apply_stats(result),
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(key) = event_keycode(event) else {
            return;
        };

        if self.session.notice().is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.session.dismiss_notice();
            }
            return;
        }

        if self.show_help {
            if matches!(key, KeyCode::Char('h') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match key {
            KeyCode::Char('q') => self.state = State::Quit,
            KeyCode::Char('h') => self.show_help = true,
            KeyCode::Tab => self.selected_tab = (self.selected_tab + 1) % TABS.len(),
            _ if self.selected_tab == 1 => {
                self.logs.handle_ui_event(event);
            }
            KeyCode::Left => self.grid_sizes.prev(),
            KeyCode::Right => self.grid_sizes.next(),
            KeyCode::Up => self.episodes.next(),
            KeyCode::Down => self.episodes.prev(),
            KeyCode::Char('i') => self.dispatcher.initialize(self.grid_sizes.value()),
            KeyCode::Char('t') => self.train(),
            KeyCode::Char('e') => self.evaluate(),
            KeyCode::Char('s') => self.dispatcher.stats(),
            _ => {}
        }
    }

    fn train(&mut self) {
        match self.session.begin_train() {
            Ok(ticket) => self.dispatcher.train(ticket, self.episodes.value()),
            Err(err) => self.session.reject(err),
        }
    }

    fn evaluate(&mut self) {
        match self.session.begin_evaluate() {
            Ok(ticket) => self.dispatcher.evaluate(ticket),
            Err(err) => self.session.reject(err),
        }
    }

    fn render_dashboard(&self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);
        let [grid_area, q_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(left);
        let [plot_area, stats_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(8)]).areas(right);

        let grid = self.session.grid_view();
        GridPanel {
            view: grid.as_ref(),
        }
        .render(grid_area, buf);

        let q_grid = self.session.q_grid_view();
        QGridPanel {
            view: q_grid.as_ref(),
        }
        .render(q_area, buf);

        RewardPlot {
            history: self.session.chart(),
        }
        .render(plot_area, buf);

        StatsPanel {
            stats: self.session.stats(),
        }
        .render(stats_area, buf);
    }
}

impl<S: GridService> Widget for &App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Layout
        let [menu_area, main_area, controls_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

        // Menu
        Tabs::new(TABS)
            .block(Block::default().padding(Padding::uniform(1)))
            .white()
            .bold()
            .highlight_style(Style::default().light_green())
            .select(self.selected_tab)
            .render(menu_area, buf);

        // Main
        match self.selected_tab {
            0 => self.render_dashboard(main_area, buf),
            1 => self.logs.render_ref(main_area, buf),
            _ => {}
        }

        ControlBar {
            controls: self.session.controls(),
            grid_size: self.grid_sizes.value(),
            episodes: self.episodes.value(),
        }
        .render(controls_area, buf);

        // Popups
        if self.show_help {
            render_help(area, buf, self.selected_tab);
        }
        if let Some(message) = self.session.notice() {
            render_notice(area, buf, message);
        }
    }
}

//! Application state and update logic.
//!
//! `App` is the single state container: the persisted profile, the open
//! activity, menu cursors and the decorative sparkle field. Every mutation
//! goes through a named method so rendering only ever reads.

use std::time::Instant;

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::activities::Activity;
use crate::input::{Action, Direction, InputContext};
use crate::models::{MAX_NAME_CHARS, MOODS, Screen, Section, UserProfile};
use crate::sparkles::{NUM_SPARKLES, SparkleField};
use crate::store::Store;
use crate::text_input::TextInput;

/// Columns in the activity grid on the menu
pub const MENU_COLUMNS: usize = 2;
/// Columns in the mood grid
pub const MOOD_COLUMNS: usize = 4;

/// Application state
pub struct App {
    pub profile: UserProfile,
    pub name_input: TextInput,
    pub activity: Option<Activity>,
    // Cursor positions for grid/tile navigation
    pub menu_cursor: usize,
    pub mood_cursor: usize,
    pub tile_cursor: usize,
    pub sparkles: SparkleField,
    pub now: Instant,
    pub should_quit: bool,
    store: Store,
    rng: StdRng,
}

impl App {
    pub fn new(store: Store, mut rng: StdRng, show_sparkles: bool, now: Instant) -> Self {
        let profile = store.load_or_default();
        let sparkles = if show_sparkles {
            SparkleField::new(NUM_SPARKLES, now, &mut rng)
        } else {
            SparkleField::empty()
        };
        info!(
            setup_complete = profile.setup_complete,
            sparkles = sparkles.len(),
            "App started"
        );

        Self {
            profile,
            name_input: TextInput::with_max_chars(MAX_NAME_CHARS),
            activity: None,
            menu_cursor: 0,
            mood_cursor: 0,
            tile_cursor: 0,
            sparkles,
            now,
            should_quit: false,
            store,
            rng,
        }
    }

    pub fn screen(&self) -> Screen {
        if !self.profile.setup_complete {
            Screen::Setup
        } else if let Some(activity) = &self.activity {
            Screen::Section(activity.section())
        } else {
            Screen::Menu
        }
    }

    pub fn input_context(&self) -> InputContext {
        match (self.screen(), &self.activity) {
            (Screen::Setup, _) => InputContext::Text,
            (Screen::Section(_), Some(activity)) if activity.accepts_text() => InputContext::Text,
            _ => InputContext::Navigate,
        }
    }

    /// Advance clock-driven state: sparkles, breathing, mood dismiss
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.sparkles.tick(now, &mut self.rng);

        let mut dismiss = false;
        match &mut self.activity {
            Some(Activity::Breathing(session)) => session.tick(now),
            Some(Activity::Mood(mood)) => dismiss = mood.take_dismiss(now),
            _ => {}
        }
        if dismiss {
            debug!("Mood response shown, returning to menu");
            self.back_to_menu();
        }
    }

    /// Save the name and move on to the menu. Blank names are ignored.
    pub fn complete_setup(&mut self) -> bool {
        let Some(profile) = UserProfile::from_setup(self.name_input.as_str()) else {
            return false;
        };
        self.profile = profile;
        self.store.save_best_effort(&self.profile);
        self.name_input.clear();
        info!("Setup complete");
        true
    }

    /// Open a section with fresh state
    pub fn open_section(&mut self, section: Section) {
        if !self.profile.setup_complete {
            return;
        }
        info!(section = section.key(), "Opening section");
        self.mood_cursor = 0;
        self.tile_cursor = 0;
        self.activity = Some(Activity::enter(section, &mut self.rng));
    }

    /// Close the open section, dropping all of its state
    pub fn back_to_menu(&mut self) {
        if let Some(mut activity) = self.activity.take() {
            if let Activity::Breathing(session) = &mut activity {
                session.cancel();
            }
            debug!(section = activity.section().key(), "Left section");
        }
    }

    pub fn select_mood(&mut self, index: usize) {
        let now = self.now;
        if let Some(Activity::Mood(mood)) = &mut self.activity {
            if mood.select(index, now) {
                self.mood_cursor = index;
            }
        }
    }

    pub fn submit_worry(&mut self) {
        if let Some(Activity::Worry(pillow)) = &mut self.activity {
            if pillow.is_sent() {
                pillow.write_another();
            } else {
                pillow.submit();
            }
        }
    }

    pub fn start_breathing(&mut self) {
        let now = self.now;
        if let Some(Activity::Breathing(session)) = &mut self.activity {
            session.start(now);
        }
    }

    pub fn tap_tile(&mut self, index: usize) {
        if let Some(Activity::Word(puzzle)) = &mut self.activity {
            if puzzle.tap(index) {
                self.tile_cursor = index;
            }
        }
    }

    /// New word or new story starter, depending on the open section
    pub fn redraw(&mut self) {
        match &mut self.activity {
            Some(Activity::Word(puzzle)) => {
                puzzle.redraw(&mut self.rng);
                self.tile_cursor = 0;
            }
            Some(Activity::Story(studio)) => studio.redraw(&mut self.rng),
            _ => {}
        }
    }

    /// Apply one user action to the current screen
    pub fn handle(&mut self, action: Action, now: Instant) {
        self.now = now;
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        match self.screen() {
            Screen::Setup => self.handle_setup(action),
            Screen::Menu => self.handle_menu(action),
            Screen::Section(section) => {
                if action == Action::Back {
                    self.back_to_menu();
                } else {
                    self.handle_section(section, action);
                }
            }
        }
    }

    fn handle_setup(&mut self, action: Action) {
        match action {
            Action::Type(c) => {
                self.name_input.insert(c);
            }
            Action::Erase => self.name_input.backspace(),
            Action::Confirm => {
                self.complete_setup();
            }
            Action::Back => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_menu(&mut self, action: Action) {
        let count = Section::ALL.len();
        match action {
            Action::Move(dir) => {
                self.menu_cursor = move_in_grid(self.menu_cursor, dir, MENU_COLUMNS, count);
            }
            Action::Confirm => {
                if let Some(section) = Section::from_index(self.menu_cursor) {
                    self.open_section(section);
                }
            }
            Action::Pick(index) => {
                if let Some(section) = Section::from_index(index) {
                    self.menu_cursor = index;
                    self.open_section(section);
                }
            }
            Action::Back => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_section(&mut self, section: Section, action: Action) {
        match section {
            Section::Mood => match action {
                Action::Move(dir) => {
                    let count = MOODS.len();
                    self.mood_cursor = move_in_grid(self.mood_cursor, dir, MOOD_COLUMNS, count);
                }
                Action::Confirm => self.select_mood(self.mood_cursor),
                Action::Pick(index) => self.select_mood(index),
                _ => {}
            },
            Section::Worry => {
                if action == Action::Confirm {
                    self.submit_worry();
                    return;
                }
                let Some(Activity::Worry(pillow)) = &mut self.activity else {
                    return;
                };
                match action {
                    Action::Type(c) => pillow.type_char(c),
                    Action::Erase => pillow.backspace(),
                    _ => {}
                }
            }
            Section::Breathing => {
                if action == Action::Confirm {
                    self.start_breathing();
                }
            }
            Section::Word => {
                let tiles = match &self.activity {
                    Some(Activity::Word(puzzle)) => puzzle.tiles().len(),
                    _ => return,
                };
                match action {
                    Action::Move(dir) => {
                        self.tile_cursor = move_in_grid(self.tile_cursor, dir, tiles, tiles);
                    }
                    Action::Confirm => self.tap_tile(self.tile_cursor),
                    Action::Pick(index) => self.tap_tile(index),
                    Action::Redraw => self.redraw(),
                    _ => {}
                }
            }
            Section::Story => {
                if action == Action::Redraw {
                    self.redraw();
                    return;
                }
                let Some(Activity::Story(studio)) = &mut self.activity else {
                    return;
                };
                match action {
                    Action::Type(c) => studio.type_char(c),
                    Action::Erase => studio.backspace(),
                    Action::Confirm => studio.type_char('\n'),
                    _ => {}
                }
            }
        }
    }
}

/// Move a cursor around a row-major grid, clamping at the edges
pub fn move_in_grid(cursor: usize, dir: Direction, columns: usize, count: usize) -> usize {
    if count == 0 || columns == 0 {
        return 0;
    }
    let cursor = cursor.min(count - 1);
    let next = match dir {
        Direction::Left if cursor % columns > 0 => cursor - 1,
        Direction::Right if cursor % columns + 1 < columns => cursor + 1,
        Direction::Up if cursor >= columns => cursor - columns,
        Direction::Down => cursor + columns,
        _ => cursor,
    };
    next.min(count - 1)
}

use ql_core::{Action, Library, QlResult, Quest, SessionState};

/// TUI state: the library, the session reducer's current value, and the
/// cursor over the quest list.
pub struct App {
    pub library: Library,
    pub session: SessionState,
    pub list_cursor: usize,
    pub show_help: bool,
}

impl App {
    pub fn new(library: Library) -> Self {
        Self {
            library,
            session: SessionState::new(),
            list_cursor: 0,
            show_help: false,
        }
    }

    /// The quest under the cursor in the library list.
    pub fn selected_quest(&self) -> Option<&Quest> {
        self.library.quests().get(self.list_cursor)
    }

    /// The quest the session is running, if any.
    pub fn active_quest(&self) -> Option<&Quest> {
        self.session
            .active_quest
            .as_ref()
            .and_then(|id| self.library.get(id))
    }

    /// Jump straight into a quest by id or title (the `--quest` flag).
    pub fn start_quest_by_name(&mut self, name: &str) -> QlResult<()> {
        let quest = self.library.resolve(name)?;
        let id = quest.id.clone();

        // Keep the cursor on the quest so exiting lands where expected.
        if let Some(pos) = self.library.quests().iter().position(|q| q.id == id) {
            self.list_cursor = pos;
        }

        self.session = self.session.apply(&Action::StartQuest(id));
        Ok(())
    }

    // Navigation
    pub fn move_down(&mut self) {
        if self.list_cursor + 1 < self.library.len() {
            self.list_cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(1);
    }

    pub fn move_to_top(&mut self) {
        self.list_cursor = 0;
    }

    pub fn move_to_bottom(&mut self) {
        if !self.library.is_empty() {
            self.list_cursor = self.library.len() - 1;
        }
    }

    // Transitions: each one feeds an action through the reducer and replaces
    // the session value wholesale.
    pub fn start_selected_quest(&mut self) {
        if let Some(quest) = self.selected_quest() {
            let action = Action::StartQuest(quest.id.clone());
            self.session = self.session.apply(&action);
        }
    }

    pub fn advance_step(&mut self) {
        self.session = self.session.apply(&Action::AdvanceStep);
    }

    pub fn exit_quest(&mut self) {
        self.session = self.session.apply(&Action::ExitQuest);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

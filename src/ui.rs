use crate::error::Error;
use crate::fact::FactFetcher;
use crate::notice::Notice;
use crate::store::TaskStore;
use crate::task::Task;
use crate::theme::Theme;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Poll interval for the event loop; keeps notice expiry responsive even
/// when no key is pressed.
const TICK: Duration = Duration::from_millis(200);

/// Content of the fact panel.
enum FactPanel {
    Empty,
    Fact(String),
    Error(String),
}

/// UI state: the store plus everything that only matters on screen.
pub struct App {
    store: TaskStore,
    fetcher: FactFetcher,
    selected: usize,
    notice: Option<Notice>,
    fact: FactPanel,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            fetcher: FactFetcher::new(),
            selected: 0,
            notice: None,
            fact: FactPanel::Empty,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    fn selected_id(&self) -> Option<u64> {
        self.store.tasks().get(self.selected).map(|t| t.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn add_task(&mut self) {
        let Some(description) = prompt("Enter task description") else {
            return;
        };
        let Some(tasker) = prompt("Enter assignee") else {
            return;
        };
        match self.store.add_task(&description, &tasker) {
            Ok(_) => {
                // New task renders first; move the cursor to it.
                self.selected = 0;
                self.notify(Notice::success("Task added successfully"));
            }
            Err(Error::InvalidInput(_)) => {
                self.notify(Notice::danger("Please fill in both fields"));
            }
            Err(err) => self.notify(Notice::danger(err.to_string())),
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if let Err(err) = self.store.toggle_complete(id) {
            self.notify(Notice::danger(err.to_string()));
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.store.delete(id) {
            Ok(_) => {
                self.clamp_selection();
                self.notify(Notice::success("Task deleted"));
            }
            Err(err) => self.notify(Notice::danger(err.to_string())),
        }
    }

    fn delete_all(&mut self) {
        match self.store.delete_all() {
            Ok(()) => {
                self.selected = 0;
                self.notify(Notice::success("All tasks deleted"));
            }
            Err(err) => self.notify(Notice::danger(err.to_string())),
        }
    }

    fn select_all(&mut self) {
        match self.store.select_all() {
            Ok(()) => self.notify(Notice::success("All tasks selected")),
            Err(err) => self.notify(Notice::danger(err.to_string())),
        }
    }

    fn save_all(&mut self) {
        match self.store.save_all() {
            Ok(()) => self.notify(Notice::success("All tasks saved")),
            Err(err) => self.notify(Notice::danger(err.to_string())),
        }
    }

    fn toggle_theme(&mut self) {
        if let Err(err) = self.store.toggle_theme() {
            self.notify(Notice::danger(err.to_string()));
        }
    }

    fn fetch_fact(&mut self) {
        // Blocks the loop for the duration of the request.
        self.fact = match self.fetcher.fetch() {
            Ok(fact) => FactPanel::Fact(fact),
            Err(err) => FactPanel::Error(err.to_string()),
        };
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        if app.notice.as_ref().is_some_and(Notice::is_expired) {
            app.notice = None;
        }

        terminal.draw(|f| draw(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()), // Quit
                KeyCode::Char('a') => app.add_task(),
                KeyCode::Up => {
                    if app.selected > 0 {
                        app.selected -= 1;
                    }
                }
                KeyCode::Down => {
                    if app.selected + 1 < app.store.len() {
                        app.selected += 1;
                    }
                }
                KeyCode::Char(' ') => app.toggle_selected(),
                KeyCode::Char('d') => app.delete_selected(),
                KeyCode::Char('D') => app.delete_all(),
                KeyCode::Char('A') => app.select_all(),
                KeyCode::Char('s') => app.save_all(),
                KeyCode::Char('t') => app.toggle_theme(),
                KeyCode::Char('f') => app.fetch_fact(),
                _ => {}
            }
        }
    }
}

fn draw(f: &mut Frame, app: &App) {
    let theme = app.store.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let items: Vec<ListItem> = app
        .store
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, t)| ListItem::new(task_line(t, theme, i == app.selected)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title("Tasks")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent())),
    );
    f.render_widget(list, chunks[0]);

    let fact_line = match &app.fact {
        FactPanel::Empty => Line::from(Span::styled(
            "press f to fetch a cat fact",
            Style::default().fg(theme.done()),
        )),
        FactPanel::Fact(fact) => Line::from(Span::styled(
            fact.as_str(),
            Style::default().fg(theme.fg()),
        )),
        FactPanel::Error(err) => {
            Line::from(Span::styled(err.as_str(), Style::default().fg(Color::Red)))
        }
    };
    let fact = Paragraph::new(fact_line).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Cat fact")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.fg())),
    );
    f.render_widget(fact, chunks[1]);

    if let Some(notice) = &app.notice {
        let banner = Paragraph::new(notice.message.as_str())
            .style(Style::default().fg(Color::White).bg(notice.kind.color()));
        f.render_widget(banner, chunks[2]);
    }

    let hints = format!(
        "a add  space done/undo  d delete  D delete all  A select all  s save  f fact  t theme {}  q quit",
        theme.icon()
    );
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme.fg())),
        chunks[3],
    );
}

fn task_line(task: &Task, theme: Theme, selected: bool) -> Line<'_> {
    let marker = if task.completed { "[x]" } else { "[ ]" };
    let text_style = if task.completed {
        Style::default()
            .fg(theme.done())
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.fg())
    };
    let line = Line::from(vec![
        Span::raw(format!("{marker} [#{}] ", task.id)),
        Span::styled(task.description.as_str(), text_style),
        Span::raw(format!(" ({})", task.tasker)),
    ]);
    if selected {
        line.style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        line
    }
}

fn prompt(message: &str) -> Option<String> {
    disable_raw_mode().ok();
    println!("{}", message);
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_ok() {
        enable_raw_mode().ok();
        Some(input.trim().to_string())
    } else {
        enable_raw_mode().ok();
        None
    }
}

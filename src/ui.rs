use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use finance_analyzer::{run_analysis_with, AnalysisConfig};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const PAGE: u16 = 10;

pub struct App {
    pub config: AnalysisConfig,
    /// Last report text, shown verbatim
    pub report: Option<String>,
    pub scroll: u16,
    pub runs: usize,
    pub last_duration: Option<Duration>,
    /// Inner width of the report pane at the last draw; 0 before the first frame
    pub viewport_width: u16,
}

impl App {
    pub fn new(config: AnalysisConfig) -> Self {
        App {
            config,
            report: None,
            scroll: 0,
            runs: 0,
            last_duration: None,
            viewport_width: 0,
        }
    }

    /// Regenerate and reanalyze from scratch; the previous report is replaced whole.
    pub fn analyze(&mut self) {
        let started = Instant::now();
        self.report = Some(run_analysis_with(&self.config).to_text());
        self.scroll = 0;
        self.runs += 1;
        self.last_duration = Some(started.elapsed());
    }

    /// Rendered rows of the report after wrapping to the pane width.
    fn line_count(&self) -> u16 {
        let rows = match &self.report {
            Some(text) if self.viewport_width > 0 => {
                report_paragraph(text).line_count(self.viewport_width)
            }
            Some(text) => text.lines().count(),
            None => 0,
        };
        rows.min(u16::MAX as usize) as u16
    }

    pub fn scroll_down(&mut self, by: u16) {
        let max = self.line_count().saturating_sub(1);
        self.scroll = self.scroll.saturating_add(by).min(max);
    }

    pub fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll = self.line_count().saturating_sub(1);
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('a') | KeyCode::Enter => app.analyze(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(PAGE),
                KeyCode::PageUp => app.scroll_up(PAGE),
                KeyCode::Home => app.scroll = 0,
                KeyCode::End => app.scroll_to_end(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + hint
            Constraint::Min(0),    // Report
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    // borders take one column on each side
    app.viewport_width = chunks[1].width.saturating_sub(2);

    render_header(f, chunks[0], app);
    render_report(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            "Personal Finance Analyzer",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Press 'a' to generate and analyze {} transactions.",
                app.config.transaction_count
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn report_paragraph(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).wrap(Wrap { trim: false })
}

fn render_report(f: &mut Frame, area: Rect, app: &App) {
    let body = match &app.report {
        Some(text) => report_paragraph(text).scroll((app.scroll, 0)),
        None => Paragraph::new(Line::from(Span::styled(
            "No analysis yet.",
            Style::default().fg(Color::DarkGray),
        ))),
    };

    let body = body.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Report "),
    );

    f.render_widget(body, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![Span::styled(
        format!(" Runs: {} ", app.runs),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(elapsed) = app.last_duration {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            format!("Last run: {} ms", elapsed.as_millis()),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::raw(format!("Line {}/{}", app.scroll + 1, app.line_count())));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("a", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Analyze | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Scroll | "));
    status_spans.push(Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Fast | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// Teletext-flavoured terminal rendering of the league listing

use super::{LeagueCard, StatusKind, ViewFrame, ViewSink};
use crate::constants::{placeholders::SAMPLE_BADGE, ui::FALLBACK_WIDTH};
use crate::error::AppError;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

const HEADER_BG: Color = Color::Blue;
const HEADER_FG: Color = Color::White;
const CONTROLS_FG: Color = Color::Green;
const TITLE_FG: Color = Color::Yellow;
const TEXT_FG: Color = Color::White;
const DATE_FG: Color = Color::Cyan;
const SAMPLE_FG: Color = Color::Magenta;

// Raw mode does not translate \n, so fullscreen lines end with an explicit \r\n
const RAW_NEWLINE: &str = "\r\n";
const NEWLINE: &str = "\n";

pub struct TerminalView<W: Write> {
    writer: W,
    width: u16,
    clear_screen: bool,
    newline: &'static str,
    colors: bool,
}

impl<W: Write> TerminalView<W> {
    /// Appends frames to the writer, one after another (used by `--once`).
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            width: crossterm::terminal::size()
                .map(|(w, _)| w)
                .unwrap_or(FALLBACK_WIDTH),
            clear_screen: false,
            newline: NEWLINE,
            colors: true,
        }
    }

    /// Redraws the whole screen on every frame (used by the interactive mode).
    pub fn fullscreen(writer: W) -> Self {
        Self {
            clear_screen: true,
            newline: RAW_NEWLINE,
            ..Self::new(writer)
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Turns ANSI colors on or off; plain text is used for pipes and files.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn set_fg(&mut self, color: Color) -> Result<(), AppError> {
        if self.colors {
            queue!(self.writer, SetForegroundColor(color))?;
        }
        Ok(())
    }

    fn set_bg(&mut self, color: Color) -> Result<(), AppError> {
        if self.colors {
            queue!(self.writer, SetBackgroundColor(color))?;
        }
        Ok(())
    }

    fn reset_color(&mut self) -> Result<(), AppError> {
        if self.colors {
            queue!(self.writer, ResetColor)?;
        }
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), AppError> {
        let newline = self.newline;
        queue!(self.writer, Print(newline))?;
        Ok(())
    }

    fn line(&mut self, color: Color, text: &str) -> Result<(), AppError> {
        self.set_fg(color)?;
        queue!(self.writer, Print(text))?;
        self.reset_color()?;
        self.end_line()
    }

    fn header(&mut self, title: &str) -> Result<(), AppError> {
        let width = usize::from(self.width.max(20));
        let text = format!(" {title}");
        let padded = format!("{text:<width$}");
        self.set_bg(HEADER_BG)?;
        self.set_fg(HEADER_FG)?;
        queue!(self.writer, Print(padded))?;
        self.reset_color()?;
        self.end_line()
    }

    fn card(&mut self, card: &LeagueCard) -> Result<(), AppError> {
        if card.is_sample() {
            self.set_fg(TITLE_FG)?;
            queue!(self.writer, Print(&card.title))?;
            self.set_fg(SAMPLE_FG)?;
            queue!(self.writer, Print(format!("  [{SAMPLE_BADGE}]")))?;
            self.reset_color()?;
            self.end_line()?;
        } else {
            self.line(TITLE_FG, &card.title)?;
        }
        self.line(DATE_FG, &format!("  Start: {}  End: {}", card.start, card.end))?;
        if let Some(description) = &card.description {
            self.line(TEXT_FG, &format!("  {description}"))?;
        }
        for rule in &card.rules {
            self.line(TEXT_FG, &format!("    - {}: {}", rule.name, rule.description))?;
        }
        self.end_line()
    }
}

fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Info => Color::White,
        StatusKind::Ok => Color::Green,
        StatusKind::Warning => Color::Yellow,
        StatusKind::Error => Color::Red,
    }
}

impl<W: Write> ViewSink for TerminalView<W> {
    fn render(&mut self, frame: &ViewFrame) -> Result<(), AppError> {
        if self.clear_screen {
            queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        self.header(&frame.title)?;
        self.line(
            CONTROLS_FG,
            &format!(
                "Search: {}_   Category: {}",
                frame.search_term, frame.category
            ),
        )?;
        self.line(status_color(frame.status.kind), &frame.status.text)?;
        self.end_line()?;

        if let Some(message) = &frame.empty_message {
            self.line(TEXT_FG, message)?;
        }
        for card in &frame.cards {
            self.card(card)?;
        }

        if self.clear_screen {
            self.line(
                CONTROLS_FG,
                "Type to search  Backspace: delete  Tab: category  Esc: quit",
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

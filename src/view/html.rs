// Static HTML rendering of the league listing

use super::{LeagueCard, StatusKind, ViewFrame, ViewSink};
use crate::constants::placeholders::SAMPLE_BADGE;
use crate::error::AppError;
use crate::pipeline::Provenance;
use std::io::Write;

/// Writes each frame as a complete HTML document.
pub struct HtmlView<W: Write> {
    writer: W,
}

impl<W: Write> HtmlView<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_card(&mut self, card: &LeagueCard) -> Result<(), AppError> {
        let provenance = match card.provenance {
            Provenance::Live => "live",
            Provenance::Sample => "sample",
        };
        writeln!(
            self.writer,
            r#"    <li class="league-card" data-provenance="{provenance}">"#
        )?;
        write!(
            self.writer,
            "      <strong>{}</strong>",
            escape_html(&card.title)
        )?;
        if card.is_sample() {
            write!(
                self.writer,
                r#" <span class="sample-badge">{SAMPLE_BADGE}</span>"#
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            r#"      <p class="dates">Start: {} &middot; End: {}</p>"#,
            escape_html(&card.start),
            escape_html(&card.end)
        )?;
        if let Some(description) = &card.description {
            writeln!(
                self.writer,
                r#"      <p class="description">{}</p>"#,
                escape_html(description)
            )?;
        }
        if !card.rules.is_empty() {
            writeln!(self.writer, r#"      <ul class="rules">"#)?;
            for rule in &card.rules {
                writeln!(
                    self.writer,
                    "        <li><em>{}</em>: {}</li>",
                    escape_html(&rule.name),
                    escape_html(&rule.description)
                )?;
            }
            writeln!(self.writer, "      </ul>")?;
        }
        writeln!(self.writer, "    </li>")?;
        Ok(())
    }
}

fn status_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Info => "status-info",
        StatusKind::Ok => "status-ok",
        StatusKind::Warning => "status-warning",
        StatusKind::Error => "status-error",
    }
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl<W: Write> ViewSink for HtmlView<W> {
    fn render(&mut self, frame: &ViewFrame) -> Result<(), AppError> {
        let title = escape_html(&frame.title);
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, r#"<html lang="en">"#)?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, r#"  <meta charset="utf-8">"#)?;
        writeln!(self.writer, "  <title>{title}</title>")?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        writeln!(self.writer, r#"  <div id="stats">"#)?;
        writeln!(self.writer, "  <h1>{title}</h1>")?;
        writeln!(
            self.writer,
            r#"  <p class="filters">Search: "{}" &middot; Category: {}</p>"#,
            escape_html(&frame.search_term),
            frame.category
        )?;
        writeln!(
            self.writer,
            r#"  <p id="status" class="{}">{}</p>"#,
            status_class(frame.status.kind),
            escape_html(&frame.status.text)
        )?;

        if let Some(message) = &frame.empty_message {
            writeln!(
                self.writer,
                r#"  <p class="empty-state">{}</p>"#,
                escape_html(message)
            )?;
        }
        if !frame.cards.is_empty() {
            writeln!(self.writer, r#"  <ul class="leagues">"#)?;
            for card in &frame.cards {
                self.write_card(card)?;
            }
            writeln!(self.writer, "  </ul>")?;
        }

        writeln!(self.writer, "  </div>")?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}

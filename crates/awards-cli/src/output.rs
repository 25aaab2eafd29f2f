// Rust guideline compliant 2026-10-19

//! Output formatting module for the Commit Awards CLI.
//!
//! This module provides functionality for formatting commits, stats and
//! awards in various output formats (JSON, table, plain text).

use crate::terminal::wrap_text;
use awards_app::{AppError, Awards, ErrorEnvelope, ImportStatus, StatusKind, WorkspaceSummary};
use awards_core::{humor_label, CommitView, OutputFormat, Stats};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Width of the message column in list tables.
const MESSAGE_WIDTH: usize = 60;

/// Number of sha characters shown in tables.
const SHORT_SHA: usize = 7;

/// Output formatter trait.
///
/// Defines the interface for formatting Commit Awards data in different
/// output formats.
pub trait OutputFormatter {
    /// Formats a single derived commit for display.
    ///
    /// # Arguments
    /// * `view` - The commit with its favorite/vote overlay
    ///
    /// # Returns
    /// A formatted string representation of the commit
    fn format_commit(&self, view: &CommitView) -> String;

    /// Formats the derived view for display.
    ///
    /// # Arguments
    /// * `views` - The commits to format, in display order
    ///
    /// # Returns
    /// A formatted string representation of the list
    fn format_list(&self, views: &[CommitView]) -> String;

    /// Formats aggregate counts.
    fn format_stats(&self, stats: &Stats) -> String;

    /// Formats the three award categories.
    fn format_awards(&self, awards: &Awards) -> String;

    /// Formats an import or apply status line.
    fn format_status(&self, status: &ImportStatus) -> String;

    /// Formats the staged/applied workspace summary.
    fn format_summary(&self, summary: &WorkspaceSummary) -> String;

    /// Formats an error for display.
    ///
    /// # Arguments
    /// * `error` - The error to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Returns the first characters of a sha.
fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

/// Collapses a message to a single line of at most `width` characters.
fn one_line(message: &str, width: usize) -> String {
    let flat = message.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= width {
        return flat;
    }
    let mut truncated: String = flat.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Returns the name shown for a commit's author: username first.
fn display_author(view: &CommitView) -> &str {
    match view.commit.username.as_deref() {
        Some(username) if !username.is_empty() => username,
        _ => view.commit.author_name(),
    }
}

fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// JSON output formatter.
///
/// Formats data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: &serde_json::Value, what: &str) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": format!("Failed to serialize {}", what) }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_commit(&self, view: &CommitView) -> String {
        Self::pretty(&json!(view), "commit")
    }

    fn format_list(&self, views: &[CommitView]) -> String {
        Self::pretty(
            &json!({
                "commits": views,
                "total": views.len(),
            }),
            "commit list",
        )
    }

    fn format_stats(&self, stats: &Stats) -> String {
        Self::pretty(&json!(stats), "stats")
    }

    fn format_awards(&self, awards: &Awards) -> String {
        Self::pretty(&json!(awards), "awards")
    }

    fn format_status(&self, status: &ImportStatus) -> String {
        json!(status).to_string()
    }

    fn format_summary(&self, summary: &WorkspaceSummary) -> String {
        Self::pretty(&json!(summary), "summary")
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let value = match error.downcast_ref::<AppError>() {
            Some(app_error) => {
                let mut envelope = ErrorEnvelope::from_error(app_error);
                envelope.message = error.to_string();
                json!({ "error": envelope })
            }
            None => json!({ "error": { "code": "error", "message": error.to_string() } }),
        };
        value.to_string()
    }
}

/// Table output formatter.
///
/// Formats data as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Wraps `text` in ANSI color codes when color is enabled.
    fn paint(&self, text: &str, color: Color) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buffer, "{}", text);
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    fn award_table(views: &[CommitView], score_header: &str, score: fn(&CommitView) -> String) -> String {
        if views.is_empty() {
            return "  (none)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "SHA", score_header, "Author", "Message"]);
        for (rank, view) in views.iter().enumerate() {
            builder.push_record(vec![
                (rank + 1).to_string(),
                short_sha(&view.commit.sha).to_string(),
                score(view),
                display_author(view).to_string(),
                one_line(&view.commit.message, MESSAGE_WIDTH),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_commit(&self, view: &CommitView) -> String {
        let commit = &view.commit;
        let mut output = String::new();

        output.push_str(&format!("SHA:         {}\n", commit.sha));
        output.push_str(&format!("Message:     {}\n", wrap_text(&commit.message, 13)));
        let verdict = if commit.is_funny {
            self.paint("funny", Color::Green)
        } else {
            "serious".to_string()
        };
        output.push_str(&format!(
            "Verdict:     {} ({}, {})\n",
            verdict,
            humor_label(commit.probability),
            percent(commit.probability)
        ));
        output.push_str(&format!("Votes:       {}\n", view.user_votes));
        output.push_str(&format!(
            "Favorite:    {}\n",
            if view.is_favorite {
                self.paint("★ yes", Color::Yellow)
            } else {
                "no".to_string()
            }
        ));

        if let Some(author) = &commit.author {
            match &author.email {
                Some(email) => output.push_str(&format!("Author:      {} <{}>\n", author.name, email)),
                None => output.push_str(&format!("Author:      {}\n", author.name)),
            }
            if let Some(date) = &author.date {
                output.push_str(&format!("Date:        {}\n", date));
            }
        }
        if let Some(username) = &commit.username {
            output.push_str(&format!("Username:    {}\n", username));
        }
        if let Some(repo) = &commit.repo {
            output.push_str(&format!("Repository:  {}/{}\n", repo.org, repo.name));
        }

        output
    }

    fn format_list(&self, views: &[CommitView]) -> String {
        if views.is_empty() {
            return "No commits found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec![
            "SHA",
            "Funny",
            "Probability",
            "Label",
            "Votes",
            "Fav",
            "Author",
            "Message",
        ]);

        for view in views {
            builder.push_record(vec![
                short_sha(&view.commit.sha).to_string(),
                yes_no(view.commit.is_funny).to_string(),
                percent(view.commit.probability),
                humor_label(view.commit.probability).to_string(),
                view.user_votes.to_string(),
                if view.is_favorite { "★" } else { "" }.to_string(),
                display_author(view).to_string(),
                one_line(&view.commit.message, MESSAGE_WIDTH),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!("{}\n{} commits", table, views.len())
    }

    fn format_stats(&self, stats: &Stats) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Total", "Funny", "Serious", "Favorites"]);
        builder.push_record(vec![
            stats.total.to_string(),
            stats.funny.to_string(),
            stats.serious.to_string(),
            stats.favorites.to_string(),
        ]);

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_awards(&self, awards: &Awards) -> String {
        let mut output = String::new();

        output.push_str(&self.paint("Funniest commits", Color::Green));
        output.push('\n');
        output.push_str(&Self::award_table(&awards.top_funny, "Probability", |v| {
            percent(v.commit.probability)
        }));
        output.push_str("\n\n");

        output.push_str(&self.paint("Most voted", Color::Cyan));
        output.push('\n');
        output.push_str(&Self::award_table(&awards.top_voted, "Votes", |v| {
            v.user_votes.to_string()
        }));
        output.push_str("\n\n");

        output.push_str(&self.paint("Favorites", Color::Yellow));
        output.push('\n');
        output.push_str(&Self::award_table(&awards.favorites, "Votes", |v| {
            v.user_votes.to_string()
        }));

        output
    }

    fn format_status(&self, status: &ImportStatus) -> String {
        let prefix = match status.kind {
            StatusKind::Success => self.paint("✓", Color::Green),
            StatusKind::Error => self.paint("✗", Color::Red),
            StatusKind::Info => self.paint("ℹ", Color::Cyan),
        };
        format!("{} {}", prefix, status.message)
    }

    fn format_summary(&self, summary: &WorkspaceSummary) -> String {
        let staged = |count: Option<usize>| match count {
            Some(count) => count.to_string(),
            None => "-".to_string(),
        };

        let mut output = String::new();
        output.push_str(&format!("Staged commits:  {}\n", staged(summary.staged_commits)));
        output.push_str(&format!("Staged authors:  {}\n", staged(summary.staged_authors)));
        output.push_str(&format!(
            "Ready to apply:  {}\n",
            if summary.can_apply {
                self.paint("yes", Color::Green)
            } else {
                "no".to_string()
            }
        ));
        output.push_str(&format!("Applied commits: {}\n", summary.applied_commits));
        output.push_str(&format!("Favorites:       {}\n", summary.favorites));
        output.push_str(&format!("Voted commits:   {}\n", summary.voted));
        output
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("{} {}", self.paint("Error:", Color::Red), error)
    }
}

/// Plain text output formatter.
///
/// Formats data as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_commit(&self, view: &CommitView) -> String {
        let commit = &view.commit;
        let mut output = String::new();

        output.push_str(&format!("{}\n", commit.sha));
        output.push_str(&format!("{}\n", commit.message));
        output.push_str(&format!("{} {}\n", yes_no(commit.is_funny), commit.probability));
        output.push_str(&format!("{}\n", view.user_votes));
        output.push_str(&format!("{}\n", yes_no(view.is_favorite)));
        output.push_str(&format!("{}\n", display_author(view)));

        output
    }

    fn format_list(&self, views: &[CommitView]) -> String {
        if views.is_empty() {
            return "No commits found.".to_string();
        }

        let mut output = String::new();
        for view in views {
            output.push_str(&format!(
                "{} {:.3} {} {} {}\n",
                view.commit.sha,
                view.commit.probability,
                view.user_votes,
                if view.is_favorite { "*" } else { "-" },
                one_line(&view.commit.message, usize::MAX)
            ));
        }
        output
    }

    fn format_stats(&self, stats: &Stats) -> String {
        format!(
            "total {}\nfunny {}\nserious {}\nfavorites {}\n",
            stats.total, stats.funny, stats.serious, stats.favorites
        )
    }

    fn format_awards(&self, awards: &Awards) -> String {
        let mut output = String::new();
        let sections = [
            ("funniest", &awards.top_funny),
            ("most_voted", &awards.top_voted),
            ("favorites", &awards.favorites),
        ];
        for (name, views) in sections {
            for view in views.iter() {
                output.push_str(&format!(
                    "{} {} {:.3} {}\n",
                    name, view.commit.sha, view.commit.probability, view.user_votes
                ));
            }
        }
        output
    }

    fn format_status(&self, status: &ImportStatus) -> String {
        status.message.clone()
    }

    fn format_summary(&self, summary: &WorkspaceSummary) -> String {
        format!(
            "staged_commits {}\nstaged_authors {}\ncan_apply {}\napplied_commits {}\nfavorites {}\nvoted {}\n",
            summary.staged_commits.unwrap_or(0),
            summary.staged_authors.unwrap_or(0),
            summary.can_apply,
            summary.applied_commits,
            summary.favorites,
            summary.voted
        )
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}

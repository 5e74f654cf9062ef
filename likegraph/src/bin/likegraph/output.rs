use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color as TableColor, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use likegraph::{FollowMap, Post, PostId};

use crate::theme::{ICONS, PALETTE};

/// Output format options for CLI commands
#[derive(Clone, Debug, ValueEnum, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Formatted table output (default)
    #[default]
    Table,
    /// JSON output for scripting
    Json,
    /// Compact single-line output
    Compact,
}

/// Global CLI options that affect output and behavior
#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// Trait for data that can be displayed as a table
pub trait TableDisplay {
    fn to_table(&self, options: &GlobalOptions) -> Table;
    fn to_compact(&self) -> String;
}

/// Output manager handles formatting and display
pub struct OutputManager {
    pub options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    /// Display data according to the configured output format
    pub fn display<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + TableDisplay,
    {
        if self.options.quiet {
            return Ok(());
        }

        match self.options.output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(data)?;
                println!("{json}");
            }
            OutputFormat::Table => {
                let table = data.to_table(&self.options);
                println!("{table}");
            }
            OutputFormat::Compact => {
                println!("{}", data.to_compact());
            }
        }
        Ok(())
    }

    fn decorated(&self, icon: &str, message: &str, color: colored::Color) -> String {
        if self.options.no_color {
            format!("{icon} {message}")
        } else {
            format!("{} {}", icon.color(color), message.color(color))
        }
    }

    fn is_structured(&self) -> bool {
        matches!(self.options.output_format, OutputFormat::Json)
    }

    /// Display a success message with color and icon
    pub fn success(&self, message: &str) {
        if !self.options.quiet && !self.is_structured() {
            println!("{}", self.decorated(ICONS.ok, message, PALETTE.ok));
        }
    }

    /// Display an error message with color and icon
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.decorated(ICONS.failed, message, PALETTE.failed));
    }

    /// Display a warning message
    pub fn warning(&self, message: &str) {
        if !self.options.quiet {
            eprintln!("{}", self.decorated(ICONS.caution, message, PALETTE.caution));
        }
    }

    /// Display info message with color and icon
    pub fn info(&self, message: &str) {
        if !self.options.quiet && !self.is_structured() {
            println!("{}", self.decorated(ICONS.note, message, PALETTE.note));
        }
    }

    /// Display verbose information (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.options.verbose && !self.options.quiet {
            eprintln!("{}", self.decorated(ICONS.follows, message, PALETTE.muted));
        }
    }

    /// Display a heading
    pub fn heading(&self, text: &str) {
        if self.options.quiet || self.is_structured() {
            return;
        }
        let output = if self.options.no_color {
            format!("\n{text}\n{}", "=".repeat(text.chars().count()))
        } else {
            format!("\n{}", text.color(PALETTE.heading).bold())
        };
        println!("{output}");
    }
}

fn themed_table(options: &GlobalOptions, headers: &[&str]) -> Table {
    let mut table = Table::new();
    if options.no_color {
        table.load_preset(comfy_table::presets::ASCII_FULL);
    } else {
        table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    }

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| {
            let cell = Cell::new(h).add_attribute(Attribute::Bold);
            if options.no_color { cell } else { cell.fg(table_color(PALETTE.heading)) }
        })
        .collect();
    table.set_header(header_cells);
    table
}

fn painted(cell: Cell, color: colored::Color, options: &GlobalOptions) -> Cell {
    if options.no_color { cell } else { cell.fg(table_color(color)) }
}

fn table_color(color: colored::Color) -> TableColor {
    use colored::Color as C;
    match color {
        C::Black => TableColor::Black,
        C::Red => TableColor::DarkRed,
        C::Green => TableColor::DarkGreen,
        C::Yellow => TableColor::DarkYellow,
        C::Blue => TableColor::DarkBlue,
        C::Magenta => TableColor::DarkMagenta,
        C::Cyan => TableColor::DarkCyan,
        C::White => TableColor::Grey,
        C::BrightBlack => TableColor::DarkGrey,
        C::BrightRed => TableColor::Red,
        C::BrightGreen => TableColor::Green,
        C::BrightYellow => TableColor::Yellow,
        C::BrightBlue => TableColor::Blue,
        C::BrightMagenta => TableColor::Magenta,
        C::BrightCyan => TableColor::Cyan,
        C::BrightWhite => TableColor::White,
        C::TrueColor { r, g, b } => TableColor::Rgb { r, g, b },
    }
}

fn join_users(users: &BTreeSet<String>) -> String {
    users.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// A list of posts, optionally marking the flagged ones.
#[derive(Serialize)]
pub struct PostList<'a> {
    pub posts: Vec<&'a Post>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub flagged: BTreeSet<PostId>,
}

impl<'a> PostList<'a> {
    pub fn new(posts: Vec<&'a Post>) -> Self {
        Self {
            posts,
            flagged: BTreeSet::new(),
        }
    }

    pub fn with_flagged(mut self, flagged: &BTreeSet<PostId>) -> Self {
        self.flagged = flagged.clone();
        self
    }
}

impl TableDisplay for PostList<'_> {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["ID", "Author", "Text", "Timestamp", "Likes"]);
        for post in &self.posts {
            let id = if self.flagged.contains(&post.id()) {
                painted(Cell::new(format!("{} {}", ICONS.flagged, post.id())), PALETTE.flagged, options)
            } else {
                painted(Cell::new(post.id().to_string()), PALETTE.post_id, options)
            };
            let likes = if post.likes().is_empty() {
                String::new()
            } else {
                format!("{} {}", ICONS.like, join_users(post.likes()))
            };
            table.add_row(vec![
                id,
                painted(Cell::new(post.author()), PALETTE.author, options),
                Cell::new(post.text()),
                Cell::new(post.timestamp().format("%Y-%m-%d %H:%M").to_string()),
                painted(Cell::new(likes), PALETTE.fan, options),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        let ids: Vec<String> = self.posts.iter().map(|p| p.id().to_string()).collect();
        format!("posts={} [{}]", self.posts.len(), ids.join(","))
    }
}

/// A plain list of user ids (influencers, authors).
#[derive(Serialize)]
pub struct UserList {
    pub title: &'static str,
    pub users: Vec<String>,
}

impl TableDisplay for UserList {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["#", self.title]);
        if self.users.is_empty() {
            table.add_row(vec![Cell::new("-"), Cell::new("none")]);
        }
        for (i, user) in self.users.iter().enumerate() {
            table.add_row(vec![Cell::new(i + 1), painted(Cell::new(user), PALETTE.author, options)]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.users.join(",")
    }
}

/// One of the two follow indexes.
#[derive(Serialize)]
pub struct Relations<'a> {
    pub relation: &'static str,
    pub entries: &'a FollowMap,
}

impl TableDisplay for Relations<'_> {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["User", self.relation]);
        for (user, others) in self.entries {
            table.add_row(vec![
                painted(Cell::new(user), PALETTE.author, options),
                painted(Cell::new(join_users(others)), PALETTE.fan, options),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.entries
            .iter()
            .map(|(user, others)| format!("{user}:{}", others.len()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

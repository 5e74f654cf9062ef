mod commands;
mod context;
mod loader;
mod output;
mod theme;

use anyhow::Result;
use clap::{
    ColorChoice, Command, CommandFactory, FromArgMatches, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Color as ClapColor, RgbColor, Style},
    },
};
use colored::{Color as ThemeColor, Colorize, control::ShouldColorize};
use std::fmt::Write;
use std::path::PathBuf;

use commands::{EXAMPLES, GraphCommands, SeedArgs, handle_graph_command};
use context::AppContext;
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::{ICONS, PALETTE};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("LIKEGRAPH_SEED", "Seed file used when --seed is not given"),
    ("RUST_LOG", "Log filter for diagnostic output (e.g. likegraph=debug)"),
];

#[derive(Parser)]
#[command(name = "likegraph")]
#[command(version)]
#[command(
    about = "Inspect a like-derived follower graph",
    long_about = r#"Builds a social graph from a seed file of posts and answers questions about it:

• who follows whom, derived from likes
• which users are influencers
• which posts mention given words, or come from a given author
• which posts match a flagged-term list
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Config file (defaults to ./likegraph.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    seed: SeedArgs,

    /// Output format (defaults to [output] format in the config, then table)
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: GraphCommands,
}

impl Cli {
    fn parse_with_styles() -> Self {
        let matches = build_cli_command().styles(help_styles()).get_matches();
        match Cli::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(err) => err.exit(),
        }
    }
}

fn build_cli_command() -> Command {
    let use_color = detect_color_support();
    let command = Cli::command().after_long_help(render_appendix(use_color));
    command.color(if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    })
}

fn render_appendix(use_color: bool) -> String {
    let palette = &PALETTE;
    let mut buffer = String::new();

    let heading = stylize("Examples:", palette.heading, true, use_color);
    let _ = writeln!(buffer, "{heading}");
    for group in EXAMPLES {
        let title = stylize(group.title, palette.section, true, use_color);
        let _ = writeln!(buffer, "  {title}");
        for command in group.commands {
            let arrow = stylize(ICONS.follows, palette.command, false, use_color);
            let _ = writeln!(buffer, "    {arrow} {}", stylize(command, palette.command, false, use_color));
        }
    }

    buffer.push('\n');
    let env_heading = stylize("Environment Variables:", palette.heading, true, use_color);
    let _ = writeln!(buffer, "{env_heading}");
    for (key, description) in ENVIRONMENT_VARIABLES {
        let key_text = stylize(key, palette.env_key, true, use_color);
        let _ = writeln!(buffer, "  {key_text}  {description}");
    }

    buffer
}

fn stylize(text: &str, color: ThemeColor, bold: bool, use_color: bool) -> String {
    if use_color {
        let styled = text.color(color);
        if bold { styled.bold().to_string() } else { styled.to_string() }
    } else {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    ShouldColorize::from_env().should_colorize()
}

fn help_styles() -> Styles {
    let palette = &PALETTE;
    Styles::styled()
        .usage(style_from_color(palette.section).bold())
        .header(style_from_color(palette.heading).bold())
        .literal(style_from_color(palette.command))
        .placeholder(style_from_color(palette.muted))
        .valid(style_from_color(palette.ok))
        .invalid(style_from_color(palette.caution))
        .error(style_from_color(palette.failed).bold())
}

fn style_from_color(color: ThemeColor) -> Style {
    Style::new().fg_color(Some(color_to_clap_color(color)))
}

fn color_to_clap_color(color: ThemeColor) -> ClapColor {
    match color {
        ThemeColor::Black => ClapColor::Ansi(AnsiColor::Black),
        ThemeColor::Red => ClapColor::Ansi(AnsiColor::Red),
        ThemeColor::Green => ClapColor::Ansi(AnsiColor::Green),
        ThemeColor::Yellow => ClapColor::Ansi(AnsiColor::Yellow),
        ThemeColor::Blue => ClapColor::Ansi(AnsiColor::Blue),
        ThemeColor::Magenta => ClapColor::Ansi(AnsiColor::Magenta),
        ThemeColor::Cyan => ClapColor::Ansi(AnsiColor::Cyan),
        ThemeColor::White => ClapColor::Ansi(AnsiColor::White),
        ThemeColor::BrightBlack => ClapColor::Ansi(AnsiColor::BrightBlack),
        ThemeColor::BrightRed => ClapColor::Ansi(AnsiColor::BrightRed),
        ThemeColor::BrightGreen => ClapColor::Ansi(AnsiColor::BrightGreen),
        ThemeColor::BrightYellow => ClapColor::Ansi(AnsiColor::BrightYellow),
        ThemeColor::BrightBlue => ClapColor::Ansi(AnsiColor::BrightBlue),
        ThemeColor::BrightMagenta => ClapColor::Ansi(AnsiColor::BrightMagenta),
        ThemeColor::BrightCyan => ClapColor::Ansi(AnsiColor::BrightCyan),
        ThemeColor::BrightWhite => ClapColor::Ansi(AnsiColor::BrightWhite),
        ThemeColor::TrueColor { r, g, b } => ClapColor::Rgb(RgbColor(r, g, b)),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse_with_styles();
    let no_color = cli.no_color;

    if let Err(err) = execute(cli) {
        let manager = OutputManager::new(GlobalOptions {
            no_color,
            ..Default::default()
        });
        manager.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = AppContext::load(cli.config.as_deref())?;
    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output.unwrap_or_else(|| ctx.config.output.format.clone()),
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });
    if let Some(path) = &ctx.config_path {
        output.verbose(&format!("Using config {}", path.display()));
    }

    handle_graph_command(cli.command, &cli.seed, &ctx, &output)
}

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use likegraph::{FlaggedTerms, ModeratedGraph, RandomIds, SocialGraph};

use crate::context::AppContext;
use crate::loader::{load_seed, load_terms};
use crate::output::{OutputManager, PostList, Relations, UserList};

pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Inspect a graph",
        commands: &[
            "likegraph --seed posts.toml show            # Posts and both follow indexes",
            "likegraph --seed posts.toml influencers     # Users with more followers than followees",
            "likegraph --seed posts.toml influencers -t 3",
        ],
    },
    ExampleGroup {
        title: "Query posts",
        commands: &[
            "likegraph --seed posts.toml search rust tokio",
            "likegraph --seed posts.toml authors --author alice",
            "likegraph --seed posts.toml flagged --terms banned.txt",
        ],
    },
];

#[derive(Args, Clone)]
pub struct SeedArgs {
    /// TOML file of [[post]] entries to build the graph from
    #[arg(long, env = "LIKEGRAPH_SEED", global = true)]
    pub seed: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum GraphCommands {
    /// Show every post plus the following and followers indexes
    Show,

    /// List influencers
    Influencers {
        /// Report users with more than this many followers instead
        #[arg(short, long)]
        threshold: Option<usize>,

        /// Use the threshold from the config file
        #[arg(long, conflicts_with = "threshold")]
        configured: bool,
    },

    /// Posts containing at least one of the given words
    Search {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Distinct authors, or the posts of one author
    Authors {
        #[arg(long)]
        author: Option<String>,
    },

    /// Posts matching the flagged-term list
    Flagged {
        /// Term list, one per line (overrides the config file)
        #[arg(long)]
        terms: Option<PathBuf>,
    },
}

pub fn handle_graph_command(
    command: GraphCommands,
    seed: &SeedArgs,
    ctx: &AppContext,
    output: &OutputManager,
) -> Result<()> {
    let graph = build_graph(seed, output)?;

    match command {
        GraphCommands::Show => handle_show(&graph, output),
        GraphCommands::Influencers { threshold, configured } => {
            let threshold = threshold.or(configured.then_some(ctx.config.graph.influencer_threshold));
            handle_influencers(&graph, threshold, output)
        }
        GraphCommands::Search { words } => handle_search(&graph, &words, output),
        GraphCommands::Authors { author } => handle_authors(&graph, author.as_deref(), output),
        GraphCommands::Flagged { terms } => handle_flagged(graph, terms.as_deref(), ctx, output),
    }
}

fn build_graph(seed: &SeedArgs, output: &OutputManager) -> Result<SocialGraph> {
    let Some(path) = seed.seed.as_deref() else {
        output.error("No seed file given.");
        output.info("Pass --seed <FILE> or set LIKEGRAPH_SEED.");
        bail!("Missing seed file");
    };

    let loaded = load_seed(path, &mut RandomIds)?;
    for rejected in &loaded.rejected {
        output.warning(&format!("Skipped {rejected}"));
    }
    let graph = SocialGraph::from_posts(loaded.posts)
        .with_context(|| format!("Seed file {} contains conflicting posts", path.display()))?;
    output.verbose(&format!("Loaded {} post(s) from {}", graph.len(), path.display()));
    Ok(graph)
}

fn handle_show(graph: &SocialGraph, output: &OutputManager) -> Result<()> {
    output.heading("Posts");
    output.display(&PostList::new(graph.posts().iter().collect()))?;
    output.heading("Following");
    output.display(&Relations {
        relation: "Follows",
        entries: graph.following(),
    })?;
    output.heading("Followers");
    output.display(&Relations {
        relation: "Followed by",
        entries: graph.followers(),
    })?;
    Ok(())
}

fn handle_influencers(graph: &SocialGraph, threshold: Option<usize>, output: &OutputManager) -> Result<()> {
    let users = match threshold {
        Some(threshold) => {
            output.heading(&format!("Users with more than {threshold} followers"));
            graph.influencers_over(threshold)
        }
        None => {
            output.heading("Influencers");
            graph.influencers()
        }
    };
    output.display(&UserList {
        title: "Influencer",
        users,
    })
}

fn handle_search(graph: &SocialGraph, words: &[String], output: &OutputManager) -> Result<()> {
    let hits = graph.containing(words);
    output.heading(&format!("Posts containing {}", words.join(" | ")));
    output.display(&PostList::new(hits))
}

fn handle_authors(graph: &SocialGraph, author: Option<&str>, output: &OutputManager) -> Result<()> {
    match author {
        Some(author) => {
            output.heading(&format!("Posts by {author}"));
            output.display(&PostList::new(graph.written_by(author)))
        }
        None => {
            output.heading("Authors");
            output.display(&UserList {
                title: "Author",
                users: graph.mentioned_users().into_iter().collect(),
            })
        }
    }
}

fn handle_flagged(
    graph: SocialGraph,
    terms: Option<&Path>,
    ctx: &AppContext,
    output: &OutputManager,
) -> Result<()> {
    let terms = match terms.map(Path::to_path_buf).or(ctx.terms_path()?) {
        Some(path) => load_terms(&path, ctx.case_mode())?,
        None => {
            output.warning("No flagged-term list configured; nothing will be flagged.");
            FlaggedTerms::default()
        }
    };
    output.verbose(&format!("{} flagged term(s) loaded", terms.terms().len()));

    let moderated = ModeratedGraph::from_graph(graph, terms);
    let flagged: Vec<_> = moderated
        .graph()
        .posts()
        .iter()
        .filter(|post| moderated.is_flagged(post.id()))
        .collect();

    output.heading("Flagged posts");
    output.display(&PostList::new(flagged).with_flagged(moderated.flagged()))?;
    if moderated.flagged().is_empty() {
        output.success("No posts flagged");
    }
    Ok(())
}

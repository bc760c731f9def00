//! CLI entry point for treeline

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use log::debug;
use treeline::{
    Bypass, OutputConfig, PrefixTable, RenderOptions, Result, TraversalMode, TreeError,
    TreeFormatter, TreeNode, TreeRenderer, TreeWalker, WalkerConfig, print_json, read_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Visiting order
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Mode {
    /// Parent before its children
    #[default]
    SelfFirst,
    /// Parent after its children
    ChildFirst,
    /// Only nodes without children
    LeavesOnly,
}

impl From<Mode> for TraversalMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::SelfFirst => TraversalMode::SelfFirst,
            Mode::ChildFirst => TraversalMode::ChildFirst,
            Mode::LeavesOnly => TraversalMode::LeavesOnly,
        }
    }
}

/// Branch glyph set
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Style {
    /// |- and \-
    #[default]
    Ascii,
    /// Box-drawing characters
    Unicode,
}

#[derive(Parser, Debug)]
#[command(name = "treeline")]
#[command(about = "Render a directory or JSON document as an ASCII tree")]
#[command(version)]
struct Args {
    /// Directory or .json file to display; "-" reads JSON from stdin
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Visiting order
    #[arg(long, value_enum, default_value = "self-first")]
    mode: Mode,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Show all files (ignore .gitignore filtering and hidden-file rules)
    #[arg(short, long)]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Ignore files matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Do not print the root line; its children start at the left margin
    #[arg(long = "no-root")]
    no_root: bool,

    /// Print each entry as its decorated key followed by the undecorated value
    #[arg(short = 'k', long = "keys")]
    keys: bool,

    /// Branch glyph set
    #[arg(long, value_enum, default_value = "ascii")]
    style: Style,

    /// Override one glyph, e.g. --glyph 4='`-' (0 left, 1 mid, 2 mid-last,
    /// 3 end, 4 end-last, 5 right; can be used multiple times)
    #[arg(long = "glyph", value_name = "INDEX=TEXT", value_parser = parse_glyph)]
    glyphs: Vec<(usize, String)>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output rendered lines as JSON
    #[arg(long = "json")]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Parse a glyph override of the form `INDEX=TEXT`.
fn parse_glyph(s: &str) -> std::result::Result<(usize, String), String> {
    let (index, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=TEXT, got '{}'", s))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("invalid glyph index: {}", index))?;
    Ok((index, text.to_string()))
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        eprintln!("treeline: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if args.level == Some(0) {
        return Err(TreeError::InvalidInput {
            message: "--level must be greater than 0".to_string(),
        });
    }

    let mut prefix = match args.style {
        Style::Ascii => PrefixTable::ascii(),
        Style::Unicode => PrefixTable::unicode(),
    };
    for (index, text) in &args.glyphs {
        prefix.set_prefix_part(*index, text)?;
    }

    if args.path == Path::new("-") {
        debug!("reading JSON from stdin");
        let doc = read_json(io::stdin().lock())?;
        return render(&doc, args, prefix, None);
    }

    if !args.path.exists() {
        return Err(TreeError::NotFound {
            path: args.path.clone(),
        });
    }

    let is_json = args.path.is_file()
        && args
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        debug!("reading JSON from {}", args.path.display());
        let file = File::open(&args.path).map_err(|source| TreeError::Io {
            context: format!("cannot open '{}'", args.path.display()),
            source,
        })?;
        let doc = read_json(BufReader::new(file))?;
        return render(&doc, args, prefix, None);
    }

    let walker_config = WalkerConfig {
        show_all: args.all,
        max_depth: args.level,
        dirs_only: args.dirs_only,
        ignore_patterns: args.ignore.clone(),
    };
    let tree = TreeWalker::new(walker_config).walk(&args.path)?;
    render(&tree, args, prefix, Some(tree.counts()))
}

/// Render `root` to stdout according to the CLI flags. `counts` carries the
/// (directories, files) footer for directory trees.
fn render<N: TreeNode + ?Sized>(
    root: &N,
    args: &Args,
    prefix: PrefixTable,
    counts: Option<(usize, usize)>,
) -> Result<()> {
    let options = RenderOptions {
        mode: args.mode.into(),
        bypass: Bypass {
            current: args.keys,
            key: !args.keys,
        },
        // Directory trees are already cut by the walker.
        max_depth: match counts {
            Some(_) => None,
            None => args.level.map(|level| level - 1),
        },
    };

    let renderer = if args.no_root {
        TreeRenderer::from_children(root, options)
    } else {
        TreeRenderer::new(root, options)
    }
    .with_prefix(prefix);

    if args.json {
        return print_json(renderer);
    }

    let config = OutputConfig {
        use_color: should_use_color(args.color),
        summary: counts.is_some(),
    };
    let formatter = TreeFormatter::new(config.clone());
    let written = formatter.print(renderer)?;
    debug!("rendered {} lines", written);

    if let (true, Some((dirs, files))) = (config.summary, counts) {
        writeln!(io::stdout().lock(), "\n{} directories, {} files", dirs, files).map_err(
            |source| TreeError::Io {
                context: "error writing output".to_string(),
                source,
            },
        )?;
    }
    Ok(())
}

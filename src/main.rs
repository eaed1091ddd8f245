use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use creature_forge::battle::{EntropyRolls, Phase};
use creature_forge::render::{self, sheet};
use creature_forge::{
    BattleArena, Builder, Catalogs, Category, ForgeConfig, Result, Roster, Selection, Slot,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "creature_forge")]
#[command(about = "Assemble creatures from parts, render them and make them fight")]
struct Cli {
    /// JSON file with render and battle settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog parts and their stat deltas
    Catalog {
        /// Only this category (body, eyes, mouth, arms, legs, accessory)
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Assemble one creature, print its stats and optionally render it
    Build(BuildArgs),
    /// Fight two creatures to the end
    Battle {
        /// First fighter, e.g. "name=Zorp,body=star_5,eyes=eye_angry"
        #[arg(long)]
        a: String,
        /// Second fighter
        #[arg(long)]
        b: String,
        /// Random seed (uses random seed if not specified)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the final snapshot as JSON instead of the log
        #[arg(long)]
        json: bool,
        /// Pause between an attack and its outcome
        #[arg(long)]
        paced: bool,
    },
    /// Render a contact sheet of random creatures
    Gallery {
        #[arg(short = 'n', long, default_value = "8")]
        count: usize,
        /// Random seed (uses random seed if not specified)
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long, default_value = "gallery.png")]
        out: PathBuf,
    },
}

#[derive(Args, Debug)]
struct BuildArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    body: Option<String>,
    #[arg(long)]
    eyes: Option<String>,
    #[arg(long)]
    mouth: Option<String>,
    #[arg(long)]
    arms: Option<String>,
    #[arg(long)]
    legs: Option<String>,
    #[arg(long)]
    accessory: Option<String>,
    #[arg(long)]
    color: Option<String>,
    /// Start from random parts; explicit part flags still win
    #[arg(long)]
    random: bool,
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,
    /// Output size in pixels (defaults to the configured size)
    #[arg(long)]
    size: Option<u32>,
    /// Write the render to this PNG
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn parse_category(s: &str) -> std::result::Result<Category, String> {
    Category::from_key(s).ok_or_else(|| format!("unknown category '{}'", s))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ForgeConfig::load_or_default(cli.config.as_deref())?;
    let catalogs = Catalogs::standard();

    match cli.command {
        Command::Catalog { category } => {
            print_catalog(catalogs, category);
            Ok(())
        }
        Command::Build(args) => build(catalogs, &config, args),
        Command::Battle {
            a,
            b,
            seed,
            json,
            paced,
        } => battle(catalogs, &config, &a, &b, seed, json, paced),
        Command::Gallery { count, seed, out } => gallery(catalogs, &config, count, seed, &out),
    }
}

fn print_catalog(catalogs: &Catalogs, only: Option<Category>) {
    let categories = only.map_or_else(|| Category::ALL.to_vec(), |c| vec![c]);
    for category in categories {
        println!("[{}]", category.display_name());
        for (id, name, delta) in catalogs.listing(category) {
            println!(
                "  {:<18} {:<22} STR {:+3}  SPD {:+3}  DEF {:+3}",
                id, name, delta.strength, delta.speed, delta.defense
            );
        }
    }
    if only.is_none() {
        println!("[color]");
        for paint in creature_forge::parts::PALETTE.iter() {
            println!("  {:<18} {:<22} {}", paint.id, paint.name, paint.hex);
        }
    }
}

fn build(catalogs: &Catalogs, config: &ForgeConfig, args: BuildArgs) -> Result<()> {
    let mut builder = Builder::new(catalogs);
    if args.random {
        let seed = args.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        println!("Randomizing parts with seed: {}", seed);
        builder.randomize(&mut rng);
    }

    let overrides = [
        (Category::Body, args.body),
        (Category::Eyes, args.eyes),
        (Category::Mouth, args.mouth),
        (Category::Arms, args.arms),
        (Category::Legs, args.legs),
        (Category::Accessory, args.accessory),
    ];
    for (category, id) in overrides {
        if let Some(id) = id {
            builder.set(category, id);
        }
    }
    if let Some(color) = args.color {
        builder.set_color(color);
    }
    builder.set_name(args.name);

    let mut roster = Roster::new();
    let id = builder.save(&mut roster)?;
    let Some(creature) = roster.get(id) else {
        return Ok(());
    };

    println!("{}", creature.summary());
    for category in Category::ALL {
        println!("  {:<10} {}", category.display_name(), creature.selection.get(category));
    }
    println!("  {:<10} {}", "color", creature.selection.color);

    if let Some(out) = args.out {
        let size = args.size.unwrap_or(config.render.size);
        let image = render::render_on_background(creature, size, &config.render);
        render::save_png(&image, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn battle(
    catalogs: &Catalogs,
    config: &ForgeConfig,
    a: &str,
    b: &str,
    seed: Option<u64>,
    json: bool,
    paced: bool,
) -> Result<()> {
    let mut roster = Roster::new();
    let mut save = |spec: &str, fallback: &str| -> Result<_> {
        let mut selection = Selection::from_spec(spec)?;
        if selection.bounded_name().is_empty() {
            selection.name = fallback.to_string();
        }
        Ok(roster.save(&selection, catalogs)?)
    };
    let id_a = save(a, "Fighter A")?;
    let id_b = save(b, "Fighter B")?;

    let mut arena = BattleArena::new(config.battle.clone());
    for (slot, id) in [(Slot::A, id_a), (Slot::B, id_b)] {
        if let Some(creature) = roster.get(id) {
            arena.select_fighter(slot, creature);
        }
    }
    arena.start()?;

    if !json {
        for creature in roster.iter() {
            println!("{}", creature.summary());
        }
        if let Some(line) = arena.snapshot().log.first() {
            println!("{}", line);
        }
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rolls = EntropyRolls::new(ChaCha8Rng::seed_from_u64(seed));
    let delay = Duration::from_millis(config.battle.turn_delay_ms);

    let mut played = 0;
    while arena.phase() == Phase::Fighting && played < config.battle.max_turns {
        let Some(event) = arena.begin_turn(&mut rolls) else {
            break;
        };
        if !json {
            println!("{}", event.short_description());
        }
        if paced {
            thread::sleep(delay);
        }
        arena.finish_turn();
        played += 1;
    }

    let snapshot = arena.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else if snapshot.winner.is_some() {
        if let Some(line) = snapshot.log.last() {
            println!("{}", line);
        }
        println!("Final HP: {} / {} (seed {})", snapshot.hp_a, snapshot.hp_b, seed);
    } else {
        println!("No winner after {} turns (seed {})", played, seed);
    }
    Ok(())
}

fn gallery(
    catalogs: &Catalogs,
    config: &ForgeConfig,
    count: usize,
    seed: Option<u64>,
    out: &std::path::Path,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("Generating {} creatures with seed: {}", count, seed);

    let mut roster = Roster::new();
    let mut builder = Builder::new(catalogs);
    for i in 0..count {
        builder.randomize(&mut rng);
        builder.set_name(format!("Specimen {}", i + 1));
        builder.save(&mut roster)?;
    }
    for creature in roster.iter() {
        println!("  {}", creature.summary());
    }

    let image = sheet::render_gallery_sheet_with(roster.list(), &config.render)?;
    render::save_png(&image, out)?;
    println!("Wrote {} ({}x{})", out.display(), image.width(), image.height());
    Ok(())
}

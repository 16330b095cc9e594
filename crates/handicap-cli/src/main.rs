//! Disc golf handicap calculator.
//!
//! Works out a player's handicap on a course from their UDisc rating, and the
//! strokes a weaker player receives in a match against a stronger one.

mod config;
mod report;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use config::CalculatorConfig;
use handicap_core::{
    compare_players, explain_handicap, parse_rating, parse_stroke_percentage, Course,
    ManualCourse,
};
use handicap_courses::CourseDirectory;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "disc-handicap")]
#[command(about = "Disc golf handicap and stroke difference calculator")]
struct Cli {
    /// Path to the configuration file (defaults to handicap.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a player's handicap on a course
    Handicap {
        /// UDisc rating of the player
        #[arg(short, long, allow_hyphen_values = true)]
        rating: String,
        #[command(flatten)]
        course: CourseArgs,
        /// Show how the handicap was worked out
        #[arg(long)]
        explain: bool,
    },
    /// Calculate the strokes given between two players
    Strokes {
        /// UDisc rating of person one
        #[arg(long, allow_hyphen_values = true)]
        rating_one: String,
        /// UDisc rating of person two
        #[arg(long, allow_hyphen_values = true)]
        rating_two: String,
        #[command(flatten)]
        course: CourseArgs,
        /// Share of the handicap difference to give, 0 to 100 (defaults to config, then 80)
        #[arg(short, long)]
        percentage: Option<String>,
    },
    /// List known courses
    Courses {
        /// Only show courses whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Course selection: a directory course by name, or one entered by hand.
#[derive(Args, Debug, Default)]
struct CourseArgs {
    /// Course name (exact, or a unique part of it)
    #[arg(short, long, conflicts_with = "par_rating")]
    course: Option<String>,
    /// Par rating of a course entered by hand
    #[arg(long, allow_hyphen_values = true)]
    par_rating: Option<String>,
    /// Hole count of a course entered by hand
    #[arg(long, requires = "par_rating")]
    holes: Option<String>,
    /// Name of a course entered by hand
    #[arg(long, requires = "par_rating")]
    name: Option<String>,
}

/// Resolves the course selection against the directory.
fn resolve_course(args: &CourseArgs, directory: &CourseDirectory) -> anyhow::Result<Course> {
    if let Some(query) = &args.course {
        if let Some(course) = directory.by_name(query) {
            return Ok(course.clone());
        }

        return match directory.search(query).as_slice() {
            [course] => Ok((*course).clone()),
            [] => bail!("No course found matching '{}'", query),
            matches => {
                let names: Vec<_> = matches.iter().map(|c| c.name.as_str()).collect();
                bail!(
                    "'{}' matches several courses: {}",
                    query,
                    names.join(", ")
                )
            }
        };
    }

    let Some(par_rating) = &args.par_rating else {
        bail!("Either --course or --par-rating is required");
    };

    let course = ManualCourse {
        name: args.name.as_deref().unwrap_or_default(),
        par_rating,
        holes: args.holes.as_deref(),
    }
    .parse()?;
    Ok(course)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CalculatorConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let directory = config.directory()?;
    tracing::debug!("Course directory has {} courses", directory.len());

    match cli.command {
        Commands::Handicap {
            rating,
            course,
            explain,
        } => {
            let rating = parse_rating(&rating)?;
            let course = resolve_course(&course, &directory)?;
            tracing::debug!("Calculating handicap on {} for rating {}", course, rating);

            let breakdown = explain_handicap(&course, rating);
            print!("{}", report::handicap(&course, &breakdown, explain));
        }
        Commands::Strokes {
            rating_one,
            rating_two,
            course,
            percentage,
        } => {
            let rating_one = parse_rating(&rating_one).context("Invalid rating for person one")?;
            let rating_two = parse_rating(&rating_two).context("Invalid rating for person two")?;
            let percentage = match percentage {
                Some(percentage) => parse_stroke_percentage(&percentage)?,
                None => config.stroke_percentage()?,
            };
            let course = resolve_course(&course, &directory)?;
            tracing::debug!(
                "Comparing ratings {} and {} on {} at {}",
                rating_one,
                rating_two,
                course,
                percentage
            );

            let comparison = compare_players(&course, rating_one, rating_two, percentage);
            print!("{}", report::comparison(&course, &comparison));
        }
        Commands::Courses { search } => {
            let courses = match &search {
                Some(query) => directory.search(query),
                None => directory.all().iter().collect(),
            };
            print!("{}", report::course_list(&courses));
        }
    }

    Ok(())
}

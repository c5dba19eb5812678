use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::model::LessonId;
use services::{LessonLoader, ViewerConfig};
use storage::Storage;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLessonId { raw: String },
    LessonOutOfRange { lesson: LessonId, total: u32 },
    InvalidTotalLessons { raw: String },
    InvalidSource { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLessonId { raw } => write!(f, "invalid --lesson value: {raw}"),
            ArgsError::LessonOutOfRange { lesson, total } => {
                write!(f, "lesson {lesson} is outside the course (1..={total})")
            }
            ArgsError::InvalidTotalLessons { raw } => {
                write!(f, "invalid --total-lessons value: {raw}")
            }
            ArgsError::InvalidSource { raw } => write!(f, "invalid --lessons value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    config: ViewerConfig,
    loader: LessonLoader,
}

impl UiApp for DesktopApp {
    fn viewer_config(&self) -> ViewerConfig {
        self.config.clone()
    }

    fn lesson_loader(&self) -> LessonLoader {
        self.loader.clone()
    }
}

#[derive(Debug)]
struct Args {
    lessons_source: String,
    config: ViewerConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--lessons <dir|url>] [--lesson <id>] [--total-lessons <n>] [--course <name>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --lessons .          (reads ./lessons/<id>.json)");
    eprintln!("  --lesson 1");
    eprintln!("  --total-lessons 30");
    eprintln!("  --course Dholuo");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEARN_LESSONS_SOURCE, LEARN_DEFAULT_LESSON, LEARN_TOTAL_LESSONS,");
    eprintln!("  LEARN_COURSE_NAME, LEARN_LOG");
}

fn parse_lesson_id(raw: String) -> Result<LessonId, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidLessonId { raw })
}

fn parse_total_lessons(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(total) if total > 0 => Ok(total),
        _ => Err(ArgsError::InvalidTotalLessons { raw }),
    }
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    /// `Ok(None)` means usage was requested.
    fn parse_with_env(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut lessons_source = env("LEARN_LESSONS_SOURCE").unwrap_or_else(|| ".".into());
        let mut config = ViewerConfig::default();
        if let Some(raw) = env("LEARN_DEFAULT_LESSON") {
            config = config.with_default_lesson(parse_lesson_id(raw)?);
        }
        if let Some(raw) = env("LEARN_TOTAL_LESSONS") {
            config = config.with_total_lessons(parse_total_lessons(raw)?);
        }
        if let Some(name) = env("LEARN_COURSE_NAME").filter(|name| !name.trim().is_empty()) {
            config = config.with_course_name(name);
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lessons" => {
                    let value = require_value(&mut args, "--lessons")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSource { raw: value });
                    }
                    lessons_source = value;
                }
                "--lesson" => {
                    let value = require_value(&mut args, "--lesson")?;
                    config = config.with_default_lesson(parse_lesson_id(value)?);
                }
                "--total-lessons" => {
                    let value = require_value(&mut args, "--total-lessons")?;
                    config = config.with_total_lessons(parse_total_lessons(value)?);
                }
                "--course" => {
                    let value = require_value(&mut args, "--course")?;
                    config = config.with_course_name(value);
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if !config.lesson_in_range(&config.default_lesson) {
            return Err(ArgsError::LessonOutOfRange {
                lesson: config.default_lesson,
                total: config.total_lessons,
            });
        }

        Ok(Some(Self {
            lessons_source,
            config,
        }))
    }
}

fn init_logging() {
    let level = std::env::var("LEARN_LOG")
        .ok()
        .and_then(|raw| raw.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logging disabled: {err}");
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let Some(parsed) = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    init_logging();

    let storage = Storage::from_location(&parsed.lessons_source)?;
    tracing::info!(
        source = %parsed.lessons_source,
        lesson = %parsed.config.default_lesson,
        total_lessons = parsed.config.total_lessons,
        "starting lesson viewer"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        config: parsed.config,
        loader: LessonLoader::new(storage.lessons),
    });
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(format!("Learn {}", context.config().course_name))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

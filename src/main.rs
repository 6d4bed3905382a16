use std::ffi::OsStr;
use std::path::PathBuf;

use alaconf::actions::dispatch::{apply_fields, AlacrittyMsg, Dispatcher};
use alaconf::data::fields::{ConfigFields, DEFAULT_WINDOW_OPACITY};
use alaconf::data::options::{CURSOR_STYLES, WINDOW_DECORATIONS, WINDOW_STARTUP_MODES};
use alaconf::transforms::build::build_payload;
use clap::builder::{PossibleValue, StringValueParser, TypedValueParser};
use clap::{Args as ClapArgs, CommandFactory, Parser, Subcommand};
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

/// Change the settings of a running Alacritty
#[derive(Parser, Debug)]
#[command(name = "alaconf")]
#[command(version, about, long_about = None)]
struct Args {
    /// Alacritty executable to invoke
    #[arg(long, global = true, env = "ALACONF_ALACRITTY", default_value = "alacritty")]
    alacritty: PathBuf,

    /// IPC socket of the Alacritty instance (default: Alacritty's own lookup)
    #[arg(long, global = true, value_name = "PATH")]
    socket: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Change several Alacritty settings at once
    Config(ConfigArgs),
    /// Reset Alacritty settings changed at runtime
    Reset {
        /// Only reset this window (default: all windows)
        #[arg(long, value_name = "ID")]
        window_id: Option<String>,
    },
    /// Print a shell completion script
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ClapArgs, Debug)]
struct ConfigArgs {
    /// Font size
    #[arg(long, default_value_t = 0.0)]
    font_size: f64,

    /// Font family
    #[arg(long, value_name = "FAMILY")]
    font_family: Option<String>,

    /// Font family for bold text
    #[arg(long, value_name = "FAMILY")]
    font_bold_family: Option<String>,

    /// Font family for italic text
    #[arg(long, value_name = "FAMILY")]
    font_italic_family: Option<String>,

    /// Cursor style (Block, Underline, Beam)
    #[arg(long, value_name = "STYLE", value_parser = Suggest(CURSOR_STYLES))]
    cursor_style: Option<String>,

    /// Make the cursor blink
    #[arg(long)]
    cursor_blink: bool,

    /// Window startup mode (Windowed, Maximized, Fullscreen, SimpleFullscreen)
    #[arg(long, value_name = "MODE", value_parser = Suggest(WINDOW_STARTUP_MODES))]
    window_startup_mode: Option<String>,

    /// Window decorations (Full, None, Transparent, Buttonless)
    #[arg(long, value_name = "DECORATIONS", value_parser = Suggest(WINDOW_DECORATIONS))]
    window_decorations: Option<String>,

    /// Window opacity (0.0-1.0)
    #[arg(long, default_value_t = DEFAULT_WINDOW_OPACITY)]
    window_opacity: f64,

    /// Window x position
    #[arg(long, allow_negative_numbers = true)]
    window_x: Option<i64>,

    /// Window y position
    #[arg(long, allow_negative_numbers = true)]
    window_y: Option<i64>,

    /// Window width in columns
    #[arg(long)]
    window_columns: Option<i64>,

    /// Window height in lines
    #[arg(long)]
    window_lines: Option<i64>,

    /// Window title
    #[arg(long, value_name = "TITLE")]
    window_title: Option<String>,

    /// Let programs running in the terminal change the window title
    #[arg(long)]
    window_dynamic_title: bool,

    /// Only change this window (default: all windows)
    #[arg(long, value_name = "ID")]
    window_id: Option<String>,

    /// Print the generated configuration instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl ConfigArgs {
    fn fields(&self) -> ConfigFields {
        ConfigFields {
            font_size: self.font_size,
            font_family: self.font_family.clone().unwrap_or_default(),
            font_bold_family: self.font_bold_family.clone().unwrap_or_default(),
            font_italic_family: self.font_italic_family.clone().unwrap_or_default(),
            cursor_style: self.cursor_style.clone().unwrap_or_default(),
            cursor_blink: self.cursor_blink,
            window_startup_mode: self.window_startup_mode.clone().unwrap_or_default(),
            window_decorations: self.window_decorations.clone().unwrap_or_default(),
            window_opacity: self.window_opacity,
            window_x: self.window_x,
            window_y: self.window_y,
            window_columns: self.window_columns,
            window_lines: self.window_lines,
            window_title: self.window_title.clone().unwrap_or_default(),
            window_dynamic_title: self.window_dynamic_title,
        }
    }
}

/// Accepts any string but offers the listed names to shell completion.
///
/// Membership is checked when the document is built so the error names
/// the field and its allowed values.
#[derive(Clone, Copy)]
struct Suggest(&'static [&'static str]);

impl TypedValueParser for Suggest {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(self.0.iter().map(|v| PossibleValue::new(*v))))
    }
}

fn init_logging() {
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "info" => TraceLevel::INFO,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error setting up logging: {}", e);
    }
}

fn run(args: Args) -> alaconf::error::Result<()> {
    let msg = AlacrittyMsg::new(args.alacritty).with_socket(args.socket);

    match args.command {
        Commands::Config(config) => {
            let fields = config.fields();
            if config.dry_run {
                print!("{}", build_payload(&fields)?);
                return Ok(());
            }
            let payload = apply_fields(&fields, &msg.with_window_id(config.window_id))?;
            println!("Configuration applied:\n{}", payload.trim_end());
        }
        Commands::Reset { window_id } => {
            msg.with_window_id(window_id).reset()?;
            println!("Alacritty configuration reset");
        }
        Commands::Completion { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(shell, &mut cmd, "alaconf", &mut std::io::stdout());
        }
    }
    Ok(())
}

/// Exit code for a failed parse. Help and version output keep clap's 0;
/// real parse errors exit 1 like every other failure.
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        err.exit_code()
    }
}

fn main() {
    init_logging();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

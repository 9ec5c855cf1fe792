mod commands;
mod highlighter;
mod lexer;
mod render;
mod session;

use clap::Parser;
use keypad::{CalculatorOptions, Calculator, ERROR_DISPLAY, EngineOptions, render_error};
use keypad_core::{format::DEFAULT_PRECISION, history::DEFAULT_HISTORY_LIMIT, parser::DEFAULT_MAX_DEPTH};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, Emacs, IdeMenu,
    KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu,
    Signal, default_emacs_keybindings,
};
use std::io::{BufRead, BufReader, Write};

use crate::highlighter::Highlighter;
use crate::render::Renderer;
use crate::session::{Outcome, Session, press_line};

/// Keypad - a calculator with a short result history
#[derive(Parser, Debug)]
#[command(name = "keypad")]
#[command(about = "Evaluate arithmetic and keep the latest results", long_about = None)]
struct Args {
    /// Number of results kept in the history
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Fractional digits kept in non-integer results
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Maximum parenthesis nesting
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Show source-annotated diagnostics for failed expressions
    #[arg(long)]
    diagnostics: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn calculator_options(&self) -> CalculatorOptions {
        CalculatorOptions {
            engine: EngineOptions {
                max_depth: self.max_depth,
                precision: self.precision,
                ..EngineOptions::default()
            },
            history_limit: self.history_limit,
        }
    }
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let commands: Vec<String> = commands::NAMES.iter().map(|name| name.to_string()).collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&[':', '-']);
        completions.insert(commands);
        completions
    });

    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_correct_cursor_pos(false);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(ide_menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("keypad".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Evaluate `line` once. Results go to stdout, failures to stderr.
fn run_once(options: CalculatorOptions, line: &str) -> Result<()> {
    let mut calc = Calculator::new(options);
    press_line(&mut calc, line);

    if calc.display() == ERROR_DISPLAY {
        match calc.take_last_error() {
            Some(err) => render_error(&err),
            None => eprintln!("{}", calc.status().message()),
        }
        std::process::exit(1);
    }

    println!("{}", calc.display());
    Ok(())
}

fn repl(mut session: Session) -> Result<()> {
    let (mut line_editor, prompt) = setup_reedline();
    let mut stdout = std::io::stdout();

    println!("Keypad - type an expression, :help for commands (Ctrl+D or Ctrl+C to exit)");

    loop {
        let sig = match line_editor.read_line(&prompt) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Reedline error: {e}");
                return Ok(());
            }
        };

        match sig {
            Signal::Success(buffer) => {
                if session.handle_line(&buffer, &mut stdout).into_diagnostic()? == Outcome::Quit {
                    return Ok(());
                }
                stdout.flush().into_diagnostic()?;
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                return Ok(());
            }
        }
    }
}

fn pipe(mut session: Session) -> Result<()> {
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading line from stdin: {}", e);
                return Ok(());
            }
        };

        if session.handle_line(&line, &mut stdout).into_diagnostic()? == Outcome::Quit {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level, WARN when unset.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = args.calculator_options();
    tracing::debug!(?options, "starting");

    if let Some(expr) = &args.expression {
        return run_once(options, expr);
    }

    let color = atty::is(atty::Stream::Stdout);
    let session = Session::new(Calculator::new(options), Renderer::new(color), args.diagnostics);

    if atty::is(atty::Stream::Stdin) {
        repl(session)
    } else {
        pipe(session)
    }
}

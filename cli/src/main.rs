use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use kallipolis::{Interpreter, InterpreterOptions, render_error};
use miette::{IntoDiagnostic, Result, WrapErr};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, EditCommand, Emacs,
    ExampleHighlighter, IdeMenu, KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};

/// Kal - expressions, assignments and type judgments on a stack machine
#[derive(Parser, Debug)]
#[command(name = "kal")]
#[command(about = "Evaluate Kal programs", long_about = None)]
struct Args {
    /// Program file to run as a single input
    file: Option<PathBuf>,

    /// Program to evaluate instead of reading a file or stdin
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Print the parsed AST before evaluating (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Log every executed command and its outcome
    #[arg(long)]
    trace: bool,

    /// Maximum number of values on the operand stack
    #[arg(long, default_value_t = InterpreterOptions::default().max_stack_size)]
    max_stack_size: usize,
}

/// Names offered by the completer and highlighted in the shell.
const TYPE_NAMES: &[&str] = &["Int", "String"];

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let words: Vec<String> = TYPE_NAMES.iter().map(|name| name.to_string()).collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['_']);
        completions.insert(words.clone());
        completions
    });

    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(ExampleHighlighter::new(words)))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(ide_menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("Kal".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Evaluates one input, printing the result or the rendered error.
///
/// Returns whether the evaluation succeeded.
fn interpret_input(kal: &mut Interpreter, input: &str, debug_parse: bool) -> bool {
    if debug_parse {
        match kal.parse_tree(input) {
            Ok(tree) => {
                println!("=== Parsed AST ===");
                println!("{}", tree);
                println!();
            }
            Err(e) => {
                render_error(&e, input);
                return false;
            }
        }
    }

    match kal.evaluate(input) {
        Ok(Some(value)) => {
            println!("{}", value);
            true
        }
        Ok(None) => true,
        Err(e) => {
            render_error(&e, input);
            false
        }
    }
}

fn init_logging(trace: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG wins; otherwise WARN, or INFO when tracing commands.
    let default = if trace { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.trace)?;
    tracing::debug!(?args, "starting");

    let mut kal = Interpreter::with_options(InterpreterOptions {
        trace_commands: args.trace,
        max_stack_size: args.max_stack_size,
    });

    // A single program: `-e` or a file.
    let program = match (&args.eval, &args.file) {
        (Some(source), _) => Some(source.clone()),
        (None, Some(path)) => Some(
            std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("cannot read {}", path.display()))?,
        ),
        (None, None) => None,
    };
    if let Some(source) = program {
        if !interpret_input(&mut kal, &source, args.debug_parse) {
            std::process::exit(1);
        }
        return Ok(());
    }

    if atty::is(atty::Stream::Stdin) {
        // Interactive mode
        let (mut line_editor, prompt) = setup_reedline();

        loop {
            let sig = line_editor
                .read_line(&prompt)
                .into_diagnostic()
                .wrap_err("line editor failed")?;

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&mut kal, &buffer, args.debug_parse);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe mode: every line is a separate input on the same session.
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic().wrap_err("cannot read stdin")?;
            interpret_input(&mut kal, &line, args.debug_parse);
        }
    }

    Ok(())
}

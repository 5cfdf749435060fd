// cparen: full and minimal parenthesization of C expressions

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use cparen::blocks::{Block, Parens};
use cparen::report::{self, Format, Options};
use cparen::ui::App;

#[derive(Parser)]
#[command(name = "cparen", version)]
#[command(about = "Shows how a C expression is grouped, with full and minimal parentheses")]
struct Args {
    /// The C expression, quoted as one argument
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only one of the two renderings
    #[arg(long, value_enum)]
    only: Option<Parens>,

    /// List every block with its description and operand ranges
    #[arg(long)]
    blocks: bool,

    /// Open the interactive inspector instead of printing
    #[arg(long, conflicts_with_all = ["format", "blocks"])]
    inspect: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let blocks = match cparen::parenthesize(&args.expression) {
        Ok(blocks) => blocks,
        Err(e) => {
            log::debug!("rejected {:?}: {:?}", args.expression, e);
            let mut stdout = io::stdout().lock();
            if let Err(io_err) = report::write_error(&mut stdout, &args.expression, &e, args.format) {
                eprintln!("Error: {}", io_err);
            }
            return ExitCode::FAILURE;
        }
    };

    let result = if args.inspect {
        inspect(args.expression, blocks, args.only.unwrap_or(Parens::Full))
    } else {
        let options = Options {
            format: args.format,
            only: args.only,
            blocks: args.blocks,
        };
        let mut stdout = io::stdout().lock();
        report::write_report(&mut stdout, &args.expression, &blocks, &options)
            .and_then(|()| stdout.flush())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn inspect(source: String, blocks: Vec<Block>, parens: Parens) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(source, blocks, parens);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

// keisan-drill-gen: generate printable hyakumasu keisan worksheet PDFs.

use std::path::Path;
use std::process;
use std::str::FromStr;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use keisan_drill_gen::{
    generate_worksheet, save_worksheet, Error, Operation, Result, WorksheetRequest,
};

const DEFAULT_OUTPUT: &str = "hyakumasu-keisan.pdf";
/// Output name used when a custom title replaces the default heading.
const CUSTOM_OUTPUT: &str = "hyakumasu-keisan-custom.pdf";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate printable hyakumasu keisan (100-cell calculation) worksheets"
)]
struct Args {
    /// Arithmetic operation: addition, subtraction, or multiplication
    #[arg(long, default_value = "addition")]
    operation: String,

    /// Append an answer-key page
    #[arg(short, long)]
    answers: bool,

    /// Custom worksheet title (also switches the default output name)
    #[arg(short, long)]
    title: Option<String>,

    /// RNG seed for a reproducible sheet
    #[arg(short, long)]
    seed: Option<u64>,

    /// TTF font to embed: a file path or an http(s) URL
    #[arg(long)]
    font: Option<String>,

    /// Output file name
    #[arg(short, long)]
    output: Option<String>,

    /// Print the worksheet model as JSON to stdout instead of writing a PDF
    #[arg(long)]
    json: bool,
}

fn main() {
    // Logs go to stderr so `--json` output stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let operation = Operation::from_str(&args.operation)?;

    let request = WorksheetRequest {
        operation,
        include_answers: args.answers,
        title: args.title,
        rng_seed: args.seed,
    };
    let custom_title = request.title.is_some();
    let model = generate_worksheet(request);

    if args.json {
        let json = serde_json::to_string_pretty(&model)
            .map_err(|e| Error::Render(format!("worksheet JSON: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    let output = args.output.unwrap_or_else(|| {
        let name = if custom_title { CUSTOM_OUTPUT } else { DEFAULT_OUTPUT };
        name.to_string()
    });
    save_worksheet(&model, args.font.as_deref(), Path::new(&output))?;

    println!("Generated: {output}");
    println!("  Operation: {}", model.operation);
    println!("  Sheet ID:  {}", model.sheet_id);
    if model.include_answers {
        println!("  Pages:     problems + answer key");
    } else {
        println!("  Pages:     problems only");
    }
    Ok(())
}

use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[clap(styles = CARGO_STYLING)]
struct Cli {
    /// Partition table file, one comma-separated partition per row
    #[arg()]
    table_path: String,

    /// Name of the partition to locate
    #[arg()]
    partition_name: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match partoff::resolve_offset_in_file(&cli.table_path, &cli.partition_name) {
        Ok(offset) => println!("{offset:#x}"),
        Err(err) => {
            log::debug!("resolution failed: {err:?}");
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

use anyhow::{Context, Result};
use clap::Parser;

use ref_version::domain::{pre_release_part, RefContext, ReleaseChannel};
use ref_version::{boundary, ui};

#[derive(clap::Parser)]
#[command(
    name = "ref-version",
    about = "Extract the release version from a CI ref and classify its channel"
)]
struct Args {
    #[arg(
        value_name = "REF",
        help = "Fully qualified git ref (defaults to $GITHUB_REF)"
    )]
    git_ref: Option<String>,

    #[arg(short, long, help = "Print the release channel instead of the version")]
    channel: bool,

    #[arg(short, long, help = "Suppress the summary printed to stderr")]
    quiet: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("ref-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // The ref comes from the CI context: an explicit argument, or the
    // GITHUB_REF variable the host populates for every workflow run.
    let ref_name = match args.git_ref {
        Some(ref_name) => ref_name,
        None => std::env::var("GITHUB_REF")
            .context("no ref argument given and GITHUB_REF is not set")?,
    };

    let context = RefContext::new(ref_name);
    let version = match context.tag_version() {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Some(warning) = boundary::check_tag_version(&version) {
        ui::display_warning(&warning);
    }

    let channel = ReleaseChannel::for_version(&version);

    if !args.quiet {
        ui::display_release(
            &context.ref_name,
            &version,
            channel,
            pre_release_part(&version),
        );
    }

    if args.channel {
        println!("{}", channel);
    } else {
        println!("{}", version);
    }

    Ok(())
}

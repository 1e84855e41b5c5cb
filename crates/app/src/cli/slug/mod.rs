use clap::{Args, Subcommand};
use groomerlink_app::domain::profiles::slugs::{Slug, derive_slug};

#[derive(Debug, Args)]
pub(crate) struct SlugCommand {
    #[command(subcommand)]
    command: SlugSubcommand,
}

#[derive(Debug, Subcommand)]
enum SlugSubcommand {
    /// Show the slug a display name derives to
    Derive(DeriveArgs),
}

#[derive(Debug, Args)]
pub(crate) struct DeriveArgs {
    /// Display name to derive from
    name: String,
}

pub(crate) fn run(command: &SlugCommand) {
    match &command.command {
        SlugSubcommand::Derive(args) => {
            let derived = derive_slug(&args.name);

            match Slug::parse(&derived) {
                Ok(slug) => println!("{slug}"),
                Err(error) => println!("{derived:?} is not usable: {error}"),
            }
        }
    }
}

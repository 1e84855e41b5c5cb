use clap::{Args, Subcommand};

mod show;

#[derive(Debug, Args)]
pub(crate) struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProfileSubcommand {
    /// Print a stored profile
    Show(show::ShowProfileArgs),
}

pub(crate) async fn run(command: ProfileCommand) -> Result<(), String> {
    match command.command {
        ProfileSubcommand::Show(args) => show::run(args).await,
    }
}

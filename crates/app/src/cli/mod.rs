use clap::{Parser, Subcommand};

mod db;
mod profile;
mod slug;

#[derive(Debug, Parser)]
#[command(name = "groomerlink-app", about = "GroomerLink CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Profile(profile::ProfileCommand),
    Slug(slug::SlugCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Profile(command) => profile::run(command).await,
            Commands::Slug(command) => {
                slug::run(&command);
                Ok(())
            }
        }
    }
}

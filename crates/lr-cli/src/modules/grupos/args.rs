use clap::{Args, Subcommand};

use crate::modules::shared::args::PageArgs;

#[derive(Args)]
pub struct GrupoArgs {
    #[command(subcommand)]
    pub command: GrupoCommand,
}

#[derive(Subcommand)]
pub enum GrupoCommand {
    List(GrupoListArgs),
    Get(GrupoGetArgs),
    Create(GrupoCreateArgs),
    Update(GrupoUpdateArgs),
    Delete(GrupoDeleteArgs),
}

#[derive(Args)]
pub struct GrupoListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct GrupoGetArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct GrupoCreateArgs {
    #[arg(long)]
    pub nombre: String,
    #[arg(long)]
    pub descripcion: Option<String>,
}

#[derive(Args)]
pub struct GrupoUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub nombre: Option<String>,
    #[arg(long)]
    pub descripcion: Option<String>,
}

#[derive(Args)]
pub struct GrupoDeleteArgs {
    pub id: i64,
}

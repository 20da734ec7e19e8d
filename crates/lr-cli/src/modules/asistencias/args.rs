use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::modules::shared::args::PageArgs;

#[derive(Args)]
pub struct AsistenciaArgs {
    #[command(subcommand)]
    pub command: AsistenciaCommand,
}

#[derive(Subcommand)]
pub enum AsistenciaCommand {
    List(AsistenciaListArgs),
    Get(AsistenciaGetArgs),
    Create(AsistenciaCreateArgs),
    Update(AsistenciaUpdateArgs),
    Delete(AsistenciaDeleteArgs),
}

#[derive(Args)]
pub struct AsistenciaListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct AsistenciaGetArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct AsistenciaCreateArgs {
    #[arg(long, help = "Athlete user id")]
    pub alumno: i64,
    #[arg(long, help = "Session date, e.g. 2025-06-01")]
    pub fecha: NaiveDate,
    #[arg(long)]
    pub presente: bool,
    #[arg(long)]
    pub nota: Option<String>,
}

#[derive(Args)]
pub struct AsistenciaUpdateArgs {
    pub id: i64,
    #[arg(long, help = "Athlete user id")]
    pub alumno: Option<i64>,
    #[arg(long, help = "Session date, e.g. 2025-06-01")]
    pub fecha: Option<NaiveDate>,
    #[arg(long)]
    pub presente: Option<bool>,
    #[arg(long)]
    pub nota: Option<String>,
}

#[derive(Args)]
pub struct AsistenciaDeleteArgs {
    pub id: i64,
}

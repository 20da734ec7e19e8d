use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::modules::shared::args::PageArgs;

#[derive(Args)]
pub struct SessionDayArgs {
    #[command(subcommand)]
    pub command: SessionDayCommand,
}

#[derive(Subcommand)]
pub enum SessionDayCommand {
    List(SessionDayListArgs),
    Get(SessionDayGetArgs),
    Create(SessionDayCreateArgs),
    Update(SessionDayUpdateArgs),
    Delete(SessionDayDeleteArgs),
    Activate(SessionDayActivateArgs),
    Deactivate(SessionDayDeactivateArgs),
}

#[derive(Args)]
pub struct SessionDayListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct SessionDayGetArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct SessionDayCreateArgs {
    #[arg(long, help = "Group id")]
    pub grupo: i64,
    #[arg(long, help = "Session date, e.g. 2025-06-01")]
    pub fecha: NaiveDate,
    #[arg(long)]
    pub active: bool,
}

#[derive(Args)]
pub struct SessionDayUpdateArgs {
    pub id: i64,
    #[arg(long, help = "Group id")]
    pub grupo: Option<i64>,
    #[arg(long, help = "Session date, e.g. 2025-06-01")]
    pub fecha: Option<NaiveDate>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args)]
pub struct SessionDayDeleteArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct SessionDayActivateArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct SessionDayDeactivateArgs {
    pub id: i64,
}

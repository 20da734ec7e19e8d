use chrono::NaiveDate;
use clap::{Args, Subcommand};

use lr_core::Rol;

use crate::modules::shared::args::PageArgs;

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    List(UserListArgs),
    Get(UserGetArgs),
    Create(UserCreateArgs),
    Update(UserUpdateArgs),
    Delete(UserDeleteArgs),
}

#[derive(Args)]
pub struct UserListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct UserGetArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, help = "ALUMNO, ENTRENADOR, ASISTENTE or ADMINISTRADOR")]
    pub rol: Option<Rol>,
    #[arg(long, help = "Group id")]
    pub grupo: Option<i64>,
    #[arg(long)]
    pub exento_pago: bool,
    #[arg(long)]
    pub inactivo_desde: Option<NaiveDate>,
}

#[derive(Args)]
pub struct UserUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, help = "ALUMNO, ENTRENADOR, ASISTENTE or ADMINISTRADOR")]
    pub rol: Option<Rol>,
    #[arg(long, help = "Group id")]
    pub grupo: Option<i64>,
    #[arg(long)]
    pub exento_pago: Option<bool>,
    #[arg(long)]
    pub inactivo_desde: Option<NaiveDate>,
    #[arg(long)]
    pub is_active: Option<bool>,
}

#[derive(Args)]
pub struct UserDeleteArgs {
    pub id: i64,
}

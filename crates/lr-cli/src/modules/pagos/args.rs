use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use lr_core::TipoTransaccion;

use crate::modules::shared::args::PageArgs;

#[derive(Args)]
pub struct PagoArgs {
    #[command(subcommand)]
    pub command: PagoCommand,
}

#[derive(Subcommand)]
pub enum PagoCommand {
    List(PagoListArgs),
    Get(PagoGetArgs),
    Create(PagoCreateArgs),
    Update(PagoUpdateArgs),
    Delete(PagoDeleteArgs),
}

#[derive(Args)]
pub struct PagoListArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args)]
pub struct PagoGetArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct PagoCreateArgs {
    #[arg(long, help = "Athlete user id")]
    pub alumno: i64,
    #[arg(long, help = "Payment date, e.g. 2025-06-01")]
    pub fecha_pago: NaiveDate,
    #[arg(long)]
    pub numero_referencia: String,
    #[arg(
        long,
        help = "PAGO_MOVIL, TRANSFERENCIA, DEPOSITO, EFECTIVO, ZELLE, BINANCE, PAYPAL or OTRO"
    )]
    pub tipo_transaccion: Option<TipoTransaccion>,
    #[arg(long)]
    pub banco_emisor: Option<String>,
    #[arg(long, help = "Path to a proof-of-payment image")]
    pub comprobante: Option<PathBuf>,
}

#[derive(Args)]
pub struct PagoUpdateArgs {
    pub id: i64,
    #[arg(long, help = "Athlete user id")]
    pub alumno: Option<i64>,
    #[arg(long, help = "Payment date, e.g. 2025-06-01")]
    pub fecha_pago: Option<NaiveDate>,
    #[arg(long)]
    pub numero_referencia: Option<String>,
    #[arg(
        long,
        help = "PAGO_MOVIL, TRANSFERENCIA, DEPOSITO, EFECTIVO, ZELLE, BINANCE, PAYPAL or OTRO"
    )]
    pub tipo_transaccion: Option<TipoTransaccion>,
    #[arg(long)]
    pub banco_emisor: Option<String>,
    #[arg(long, help = "Path to a proof-of-payment image")]
    pub comprobante: Option<PathBuf>,
}

#[derive(Args)]
pub struct PagoDeleteArgs {
    pub id: i64,
}

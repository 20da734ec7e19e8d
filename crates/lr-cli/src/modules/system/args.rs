use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Store the API address used when --addr is absent")]
    SetAddr(SetAddrArgs),
    #[command(about = "Store the page size used when --page-size is absent")]
    SetPageSize(SetPageSizeArgs),
    #[command(about = "Print the stored configuration")]
    Show,
}

#[derive(Args)]
pub struct SetAddrArgs {
    #[arg(help = "Base API address, e.g. https://gym.example.com/api")]
    pub addr: String,
}

#[derive(Args)]
pub struct SetPageSizeArgs {
    #[arg(help = "Items per page for list commands")]
    pub page_size: u32,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Subcommand)]
pub enum StatsCommand {
    #[command(about = "Print the number of active athletes")]
    UsersCount(UsersCountArgs),
}

#[derive(Args)]
pub struct UsersCountArgs {
    #[arg(long, help = "Print the raw JSON response")]
    pub json: bool,
}

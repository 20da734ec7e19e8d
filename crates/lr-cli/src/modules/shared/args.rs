use clap::Args;

#[derive(Args)]
pub struct PageArgs {
    #[arg(long, help = "Page number to fetch (1-based)")]
    pub page: Option<u32>,
    #[arg(long, help = "Items per page, defaults to the configured page size")]
    pub page_size: Option<u32>,
    #[arg(long, help = "Print the raw JSON response instead of a table")]
    pub json: bool,
}

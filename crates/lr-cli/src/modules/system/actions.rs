use reqwest::Method;

use lr_core::UsersCountResponse;

use crate::cli_args::{StatsArgs, StatsCommand};
use crate::modules::system::http::{parse_json, print_json_response, send_request, RequestBody};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_stats_command(
    args: StatsArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        StatsCommand::UsersCount(count_args) => {
            let url = format!(
                "{}/stats/users-count/",
                ctx.api.addr().trim_end_matches('/')
            );
            let response = send_request(ctx, Method::GET, url, RequestBody::Empty).await?;
            if count_args.json {
                return print_json_response(response).await;
            }
            let stats: UsersCountResponse = parse_json(response).await?;
            println!("{}", stats.athletes_count);
            Ok(())
        }
    }
}

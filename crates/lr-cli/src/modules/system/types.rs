use serde::{Deserialize, Serialize};

use crate::modules::system::http::ApiClient;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct CliConfig {
    #[serde(default)]
    pub(crate) addr: Option<String>,
    #[serde(default)]
    pub(crate) default_page_size: Option<u32>,
}

pub(crate) struct CommandContext<'a> {
    pub(crate) api: ApiClient,
    pub(crate) config: &'a CliConfig,
}

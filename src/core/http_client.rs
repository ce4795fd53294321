use reqwest::Client;

pub fn build_http_client(disable_proxy: bool) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent("travel-planner-server/0.1");

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}

use std::path::Path;

mod cli;
mod config;
mod handler;
mod http;
mod logger;
mod server;

use logger::LogSink;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match cli::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("Usage: solohttpd -webRoot=<dir> -webIP=<address> -webPort=<port>");
            std::process::exit(1);
        }
    };

    let cfg = config::Config::load(&args)?;

    // Single-connection model: requests are served one at a time, so a
    // current-thread runtime is all the server needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let log = logger::FileLogger::create(Path::new(&cfg.logging.log_file))?;

    logger::log_server_start(&addr, &cfg);

    let result = server::serve(listener, &cfg, &log).await;
    log.log("[SERVER SHUTDOWN]");
    result.map_err(Into::into)
}

use log::{error, info};
use sshsweep::config::{self, Config};
use sshsweep::hostlist;
use sshsweep::logging;
use sshsweep::runner::{Runner, SshProber, SuccessLog};

#[tokio::main]
async fn main() {
    logging::init_logging();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> sshsweep::Result<()> {
    let matches = config::command().get_matches();
    let config = Config::try_from(&matches)?;

    let hosts = hostlist::read_hosts(&config.list)?;
    info!("Loaded {} hosts from {}", hosts.len(), config.list.display());

    let mut log = SuccessLog::open(&config.output)?;

    let prober = SshProber::new(&config);
    let runner = Runner::new(prober, config.delay);
    runner.run(&hosts, &mut log).await?;

    Ok(())
}

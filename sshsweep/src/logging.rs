use chrono::Local;
use std::io::Write;

/// Diagnostics go to stderr so stdout stays the per-host result stream.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");

    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

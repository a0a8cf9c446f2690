use clap::{value_parser, Arg};
use std::path::PathBuf;
use std::time::Duration;

pub fn command() -> clap::Command {
    clap::command!()
        .about("Attempt SSH logins across a host list and record which hosts accept")
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .required(true)
                .help("SSH username"),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .required(true)
                .help("SSH password"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .default_value("list.txt")
                .value_parser(value_parser!(PathBuf))
                .help("File containing the list of hosts, one per line"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("ssh_success_log.txt")
                .value_parser(value_parser!(PathBuf))
                .help("File successful logins are appended to"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .default_value("22")
                .value_parser(value_parser!(u16))
                .help("SSH port"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .default_value("10")
                .value_parser(value_parser!(u64))
                .help("Connection timeout in seconds"),
        )
        .arg(
            Arg::new("delay")
                .short('d')
                .long("delay")
                .default_value("1")
                .value_parser(value_parser!(u64))
                .help("Delay between attempts in seconds"),
        )
}

#[derive(Debug)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub list: PathBuf,
    pub output: PathBuf,
    pub port: u16,
    pub timeout: Duration,
    pub delay: Duration,
}

impl TryFrom<&clap::ArgMatches> for Config {
    type Error = crate::Error;

    fn try_from(matches: &clap::ArgMatches) -> crate::Result<Self> {
        fn missing(name: &str) -> crate::Error {
            crate::Error::ArgumentError(name.to_string())
        }

        Ok(Self {
            username: matches
                .get_one::<String>("username")
                .ok_or_else(|| missing("username"))?
                .clone(),
            password: matches
                .get_one::<String>("password")
                .ok_or_else(|| missing("password"))?
                .clone(),
            list: matches
                .get_one::<PathBuf>("list")
                .ok_or_else(|| missing("list"))?
                .clone(),
            output: matches
                .get_one::<PathBuf>("output")
                .ok_or_else(|| missing("output"))?
                .clone(),
            port: *matches.get_one::<u16>("port").ok_or_else(|| missing("port"))?,
            timeout: Duration::from_secs(
                *matches
                    .get_one::<u64>("timeout")
                    .ok_or_else(|| missing("timeout"))?,
            ),
            delay: Duration::from_secs(
                *matches
                    .get_one::<u64>("delay")
                    .ok_or_else(|| missing("delay"))?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_interface() {
        let matches = command()
            .try_get_matches_from(["sshsweep", "-u", "root", "-p", "hunter2"])
            .unwrap();
        let config = Config::try_from(&matches).unwrap();

        assert_eq!(config.username, "root");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.list, PathBuf::from("list.txt"));
        assert_eq!(config.output, PathBuf::from("ssh_success_log.txt"));
        assert_eq!(config.port, 22);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.delay, Duration::from_secs(1));
    }

    #[test]
    fn username_and_password_are_required() {
        assert!(command()
            .try_get_matches_from(["sshsweep", "-u", "root"])
            .is_err());
        assert!(command()
            .try_get_matches_from(["sshsweep", "-p", "hunter2"])
            .is_err());
    }

    #[test]
    fn overrides_are_honored() {
        let matches = command()
            .try_get_matches_from([
                "sshsweep", "-u", "root", "-p", "hunter2", "-l", "fleet.txt", "-o", "ok.log",
                "--port", "2222", "-t", "3", "-d", "0",
            ])
            .unwrap();
        let config = Config::try_from(&matches).unwrap();

        assert_eq!(config.list, PathBuf::from("fleet.txt"));
        assert_eq!(config.output, PathBuf::from("ok.log"));
        assert_eq!(config.port, 2222);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.delay, Duration::ZERO);
    }
}

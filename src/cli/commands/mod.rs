pub mod logging;

use crate::app::config::{ENV_API_BASE_URL, ENV_SESSION_FILE, ENV_TIMEOUT_MS};
use crate::signup::Gender;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    builder::ValueParser,
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_FILE: &str = "session-file";
pub const ARG_TIMEOUT_MS: &str = "timeout-ms";

pub const ARG_NAME: &str = "name";
pub const ARG_DATE_OF_BIRTH: &str = "date-of-birth";
pub const ARG_GENDER: &str = "gender";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

pub fn validator_gender() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<Gender, String> {
        value.parse::<Gender>()
    })
}

fn gender_help() -> String {
    let labels: Vec<&str> = Gender::ALL.iter().map(|gender| gender.label()).collect();
    format!(
        "Gender ({}); accepts female, male, prefer-not-to-say or Feminino, Masculino, NaoInformar",
        labels.join(", ")
    )
}

fn signup_command() -> Command {
    Command::new("signup")
        .about("Create an account and sign in")
        .arg(
            Arg::new(ARG_NAME)
                .long("name")
                .help("Full name")
                .env("FLORALBOT_NAME")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_DATE_OF_BIRTH)
                .long("date-of-birth")
                .visible_alias("dob")
                .help("Date of birth, YYYY-MM-DD")
                .env("FLORALBOT_DATE_OF_BIRTH")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_GENDER)
                .long("gender")
                .help(gender_help())
                .env("FLORALBOT_GENDER")
                .value_parser(validator_gender()),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .long("email")
                .help("Email address")
                .env("FLORALBOT_EMAIL")
                .default_value(""),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long("password")
                .help("Password (prefer the environment variable)")
                .env("FLORALBOT_PASSWORD")
                .hide_env_values(true)
                .default_value(""),
        )
}

fn age_command() -> Command {
    Command::new("age")
        .about("Show the age derived from a date of birth")
        .arg(
            Arg::new(ARG_DATE_OF_BIRTH)
                .long("date-of-birth")
                .visible_alias("dob")
                .help("Date of birth, YYYY-MM-DD")
                .default_value(""),
        )
}

fn session_command() -> Command {
    Command::new("session")
        .about("Inspect or clear the stored session")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show the signed-in user"))
        .subcommand(Command::new("logout").about("Remove the stored session"))
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("floralbot")
        .about("FloralBot account signup")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Auth API base URL, example: https://api.floralbot.dev")
                .env(ENV_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Where the session is stored")
                .env(ENV_SESSION_FILE)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_MS)
                .long("timeout-ms")
                .help("Timeout for each API request, in milliseconds")
                .env(ENV_TIMEOUT_MS)
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .subcommand(signup_command())
        .subcommand(age_command())
        .subcommand(session_command());

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 9] = [
        ENV_API_BASE_URL,
        ENV_SESSION_FILE,
        ENV_TIMEOUT_MS,
        logging::ENV_LOG_LEVEL,
        "FLORALBOT_NAME",
        "FLORALBOT_DATE_OF_BIRTH",
        "FLORALBOT_GENDER",
        "FLORALBOT_EMAIL",
        "FLORALBOT_PASSWORD",
    ];

    fn without_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(ENV_VARS.map(|key| (key, None::<&str>)), f);
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "floralbot");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "FloralBot account signup"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_signup_args() {
        without_env(|| {
            let matches = new().get_matches_from(vec![
                "floralbot",
                "--api-url",
                "https://api.floralbot.dev",
                "signup",
                "--name",
                "Maria",
                "--dob",
                "1990-03-15",
                "--gender",
                "Feminino",
                "--email",
                "maria@example.com",
                "--password",
                "secret",
            ]);

            assert_eq!(
                matches.get_one::<String>(ARG_API_URL).cloned(),
                Some("https://api.floralbot.dev".to_string())
            );
            let sub = matches.subcommand_matches("signup").unwrap();
            assert_eq!(
                sub.get_one::<String>(ARG_DATE_OF_BIRTH).cloned(),
                Some("1990-03-15".to_string())
            );
            assert_eq!(sub.get_one::<Gender>(ARG_GENDER).copied(), Some(Gender::Female));
        });
    }

    #[test]
    fn test_signup_fields_default_to_empty() {
        without_env(|| {
            let matches = new().get_matches_from(vec!["floralbot", "signup"]);
            let sub = matches.subcommand_matches("signup").unwrap();
            assert_eq!(sub.get_one::<String>(ARG_NAME).map(String::as_str), Some(""));
            assert_eq!(sub.get_one::<Gender>(ARG_GENDER), None);
        });
    }

    #[test]
    fn test_invalid_gender_is_rejected() {
        without_env(|| {
            let result =
                new().try_get_matches_from(vec!["floralbot", "signup", "--gender", "other"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                (ENV_API_BASE_URL, Some("https://api.floralbot.dev")),
                (ENV_SESSION_FILE, Some("/tmp/floralbot.json")),
                (ENV_TIMEOUT_MS, Some("2500")),
                (logging::ENV_LOG_LEVEL, Some("info")),
                ("FLORALBOT_PASSWORD", Some("from-env")),
            ],
            || {
                let matches = new().get_matches_from(vec!["floralbot", "signup"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_SESSION_FILE).cloned(),
                    Some("/tmp/floralbot.json".to_string())
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT_MS).copied(), Some(2500));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                let sub = matches.subcommand_matches("signup").unwrap();
                assert_eq!(
                    sub.get_one::<String>(ARG_PASSWORD).cloned(),
                    Some("from-env".to_string())
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            without_env(|| {
                let mut args = vec!["floralbot".to_string(), "age".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(u8::try_from(index).unwrap())
                );
            });
        }
    }

    #[test]
    fn test_session_requires_subcommand() {
        without_env(|| {
            assert!(new()
                .try_get_matches_from(vec!["floralbot", "session"])
                .is_err());
            let matches = new().get_matches_from(vec!["floralbot", "session", "logout"]);
            let sub = matches.subcommand_matches("session").unwrap();
            assert_eq!(sub.subcommand_name(), Some("logout"));
        });
    }
}

use crate::error::MissingConfigurationError;
use log::info;
use std::collections::HashMap;
use std::env;

const ENV_PREFIX: &str = "KAFKA_";
const USERNAME_VAR: &str = "KAFKA_SASL_JAAS_USERNAME";
const PASSWORD_VAR: &str = "KAFKA_SASL_JAAS_PASSWORD";

const PLAIN_LOGIN_MODULE: &str = "org.apache.kafka.common.security.plain.PlainLoginModule";
const SCRAM_LOGIN_MODULE: &str = "org.apache.kafka.common.security.scram.ScramLoginModule";

/// Kafka client settings assembled from the environment, keyed by the
/// dotted names the client expects (`bootstrap.servers`, `sasl.mechanism`, ...).
#[derive(Debug)]
pub struct KafkaGitopsConfig {
    config: HashMap<String, String>,
}

impl KafkaGitopsConfig {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.config.iter()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }
}

/// Builds the Kafka client configuration from the process environment.
///
/// Every `KAFKA_`-prefixed variable becomes a config entry (prefix stripped,
/// underscores to dots, lowercased), except the two reserved credential
/// variables `KAFKA_SASL_JAAS_USERNAME` and `KAFKA_SASL_JAAS_PASSWORD`,
/// which are turned into a `sasl.jaas.config` login string instead.
pub fn load() -> Result<KafkaGitopsConfig, MissingConfigurationError> {
    load_from(env::vars())
}

pub(crate) fn load_from(
    environment: impl IntoIterator<Item = (String, String)>,
) -> Result<KafkaGitopsConfig, MissingConfigurationError> {
    let mut config = HashMap::new();
    let mut username = None;
    let mut password = None;

    for (name, value) in environment {
        if name == USERNAME_VAR {
            username = Some(value);
        } else if name == PASSWORD_VAR {
            password = Some(value);
        } else if let Some(suffix) = name.strip_prefix(ENV_PREFIX) {
            config.insert(suffix.replace('_', ".").to_lowercase(), value);
        }
    }

    fill_defaults(&mut config);
    handle_authentication(username, password, &mut config)?;

    info!("Kafka config: {:?}", config);

    Ok(KafkaGitopsConfig { config })
}

fn fill_defaults(config: &mut HashMap<String, String>) {
    if !config.contains_key("bootstrap.servers") {
        config.insert("bootstrap.servers".to_string(), "localhost:9092".to_string());
    }

    if !config.contains_key("client.id") {
        config.insert("client.id".to_string(), "kafka-gitops".to_string());
    }
}

fn handle_authentication(
    username: Option<String>,
    password: Option<String>,
    config: &mut HashMap<String, String>,
) -> Result<(), MissingConfigurationError> {
    match (username, password) {
        (Some(username), Some(password)) => {
            let mechanism = config
                .get("sasl.mechanism")
                .ok_or_else(|| MissingConfigurationError::new("KAFKA_SASL_MECHANISM"))?;

            let login_module = match mechanism.as_str() {
                "PLAIN" => PLAIN_LOGIN_MODULE,
                "SCRAM-SHA-256" | "SCRAM-SHA-512" => SCRAM_LOGIN_MODULE,
                _ => return Err(MissingConfigurationError::new("KAFKA_SASL_MECHANISM")),
            };

            // Values are inserted verbatim; quotes or backslashes in the
            // credentials will produce a malformed JAAS string.
            let jaas =
                format!("{login_module} required username=\"{username}\" password=\"{password}\";");
            config.insert("sasl.jaas.config".to_string(), jaas);
            Ok(())
        }
        (Some(_), None) => Err(MissingConfigurationError::new(PASSWORD_VAR)),
        (None, Some(_)) => Err(MissingConfigurationError::new(USERNAME_VAR)),
        (None, None) => Ok(()),
    }
}
